use colarith::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

const SAMPLES: usize = 200;

/// Addends reassembled from place digits and summed must match the
/// solution's answer digits (with the final carry as extra leading digit).
#[test]
fn test_addition_sum_identity_sampled() {
    let mut rng = SmallRng::seed_from_u64(0xC0FFEE);
    for num_places in 1..=4u8 {
        for num_carries in 0..=num_places {
            let difficulty = AdditionDifficulty {
                num_places,
                num_carries,
            };
            for _ in 0..SAMPLES {
                let problem = generate_addition_problem(difficulty, &mut rng).unwrap();
                let solution = compute_solution(&problem);

                let mut answer = u32::from(solution.final_carry_out);
                for i in (0..usize::from(num_places)).rev() {
                    answer = answer * 10 + u32::from(solution.columns[i].answer_digit);
                }
                assert_eq!(
                    answer,
                    u32::from(problem.addend1.to_number()) + u32::from(problem.addend2.to_number())
                );
            }
        }
    }
}

/// The first `num_carries` active columns overflow and the rest do not.
#[test]
fn test_forced_carries_land_on_low_columns() {
    let mut rng = SmallRng::seed_from_u64(1);
    for num_places in 1..=4u8 {
        for num_carries in 0..=num_places {
            let difficulty = AdditionDifficulty {
                num_places,
                num_carries,
            };
            for _ in 0..SAMPLES {
                let problem = generate_addition_problem(difficulty, &mut rng).unwrap();
                for i in 0..usize::from(num_places) {
                    let place = Place::ALL[i];
                    let pair_sum = problem.addend1.digit(place) + problem.addend2.digit(place);
                    if i < usize::from(num_carries) {
                        assert!(pair_sum >= 10, "column {} should carry", i);
                    } else {
                        assert!(pair_sum <= 9, "column {} should not carry", i);
                    }
                }
            }
        }
    }
}

/// The sum gains an extra digit exactly when every column carries.
#[test]
fn test_final_carry_out_tracks_carry_count() {
    let mut rng = SmallRng::seed_from_u64(2);
    for num_places in 1..=4u8 {
        for num_carries in 0..=num_places {
            let difficulty = AdditionDifficulty {
                num_places,
                num_carries,
            };
            for _ in 0..SAMPLES {
                let problem = generate_addition_problem(difficulty, &mut rng).unwrap();
                let solution = compute_solution(&problem);
                if num_carries == num_places {
                    assert_eq!(solution.final_carry_out, 1);
                } else {
                    assert_eq!(solution.final_carry_out, 0);
                }
            }
        }
    }
}

/// Leading digits are nonzero so problems visually have the requested width.
#[test]
fn test_addition_leading_digits_nonzero() {
    let mut rng = SmallRng::seed_from_u64(3);
    for num_places in 1..=4u8 {
        for num_carries in 0..=num_places {
            let difficulty = AdditionDifficulty {
                num_places,
                num_carries,
            };
            for _ in 0..SAMPLES {
                let problem = generate_addition_problem(difficulty, &mut rng).unwrap();
                let leading = Place::ALL[usize::from(num_places) - 1];
                assert!(problem.addend1.digit(leading) >= 1);
                assert!(problem.addend2.digit(leading) >= 1);
                for place in &Place::ALL[usize::from(num_places)..] {
                    assert_eq!(problem.addend1.digit(*place), 0);
                    assert_eq!(problem.addend2.digit(*place), 0);
                }
            }
        }
    }
}

/// Generated subtractions never go negative, and the answer digits
/// reassemble to exactly `minuend - subtrahend`.
#[test]
fn test_subtraction_difference_identity_sampled() {
    let mut rng = SmallRng::seed_from_u64(4);
    for num_places in 1..=4u8 {
        for num_borrows in 0..num_places {
            let difficulty = SubtractionDifficulty {
                num_places,
                num_borrows,
            };
            for _ in 0..SAMPLES {
                let problem = generate_subtraction_problem(difficulty, &mut rng).unwrap();
                assert!(problem.minuend.to_number() >= problem.subtrahend.to_number());

                let solution = compute_subtraction_solution(&problem);
                let mut answer = 0u32;
                for i in (0..usize::from(num_places)).rev() {
                    answer = answer * 10 + u32::from(solution.columns[i].answer_digit);
                }
                assert_eq!(
                    answer,
                    u32::from(problem.minuend.to_number())
                        - u32::from(problem.subtrahend.to_number())
                );
            }
        }
    }
}

/// Borrows form one contiguous run starting at the ones column, stay within
/// the configured ceiling, and never come out of the leading column.
#[test]
fn test_subtraction_borrows_contiguous_and_bounded() {
    let mut rng = SmallRng::seed_from_u64(5);
    for num_places in 1..=4u8 {
        for num_borrows in 0..num_places {
            let difficulty = SubtractionDifficulty {
                num_places,
                num_borrows,
            };
            for _ in 0..SAMPLES {
                let problem = generate_subtraction_problem(difficulty, &mut rng).unwrap();
                let solution = compute_subtraction_solution(&problem);

                let borrowing: Vec<usize> = (0..usize::from(num_places))
                    .filter(|&i| solution.columns[i].borrow_out == 1)
                    .collect();

                assert!(borrowing.len() <= usize::from(num_borrows));
                // Contiguous from the ones place: borrowers are exactly 0..k.
                for (expected, actual) in borrowing.iter().enumerate() {
                    assert_eq!(*actual, expected);
                }
                assert_eq!(
                    solution.columns[usize::from(num_places) - 1].borrow_out,
                    0,
                    "leading column must never borrow"
                );
            }
        }
    }
}

/// Every subtraction digit stays in range and inactive places stay zero.
#[test]
fn test_subtraction_digits_in_range() {
    let mut rng = SmallRng::seed_from_u64(6);
    for num_places in 1..=4u8 {
        for num_borrows in 0..num_places {
            let difficulty = SubtractionDifficulty {
                num_places,
                num_borrows,
            };
            for _ in 0..SAMPLES {
                let problem = generate_subtraction_problem(difficulty, &mut rng).unwrap();
                for place in Place::ALL {
                    assert!(problem.minuend.digit(place) <= 9);
                    assert!(problem.subtrahend.digit(place) <= 9);
                    if place.index() >= usize::from(num_places) {
                        assert_eq!(problem.minuend.digit(place), 0);
                        assert_eq!(problem.subtrahend.digit(place), 0);
                    }
                }
                let leading = Place::ALL[usize::from(num_places) - 1];
                assert!(problem.minuend.digit(leading) >= 1);
                assert!(problem.subtrahend.digit(leading) >= 1);
            }
        }
    }
}

/// Same seed, same problems: generation is fully determined by the source.
#[test]
fn test_generation_is_replayable() {
    let difficulty = AdditionDifficulty {
        num_places: 4,
        num_carries: 2,
    };
    let mut first = SmallRng::seed_from_u64(99);
    let mut second = SmallRng::seed_from_u64(99);
    for _ in 0..20 {
        assert_eq!(
            generate_addition_problem(difficulty, &mut first).unwrap(),
            generate_addition_problem(difficulty, &mut second).unwrap()
        );
    }
}

/// Snapshots of problems and solutions serialize cleanly for UI transport.
#[test]
fn test_solution_snapshot_serializes() {
    let problem = AdditionProblem {
        addend1: PlaceValues::decompose(342),
        addend2: PlaceValues::decompose(189),
        num_places: 3,
    };
    let solution = compute_solution(&problem);
    let json = serde_json::to_string(&solution).unwrap();
    let back: AdditionSolution = serde_json::from_str(&json).unwrap();
    assert_eq!(back, solution);
}
