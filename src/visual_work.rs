//! Visual manipulative work-state machine for addition.
//!
//! Models the counting-disk workspace: each active column holds two zones
//! of discrete unit counters seeded from the two addend digits. The learner
//! consolidates a column by moving disks into a single zone, and resolves a
//! full group of ten by explicitly carrying it into the next column. The
//! machine auto-advances past finished columns and flips to solved when
//! every active column is done.
//!
//! Invalid actions (wrong column, empty source zone, carrying below ten)
//! return a value equal to the input state rather than an error, so
//! presentation layers can detect "nothing happened" by comparison.

use serde::{Deserialize, Serialize};

use crate::addition::AdditionProblem;
use crate::place::Place;

/// One of the two disk-holding zones of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Zone {
    /// Addend 1's pile.
    Top,
    /// Addend 2's pile.
    Bottom,
}

impl Zone {
    /// The other zone of the same column.
    pub fn opposite(self) -> Zone {
        match self {
            Zone::Top => Zone::Bottom,
            Zone::Bottom => Zone::Top,
        }
    }
}

/// Disk counts for one column's two zones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualColumn {
    pub top: u8,
    pub bottom: u8,
}

impl VisualColumn {
    /// Disk count in a zone.
    pub fn zone(&self, zone: Zone) -> u8 {
        match zone {
            Zone::Top => self.top,
            Zone::Bottom => self.bottom,
        }
    }

    fn zone_mut(&mut self, zone: Zone) -> &mut u8 {
        match zone {
            Zone::Top => &mut self.top,
            Zone::Bottom => &mut self.bottom,
        }
    }

    /// Whether this column needs no further work: fewer than ten disks in
    /// total, all consolidated into a single zone.
    ///
    /// A freshly seeded column with both addend digits nonzero is not done;
    /// it takes at least one move to consolidate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use colarith::VisualColumn;
    ///
    /// assert!(VisualColumn { top: 0, bottom: 0 }.is_done());
    /// assert!(VisualColumn { top: 5, bottom: 0 }.is_done());
    /// assert!(!VisualColumn { top: 3, bottom: 4 }.is_done()); // split
    /// assert!(!VisualColumn { top: 10, bottom: 0 }.is_done()); // carry owed
    /// ```
    pub fn is_done(&self) -> bool {
        let total = self.top + self.bottom;
        total < 10 && (self.top == 0 || self.bottom == 0)
    }

    /// Whether a zone holds a full group of ten ready to carry.
    pub fn can_carry(&self, zone: Zone) -> bool {
        self.zone(zone) >= 10
    }
}

/// Disk positions and progress for one addition problem.
///
/// Created fresh per problem with [`VisualWorkState::initial`];
/// `active_column` equal to the active place count means every column is
/// done and the state is solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualWorkState {
    /// Per-column zones, indexed by place ordinal.
    pub columns: [VisualColumn; 4],
    /// Carries emitted out of the most-significant active column; each one
    /// is the extra leading digit beyond the problem's places.
    pub overflow: u8,
    /// Index of the column open for manipulation.
    pub active_column: usize,
    /// Terminal once true.
    pub solved: bool,
}

impl VisualWorkState {
    /// Seed a work-state from a problem's addend digits.
    ///
    /// Runs the advance-scan immediately, so low columns that start already
    /// done (one addend digit zero leaves a single consolidated zone) are
    /// skipped; a fully trivial problem yields `solved = true` outright.
    pub fn initial(problem: &AdditionProblem) -> Self {
        let mut columns = [VisualColumn::default(); 4];
        for place in Place::ALL {
            columns[place.index()] = VisualColumn {
                top: problem.addend1.digit(place),
                bottom: problem.addend2.digit(place),
            };
        }
        let mut work = Self {
            columns,
            overflow: 0,
            active_column: 0,
            solved: false,
        };
        work.advance_past_done(usize::from(problem.num_places));
        work
    }

    /// Move the active column forward past every done column; solved once
    /// it runs off the end.
    fn advance_past_done(&mut self, num_places: usize) {
        while self.active_column < num_places && self.columns[self.active_column].is_done() {
            self.active_column += 1;
        }
        if self.active_column >= num_places {
            self.solved = true;
        }
    }

    /// Move one disk from a zone to the opposite zone of the same column.
    ///
    /// No-op unless `place` is the active column and the source zone holds
    /// at least one disk; no-ops return a value equal to `self`.
    pub fn apply_move_disk(&self, place: Place, from: Zone, num_places: u8) -> Self {
        if place.index() != self.active_column {
            return *self;
        }
        let column = &self.columns[place.index()];
        if column.zone(from) == 0 {
            return *self;
        }
        let mut next = *self;
        let column = &mut next.columns[place.index()];
        *column.zone_mut(from) -= 1;
        *column.zone_mut(from.opposite()) += 1;
        next.advance_past_done(usize::from(num_places));
        next
    }

    /// Trade ten disks from a zone for one disk in the next column.
    ///
    /// No-op unless `place` is the active column and the zone holds at
    /// least ten disks. The carried disk always lands in the next column's
    /// top zone; from the most-significant active column it lands in
    /// `overflow` instead.
    pub fn apply_carry_out(&self, place: Place, zone: Zone, num_places: u8) -> Self {
        let index = place.index();
        if index != self.active_column {
            return *self;
        }
        if !self.columns[index].can_carry(zone) {
            return *self;
        }
        let mut next = *self;
        *next.columns[index].zone_mut(zone) -= 10;
        if index == usize::from(num_places) - 1 {
            next.overflow += 1;
        } else {
            next.columns[index + 1].top += 1;
        }
        next.advance_past_done(usize::from(num_places));
        next
    }
}
