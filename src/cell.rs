/// Displayed state of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellStatus {
    Alive,
    #[default]
    Dead,
}

impl CellStatus {
    pub fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Alive => Self::Dead,
            Self::Dead => Self::Alive,
        }
    }
}

impl From<bool> for CellStatus {
    fn from(alive: bool) -> Self {
        if alive {
            Self::Alive
        } else {
            Self::Dead
        }
    }
}

/// Current status plus the status staged for the next generation.
///
/// A freshly created cell has nothing staged; committing it is a no-op
/// until the next compute pass fills the staged slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    status: CellStatus,
    next: CellStatus,
    has_next: bool,
}

impl Cell {
    pub const fn new(status: CellStatus) -> Self {
        Self {
            status,
            next: CellStatus::Dead,
            has_next: false,
        }
    }

    pub fn status(&self) -> CellStatus {
        self.status
    }

    /// Returns `true` if the status actually changed.
    pub fn set_status(&mut self, status: CellStatus) -> bool {
        let changed = self.status != status;
        self.status = status;
        changed
    }

    /// `None` until a compute pass has run since the cell was created
    /// or last committed.
    pub fn next_status(&self) -> Option<CellStatus> {
        self.has_next.then_some(self.next)
    }

    pub fn stage(&mut self, next: CellStatus) {
        self.next = next;
        self.has_next = true;
    }

    /// Moves the staged status into the current one.
    ///
    /// Returns the new status only when it differs from the old one.
    pub(crate) fn commit(&mut self) -> Option<CellStatus> {
        if !std::mem::take(&mut self.has_next) {
            return None;
        }
        self.set_status(self.next).then_some(self.next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_has_nothing_staged() {
        let mut cell = Cell::default();
        assert_eq!(cell.status(), CellStatus::Dead);
        assert_eq!(cell.next_status(), None);
        assert_eq!(cell.commit(), None);
        assert_eq!(cell.status(), CellStatus::Dead);
    }

    #[test]
    fn commit_applies_staged_once() {
        let mut cell = Cell::new(CellStatus::Dead);
        cell.stage(CellStatus::Alive);
        assert_eq!(cell.next_status(), Some(CellStatus::Alive));
        assert_eq!(cell.commit(), Some(CellStatus::Alive));
        assert_eq!(cell.status(), CellStatus::Alive);
        assert_eq!(cell.next_status(), None);

        cell.stage(CellStatus::Alive);
        // unchanged status is applied silently
        assert_eq!(cell.commit(), None);
        assert_eq!(cell.status(), CellStatus::Alive);
    }

    #[test]
    fn toggle_flips_between_alive_and_dead() {
        assert_eq!(CellStatus::Alive.toggled(), CellStatus::Dead);
        assert_eq!(CellStatus::Dead.toggled(), CellStatus::Alive);
        assert!(CellStatus::from(true).is_alive());
        assert!(!CellStatus::from(false).is_alive());
    }
}
