/// Which body, if any, is currently raised.
///
/// A single optional index — at most one body can ever be selected, so
/// nothing scans a flag set to find "the raised one".
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionState {
    selected: Option<usize>,
}

/// Outcome of a toggle. The caller applies the raise and camera side
/// effects; this type only records what changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Selected(usize),
    Deselected(usize),
    Replaced { old: usize, new: usize },
}

impl SelectionState {
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_selected(&self, idx: usize) -> bool {
        self.selected == Some(idx)
    }

    /// Toggle selection of `idx`: toggling the selected body clears it,
    /// selecting over an existing selection replaces it. Never leaves two
    /// bodies selected.
    pub fn toggle(&mut self, idx: usize) -> SelectionChange {
        match self.selected {
            Some(current) if current == idx => {
                self.selected = None;
                SelectionChange::Deselected(idx)
            }
            Some(old) => {
                self.selected = Some(idx);
                SelectionChange::Replaced { old, new: idx }
            }
            None => {
                self.selected = Some(idx);
                SelectionChange::Selected(idx)
            }
        }
    }
}
