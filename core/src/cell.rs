use serde::{Deserialize, Serialize};

/// Proximity value marking a mine.
pub const MINE: i8 = -1;

/// Player-visible state of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellMask {
    Hidden,
    Revealed,
    Flagged,
}

impl CellMask {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }
}

impl Default for CellMask {
    fn default() -> Self {
        Self::Hidden
    }
}

/// Overall state of a field. `Solved` and `Failed` are terminal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldState {
    Unsolved,
    Solved,
    Failed,
}

impl FieldState {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Failed)
    }
}

impl Default for FieldState {
    fn default() -> Self {
        Self::Unsolved
    }
}

/// Whether a flag toggle changed the field.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// Glyph shown for a cell with the given mask and proximity.
pub(crate) fn glyph(mask: CellMask, proximity: i8) -> char {
    match mask {
        CellMask::Hidden => '_',
        CellMask::Flagged => 'P',
        CellMask::Revealed if proximity == MINE => '*',
        CellMask::Revealed if proximity == 0 => ' ',
        CellMask::Revealed => char::from_digit(proximity.unsigned_abs().into(), 10).unwrap_or('?'),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_follow_mask_first() {
        assert_eq!(glyph(CellMask::Hidden, MINE), '_');
        assert_eq!(glyph(CellMask::Flagged, 3), 'P');
        assert_eq!(glyph(CellMask::Revealed, MINE), '*');
        assert_eq!(glyph(CellMask::Revealed, 0), ' ');
        assert_eq!(glyph(CellMask::Revealed, 8), '8');
    }

    #[test]
    fn only_solved_and_failed_are_terminal() {
        assert!(!FieldState::Unsolved.is_terminal());
        assert!(FieldState::Solved.is_terminal());
        assert!(FieldState::Failed.is_terminal());
        assert_eq!(FieldState::default(), FieldState::Unsolved);
    }

    #[test]
    fn only_changed_marks_report_updates() {
        assert!(MarkOutcome::Changed.has_update());
        assert!(!MarkOutcome::NoChange.has_update());
    }

    #[test]
    fn state_serializes_by_name() {
        assert_eq!(
            serde_json::to_string(&FieldState::Failed).unwrap(),
            "\"Failed\""
        );
        assert_eq!(
            serde_json::from_str::<CellMask>("\"Flagged\"").unwrap(),
            CellMask::Flagged
        );
    }
}
