use thiserror::Error;

use crate::{CellCount, Coord, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Invalid field dimensions {width}x{height}, both must be positive")]
    InvalidDimensions { width: Coord, height: Coord },
    #[error("Too many mines, requested {mines} but the field only has {cells} cells")]
    TooManyMines { mines: CellCount, cells: CellCount },
    #[error("Coordinates {coords:?} are outside a field of size {size:?}")]
    OutOfRange { coords: Coord2, size: Coord2 },
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Proximity counts do not match the mine positions")]
    InconsistentLayout,
    #[error("Field is already completed")]
    FieldCompleted,
    #[error("No hidden safe cell left")]
    NoSafeCell,
}

/// Coarse classification of a [`FieldError`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    OutOfRange,
    Precondition,
}

impl FieldError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDimensions { .. }
            | Self::TooManyMines { .. }
            | Self::InvalidBoardShape
            | Self::InconsistentLayout => ErrorKind::InvalidArgument,
            Self::OutOfRange { .. } => ErrorKind::OutOfRange,
            Self::FieldCompleted | Self::NoSafeCell => ErrorKind::Precondition,
        }
    }
}

pub type Result<T> = core::result::Result<T, FieldError>;
