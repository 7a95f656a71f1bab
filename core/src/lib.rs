//! Minesweeper field engine: mine placement, proximity counts, flood-fill
//! sweeping, flagging and completion tracking.
//!
//! Randomness is always supplied by the caller, so seeding the source gives
//! fully reproducible fields.
#![no_std]

extern crate alloc;
#[cfg(test)]
extern crate std;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use field::*;
pub use generator::*;
pub use layout::*;
pub use types::*;

mod cell;
mod display;
mod error;
mod field;
mod generator;
mod layout;
mod types;

/// The three seed parameters of a field.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub width: Coord,
    pub height: Coord,
    pub mines: CellCount,
}

impl FieldConfig {
    pub fn new(width: Coord, height: Coord, mines: CellCount) -> Result<Self> {
        let config = Self {
            width,
            height,
            mines,
        };
        config.validate()?;
        Ok(config)
    }

    /// Requires a non-empty grid with at least one cell left free of mines.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(FieldError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }

        let cells = self.total_cells();
        if self.mines >= cells {
            return Err(FieldError::TooManyMines {
                mines: self.mines,
                cells,
            });
        }

        Ok(())
    }

    pub const fn size(&self) -> Coord2 {
        (self.width, self.height)
    }

    pub const fn total_cells(&self) -> CellCount {
        cell_product(self.width, self.height)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}
