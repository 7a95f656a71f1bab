use alloc::vec::Vec;
use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::*;

/// Mine positions and the proximity counts derived from them.
///
/// Each cell holds [`MINE`] or the number of mines among its up-to-8
/// neighbours. A layout never changes once built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMineLayout")]
pub struct MineLayout {
    proximity: Array2<i8>,
    mine_count: CellCount,
}

/// Unchecked serialized form, only accepted when it rebuilds to itself.
#[derive(Deserialize)]
struct RawMineLayout {
    proximity: Array2<i8>,
    mine_count: CellCount,
}

impl TryFrom<RawMineLayout> for MineLayout {
    type Error = FieldError;

    fn try_from(raw: RawMineLayout) -> Result<Self> {
        let (rows, cols) = raw.proximity.dim();
        let (Ok(width), Ok(height)) = (Coord::try_from(cols), Coord::try_from(rows)) else {
            return Err(FieldError::InvalidBoardShape);
        };

        let mines: Vec<Coord2> = raw
            .proximity
            .indexed_iter()
            .filter(|&(_, &value)| value == MINE)
            .map(|((y, x), _)| (x as Coord, y as Coord))
            .collect();
        let layout = Self::from_mine_coords((width, height), &mines)?;

        if layout.mine_count != raw.mine_count || layout.proximity != raw.proximity {
            return Err(FieldError::InconsistentLayout);
        }
        Ok(layout)
    }
}

impl MineLayout {
    pub(crate) fn empty(size: Coord2) -> Self {
        Self {
            proximity: Array2::zeros(grid_shape(size)),
            mine_count: 0,
        }
    }

    /// Builds a layout with mines at exactly `mine_coords`; duplicates collapse.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let config = FieldConfig {
            width: size.0,
            height: size.1,
            mines: 0,
        };
        config.validate()?;

        let mut layout = Self::empty(size);
        for &coords in mine_coords {
            let coords = layout.validate_coords(coords)?;
            layout.place_mine(coords);
        }

        let cells = layout.total_cells();
        if layout.mine_count >= cells {
            return Err(FieldError::TooManyMines {
                mines: layout.mine_count,
                cells,
            });
        }

        Ok(layout)
    }

    /// Marks `coords` as a mine and bumps the count of every non-mine neighbour.
    ///
    /// Returns `false` when the cell already held a mine.
    pub(crate) fn place_mine(&mut self, coords: Coord2) -> bool {
        let cell = &mut self.proximity[coords.to_nd_index()];
        if *cell == MINE {
            return false;
        }
        *cell = MINE;
        self.mine_count += 1;

        for pos in self.iter_neighbors(coords) {
            let neighbor = &mut self.proximity[pos.to_nd_index()];
            if *neighbor != MINE {
                *neighbor += 1;
            }
        }
        true
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(FieldError::OutOfRange { coords, size })
        }
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.proximity.dim();
        (cols as Coord, rows as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        self.proximity.len() as CellCount
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    /// # Panics
    ///
    /// Panics if `coords` is outside the layout.
    pub fn proximity_at(&self, coords: Coord2) -> i8 {
        self.proximity[coords.to_nd_index()]
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self.proximity_at(coords) == MINE
    }

    /// Row-major `height x width` view of the proximity grid.
    pub fn proximity(&self) -> ArrayView2<'_, i8> {
        self.proximity.view()
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.proximity.iter_neighbors(coords)
    }
}
