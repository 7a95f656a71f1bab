use ndarray::Array2;

/// Single coordinate axis used for field width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`, `x` being the column and `y` the row.
pub type Coord2 = (Coord, Coord);

/// Grids are stored row-major with shape `(height, width)`.
pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.1.into(), self.0.into()]
    }
}

/// Shape of a `width x height` grid as ndarray expects it.
pub fn grid_shape((width, height): Coord2) -> [usize; 2] {
    [height.into(), width.into()]
}

pub const fn cell_product(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, coords: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        let (rows, cols) = self.dim();
        // dimensions always come from a `Coord2`, so they fit
        let bounds = (cols as Coord, rows as Coord);
        NeighborIter::new(coords, bounds)
    }
}

/// Steps `value` by `slot - 1` (so slots 0, 1, 2 mean -1, 0, +1), staying below `limit`.
fn shifted(value: Coord, slot: u8, limit: Coord) -> Option<Coord> {
    let moved = (u16::from(value) + u16::from(slot)).checked_sub(1)?;
    Coord::try_from(moved).ok().filter(|&moved| moved < limit)
}

/// The up-to-8 grid neighbours of a cell, row by row, clipped at the edges.
///
/// Walks the 3x3 block around `center` and skips the centre itself.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    slot: u8,
}

impl NeighborIter {
    const CENTER_SLOT: u8 = 4;
    const SLOTS: u8 = 9;

    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            slot: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while self.slot < Self::SLOTS {
            let slot = self.slot;
            self.slot += 1;
            if slot == Self::CENTER_SLOT {
                continue;
            }

            let x = shifted(self.center.0, slot % 3, self.bounds.0);
            let y = shifted(self.center.1, slot / 3, self.bounds.1);
            if let (Some(x), Some(y)) = (x, y) {
                return Some((x, y));
            }
        }
        None
    }
}

impl core::iter::FusedIterator for NeighborIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn corner_has_three_neighbors() {
        let neighbors: Vec<_> = NeighborIter::new((0, 0), (3, 3)).collect();

        assert_eq!(neighbors, [(1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn interior_has_eight_neighbors() {
        assert_eq!(NeighborIter::new((1, 1), (3, 3)).count(), 8);
    }

    #[test]
    fn far_edge_of_largest_grid_stays_in_bounds() {
        let neighbors: Vec<_> = NeighborIter::new((254, 254), (255, 255)).collect();

        assert_eq!(neighbors, [(253, 253), (254, 253), (253, 254)]);
    }

    #[test]
    fn single_cell_has_no_neighbors() {
        assert_eq!(NeighborIter::new((0, 0), (1, 1)).count(), 0);
    }

    #[test]
    fn array_neighbors_respect_width_and_height() {
        let grid: Array2<u8> = Array2::zeros(grid_shape((4, 1)));
        let neighbors: Vec<_> = grid.iter_neighbors((3, 0)).collect();

        assert_eq!(neighbors, [(2, 0)]);
    }

    #[test]
    fn nd_index_is_row_major() {
        assert_eq!((3, 1).to_nd_index(), [1, 3]);
        assert_eq!(grid_shape((4, 2)), [2, 4]);
    }

    #[test]
    fn cell_product_saturates() {
        assert_eq!(cell_product(16, 8), 128);
        assert_eq!(cell_product(Coord::MAX, Coord::MAX), 65025);
    }
}
