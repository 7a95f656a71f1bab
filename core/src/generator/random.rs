use alloc::vec::Vec;
use rand::Rng;

use super::*;

/// Purely random placement drawing from a caller-supplied source.
///
/// Every mine lands on a cell chosen uniformly among the cells that are still
/// free, so near-full fields cost no more than sparse ones.
pub struct RandomMineGenerator<'a, R: Rng + ?Sized> {
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> RandomMineGenerator<'a, R> {
    pub fn new(rng: &'a mut R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + ?Sized> MineGenerator for RandomMineGenerator<'_, R> {
    fn generate(self, config: FieldConfig) -> MineLayout {
        let total_cells = config.total_cells();
        let mut mines = config.mines;
        if total_cells > 0 && mines >= total_cells {
            log::warn!(
                "Field cannot hold {} mines in {} cells, placing {} instead",
                mines,
                total_cells,
                total_cells - 1
            );
            mines = total_cells - 1;
        }

        let rng = self.rng;
        let mut layout = MineLayout::empty(config.size());
        let mut free_cells: Vec<Coord2> = (0..config.height)
            .flat_map(|y| (0..config.width).map(move |x| (x, y)))
            .collect();

        for _ in 0..mines {
            if free_cells.is_empty() {
                break;
            }
            let pick = rng.random_range(0..free_cells.len());
            let coords = free_cells.swap_remove(pick);
            layout.place_mine(coords);
        }

        if layout.mine_count() != mines {
            log::warn!(
                "Generated layout count mismatch, actual: {}, requested: {}",
                layout.mine_count(),
                mines
            );
        }
        log::debug!(
            "Generated {}x{} layout with {} mines",
            config.width,
            config.height,
            layout.mine_count()
        );
        layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn generate(width: Coord, height: Coord, mines: CellCount, seed: u64) -> MineLayout {
        let mut rng = SmallRng::seed_from_u64(seed);
        let config = FieldConfig {
            width,
            height,
            mines,
        };
        RandomMineGenerator::new(&mut rng).generate(config)
    }

    fn mines_around(layout: &MineLayout, coords: Coord2) -> i8 {
        layout
            .iter_neighbors(coords)
            .filter(|&pos| layout.contains_mine(pos))
            .count() as i8
    }

    #[test]
    fn same_seed_same_layout() {
        assert_eq!(generate(16, 8, 20, 7), generate(16, 8, 20, 7));
    }

    #[test]
    fn nearly_full_field_leaves_one_cell() {
        let layout = generate(10, 10, 99, 3);

        assert_eq!(layout.mine_count(), 99);
        assert_eq!(layout.safe_cell_count(), 1);
    }

    #[test]
    fn overfull_config_is_clamped() {
        let layout = generate(2, 2, 10, 0);

        assert_eq!(layout.mine_count(), 3);
    }

    #[test]
    fn every_cell_can_hold_a_mine() {
        let mut seen = [[false; 3]; 2];
        for seed in 0..200 {
            let layout = generate(3, 2, 1, seed);
            for (y, row) in seen.iter_mut().enumerate() {
                for (x, hit) in row.iter_mut().enumerate() {
                    *hit |= layout.contains_mine((x as Coord, y as Coord));
                }
            }
        }

        assert!(seen.iter().flatten().all(|&hit| hit));
    }

    proptest! {
        #[test]
        fn prop_exact_mine_count(
            width in 1u8..=24,
            height in 1u8..=24,
            density in 0.0f64..1.0,
            seed in any::<u64>(),
        ) {
            let cells = cell_product(width, height);
            let mines = ((cells - 1) as f64 * density) as CellCount;
            let layout = generate(width, height, mines, seed);

            let counted = layout.proximity().iter().filter(|&&value| value == MINE).count();
            prop_assert_eq!(layout.mine_count(), mines);
            prop_assert_eq!(counted, usize::from(mines));
        }

        #[test]
        fn prop_proximity_counts_neighbors(
            width in 1u8..=16,
            height in 1u8..=16,
            seed in any::<u64>(),
        ) {
            let mines = cell_product(width, height) / 4;
            let layout = generate(width, height, mines, seed);

            for y in 0..height {
                for x in 0..width {
                    let value = layout.proximity_at((x, y));
                    if value != MINE {
                        prop_assert!((0..=8).contains(&value));
                        prop_assert_eq!(value, mines_around(&layout, (x, y)));
                    }
                }
            }
        }
    }
}
