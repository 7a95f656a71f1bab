use alloc::vec;
use alloc::vec::Vec;
use ndarray::{Array2, ArrayView2};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// A Minesweeper field: the mine layout plus what the player has uncovered.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawField")]
pub struct Field {
    layout: MineLayout,
    mask: Array2<CellMask>,
    state: FieldState,
}

/// Serialized form; the stored state is ignored and derived again.
#[derive(Deserialize)]
struct RawField {
    layout: MineLayout,
    mask: Array2<CellMask>,
}

impl TryFrom<RawField> for Field {
    type Error = FieldError;

    fn try_from(raw: RawField) -> Result<Self> {
        if raw.mask.dim() != raw.layout.proximity().dim() {
            return Err(FieldError::InvalidBoardShape);
        }

        let mut field = Self {
            layout: raw.layout,
            mask: raw.mask,
            state: FieldState::default(),
        };
        field.state = field.evaluate_state();
        Ok(field)
    }
}

impl Field {
    /// Creates a field with mines placed at random using `rng`.
    pub fn new<R: Rng + ?Sized>(config: FieldConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let layout = RandomMineGenerator::new(rng).generate(config);
        Ok(Self::from_layout(layout))
    }

    /// Creates a fully hidden field over an existing layout.
    pub fn from_layout(layout: MineLayout) -> Self {
        let size = layout.size();
        Self {
            layout,
            mask: Array2::default(grid_shape(size)),
            state: FieldState::default(),
        }
    }

    pub fn width(&self) -> Coord {
        self.size().0
    }

    pub fn height(&self) -> Coord {
        self.size().1
    }

    pub fn size(&self) -> Coord2 {
        self.layout.size()
    }

    pub fn state(&self) -> FieldState {
        self.state
    }

    pub fn is_completed(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn layout(&self) -> &MineLayout {
        &self.layout
    }

    pub fn mine_count(&self) -> CellCount {
        self.layout.mine_count()
    }

    /// Mines minus flags; negative when the player over-flags.
    pub fn mines_left(&self) -> isize {
        self.mine_count() as isize - self.flag_count() as isize
    }

    pub fn flag_count(&self) -> CellCount {
        self.count_mask(CellMask::Flagged)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.count_mask(CellMask::Revealed)
    }

    /// # Panics
    ///
    /// Panics if `coords` is outside the field.
    pub fn mask_at(&self, coords: Coord2) -> CellMask {
        self.mask[coords.to_nd_index()]
    }

    /// # Panics
    ///
    /// Panics if `coords` is outside the field.
    pub fn proximity_at(&self, coords: Coord2) -> i8 {
        self.layout.proximity_at(coords)
    }

    /// Row-major `height x width` view of the cell masks.
    pub fn mask(&self) -> ArrayView2<'_, CellMask> {
        self.mask.view()
    }

    /// Row-major `height x width` view of the proximity grid.
    pub fn proximity(&self) -> ArrayView2<'_, i8> {
        self.layout.proximity()
    }

    /// All coordinates in row-major order.
    pub fn iter_coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (width, height) = self.size();
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    /// Reveals the cell at `coords` and returns the resulting state.
    ///
    /// A safe cell opens together with its neighbours, and the opening keeps
    /// spreading through every zero-count cell it reaches. Sweeping a flagged
    /// or already revealed cell, or any cell of a completed field, changes
    /// nothing.
    pub fn sweep(&mut self, coords: Coord2) -> Result<FieldState> {
        let coords = self.layout.validate_coords(coords)?;

        if self.state.is_terminal() {
            return Ok(self.state);
        }

        match self.mask[coords.to_nd_index()] {
            CellMask::Flagged | CellMask::Revealed => return Ok(self.state),
            CellMask::Hidden => {}
        }

        if self.layout.contains_mine(coords) {
            log::debug!("Swept mine at {:?}", coords);
            self.mask[coords.to_nd_index()] = CellMask::Revealed;
        } else {
            let opened = self.flood_reveal(coords);
            log::trace!("Sweep at {:?} opened {} cells", coords, opened);
        }

        self.state = self.evaluate_state();
        if self.state.is_terminal() {
            log::debug!("Field finished as {:?}", self.state);
        }
        Ok(self.state)
    }

    /// Toggles a flag on a hidden cell. Revealed cells and completed fields
    /// are left untouched.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        use CellMask::*;
        use MarkOutcome::*;

        let coords = self.layout.validate_coords(coords)?;

        if self.state.is_terminal() {
            return Ok(NoChange);
        }

        let cell = &mut self.mask[coords.to_nd_index()];
        let outcome = match *cell {
            Hidden => {
                *cell = Flagged;
                Changed
            }
            Flagged => {
                *cell = Hidden;
                Changed
            }
            Revealed => NoChange,
        };
        log::trace!("Flag toggle at {:?}: {:?}", coords, outcome);
        Ok(outcome)
    }

    /// Picks a hidden safe cell uniformly at random.
    pub fn random_safe_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Coord2> {
        if self.is_completed() {
            return Err(FieldError::FieldCompleted);
        }

        let candidates: Vec<Coord2> = self
            .iter_coords()
            .filter(|&coords| {
                self.mask_at(coords) == CellMask::Hidden && !self.layout.contains_mine(coords)
            })
            .collect();

        if candidates.is_empty() {
            return Err(FieldError::NoSafeCell);
        }
        Ok(candidates[rng.random_range(0..candidates.len())])
    }

    /// Reveals `origin` and everything its opening reaches, returning how many
    /// cells changed from unrevealed to revealed.
    fn flood_reveal(&mut self, origin: Coord2) -> CellCount {
        let mut visited: Array2<bool> = Array2::default(self.mask.raw_dim());
        visited[origin.to_nd_index()] = true;
        let mut to_visit = vec![origin];
        let mut opened = 0;

        while let Some(coords) = to_visit.pop() {
            let cell = &mut self.mask[coords.to_nd_index()];
            if !cell.is_revealed() {
                *cell = CellMask::Revealed;
                opened += 1;
            }

            if coords != origin && self.layout.proximity_at(coords) != 0 {
                continue;
            }

            for pos in self.layout.iter_neighbors(coords) {
                let seen = &mut visited[pos.to_nd_index()];
                if !*seen && !self.layout.contains_mine(pos) {
                    *seen = true;
                    to_visit.push(pos);
                }
            }
        }

        opened
    }

    /// Derives the state from scratch: any revealed mine fails the field,
    /// otherwise it is solved once every safe cell is revealed.
    fn evaluate_state(&self) -> FieldState {
        let mut solved = true;
        for (mask, &proximity) in self.mask.iter().zip(self.layout.proximity().iter()) {
            match (mask.is_revealed(), proximity == MINE) {
                (true, true) => return FieldState::Failed,
                (false, false) => solved = false,
                _ => {}
            }
        }

        if solved {
            FieldState::Solved
        } else {
            FieldState::Unsolved
        }
    }

    fn count_mask(&self, wanted: CellMask) -> CellCount {
        self.mask.iter().filter(|&&mask| mask == wanted).count() as CellCount
    }
}
