use core::fmt;

use crate::cell::glyph;
use crate::*;

impl Field {
    /// Glyph a text renderer shows for the cell at `coords`.
    ///
    /// # Panics
    ///
    /// Panics if `coords` is outside the field.
    pub fn glyph_at(&self, coords: Coord2) -> char {
        glyph(self.mask_at(coords), self.proximity_at(coords))
    }
}

/// One row per line, cells separated by a single space.
impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (width, height) = self.size();
        for y in 0..height {
            for x in 0..width {
                if x > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", self.glyph_at((x, y)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
