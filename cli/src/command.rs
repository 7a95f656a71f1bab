use core::str::FromStr;

use minefield_core::{Coord, Coord2, Field, FieldState};
use rand::Rng;
use thiserror::Error;

pub const USAGE: &str = "\
Commands:
   sweep <x> <y>     - Sweep a location for mines.
   flag <x> <y>      - Flag a location as being a mine.
   auto              - Sweep a random safe location.
   help              - Show this message.
   exit              - Exit the game.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command `{0}`")]
    Unknown(String),
    #[error("`{0}` expects exactly two coordinates")]
    MissingCoords(&'static str),
    #[error("Invalid coordinate `{0}`")]
    InvalidCoord(String),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Sweep(Coord2),
    Flag(Coord2),
    Auto,
    Help,
    Exit,
}

impl Command {
    /// Applies a board command and returns the state afterwards.
    ///
    /// `Help` and `Exit` leave the field alone.
    pub fn apply<R: Rng + ?Sized>(
        self,
        field: &mut Field,
        rng: &mut R,
    ) -> minefield_core::Result<FieldState> {
        match self {
            Self::Sweep(coords) => field.sweep(coords),
            Self::Flag(coords) => {
                if !field.toggle_flag(coords)?.has_update() {
                    log::info!("Flag at {:?} left unchanged", coords);
                }
                Ok(field.state())
            }
            Self::Auto => {
                let coords = field.random_safe_cell(rng)?;
                log::info!("Auto sweeping {:?}", coords);
                field.sweep(coords)
            }
            Self::Help | Self::Exit => Ok(field.state()),
        }
    }
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut pieces = line.split_whitespace();
        let name = pieces.next().ok_or(ParseCommandError::Empty)?;

        let command = match name {
            "sweep" => Self::Sweep(parse_coords("sweep", &mut pieces)?),
            "flag" => Self::Flag(parse_coords("flag", &mut pieces)?),
            "auto" => Self::Auto,
            "help" => Self::Help,
            "exit" => Self::Exit,
            other => return Err(ParseCommandError::Unknown(other.to_owned())),
        };

        if pieces.next().is_some() {
            return Err(match command {
                Self::Sweep(_) => ParseCommandError::MissingCoords("sweep"),
                Self::Flag(_) => ParseCommandError::MissingCoords("flag"),
                _ => ParseCommandError::Unknown(line.trim().to_owned()),
            });
        }
        Ok(command)
    }
}

fn parse_coords<'a>(
    name: &'static str,
    pieces: &mut impl Iterator<Item = &'a str>,
) -> Result<Coord2, ParseCommandError> {
    let mut next_coord = || -> Result<Coord, ParseCommandError> {
        let piece = pieces.next().ok_or(ParseCommandError::MissingCoords(name))?;
        piece
            .parse()
            .map_err(|_| ParseCommandError::InvalidCoord(piece.to_owned()))
    };
    let x = next_coord()?;
    let y = next_coord()?;
    Ok((x, y))
}
