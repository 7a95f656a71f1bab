use std::io::{self, BufRead, Write};

use minefield_core::{Field, FieldState};
use rand::Rng;

use crate::command::{Command, USAGE};

/// Runs the command loop until the field is completed, `exit` is entered or
/// `input` runs dry. Returns the final field state.
pub fn play<R, B, W>(
    field: &mut Field,
    rng: &mut R,
    input: B,
    output: &mut W,
) -> io::Result<FieldState>
where
    R: Rng + ?Sized,
    B: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    writeln!(output, "{field}")?;

    while !field.is_completed() {
        write!(output, "Enter command: ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            // input closed
            return Ok(field.state());
        };
        let command = match line?.parse::<Command>() {
            Ok(Command::Exit) => return Ok(field.state()),
            Ok(Command::Help) => {
                writeln!(output, "{USAGE}")?;
                continue;
            }
            Ok(command) => command,
            Err(err) => {
                writeln!(output, "{err}")?;
                writeln!(output, "{USAGE}")?;
                continue;
            }
        };

        if let Err(err) = command.apply(field, rng) {
            log::debug!("Rejected {:?}: {:?}", command, err);
            writeln!(output, "{err}")?;
            continue;
        }
        writeln!(output, "{field}")?;
    }

    match field.state() {
        FieldState::Solved => writeln!(output, "Solved")?,
        FieldState::Failed => writeln!(output, "Game over")?,
        FieldState::Unsolved => {}
    }
    Ok(field.state())
}
