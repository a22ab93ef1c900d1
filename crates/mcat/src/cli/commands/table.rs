//! Implementation of `mcat table`.

use std::{
    io::{self, BufWriter, ErrorKind, Write},
    process::ExitCode,
};

use mcat_formula::{Formula, TruthTable};

use crate::cli::args::TableCommand;

/// Prints the truth table of a formula.
///
/// Rows are written as they are evaluated; a reader closing the pipe early ends the command
/// successfully.
pub fn run(cmd: &TableCommand) -> ExitCode {
    let formula = match Formula::parse(&cmd.formula) {
        Ok(formula) => formula,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match write_table(&mut io::stdout().lock(), &formula) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: failed to write truth table: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Writes the table through a buffer.
fn write_table(out: &mut impl Write, formula: &Formula) -> io::Result<()> {
    let mut out = BufWriter::new(out);
    write!(out, "{}", TruthTable::new(formula))?;
    out.flush()
}
