use std::io::{self, BufRead, Write};

use clap::Parser;
use mathex::{evaluate, interpreter::evaluator::core::Context};

/// The variable names bound, in order, to the positional command-line
/// values.
const VARIABLE_NAMES: [&str; 7] = ["a", "b", "c", "x", "y", "z", "w"];

/// mathex reads one arithmetic expression per line from standard input and
/// writes one numeric result per line to standard output.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The values bound, in order, to the variables a, b, c, x, y, z and w.
    #[arg(num_args = 7, required = true,
          value_names = ["A", "B", "C", "X", "Y", "Z", "W"])]
    values: Vec<f64>,
}

/// Runs the read/eval/print loop until end of input.
///
/// Every input line produces exactly one output line, flushed immediately so
/// a caller reading over a pipe never blocks: the evaluated value on
/// success, or `[FAIL]` followed by the original line when the line cannot
/// be evaluated. Per-line failures never terminate the loop.
fn run(context: &Context) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');

        match evaluate(line, context) {
            Ok(value) => writeln!(stdout, "{value}")?,
            Err(e) => {
                tracing::debug!("line '{line}' failed: {e}");
                writeln!(stdout, "[FAIL] {line}")?;
            },
        }

        stdout.flush()?;
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    let mut context = Context::new();
    for (name, value) in VARIABLE_NAMES.iter().zip(&args.values) {
        context.define(name, *value);
    }

    if let Err(e) = run(&context) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
