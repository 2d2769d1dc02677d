//! Interactive evaluation loop
//!
//! Reads input strings with rustyline, evaluates each against one
//! parsed system and prints the colorized reduction trace. `!` stands
//! for the empty string. Ctrl-C or Ctrl-D ends the session.

use anyhow::Result;
use owo_colors::OwoColorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::engine::{evaluate, render, Evaluation, Verdict};
use crate::frontend::parser::system::PairingSystem;

/// Run the interactive loop until end of input.
pub fn run(system: &PairingSystem) -> Result<()> {
    let mut editor = DefaultEditor::new()?;

    loop {
        println!("Insert an input string (! for the empty string):");
        match editor.readline(">> ") {
            Ok(line) => {
                let _ = editor.add_history_entry(&line);
                let trimmed = line.trim();
                let input = if trimmed == "!" { "" } else { trimmed };
                match evaluate(system, input) {
                    Ok(evaluation) => print_evaluation(&evaluation),
                    Err(e) => eprintln!("error: {e}\n"),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

/// Print the step-by-step trace and the verdict for one evaluation.
///
/// Each trace line shows the working string with the matched pair
/// highlighted; the last line is the irreducible string.
pub fn print_evaluation(evaluation: &Evaluation) {
    println!("evaluating input...\n");

    for (i, step) in evaluation.steps.iter().enumerate() {
        let prefix = if i == 0 { "   " } else { "=> " };
        let before = render(&step.string[..step.position]);
        let pair = render(&step.string[step.position..step.position + 2]);
        let after = render(&step.string[step.position + 2..]);
        println!("{prefix}{before}{}{after}", pair.red().bold());
    }

    let prefix = if evaluation.steps.is_empty() { "   " } else { "=> " };
    let residual = render(&evaluation.final_string);
    println!("{prefix}{residual}\n");

    println!("no more rules applicable.");
    match evaluation.verdict {
        Verdict::Accepted => {
            println!(
                "the input is {} as '{residual}' is in A.\n",
                "accepted".bold()
            );
        }
        Verdict::Rejected => {
            println!(
                "the input is {} as '{residual}' is not in A.\n",
                "rejected".bold()
            );
        }
    }
}
