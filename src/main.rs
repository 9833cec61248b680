use std::{fs, path::PathBuf};

use abacus::{assign, evaluate, interpreter::environment::Environment};
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as ReplResult};

const HELP: &str = "The program evaluates arithmetic expressions over arbitrary-precision \
                    integers.\nIt supports +, -, *, / (truncating), parentheses, unary signs, \
                    and variables:\n    x = 5\n    x * (x + 1) / 2\nType /exit to quit.";

/// abacus is an interactive calculator for arbitrary-precision integer
/// arithmetic with variables.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate a file line by line instead of starting the interactive
    /// session.
    #[arg(short, long)]
    file: Option<PathBuf>,
}

/// What the driver should do with one processed line.
enum Outcome {
    /// Show this text to the user.
    Print(String),
    /// Nothing to show (blank line or successful assignment).
    Silent,
    /// The user asked to leave.
    Exit,
}

fn main() {
    let args = Args::parse();
    let mut env = Environment::new();

    if let Some(path) = args.file {
        let source = fs::read_to_string(&path).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      path.display());
            std::process::exit(1);
        });
        run_source(&source, &mut env);
    } else if let Err(e) = run_repl(&mut env) {
        eprintln!("Error: {e:?}");
    }
}

/// Feeds every line of a script through the same processing as the REPL.
fn run_source(source: &str, env: &mut Environment) {
    for line in source.lines() {
        match respond(line.trim(), env) {
            Outcome::Print(text) => println!("{text}"),
            Outcome::Silent => {},
            Outcome::Exit => {
                println!("Bye!");
                return;
            },
        }
    }
}

fn run_repl(env: &mut Environment) -> ReplResult<()> {
    let mut rl = DefaultEditor::new()?;
    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                match respond(line.trim(), env) {
                    Outcome::Print(text) => println!("{text}"),
                    Outcome::Silent => {},
                    Outcome::Exit => {
                        println!("Bye!");
                        break;
                    },
                }
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("Error: {err:?}");
                break;
            },
        }
    }
    Ok(())
}

/// Classifies one trimmed input line and produces its output.
///
/// Commands start with `/`; a line containing `=` is an assignment;
/// everything else is evaluated as an expression. Errors become their
/// user-facing message, never a crash, so one malformed line never ends the
/// session.
fn respond(line: &str, env: &mut Environment) -> Outcome {
    if line.is_empty() {
        return Outcome::Silent;
    }

    if let Some(command) = line.strip_prefix('/') {
        return match command {
            "exit" => Outcome::Exit,
            "help" => Outcome::Print(HELP.to_string()),
            _ => Outcome::Print("Unknown command".to_string()),
        };
    }

    if line.contains('=') {
        return match assign(line, env) {
            Ok(()) => Outcome::Silent,
            Err(e) => Outcome::Print(e.to_string()),
        };
    }

    match evaluate(line, env) {
        Ok(value) => Outcome::Print(value.to_string()),
        Err(e) => Outcome::Print(e.to_string()),
    }
}
