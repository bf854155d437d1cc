use std::process::ExitCode;

use hebrewpp::{is_condition_header, Interpreter};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as ReplResult};

fn main() -> ExitCode {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();
    let outcome = if args.len() < 2 {
        run_repl().map_err(|err| format!("Error: {err}"))
    } else {
        run_script(&args[1])
    };
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("{msg}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr and only when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn run_script(filename: &str) -> Result<(), String> {
    let source = std::fs::read_to_string(filename)
        .map_err(|err| format!("{filename}: {err}. No such file or unreadable."))?;
    hebrewpp::run(&source).map_err(|err| format!("{}: {err}", err.kind()))
}

fn run_repl() -> ReplResult<()> {
    let mut rl = DefaultEditor::new()?;
    let mut interpreter = Interpreter::stdout();
    #[cfg(feature = "with-file-history")]
    if rl.load_history("history.txt").is_err() {
        println!("No previous history.");
    }
    loop {
        let line = match rl.readline(">> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        };
        rl.add_history_entry(line.as_str())?;
        // A condition header is incomplete without the action line under it.
        let source = if is_condition_header(&line) {
            match rl.readline(".. ") {
                Ok(action) => {
                    rl.add_history_entry(action.as_str())?;
                    format!("{line}\n    {}", action.trim_start())
                }
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err),
            }
        } else {
            line
        };
        if let Err(err) = interpreter.run(&source) {
            println!("{}: {err}", err.kind());
        }
    }
    #[cfg(feature = "with-file-history")]
    rl.save_history("history.txt")?;
    Ok(())
}
