use bfi::Interpreter;
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// A simple Brainfuck interpreter.
///
/// Runs the program in FILE, or a program read whole from stdin when FILE is
/// omitted. Program output goes to stdout; `,` reads bytes from stdin.
#[derive(Parser, Debug)]
#[command(name = "bfi", version, about)]
struct Cli {
    /// Program file to run; reads the program from stdin when omitted
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

/// Load the whole program before execution starts, either from a file or by
/// draining stdin to EOF.
fn load_program(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut source = String::new();
            io::stdin().lock().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let source = match load_program(cli.file.as_deref()) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("bfi: failed to read program: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Bracket validation happens at construction, before any execution.
    let mut interpreter = match Interpreter::new(&source) {
        Ok(interpreter) => interpreter,
        Err(e) => {
            eprintln!("bfi: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Runtime `,` input is a separate stream read from the program load;
    // when the program itself came from stdin, that stream is already at EOF.
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    if let Err(e) = interpreter.run(stdin, stdout) {
        eprintln!("bfi: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
