use std::{
    fs,
    io::{self, BufRead, Write},
    process, thread,
};

use clap::Parser;
use thoughtscript::{
    Interpreter, Value, interpreter::evaluator::function::core::BUILTIN_FUNCTIONS,
};

/// ThoughtScript is a small scripting language whose statements read like
/// thoughts.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells thoughtscript to read the script from the file at `contents`.
    #[arg(short, long)]
    file: bool,

    /// Starts the interactive shell. `contents` is ignored.
    #[arg(short, long)]
    repl: bool,

    /// Does not mirror `express` and `show` output to stdout; only the final
    /// value is printed.
    #[arg(short, long)]
    quiet: bool,

    /// Pipe mode prints the value of the last statement after the script ran.
    #[arg(short, long)]
    pipe_mode: bool,

    contents: Option<String>,
}

const EXAMPLE: &str = "\
think \"Alice\" as name
express \"Hello, \" + name

consider n from 1 to 3:
    if isEven(n):
        express n + \" is even\"
    otherwise:
        express n + \" is odd\"

define intention greet with who:
    express \"Hi \" + who

greet(\"World\")
remember 42 as \"answer\"
show memories";

/// Intentions may call each other up to `MAX_CALL_DEPTH` deep, which needs
/// more stack than the main thread gets.
const STACK_SIZE: usize = 128 * 1024 * 1024;

fn main() {
    let args = Args::parse();

    let code = thread::Builder::new().stack_size(STACK_SIZE)
                                     .spawn(move || run(args))
                                     .map_or(Some(1), |handle| handle.join().unwrap_or(Some(1)));

    if let Some(code) = code {
        process::exit(code);
    }
}

/// Runs the command line and returns the exit code to leave with, if any.
fn run(args: Args) -> Option<i32> {
    if args.repl {
        if let Err(e) = repl() {
            eprintln!("{e}");
            return Some(1);
        }
        return None;
    }

    let Some(contents) = args.contents else {
        eprintln!("Nothing to run. Pass a script, a file with --file, or start the shell with --repl.");
        return Some(2);
    };

    let script = if args.file {
        let Ok(script) = fs::read_to_string(&contents) else {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            return Some(1);
        };
        script
    } else {
        contents
    };

    let mut interpreter = Interpreter::new().with_echo(!args.quiet);
    match interpreter.interpret(&script) {
        Ok(value) if (args.pipe_mode || args.quiet) && !value.is_null() => println!("{value}"),
        Ok(_) => {},
        Err(e) => {
            eprintln!("{e}");
            if let Some(context) = e.context(&script) {
                eprintln!("{context}");
            }
            return Some(1);
        },
    }

    None
}

/// Runs the interactive shell until `.exit` or end of input.
///
/// A line ending in `:` opens a multi-line entry that is closed by an empty
/// line. Lines keep their leading whitespace so blocks indent as in files.
fn repl() -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut interpreter = Interpreter::new().with_echo(true);
    let mut history: Vec<String> = Vec::new();

    println!("ThoughtScript {}. Type .help for commands.", env!("CARGO_PKG_VERSION"));

    loop {
        prompt("think> ")?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let line = line.trim_end();

        match line.trim_start() {
            "" => continue,
            ".exit" => break,
            ".help" => {
                print_help();
                continue;
            },
            ".clear" => {
                interpreter = Interpreter::new().with_echo(true);
                println!("State cleared.");
                continue;
            },
            ".history" => {
                for (i, entry) in history.iter().enumerate() {
                    println!("{:>3}  {}", i + 1, entry.replace('\n', "\n     "));
                }
                continue;
            },
            ".example" => {
                println!("{EXAMPLE}\n");
                evaluate(&mut interpreter, EXAMPLE);
                continue;
            },
            _ => {},
        }

        let mut source = line.to_string();
        if line.ends_with(':') {
            loop {
                prompt("...   ")?;
                let Some(next) = lines.next().transpose()? else {
                    break;
                };
                let next = next.trim_end();
                if next.is_empty() {
                    break;
                }
                source.push('\n');
                source.push_str(next);
            }
        }

        evaluate(&mut interpreter, &source);
        history.push(source);
    }

    Ok(())
}

fn evaluate(interpreter: &mut Interpreter, source: &str) {
    match interpreter.interpret(source) {
        Ok(Value::Null) => {},
        Ok(value) => println!("→ {value}"),
        Err(e) => {
            println!("✗ Error: {e}");
            if let Some(context) = e.context(source) {
                println!("{context}");
            }
        },
    }
}

fn prompt(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "{text}")?;
    stdout.flush()
}

fn print_help() {
    println!("Commands:");
    println!("  .help     show this message");
    println!("  .clear    forget every variable, intention and memory");
    println!("  .history  list the entries of this session");
    println!("  .example  run a sample program");
    println!("  .exit     leave the shell");
    println!();
    println!("Statements: think, express, consider, if/otherwise, remember, show, define intention");
    println!("Builtins: {}", BUILTIN_FUNCTIONS.join(", "));
}
