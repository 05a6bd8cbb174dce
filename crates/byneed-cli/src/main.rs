use byneed_ast::pretty::print_expr;
use byneed_parser::parse_stmt;
use byneed_runtime::{eval, force, Env};
use clap::Parser;
use std::io::{self, BufRead};

#[derive(Parser, Debug)]
#[command(
    name = "byneed",
    version,
    about = "Call-by-need lambda calculus interpreter"
)]
struct Opt {
    /// One-line program
    #[arg(short = 'e', long = "eval")]
    eval: Option<String>,

    /// Dump the parsed expression as JSON instead of evaluating
    #[arg(long = "dump-ast", default_value_t = false)]
    dump_ast: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opt = Opt::parse();
    if let Some(code) = opt.eval {
        let ast = parse_stmt(&code).map_err(|e| format!("{e}"))?;
        if opt.dump_ast {
            println!("{}", serde_json::to_string_pretty(&ast)?);
            return Ok(());
        }
        let env = Env::with_builtins();
        let val = eval(&ast, &env)
            .and_then(|v| force(&v))
            .map_err(|e| format!("{e}"))?;
        println!("{val}");
        return Ok(());
    }
    repl()
}

// One statement per line. A statement's parse or evaluation error aborts only
// that statement; the environment persists across lines.
fn repl() -> Result<(), Box<dyn std::error::Error>> {
    let env = Env::with_builtins();
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let ast = match parse_stmt(&line) {
            Ok(ast) => ast,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };
        eprintln!(";; {}", print_expr(&ast));
        match eval(&ast, &env).and_then(|v| force(&v)) {
            Ok(val) => println!("{val}"),
            Err(e) => eprintln!("{e}"),
        }
    }
    Ok(())
}
