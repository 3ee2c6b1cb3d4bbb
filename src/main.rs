// minicpp: scanner and recursive-descent recognizer for a simplified C++ subset

use std::fs;
use std::io::{self, BufRead};

use clap::Parser as ClapParser;

use minicpp::{Lexer, Parser, Token};

#[derive(ClapParser)]
#[command(name = "minicpp")]
#[command(about = "Recognizer for a simplified C++ subset", version)]
struct Args {
    /// Source file to check; reads stdin until an END line when omitted
    input: Option<String>,
}

fn main() {
    let args = Args::parse();

    let source = match read_source(&args) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut lexer = Lexer::new(&source);
    let tokens = match lexer.tokenize() {
        Ok(tokens) => tokens,
        Err(e) => {
            println!("Syntax error: {}", e);
            std::process::exit(1);
        }
    };

    println!("\nTokens:");
    for token in &tokens {
        if matches!(token, Token::Eof(_)) {
            continue;
        }
        println!("{}({})", token.category(), token.lexeme());
    }
    println!();

    let mut parser = Parser::new(tokens);
    match parser.parse_program() {
        Ok(()) => println!("Code accepted."),
        Err(e) => {
            println!("Syntax error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Read the program text: from the given file, or line by line from stdin
/// until a line containing only `END`.
fn read_source(args: &Args) -> io::Result<String> {
    match &args.input {
        Some(path) => fs::read_to_string(path),
        None => {
            println!("Enter your C++ code line by line. Type END to finish input:");
            let stdin = io::stdin();
            let mut lines = Vec::new();
            for line in stdin.lock().lines() {
                let line = line?;
                if line.trim() == "END" {
                    break;
                }
                lines.push(line);
            }
            Ok(lines.join("\n"))
        }
    }
}
