//  CALC.rs
//    by Lut99
//
//  Created:
//    18 Mar 2025, 10:22:31
//  Last edited:
//    24 Jul 2025, 09:55:14
//  Auto updated?
//    Yes
//
//  Description:
//!   Implements a small command-line calculator on top of the library, as
//!   a showcase of recursive grammars and error reporting.
//

use clap::Parser;
use log::{debug, info};
use morsel::branch::or;
use morsel::combinator::map;
use morsel::multi::{many, many1};
use morsel::prim::{eof, satisfy, token};
use morsel::rescue::error_when_failure;
use morsel::sequence::{between, both, left, pipe, right};
use morsel::{lazy, Parser as _, Reply, Stream as _, StrStream};


/***** HELPER FUNCTIONS *****/
/// Folds a head value and a list of operator/operand pairs into one value.
fn fold_ops(head: i64, tail: Vec<(char, i64)>) -> i64 {
    tail.into_iter().fold(head, |acc, (op, rhs)| match op {
        '+' => acc + rhs,
        '-' => acc - rhs,
        _ => acc * rhs,
    })
}





/***** GRAMMAR *****/
/// Parses any amount of whitespace.
fn ws<'s>() -> impl morsel::Parser<StrStream<'s>, Output = Vec<char>> { many(satisfy(|c: &char| c.is_whitespace())) }

/// Parses the given parser followed by any amount of whitespace.
fn lexeme<'s, P: morsel::Parser<StrStream<'s>>>(parser: P) -> impl morsel::Parser<StrStream<'s>, Output = P::Output> { left(parser, ws()) }

/// Parses an unsigned integer literal.
fn number<'s>() -> impl morsel::Parser<StrStream<'s>, Output = i64> {
    lexeme(map(many1(satisfy(|c: &char| c.is_ascii_digit())), |digits: Vec<char>| {
        digits.into_iter().fold(0i64, |acc, c| 10 * acc + (c as i64 - '0' as i64))
    }))
}

/// Parses a number or a parenthesized expression.
fn factor<'s>() -> impl morsel::Parser<StrStream<'s>, Output = i64> {
    or(number(), between(lazy!(expr), lexeme(token('(')), lexeme(token(')'))))
}

/// Parses a product of factors.
fn term<'s>() -> impl morsel::Parser<StrStream<'s>, Output = i64> {
    pipe((factor(), many(both(lexeme(satisfy(|c: &char| *c == '*')), factor()))), fold_ops)
}

/// Parses a sum or difference of terms.
fn expr<'s>() -> impl morsel::Parser<StrStream<'s>, Output = i64> {
    pipe((term(), many(both(lexeme(satisfy(|c: &char| *c == '+' || *c == '-')), term()))), fold_ops)
}

/// Parses a whole input line as an expression.
fn calc<'s>() -> impl morsel::Parser<StrStream<'s>, Output = i64> {
    right(ws(), left(expr(), error_when_failure(eof(), "unexpected trailing input")))
}





/***** ARGUMENTS *****/
/// Defines arguments to the calculator.
#[derive(Debug, Parser)]
pub struct Arguments {
    /// If given, enables more verbose logging.
    #[clap(long, global = true)]
    debug: bool,

    /// The expression(s) to evaluate, one result per expression.
    #[clap(name = "EXPRESSIONS")]
    exprs: Vec<String>,
}





/***** ENTRYPOINT *****/
fn main() {
    // Parse the CLI arguments
    let args = Arguments::parse();

    // Setup the logger
    let mut builder = env_logger::Builder::new();
    builder.filter_level(if args.debug { log::LevelFilter::Debug } else { log::LevelFilter::Warn });
    if let Err(err) = builder.try_init() {
        eprintln!("WARNING: Failed to setup logger: {err} (no logging for this session)");
    }
    info!("calc v{}", env!("CARGO_PKG_VERSION"));

    // Evaluate all expressions in order
    let mut exit_code = 0;
    for input in &args.exprs {
        debug!("evaluating {input:?}");
        match calc().parse(StrStream::new(input)) {
            Reply::Success { value, .. } => println!("{input} = {value}"),
            Reply::Failure { rest, messages } => {
                eprintln!("ERROR: {input:?} is not an expression (no match at position {})", rest.position());
                for msg in messages {
                    eprintln!("  {msg}");
                }
                exit_code = 1;
            },
            Reply::Error { fatal, messages, .. } => {
                eprintln!("ERROR: {fatal}");
                for msg in messages {
                    eprintln!("  {msg}");
                }
                exit_code = 1;
            },
        }
    }
    std::process::exit(exit_code);
}
