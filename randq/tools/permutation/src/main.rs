#![forbid(unsafe_code)]

use std::io::{self, BufRead, Write};

use clap::Parser;
use log::{debug, LevelFilter};
use rand::Rng;
use randq::RandomizedQueue;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

/// Prints K tokens chosen uniformly at random from standard input.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// How many tokens to print.
    #[arg(default_value_t = 3)]
    k: usize,
    /// Log more.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Reads whitespace-delimited tokens from `input` and writes `k` of them,
/// chosen without repetition, to `out`, one per line.
///
/// # Arguments
///
/// * `input` - token source, read to the end.
/// * `k` - must not exceed the number of tokens read.
/// * `rng` - source of the random choices.
/// * `out` - destination of the chosen tokens.
fn sample_tokens<I, R, W>(
    input: I,
    k: usize,
    rng: R,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>>
where
    I: BufRead,
    R: Rng,
    W: Write,
{
    let mut queue = RandomizedQueue::with_rng(rng);
    for line in input.lines() {
        queue.extend(line?.split_whitespace().map(String::from));
    }
    debug!("read {} tokens", queue.size());

    if k > queue.size() {
        return Err(format!("asked for {} tokens, only {} given", k, queue.size()).into());
    }
    for _ in 0..k {
        writeln!(out, "{}", queue.dequeue()?)?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let level = if args.verbose > 0 {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)?;

    sample_tokens(
        io::stdin().lock(),
        args.k,
        rand::thread_rng(),
        &mut io::stdout().lock(),
    )
}

////////////////////////////////////////////////////////////////////////////////
