#![forbid(unsafe_code)]

use std::io::{self, Write};

use clap::Parser;
use log::LevelFilter;
use perc::PercolationStats;
use rand::{rngs::StdRng, SeedableRng};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

/// Estimates the percolation threshold of an N x N grid.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Grid edge length.
    n: usize,
    /// Number of independent trials.
    trials: usize,
    /// Seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,
    /// Log more (-v for info, -vv for every trial).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

fn report<W: Write>(stats: &PercolationStats, out: &mut W) -> io::Result<()> {
    writeln!(out, "mean = {}", stats.mean())?;
    writeln!(out, "stddev = {}", stats.stddev())?;
    writeln!(
        out,
        "95% conf int = [{}, {}]",
        stats.confidence_lo(),
        stats.confidence_hi()
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    TermLogger::init(
        level(args.verbose),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let mut stats = PercolationStats::new(args.n, args.trials)?;
    match args.seed {
        Some(seed) => stats.run_with(&mut StdRng::seed_from_u64(seed))?,
        None => stats.run()?,
    }
    report(&stats, &mut io::stdout().lock())?;

    Ok(())
}

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(stats: &PercolationStats) -> String {
        let mut out = Vec::new();
        report(stats, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn three_line_report() {
        let mut stats = PercolationStats::new(1, 4).unwrap();
        stats.run_with(&mut StdRng::seed_from_u64(0)).unwrap();
        let half_width = 1.96 / 2.0;
        assert_eq!(
            render(&stats),
            format!(
                "mean = 1\nstddev = 0\n95% conf int = [{}, {}]\n",
                1.0 - half_width,
                1.0 + half_width
            )
        );
    }

    #[test]
    fn report_parses_back() {
        let mut stats = PercolationStats::new(20, 10).unwrap();
        stats.run_with(&mut StdRng::seed_from_u64(5)).unwrap();
        let text = render(&stats);
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);

        let mean = lines[0].strip_prefix("mean = ").unwrap();
        assert_eq!(mean.parse::<f64>().unwrap(), stats.mean());
        let stddev = lines[1].strip_prefix("stddev = ").unwrap();
        assert_eq!(stddev.parse::<f64>().unwrap(), stats.stddev());

        let bounds = lines[2]
            .strip_prefix("95% conf int = [")
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap()
            .split(", ")
            .map(|b| b.parse::<f64>().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(bounds, vec![stats.confidence_lo(), stats.confidence_hi()]);
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(level(0), LevelFilter::Warn);
        assert_eq!(level(1), LevelFilter::Info);
        assert_eq!(level(5), LevelFilter::Debug);
    }

    #[test]
    fn parses_arguments() {
        let args =
            Args::try_parse_from(["stats-runner", "200", "100", "--seed", "7", "-vv"]).unwrap();
        assert_eq!(
            (args.n, args.trials, args.seed, args.verbose),
            (200, 100, Some(7), 2)
        );
        assert!(Args::try_parse_from(["stats-runner", "200"]).is_err());
    }
}
