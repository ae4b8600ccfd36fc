use log::{debug, info};
use rand::Rng;

use crate::{grid::site_count, Error, Percolation, Result};

////////////////////////////////////////////////////////////////////////////////

/// Half-width multiplier of the 95% confidence interval.
pub const CONFIDENCE_95: f64 = 1.96;

/// Monte Carlo estimate of the percolation threshold of an `n x n` grid.
///
/// Every trial opens uniformly random sites of a fresh [`Percolation`] until
/// it percolates and records the fraction of open sites at that moment.
#[derive(Debug, Clone)]
pub struct PercolationStats {
    n: usize,
    thresholds: Vec<f64>,
}

impl PercolationStats {
    /// # Arguments
    ///
    /// * `n` - grid edge length.
    /// * `trials` - number of independent experiments.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSize`] if `n == 0` or `n * n` overflows,
    /// [`Error::InvalidTrials`] if `trials == 0`.
    pub fn new(n: usize, trials: usize) -> Result<Self> {
        site_count(n)?;
        if trials == 0 {
            return Err(Error::InvalidTrials);
        }
        Ok(Self {
            n,
            thresholds: vec![0.0; trials],
        })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    /// Recorded thresholds, one per trial. All zeros before the first run.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Runs every trial using the thread-local generator.
    pub fn run(&mut self) -> Result<()> {
        self.run_with(&mut rand::thread_rng())
    }

    /// Runs every trial, drawing sites from `rng`.
    pub fn run_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        let n = self.n;
        let sites = site_count(n)? as f64;
        for (trial, threshold) in self.thresholds.iter_mut().enumerate() {
            let mut grid = Percolation::new(n)?;
            while !grid.percolates() {
                grid.open(rng.gen_range(1..=n), rng.gen_range(1..=n))?;
            }
            *threshold = grid.number_of_open_sites() as f64 / sites;
            debug!("trial {trial}: threshold {threshold}");
        }

        info!(
            "{} trials on a {n}x{n} grid: mean {}, stddev {}",
            self.trials(),
            self.mean(),
            self.stddev()
        );
        Ok(())
    }

    pub fn mean(&self) -> f64 {
        mean(&self.thresholds)
    }

    /// Sample standard deviation. NaN when there is a single trial.
    pub fn stddev(&self) -> f64 {
        stddev(&self.thresholds)
    }

    /// Lower bound of the 95% confidence interval, `mean - 1.96 / sqrt(T)`.
    ///
    /// The half-width does not scale with [`stddev`](Self::stddev).
    pub fn confidence_lo(&self) -> f64 {
        self.mean() - self.half_width()
    }

    /// Upper bound of the 95% confidence interval, `mean + 1.96 / sqrt(T)`.
    pub fn confidence_hi(&self) -> f64 {
        self.mean() + self.half_width()
    }

    fn half_width(&self) -> f64 {
        CONFIDENCE_95 / (self.trials() as f64).sqrt()
    }
}

////////////////////////////////////////////////////////////////////////////////

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn stddev(values: &[f64]) -> f64 {
    let mu = mean(values);
    let sum_sq = values.iter().map(|v| (v - mu) * (v - mu)).sum::<f64>();
    (sum_sq / (values.len() as f64 - 1.0)).sqrt()
}
