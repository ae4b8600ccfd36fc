use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("grid size must be positive")]
    InvalidSize,
    #[error("number of trials must be positive")]
    InvalidTrials,
    #[error("site ({row}, {col}) is outside of a {n}x{n} grid")]
    OutOfBounds { row: usize, col: usize, n: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
