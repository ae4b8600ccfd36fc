use std::fmt::Display;

use crate::{union_find::UnionFind, Error, Result};

////////////////////////////////////////////////////////////////////////////////

/// Maps 0-indexed `(row, col)` cells of an `n x n` grid onto disjoint-set
/// elements. Cells take `0..n * n`, the virtual top node is `n * n` and the
/// virtual bottom node is `n * n + 1`.
#[derive(Clone, Copy, Debug)]
struct SiteIndex {
    n: usize,
}

/// Returns the number of cells of an `n x n` grid, or [`Error::InvalidSize`]
/// if `n` is zero or the cells plus both virtual nodes do not fit in `usize`.
pub(crate) fn site_count(n: usize) -> Result<usize> {
    if n == 0 {
        return Err(Error::InvalidSize);
    }
    n.checked_mul(n)
        .filter(|sites| sites.checked_add(2).is_some())
        .ok_or(Error::InvalidSize)
}

impl SiteIndex {
    fn cell(&self, row: usize, col: usize) -> usize {
        row * self.n + col
    }

    fn top(&self) -> usize {
        self.n * self.n
    }

    fn bottom(&self) -> usize {
        self.n * self.n + 1
    }

    fn neighbours(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
        let n = self.n as isize;
        [(-1, 0), (0, -1), (0, 1), (1, 0)]
            .into_iter()
            .filter_map(move |(dr, dc)| {
                let r = row as isize + dr;
                let c = col as isize + dc;
                if r >= 0 && r < n && c >= 0 && c < n {
                    return Some((r as usize, c as usize));
                }
                None
            })
    }
}

////////////////////////////////////////////////////////////////////////////////

/// An `n x n` grid of sites that are opened one by one.
///
/// The public API is 1-indexed: rows and columns range over `1..=n`.
///
/// Two disjoint-set overlays are kept. `connectivity` joins open cells with
/// both virtual nodes and answers [`percolates`](Percolation::percolates) in
/// a single comparison. `fullness` only has the virtual top, so a bottom-row
/// cell is never reported full through the virtual bottom (no backwash).
pub struct Percolation {
    index: SiteIndex,
    open: Vec<bool>,
    open_count: usize,
    connectivity: UnionFind,
    fullness: UnionFind,
}

impl Percolation {
    /// Creates a grid with every site blocked.
    ///
    /// # Arguments
    ///
    /// * `n` - grid edge length.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSize`] if `n == 0` or `n * n` overflows.
    pub fn new(n: usize) -> Result<Self> {
        let sites = site_count(n)?;
        Ok(Self {
            index: SiteIndex { n },
            open: vec![false; sites],
            open_count: 0,
            connectivity: UnionFind::new(sites + 2),
            fullness: UnionFind::new(sites + 1),
        })
    }

    /// Returns the grid edge length.
    pub fn n(&self) -> usize {
        self.index.n
    }

    /// Opens the site at `(row, col)` if it is not open already.
    ///
    /// # Arguments
    ///
    /// * `row` - must be >= 1 and <= `n`.
    /// * `col` - must be >= 1 and <= `n`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBounds`] if either coordinate is outside the grid.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        let (r, c) = self.validate(row, col)?;
        let site = self.index.cell(r, c);
        if self.open[site] {
            return Ok(());
        }
        self.open[site] = true;
        self.open_count += 1;

        if r == 0 {
            self.connectivity.union(site, self.index.top());
            self.fullness.union(site, self.index.top());
        }
        if r == self.index.n - 1 {
            self.connectivity.union(site, self.index.bottom());
        }
        for (nr, nc) in self.index.neighbours(r, c) {
            let other = self.index.cell(nr, nc);
            if self.open[other] {
                self.connectivity.union(site, other);
                self.fullness.union(site, other);
            }
        }
        Ok(())
    }

    /// Returns `true` if the site at `(row, col)` has been opened.
    ///
    /// # Arguments
    ///
    /// * `row` - must be >= 1 and <= `n`.
    /// * `col` - must be >= 1 and <= `n`.
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        let (r, c) = self.validate(row, col)?;
        Ok(self.open[self.index.cell(r, c)])
    }

    /// Returns `true` if the site is open and reachable from the top row
    /// through open sites.
    ///
    /// # Arguments
    ///
    /// * `row` - must be >= 1 and <= `n`.
    /// * `col` - must be >= 1 and <= `n`.
    pub fn is_full(&self, row: usize, col: usize) -> Result<bool> {
        let (r, c) = self.validate(row, col)?;
        let site = self.index.cell(r, c);
        Ok(self.open[site] && self.fullness.connected(site, self.index.top()))
    }

    pub fn number_of_open_sites(&self) -> usize {
        self.open_count
    }

    /// Returns `true` if some open path joins the top row to the bottom row.
    pub fn percolates(&self) -> bool {
        self.connectivity.connected(self.index.top(), self.index.bottom())
    }

    fn validate(&self, row: usize, col: usize) -> Result<(usize, usize)> {
        let n = self.index.n;
        if row == 0 || row > n || col == 0 || col > n {
            return Err(Error::OutOfBounds { row, col, n });
        }
        Ok((row - 1, col - 1))
    }
}

impl Display for Percolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in 0..self.index.n {
            for c in 0..self.index.n {
                if self.open[self.index.cell(r, c)] {
                    write!(f, ".")?;
                } else {
                    write!(f, "#")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////
