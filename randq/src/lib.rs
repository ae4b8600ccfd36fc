#![forbid(unsafe_code)]

use std::{fmt::Debug, iter::FromIterator, iter::FusedIterator};

use rand::{rngs::ThreadRng, Rng};
use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("queue is empty")]
    Empty,
    #[error("cannot shrink storage to {capacity} slots while holding {size} items")]
    CapacityBelowSize { capacity: usize, size: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

////////////////////////////////////////////////////////////////////////////////

/// A bag whose items come out in uniformly random order.
///
/// Items are kept in a contiguous buffer. The buffer doubles when it is full
/// and halves once at most a quarter of it is in use, so the capacity stays
/// below four times the size (and never drops below one slot). Removal swaps
/// the chosen item with the last one, making every operation O(1) amortized.
pub struct RandomizedQueue<T, R = ThreadRng> {
    items: Vec<T>,
    capacity: usize,
    rng: R,
}

impl<T> RandomizedQueue<T> {
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl<T> Default for RandomizedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R: Rng> RandomizedQueue<T, R> {
    /// Creates an empty queue drawing its random choices from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self {
            items: Vec::with_capacity(1),
            capacity: 1,
            rng,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Number of slots currently reserved for items.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn enqueue(&mut self, item: T) {
        if self.items.len() == self.capacity {
            self.items.reserve_exact(self.capacity);
            self.capacity *= 2;
        }
        self.items.push(item);
    }

    /// Removes and returns a uniformly chosen item.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the queue holds no items.
    pub fn dequeue(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(Error::Empty);
        }
        let idx = self.rng.gen_range(0..self.items.len());
        let item = self.items.swap_remove(idx);

        if self.capacity > 1 && self.items.len() <= self.capacity / 4 {
            self.resize(self.capacity / 2)?;
        }
        Ok(item)
    }

    /// Returns a uniformly chosen item without removing it.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the queue holds no items.
    pub fn sample(&mut self) -> Result<&T> {
        if self.items.is_empty() {
            return Err(Error::Empty);
        }
        let idx = self.rng.gen_range(0..self.items.len());
        Ok(&self.items[idx])
    }

    fn resize(&mut self, capacity: usize) -> Result<()> {
        if capacity < self.items.len() {
            return Err(Error::CapacityBelowSize {
                capacity,
                size: self.items.len(),
            });
        }
        if capacity > self.capacity {
            self.items.reserve_exact(capacity - self.items.len());
        } else {
            self.items.shrink_to(capacity);
        }
        self.capacity = capacity;
        Ok(())
    }
}

impl<T, R> RandomizedQueue<T, R> {
    /// Iterates over the items in a fresh random order, drawn from the
    /// thread-local generator.
    ///
    /// The queue is left untouched, and every call gets an order of its own.
    pub fn iter(&self) -> Iter<'_, T> {
        self.iter_with(rand::thread_rng())
    }

    /// Like [`iter`](Self::iter), but the order is drawn from `rng`.
    pub fn iter_with<S: Rng>(&self, rng: S) -> Iter<'_, T, S> {
        Iter {
            items: &self.items,
            order: (0..self.items.len()).collect(),
            pos: 0,
            rng,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Borrowing iterator that shuffles its own index table one step per item.
pub struct Iter<'a, T, R = ThreadRng> {
    items: &'a [T],
    order: Vec<usize>,
    pos: usize,
    rng: R,
}

impl<'a, T, R: Rng> Iterator for Iter<'a, T, R> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos == self.order.len() {
            return None;
        }
        let pick = self.rng.gen_range(self.pos..self.order.len());
        self.order.swap(self.pos, pick);
        let idx = self.order[self.pos];
        self.pos += 1;

        let items = self.items;
        Some(&items[idx])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.order.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl<'a, T, R: Rng> ExactSizeIterator for Iter<'a, T, R> {}

impl<'a, T, R: Rng> FusedIterator for Iter<'a, T, R> {}

/// Owning iterator, dequeues until the queue is empty.
pub struct IntoIter<T, R>(RandomizedQueue<T, R>);

impl<T, R: Rng> Iterator for IntoIter<T, R> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.dequeue().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T, R: Rng> ExactSizeIterator for IntoIter<T, R> {}

impl<T, R: Rng> FusedIterator for IntoIter<T, R> {}

impl<T, R: Rng> IntoIterator for RandomizedQueue<T, R> {
    type Item = T;
    type IntoIter = IntoIter<T, R>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T, R> IntoIterator for &'a RandomizedQueue<T, R> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

////////////////////////////////////////////////////////////////////////////////

impl<T, R: Rng> Extend<T> for RandomizedQueue<T, R> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<T> FromIterator<T> for RandomizedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = RandomizedQueue::new();
        queue.extend(iter);
        queue
    }
}

impl<T: Debug, R> Debug for RandomizedQueue<T, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomizedQueue")
            .field("items", &self.items)
            .field("capacity", &self.capacity)
            .finish()
    }
}

////////////////////////////////////////////////////////////////////////////////
