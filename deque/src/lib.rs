#![forbid(unsafe_code)]

use std::{fmt::Debug, iter::FromIterator, iter::FusedIterator};

use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("deque is empty")]
    Empty,
}

pub type Result<T> = std::result::Result<T, Error>;

////////////////////////////////////////////////////////////////////////////////

struct Node<T> {
    item: Option<T>,
    prev: Option<usize>,
    // Doubles as the free list link once the node is released.
    next: Option<usize>,
}

/// Double-ended queue backed by a doubly linked chain of nodes.
///
/// Nodes live in an arena and refer to each other by index. Released slots
/// are reused by later insertions. Once at most a quarter of the arena holds
/// items, the live chain is moved into a fresh arena sized to fit, so memory
/// follows the size of the deque. Every operation except iteration is O(1)
/// amortized.
pub struct Deque<T> {
    nodes: Vec<Node<T>>,
    free: Option<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deque<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: None,
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn size(&self) -> usize {
        self.len
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|idx| self.nodes[idx].item.as_ref())
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|idx| self.nodes[idx].item.as_ref())
    }

    pub fn add_first(&mut self, item: T) {
        let idx = self.alloc(item, None, self.head);
        match self.head {
            Some(head) => self.nodes[head].prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
        self.len += 1;
    }

    pub fn add_last(&mut self, item: T) {
        let idx = self.alloc(item, self.tail, None);
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
    }

    /// # Errors
    ///
    /// [`Error::Empty`] if there is nothing to remove.
    pub fn remove_first(&mut self) -> Result<T> {
        let head = self.head.ok_or(Error::Empty)?;
        let next = self.nodes[head].next;
        match next {
            Some(next) => self.nodes[next].prev = None,
            None => self.tail = None,
        }
        self.head = next;
        Ok(self.release(head))
    }

    /// # Errors
    ///
    /// [`Error::Empty`] if there is nothing to remove.
    pub fn remove_last(&mut self) -> Result<T> {
        let tail = self.tail.ok_or(Error::Empty)?;
        let prev = self.nodes[tail].prev;
        match prev {
            Some(prev) => self.nodes[prev].next = None,
            None => self.head = None,
        }
        self.tail = prev;
        Ok(self.release(tail))
    }

    /// Front-to-back iterator over the items.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    fn alloc(&mut self, item: T, prev: Option<usize>, next: Option<usize>) -> usize {
        let node = Node {
            item: Some(item),
            prev,
            next,
        };
        match self.free {
            Some(idx) => {
                self.free = self.nodes[idx].next;
                self.nodes[idx] = node;
                idx
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    // The caller must have unlinked `idx` from the chain already.
    fn release(&mut self, idx: usize) -> T {
        let node = &mut self.nodes[idx];
        let item = node.item.take().expect("linked node should hold an item");
        node.prev = None;
        node.next = self.free;
        self.free = Some(idx);
        self.len -= 1;

        if self.len * 4 <= self.nodes.len() {
            self.compact();
        }
        item
    }

    // Rebuilds the arena with the live nodes at `0..len`, front to back.
    fn compact(&mut self) {
        let mut nodes = Vec::with_capacity(self.len);
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            let node = &mut self.nodes[idx];
            cursor = node.next;
            let pos = nodes.len();
            nodes.push(Node {
                item: node.item.take(),
                prev: pos.checked_sub(1),
                next: None,
            });
            if pos > 0 {
                nodes[pos - 1].next = Some(pos);
            }
        }

        self.head = if nodes.is_empty() { None } else { Some(0) };
        self.tail = nodes.len().checked_sub(1);
        self.nodes = nodes;
        self.free = None;
    }
}

////////////////////////////////////////////////////////////////////////////////

pub struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let nodes = self.nodes;
        let node = &nodes[self.front?];
        self.front = node.next;
        self.remaining -= 1;
        node.item.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let nodes = self.nodes;
        let node = &nodes[self.back?];
        self.back = node.prev;
        self.remaining -= 1;
        node.item.as_ref()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

/// Owning iterator, drains the deque front to back.
pub struct IntoIter<T>(Deque<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.remove_first().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.0.remove_last().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

////////////////////////////////////////////////////////////////////////////////

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add_last(item);
        }
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Deque::new();
        deque.extend(iter);
        deque
    }
}

impl<T: Clone> Clone for Deque<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for Deque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Deque<T> {}

impl<T: Debug> Debug for Deque<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

////////////////////////////////////////////////////////////////////////////////
