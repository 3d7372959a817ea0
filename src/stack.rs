mod error;

pub use error::StackError;

use std::fmt::{self, Debug};

/// A LIFO stack of `i32` with a capacity fixed at construction.
///
/// The backing store is allocated once, with exactly `capacity` slots.
#[derive(Clone)]
pub struct BoundedStack {
    slots: Box<[i32]>,
    /// Number of valid elements; `slots[..len]` in push order.
    len: usize,
}

impl BoundedStack {
    pub const DEFAULT_CAPACITY: usize = 100;

    pub fn new(capacity: usize) -> Result<Self, StackError> {
        if capacity == 0 {
            return Err(StackError::InvalidCapacity { capacity });
        }

        Ok(Self {
            slots: vec![0; capacity].into_boxed_slice(),
            len: 0,
        })
    }

    /// Rejected with `StackOverflow` if the stack is full.
    pub fn push(&mut self, value: i32) -> Result<(), StackError> {
        if self.is_full() {
            return Err(StackError::StackOverflow {
                value,
                capacity: self.capacity(),
            });
        }

        self.slots[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Rejected with `StackUnderflow` if the stack is empty.
    pub fn pop(&mut self) -> Result<i32, StackError> {
        let top = self.top().ok_or(StackError::StackUnderflow)?;
        self.len = top;
        Ok(self.slots[top])
    }

    pub fn peek(&self) -> Option<i32> {
        self.top().map(|top| self.slots[top])
    }

    /// Index of the most recently pushed element, if any.
    pub fn top(&self) -> Option<usize> {
        self.len.checked_sub(1)
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    fn valid(&self) -> &[i32] {
        &self.slots[..self.len]
    }
}

impl Default for BoundedStack {
    fn default() -> Self {
        Self {
            slots: vec![0; Self::DEFAULT_CAPACITY].into_boxed_slice(),
            len: 0,
        }
    }
}

impl Debug for BoundedStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return f
                .debug_struct("BoundedStack")
                .field("capacity", &self.capacity())
                .field("values", &self.valid())
                .finish();
        }

        // One slot per line, top of the stack first. Stale slots are skipped.
        writeln!(f, "BoundedStack ({}/{}):", self.len, self.capacity())?;
        for (i, value) in self.valid().iter().enumerate().rev() {
            writeln!(f, "{i:>4}: {value}")?;
        }
        Ok(())
    }
}
