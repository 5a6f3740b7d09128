//! ID allocation for entities created during an editing session
//!
//! Dataset ids are non-negative, so new stops and pathways count down from
//! `-1`. Each entity kind keeps its own allocator.

use crate::constants::FIRST_NEW_ID;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIdAllocator {
    next: i64,
}

impl NewIdAllocator {
    #[must_use]
    pub const fn new() -> Self {
        Self { next: FIRST_NEW_ID }
    }

    /// Hand out the next id; every call returns a value below all previous ones
    pub fn allocate(&mut self) -> i64 {
        let id = self.next;
        self.next -= 1;
        id
    }

    /// Id the next call to [`allocate`](Self::allocate) will return
    #[must_use]
    pub const fn peek(&self) -> i64 {
        self.next
    }

    /// Number of ids handed out since the last reset
    #[must_use]
    pub const fn allocated(&self) -> u64 {
        FIRST_NEW_ID.abs_diff(self.next)
    }

    pub fn reset(&mut self) {
        self.next = FIRST_NEW_ID;
    }
}

impl Default for NewIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
