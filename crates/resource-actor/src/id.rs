//! Monotonic id allocation for a single collection.

/// Hands out ids for one collection in strictly increasing order.
///
/// Ids are never derived from the collection size, so deleting a record can not cause a
/// later create to reuse a live id. The next id is only consumed once a create succeeds.
/// Once `u32::MAX` has been handed out the allocator is exhausted and `peek` returns
/// `None`; it never wraps around.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: Option<u32>,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { next: Some(0) }
    }

    /// The id the next successful create will receive, or `None` when exhausted.
    pub fn peek(&self) -> Option<u32> {
        self.next
    }

    /// Mark the peeked id as used.
    pub fn commit(&mut self) {
        self.next = self.next.and_then(|id| id.checked_add(1));
    }

    /// Keep the allocator ahead of an id inserted from outside (seed data).
    pub fn observe(&mut self, id: u32) {
        if let Some(next) = self.next {
            if id >= next {
                self.next = id.checked_add(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let ids = IdAllocator::new();
        assert_eq!(ids.peek(), Some(0));
    }

    #[test]
    fn peek_does_not_consume() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.peek(), Some(0));
        assert_eq!(ids.peek(), Some(0));
        ids.commit();
        assert_eq!(ids.peek(), Some(1));
    }

    #[test]
    fn observe_only_moves_forward() {
        let mut ids = IdAllocator::new();
        ids.observe(4);
        assert_eq!(ids.peek(), Some(5));
        ids.observe(1);
        assert_eq!(ids.peek(), Some(5));
    }

    #[test]
    fn exhausted_after_max_never_wraps() {
        let mut ids = IdAllocator::new();
        ids.observe(u32::MAX - 1);
        assert_eq!(ids.peek(), Some(u32::MAX));
        ids.commit();
        assert_eq!(ids.peek(), None);
        ids.commit();
        assert_eq!(ids.peek(), None);

        let mut seeded = IdAllocator::new();
        seeded.observe(u32::MAX);
        assert_eq!(seeded.peek(), None);
        seeded.observe(3);
        assert_eq!(seeded.peek(), None);
    }
}
