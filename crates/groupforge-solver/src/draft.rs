//! Serpentine (snake) draft order.

/// Hands out bucket indices in snake order: `0, 1, .., k-1, k-1, .., 0, 0, 1, ..`.
///
/// The pointer and direction persist across calls, so a draft can continue
/// seamlessly over several pools.
///
/// # Example
///
/// ```
/// use groupforge_solver::draft::SnakeDraft;
///
/// let mut draft = SnakeDraft::new(3);
/// let order: Vec<usize> = (0..8).map(|_| draft.next_bucket()).collect();
/// assert_eq!(order, vec![0, 1, 2, 2, 1, 0, 0, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct SnakeDraft {
    buckets: usize,
    index: usize,
    forward: bool,
}

impl SnakeDraft {
    /// Creates a draft over `buckets` buckets; must be positive.
    pub fn new(buckets: usize) -> Self {
        debug_assert!(buckets > 0, "snake draft needs at least one bucket");
        Self {
            buckets,
            index: 0,
            forward: true,
        }
    }

    /// Returns the next bucket and advances the pointer.
    pub fn next_bucket(&mut self) -> usize {
        let current = self.index;
        if self.forward {
            if self.index + 1 >= self.buckets {
                self.forward = false;
            } else {
                self.index += 1;
            }
        } else if self.index == 0 {
            self.forward = true;
        } else {
            self.index -= 1;
        }
        current
    }
}
