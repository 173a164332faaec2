//! A binary heap whose notion of "first" is supplied by an injected [Comparator] rather than by
//! the [Ord] implementation of the stored type. The solvers use it with [LowestF](crate::solver::astar::LowestF)
//! so that "smaller estimated cost is served first" is stated once, in the comparator, instead of
//! through a reversed [Ord] on the node type.
use std::cmp::Ordering;
use thiserror::Error;

/// Returned by [PriorityQueue::pop] when there is nothing left to pop.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
#[error("pop called on an empty priority queue")]
pub struct EmptyQueueError;

/// Decides which of two elements is served first. Returning [Ordering::Greater] means `a` sits
/// closer to the root than `b`.
pub trait Comparator<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Serves the largest element (per [Ord]) first.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaxFirst;

/// Serves the smallest element (per [Ord]) first.
#[derive(Clone, Copy, Debug, Default)]
pub struct MinFirst;

impl<T: Ord> Comparator<T> for MaxFirst {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T: Ord> Comparator<T> for MinFirst {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

/// Array-backed binary heap. Elements that compare as [Ordering::Equal] come out in no particular
/// order; there is no secondary key.
#[derive(Clone, Debug)]
pub struct PriorityQueue<T, C> {
    heap: Vec<T>,
    comparator: C,
}

impl<T, C: Comparator<T> + Default> Default for PriorityQueue<T, C> {
    fn default() -> Self {
        PriorityQueue::new(C::default())
    }
}

impl<T, C: Comparator<T>> PriorityQueue<T, C> {
    pub fn new(comparator: C) -> PriorityQueue<T, C> {
        PriorityQueue {
            heap: Vec::new(),
            comparator,
        }
    }

    pub fn with_capacity(comparator: C, capacity: usize) -> PriorityQueue<T, C> {
        PriorityQueue {
            heap: Vec::with_capacity(capacity),
            comparator,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The element [pop](Self::pop) would return next.
    pub fn peek(&self) -> Option<&T> {
        self.heap.first()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Appends `item` and sifts it up while it beats its parent.
    pub fn push(&mut self, item: T) {
        self.heap.push(item);
        let mut now = self.heap.len() - 1;
        while now > 0 {
            let parent = (now - 1) / 2;
            if self.comparator.compare(&self.heap[now], &self.heap[parent]) != Ordering::Greater {
                break;
            }
            self.heap.swap(now, parent);
            now = parent;
        }
    }

    /// Removes the root, moves the last element into its slot and sifts it down towards whichever
    /// child is greater until neither child beats it.
    pub fn pop(&mut self) -> Result<T, EmptyQueueError> {
        if self.heap.is_empty() {
            return Err(EmptyQueueError);
        }
        let ret = self.heap.swap_remove(0);
        let len = self.heap.len();
        let mut now = 0;
        loop {
            let left = 2 * now + 1;
            let right = left + 1;
            let mut next = now;
            if left < len && self.beats(left, next) {
                next = left;
            }
            if right < len && self.beats(right, next) {
                next = right;
            }
            if next == now {
                break;
            }
            self.heap.swap(now, next);
            now = next;
        }
        Ok(ret)
    }

    fn beats(&self, a: usize, b: usize) -> bool {
        self.comparator.compare(&self.heap[a], &self.heap[b]) == Ordering::Greater
    }
}

impl<T, C: Comparator<T>> Extend<T> for PriorityQueue<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    fn drain<T, C: Comparator<T>>(mut queue: PriorityQueue<T, C>) -> Vec<T> {
        let mut out = Vec::new();
        while let Ok(item) = queue.pop() {
            out.push(item);
        }
        out
    }

    #[test]
    fn pop_empty_queue() {
        let mut queue: PriorityQueue<i32, MinFirst> = PriorityQueue::default();
        assert_eq!(queue.pop(), Err(EmptyQueueError));
        queue.push(3);
        assert_eq!(queue.pop(), Ok(3));
        assert_eq!(queue.pop(), Err(EmptyQueueError));
    }

    #[test]
    fn max_first_order() {
        let mut queue = PriorityQueue::new(MaxFirst);
        queue.extend([20, 30, 10, 40, 60, 50]);
        assert_eq!(queue.len(), 6);
        assert_eq!(queue.peek(), Some(&60));
        assert_eq!(drain(queue), vec![60, 50, 40, 30, 20, 10]);
    }

    #[test]
    fn min_first_random_input_is_sorted() {
        let mut rng = StdRng::seed_from_u64(0);
        for n in [0, 1, 2, 7, 64, 1000] {
            let mut values: Vec<i32> = (0..n).map(|_| rng.gen_range(-50..50)).collect();
            let mut queue = PriorityQueue::with_capacity(MinFirst, n);
            queue.extend(values.iter().copied());
            values.sort();
            assert_eq!(drain(queue), values);
        }
    }

    #[test]
    fn interleaved_push_pop() {
        let mut queue = PriorityQueue::new(MinFirst);
        queue.extend([5, 1, 4]);
        assert_eq!(queue.pop(), Ok(1));
        queue.push(0);
        queue.push(9);
        assert_eq!(queue.pop(), Ok(0));
        assert_eq!(queue.pop(), Ok(4));
        queue.clear();
        assert!(queue.is_empty());
    }
}
