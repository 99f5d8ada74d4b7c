//! `Queue` - FIFO view over [`List`]: enqueue at the tail, dequeue at the head.

use core::fmt;

use crate::collections::list::{Iter, List};
use crate::collections::ownership::Element;
use crate::collections::ValueEq;

/// A first-in first-out queue of adopted or borrowed elements.
pub struct Queue<'a, E> {
    list: List<'a, E>,
}

impl<'a, E> Queue<'a, E> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self { list: List::new() }
    }

    /// Adopts `element` at the back.
    #[inline]
    pub fn enqueue(&mut self, element: E) {
        self.list.push_back(element);
    }

    /// Borrows `element` at the back.
    #[inline]
    pub fn enqueue_ref(&mut self, element: &'a E) {
        self.list.push_back_ref(element);
    }

    /// Removes the front element.
    #[inline]
    pub fn dequeue(&mut self) -> Option<Element<'a, E>> {
        self.list.pop_front()
    }

    /// The front element, if any.
    #[inline]
    pub fn peek(&self) -> Option<&E> {
        self.list.get(self.list.head()?)
    }

    /// Number of queued elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if nothing is queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Drops every queued element.
    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Elements from front to back.
    pub fn iter(&self) -> Iter<'_, 'a, E, ValueEq> {
        self.list.iter()
    }
}

impl<'a, E> Default for Queue<'a, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, E: fmt::Debug> fmt::Debug for Queue<'a, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Queue;

    #[test]
    fn fifo_order() {
        let mut queue = Queue::new();
        for i in 0..5 {
            queue.enqueue(i);
        }
        assert_eq!(queue.peek(), Some(&0));
        let drained: Vec<i32> = std::iter::from_fn(|| queue.dequeue().and_then(|e| e.into_owned())).collect();
        assert_eq!(drained, vec![0, 1, 2, 3, 4]);
        assert!(queue.is_empty());
        assert_eq!(queue.peek(), None);
    }

    #[test]
    fn borrowed_elements_come_back_borrowed() {
        let item = String::from("job");
        let mut queue = Queue::new();
        queue.enqueue_ref(&item);
        let out = queue.dequeue().expect("queued");
        assert!(!out.is_owned());
        assert_eq!(out.into_borrowed(), Some(&item));
    }
}
