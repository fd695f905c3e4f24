//! Borrowing iteration over a list.

use std::iter::FusedIterator;
use std::marker::PhantomData;

use weir_core::{SlotAllocator, SlotId};

use crate::node::Node;

/// Iterator over `&T`, front to back (and back to front).
///
/// Created by [`List::iter`](crate::List::iter). Reaching the end is
/// reported as `None`, never as an error.
pub struct Iter<'a, T, A> {
    alloc: &'a A,
    front: Option<SlotId>,
    back: Option<SlotId>,
    /// Elements not yet yielded from either end.
    remaining: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T, A> Iter<'a, T, A>
where
    A: SlotAllocator<Node<T>>,
{
    pub(crate) fn new(
        alloc: &'a A,
        front: Option<SlotId>,
        back: Option<SlotId>,
        remaining: usize,
    ) -> Self {
        Self {
            alloc,
            front,
            back,
            remaining,
            _marker: PhantomData,
        }
    }
}

impl<'a, T, A> Iterator for Iter<'a, T, A>
where
    A: SlotAllocator<Node<T>>,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let alloc: &'a A = self.alloc;
        let node = alloc.get(self.front?)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T, A> DoubleEndedIterator for Iter<'a, T, A>
where
    A: SlotAllocator<Node<T>>,
{
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let alloc: &'a A = self.alloc;
        let node = alloc.get(self.back?)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T, A> ExactSizeIterator for Iter<'_, T, A> where A: SlotAllocator<Node<T>> {}

impl<T, A> FusedIterator for Iter<'_, T, A> where A: SlotAllocator<Node<T>> {}

impl<T, A> Clone for Iter<'_, T, A> {
    fn clone(&self) -> Self {
        Self {
            alloc: self.alloc,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
            _marker: PhantomData,
        }
    }
}
