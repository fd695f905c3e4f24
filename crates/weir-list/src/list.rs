//! The pool-backed doubly linked list.
//!
//! [`List`] keeps its length, the head and tail handles, and the allocator
//! it draws nodes from. Every mutation distinguishes three shapes: empty
//! (no head, no tail), singleton (head and tail are the same node), and
//! multi (head and tail differ, interior chain well formed).
//!
//! Allocation always happens before any link is rewritten, so a failed
//! push or insert leaves the list exactly as it was.

use std::fmt;
use std::marker::PhantomData;

use weir_arena::{PoolAllocator, PoolConfig};
use weir_core::{SlotAllocator, SlotId};

use crate::cursor::Cursor;
use crate::error::ListError;
use crate::iter::Iter;
use crate::node::Node;

/// A doubly linked list whose nodes are obtained from an owned allocator.
///
/// The default allocator is a fixed-capacity [`PoolAllocator`]; any
/// [`SlotAllocator`] for `Node<T>` can be injected with
/// [`with_allocator`](Self::with_allocator).
///
/// # Example
///
/// ```
/// use weir_arena::PoolConfig;
/// use weir_list::{List, Node};
///
/// let mut list: List<u32> = List::new(PoolConfig::for_slots::<Node<u32>>(4));
/// list.push_back(1).unwrap();
/// list.push_back(3).unwrap();
/// list.insert_at(1, 2).unwrap();
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
/// ```
pub struct List<T, A = PoolAllocator<Node<T>>>
where
    A: SlotAllocator<Node<T>>,
{
    len: usize,
    head: Option<SlotId>,
    tail: Option<SlotId>,
    alloc: A,
    _marker: PhantomData<T>,
}

impl<T> List<T> {
    /// Create an empty list backed by a fresh pool of the given size.
    ///
    /// # Panics
    ///
    /// Panics if the pool cannot be reserved; see [`try_new`](Self::try_new).
    pub fn new(config: PoolConfig) -> Self {
        Self::with_allocator(PoolAllocator::new(config))
    }

    /// Create an empty list, failing with [`ListError::Alloc`] when the
    /// pool's arena cannot be reserved.
    pub fn try_new(config: PoolConfig) -> Result<Self, ListError> {
        Ok(Self::with_allocator(PoolAllocator::try_new(config)?))
    }
}

impl<T, A> List<T, A>
where
    A: SlotAllocator<Node<T>>,
{
    /// Create an empty list that takes ownership of `alloc`.
    pub fn with_allocator(alloc: A) -> Self {
        Self {
            len: 0,
            head: None,
            tail: None,
            alloc,
            _marker: PhantomData,
        }
    }

    /// The allocator nodes are drawn from.
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert `value` before the current head.
    pub fn push_front(&mut self, value: T) -> Result<(), ListError> {
        let id = self.acquire(value)?;
        match self.head {
            None => self.tail = Some(id),
            Some(old_head) => {
                self.node_mut(id).next = Some(old_head);
                self.node_mut(old_head).prev = Some(id);
            }
        }
        self.head = Some(id);
        self.len += 1;
        Ok(())
    }

    /// Append `value` after the current tail.
    pub fn push_back(&mut self, value: T) -> Result<(), ListError> {
        let id = self.acquire(value)?;
        self.link_back(id);
        Ok(())
    }

    /// Remove the head node and return its value.
    pub fn pop_front(&mut self) -> Result<T, ListError> {
        let head = self.head.ok_or(ListError::EmptyContainer)?;
        if self.len == 1 {
            self.head = None;
            self.tail = None;
        } else {
            let next = self
                .node(head)
                .next
                .expect("head of a multi-node list has a successor");
            self.node_mut(next).prev = None;
            self.head = Some(next);
        }
        self.len -= 1;
        Ok(self.release(head).value)
    }

    /// Remove the tail node and return its value.
    pub fn pop_back(&mut self) -> Result<T, ListError> {
        let tail = self.tail.ok_or(ListError::EmptyContainer)?;
        if self.len == 1 {
            self.head = None;
            self.tail = None;
        } else {
            let prev = self
                .node(tail)
                .prev
                .expect("tail of a multi-node list has a predecessor");
            self.node_mut(prev).next = None;
            self.tail = Some(prev);
        }
        self.len -= 1;
        Ok(self.release(tail).value)
    }

    /// The first element.
    pub fn front(&self) -> Result<&T, ListError> {
        let head = self.head.ok_or(ListError::EmptyContainer)?;
        Ok(&self.node(head).value)
    }

    /// Mutable access to the first element.
    pub fn front_mut(&mut self) -> Result<&mut T, ListError> {
        let head = self.head.ok_or(ListError::EmptyContainer)?;
        Ok(&mut self.node_mut(head).value)
    }

    /// The last element.
    pub fn back(&self) -> Result<&T, ListError> {
        let tail = self.tail.ok_or(ListError::EmptyContainer)?;
        Ok(&self.node(tail).value)
    }

    /// Mutable access to the last element.
    pub fn back_mut(&mut self) -> Result<&mut T, ListError> {
        let tail = self.tail.ok_or(ListError::EmptyContainer)?;
        Ok(&mut self.node_mut(tail).value)
    }

    /// The element at `index`, walking from the head. O(index).
    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        let id = self.slot_at(index)?;
        Ok(&self.node(id).value)
    }

    /// Mutable access to the element at `index`. O(index).
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        let id = self.slot_at(index)?;
        Ok(&mut self.node_mut(id).value)
    }

    /// Cursor at the head, or the end sentinel for an empty list.
    pub fn begin(&self) -> Cursor {
        Cursor::at(self.head)
    }

    /// The end sentinel.
    pub fn end(&self) -> Cursor {
        Cursor::END
    }

    /// Cursor reached by advancing [`begin`](Self::begin) `steps` times.
    ///
    /// `steps == len()` yields the end sentinel; more steps fail with
    /// [`ListError::IteratorAdvancePastEnd`].
    pub fn cursor_at(&self, steps: usize) -> Result<Cursor, ListError> {
        let mut cursor = self.begin();
        for _ in 0..steps {
            self.advance(&mut cursor)?;
        }
        Ok(cursor)
    }

    /// Move `cursor` to the following node.
    ///
    /// Fails with [`ListError::IteratorAdvancePastEnd`] at the end sentinel
    /// and with [`ListError::InvalidPosition`] for an erased node.
    pub fn advance(&self, cursor: &mut Cursor) -> Result<(), ListError> {
        *cursor = self.successor(*cursor)?;
        Ok(())
    }

    /// The position following `cursor`, leaving `cursor` itself unchanged.
    pub fn successor(&self, cursor: Cursor) -> Result<Cursor, ListError> {
        let id = cursor.slot().ok_or(ListError::IteratorAdvancePastEnd)?;
        let node = self.alloc.get(id).ok_or(ListError::InvalidPosition)?;
        Ok(Cursor::at(node.next))
    }

    /// The element under `cursor`.
    pub fn value_at(&self, cursor: Cursor) -> Result<&T, ListError> {
        let id = cursor.slot().ok_or(ListError::InvalidPosition)?;
        let node = self.alloc.get(id).ok_or(ListError::InvalidPosition)?;
        Ok(&node.value)
    }

    /// Mutable access to the element under `cursor`.
    pub fn value_at_mut(&mut self, cursor: Cursor) -> Result<&mut T, ListError> {
        let id = cursor.slot().ok_or(ListError::InvalidPosition)?;
        let node = self.alloc.get_mut(id).ok_or(ListError::InvalidPosition)?;
        Ok(&mut node.value)
    }

    /// Remove the node under `cursor` and return its value.
    ///
    /// The end sentinel and cursors to already-erased nodes fail with
    /// [`ListError::InvalidPosition`]. `cursor` is invalid afterwards.
    pub fn erase(&mut self, cursor: Cursor) -> Result<T, ListError> {
        let id = cursor.slot().ok_or(ListError::InvalidPosition)?;
        let (prev, next) = {
            let node = self.alloc.get(id).ok_or(ListError::InvalidPosition)?;
            (node.prev, node.next)
        };
        if self.head == Some(id) {
            return self.pop_front();
        }
        if self.tail == Some(id) {
            return self.pop_back();
        }

        let prev = prev.expect("interior node has a predecessor");
        let next = next.expect("interior node has a successor");
        self.node_mut(prev).next = Some(next);
        self.node_mut(next).prev = Some(prev);
        self.len -= 1;
        Ok(self.release(id).value)
    }

    /// Remove the element at `index` and return it. O(index).
    pub fn erase_at(&mut self, index: usize) -> Result<T, ListError> {
        let id = self.slot_at(index)?;
        self.erase(Cursor::at(Some(id)))
    }

    /// Insert `value` before the node under `cursor`.
    ///
    /// Inserting at the head pushes to the front; inserting at the end
    /// sentinel appends. Returns a cursor to the new node.
    pub fn insert(&mut self, cursor: Cursor, value: T) -> Result<Cursor, ListError> {
        let Some(target) = cursor.slot() else {
            self.push_back(value)?;
            return Ok(Cursor::at(self.tail));
        };
        let prev = self.alloc.get(target).ok_or(ListError::InvalidPosition)?.prev;
        if self.head == Some(target) {
            self.push_front(value)?;
            return Ok(self.begin());
        }

        let prev = prev.expect("non-head node has a predecessor");
        let id = self.acquire(value)?;
        {
            let node = self.node_mut(id);
            node.prev = Some(prev);
            node.next = Some(target);
        }
        self.node_mut(prev).next = Some(id);
        self.node_mut(target).prev = Some(id);
        self.len += 1;
        Ok(Cursor::at(Some(id)))
    }

    /// Insert `value` so that it ends up at `index`. O(index).
    ///
    /// An index at or past the end appends instead of failing.
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<(), ListError> {
        if index >= self.len {
            return self.push_back(value);
        }
        let id = self.slot_at(index)?;
        self.insert(Cursor::at(Some(id)), value)?;
        Ok(())
    }

    /// Destroy every node and return all slots to the allocator.
    pub fn clear(&mut self) {
        let mut current = self.head.take();
        self.tail = None;
        self.len = 0;
        while let Some(id) = current {
            current = self.release(id).next;
        }
    }

    /// Replace the contents with copies of `other`'s elements.
    ///
    /// Existing nodes are overwritten in place and surplus ones released.
    /// The extra nodes needed when `other` is longer are all allocated from
    /// this list's own allocator before anything is modified, so on
    /// failure the error is returned and `self` is untouched.
    pub fn assign_from<B>(&mut self, other: &List<T, B>) -> Result<(), ListError>
    where
        T: Clone,
        B: SlotAllocator<Node<T>>,
    {
        let extra = other.len().saturating_sub(self.len);
        self.alloc.ensure_available(extra)?;
        let mut fresh = Vec::with_capacity(extra);
        for _ in 0..extra {
            match self.alloc.allocate(1) {
                Ok(id) => fresh.push(id),
                Err(e) => {
                    for id in fresh {
                        self.alloc
                            .deallocate(Some(id), 1)
                            .expect("single-slot deallocation is always supported");
                    }
                    return Err(e.into());
                }
            }
        }

        while self.len > other.len() {
            self.pop_back()?;
        }
        let mut source = other.iter();
        let mut current = self.head;
        while let Some(id) = current {
            let Some(value) = source.next() else { break };
            let node = self.node_mut(id);
            node.value = value.clone();
            current = node.next;
        }
        for (id, value) in fresh.into_iter().zip(source) {
            self.alloc.construct(id, Node::new(value.clone()));
            self.link_back(id);
        }
        Ok(())
    }

    /// Front-to-back iterator over shared references.
    pub fn iter(&self) -> Iter<'_, T, A> {
        Iter::new(&self.alloc, self.head, self.tail, self.len)
    }

    fn slot_at(&self, index: usize) -> Result<SlotId, ListError> {
        let out_of_range = ListError::IndexOutOfRange {
            index,
            len: self.len,
        };
        if index >= self.len {
            return Err(out_of_range);
        }
        let mut current = self.head;
        for _ in 0..index {
            // Reaching the end early means the chain is shorter than `len`.
            let id = current.ok_or_else(|| out_of_range.clone())?;
            current = self.node(id).next;
        }
        current.ok_or(out_of_range)
    }

    fn acquire(&mut self, value: T) -> Result<SlotId, ListError> {
        let id = self.alloc.allocate(1)?;
        self.alloc.construct(id, Node::new(value));
        Ok(id)
    }

    /// Link a constructed node after the current tail.
    fn link_back(&mut self, id: SlotId) {
        match self.tail {
            None => self.head = Some(id),
            Some(old_tail) => {
                self.node_mut(id).prev = Some(old_tail);
                self.node_mut(old_tail).next = Some(id);
            }
        }
        self.tail = Some(id);
        self.len += 1;
    }

    /// Destroy an already-unlinked node and hand its slot back.
    fn release(&mut self, id: SlotId) -> Node<T> {
        let node = self.alloc.destroy(id).expect("unlinked slot is live");
        self.alloc
            .deallocate(Some(id), 1)
            .expect("single-slot deallocation is always supported");
        node
    }

    fn node(&self, id: SlotId) -> &Node<T> {
        self.alloc.get(id).expect("linked slot is live")
    }

    fn node_mut(&mut self, id: SlotId) -> &mut Node<T> {
        self.alloc.get_mut(id).expect("linked slot is live")
    }

    /// Walk the chain both ways and check every structural invariant.
    #[cfg(test)]
    pub(crate) fn assert_well_formed(&self) {
        assert_eq!(self.head.is_none(), self.len == 0);
        assert_eq!(self.tail.is_none(), self.len == 0);
        if self.len == 1 {
            assert_eq!(self.head, self.tail);
        }
        let mut count = 0;
        let mut prev = None;
        let mut current = self.head;
        while let Some(id) = current {
            let node = self.node(id);
            assert_eq!(node.prev, prev, "back-reference of {id}");
            count += 1;
            prev = Some(id);
            current = node.next;
        }
        assert_eq!(prev, self.tail, "forward walk ends at tail");
        assert_eq!(count, self.len);
    }
}

impl<T, A> Drop for List<T, A>
where
    A: SlotAllocator<Node<T>>,
{
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        let mut copy = List::new(self.alloc.config());
        copy.assign_from(self)
            .expect("a fresh pool with the same config holds every source node");
        copy
    }
}

impl<T: fmt::Debug, A> fmt::Debug for List<T, A>
where
    A: SlotAllocator<Node<T>>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, A, B> PartialEq<List<T, B>> for List<T, A>
where
    A: SlotAllocator<Node<T>>,
    B: SlotAllocator<Node<T>>,
{
    fn eq(&self, other: &List<T, B>) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq, A> Eq for List<T, A> where A: SlotAllocator<Node<T>> {}

impl<'a, T, A> IntoIterator for &'a List<T, A>
where
    A: SlotAllocator<Node<T>>,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
