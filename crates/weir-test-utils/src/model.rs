//! Reference model and operation generators for list property tests.
//!
//! [`VecModel`] replays a [`ListOp`] against a plain `Vec` with a slot
//! budget, and [`apply_to_list`] replays the same op against a real
//! [`List`]. Property tests assert that both produce the same [`Outcome`]
//! and the same contents after every step.

use proptest::prelude::*;
use weir_core::{AllocError, SlotAllocator};
use weir_list::{List, ListError, Node};

/// One list operation. Cursor ops position their cursor by advancing
/// `steps` times from the head.
#[derive(Clone, Debug)]
pub enum ListOp {
    PushFront(u16),
    PushBack(u16),
    PopFront,
    PopBack,
    Get(usize),
    InsertAt(usize, u16),
    EraseAt(usize),
    InsertAtCursor { steps: usize, value: u16 },
    EraseAtCursor { steps: usize },
    Clear,
}

/// What an operation produced.
///
/// Allocation failures are compared by kind only, since the model does not
/// know slot sizes in bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Value(u16),
    OutOfMemory,
    Failed(ListError),
}

impl Outcome {
    fn from_result<T>(result: Result<T, ListError>, value: impl FnOnce(T) -> Outcome) -> Self {
        match result {
            Ok(v) => value(v),
            Err(ListError::Alloc(AllocError::OutOfMemory { .. })) => Outcome::OutOfMemory,
            Err(e) => Outcome::Failed(e),
        }
    }
}

/// Strategy for a single op with indices spread a little past `max_index`.
pub fn list_op(max_index: usize) -> impl Strategy<Value = ListOp> {
    let idx = 0..=max_index + 2;
    prop_oneof![
        3 => any::<u16>().prop_map(ListOp::PushFront),
        3 => any::<u16>().prop_map(ListOp::PushBack),
        2 => Just(ListOp::PopFront),
        2 => Just(ListOp::PopBack),
        1 => idx.clone().prop_map(ListOp::Get),
        2 => (idx.clone(), any::<u16>()).prop_map(|(i, v)| ListOp::InsertAt(i, v)),
        2 => idx.clone().prop_map(ListOp::EraseAt),
        1 => (idx.clone(), any::<u16>())
            .prop_map(|(steps, value)| ListOp::InsertAtCursor { steps, value }),
        1 => idx.prop_map(|steps| ListOp::EraseAtCursor { steps }),
        1 => Just(ListOp::Clear),
    ]
}

/// Strategy for a sequence of up to `max_ops` ops.
pub fn list_ops(max_index: usize, max_ops: usize) -> impl Strategy<Value = Vec<ListOp>> {
    proptest::collection::vec(list_op(max_index), 0..max_ops)
}

/// `Vec`-backed model of a list drawing from a pool of `capacity` slots.
#[derive(Clone, Debug, Default)]
pub struct VecModel {
    pub items: Vec<u16>,
    pub capacity: usize,
}

impl VecModel {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
        }
    }

    fn index_error(&self, index: usize) -> Outcome {
        Outcome::Failed(ListError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    fn insert(&mut self, index: usize, value: u16) -> Outcome {
        if self.items.len() >= self.capacity {
            return Outcome::OutOfMemory;
        }
        self.items.insert(index.min(self.items.len()), value);
        Outcome::Done
    }

    pub fn apply(&mut self, op: &ListOp) -> Outcome {
        let len = self.items.len();
        match *op {
            ListOp::PushFront(v) => self.insert(0, v),
            ListOp::PushBack(v) => self.insert(len, v),
            ListOp::PopFront if len == 0 => Outcome::Failed(ListError::EmptyContainer),
            ListOp::PopFront => Outcome::Value(self.items.remove(0)),
            ListOp::PopBack => match self.items.pop() {
                Some(v) => Outcome::Value(v),
                None => Outcome::Failed(ListError::EmptyContainer),
            },
            ListOp::Get(i) => match self.items.get(i) {
                Some(&v) => Outcome::Value(v),
                None => self.index_error(i),
            },
            ListOp::InsertAt(i, v) => self.insert(i, v),
            ListOp::EraseAt(i) if i >= len => self.index_error(i),
            ListOp::EraseAt(i) => Outcome::Value(self.items.remove(i)),
            ListOp::InsertAtCursor { steps, .. } if steps > len => {
                Outcome::Failed(ListError::IteratorAdvancePastEnd)
            }
            ListOp::InsertAtCursor { steps, value } => self.insert(steps, value),
            ListOp::EraseAtCursor { steps } if steps > len => {
                Outcome::Failed(ListError::IteratorAdvancePastEnd)
            }
            ListOp::EraseAtCursor { steps } if steps == len => {
                Outcome::Failed(ListError::InvalidPosition)
            }
            ListOp::EraseAtCursor { steps } => Outcome::Value(self.items.remove(steps)),
            ListOp::Clear => {
                self.items.clear();
                Outcome::Done
            }
        }
    }
}

/// Replay `op` against a real list.
pub fn apply_to_list<A>(list: &mut List<u16, A>, op: &ListOp) -> Outcome
where
    A: SlotAllocator<Node<u16>>,
{
    let done = |()| Outcome::Done;
    match *op {
        ListOp::PushFront(v) => Outcome::from_result(list.push_front(v), done),
        ListOp::PushBack(v) => Outcome::from_result(list.push_back(v), done),
        ListOp::PopFront => Outcome::from_result(list.pop_front(), Outcome::Value),
        ListOp::PopBack => Outcome::from_result(list.pop_back(), Outcome::Value),
        ListOp::Get(i) => Outcome::from_result(list.get(i).copied(), Outcome::Value),
        ListOp::InsertAt(i, v) => Outcome::from_result(list.insert_at(i, v), done),
        ListOp::EraseAt(i) => Outcome::from_result(list.erase_at(i), Outcome::Value),
        ListOp::InsertAtCursor { steps, value } => {
            let result = list
                .cursor_at(steps)
                .and_then(|cursor| list.insert(cursor, value));
            Outcome::from_result(result, |_| Outcome::Done)
        }
        ListOp::EraseAtCursor { steps } => {
            let result = list.cursor_at(steps).and_then(|cursor| list.erase(cursor));
            Outcome::from_result(result, Outcome::Value)
        }
        ListOp::Clear => {
            list.clear();
            Outcome::Done
        }
    }
}
