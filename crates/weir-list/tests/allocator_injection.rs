//! Lists over injected allocators: call accounting, failure atomicity, and
//! destructor bookkeeping.

use weir_arena::{PoolAllocator, PoolConfig};
use weir_core::{AllocError, SlotAllocator, SlotId};
use weir_list::{List, ListError, Node};
use weir_test_utils::{CountingAllocator, DropTally, Tracked};

type Counted<T> = CountingAllocator<PoolAllocator<Node<T>>>;

fn counted<T>(slots: usize) -> Counted<T> {
    CountingAllocator::new(PoolAllocator::new(PoolConfig::for_slots::<Node<T>>(slots)))
}

fn failing<T>(slots: usize, after: usize) -> Counted<T> {
    CountingAllocator::failing_after(
        PoolAllocator::new(PoolConfig::for_slots::<Node<T>>(slots)),
        after,
    )
}

#[test]
fn every_node_is_one_allocation() {
    let mut list: List<u8, Counted<u8>> = List::with_allocator(counted(8));
    list.push_back(1).unwrap();
    list.push_front(0).unwrap();
    list.insert_at(1, 5).unwrap();
    assert_eq!(list.allocator().allocations(), 3);

    list.erase_at(1).unwrap();
    list.pop_back().unwrap();
    assert_eq!(list.allocator().deallocations(), 2);
    assert_eq!(list.allocator().live(), list.len());
}

#[test]
fn failed_inserts_leave_list_untouched() {
    let mut list: List<u8, Counted<u8>> = List::with_allocator(failing(8, 3));
    for v in [1, 2, 3] {
        list.push_back(v).unwrap();
    }

    let cursor = list.cursor_at(1).unwrap();
    for result in [
        list.push_front(0),
        list.push_back(0),
        list.insert_at(1, 0),
        list.insert(cursor, 0).map(drop),
    ] {
        assert!(matches!(
            result,
            Err(ListError::Alloc(AllocError::OutOfMemory { .. }))
        ));
    }
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    assert_eq!(list.front(), Ok(&1));
    assert_eq!(list.back(), Ok(&3));
    assert_eq!(list.len(), 3);
}

#[test]
fn dropping_list_returns_every_slot_before_pool_goes() {
    let tally = DropTally::new();
    {
        let mut list: List<Tracked<u32>> =
            List::new(PoolConfig::for_slots::<Node<Tracked<u32>>>(4));
        for v in 0..4 {
            list.push_back(tally.track(v)).unwrap();
        }
        assert_eq!(tally.dropped(), 0);
    }
    assert_eq!(tally.dropped(), 4);
}

#[test]
fn erase_and_clear_run_destructors() {
    let tally = DropTally::new();
    let mut list: List<Tracked<u32>, Counted<Tracked<u32>>> = List::with_allocator(counted(4));
    for v in 0..4 {
        list.push_back(tally.track(v)).unwrap();
    }
    drop(list.erase_at(2).unwrap());
    assert_eq!(tally.dropped(), 1);

    list.clear();
    assert_eq!(tally.dropped(), 4);
    assert_eq!(list.allocator().live(), 0);
}

#[test]
fn assign_from_copies_across_allocator_types() {
    let mut source: List<u32, Counted<u32>> = List::with_allocator(counted(4));
    for v in [7, 8, 9] {
        source.push_back(v).unwrap();
    }
    let mut dest: List<u32> = List::new(PoolConfig::for_slots::<Node<u32>>(3));
    dest.assign_from(&source).unwrap();
    assert_eq!(dest, source);
    assert_eq!(dest.allocator().used(), 3);
    assert_eq!(source.allocator().allocations(), 3);
}

#[test]
fn assign_from_respects_injected_budget() {
    let mut source: List<u32> = List::new(PoolConfig::for_slots::<Node<u32>>(4));
    for v in 0..4 {
        source.push_back(v).unwrap();
    }
    let mut dest: List<u32, Counted<u32>> = List::with_allocator(failing(8, 2));
    dest.push_back(42).unwrap();

    let err = dest.assign_from(&source).unwrap_err();
    assert!(matches!(err, ListError::Alloc(AllocError::OutOfMemory { .. })));
    assert_eq!(dest.iter().copied().collect::<Vec<_>>(), [42]);
}

#[test]
fn assign_from_overwrites_in_place_with_spent_budget() {
    let mut source: List<u32> = List::new(PoolConfig::for_slots::<Node<u32>>(2));
    source.push_back(0).unwrap();
    source.push_back(1).unwrap();
    let mut dest: List<u32, Counted<u32>> = List::with_allocator(failing(8, 2));
    dest.push_back(42).unwrap();

    dest.assign_from(&source).unwrap();
    assert_eq!(dest.iter().copied().collect::<Vec<_>>(), [0, 1]);
    assert_eq!(dest.allocator().allocations(), 2);
    assert_eq!(dest.allocator().deallocations(), 0);
}

/// Claims unlimited room so allocation failures surface mid-operation.
struct Overpromising<T>(Counted<T>);

impl<T> SlotAllocator<Node<T>> for Overpromising<T> {
    fn allocate(&mut self, count: usize) -> Result<SlotId, AllocError> {
        SlotAllocator::<Node<T>>::allocate(&mut self.0, count)
    }

    fn deallocate(&mut self, slot: Option<SlotId>, count: usize) -> Result<(), AllocError> {
        SlotAllocator::<Node<T>>::deallocate(&mut self.0, slot, count)
    }

    fn construct(&mut self, slot: SlotId, value: Node<T>) {
        SlotAllocator::<Node<T>>::construct(&mut self.0, slot, value);
    }

    fn destroy(&mut self, slot: SlotId) -> Option<Node<T>> {
        SlotAllocator::<Node<T>>::destroy(&mut self.0, slot)
    }

    fn get(&self, slot: SlotId) -> Option<&Node<T>> {
        SlotAllocator::<Node<T>>::get(&self.0, slot)
    }

    fn get_mut(&mut self, slot: SlotId) -> Option<&mut Node<T>> {
        SlotAllocator::<Node<T>>::get_mut(&mut self.0, slot)
    }

    fn available(&self) -> usize {
        usize::MAX
    }

    fn ensure_available(&self, _count: usize) -> Result<(), AllocError> {
        Ok(())
    }
}

#[test]
fn assign_from_rolls_back_partial_allocation() {
    let mut source: List<u32> = List::new(PoolConfig::for_slots::<Node<u32>>(3));
    for v in 0..3 {
        source.push_back(v).unwrap();
    }
    let mut dest: List<u32, Overpromising<u32>> =
        List::with_allocator(Overpromising(failing(8, 2)));
    dest.push_back(42).unwrap();

    let err = dest.assign_from(&source).unwrap_err();
    assert!(matches!(err, ListError::Alloc(AllocError::OutOfMemory { .. })));
    assert_eq!(dest.iter().copied().collect::<Vec<_>>(), [42]);
    assert_eq!(dest.allocator().0.live(), 1);
}

#[test]
fn clone_copies_tracked_values_independently() {
    let tally = DropTally::new();
    let mut list: List<Tracked<u8>> =
        List::new(PoolConfig::for_slots::<Node<Tracked<u8>>>(2));
    list.push_back(tally.track(1)).unwrap();
    let copy = list.clone();
    drop(list);
    assert_eq!(tally.dropped(), 1);
    assert_eq!(copy.front().map(|t| *t.value()), Ok(1));
}
