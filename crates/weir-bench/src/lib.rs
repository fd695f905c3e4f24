//! Benchmark profiles and workloads for weir.
//!
//! - [`filled_list`]: a pool-backed list holding `0..len`, with spare capacity
//! - [`churn`]: a FIFO push/pop cycle that keeps the pool at a fixed level
//! - [`splice_middle`]: repeated insert + erase at the list midpoint

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use weir_arena::PoolConfig;
use weir_list::{List, ListError, Node};

/// Build a list holding `0..len` in a pool with `spare` extra slots.
pub fn filled_list(len: usize, spare: usize) -> Result<List<u64>, ListError> {
    let mut list = List::new(PoolConfig::for_slots::<Node<u64>>(len + spare));
    for v in 0..len as u64 {
        list.push_back(v)?;
    }
    Ok(list)
}

/// Push to the back and pop from the front `rounds` times.
///
/// Every push after the first reuses the slot released by the previous pop,
/// so the pool needs only one spare slot. Returns the sum of popped values.
pub fn churn(list: &mut List<u64>, rounds: u64) -> Result<u64, ListError> {
    let mut sum = 0u64;
    for v in 0..rounds {
        list.push_back(v)?;
        sum = sum.wrapping_add(list.pop_front()?);
    }
    Ok(sum)
}

/// Insert before the midpoint and erase it again, `rounds` times.
pub fn splice_middle(list: &mut List<u64>, rounds: u64) -> Result<u64, ListError> {
    let mid = list.len() / 2;
    let mut sum = 0u64;
    for v in 0..rounds {
        list.insert_at(mid, v)?;
        sum = sum.wrapping_add(list.erase_at(mid)?);
    }
    Ok(sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_list_has_requested_contents() {
        let list = filled_list(4, 1).unwrap();
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3]);
        assert_eq!(list.allocator().capacity(), 5);
    }

    #[test]
    fn churn_keeps_length_stable() {
        let mut list = filled_list(3, 1).unwrap();
        churn(&mut list, 100).unwrap();
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn churn_without_spare_slot_fails() {
        let mut list = filled_list(3, 0).unwrap();
        assert!(churn(&mut list, 1).is_err());
    }

    #[test]
    fn splice_middle_returns_inserted_values() {
        let mut list = filled_list(10, 1).unwrap();
        assert_eq!(splice_middle(&mut list, 4).unwrap(), 1 + 2 + 3);
        assert_eq!(list.len(), 10);
    }
}
