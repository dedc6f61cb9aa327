//! Tests for `Collection::chunk`

use crate::{Collection, Error};
use alloc::rc::Rc;
use core::cell::Cell;
use pretty_assertions::assert_eq;

fn pages<T: Clone>(collection: &Collection<T>, size: usize) -> Vec<Vec<T>> {
    collection
        .chunk(size)
        .unwrap()
        .map(|page| page.into_vec().unwrap())
        .collect()
}

#[test]
fn test_chunk_partial_last_page() {
    let collection = Collection::from(vec!["e1", "e2", "e3", "e4"]);

    assert_eq!(
        pages(&collection, 3),
        vec![vec!["e1", "e2", "e3"], vec!["e4"]]
    );
}

#[test]
fn test_chunk_exact_pages() {
    let collection: Collection<i32> = (1..=6).collect();

    assert_eq!(
        pages(&collection, 2),
        vec![vec![1, 2], vec![3, 4], vec![5, 6]]
    );
}

#[test]
fn test_chunk_larger_than_collection() {
    let collection = Collection::from(vec![1, 2]);
    assert_eq!(pages(&collection, 10), vec![vec![1, 2]]);
}

#[test]
fn test_chunk_empty_collection_has_no_pages() {
    let collection: Collection<i32> = Collection::new();
    assert_eq!(collection.chunk(3).unwrap().count(), 0);
}

#[test]
fn test_chunk_zero_size_is_rejected_immediately() {
    let calls = Rc::new(Cell::new(0));
    let seen = Rc::clone(&calls);
    let collection = Collection::lazy(move || {
        seen.set(seen.get() + 1);
        vec![1, 2, 3]
    });

    assert!(matches!(collection.chunk(0), Err(Error::InvalidChunkSize)));
    // Rejected before anything is loaded
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_chunk_big_collection() {
    let mut collection = Collection::new();
    for i in 1..=100_000 {
        collection.add(i).unwrap();
    }

    let chunks = collection.chunk(100).unwrap();
    assert_eq!(chunks.page_count(), 1000);
    assert_eq!(chunks.len(), 1000);

    let sizes: Vec<usize> = chunks.map(|page| page.count().unwrap()).collect();
    assert_eq!(sizes.len(), 1000);
    assert!(sizes.iter().all(|&size| size == 100));
}

#[test]
fn test_chunk_is_pull_based() {
    let collection = Collection::from(vec![1, 2, 3, 4, 5]);
    let mut chunks = collection.chunk(2).unwrap();

    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks.next().unwrap().into_vec().unwrap(), vec![1, 2]);
    assert_eq!(chunks.len(), 2);

    // A second pager starts from the first page again
    let mut fresh = collection.chunk(2).unwrap();
    assert_eq!(fresh.next().unwrap().into_vec().unwrap(), vec![1, 2]);

    assert_eq!(chunks.next().unwrap().into_vec().unwrap(), vec![3, 4]);
    assert_eq!(chunks.next().unwrap().into_vec().unwrap(), vec![5]);
    assert!(chunks.next().is_none());
    assert!(chunks.next().is_none());
}

#[test]
fn test_chunk_pages_are_independent() {
    let collection = Collection::lazy(|| vec![1, 2, 3]);
    let mut first = collection.chunk(2).unwrap().next().unwrap();
    first.add(99).unwrap();

    assert_eq!(first.into_vec().unwrap(), vec![1, 2, 99]);
    assert_eq!(collection.to_vec().unwrap(), vec![1, 2, 3]);
}

#[test]
fn test_chunk_matches_slices() {
    let collection: Collection<i32> = (0..10).collect();

    for (i, page) in collection.chunk(3).unwrap().enumerate() {
        let offset = isize::try_from(i * 3).unwrap();
        let expected = collection.slice(offset, Some(3)).unwrap();
        assert_eq!(page.into_vec().unwrap(), expected.into_vec().unwrap());
    }
}
