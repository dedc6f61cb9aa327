//! Fixed-size paging over a materialized collection.

use crate::collection::Collection;
use core::iter::FusedIterator;

/// Pull-based pager returned by [`Collection::chunk`].
///
/// Pages are built one per call to `next`, each an independent collection
/// holding `size` consecutive elements of the snapshot (the last page may be
/// shorter). The pager is single-pass; calling `chunk` again starts a fresh one
/// from the first page.
#[derive(Debug, Clone)]
pub struct Chunks<'c, T> {
    items: &'c [T],
    size: usize,
    next_page: usize,
    pages: usize,
}

impl<'c, T> Chunks<'c, T> {
    pub(crate) fn new(items: &'c [T], size: usize) -> Self {
        debug_assert!(size > 0, "chunk size is validated by the caller");
        let pages = items.len().div_ceil(size);
        tracing::trace!(len = items.len(), size, pages, "Created chunk pager");
        Self {
            items,
            size,
            next_page: 0,
            pages,
        }
    }

    /// Total number of pages, including the ones already pulled.
    pub fn page_count(&self) -> usize {
        self.pages
    }
}

impl<T: Clone> Iterator for Chunks<'_, T> {
    type Item = Collection<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_page >= self.pages {
            return None;
        }
        let start = self.next_page * self.size;
        let end = (start + self.size).min(self.items.len());
        self.next_page += 1;
        Some(Collection::from(self.items[start..end].to_vec()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.pages - self.next_page;
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for Chunks<'_, T> {}

impl<T: Clone> FusedIterator for Chunks<'_, T> {}
