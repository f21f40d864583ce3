//! Cursor-driven scanning and pagination.
//!
//! A scan is built from two independent stages:
//!
//! - [`CursorScan`] walks one cursor forward, starting at the first key or at
//!   a seek position, and stops as soon as a key falls outside the prefix
//!   window. The window's upper bound is never computed; it is a per-entry
//!   check.
//! - [`Paginate`] drops the first `skip` items and then yields up to `limit`
//!   more. Containers and leaves count alike.
//!
//! Classification runs after both stages, so skipped entries are never probed.
//! The walk is strictly sequential: skip accounting depends on it.

use bytes::Bytes;
use nestview_engine::{Cursor, EngineError, KeyValue};

use crate::PageRequest;

/// Forward-only iterator over a cursor's raw entries.
pub struct CursorScan<'c> {
    cursor: Box<dyn Cursor + 'c>,
    start: Option<Bytes>,
    started: bool,
    prefix: Option<Bytes>,
    done: bool,
}

impl<'c> CursorScan<'c> {
    /// Every entry, from the first key on.
    pub fn new(cursor: Box<dyn Cursor + 'c>) -> Self {
        Self {
            cursor,
            start: None,
            started: false,
            prefix: None,
            done: false,
        }
    }

    /// Entries whose key begins with `prefix`: the half-open window
    /// `[prefix, next key not starting with prefix)`.
    pub fn with_prefix(cursor: Box<dyn Cursor + 'c>, prefix: impl Into<Bytes>) -> Self {
        let prefix = prefix.into();
        Self {
            cursor,
            start: Some(prefix.clone()),
            started: false,
            prefix: Some(prefix),
            done: false,
        }
    }

    fn in_window(&self, key: &[u8]) -> bool {
        match &self.prefix {
            Some(prefix) => key.starts_with(prefix),
            None => true,
        }
    }

    fn step(&mut self) -> Result<Option<KeyValue>, EngineError> {
        if self.started {
            return self.cursor.next();
        }
        self.started = true;
        match self.start.take() {
            Some(key) => self.cursor.seek(&key),
            None => self.cursor.first(),
        }
    }
}

impl Iterator for CursorScan<'_> {
    type Item = Result<KeyValue, EngineError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.step() {
            Ok(Some((key, value))) if self.in_window(&key) => Some(Ok((key, value))),
            Ok(_) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Skip-then-limit adapter over fallible items.
///
/// Errors hit while skipping are yielded, not swallowed. Once `limit` items
/// have been yielded the inner iterator is not advanced again.
pub struct Paginate<I> {
    inner: I,
    to_skip: usize,
    remaining: Option<usize>,
}

/// Apply `request` to `inner`.
pub fn paginate<I>(inner: I, request: PageRequest) -> Paginate<I> {
    Paginate {
        inner,
        to_skip: request.skip,
        remaining: request.max_entries(),
    }
}

impl<I, T, E> Iterator for Paginate<I>
where
    I: Iterator<Item = Result<T, E>>,
{
    type Item = Result<T, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == Some(0) {
            return None;
        }
        while self.to_skip > 0 {
            match self.inner.next()? {
                Ok(_) => self.to_skip -= 1,
                Err(e) => return Some(Err(e)),
            }
        }
        let item = self.inner.next()?;
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= 1;
        }
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nestview_engine::{Engine, MemoryBucket, MemoryEngine};

    fn engine(keys: &[&'static str]) -> MemoryEngine {
        let bucket = keys
            .iter()
            .fold(MemoryBucket::new(), |b, k| b.with_value(*k, "v"));
        MemoryEngine::new(MemoryBucket::new().with_bucket("c", bucket))
    }

    fn scan_keys(engine: &MemoryEngine, prefix: Option<&'static str>) -> Vec<String> {
        let txn = engine.begin_read().unwrap();
        let container = txn.root().container(b"c").unwrap().unwrap();
        let cursor = container.cursor().unwrap();
        let scan = match prefix {
            Some(p) => CursorScan::with_prefix(cursor, p),
            None => CursorScan::new(cursor),
        };
        scan.map(|item| String::from_utf8(item.unwrap().0.to_vec()).unwrap())
            .collect()
    }

    #[test]
    fn full_scan_visits_every_key_in_order() {
        let e = engine(&["b1", "a2", "c1", "a1"]);
        assert_eq!(scan_keys(&e, None), vec!["a1", "a2", "b1", "c1"]);
    }

    #[test]
    fn prefix_scan_stops_at_first_mismatch() {
        let e = engine(&["a1", "a2", "b1", "c1"]);
        assert_eq!(scan_keys(&e, Some("a")), vec!["a1", "a2"]);
        assert_eq!(scan_keys(&e, Some("b")), vec!["b1"]);
    }

    #[test]
    fn prefix_scan_with_no_match_is_empty() {
        let e = engine(&["a1", "c1"]);
        assert!(scan_keys(&e, Some("b")).is_empty());
        assert!(scan_keys(&e, Some("z")).is_empty());
    }

    #[test]
    fn empty_prefix_matches_everything() {
        let e = engine(&["a1", "b1"]);
        assert_eq!(scan_keys(&e, Some("")), vec!["a1", "b1"]);
    }

    #[test]
    fn prefix_longer_than_keys() {
        let e = engine(&["a", "ab", "abc", "abd", "b"]);
        assert_eq!(scan_keys(&e, Some("ab")), vec!["ab", "abc", "abd"]);
        assert_eq!(scan_keys(&e, Some("abcd")), Vec::<String>::new());
    }

    fn numbers(n: u32) -> impl Iterator<Item = Result<u32, &'static str>> {
        (0..n).map(Ok)
    }

    fn page(n: u32, skip: usize, limit: usize) -> Vec<u32> {
        paginate(numbers(n), PageRequest::new(skip, limit))
            .map(Result::unwrap)
            .collect()
    }

    #[test]
    fn paginate_skips_then_limits() {
        assert_eq!(page(5, 3, 10), vec![3, 4]);
        assert_eq!(page(5, 1, 2), vec![1, 2]);
        assert_eq!(page(5, 0, 0), vec![0, 1, 2, 3, 4]);
        assert_eq!(page(5, 2, 0), vec![2, 3, 4]);
    }

    #[test]
    fn paginate_skip_past_end_is_empty() {
        assert!(page(5, 5, 10).is_empty());
        assert!(page(5, 50, 0).is_empty());
        assert!(page(0, 0, 10).is_empty());
    }

    #[test]
    fn paginate_does_not_pull_past_limit() {
        let mut pulled = 0;
        let source = (0..100u32).map(|n| {
            pulled += 1;
            Ok::<_, ()>(n)
        });
        let taken: Vec<_> = paginate(source, PageRequest::new(2, 3)).collect();
        assert_eq!(taken.len(), 3);
        assert_eq!(pulled, 5);
    }

    #[test]
    fn paginate_surfaces_errors_while_skipping() {
        let source = vec![Ok(1), Err("boom"), Ok(3)].into_iter();
        let mut pages = paginate(source, PageRequest::new(2, 10));
        assert_eq!(pages.next(), Some(Err("boom")));
    }
}
