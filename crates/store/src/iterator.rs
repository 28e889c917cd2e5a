//! Query iterators
//!
//! A query returns a cursor over `(key, value)` pairs. Cursors hold resources
//! in the host ledger and must be closed once the caller is done with them;
//! `ScopedIterator` closes the wrapped cursor when it goes out of scope.

use std::collections::VecDeque;
use tracing::{debug, warn};

use crate::{StorageError, StorageResult};

/// A single entry produced by a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult {
    pub key: String,
    pub value: Vec<u8>,
}

/// Cursor over the results of a rich query
pub trait StateQueryIterator: Send {
    /// Whether another result is available
    fn has_next(&self) -> bool;

    /// Advance the cursor and return the next result
    fn next(&mut self) -> StorageResult<QueryResult>;

    /// Release the cursor. Closing twice is a no-op.
    fn close(&mut self) -> StorageResult<()>;
}

/// Iterator over a snapshot of entries taken when the query ran
pub struct VecQueryIterator {
    results: VecDeque<QueryResult>,
    closed: bool,
}

impl VecQueryIterator {
    pub fn new(results: Vec<QueryResult>) -> Self {
        Self {
            results: results.into(),
            closed: false,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl StateQueryIterator for VecQueryIterator {
    fn has_next(&self) -> bool {
        !self.closed && !self.results.is_empty()
    }

    fn next(&mut self) -> StorageResult<QueryResult> {
        if self.closed {
            return Err(StorageError::IteratorClosed);
        }
        self.results.pop_front().ok_or(StorageError::IteratorExhausted)
    }

    fn close(&mut self) -> StorageResult<()> {
        if !self.closed {
            self.closed = true;
            self.results.clear();
        }
        Ok(())
    }
}

/// Owns a query cursor and closes it on drop
pub struct ScopedIterator {
    inner: Box<dyn StateQueryIterator>,
}

impl ScopedIterator {
    pub fn new(inner: Box<dyn StateQueryIterator>) -> Self {
        Self { inner }
    }

    pub fn has_next(&self) -> bool {
        self.inner.has_next()
    }

    pub fn next(&mut self) -> StorageResult<QueryResult> {
        self.inner.next()
    }
}

impl Drop for ScopedIterator {
    fn drop(&mut self) {
        match self.inner.close() {
            Ok(()) => debug!("Closed query iterator"),
            Err(e) => warn!("Failed to close query iterator: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn entry(key: &str, value: &str) -> QueryResult {
        QueryResult {
            key: key.to_string(),
            value: value.as_bytes().to_vec(),
        }
    }

    struct CountingIterator {
        closes: Arc<AtomicUsize>,
    }

    impl StateQueryIterator for CountingIterator {
        fn has_next(&self) -> bool {
            false
        }

        fn next(&mut self) -> StorageResult<QueryResult> {
            Err(StorageError::IteratorExhausted)
        }

        fn close(&mut self) -> StorageResult<()> {
            self.closes.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn test_vec_iterator_yields_in_order() {
        let mut iter = VecQueryIterator::new(vec![entry("a", "1"), entry("b", "2")]);

        assert!(iter.has_next());
        assert_eq!(iter.next().unwrap().key, "a");
        assert_eq!(iter.next().unwrap().key, "b");
        assert!(!iter.has_next());
        assert_eq!(iter.next(), Err(StorageError::IteratorExhausted));
    }

    #[test]
    fn test_vec_iterator_close() {
        let mut iter = VecQueryIterator::new(vec![entry("a", "1")]);

        iter.close().unwrap();
        assert!(iter.is_closed());
        assert!(!iter.has_next());
        assert_eq!(iter.next(), Err(StorageError::IteratorClosed));

        // Closing again is harmless
        iter.close().unwrap();
    }

    #[test]
    fn test_scoped_iterator_closes_on_drop() {
        let closes = Arc::new(AtomicUsize::new(0));

        {
            let _scoped = ScopedIterator::new(Box::new(CountingIterator {
                closes: closes.clone(),
            }));
        }

        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_scoped_iterator_closes_on_early_return() {
        let closes = Arc::new(AtomicUsize::new(0));

        let drain = |closes: Arc<AtomicUsize>| -> StorageResult<()> {
            let mut scoped = ScopedIterator::new(Box::new(CountingIterator { closes }));
            scoped.next()?;
            Ok(())
        };

        assert!(drain(closes.clone()).is_err());
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }
}
