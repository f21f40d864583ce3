//! The three browse operations.
//!
//! Each operation resolves its target, walks the target's cursor through the
//! scan stages and classifies what comes out. The free functions work on an
//! already-open transaction; [`Browser`] opens one transaction per call.

use std::sync::Arc;

use bytes::Bytes;
use nestview_engine::{Container, Engine, ReadTxn};

use crate::{paginate, resolve, CursorScan, EntryClassifier, Error, Page, PageRequest, Path};

/// List the top-level containers of the root namespace.
///
/// Container markers found here carry single-name paths.
pub fn list_root(txn: &dyn ReadTxn, request: PageRequest) -> Result<Page, Error> {
    let root = txn.root();
    let scan = CursorScan::new(root.cursor()?);
    collect_page(root.as_ref(), &Path::root(), scan, request)
}

/// List the entries of the container at `path`.
///
/// The empty path lists the root namespace, the same as [`list_root`].
pub fn list_container(txn: &dyn ReadTxn, path: &Path, request: PageRequest) -> Result<Page, Error> {
    let container = resolve(txn, path)?;
    let scan = CursorScan::new(container.cursor()?);
    collect_page(container.as_ref(), path, scan, request)
}

/// List the entries of the container at `path` whose keys begin with `prefix`.
///
/// There is no root-level prefix scan: an empty `path` is rejected with
/// [`Error::InvalidRequest`] before the store is touched.
pub fn scan_prefix(
    txn: &dyn ReadTxn,
    path: &Path,
    prefix: &[u8],
    request: PageRequest,
) -> Result<Page, Error> {
    check_scan_target(path)?;
    let container = resolve(txn, path)?;
    let scan = CursorScan::with_prefix(container.cursor()?, Bytes::copy_from_slice(prefix));
    collect_page(container.as_ref(), path, scan, request)
}

fn check_scan_target(path: &Path) -> Result<(), Error> {
    if path.is_empty() {
        return Err(Error::InvalidRequest {
            message: "prefix scan requires a container path".to_string(),
        });
    }
    Ok(())
}

fn collect_page(
    container: &dyn Container<'_>,
    parent: &Path,
    scan: CursorScan<'_>,
    request: PageRequest,
) -> Result<Page, Error> {
    let classifier = EntryClassifier::new(container, parent);
    let page = paginate(scan, request)
        .map(|item| classifier.classify(item?))
        .collect::<Result<Page, Error>>()?;
    tracing::debug!(
        path = %parent,
        skip = request.skip,
        limit = request.limit,
        entries = page.len(),
        "page collected"
    );
    Ok(page)
}

/// Read-only browsing over a shared engine handle.
///
/// The engine is opened once by the caller and injected here; clones of a
/// `Browser` share it. Every operation runs inside exactly one read
/// transaction, which is released before the operation returns.
///
/// # Example
///
/// ```rust
/// use nestview_core::{path, Browser, PageRequest};
/// use nestview_core::nestview_engine::{MemoryBucket, MemoryEngine};
///
/// let browser = Browser::new(MemoryEngine::new(
///     MemoryBucket::new()
///         .with_bucket("logs", MemoryBucket::new())
///         .with_bucket("users", MemoryBucket::new().with_value("alice", "1")),
/// ));
///
/// let root = browser.list_root(PageRequest::default()).unwrap();
/// assert_eq!(root.keys(), vec!["logs", "users"]);
///
/// let users = browser.list_container(&path!("users"), PageRequest::default()).unwrap();
/// assert_eq!(users.entries()[0].value(), Some("1"));
/// ```
pub struct Browser<E: ?Sized> {
    engine: Arc<E>,
}

impl<E: Engine> Browser<E> {
    pub fn new(engine: E) -> Self {
        Self::from_shared(Arc::new(engine))
    }
}

impl<E: Engine + ?Sized> Browser<E> {
    /// Browse an engine that is already shared elsewhere.
    pub fn from_shared(engine: Arc<E>) -> Self {
        Browser { engine }
    }

    pub fn engine(&self) -> &Arc<E> {
        &self.engine
    }

    /// Run `f` against one freshly opened read transaction.
    pub fn view<R>(&self, f: impl FnOnce(&dyn ReadTxn) -> Result<R, Error>) -> Result<R, Error> {
        let txn = self.engine.begin_read()?;
        f(txn.as_ref())
    }

    pub fn list_root(&self, request: PageRequest) -> Result<Page, Error> {
        self.view(|txn| list_root(txn, request))
    }

    pub fn list_container(&self, path: &Path, request: PageRequest) -> Result<Page, Error> {
        self.view(|txn| list_container(txn, path, request))
    }

    pub fn scan_prefix(
        &self,
        path: &Path,
        prefix: &[u8],
        request: PageRequest,
    ) -> Result<Page, Error> {
        check_scan_target(path)?;
        self.view(|txn| scan_prefix(txn, path, prefix, request))
    }

    /// Check that `path` names an existing container.
    pub fn ensure_container(&self, path: &Path) -> Result<(), Error> {
        self.view(|txn| resolve(txn, path).map(|_| ()))
    }
}

impl<E: ?Sized> Clone for Browser<E> {
    fn clone(&self) -> Self {
        Browser {
            engine: Arc::clone(&self.engine),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{path, Entry};
    use nestview_engine::{EngineError, MemoryBucket, MemoryEngine};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn store() -> MemoryBucket {
        MemoryBucket::new()
            .with_bucket(
                "users",
                MemoryBucket::new()
                    .with_value("alice", "1")
                    .with_value("bob", "2")
                    .with_bucket("teams", MemoryBucket::new().with_value("core", "x")),
            )
            .with_bucket("logs", MemoryBucket::new())
    }

    /// Counts transactions and delegates to an in-memory engine.
    struct CountingEngine {
        inner: MemoryEngine,
        opened: AtomicUsize,
    }

    impl Engine for CountingEngine {
        fn begin_read(&self) -> Result<Box<dyn ReadTxn + '_>, EngineError> {
            self.opened.fetch_add(1, Ordering::SeqCst);
            self.inner.begin_read()
        }
    }

    fn counting() -> Arc<CountingEngine> {
        Arc::new(CountingEngine {
            inner: MemoryEngine::new(store()),
            opened: AtomicUsize::new(0),
        })
    }

    #[test]
    fn root_markers_carry_single_name_paths() {
        let browser = Browser::new(MemoryEngine::new(store()));
        let page = browser.list_root(PageRequest::default()).unwrap();
        assert_eq!(
            page.into_entries(),
            vec![
                Entry::container("logs", path!("logs")),
                Entry::container("users", path!("users")),
            ]
        );
    }

    #[test]
    fn nested_markers_extend_parent_path() {
        let browser = Browser::new(MemoryEngine::new(store()));
        let page = browser
            .list_container(&path!("users"), PageRequest::default())
            .unwrap();
        assert_eq!(page.keys(), vec!["alice", "bob", "teams"]);
        assert_eq!(
            page.entries()[2].container_path(),
            Some(&path!("users/teams"))
        );
    }

    #[test]
    fn empty_path_lists_root() {
        let browser = Browser::new(MemoryEngine::new(store()));
        let listed = browser
            .list_container(&Path::root(), PageRequest::default())
            .unwrap();
        assert_eq!(listed, browser.list_root(PageRequest::default()).unwrap());
    }

    #[test]
    fn each_operation_opens_one_transaction() {
        let engine = counting();
        let browser = Browser::from_shared(Arc::clone(&engine));
        browser.list_root(PageRequest::default()).unwrap();
        browser
            .list_container(&path!("users/teams"), PageRequest::default())
            .unwrap();
        browser
            .scan_prefix(&path!("users"), b"a", PageRequest::default())
            .unwrap();
        assert_eq!(engine.opened.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn rootless_scan_is_rejected_before_opening_a_transaction() {
        let engine = counting();
        let browser = Browser::from_shared(Arc::clone(&engine));
        let err = browser
            .scan_prefix(&Path::root(), b"a", PageRequest::default())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidRequest { .. }));
        assert_eq!(engine.opened.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn free_functions_share_one_snapshot() {
        let engine = MemoryEngine::new(store());
        let browser = Browser::new(engine);
        let (root, users) = browser
            .view(|txn| {
                let root = list_root(txn, PageRequest::all())?;
                let users = list_container(txn, &path!("users"), PageRequest::new(1, 1))?;
                Ok((root, users))
            })
            .unwrap();
        assert_eq!(root.len(), 2);
        assert_eq!(users.keys(), vec!["bob"]);
    }

    #[test]
    fn ensure_container_rejects_leaves() {
        let browser = Browser::new(MemoryEngine::new(store()));
        assert!(browser.ensure_container(&path!("users/teams")).is_ok());
        assert!(browser.ensure_container(&Path::root()).is_ok());
        let err = browser.ensure_container(&path!("users/alice")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn clones_share_the_engine() {
        let browser = Browser::new(MemoryEngine::new(store()));
        let other = browser.clone();
        assert!(Arc::ptr_eq(browser.engine(), other.engine()));
    }

    #[test]
    fn dyn_engines_can_be_browsed() {
        let engine: Arc<dyn Engine> = Arc::new(MemoryEngine::new(store()));
        let browser = Browser::from_shared(engine);
        let page = browser.list_root(PageRequest::new(0, 1)).unwrap();
        assert_eq!(page.keys(), vec!["logs"]);
    }
}
