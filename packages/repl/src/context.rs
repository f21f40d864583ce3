//! Browse context for the REPL.
//!
//! Holds the shared [`Browser`], the current container, the pagination
//! settings and the last listing, so `next`/`prev` can page through it.

use nestview_core::nestview_engine::MemoryEngine;
use nestview_core::{split_names, Browser, Error, Page, PageRequest, Path};

/// The listing most recently shown, replayed by `next` and `prev`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// `ls` of a container; the empty path is the root namespace.
    Container(Path),
    /// `scan` of a container for keys beginning with `prefix`.
    Prefix { path: Path, prefix: String },
}

/// REPL state layered over one opened store.
pub struct BrowseContext {
    browser: Browser<MemoryEngine>,
    current_path: Path,
    request: PageRequest,
    json: bool,
    last: Option<Listing>,
}

impl BrowseContext {
    pub fn new(browser: Browser<MemoryEngine>) -> Self {
        Self {
            browser,
            current_path: Path::root(),
            request: PageRequest::default(),
            json: false,
            last: None,
        }
    }

    pub fn browser(&self) -> &Browser<MemoryEngine> {
        &self.browser
    }

    /// Get the current container path.
    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    /// Move to `path` if it names an existing container.
    pub fn change_dir(&mut self, path: Path) -> Result<(), Error> {
        self.browser.ensure_container(&path)?;
        self.current_path = path;
        Ok(())
    }

    pub fn request(&self) -> PageRequest {
        self.request
    }

    pub fn set_skip(&mut self, skip: usize) {
        self.request.skip = skip;
    }

    pub fn set_limit(&mut self, limit: usize) {
        self.request.limit = limit;
    }

    pub fn json(&self) -> bool {
        self.json
    }

    pub fn set_json(&mut self, json: bool) {
        self.json = json;
    }

    pub fn last_listing(&self) -> Option<&Listing> {
        self.last.as_ref()
    }

    /// Resolve user input against the current path.
    ///
    /// A leading `/` starts from the root; `.` is ignored and `..` drops the
    /// last name (never going above the root). `\/` writes a `/` inside a
    /// name. Empty input is the current path.
    pub fn resolve_path(&self, input: &str) -> Path {
        let input = input.trim();
        let mut path = if input.starts_with('/') {
            Path::root()
        } else {
            self.current_path.clone()
        };
        for name in split_names(input) {
            match name.as_str() {
                "" | "." => {}
                ".." => path = path.parent(),
                name => path.push(name.to_string()),
            }
        }
        path
    }

    /// List the container at `path` with the current pagination.
    pub fn list(&mut self, path: Path) -> Result<Page, Error> {
        let page = if path.is_empty() {
            self.browser.list_root(self.request)?
        } else {
            self.browser.list_container(&path, self.request)?
        };
        self.last = Some(Listing::Container(path));
        Ok(page)
    }

    /// Scan the container at `path` for keys beginning with `prefix`.
    pub fn scan(&mut self, path: Path, prefix: &str) -> Result<Page, Error> {
        let page = self
            .browser
            .scan_prefix(&path, prefix.as_bytes(), self.request)?;
        self.last = Some(Listing::Prefix {
            path,
            prefix: prefix.to_string(),
        });
        Ok(page)
    }

    /// Replay the last listing with `request` as the new pagination.
    ///
    /// Returns `Ok(None)` when nothing has been listed yet. The pagination
    /// only changes when the listing succeeds.
    pub fn replay(&mut self, request: PageRequest) -> Result<Option<Page>, Error> {
        let Some(last) = self.last.clone() else {
            return Ok(None);
        };
        let page = match last {
            Listing::Container(path) if path.is_empty() => self.browser.list_root(request)?,
            Listing::Container(path) => self.browser.list_container(&path, request)?,
            Listing::Prefix { path, prefix } => {
                self.browser.scan_prefix(&path, prefix.as_bytes(), request)?
            }
        };
        self.request = request;
        Ok(Some(page))
    }
}
