//! Chain of visited hops.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// One visited URL and the status code observed for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HopRecord {
    /// Absolute URL requested at this hop
    pub url: String,
    /// Status code, `None` while the request is in flight or if the hop failed
    /// before its response was accepted
    pub status_code: Option<u16>,
}

/// Ordered, append-only record of the hops of one resolution.
///
/// Only the resolution that created it appends to it. Clones share the same
/// records, so a handle taken before cancelling or failing still shows the
/// hops gathered up to that point.
#[derive(Debug, Clone, Default)]
pub struct Chain {
    hops: Arc<RwLock<Vec<HopRecord>>>,
}

impl Chain {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<HopRecord>> {
        self.hops.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<HopRecord>> {
        self.hops.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a snapshot of the hops in visit order.
    pub fn hops(&self) -> Vec<HopRecord> {
        self.read().clone()
    }

    /// Number of hops recorded so far.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// `true` if no hop has been recorded.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// The most recently visited hop.
    pub fn last(&self) -> Option<HopRecord> {
        self.read().last().cloned()
    }

    /// `true` if `url` exactly matches any visited URL.
    pub fn contains_url(&self, url: &str) -> bool {
        self.read().iter().any(|hop| hop.url == url)
    }

    pub(crate) fn push(&self, url: String) {
        self.write().push(HopRecord {
            url,
            status_code: None,
        });
    }

    /// Sets the status code of the most recent hop.
    pub(crate) fn record_status(&self, status: u16) {
        if let Some(hop) = self.write().last_mut() {
            hop.status_code = Some(status);
        }
    }
}
