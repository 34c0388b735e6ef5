// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Read-through cache around a [`CorpusSource`].
//!
//! The first [`get`](CorpusCache::get) loads and builds the corpus; later calls
//! hand out the same `Arc` until [`invalidate`](CorpusCache::invalidate) is
//! called. Readers never block each other. A failed load leaves the cache empty
//! so the next call retries.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use super::{Corpus, CorpusSource};
use crate::error::Result;

pub struct CorpusCache<S> {
    source: S,
    slot: RwLock<Option<Arc<Corpus>>>,
}

impl<S: CorpusSource> CorpusCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            slot: RwLock::new(None),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn get(&self) -> Result<Arc<Corpus>> {
        if let Some(corpus) = self.slot.read().as_ref() {
            return Ok(Arc::clone(corpus));
        }

        let mut slot = self.slot.write();
        // Another writer may have filled it while we waited.
        if let Some(corpus) = slot.as_ref() {
            return Ok(Arc::clone(corpus));
        }

        let corpus = Arc::new(Corpus::load(&self.source)?);
        debug!(posts = corpus.len(), "corpus cached");
        *slot = Some(Arc::clone(&corpus));
        Ok(corpus)
    }

    /// Drop the cached corpus. The next `get` reloads from the source.
    pub fn invalidate(&self) {
        *self.slot.write() = None;
    }

    pub fn is_loaded(&self) -> bool {
        self.slot.read().is_some()
    }
}
