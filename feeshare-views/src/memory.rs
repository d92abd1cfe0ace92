// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! A store kept entirely in process memory, split into partitions by root key.

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use thiserror::Error;

use crate::{
    batch::Batch,
    store::{KeyValueStoreError, ReadableKeyValueStore, WithError, WritableKeyValueStore},
};

/// The content of one partition, ordered by key.
type Entries = BTreeMap<Vec<u8>, Vec<u8>>;

/// A set of partitions. Clones share the same partitions.
#[derive(Clone, Debug, Default)]
pub struct MemoryDatabase {
    partitions: Arc<Mutex<BTreeMap<Vec<u8>, Arc<RwLock<Entries>>>>>,
}

impl MemoryDatabase {
    /// Creates a database without partitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the partition at `root_key`, creating it empty on first use. Stores opened
    /// at the same root key see each other's writes.
    pub fn open_partition(&self, root_key: &[u8]) -> Result<MemoryStore, MemoryStoreError> {
        let mut partitions = self
            .partitions
            .lock()
            .map_err(|_| MemoryStoreError::Poisoned)?;
        let entries = partitions.entry(root_key.to_vec()).or_default().clone();
        Ok(MemoryStore {
            root_key: root_key.to_vec(),
            entries,
        })
    }
}

/// A handle to a single partition of a [`MemoryDatabase`], or to a standalone map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    root_key: Vec<u8>,
    entries: Arc<RwLock<Entries>>,
}

impl MemoryStore {
    /// Creates a standalone store that belongs to no database.
    pub fn new() -> Self {
        Self::default()
    }

    /// The root key of the partition. Empty for a standalone store.
    pub fn root_key(&self) -> &[u8] {
        &self.root_key
    }

    fn entries(&self) -> Result<RwLockReadGuard<'_, Entries>, MemoryStoreError> {
        self.entries.read().map_err(|_| MemoryStoreError::Poisoned)
    }

    fn entries_mut(&self) -> Result<RwLockWriteGuard<'_, Entries>, MemoryStoreError> {
        self.entries.write().map_err(|_| MemoryStoreError::Poisoned)
    }
}

impl WithError for MemoryStore {
    type Error = MemoryStoreError;
}

impl ReadableKeyValueStore for MemoryStore {
    fn read_value_bytes(&self, key: &[u8]) -> Result<Option<Vec<u8>>, MemoryStoreError> {
        Ok(self.entries()?.get(key).cloned())
    }
}

impl WritableKeyValueStore for MemoryStore {
    fn write_batch(&self, batch: Batch) -> Result<(), MemoryStoreError> {
        let mut entries = self.entries_mut()?;
        tracing::trace!(
            root_key = ?self.root_key,
            entries = batch.len(),
            "applying batch"
        );
        entries.extend(batch);
        Ok(())
    }
}

/// The error type for [`MemoryStore`].
#[derive(Error, Debug)]
pub enum MemoryStoreError {
    /// A thread panicked while holding the lock of a partition.
    #[error("a memory partition lock was poisoned")]
    Poisoned,

    /// Serialization error with BCS.
    #[error(transparent)]
    BcsError(#[from] bcs::Error),
}

impl KeyValueStoreError for MemoryStoreError {
    const BACKEND: &'static str = "memory";
}
