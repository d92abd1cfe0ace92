// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! The traits a backend implements to hold records.

use std::fmt::Debug;

use serde::de::DeserializeOwned;

use crate::{batch::Batch, common::from_bytes_option, ViewError};

/// An error raised by a backend. Every backend error can also carry a BCS failure, so
/// that [`ReadableKeyValueStore::read_value`] can decode on its behalf.
pub trait KeyValueStoreError:
    std::error::Error + From<bcs::Error> + Debug + Send + Sync + 'static
{
    /// The name reported in [`ViewError::StoreError`].
    const BACKEND: &'static str;
}

impl<E: KeyValueStoreError> From<E> for ViewError {
    fn from(error: E) -> Self {
        ViewError::StoreError {
            backend: E::BACKEND,
            error: Box::new(error),
        }
    }
}

/// Ties a store to its error type.
pub trait WithError {
    /// The error returned by every operation of the store.
    type Error: KeyValueStoreError;
}

/// Point lookups in a partition.
pub trait ReadableKeyValueStore: WithError {
    /// Returns the bytes stored under `key`, or `None` if nothing was written there.
    fn read_value_bytes(&self, key: &[u8]) -> Result<Option<Vec<u8>>, Self::Error>;

    /// Tells whether something was written under `key`.
    fn contains_key(&self, key: &[u8]) -> Result<bool, Self::Error> {
        Ok(self.read_value_bytes(key)?.is_some())
    }

    /// Looks up `key` and decodes what is found there.
    fn read_value<V: DeserializeOwned>(&self, key: &[u8]) -> Result<Option<V>, Self::Error> {
        let bytes = self.read_value_bytes(key)?;
        Ok(from_bytes_option(&bytes)?)
    }
}

/// Writes to a partition.
pub trait WritableKeyValueStore: WithError {
    /// Applies every entry of `batch`, replacing whatever was stored under its key.
    fn write_batch(&self, batch: Batch) -> Result<(), Self::Error>;
}

/// A partition that can be both read and written.
pub trait KeyValueStore: ReadableKeyValueStore + WritableKeyValueStore {}

impl<T> KeyValueStore for T where T: ReadableKeyValueStore + WritableKeyValueStore {}
