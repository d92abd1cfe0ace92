// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Groups the values written to a store in a single call.
//!
//! Records are never deleted, so a batch only holds insertions. When a key appears twice,
//! the later value is the one that ends up in the store.

use serde::Serialize;

/// Key-value pairs waiting to be written, in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Batch {
    entries: Vec<(Vec<u8>, Vec<u8>)>,
}

impl Batch {
    /// Creates a batch with nothing to write.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether there is nothing to write.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The number of pending entries, counting repeated keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Queues already encoded `value` under `key`.
    pub fn put_key_value_bytes(&mut self, key: Vec<u8>, value: Vec<u8>) {
        self.entries.push((key, value));
    }

    /// Encodes `value` with BCS and queues it under `key`.
    pub fn put_key_value(
        &mut self,
        key: Vec<u8>,
        value: &impl Serialize,
    ) -> Result<(), bcs::Error> {
        let bytes = bcs::to_bytes(value)?;
        self.entries.push((key, bytes));
        Ok(())
    }
}

impl IntoIterator for Batch {
    type Item = (Vec<u8>, Vec<u8>);
    type IntoIter = std::vec::IntoIter<(Vec<u8>, Vec<u8>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
