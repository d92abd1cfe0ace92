// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use serde::de::DeserializeOwned;

/// Decodes `bytes` if a value was found.
pub fn from_bytes_option<V: DeserializeOwned>(
    bytes: &Option<Vec<u8>>,
) -> Result<Option<V>, bcs::Error> {
    bytes.as_deref().map(bcs::from_bytes::<V>).transpose()
}

/// Decodes `bytes`, or returns `V::default()` if no value was found. Bytes that are
/// present but do not decode are an error, never the default.
pub fn from_bytes_option_or_default<V: DeserializeOwned + Default>(
    bytes: &Option<Vec<u8>>,
) -> Result<V, bcs::Error> {
    Ok(from_bytes_option(bytes)?.unwrap_or_default())
}
