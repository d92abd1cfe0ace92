// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// Main error type for the crate.
#[derive(Error, Debug)]
pub enum ViewError {
    /// BCS serialization error.
    #[error(transparent)]
    Serialization(#[from] bcs::Error),

    /// An error happened while accessing the storage backend.
    #[error("Storage operation error in {backend}: {error}")]
    StoreError {
        /// The name of the backend that produced the error.
        backend: &'static str,
        /// The inner error.
        #[source]
        error: Box<dyn std::error::Error + Send + Sync>,
    },
}
