// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use feeshare_views::ViewError;
use thiserror::Error;

/// An error that can occur while accessing the fee-share records.
#[derive(Debug, Error)]
pub enum KeeperError {
    /// The bytes stored under a record key were not written by the keeper.
    #[error(
        "the record stored under {:?} is malformed: {}",
        String::from_utf8_lossy(.key),
        .error
    )]
    Corrupted {
        /// The key of the malformed record.
        key: Vec<u8>,
        /// The decoding failure.
        #[source]
        error: bcs::Error,
    },

    /// The store failed to execute the operation.
    #[error(transparent)]
    View(#[from] ViewError),

    /// The keeper was given an unusable configuration.
    #[error("invalid keeper configuration: {0}")]
    InvalidConfig(String),
}
