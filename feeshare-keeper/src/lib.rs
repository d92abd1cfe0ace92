// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! The persistent state of the fee-share module.
//!
//! The module keeps two singleton records in its key-value partition:
//! * a [`state::RunningFlag`] under the key `"running"`, telling whether fees are
//!   currently being counted;
//! * a [`state::CounterValue`] under the key `"count"`, holding the accumulated count.
//!
//! The [`Keeper`] is the only writer of these records. It holds no state of its own: every
//! call reads from or writes to the store it was constructed with. A record that was never
//! written reads back as its zero value, while a record whose bytes cannot be decoded is
//! reported as [`KeeperError::Corrupted`].
//!
//! The keeper is also handed the account, bank and contract services of the surrounding
//! module (see [`expected_keepers`]). It only stores them for the module's other
//! components; reading and writing the records never involves them.

#![deny(missing_docs)]

/// The configuration of the keeper.
pub mod config;

/// The external services the keeper is constructed with.
pub mod expected_keepers;

/// The records persisted by the keeper.
pub mod state;

/// Helper types for tests.
#[cfg(with_testing)]
pub mod test_utils;

mod error;
mod keeper;

pub use self::{error::KeeperError, keeper::Keeper};

/// The name of the module owning the records.
pub const MODULE_NAME: &str = "feeshare";
