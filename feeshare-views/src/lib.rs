// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! This crate is used by the fee-share module to map small typed records onto a
//! key-value store.
//!
//! The package provides essentially two functionalities:
//! * An abstraction to access databases, through the [`store::ReadableKeyValueStore`]
//!   and [`store::WritableKeyValueStore`] traits.
//! * Helpers to encode and decode records with BCS, so that every stored value has a
//!   single canonical byte representation.
//!
//! ## Backends.
//!
//! A backend implements [`store::ReadableKeyValueStore`] and
//! [`store::WritableKeyValueStore`] for a handle to one partition, so that the keys used
//! by a module never collide with those of another. [`memory::MemoryDatabase`] is the
//! backend provided here. The host application may supply its own.
//!
//! All operations are synchronous. A store never suspends the caller.

#![deny(missing_docs)]

/// The definition of the batches for writing in the database.
pub mod batch;

/// The BCS helpers used for decoding stored values.
pub mod common;

/// The definitions of the key-value store traits.
pub mod store;

/// Helper definitions for in-memory storage.
pub mod memory;

mod error;

pub use error::ViewError;

/// Re-exports used by dependent crates.
#[doc(hidden)]
pub use {bcs, serde};
