// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// The key of the [`RunningFlag`] record.
pub const RUNNING_KEY: &[u8] = b"running";

/// The key of the [`CounterValue`] record.
pub const COUNT_KEY: &[u8] = b"count";

/// Whether fees are currently being counted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunningFlag {
    /// `true` between a start and the next stop.
    pub running: bool,
}

/// The accumulated count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CounterValue {
    /// The current value of the counter.
    pub count: u64,
}
