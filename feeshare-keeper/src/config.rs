// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::KeeperError;

/// The module account receiving the collected fees, unless configured otherwise.
pub const DEFAULT_FEE_COLLECTOR_NAME: &str = "fee_collector";

/// The construction-time settings of a [`crate::Keeper`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct KeeperConfig {
    /// The name of the module account fees are collected into.
    #[serde(default = "default_fee_collector_name")]
    pub fee_collector_name: String,
    /// The address allowed to update the module parameters, typically the governance
    /// module account.
    pub authority: String,
}

fn default_fee_collector_name() -> String {
    DEFAULT_FEE_COLLECTOR_NAME.to_string()
}

impl KeeperConfig {
    /// Creates a configuration with the default fee collector.
    pub fn new(authority: impl Into<String>) -> Self {
        KeeperConfig {
            fee_collector_name: default_fee_collector_name(),
            authority: authority.into(),
        }
    }

    /// Replaces the name of the fee collector account.
    pub fn with_fee_collector_name(mut self, fee_collector_name: impl Into<String>) -> Self {
        self.fee_collector_name = fee_collector_name.into();
        self
    }

    /// Checks that the configuration can be used to build a keeper.
    pub fn validate(&self) -> Result<(), KeeperError> {
        if self.authority.trim().is_empty() {
            return Err(KeeperError::InvalidConfig(
                "the authority must not be empty".to_string(),
            ));
        }
        if self.fee_collector_name.trim().is_empty() {
            return Err(KeeperError::InvalidConfig(
                "the fee collector name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
