// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use feeshare_views::{
    batch::Batch,
    common::from_bytes_option_or_default,
    store::KeyValueStore,
    ViewError,
};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, error, instrument, trace};

use crate::{
    config::KeeperConfig,
    expected_keepers::{AccountKeeper, BankKeeper, ContractKeeper},
    state::{CounterValue, RunningFlag, COUNT_KEY, RUNNING_KEY},
    KeeperError, MODULE_NAME,
};

#[cfg(test)]
#[path = "unit_tests/keeper_tests.rs"]
mod tests;

/// Typed access to the records of the fee-share module.
///
/// The store is expected to be the partition owned by the module. Reads and writes go
/// straight to it, so two keepers built over the same partition observe each other's
/// writes.
#[derive(Clone)]
pub struct Keeper<S> {
    store: S,
    account_keeper: Arc<dyn AccountKeeper>,
    bank_keeper: Arc<dyn BankKeeper>,
    contract_keeper: Arc<dyn ContractKeeper>,
    config: KeeperConfig,
}

impl<S: std::fmt::Debug> std::fmt::Debug for Keeper<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keeper")
            .field("store", &self.store)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<S> Keeper<S>
where
    S: KeyValueStore,
{
    /// Creates a keeper over `store` after validating `config`.
    pub fn new(
        store: S,
        account_keeper: Arc<dyn AccountKeeper>,
        bank_keeper: Arc<dyn BankKeeper>,
        contract_keeper: Arc<dyn ContractKeeper>,
        config: KeeperConfig,
    ) -> Result<Self, KeeperError> {
        config.validate()?;
        debug!(
            module = MODULE_NAME,
            fee_collector = %config.fee_collector_name,
            authority = %config.authority,
            "creating keeper"
        );
        Ok(Keeper {
            store,
            account_keeper,
            bank_keeper,
            contract_keeper,
            config,
        })
    }

    /// Returns whether fees are being counted. A flag that was never written is stopped.
    #[instrument(level = "trace", skip_all)]
    pub fn is_running(&self) -> Result<RunningFlag, KeeperError> {
        self.read_record(RUNNING_KEY)
    }

    /// Marks the counter as running, whatever its previous state.
    #[instrument(level = "trace", skip_all)]
    pub fn start_counter(&self) -> Result<(), KeeperError> {
        self.write_running(true)
    }

    /// Marks the counter as stopped, whatever its previous state.
    #[instrument(level = "trace", skip_all)]
    pub fn stop_counter(&self) -> Result<(), KeeperError> {
        self.write_running(false)
    }

    /// Returns the current count. A count that was never written is zero.
    #[instrument(level = "trace", skip_all)]
    pub fn get_count(&self) -> Result<CounterValue, KeeperError> {
        self.read_record(COUNT_KEY)
    }

    /// Replaces the current count.
    #[instrument(level = "trace", skip(self))]
    pub fn set_count(&self, count: u64) -> Result<(), KeeperError> {
        self.write_record(COUNT_KEY, &CounterValue { count })?;
        trace!(count, "count updated");
        Ok(())
    }

    fn write_running(&self, running: bool) -> Result<(), KeeperError> {
        self.write_record(RUNNING_KEY, &RunningFlag { running })?;
        debug!(running, "counter state changed");
        Ok(())
    }

    fn read_record<R>(&self, key: &[u8]) -> Result<R, KeeperError>
    where
        R: DeserializeOwned + Default,
    {
        let bytes = self.store.read_value_bytes(key).map_err(ViewError::from)?;
        from_bytes_option_or_default(&bytes).map_err(|error| {
            error!(
                key = %String::from_utf8_lossy(key),
                %error,
                "malformed record in the fee-share store"
            );
            KeeperError::Corrupted {
                key: key.to_vec(),
                error,
            }
        })
    }

    fn write_record(&self, key: &[u8], record: &impl Serialize) -> Result<(), KeeperError> {
        let mut batch = Batch::new();
        batch
            .put_key_value(key.to_vec(), record)
            .map_err(ViewError::from)?;
        self.store.write_batch(batch).map_err(ViewError::from)?;
        Ok(())
    }
}

impl<S> Keeper<S> {
    /// Returns the address allowed to update the module parameters.
    pub fn authority(&self) -> &str {
        &self.config.authority
    }

    /// Returns the name of the module account fees are collected into.
    pub fn fee_collector_name(&self) -> &str {
        &self.config.fee_collector_name
    }

    /// Returns the account service of the host.
    pub fn account_keeper(&self) -> &Arc<dyn AccountKeeper> {
        &self.account_keeper
    }

    /// Returns the bank service of the host.
    pub fn bank_keeper(&self) -> &Arc<dyn BankKeeper> {
        &self.bank_keeper
    }

    /// Returns the contract service of the host.
    pub fn contract_keeper(&self) -> &Arc<dyn ContractKeeper> {
        &self.contract_keeper
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns a span tagged with the module, for the surrounding components to log under.
    pub fn span(&self) -> tracing::Span {
        tracing::info_span!("keeper", module = %format!("x/{MODULE_NAME}"))
    }
}
