// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use feeshare_views::{
    memory::{MemoryDatabase, MemoryStore},
    store::KeyValueStore,
};

use crate::{
    config::KeeperConfig,
    expected_keepers::{
        AccountKeeper, Address, BankKeeper, Coin, CollaboratorError, ContractInfo,
        ContractKeeper,
    },
    Keeper, KeeperError, MODULE_NAME,
};

/// The authority used by test keepers.
pub const TEST_AUTHORITY: &str = "gov";

/// Host services that must never be reached. Every method panics.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnreachableServices;

impl AccountKeeper for UnreachableServices {
    fn module_address(&self, module_name: &str) -> Option<Address> {
        panic!("unexpected account lookup for module {module_name}")
    }
}

impl BankKeeper for UnreachableServices {
    fn send_coins_from_module_to_account(
        &self,
        sender_module: &str,
        recipient: &Address,
        _coins: &[Coin],
    ) -> Result<(), CollaboratorError> {
        panic!("unexpected transfer from {sender_module} to {recipient}")
    }
}

impl ContractKeeper for UnreachableServices {
    fn contract_info(&self, contract: &Address) -> Option<ContractInfo> {
        panic!("unexpected contract lookup for {contract}")
    }
}

/// Creates a keeper over `store` whose host services panic when called.
pub fn create_keeper_with_store<S>(store: S) -> Result<Keeper<S>, KeeperError>
where
    S: KeyValueStore,
{
    let services = Arc::new(UnreachableServices);
    Keeper::new(
        store,
        services.clone(),
        services.clone(),
        services,
        KeeperConfig::new(TEST_AUTHORITY),
    )
}

/// Creates a keeper over a fresh standalone store.
pub fn create_test_keeper() -> Keeper<MemoryStore> {
    create_keeper_with_store(MemoryStore::new()).expect("the test configuration is valid")
}

/// Creates a keeper over the partition of the fee-share module in `database`.
pub fn create_test_keeper_in(database: &MemoryDatabase) -> Keeper<MemoryStore> {
    let store = database
        .open_partition(MODULE_NAME.as_bytes())
        .expect("memory partitions can always be opened");
    create_keeper_with_store(store).expect("the test configuration is valid")
}
