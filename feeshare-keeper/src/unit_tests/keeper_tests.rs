// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use assert_matches::assert_matches;
use feeshare_views::{
    batch::Batch,
    memory::MemoryStore,
    store::{ReadableKeyValueStore as _, WritableKeyValueStore as _},
};
use test_case::test_case;
use test_strategy::proptest;

use super::*;
use crate::{
    config::DEFAULT_FEE_COLLECTOR_NAME,
    test_utils::{create_keeper_with_store, create_test_keeper, UnreachableServices, TEST_AUTHORITY},
};

fn store_raw(keeper: &Keeper<MemoryStore>, key: &[u8], value: Vec<u8>) {
    let mut batch = Batch::new();
    batch.put_key_value_bytes(key.to_vec(), value);
    keeper.store().write_batch(batch).unwrap();
}

#[test]
fn test_fresh_store_reads_zero_values() {
    let keeper = create_test_keeper();
    assert_eq!(keeper.is_running().unwrap(), RunningFlag { running: false });
    assert_eq!(keeper.get_count().unwrap(), CounterValue { count: 0 });
}

#[test]
fn test_reads_do_not_create_records() {
    let keeper = create_test_keeper();
    keeper.is_running().unwrap();
    keeper.get_count().unwrap();
    assert!(!keeper.store().contains_key(RUNNING_KEY).unwrap());
    assert!(!keeper.store().contains_key(COUNT_KEY).unwrap());
}

#[test]
fn test_start_and_stop_write_the_running_record() {
    let keeper = create_test_keeper();
    keeper.start_counter().unwrap();
    assert_eq!(
        keeper.store().read_value_bytes(RUNNING_KEY).unwrap(),
        Some(vec![0x01])
    );
    keeper.stop_counter().unwrap();
    assert_eq!(
        keeper.store().read_value_bytes(RUNNING_KEY).unwrap(),
        Some(vec![0x00])
    );
}

#[test]
fn test_set_count_writes_the_count_record() {
    let keeper = create_test_keeper();
    keeper.set_count(258).unwrap();
    assert_eq!(
        keeper.store().read_value_bytes(COUNT_KEY).unwrap(),
        Some(vec![0x02, 0x01, 0, 0, 0, 0, 0, 0])
    );
}

#[test_case(false, false; "stopped then stop")]
#[test_case(false, true; "stopped then start")]
#[test_case(true, false; "running then stop")]
#[test_case(true, true; "running then start")]
fn test_transitions_ignore_prior_state(initially_running: bool, start: bool) {
    let keeper = create_test_keeper();
    if initially_running {
        keeper.start_counter().unwrap();
    } else {
        keeper.stop_counter().unwrap();
    }
    if start {
        keeper.start_counter().unwrap();
    } else {
        keeper.stop_counter().unwrap();
    }
    assert_eq!(keeper.is_running().unwrap().running, start);
}

#[test_case(RUNNING_KEY, vec![0x02]; "flag byte out of range")]
#[test_case(RUNNING_KEY, vec![]; "empty flag")]
#[test_case(RUNNING_KEY, vec![0x01, 0x00]; "trailing flag bytes")]
fn test_malformed_running_record_is_reported(key: &[u8], value: Vec<u8>) {
    let keeper = create_test_keeper();
    store_raw(&keeper, key, value);
    assert_matches!(
        keeper.is_running(),
        Err(KeeperError::Corrupted { key, .. }) if key == RUNNING_KEY
    );
}

#[test_case(COUNT_KEY, vec![0x01, 0x02, 0x03]; "short count")]
#[test_case(COUNT_KEY, vec![]; "empty count")]
#[test_case(COUNT_KEY, vec![0; 9]; "trailing count bytes")]
fn test_malformed_count_record_is_reported(key: &[u8], value: Vec<u8>) {
    let keeper = create_test_keeper();
    store_raw(&keeper, key, value);
    assert_matches!(
        keeper.get_count(),
        Err(KeeperError::Corrupted { key, .. }) if key == COUNT_KEY
    );
}

#[test]
fn test_corrupted_record_does_not_leak_into_the_other_one() {
    let keeper = create_test_keeper();
    store_raw(&keeper, COUNT_KEY, vec![0xff]);
    keeper.start_counter().unwrap();
    assert!(keeper.is_running().unwrap().running);
    assert!(keeper.get_count().is_err());

    keeper.set_count(3).unwrap();
    assert_eq!(keeper.get_count().unwrap().count, 3);
}

#[test]
fn test_corruption_message_names_the_key() {
    let keeper = create_test_keeper();
    store_raw(&keeper, RUNNING_KEY, vec![0x07]);
    let error = keeper.is_running().unwrap_err();
    assert!(error.to_string().contains("\"running\""));
}

#[test]
fn test_accessors_return_the_configuration() {
    let keeper = create_test_keeper();
    assert_eq!(keeper.authority(), TEST_AUTHORITY);
    assert_eq!(keeper.fee_collector_name(), DEFAULT_FEE_COLLECTOR_NAME);
}

#[test]
fn test_accessors_return_the_injected_services() {
    let services = Arc::new(UnreachableServices);
    let account_keeper: Arc<dyn AccountKeeper> = services.clone();
    let bank_keeper: Arc<dyn BankKeeper> = services.clone();
    let contract_keeper: Arc<dyn ContractKeeper> = services;
    let keeper = Keeper::new(
        MemoryStore::new(),
        account_keeper.clone(),
        bank_keeper.clone(),
        contract_keeper.clone(),
        KeeperConfig::new(TEST_AUTHORITY).with_fee_collector_name("fees"),
    )
    .unwrap();
    assert!(Arc::ptr_eq(keeper.account_keeper(), &account_keeper));
    assert!(Arc::ptr_eq(keeper.bank_keeper(), &bank_keeper));
    assert!(Arc::ptr_eq(keeper.contract_keeper(), &contract_keeper));
    assert_eq!(keeper.fee_collector_name(), "fees");
}

#[test]
fn test_invalid_configuration_is_rejected() {
    let services = Arc::new(UnreachableServices);
    let result = Keeper::new(
        MemoryStore::new(),
        services.clone(),
        services.clone(),
        services,
        KeeperConfig::new(""),
    );
    assert_matches!(result, Err(KeeperError::InvalidConfig(_)));
}

#[test]
fn test_clones_share_the_store() {
    let keeper = create_test_keeper();
    let clone = keeper.clone();
    clone.set_count(11).unwrap();
    clone.start_counter().unwrap();
    assert_eq!(keeper.get_count().unwrap().count, 11);
    assert!(keeper.is_running().unwrap().running);
}

#[proptest]
fn test_set_count_round_trips(count: u64) {
    let keeper = create_test_keeper();
    keeper.set_count(count).unwrap();
    assert_eq!(keeper.get_count().unwrap(), CounterValue { count });
    keeper.set_count(count).unwrap();
    assert_eq!(keeper.get_count().unwrap(), CounterValue { count });
}

#[proptest]
fn test_records_are_independent(count: u64, toggles: Vec<bool>) {
    let keeper = create_keeper_with_store(MemoryStore::new()).unwrap();
    keeper.set_count(count).unwrap();
    let mut expected = false;
    for start in toggles {
        if start {
            keeper.start_counter().unwrap();
        } else {
            keeper.stop_counter().unwrap();
        }
        expected = start;
        assert_eq!(keeper.get_count().unwrap().count, count);
    }
    assert_eq!(keeper.is_running().unwrap().running, expected);

    keeper.set_count(count.wrapping_add(1)).unwrap();
    assert_eq!(keeper.is_running().unwrap().running, expected);
}
