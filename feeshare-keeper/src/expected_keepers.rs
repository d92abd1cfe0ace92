// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! The services of the surrounding application that the fee-share module depends on.
//!
//! These are implemented by the host. The [`crate::Keeper`] receives them at construction
//! and hands them out to the rest of the module, but never calls them itself.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The address of an account or a contract.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Address(pub String);

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An amount of a single denomination.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coin {
    /// The denomination.
    pub denom: String,
    /// The amount, in the smallest unit of `denom`.
    pub amount: u128,
}

/// What the contract service knows about a deployed contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractInfo {
    /// The account that instantiated the contract.
    pub creator: Address,
    /// The account allowed to migrate the contract, if any.
    pub admin: Option<Address>,
}

/// An error reported by one of the host services.
#[derive(Debug, Error)]
pub enum CollaboratorError {
    /// The sending module account does not hold enough funds.
    #[error("module account {0} has insufficient funds")]
    InsufficientFunds(String),

    /// The account is not known to the host.
    #[error("unknown account {0}")]
    UnknownAccount(Address),
}

/// Account lookups.
pub trait AccountKeeper: Send + Sync {
    /// Returns the address of the account owned by the module `module_name`.
    fn module_address(&self, module_name: &str) -> Option<Address>;
}

/// Balance transfers.
pub trait BankKeeper: Send + Sync {
    /// Moves `coins` from the account of `sender_module` to `recipient`.
    fn send_coins_from_module_to_account(
        &self,
        sender_module: &str,
        recipient: &Address,
        coins: &[Coin],
    ) -> Result<(), CollaboratorError>;
}

/// Contract metadata lookups.
pub trait ContractKeeper: Send + Sync {
    /// Returns the metadata of `contract`, or `None` if it is not a deployed contract.
    fn contract_info(&self, contract: &Address) -> Option<ContractInfo>;
}
