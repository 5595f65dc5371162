// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use crate::Error;
use async_trait::async_trait;
use ethereum_types::{Address, H256};
use num_bigint::BigUint;

/// On-chain record for a single channel, as read from the escrow contract.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelRecord {
    /// Settlement nonce; incremented on-chain when the channel is settled,
    /// invalidating stale off-chain signed amounts.
    pub nonce: BigUint,
    /// Expiry block height.
    pub expiration: u64,
    /// Total value ever deposited into the channel.
    pub value: BigUint,
}

/// Receipt for a submitted escrow transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxReceipt {
    pub transaction_hash: H256,
    pub block_number: u64,
}

/// The escrow contract capability. All mutating calls submit a transaction
/// and resolve once it lands; failures surface as [`Error::Transaction`] and
/// are never retried or batched at this layer.
#[async_trait]
pub trait EscrowContract: Send + Sync {
    /// Read-only, idempotent channel lookup.
    async fn read_channel(&self, channel_id: u64) -> Result<ChannelRecord, Error>;

    /// Deposits additional funds into an existing channel.
    async fn add_funds(
        &self,
        account: Address,
        channel_id: u64,
        amount: &BigUint,
    ) -> Result<TxReceipt, Error>;

    /// Pushes the channel's expiry out to the given block height.
    async fn extend_expiration(
        &self,
        account: Address,
        channel_id: u64,
        expiration: u64,
    ) -> Result<TxReceipt, Error>;

    /// Extends expiry and deposits funds in a single transaction.
    async fn extend_and_add_funds(
        &self,
        account: Address,
        channel_id: u64,
        expiration: u64,
        amount: &BigUint,
    ) -> Result<TxReceipt, Error>;
}
