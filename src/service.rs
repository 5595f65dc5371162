// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use crate::signer::{AccountSigner, TypedValue};
use crate::state::encode_channel_id;
use crate::Error;
use async_trait::async_trait;
use num_bigint::BigUint;

/// Credential-bearing request for the off-chain channel state query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateQueryRequest {
    /// Channel id as a fixed-width 4-byte big-endian integer.
    pub channel_id: [u8; 4],
    /// Signature over the typed value `uint256(channel_id)`. Proves the
    /// caller controls the channel's account without transmitting a secret.
    pub signature: Vec<u8>,
}

impl StateQueryRequest {
    /// Builds the signed challenge for a channel id. The challenge depends
    /// only on the id, not on any on-chain read.
    pub async fn sign<W>(channel_id: u64, signer: &W) -> Result<Self, Error>
    where
        W: AccountSigner + ?Sized,
    {
        let encoded = encode_channel_id(channel_id)?;
        let signature = signer
            .sign(&TypedValue::Uint256(BigUint::from(channel_id)))
            .await?;
        Ok(StateQueryRequest {
            channel_id: encoded,
            signature,
        })
    }
}

/// Raw reply from the state service. Both fields are variable-length
/// big-endian unsigned integers; zero-length means zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateQueryReply {
    /// Nonce under which the service holds a valid signed amount.
    pub current_nonce: Vec<u8>,
    /// Highest signed amount the service has acknowledged.
    pub current_signed_amount: Vec<u8>,
}

/// Off-chain channel state capability: a single-shot query for the latest
/// state the service holds for a channel. The service verifies the request
/// signature against the channel's registered sender before answering.
/// Retries, if any, belong to the transport below this trait.
#[async_trait]
pub trait StateService: Send + Sync {
    async fn query_state(&self, request: StateQueryRequest) -> Result<StateQueryReply, Error>;
}
