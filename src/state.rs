// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use crate::escrow::ChannelRecord;
use crate::service::StateQueryReply;
use crate::Error;
use num_bigint::{BigInt, BigUint};
use serde::{Deserialize, Serialize};

/// Merged view of a payment channel, combining the on-chain escrow record
/// with the off-chain service-acknowledged signed amount.
///
/// A `ChannelState` is immutable once constructed; each successful sync
/// replaces the channel's held state wholesale, so callers never observe a
/// half-updated record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelState {
    /// Settlement nonce recorded on-chain at last sync.
    #[serde(with = "biguint_str")]
    pub nonce: BigUint,
    /// Nonce the service reports its signed amount under. May lag `nonce` if
    /// the service has not yet observed an on-chain settlement event.
    #[serde(with = "biguint_str")]
    pub current_nonce: BigUint,
    /// On-chain expiry of the channel, as a block height.
    pub expiration: u64,
    /// Total value ever deposited into the channel.
    #[serde(with = "biguint_str")]
    pub total_amount: BigUint,
    /// Highest amount the client has signed and the service has
    /// acknowledged, under `current_nonce`.
    #[serde(with = "biguint_str")]
    pub last_signed_amount: BigUint,
    /// Spendable remainder, `total_amount - last_signed_amount`. Negative
    /// values (stale chain read, misbehaving service) are reported as
    /// computed, never clamped; spending policy belongs to the caller.
    #[serde(with = "bigint_str")]
    pub available_amount: BigInt,
}

impl ChannelState {
    /// Combines an on-chain record with a raw service reply into a fresh
    /// state. The reply's byte arrays are decoded as variable-length
    /// big-endian unsigned integers.
    pub(crate) fn merge(record: &ChannelRecord, reply: &StateQueryReply) -> Self {
        let current_nonce = decode_biguint_be(&reply.current_nonce);
        let last_signed_amount = decode_biguint_be(&reply.current_signed_amount);
        let available_amount =
            BigInt::from(record.value.clone()) - BigInt::from(last_signed_amount.clone());
        ChannelState {
            nonce: record.nonce.clone(),
            current_nonce,
            expiration: record.expiration,
            total_amount: record.value.clone(),
            last_signed_amount,
            available_amount,
        }
    }

    /// True when the service has not yet caught up to an on-chain nonce
    /// bump. A valid transient condition; callers typically hold off
    /// trusting `last_signed_amount` until the nonces agree.
    pub fn nonce_skewed(&self) -> bool {
        self.current_nonce < self.nonce
    }
}

/// Decodes a variable-length big-endian byte array as an unsigned integer.
/// Zero-length and all-zero arrays decode to zero.
pub fn decode_biguint_be(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Encodes a channel id as the fixed-width 4-byte big-endian integer used in
/// the service wire protocol.
pub fn encode_channel_id(id: u64) -> Result<[u8; 4], Error> {
    u32::try_from(id)
        .map(u32::to_be_bytes)
        .map_err(|_| Error::ChannelIdOutOfRange(id))
}

mod biguint_str {
    use num_bigint::BigUint;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    pub fn serialize<S: Serializer>(n: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        String::serialize(&n.to_string(), serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        let s = String::deserialize(deserializer)?;
        BigUint::from_str(&s).map_err(serde::de::Error::custom)
    }
}

mod bigint_str {
    use num_bigint::BigInt;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    pub fn serialize<S: Serializer>(n: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
        String::serialize(&n.to_string(), serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigInt, D::Error> {
        let s = String::deserialize(deserializer)?;
        BigInt::from_str(&s).map_err(serde::de::Error::custom)
    }
}
