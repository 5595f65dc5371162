// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use thiserror::Error;

/// Payment channel errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Either state source was unreachable, timed out, or returned a payload
    /// that could not be decoded.
    #[error("failed to fetch channel state: {0}")]
    StateFetch(String),
    /// The off-chain service rejected the signed challenge, or the signing
    /// capability failed to produce a signature.
    #[error("channel authentication failed: {0}")]
    Authentication(String),
    /// A state-changing escrow call failed. Propagated verbatim, never
    /// retried here.
    #[error("escrow transaction failed: {0}")]
    Transaction(String),
    /// Channel ids travel as fixed-width 4-byte big-endian integers on the
    /// wire.
    #[error("channel id {0} does not fit in 4 bytes")]
    ChannelIdOutOfRange(u64),
}
