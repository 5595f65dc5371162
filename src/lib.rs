// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Client-side state reconciliation for escrow-anchored unidirectional
//! payment channels.
//!
//! A channel's authoritative balance is split across two sources of truth:
//! the on-chain escrow contract (total deposited value, expiration,
//! settlement nonce) and the off-chain service the client pays (the highest
//! amount the client has signed off on under the current nonce). This crate
//! fetches both, authenticates the off-chain query with a signed challenge,
//! and merges them into a single [`ChannelState`] callers can bill against.

mod channel;
mod errors;
mod escrow;
mod service;
mod signer;
mod state;

pub use channel::*;
pub use errors::*;
pub use escrow::*;
pub use service::*;
pub use signer::*;
pub use state::*;
