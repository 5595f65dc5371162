// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use crate::escrow::{EscrowContract, TxReceipt};
use crate::service::{StateQueryRequest, StateService};
use crate::signer::AccountSigner;
use crate::state::ChannelState;
use crate::Error;
use futures::try_join;
use num_bigint::BigUint;
use num_traits::Signed;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// A single unidirectional payment channel: its on-chain identity plus the
/// capabilities needed to reconcile and fund it.
///
/// The channel exclusively owns its [`ChannelState`]. Each successful
/// [`sync`](Channel::sync) builds a fresh state from both sources of truth
/// and swaps it in wholesale; concurrent syncs on the same channel are
/// serialized so a second caller queues behind the in-flight one rather
/// than racing it. Distinct channels are fully independent.
pub struct Channel<C, S, W>
where
    C: EscrowContract,
    S: StateService,
    W: AccountSigner,
{
    id: u64,
    escrow: Arc<C>,
    service: Arc<S>,
    signer: Arc<W>,
    state: RwLock<ChannelState>,
    sync_lock: Mutex<()>,
}

impl<C, S, W> Channel<C, S, W>
where
    C: EscrowContract,
    S: StateService,
    W: AccountSigner,
{
    /// Creates an unsynced channel holding the zero state. The state is
    /// populated only by a successful [`sync`](Channel::sync).
    pub fn new(id: u64, escrow: Arc<C>, service: Arc<S>, signer: Arc<W>) -> Self {
        Channel {
            id,
            escrow,
            service,
            signer,
            state: RwLock::new(ChannelState::default()),
            sync_lock: Mutex::new(()),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Last reconciled state; the zero state until the first successful
    /// sync. A failed sync never alters it.
    pub fn state(&self) -> ChannelState {
        self.state.read().clone()
    }

    /// Reconciles the channel against both sources of truth and returns the
    /// merged state.
    ///
    /// The on-chain record and the authenticated off-chain query are fetched
    /// concurrently; neither depends on the other, and the signed challenge
    /// depends only on the channel id. The held state is replaced only after
    /// both reads succeed — on any failure (transport, decoding, rejected
    /// challenge, timeout) the previous state is left untouched and the
    /// error is surfaced without retrying.
    pub async fn sync(&self) -> Result<ChannelState, Error> {
        let _in_flight = self.sync_lock.lock().await;

        let request = StateQueryRequest::sign(self.id, self.signer.as_ref()).await?;
        debug!(
            channel = self.id,
            signature = %hex::encode(&request.signature),
            "querying channel state"
        );

        let (record, reply) = try_join!(
            self.escrow.read_channel(self.id),
            self.service.query_state(request),
        )?;

        let next = ChannelState::merge(&record, &reply);
        if next.available_amount.is_negative() {
            warn!(
                channel = self.id,
                total = %next.total_amount,
                signed = %next.last_signed_amount,
                "signed amount exceeds deposited funds"
            );
        }
        if next.nonce_skewed() {
            debug!(
                channel = self.id,
                chain_nonce = %next.nonce,
                service_nonce = %next.current_nonce,
                "service nonce lags chain nonce"
            );
        }
        debug!(
            channel = self.id,
            nonce = %next.nonce,
            available = %next.available_amount,
            "channel state reconciled"
        );

        *self.state.write() = next.clone();
        Ok(next)
    }

    /// Deposits additional funds into the channel's escrow. Pass-through to
    /// the contract capability; callers re-sync to observe the effect.
    pub async fn add_funds(&self, amount: &BigUint) -> Result<TxReceipt, Error> {
        self.escrow
            .add_funds(self.signer.address(), self.id, amount)
            .await
    }

    /// Pushes the channel's expiry out to the given block height.
    pub async fn extend_expiration(&self, expiration: u64) -> Result<TxReceipt, Error> {
        self.escrow
            .extend_expiration(self.signer.address(), self.id, expiration)
            .await
    }

    /// Extends expiry and deposits funds in a single transaction.
    pub async fn extend_and_add_funds(
        &self,
        expiration: u64,
        amount: &BigUint,
    ) -> Result<TxReceipt, Error> {
        self.escrow
            .extend_and_add_funds(self.signer.address(), self.id, expiration, amount)
            .await
    }
}
