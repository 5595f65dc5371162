// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use crate::Error;
use async_trait::async_trait;
use ethereum_types::Address;
use num_bigint::BigUint;

/// Value forms the signing capability knows how to sign over. The escrow
/// contract's ecosystem signs ABI-typed values rather than raw byte strings,
/// so the type tag is part of the signing input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypedValue {
    Uint256(BigUint),
}

/// Signing capability for the account controlling a channel.
///
/// Key material, the signature algorithm and its byte encoding all live
/// behind this trait; the crate only ever asks for "sign this value" and
/// treats the result as opaque credential bytes. Signing is async since key
/// material may be remote.
#[async_trait]
pub trait AccountSigner: Send + Sync {
    /// Address of the controlling account. Escrow transactions are submitted
    /// on its behalf.
    fn address(&self) -> Address;

    /// Signs a typed value, returning raw signature bytes.
    async fn sign(&self, value: &TypedValue) -> Result<Vec<u8>, Error>;
}
