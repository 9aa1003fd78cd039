// Path: crates/types/src/account.rs

//! Defines the canonical `AccountId` used to address contracts on the
//! execution host.
//!
//! The shim never derives addresses itself; it receives them decoded from
//! the human-readable suffix of a contract-namespace port identifier and
//! hands them through to the host unchanged.

use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// A contract account identifier in raw byte form.
///
/// Account encodings on the host side are byte strings of 20 or 32 bytes
/// depending on the address scheme, so the identifier is length-agnostic.
#[derive(
    Encode,
    Decode,
    Serialize,
    Deserialize,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Debug,
    Default,
    Hash,
)]
pub struct AccountId(pub Vec<u8>);

impl AsRef<[u8]> for AccountId {
    /// Borrows the raw address bytes.
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for AccountId {
    /// Allows creating an `AccountId` directly from raw bytes.
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl core::fmt::Display for AccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}
