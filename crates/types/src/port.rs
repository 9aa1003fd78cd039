// Path: crates/types/src/port.rs
//! Port identifier namespaces and prefix rewriting.
//!
//! The shim bridges two port namespaces: the account-abstraction layer
//! registers controller ports under [`ACCOUNT_PORT_PREFIX`], while the
//! contract execution layer owns ports under [`CONTRACT_PORT_PREFIX`].
//! Translation between them is a pure, prefix-anchored string rewrite; the
//! suffix (the contract's own address) is never touched.

use serde::{Deserialize, Serialize};

use crate::error::DispatchError;

/// Port prefix under which the account-abstraction layer registers
/// controller ports, one per owning account.
pub const ACCOUNT_PORT_PREFIX: &str = "icacontroller-";

/// Port prefix under which the contract execution layer registers ports,
/// one per contract address.
pub const CONTRACT_PORT_PREFIX: &str = "wasm.";

/// Version string negotiated on interchain-account channels.
pub const DEFAULT_ICA_VERSION: &str = "ics27-1";

/// The pair of port namespace prefixes bridged by the shim.
///
/// Defaults to [`ACCOUNT_PORT_PREFIX`] / [`CONTRACT_PORT_PREFIX`]; both are
/// configurable so tests and alternative deployments can rename either side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortNamespaces {
    /// Prefix of the account-abstraction namespace.
    pub account: String,
    /// Prefix of the contract execution namespace.
    pub contract: String,
}

impl Default for PortNamespaces {
    fn default() -> Self {
        Self {
            account: ACCOUNT_PORT_PREFIX.to_string(),
            contract: CONTRACT_PORT_PREFIX.to_string(),
        }
    }
}

impl PortNamespaces {
    /// Rewrites a port identifier from the account namespace into the
    /// contract namespace.
    ///
    /// A port that does not start with the account prefix is returned
    /// unchanged; rewriting is strictly prefix-anchored.
    pub fn account_to_contract(&self, port_id: &str) -> String {
        match port_id.strip_prefix(self.account.as_str()) {
            Some(rest) => format!("{}{rest}", self.contract),
            None => port_id.to_string(),
        }
    }

    /// Rewrites a port identifier from the contract namespace into the
    /// account namespace. The inverse of [`Self::account_to_contract`].
    pub fn contract_to_account(&self, port_id: &str) -> String {
        match port_id.strip_prefix(self.contract.as_str()) {
            Some(rest) => format!("{}{rest}", self.account),
            None => port_id.to_string(),
        }
    }

    /// Returns the contract address suffix of a contract-namespace port.
    ///
    /// Unlike the rewrites, this fails when the prefix is absent or the
    /// suffix is empty, since the caller is about to decode the suffix as
    /// an account address.
    pub fn contract_suffix<'a>(&self, port_id: &'a str) -> Result<&'a str, DispatchError> {
        let suffix = port_id.strip_prefix(self.contract.as_str()).ok_or_else(|| {
            DispatchError::MalformedPortId {
                port_id: port_id.to_string(),
                reason: format!("missing {} prefix", self.contract),
            }
        })?;
        if suffix.is_empty() {
            return Err(DispatchError::MalformedPortId {
                port_id: port_id.to_string(),
                reason: "empty contract address".to_string(),
            });
        }
        Ok(suffix)
    }
}
