// Path: crates/api/src/host.rs
//! Defines the `ContractHost` trait, the seam to the contract execution
//! engine, and the `AddressCodec` used to decode contract addresses out of
//! port identifiers.

use icw_types::account::AccountId;
use icw_types::error::{AddressError, HookError};
use icw_types::wasm_msg;

/// A dyn-safe view of the contract execution engine.
///
/// Each hook targets one contract and carries a fully built message from
/// the host schema. The `Vec<u8>` result is whatever the contract returned;
/// the dispatcher treats it as opaque.
pub trait ContractHost: Send + Sync {
    /// Delivers a channel-open proposal to the contract.
    fn on_open_channel(
        &mut self,
        contract: &AccountId,
        msg: &wasm_msg::ChannelOpenMsg,
    ) -> Result<Vec<u8>, HookError>;

    /// Notifies the contract that its channel completed the handshake.
    fn on_connect_channel(
        &mut self,
        contract: &AccountId,
        msg: &wasm_msg::ChannelConnectMsg,
    ) -> Result<Vec<u8>, HookError>;

    /// Delivers an acknowledgement for a packet the contract sent.
    fn on_ack_packet(
        &mut self,
        contract: &AccountId,
        msg: &wasm_msg::PacketAckMsg,
    ) -> Result<Vec<u8>, HookError>;

    /// Notifies the contract that a packet it sent timed out.
    fn on_timeout_packet(
        &mut self,
        contract: &AccountId,
        msg: &wasm_msg::PacketTimeoutMsg,
    ) -> Result<Vec<u8>, HookError>;
}

// Blanket implementation to allow `ContractHost` to be used behind a `Box` trait object.
impl<T: ContractHost + ?Sized> ContractHost for Box<T> {
    fn on_open_channel(
        &mut self,
        contract: &AccountId,
        msg: &wasm_msg::ChannelOpenMsg,
    ) -> Result<Vec<u8>, HookError> {
        (**self).on_open_channel(contract, msg)
    }

    fn on_connect_channel(
        &mut self,
        contract: &AccountId,
        msg: &wasm_msg::ChannelConnectMsg,
    ) -> Result<Vec<u8>, HookError> {
        (**self).on_connect_channel(contract, msg)
    }

    fn on_ack_packet(
        &mut self,
        contract: &AccountId,
        msg: &wasm_msg::PacketAckMsg,
    ) -> Result<Vec<u8>, HookError> {
        (**self).on_ack_packet(contract, msg)
    }

    fn on_timeout_packet(
        &mut self,
        contract: &AccountId,
        msg: &wasm_msg::PacketTimeoutMsg,
    ) -> Result<Vec<u8>, HookError> {
        (**self).on_timeout_packet(contract, msg)
    }
}

/// Decodes the human-readable account strings embedded in contract ports.
///
/// The concrete codec lives with the host (it knows the chain's address
/// scheme); the dispatcher only needs the byte form.
pub trait AddressCodec: Send + Sync {
    /// Decodes a human-readable account string into its byte form.
    fn decode(&self, human: &str) -> Result<AccountId, AddressError>;
}

// Blanket implementation to allow `AddressCodec` to be used behind a `Box` trait object.
impl<T: AddressCodec + ?Sized> AddressCodec for Box<T> {
    fn decode(&self, human: &str) -> Result<AccountId, AddressError> {
        (**self).decode(human)
    }
}
