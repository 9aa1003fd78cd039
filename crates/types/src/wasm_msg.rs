// Path: crates/types/src/wasm_msg.rs
//! The in-memory message schema of the contract execution host.
//!
//! These are the structures the dispatcher hands to the contract host's
//! channel and packet hooks. The host owns the actual wire encoding toward
//! the contract; the shim only builds the in-memory shapes. Field and
//! variant names follow the host's established schema so a serialized form
//! is directly recognizable to contracts written against it.

use serde::{Deserialize, Serialize};

/// One end of a channel as the execution host names it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct IbcEndpoint {
    /// Port identifier of this end.
    pub port_id: String,
    /// Channel identifier of this end.
    pub channel_id: String,
}

/// Channel ordering under the host's wire names.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IbcOrder {
    /// Packets may be relayed in any order.
    #[serde(rename = "ORDER_UNORDERED")]
    Unordered,
    /// Packets are relayed strictly in send order.
    #[serde(rename = "ORDER_ORDERED")]
    Ordered,
}

/// A channel description spanning both endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct IbcChannel {
    /// The endpoint on this chain.
    pub endpoint: IbcEndpoint,
    /// The endpoint on the counterparty chain.
    pub counterparty_endpoint: IbcEndpoint,
    /// Packet ordering of the channel.
    pub order: IbcOrder,
    /// Version string proposed or negotiated for the channel.
    pub version: String,
    /// The single connection the channel is built on.
    pub connection_id: String,
}

/// Block cutoff of a packet timeout.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct IbcTimeoutBlock {
    /// Revision (chain fork) number of the cutoff.
    pub revision: u64,
    /// Block height of the cutoff within the revision.
    pub height: u64,
}

/// Packet timeout in block and/or wall-clock form.
///
/// A side that is not set is omitted entirely from the serialized form;
/// contracts distinguish "no block cutoff" by the field's absence, not by
/// a zero height.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct IbcTimeout {
    /// Block cutoff, absent when the packet has no height timeout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block: Option<IbcTimeoutBlock>,
    /// Absolute cutoff in nanoseconds since the unix epoch, absent when the
    /// packet has no wall-clock timeout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
}

/// A packet as the execution host sees it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct IbcPacket {
    /// Raw application payload.
    pub data: Vec<u8>,
    /// Sending endpoint.
    pub src: IbcEndpoint,
    /// Receiving endpoint.
    pub dest: IbcEndpoint,
    /// Send sequence number on the source channel.
    pub sequence: u64,
    /// When the packet expires if not relayed.
    pub timeout: IbcTimeout,
}

/// An acknowledgement payload in host form.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct IbcAcknowledgement {
    /// Raw acknowledgement bytes written by the receiving application.
    pub data: Vec<u8>,
}

/// Hook message: a channel handshake was initiated for one of this host's
/// contracts.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChannelOpenMsg {
    /// The proposed channel, both endpoints included.
    pub channel: IbcChannel,
}

/// Hook message: the counterparty completed its half of the handshake and
/// the channel is now usable.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChannelConnectMsg {
    /// The channel being connected.
    pub channel: IbcChannel,
    /// Version string the counterparty settled on.
    pub counterparty_version: String,
}

/// Hook message: an acknowledgement arrived for a packet this host sent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PacketAckMsg {
    /// The acknowledgement written by the receiving chain.
    pub acknowledgement: IbcAcknowledgement,
    /// The packet the acknowledgement refers to.
    pub original_packet: IbcPacket,
    /// Identity of the relayer that delivered the acknowledgement.
    pub relayer: String,
}

/// Hook message: a packet this host sent expired without being delivered.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PacketTimeoutMsg {
    /// The expired packet.
    pub packet: IbcPacket,
    /// Identity of the relayer that proved the timeout.
    pub relayer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_uses_wire_names() {
        assert_eq!(
            serde_json::to_string(&IbcOrder::Ordered).unwrap(),
            "\"ORDER_ORDERED\""
        );
        assert_eq!(
            serde_json::to_string(&IbcOrder::Unordered).unwrap(),
            "\"ORDER_UNORDERED\""
        );
    }

    #[test]
    fn test_unset_timeout_sides_are_omitted() {
        let timeout = IbcTimeout {
            block: None,
            timestamp: Some(1_600_000_000_000_000_000),
        };
        let json = serde_json::to_string(&timeout).unwrap();
        assert!(!json.contains("block"));
        assert!(json.contains("timestamp"));

        let restored: IbcTimeout = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, timeout);
    }
}
