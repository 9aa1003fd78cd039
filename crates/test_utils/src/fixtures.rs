// Path: crates/test_utils/src/fixtures.rs
//! Channel and packet fixtures for reproducible tests

use ibc_core_channel_types::channel::{ChannelEnd, Counterparty, Order, State};
use ibc_core_channel_types::packet::Packet;
use ibc_core_channel_types::timeout::{TimeoutHeight, TimeoutTimestamp};
use ibc_core_channel_types::Version;
use ibc_core_host_types::identifiers::{ChannelId, ConnectionId, PortId};
use ibc_primitives::Signer;

/// Builds a channel end over `connection-{connection}` with an unresolved
/// counterparty channel.
pub fn channel_end(
    state: State,
    order: Order,
    counterparty_port: PortId,
    counterparty_channel: Option<ChannelId>,
    connection: u64,
    version: &str,
) -> ChannelEnd {
    ChannelEnd {
        state,
        ordering: order,
        remote: Counterparty::new(counterparty_port, counterparty_channel),
        connection_hops: vec![ConnectionId::new(connection)],
        version: Version::new(version.to_string()),
    }
}

/// Builds a packet with no timeout cutoffs on either side.
pub fn packet(
    sequence: u64,
    src_port: &PortId,
    src_channel: u64,
    dst_port: &PortId,
    dst_channel: u64,
    data: &[u8],
) -> Packet {
    Packet {
        seq_on_a: sequence.into(),
        port_id_on_a: src_port.clone(),
        chan_id_on_a: ChannelId::new(src_channel),
        port_id_on_b: dst_port.clone(),
        chan_id_on_b: ChannelId::new(dst_channel),
        data: data.to_vec(),
        timeout_height_on_b: TimeoutHeight::Never,
        timeout_timestamp_on_b: TimeoutTimestamp::Never,
    }
}

/// A fixed relayer identity.
pub fn relayer() -> Signer {
    Signer::from("cosmos1relayer".to_string())
}
