// Path: crates/dispatch/src/marshal.rs
//! Pure transforms from protocol-core channel and packet structures into
//! the execution host's message schema.
//!
//! Nothing in this module touches state; every function is a total mapping
//! apart from the two host-side invariants it enforces (a concrete channel
//! ordering, exactly one connection hop).

use ibc_core_channel_types::channel::{Counterparty, Order};
use ibc_core_channel_types::packet::Packet;
use ibc_core_channel_types::timeout::{TimeoutHeight, TimeoutTimestamp};
use ibc_core_channel_types::Version;
use ibc_core_host_types::identifiers::{ChannelId, ConnectionId, PortId};

use icw_types::error::DispatchError;
use icw_types::wasm_msg;

/// Maps channel ordering into the host's wire naming.
///
/// `Order::None` has no host representation; established channels always
/// carry a concrete ordering.
pub fn wasm_order(order: Order, channel_id: &ChannelId) -> Result<wasm_msg::IbcOrder, DispatchError> {
    match order {
        Order::Ordered => Ok(wasm_msg::IbcOrder::Ordered),
        Order::Unordered => Ok(wasm_msg::IbcOrder::Unordered),
        Order::None => Err(DispatchError::InvalidChannel {
            channel_id: channel_id.to_string(),
            reason: "channel ordering is unspecified".to_string(),
        }),
    }
}

/// Builds the host's two-sided channel description.
///
/// The host models a channel over a single connection, so exactly one hop
/// is accepted; a multi-hop channel is rejected as invalid.
pub fn wasm_channel(
    port_id: &PortId,
    channel_id: &ChannelId,
    counterparty: &Counterparty,
    order: Order,
    version: &Version,
    connection_hops: &[ConnectionId],
) -> Result<wasm_msg::IbcChannel, DispatchError> {
    let connection_id = match connection_hops {
        [hop] => hop,
        _ => {
            return Err(DispatchError::InvalidChannel {
                channel_id: channel_id.to_string(),
                reason: format!(
                    "expected exactly one connection hop, got {}",
                    connection_hops.len()
                ),
            })
        }
    };
    Ok(wasm_msg::IbcChannel {
        endpoint: endpoint(port_id.as_str(), channel_id.as_str()),
        counterparty_endpoint: wasm_msg::IbcEndpoint {
            port_id: counterparty.port_id.to_string(),
            channel_id: counterparty
                .channel_id
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
        },
        order: wasm_order(order, channel_id)?,
        version: version.to_string(),
        connection_id: connection_id.to_string(),
    })
}

/// Maps a packet timeout into the host's optional block/timestamp pair.
///
/// A zero or absent cutoff on either side is omitted entirely; contracts
/// read absence, not zero values.
pub fn wasm_timeout(height: TimeoutHeight, timestamp: TimeoutTimestamp) -> wasm_msg::IbcTimeout {
    let block = match height {
        TimeoutHeight::At(h) => Some(wasm_msg::IbcTimeoutBlock {
            revision: h.revision_number(),
            height: h.revision_height(),
        }),
        TimeoutHeight::Never => None,
    };
    let timestamp = match timestamp {
        TimeoutTimestamp::At(t) if t.nanoseconds() != 0 => Some(t.nanoseconds()),
        _ => None,
    };
    wasm_msg::IbcTimeout { block, timestamp }
}

/// Maps a packet into the host's packet shape.
pub fn wasm_packet(packet: &Packet) -> wasm_msg::IbcPacket {
    wasm_msg::IbcPacket {
        data: packet.data.clone(),
        src: endpoint(packet.port_id_on_a.as_str(), packet.chan_id_on_a.as_str()),
        dest: endpoint(packet.port_id_on_b.as_str(), packet.chan_id_on_b.as_str()),
        sequence: u64::from(packet.seq_on_a),
        timeout: wasm_timeout(packet.timeout_height_on_b, packet.timeout_timestamp_on_b),
    }
}

fn endpoint(port_id: &str, channel_id: &str) -> wasm_msg::IbcEndpoint {
    wasm_msg::IbcEndpoint {
        port_id: port_id.to_string(),
        channel_id: channel_id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ibc_core_client_types::Height;
    use ibc_primitives::Timestamp;
    use std::str::FromStr;

    fn counterparty(port: &str, channel: Option<u64>) -> Counterparty {
        Counterparty::new(
            PortId::from_str(port).unwrap(),
            channel.map(ChannelId::new),
        )
    }

    #[test]
    fn test_order_mapping_rejects_unspecified() {
        let channel_id = ChannelId::new(0);
        assert!(matches!(
            wasm_order(Order::Ordered, &channel_id).unwrap(),
            wasm_msg::IbcOrder::Ordered
        ));
        assert!(matches!(
            wasm_order(Order::Unordered, &channel_id).unwrap(),
            wasm_msg::IbcOrder::Unordered
        ));
        assert!(matches!(
            wasm_order(Order::None, &channel_id),
            Err(DispatchError::InvalidChannel { .. })
        ));
    }

    #[test]
    fn test_channel_requires_exactly_one_hop() {
        let port_id = PortId::from_str("wasm.cosmos1abc").unwrap();
        let channel_id = ChannelId::new(0);
        let cp = counterparty("icahost", None);
        let version = Version::new("ics27-1".to_string());

        let hops = vec![ConnectionId::new(0)];
        let channel =
            wasm_channel(&port_id, &channel_id, &cp, Order::Ordered, &version, &hops).unwrap();
        assert_eq!(channel.connection_id, "connection-0");
        assert_eq!(channel.endpoint.port_id, "wasm.cosmos1abc");
        assert_eq!(channel.counterparty_endpoint.port_id, "icahost");
        assert_eq!(channel.counterparty_endpoint.channel_id, "");

        let two_hops = vec![ConnectionId::new(0), ConnectionId::new(1)];
        assert!(matches!(
            wasm_channel(&port_id, &channel_id, &cp, Order::Ordered, &version, &two_hops),
            Err(DispatchError::InvalidChannel { .. })
        ));
        assert!(matches!(
            wasm_channel(&port_id, &channel_id, &cp, Order::Ordered, &version, &[]),
            Err(DispatchError::InvalidChannel { .. })
        ));
    }

    #[test]
    fn test_timeout_omits_unset_sides() {
        let timeout = wasm_timeout(
            TimeoutHeight::Never,
            TimeoutTimestamp::At(Timestamp::from_nanoseconds(1_600_000_000_000_000_000)),
        );
        assert!(timeout.block.is_none());
        assert_eq!(timeout.timestamp, Some(1_600_000_000_000_000_000));

        let timeout = wasm_timeout(
            TimeoutHeight::At(Height::new(1, 100).unwrap()),
            TimeoutTimestamp::Never,
        );
        assert_eq!(
            timeout.block,
            Some(wasm_msg::IbcTimeoutBlock {
                revision: 1,
                height: 100
            })
        );
        assert!(timeout.timestamp.is_none());
    }

    #[test]
    fn test_packet_mapping_carries_both_endpoints() {
        let packet = Packet {
            seq_on_a: 7u64.into(),
            port_id_on_a: PortId::from_str("wasm.cosmos1abc").unwrap(),
            chan_id_on_a: ChannelId::new(0),
            port_id_on_b: PortId::from_str("icahost").unwrap(),
            chan_id_on_b: ChannelId::new(9),
            data: b"payload".to_vec(),
            timeout_height_on_b: TimeoutHeight::Never,
            timeout_timestamp_on_b: TimeoutTimestamp::Never,
        };
        let mapped = wasm_packet(&packet);
        assert_eq!(mapped.sequence, 7);
        assert_eq!(mapped.src.port_id, "wasm.cosmos1abc");
        assert_eq!(mapped.src.channel_id, "channel-0");
        assert_eq!(mapped.dest.port_id, "icahost");
        assert_eq!(mapped.dest.channel_id, "channel-9");
        assert_eq!(mapped.data, b"payload");
        assert_eq!(mapped.timeout, wasm_msg::IbcTimeout::default());
    }
}
