// Path: crates/dispatch/src/adapter/channel.rs
//! Port-namespace mapping over a channel store.
//!
//! The protocol core stores channel metadata under the original
//! account-namespace port. When the contract-side dispatcher runs inside a
//! forwarded call chain it addresses channels by contract-namespace port,
//! so reads and writes map the port back before delegating. Every other
//! operation, and every direct-origin call, passes through unchanged.

use std::str::FromStr;

use ibc_core_channel_types::channel::{ChannelEnd, IdentifiedChannelEnd};
use ibc_core_channel_types::packet::Packet;
use ibc_core_host_types::identifiers::{ChannelId, PortId, Sequence};

use icw_api::store::ChannelStore;
use icw_types::capability::CapabilityToken;
use icw_types::error::DispatchError;
use icw_types::port::PortNamespaces;
use icw_types::scope::CallOrigin;

/// Wraps a channel store, mapping contract-namespace ports back to the
/// account namespace on forwarded reads and writes.
pub struct ChannelAdapter<S> {
    inner: S,
    namespaces: PortNamespaces,
}

impl<S: ChannelStore> ChannelAdapter<S> {
    /// Wraps `inner` with the default port namespaces.
    pub fn new(inner: S) -> Self {
        Self::with_namespaces(inner, PortNamespaces::default())
    }

    /// Wraps `inner` with explicit port namespaces.
    pub fn with_namespaces(inner: S, namespaces: PortNamespaces) -> Self {
        Self { inner, namespaces }
    }

    /// The wrapped store.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    fn effective_port(
        &self,
        origin: CallOrigin,
        port_id: &PortId,
    ) -> Result<PortId, DispatchError> {
        if !origin.is_ica_auth() {
            return Ok(port_id.clone());
        }
        let rewritten = self.namespaces.contract_to_account(port_id.as_str());
        if rewritten != port_id.as_str() {
            tracing::debug!(
                target: "ica.chan",
                port_id = %port_id,
                account_port = %rewritten,
                "mapping channel access to account namespace"
            );
        }
        PortId::from_str(&rewritten).map_err(|e| DispatchError::MalformedPortId {
            port_id: port_id.to_string(),
            reason: e.to_string(),
        })
    }
}

impl<S: ChannelStore> ChannelStore for ChannelAdapter<S> {
    fn get_channel(
        &self,
        origin: CallOrigin,
        port_id: &PortId,
        channel_id: &ChannelId,
    ) -> Result<Option<ChannelEnd>, DispatchError> {
        let port = self.effective_port(origin, port_id)?;
        self.inner.get_channel(origin, &port, channel_id)
    }

    fn set_channel(
        &mut self,
        origin: CallOrigin,
        port_id: &PortId,
        channel_id: &ChannelId,
        channel: ChannelEnd,
    ) -> Result<(), DispatchError> {
        let port = self.effective_port(origin, port_id)?;
        self.inner.set_channel(origin, &port, channel_id, channel)
    }

    fn get_next_sequence_send(
        &self,
        origin: CallOrigin,
        port_id: &PortId,
        channel_id: &ChannelId,
    ) -> Result<Option<Sequence>, DispatchError> {
        self.inner.get_next_sequence_send(origin, port_id, channel_id)
    }

    fn send_packet(
        &mut self,
        origin: CallOrigin,
        token: &CapabilityToken,
        packet: Packet,
    ) -> Result<(), DispatchError> {
        self.inner.send_packet(origin, token, packet)
    }

    fn chan_close_init(
        &mut self,
        origin: CallOrigin,
        port_id: &PortId,
        channel_id: &ChannelId,
        token: &CapabilityToken,
    ) -> Result<(), DispatchError> {
        self.inner.chan_close_init(origin, port_id, channel_id, token)
    }

    fn get_all_channels(
        &self,
        origin: CallOrigin,
    ) -> Result<Vec<IdentifiedChannelEnd>, DispatchError> {
        self.inner.get_all_channels(origin)
    }

    fn iterate_channels(
        &self,
        origin: CallOrigin,
        visit: &mut dyn FnMut(&IdentifiedChannelEnd) -> bool,
    ) -> Result<(), DispatchError> {
        self.inner.iterate_channels(origin, visit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ibc_core_channel_types::channel::{Order, State};
    use icw_test_utils::{fixtures, MemoryChannelStore};

    fn account_port() -> PortId {
        PortId::from_str("icacontroller-cosmos1abc").unwrap()
    }

    fn contract_port() -> PortId {
        PortId::from_str("wasm.cosmos1abc").unwrap()
    }

    fn seeded_adapter() -> ChannelAdapter<MemoryChannelStore> {
        let mut store = MemoryChannelStore::new();
        store.put_channel(
            &account_port(),
            &ChannelId::new(0),
            fixtures::channel_end(
                State::Init,
                Order::Ordered,
                PortId::from_str("icahost").unwrap(),
                None,
                0,
                "ics27-1",
            ),
        );
        ChannelAdapter::new(store)
    }

    #[test]
    fn test_reads_rewrite_only_under_the_forwarded_origin() {
        let adapter = seeded_adapter();
        let channel_id = ChannelId::new(0);

        // A direct read uses the caller's port verbatim and misses.
        let direct = adapter
            .get_channel(CallOrigin::Direct, &contract_port(), &channel_id)
            .unwrap();
        assert!(direct.is_none());

        // The forwarded read maps back to the account namespace and hits.
        let forwarded = adapter
            .get_channel(CallOrigin::IcaAuth, &contract_port(), &channel_id)
            .unwrap();
        assert!(forwarded.is_some());
    }

    #[test]
    fn test_forwarded_writes_land_under_the_account_port() {
        let mut adapter = seeded_adapter();
        let channel_id = ChannelId::new(0);

        let mut channel = adapter
            .get_channel(CallOrigin::IcaAuth, &contract_port(), &channel_id)
            .unwrap()
            .unwrap();
        channel.remote.channel_id = Some(ChannelId::new(4));
        adapter
            .set_channel(CallOrigin::IcaAuth, &contract_port(), &channel_id, channel)
            .unwrap();

        // The store holds exactly one record, at the original key.
        assert!(adapter.inner().channel(&contract_port(), &channel_id).is_none());
        let stored = adapter.inner().channel(&account_port(), &channel_id).unwrap();
        assert_eq!(stored.remote.channel_id, Some(ChannelId::new(4)));
    }

    #[test]
    fn test_other_operations_pass_the_port_through_verbatim() {
        let mut adapter = seeded_adapter();
        let channel_id = ChannelId::new(0);
        let token = CapabilityToken(1);

        // Only reads and writes of channel metadata remap; closing under
        // the contract port misses the record stored at the account port.
        assert!(matches!(
            adapter.chan_close_init(CallOrigin::IcaAuth, &contract_port(), &channel_id, &token),
            Err(DispatchError::ChannelNotFound { .. })
        ));
        assert!(adapter
            .chan_close_init(CallOrigin::IcaAuth, &account_port(), &channel_id, &token)
            .is_ok());

        let sequence = adapter
            .get_next_sequence_send(CallOrigin::IcaAuth, &account_port(), &channel_id)
            .unwrap();
        assert!(sequence.is_none());
    }

    #[test]
    fn test_iteration_and_send_delegate_unchanged() {
        let mut adapter = seeded_adapter();

        let mut seen = Vec::new();
        adapter
            .iterate_channels(CallOrigin::IcaAuth, &mut |identified| {
                seen.push(identified.port_id.clone());
                false
            })
            .unwrap();
        assert_eq!(seen, vec![account_port()]);

        let packet = fixtures::packet(
            1,
            &account_port(),
            0,
            &PortId::from_str("icahost").unwrap(),
            5,
            b"payload",
        );
        adapter
            .send_packet(CallOrigin::Direct, &CapabilityToken(1), packet)
            .unwrap();
        assert_eq!(adapter.inner().sent_packets().len(), 1);
        assert_eq!(adapter.get_all_channels(CallOrigin::Direct).unwrap().len(), 1);
    }
}
