// Path: crates/test_utils/src/mock_store.rs
//! In-memory capability and channel stores.
//!
//! `Memory*` are plain owned stores for single-layer tests. The `Shared*`
//! wrappers put one behind `Arc<Mutex<_>>` so a nested dispatcher stack and
//! the test body can all hold handles to the same state.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use ibc_core_channel_types::channel::{ChannelEnd, IdentifiedChannelEnd, State};
use ibc_core_channel_types::packet::Packet;
use ibc_core_host_types::identifiers::{ChannelId, PortId, Sequence};

use icw_api::store::{CapabilityStore, ChannelStore};
use icw_types::capability::CapabilityToken;
use icw_types::error::{CapabilityError, DispatchError};
use icw_types::scope::CallOrigin;

/// An owned in-memory capability store enforcing one claim per path.
#[derive(Debug, Default)]
pub struct MemoryCapabilityStore {
    claims: BTreeMap<String, CapabilityToken>,
    next_index: u64,
}

impl MemoryCapabilityStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mints a fresh token, as the core does before an open callback.
    pub fn mint(&mut self) -> CapabilityToken {
        self.next_index += 1;
        CapabilityToken(self.next_index)
    }

    /// Every recorded claim, keyed by path.
    pub fn claims(&self) -> &BTreeMap<String, CapabilityToken> {
        &self.claims
    }
}

impl CapabilityStore for MemoryCapabilityStore {
    fn get(&self, _origin: CallOrigin, path: &str) -> Option<CapabilityToken> {
        self.claims.get(path).copied()
    }

    fn claim(
        &mut self,
        _origin: CallOrigin,
        token: &CapabilityToken,
        path: &str,
    ) -> Result<(), CapabilityError> {
        if self.claims.contains_key(path) {
            return Err(CapabilityError::AlreadyClaimed {
                path: path.to_string(),
            });
        }
        self.claims.insert(path.to_string(), *token);
        Ok(())
    }

    fn authenticate(&self, _origin: CallOrigin, token: &CapabilityToken, path: &str) -> bool {
        self.claims.get(path) == Some(token)
    }
}

/// An owned in-memory channel store.
#[derive(Debug, Default)]
pub struct MemoryChannelStore {
    channels: BTreeMap<(PortId, ChannelId), ChannelEnd>,
    next_sequences: BTreeMap<(PortId, ChannelId), u64>,
    sent: Vec<Packet>,
}

impl MemoryChannelStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a channel directly, bypassing the store trait.
    pub fn put_channel(&mut self, port_id: &PortId, channel_id: &ChannelId, channel: ChannelEnd) {
        self.channels
            .insert((port_id.clone(), channel_id.clone()), channel);
    }

    /// Reads a channel directly, bypassing the store trait.
    pub fn channel(&self, port_id: &PortId, channel_id: &ChannelId) -> Option<ChannelEnd> {
        self.channels
            .get(&(port_id.clone(), channel_id.clone()))
            .cloned()
    }

    /// Seeds the next send sequence of a channel.
    pub fn put_next_sequence_send(
        &mut self,
        port_id: &PortId,
        channel_id: &ChannelId,
        sequence: u64,
    ) {
        self.next_sequences
            .insert((port_id.clone(), channel_id.clone()), sequence);
    }

    /// Packets submitted through `send_packet`, in order.
    pub fn sent_packets(&self) -> &[Packet] {
        &self.sent
    }
}

impl ChannelStore for MemoryChannelStore {
    fn get_channel(
        &self,
        _origin: CallOrigin,
        port_id: &PortId,
        channel_id: &ChannelId,
    ) -> Result<Option<ChannelEnd>, DispatchError> {
        Ok(self.channel(port_id, channel_id))
    }

    fn set_channel(
        &mut self,
        _origin: CallOrigin,
        port_id: &PortId,
        channel_id: &ChannelId,
        channel: ChannelEnd,
    ) -> Result<(), DispatchError> {
        self.put_channel(port_id, channel_id, channel);
        Ok(())
    }

    fn get_next_sequence_send(
        &self,
        _origin: CallOrigin,
        port_id: &PortId,
        channel_id: &ChannelId,
    ) -> Result<Option<Sequence>, DispatchError> {
        Ok(self
            .next_sequences
            .get(&(port_id.clone(), channel_id.clone()))
            .copied()
            .map(Sequence::from))
    }

    fn send_packet(
        &mut self,
        _origin: CallOrigin,
        _token: &CapabilityToken,
        packet: Packet,
    ) -> Result<(), DispatchError> {
        self.sent.push(packet);
        Ok(())
    }

    fn chan_close_init(
        &mut self,
        _origin: CallOrigin,
        port_id: &PortId,
        channel_id: &ChannelId,
        _token: &CapabilityToken,
    ) -> Result<(), DispatchError> {
        let key = (port_id.clone(), channel_id.clone());
        match self.channels.get_mut(&key) {
            Some(channel) => {
                channel.state = State::Closed;
                Ok(())
            }
            None => Err(DispatchError::ChannelNotFound {
                port_id: port_id.to_string(),
                channel_id: channel_id.to_string(),
            }),
        }
    }

    fn get_all_channels(
        &self,
        _origin: CallOrigin,
    ) -> Result<Vec<IdentifiedChannelEnd>, DispatchError> {
        Ok(self
            .channels
            .iter()
            .map(|((port_id, channel_id), channel_end)| IdentifiedChannelEnd {
                port_id: port_id.clone(),
                channel_id: channel_id.clone(),
                channel_end: channel_end.clone(),
            })
            .collect())
    }

    fn iterate_channels(
        &self,
        origin: CallOrigin,
        visit: &mut dyn FnMut(&IdentifiedChannelEnd) -> bool,
    ) -> Result<(), DispatchError> {
        for identified in self.get_all_channels(origin)? {
            if visit(&identified) {
                break;
            }
        }
        Ok(())
    }
}

/// A clonable handle to one capability store shared across a stack.
#[derive(Clone, Debug, Default)]
pub struct SharedCapabilityStore(Arc<Mutex<MemoryCapabilityStore>>);

impl SharedCapabilityStore {
    /// Creates an empty shared store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryCapabilityStore> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Mints a fresh token.
    pub fn mint(&self) -> CapabilityToken {
        self.lock().mint()
    }

    /// Every claimed path, in order.
    pub fn claimed_paths(&self) -> Vec<String> {
        self.lock().claims().keys().cloned().collect()
    }

    /// The token recorded under a path, if any.
    pub fn token_at(&self, path: &str) -> Option<CapabilityToken> {
        self.lock().claims().get(path).copied()
    }
}

impl CapabilityStore for SharedCapabilityStore {
    fn get(&self, origin: CallOrigin, path: &str) -> Option<CapabilityToken> {
        self.lock().get(origin, path)
    }

    fn claim(
        &mut self,
        origin: CallOrigin,
        token: &CapabilityToken,
        path: &str,
    ) -> Result<(), CapabilityError> {
        self.lock().claim(origin, token, path)
    }

    fn authenticate(&self, origin: CallOrigin, token: &CapabilityToken, path: &str) -> bool {
        self.lock().authenticate(origin, token, path)
    }
}

/// A clonable handle to one channel store shared across a stack.
#[derive(Clone, Debug, Default)]
pub struct SharedChannelStore(Arc<Mutex<MemoryChannelStore>>);

impl SharedChannelStore {
    /// Creates an empty shared store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryChannelStore> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Seeds a channel directly, bypassing the store trait.
    pub fn put_channel(&self, port_id: &PortId, channel_id: &ChannelId, channel: ChannelEnd) {
        self.lock().put_channel(port_id, channel_id, channel);
    }

    /// Reads a channel directly, bypassing the store trait.
    pub fn channel(&self, port_id: &PortId, channel_id: &ChannelId) -> Option<ChannelEnd> {
        self.lock().channel(port_id, channel_id)
    }

    /// Packets submitted through `send_packet`, in order.
    pub fn sent_packets(&self) -> Vec<Packet> {
        self.lock().sent_packets().to_vec()
    }
}

impl ChannelStore for SharedChannelStore {
    fn get_channel(
        &self,
        origin: CallOrigin,
        port_id: &PortId,
        channel_id: &ChannelId,
    ) -> Result<Option<ChannelEnd>, DispatchError> {
        self.lock().get_channel(origin, port_id, channel_id)
    }

    fn set_channel(
        &mut self,
        origin: CallOrigin,
        port_id: &PortId,
        channel_id: &ChannelId,
        channel: ChannelEnd,
    ) -> Result<(), DispatchError> {
        self.lock().set_channel(origin, port_id, channel_id, channel)
    }

    fn get_next_sequence_send(
        &self,
        origin: CallOrigin,
        port_id: &PortId,
        channel_id: &ChannelId,
    ) -> Result<Option<Sequence>, DispatchError> {
        self.lock().get_next_sequence_send(origin, port_id, channel_id)
    }

    fn send_packet(
        &mut self,
        origin: CallOrigin,
        token: &CapabilityToken,
        packet: Packet,
    ) -> Result<(), DispatchError> {
        self.lock().send_packet(origin, token, packet)
    }

    fn chan_close_init(
        &mut self,
        origin: CallOrigin,
        port_id: &PortId,
        channel_id: &ChannelId,
        token: &CapabilityToken,
    ) -> Result<(), DispatchError> {
        self.lock().chan_close_init(origin, port_id, channel_id, token)
    }

    fn get_all_channels(
        &self,
        origin: CallOrigin,
    ) -> Result<Vec<IdentifiedChannelEnd>, DispatchError> {
        self.lock().get_all_channels(origin)
    }

    fn iterate_channels(
        &self,
        origin: CallOrigin,
        visit: &mut dyn FnMut(&IdentifiedChannelEnd) -> bool,
    ) -> Result<(), DispatchError> {
        self.lock().iterate_channels(origin, visit)
    }
}
