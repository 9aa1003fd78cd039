// Path: crates/api/src/store.rs
//! Defines the `CapabilityStore` and `ChannelStore` traits, the two
//! collaborator stores the dispatchers operate against.

use ibc_core_channel_types::channel::{ChannelEnd, IdentifiedChannelEnd};
use ibc_core_channel_types::packet::Packet;
use ibc_core_host_types::identifiers::{ChannelId, PortId, Sequence};

use icw_types::capability::CapabilityToken;
use icw_types::error::{CapabilityError, DispatchError};
use icw_types::scope::CallOrigin;

/// A dyn-safe view of the host's capability token store.
///
/// Paths are the rendered form of
/// [`icw_types::capability::channel_capability_path`]. The store enforces
/// at most one claim per path; a second claim is a conflict regardless of
/// which module attempts it.
pub trait CapabilityStore: Send + Sync {
    /// Looks up the token recorded under a path, if any.
    fn get(&self, origin: CallOrigin, path: &str) -> Option<CapabilityToken>;

    /// Records a claim of `token` under `path`.
    fn claim(
        &mut self,
        origin: CallOrigin,
        token: &CapabilityToken,
        path: &str,
    ) -> Result<(), CapabilityError>;

    /// Checks that `token` is the one recorded under `path`.
    fn authenticate(&self, origin: CallOrigin, token: &CapabilityToken, path: &str) -> bool;
}

// Blanket implementation to allow `CapabilityStore` to be used behind a `Box` trait object.
impl<T: CapabilityStore + ?Sized> CapabilityStore for Box<T> {
    fn get(&self, origin: CallOrigin, path: &str) -> Option<CapabilityToken> {
        (**self).get(origin, path)
    }

    fn claim(
        &mut self,
        origin: CallOrigin,
        token: &CapabilityToken,
        path: &str,
    ) -> Result<(), CapabilityError> {
        (**self).claim(origin, token, path)
    }

    fn authenticate(&self, origin: CallOrigin, token: &CapabilityToken, path: &str) -> bool {
        (**self).authenticate(origin, token, path)
    }
}

/// A dyn-safe view of the protocol core's channel metadata store.
///
/// Reads follow the kernel convention of `Result<Option<_>, _>`: `Ok(None)`
/// is an ordinary miss, `Err` a store or identifier failure.
pub trait ChannelStore: Send + Sync {
    /// Looks up the channel metadata stored under a port/channel pair.
    fn get_channel(
        &self,
        origin: CallOrigin,
        port_id: &PortId,
        channel_id: &ChannelId,
    ) -> Result<Option<ChannelEnd>, DispatchError>;

    /// Writes the channel metadata stored under a port/channel pair.
    fn set_channel(
        &mut self,
        origin: CallOrigin,
        port_id: &PortId,
        channel_id: &ChannelId,
        channel: ChannelEnd,
    ) -> Result<(), DispatchError>;

    /// Looks up the next send sequence of a channel.
    fn get_next_sequence_send(
        &self,
        origin: CallOrigin,
        port_id: &PortId,
        channel_id: &ChannelId,
    ) -> Result<Option<Sequence>, DispatchError>;

    /// Submits a packet for sending on its source channel.
    fn send_packet(
        &mut self,
        origin: CallOrigin,
        token: &CapabilityToken,
        packet: Packet,
    ) -> Result<(), DispatchError>;

    /// Starts closing a channel from this end.
    fn chan_close_init(
        &mut self,
        origin: CallOrigin,
        port_id: &PortId,
        channel_id: &ChannelId,
        token: &CapabilityToken,
    ) -> Result<(), DispatchError>;

    /// Returns every channel known to the store.
    fn get_all_channels(&self, origin: CallOrigin)
        -> Result<Vec<IdentifiedChannelEnd>, DispatchError>;

    /// Visits every channel until the callback returns `true` (stop).
    fn iterate_channels(
        &self,
        origin: CallOrigin,
        visit: &mut dyn FnMut(&IdentifiedChannelEnd) -> bool,
    ) -> Result<(), DispatchError>;
}

// Blanket implementation to allow `ChannelStore` to be used behind a `Box` trait object.
impl<T: ChannelStore + ?Sized> ChannelStore for Box<T> {
    fn get_channel(
        &self,
        origin: CallOrigin,
        port_id: &PortId,
        channel_id: &ChannelId,
    ) -> Result<Option<ChannelEnd>, DispatchError> {
        (**self).get_channel(origin, port_id, channel_id)
    }

    fn set_channel(
        &mut self,
        origin: CallOrigin,
        port_id: &PortId,
        channel_id: &ChannelId,
        channel: ChannelEnd,
    ) -> Result<(), DispatchError> {
        (**self).set_channel(origin, port_id, channel_id, channel)
    }

    fn get_next_sequence_send(
        &self,
        origin: CallOrigin,
        port_id: &PortId,
        channel_id: &ChannelId,
    ) -> Result<Option<Sequence>, DispatchError> {
        (**self).get_next_sequence_send(origin, port_id, channel_id)
    }

    fn send_packet(
        &mut self,
        origin: CallOrigin,
        token: &CapabilityToken,
        packet: Packet,
    ) -> Result<(), DispatchError> {
        (**self).send_packet(origin, token, packet)
    }

    fn chan_close_init(
        &mut self,
        origin: CallOrigin,
        port_id: &PortId,
        channel_id: &ChannelId,
        token: &CapabilityToken,
    ) -> Result<(), DispatchError> {
        (**self).chan_close_init(origin, port_id, channel_id, token)
    }

    fn get_all_channels(
        &self,
        origin: CallOrigin,
    ) -> Result<Vec<IdentifiedChannelEnd>, DispatchError> {
        (**self).get_all_channels(origin)
    }

    fn iterate_channels(
        &self,
        origin: CallOrigin,
        visit: &mut dyn FnMut(&IdentifiedChannelEnd) -> bool,
    ) -> Result<(), DispatchError> {
        (**self).iterate_channels(origin, visit)
    }
}
