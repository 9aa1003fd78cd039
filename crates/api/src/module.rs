// Path: crates/api/src/module.rs
//! Defines the `IbcModule` trait, the channel and packet callback surface
//! the protocol core drives during handshakes and packet lifecycle events.

use ibc_core_channel_types::acknowledgement::{Acknowledgement, AcknowledgementStatus};
use ibc_core_channel_types::channel::{Counterparty, Order};
use ibc_core_channel_types::packet::Packet;
use ibc_core_channel_types::Version;
use ibc_core_host_types::identifiers::{ChannelId, ConnectionId, PortId};
use ibc_primitives::Signer;

use icw_types::capability::CapabilityToken;
use icw_types::error::DispatchError;
use icw_types::scope::CallOrigin;

/// A dyn-safe trait for the callbacks the protocol core delivers to a port's
/// owning module.
///
/// Both dispatcher roles of the shim implement this trait, as does the legacy
/// account-authentication module the controller-side dispatcher wraps. Every
/// callback receives the [`CallOrigin`] of the invoking call chain as its
/// first argument; implementations must thread it through unchanged unless
/// they are the component that deliberately re-tags it.
pub trait IbcModule: Send + Sync {
    /// A channel open was initiated on this chain.
    ///
    /// Returns the version to carry into the handshake. On success the
    /// caller may rely on the module having claimed the channel capability.
    #[allow(clippy::too_many_arguments)]
    fn on_chan_open_init(
        &mut self,
        origin: CallOrigin,
        order: Order,
        connection_hops: &[ConnectionId],
        port_id: &PortId,
        channel_id: &ChannelId,
        token: &CapabilityToken,
        counterparty: &Counterparty,
        version: &Version,
    ) -> Result<Version, DispatchError>;

    /// A channel open was initiated on the counterparty chain.
    #[allow(clippy::too_many_arguments)]
    fn on_chan_open_try(
        &mut self,
        origin: CallOrigin,
        order: Order,
        connection_hops: &[ConnectionId],
        port_id: &PortId,
        channel_id: &ChannelId,
        token: &CapabilityToken,
        counterparty: &Counterparty,
        counterparty_version: &Version,
    ) -> Result<Version, DispatchError>;

    /// The counterparty acknowledged the handshake this chain initiated.
    fn on_chan_open_ack(
        &mut self,
        origin: CallOrigin,
        port_id: &PortId,
        channel_id: &ChannelId,
        counterparty_channel_id: &ChannelId,
        counterparty_version: &Version,
    ) -> Result<(), DispatchError>;

    /// The handshake initiated by the counterparty completed.
    fn on_chan_open_confirm(
        &mut self,
        origin: CallOrigin,
        port_id: &PortId,
        channel_id: &ChannelId,
    ) -> Result<(), DispatchError>;

    /// A channel close was initiated on this chain.
    fn on_chan_close_init(
        &mut self,
        origin: CallOrigin,
        port_id: &PortId,
        channel_id: &ChannelId,
    ) -> Result<(), DispatchError>;

    /// The counterparty closed its end of the channel.
    fn on_chan_close_confirm(
        &mut self,
        origin: CallOrigin,
        port_id: &PortId,
        channel_id: &ChannelId,
    ) -> Result<(), DispatchError>;

    /// A packet arrived on a channel owned by this module.
    ///
    /// Infallible by contract: the core commits whatever acknowledgement is
    /// returned, so implementations must always produce a structurally valid
    /// one and must not panic.
    fn on_recv_packet(
        &mut self,
        origin: CallOrigin,
        packet: &Packet,
        relayer: &Signer,
    ) -> AcknowledgementStatus;

    /// The counterparty acknowledged a packet this module sent.
    fn on_acknowledgement_packet(
        &mut self,
        origin: CallOrigin,
        packet: &Packet,
        acknowledgement: &Acknowledgement,
        relayer: &Signer,
    ) -> Result<(), DispatchError>;

    /// A packet this module sent expired without being delivered.
    fn on_timeout_packet(
        &mut self,
        origin: CallOrigin,
        packet: &Packet,
        relayer: &Signer,
    ) -> Result<(), DispatchError>;
}

// Blanket implementation to allow `IbcModule` to be used behind a `Box` trait object.
impl<T: IbcModule + ?Sized> IbcModule for Box<T> {
    fn on_chan_open_init(
        &mut self,
        origin: CallOrigin,
        order: Order,
        connection_hops: &[ConnectionId],
        port_id: &PortId,
        channel_id: &ChannelId,
        token: &CapabilityToken,
        counterparty: &Counterparty,
        version: &Version,
    ) -> Result<Version, DispatchError> {
        (**self).on_chan_open_init(
            origin,
            order,
            connection_hops,
            port_id,
            channel_id,
            token,
            counterparty,
            version,
        )
    }

    fn on_chan_open_try(
        &mut self,
        origin: CallOrigin,
        order: Order,
        connection_hops: &[ConnectionId],
        port_id: &PortId,
        channel_id: &ChannelId,
        token: &CapabilityToken,
        counterparty: &Counterparty,
        counterparty_version: &Version,
    ) -> Result<Version, DispatchError> {
        (**self).on_chan_open_try(
            origin,
            order,
            connection_hops,
            port_id,
            channel_id,
            token,
            counterparty,
            counterparty_version,
        )
    }

    fn on_chan_open_ack(
        &mut self,
        origin: CallOrigin,
        port_id: &PortId,
        channel_id: &ChannelId,
        counterparty_channel_id: &ChannelId,
        counterparty_version: &Version,
    ) -> Result<(), DispatchError> {
        (**self).on_chan_open_ack(
            origin,
            port_id,
            channel_id,
            counterparty_channel_id,
            counterparty_version,
        )
    }

    fn on_chan_open_confirm(
        &mut self,
        origin: CallOrigin,
        port_id: &PortId,
        channel_id: &ChannelId,
    ) -> Result<(), DispatchError> {
        (**self).on_chan_open_confirm(origin, port_id, channel_id)
    }

    fn on_chan_close_init(
        &mut self,
        origin: CallOrigin,
        port_id: &PortId,
        channel_id: &ChannelId,
    ) -> Result<(), DispatchError> {
        (**self).on_chan_close_init(origin, port_id, channel_id)
    }

    fn on_chan_close_confirm(
        &mut self,
        origin: CallOrigin,
        port_id: &PortId,
        channel_id: &ChannelId,
    ) -> Result<(), DispatchError> {
        (**self).on_chan_close_confirm(origin, port_id, channel_id)
    }

    fn on_recv_packet(
        &mut self,
        origin: CallOrigin,
        packet: &Packet,
        relayer: &Signer,
    ) -> AcknowledgementStatus {
        (**self).on_recv_packet(origin, packet, relayer)
    }

    fn on_acknowledgement_packet(
        &mut self,
        origin: CallOrigin,
        packet: &Packet,
        acknowledgement: &Acknowledgement,
        relayer: &Signer,
    ) -> Result<(), DispatchError> {
        (**self).on_acknowledgement_packet(origin, packet, acknowledgement, relayer)
    }

    fn on_timeout_packet(
        &mut self,
        origin: CallOrigin,
        packet: &Packet,
        relayer: &Signer,
    ) -> Result<(), DispatchError> {
        (**self).on_timeout_packet(origin, packet, relayer)
    }
}
