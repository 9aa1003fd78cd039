// Path: crates/dispatch/src/middleware.rs
//! The generic channel/packet callback middleware.
//!
//! One middleware type serves both dispatcher roles. The inner handler
//! carries the role-specific behavior for the four reachable callbacks;
//! the middleware owns what is common to both: claiming the channel
//! capability under the original port once an open succeeds, and the fixed
//! responses for callbacks neither deployed role can receive.

use ibc_core_channel_types::acknowledgement::{
    Acknowledgement, AcknowledgementStatus, StatusValue,
};
use ibc_core_channel_types::channel::{Counterparty, Order};
use ibc_core_channel_types::packet::Packet;
use ibc_core_channel_types::Version;
use ibc_core_host_types::identifiers::{ChannelId, ConnectionId, PortId};
use ibc_primitives::Signer;

use icw_api::module::IbcModule;
use icw_api::store::CapabilityStore;
use icw_types::capability::{channel_capability_path, CapabilityToken};
use icw_types::error::DispatchError;
use icw_types::scope::CallOrigin;

use crate::handler::{ConnectChannelRequest, InnerHandler, OpenChannelRequest};

/// Builds the fixed error acknowledgement returned when a packet arrives on
/// a channel whose owner never receives.
fn refusal_ack(label: &str) -> AcknowledgementStatus {
    AcknowledgementStatus::error(
        StatusValue::new(format!("cannot receive packet via {label} module"))
            .expect("refusal message is not empty"),
    )
}

/// The generic dispatcher: an [`IbcModule`] over an inner handler and a
/// capability store.
///
/// On the controller side the handler is
/// [`IcaAuthHandler`](crate::handler::IcaAuthHandler) and the store is the
/// core's real capability store; on the contract side the handler is
/// [`WasmHostHandler`](crate::handler::WasmHostHandler) and the store is a
/// [`CapabilityAdapter`](crate::adapter::CapabilityAdapter), so the claim
/// of a forwarded handshake collapses into the controller's claim.
pub struct IbcMiddleware<H, C> {
    handler: H,
    capabilities: C,
}

impl<H, C> IbcMiddleware<H, C>
where
    H: InnerHandler,
    C: CapabilityStore,
{
    /// Combines a handler and a capability store into a dispatcher.
    pub fn new(handler: H, capabilities: C) -> Self {
        Self {
            handler,
            capabilities,
        }
    }

    /// The inner handler.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// The inner handler, mutably.
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// The capability store.
    pub fn capabilities(&self) -> &C {
        &self.capabilities
    }

    /// Decomposes the dispatcher into its parts.
    pub fn into_parts(self) -> (H, C) {
        (self.handler, self.capabilities)
    }
}

impl<H, C> IbcModule for IbcMiddleware<H, C>
where
    H: InnerHandler,
    C: CapabilityStore,
{
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
        let req = OpenChannelRequest {
            order,
            connection_hops,
            port_id,
            channel_id,
            token,
            counterparty,
            version,
        };
        let negotiated = self.handler.open_channel(origin, req)?;

        // Claim under the port the core invoked us with, not any rewritten
        // form, and with the origin of the invoking chain.
        let path = channel_capability_path(port_id.as_str(), channel_id.as_str());
        self.capabilities.claim(origin, token, &path)?;
        tracing::debug!(
            target: "ica.dispatch",
            handler = self.handler.label(),
            port_id = %port_id,
            channel_id = %channel_id,
            "channel open dispatched"
        );
        Ok(negotiated)
    }

    fn on_chan_open_try(
        &mut self,
        _origin: CallOrigin,
        _order: Order,
        _connection_hops: &[ConnectionId],
        port_id: &PortId,
        channel_id: &ChannelId,
        _token: &CapabilityToken,
        _counterparty: &Counterparty,
        _counterparty_version: &Version,
    ) -> Result<Version, DispatchError> {
        // Handshakes are only ever initiated from this chain for both roles.
        tracing::debug!(
            target: "ica.dispatch",
            handler = self.handler.label(),
            port_id = %port_id,
            channel_id = %channel_id,
            "open-try not supported on this role"
        );
        Ok(Version::empty())
    }

    fn on_chan_open_ack(
        &mut self,
        origin: CallOrigin,
        port_id: &PortId,
        channel_id: &ChannelId,
        counterparty_channel_id: &ChannelId,
        counterparty_version: &Version,
    ) -> Result<(), DispatchError> {
        let req = ConnectChannelRequest {
            port_id,
            channel_id,
            counterparty_channel_id,
            counterparty_version,
        };
        self.handler.connect_channel(origin, req)
    }

    fn on_chan_open_confirm(
        &mut self,
        _origin: CallOrigin,
        port_id: &PortId,
        channel_id: &ChannelId,
    ) -> Result<(), DispatchError> {
        tracing::debug!(
            target: "ica.dispatch",
            handler = self.handler.label(),
            port_id = %port_id,
            channel_id = %channel_id,
            "open-confirm not supported on this role"
        );
        Ok(())
    }

    fn on_chan_close_init(
        &mut self,
        _origin: CallOrigin,
        port_id: &PortId,
        channel_id: &ChannelId,
    ) -> Result<(), DispatchError> {
        tracing::debug!(
            target: "ica.dispatch",
            handler = self.handler.label(),
            port_id = %port_id,
            channel_id = %channel_id,
            "close-init not supported on this role"
        );
        Ok(())
    }

    fn on_chan_close_confirm(
        &mut self,
        _origin: CallOrigin,
        port_id: &PortId,
        channel_id: &ChannelId,
    ) -> Result<(), DispatchError> {
        tracing::debug!(
            target: "ica.dispatch",
            handler = self.handler.label(),
            port_id = %port_id,
            channel_id = %channel_id,
            "close-confirm not supported on this role"
        );
        Ok(())
    }

    fn on_recv_packet(
        &mut self,
        _origin: CallOrigin,
        packet: &Packet,
        _relayer: &Signer,
    ) -> AcknowledgementStatus {
        tracing::debug!(
            target: "ica.dispatch",
            handler = self.handler.label(),
            port_id = %packet.port_id_on_b,
            channel_id = %packet.chan_id_on_b,
            sequence = %packet.seq_on_a,
            "refusing received packet"
        );
        refusal_ack(self.handler.label())
    }

    fn on_acknowledgement_packet(
        &mut self,
        origin: CallOrigin,
        packet: &Packet,
        acknowledgement: &Acknowledgement,
        relayer: &Signer,
    ) -> Result<(), DispatchError> {
        self.handler.ack_packet(origin, packet, acknowledgement, relayer)
    }

    fn on_timeout_packet(
        &mut self,
        origin: CallOrigin,
        packet: &Packet,
        relayer: &Signer,
    ) -> Result<(), DispatchError> {
        self.handler.timeout_packet(origin, packet, relayer)
    }
}
