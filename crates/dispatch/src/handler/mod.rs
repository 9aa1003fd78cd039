// Path: crates/dispatch/src/handler/mod.rs
//! The inner-handler seam of the dispatch middleware.
//!
//! A handler implements the four callbacks that are actually reachable for
//! a deployed dispatcher role: open, connect, acknowledge, timeout. The
//! middleware owns everything around them (capability claiming, refusal
//! responses); the handler owns the role-specific translation.

use ibc_core_channel_types::acknowledgement::Acknowledgement;
use ibc_core_channel_types::channel::{Counterparty, Order};
use ibc_core_channel_types::packet::Packet;
use ibc_core_channel_types::Version;
use ibc_core_host_types::identifiers::{ChannelId, ConnectionId, PortId};
use ibc_primitives::Signer;

use icw_types::capability::CapabilityToken;
use icw_types::error::DispatchError;
use icw_types::scope::CallOrigin;

/// The controller-side handler forwarding to a legacy account module.
pub mod ica_auth;
/// The contract-side handler marshaling into the execution host.
pub mod wasm_host;

pub use ica_auth::IcaAuthHandler;
pub use wasm_host::{contract_from_port_id, validate_channel_id, WasmHostHandler};

/// Borrowed arguments of a channel-open dispatch.
#[derive(Debug, Clone, Copy)]
pub struct OpenChannelRequest<'a> {
    /// Packet ordering proposed for the channel.
    pub order: Order,
    /// Connection hops the channel is built on.
    pub connection_hops: &'a [ConnectionId],
    /// Port the handshake was initiated under.
    pub port_id: &'a PortId,
    /// Channel identifier assigned by the core.
    pub channel_id: &'a ChannelId,
    /// Capability token minted by the core for this channel.
    pub token: &'a CapabilityToken,
    /// Counterparty endpoint (its channel still unassigned at this stage).
    pub counterparty: &'a Counterparty,
    /// Version proposed for the channel.
    pub version: &'a Version,
}

/// Borrowed arguments of a channel-connect dispatch.
#[derive(Debug, Clone, Copy)]
pub struct ConnectChannelRequest<'a> {
    /// Port the handshake was initiated under.
    pub port_id: &'a PortId,
    /// Channel identifier on this chain.
    pub channel_id: &'a ChannelId,
    /// Channel identifier the counterparty assigned to its end.
    pub counterparty_channel_id: &'a ChannelId,
    /// Version the counterparty settled on.
    pub counterparty_version: &'a Version,
}

/// The reachable callback set of one dispatcher role.
///
/// Implementations decide what origin tag their downstream calls carry; the
/// middleware hands them the origin it was invoked with and uses that same
/// origin for its own capability claim.
pub trait InnerHandler: Send + Sync {
    /// Short role name used in logs and refusal acknowledgements.
    fn label(&self) -> &'static str;

    /// Handles a channel open initiated on this chain; returns the version
    /// to carry into the handshake.
    fn open_channel(
        &mut self,
        origin: CallOrigin,
        req: OpenChannelRequest<'_>,
    ) -> Result<Version, DispatchError>;

    /// Handles the counterparty's acknowledgement of the handshake.
    fn connect_channel(
        &mut self,
        origin: CallOrigin,
        req: ConnectChannelRequest<'_>,
    ) -> Result<(), DispatchError>;

    /// Handles a packet acknowledgement.
    fn ack_packet(
        &mut self,
        origin: CallOrigin,
        packet: &Packet,
        acknowledgement: &Acknowledgement,
        relayer: &Signer,
    ) -> Result<(), DispatchError>;

    /// Handles a packet timeout.
    fn timeout_packet(
        &mut self,
        origin: CallOrigin,
        packet: &Packet,
        relayer: &Signer,
    ) -> Result<(), DispatchError>;
}
