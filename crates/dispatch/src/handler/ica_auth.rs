// Path: crates/dispatch/src/handler/ica_auth.rs
//! The controller-side inner handler.
//!
//! Forwards each reachable callback to the legacy account-authentication
//! module it wraps, rewriting the port identifier from the account
//! namespace into the contract namespace and re-tagging the call origin as
//! [`CallOrigin::IcaAuth`] so the downstream adapters can recognize the
//! forwarded chain. Rewrites are call-local; the translated port is never
//! persisted.

use std::str::FromStr;

use ibc_core_channel_types::acknowledgement::Acknowledgement;
use ibc_core_channel_types::packet::Packet;
use ibc_core_channel_types::Version;
use ibc_core_host_types::identifiers::PortId;
use ibc_primitives::Signer;

use icw_api::module::IbcModule;
use icw_types::error::DispatchError;
use icw_types::port::PortNamespaces;
use icw_types::scope::CallOrigin;

use super::{ConnectChannelRequest, InnerHandler, OpenChannelRequest};

/// Wraps a legacy account-authentication module behind the handler seam.
pub struct IcaAuthHandler<M> {
    inner: M,
    namespaces: PortNamespaces,
}

impl<M: IbcModule> IcaAuthHandler<M> {
    /// Wraps `inner` with the default port namespaces.
    pub fn new(inner: M) -> Self {
        Self::with_namespaces(inner, PortNamespaces::default())
    }

    /// Wraps `inner` with explicit port namespaces.
    pub fn with_namespaces(inner: M, namespaces: PortNamespaces) -> Self {
        Self { inner, namespaces }
    }

    /// The wrapped module.
    pub fn inner(&self) -> &M {
        &self.inner
    }

    /// The wrapped module, mutably.
    pub fn inner_mut(&mut self) -> &mut M {
        &mut self.inner
    }

    fn contract_port(&self, port_id: &PortId) -> Result<PortId, DispatchError> {
        let rewritten = self.namespaces.account_to_contract(port_id.as_str());
        PortId::from_str(&rewritten).map_err(|e| DispatchError::MalformedPortId {
            port_id: port_id.to_string(),
            reason: e.to_string(),
        })
    }

    fn rewrite_packet(&self, packet: &Packet) -> Result<Packet, DispatchError> {
        let mut forwarded = packet.clone();
        forwarded.port_id_on_a = self.contract_port(&packet.port_id_on_a)?;
        Ok(forwarded)
    }
}

impl<M: IbcModule> InnerHandler for IcaAuthHandler<M> {
    fn label(&self) -> &'static str {
        "ica-auth"
    }

    fn open_channel(
        &mut self,
        _origin: CallOrigin,
        req: OpenChannelRequest<'_>,
    ) -> Result<Version, DispatchError> {
        let contract_port = self.contract_port(req.port_id)?;
        tracing::debug!(
            target: "ica.auth",
            port_id = %req.port_id,
            contract_port = %contract_port,
            channel_id = %req.channel_id,
            "forwarding channel open"
        );
        self.inner.on_chan_open_init(
            CallOrigin::IcaAuth,
            req.order,
            req.connection_hops,
            &contract_port,
            req.channel_id,
            req.token,
            req.counterparty,
            req.version,
        )
    }

    fn connect_channel(
        &mut self,
        _origin: CallOrigin,
        req: ConnectChannelRequest<'_>,
    ) -> Result<(), DispatchError> {
        let contract_port = self.contract_port(req.port_id)?;
        tracing::debug!(
            target: "ica.auth",
            port_id = %req.port_id,
            contract_port = %contract_port,
            channel_id = %req.channel_id,
            "forwarding channel connect"
        );
        self.inner.on_chan_open_ack(
            CallOrigin::IcaAuth,
            &contract_port,
            req.channel_id,
            req.counterparty_channel_id,
            req.counterparty_version,
        )
    }

    fn ack_packet(
        &mut self,
        _origin: CallOrigin,
        packet: &Packet,
        acknowledgement: &Acknowledgement,
        relayer: &Signer,
    ) -> Result<(), DispatchError> {
        let forwarded = self.rewrite_packet(packet)?;
        tracing::debug!(
            target: "ica.auth",
            port_id = %forwarded.port_id_on_a,
            channel_id = %forwarded.chan_id_on_a,
            sequence = %forwarded.seq_on_a,
            "forwarding packet acknowledgement"
        );
        self.inner
            .on_acknowledgement_packet(CallOrigin::IcaAuth, &forwarded, acknowledgement, relayer)
    }

    fn timeout_packet(
        &mut self,
        _origin: CallOrigin,
        packet: &Packet,
        relayer: &Signer,
    ) -> Result<(), DispatchError> {
        let forwarded = self.rewrite_packet(packet)?;
        tracing::debug!(
            target: "ica.auth",
            port_id = %forwarded.port_id_on_a,
            channel_id = %forwarded.chan_id_on_a,
            sequence = %forwarded.seq_on_a,
            "forwarding packet timeout"
        );
        self.inner
            .on_timeout_packet(CallOrigin::IcaAuth, &forwarded, relayer)
    }
}
