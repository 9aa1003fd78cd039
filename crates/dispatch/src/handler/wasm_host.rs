// Path: crates/dispatch/src/handler/wasm_host.rs
//! The contract-side inner handler.
//!
//! Resolves the target contract out of the port identifier, marshals each
//! callback into the execution host's message schema, and invokes the
//! matching host hook. Channel metadata is read and written through the
//! [`ChannelStore`] seam, which in deployment is the rewriting channel
//! adapter.

use ibc_core_channel_types::acknowledgement::Acknowledgement;
use ibc_core_channel_types::packet::Packet;
use ibc_core_channel_types::Version;
use ibc_core_host_types::identifiers::{ChannelId, PortId};
use ibc_primitives::Signer;

use icw_api::host::{AddressCodec, ContractHost};
use icw_api::store::ChannelStore;
use icw_types::account::AccountId;
use icw_types::error::{DispatchError, ResultExt};
use icw_types::port::PortNamespaces;
use icw_types::scope::CallOrigin;
use icw_types::wasm_msg;

use super::{ConnectChannelRequest, InnerHandler, OpenChannelRequest};
use crate::marshal;

/// Resolves the contract account embedded in a contract-namespace port.
///
/// Failures (missing prefix, empty or undecodable suffix) surface as
/// malformed-port-identifier errors tagged `contract port id`.
pub fn contract_from_port_id<A: AddressCodec + ?Sized>(
    namespaces: &PortNamespaces,
    addresses: &A,
    port_id: &PortId,
) -> Result<AccountId, DispatchError> {
    let suffix = namespaces
        .contract_suffix(port_id.as_str())
        .step("contract port id")?;
    addresses
        .decode(suffix)
        .map_err(|e| DispatchError::MalformedPortId {
            port_id: port_id.to_string(),
            reason: e.to_string(),
        })
        .step("contract port id")
}

/// Enforces the execution host's channel naming constraints: the identifier
/// must be `channel-{n}` with `n` within u32 range.
pub fn validate_channel_id(channel_id: &ChannelId) -> Result<(), DispatchError> {
    let invalid = |reason: &str| DispatchError::InvalidChannel {
        channel_id: channel_id.to_string(),
        reason: reason.to_string(),
    };
    let suffix = channel_id
        .as_str()
        .strip_prefix("channel-")
        .ok_or_else(|| invalid("expected the channel-{n} form"))?;
    let sequence: u64 = suffix
        .parse()
        .map_err(|_| invalid("expected a numeric channel sequence"))?;
    if sequence > u64::from(u32::MAX) {
        return Err(invalid("channel sequence exceeds u32 range"));
    }
    Ok(())
}

/// Marshals dispatched callbacks into contract host hook invocations.
pub struct WasmHostHandler<V, C, A> {
    host: V,
    channels: C,
    addresses: A,
    namespaces: PortNamespaces,
}

impl<V, C, A> WasmHostHandler<V, C, A>
where
    V: ContractHost,
    C: ChannelStore,
    A: AddressCodec,
{
    /// Builds a handler with the default port namespaces.
    pub fn new(host: V, channels: C, addresses: A) -> Self {
        Self::with_namespaces(host, channels, addresses, PortNamespaces::default())
    }

    /// Builds a handler with explicit port namespaces.
    pub fn with_namespaces(host: V, channels: C, addresses: A, namespaces: PortNamespaces) -> Self {
        Self {
            host,
            channels,
            addresses,
            namespaces,
        }
    }

    /// The wrapped contract host.
    pub fn host(&self) -> &V {
        &self.host
    }

    /// The channel store seam.
    pub fn channels(&self) -> &C {
        &self.channels
    }

    fn contract_for(&self, port_id: &PortId) -> Result<AccountId, DispatchError> {
        contract_from_port_id(&self.namespaces, &self.addresses, port_id)
    }
}

impl<V, C, A> InnerHandler for WasmHostHandler<V, C, A>
where
    V: ContractHost,
    C: ChannelStore,
    A: AddressCodec,
{
    fn label(&self) -> &'static str {
        "wasm"
    }

    fn open_channel(
        &mut self,
        _origin: CallOrigin,
        req: OpenChannelRequest<'_>,
    ) -> Result<Version, DispatchError> {
        validate_channel_id(req.channel_id)?;
        let contract = self.contract_for(req.port_id)?;
        let channel = marshal::wasm_channel(
            req.port_id,
            req.channel_id,
            req.counterparty,
            req.order,
            req.version,
            req.connection_hops,
        )?;
        tracing::debug!(
            target: "ica.wasm",
            contract = %contract,
            channel_id = %req.channel_id,
            "invoking open-channel hook"
        );
        self.host
            .on_open_channel(&contract, &wasm_msg::ChannelOpenMsg { channel })?;
        Ok(req.version.clone())
    }

    fn connect_channel(
        &mut self,
        origin: CallOrigin,
        req: ConnectChannelRequest<'_>,
    ) -> Result<(), DispatchError> {
        let contract = self.contract_for(req.port_id)?;
        let mut channel = self
            .channels
            .get_channel(origin, req.port_id, req.channel_id)?
            .ok_or_else(|| DispatchError::ChannelNotFound {
                port_id: req.port_id.to_string(),
                channel_id: req.channel_id.to_string(),
            })?;

        // The hook may read this channel; the counterparty assignment has to
        // be in the store before the contract runs.
        channel.remote.channel_id = Some(req.counterparty_channel_id.clone());
        self.channels
            .set_channel(origin, req.port_id, req.channel_id, channel.clone())?;

        let msg = wasm_msg::ChannelConnectMsg {
            channel: marshal::wasm_channel(
                req.port_id,
                req.channel_id,
                &channel.remote,
                channel.ordering,
                &channel.version,
                &channel.connection_hops,
            )?,
            counterparty_version: req.counterparty_version.to_string(),
        };
        tracing::debug!(
            target: "ica.wasm",
            contract = %contract,
            channel_id = %req.channel_id,
            counterparty_channel_id = %req.counterparty_channel_id,
            "invoking connect-channel hook"
        );
        self.host.on_connect_channel(&contract, &msg)?;
        Ok(())
    }

    fn ack_packet(
        &mut self,
        _origin: CallOrigin,
        packet: &Packet,
        acknowledgement: &Acknowledgement,
        relayer: &Signer,
    ) -> Result<(), DispatchError> {
        let contract = self.contract_for(&packet.port_id_on_a)?;
        let msg = wasm_msg::PacketAckMsg {
            acknowledgement: wasm_msg::IbcAcknowledgement {
                data: acknowledgement.as_ref().to_vec(),
            },
            original_packet: marshal::wasm_packet(packet),
            relayer: relayer.as_ref().to_string(),
        };
        tracing::debug!(
            target: "ica.wasm",
            contract = %contract,
            sequence = %packet.seq_on_a,
            "invoking ack-packet hook"
        );
        self.host.on_ack_packet(&contract, &msg).step("on ack")?;
        Ok(())
    }

    fn timeout_packet(
        &mut self,
        _origin: CallOrigin,
        packet: &Packet,
        relayer: &Signer,
    ) -> Result<(), DispatchError> {
        let contract = self.contract_for(&packet.port_id_on_a)?;
        let msg = wasm_msg::PacketTimeoutMsg {
            packet: marshal::wasm_packet(packet),
            relayer: relayer.as_ref().to_string(),
        };
        tracing::debug!(
            target: "ica.wasm",
            contract = %contract,
            sequence = %packet.seq_on_a,
            "invoking timeout-packet hook"
        );
        self.host
            .on_timeout_packet(&contract, &msg)
            .step("on timeout")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_channel_id_accepts_core_assigned_names() {
        assert!(validate_channel_id(&ChannelId::new(0)).is_ok());
        assert!(validate_channel_id(&ChannelId::new(u64::from(u32::MAX))).is_ok());
    }

    #[test]
    fn test_validate_channel_id_rejects_foreign_names() {
        let overflow = ChannelId::new(u64::from(u32::MAX) + 1);
        assert!(matches!(
            validate_channel_id(&overflow),
            Err(DispatchError::InvalidChannel { .. })
        ));

        // ibc v0.57 `ChannelId::from_str` already enforces the `channel-{n}`
        // form, so foreign names can only enter through unvalidated paths such
        // as deserialization; build the fixtures the same way.
        let named: ChannelId = serde_json::from_value(serde_json::json!("customchannel")).unwrap();
        assert!(matches!(
            validate_channel_id(&named),
            Err(DispatchError::InvalidChannel { .. })
        ));

        let trailing: ChannelId = serde_json::from_value(serde_json::json!("channel-12x")).unwrap();
        assert!(matches!(
            validate_channel_id(&trailing),
            Err(DispatchError::InvalidChannel { .. })
        ));
    }
}
