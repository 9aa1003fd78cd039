// Path: crates/test_utils/src/mock_module.rs
//! A recording stand-in for the legacy account-authentication module.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use ibc_core_channel_types::acknowledgement::{
    Acknowledgement, AcknowledgementStatus, StatusValue,
};
use ibc_core_channel_types::channel::{Counterparty, Order};
use ibc_core_channel_types::packet::Packet;
use ibc_core_channel_types::Version;
use ibc_core_host_types::identifiers::{ChannelId, ConnectionId, PortId};
use ibc_primitives::Signer;

use icw_api::module::IbcModule;
use icw_types::capability::CapabilityToken;
use icw_types::error::{DispatchError, HookError};
use icw_types::scope::CallOrigin;

/// One recorded callback on the wrapped module, with the origin it carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthCall {
    /// `on_chan_open_init` was forwarded.
    OpenInit {
        /// Origin tag the call carried.
        origin: CallOrigin,
        /// Port identifier as the module saw it.
        port_id: String,
        /// Channel identifier.
        channel_id: String,
        /// Proposed ordering.
        order: Order,
        /// Counterparty port.
        counterparty_port: String,
        /// Proposed version.
        version: String,
    },
    /// `on_chan_open_ack` was forwarded.
    OpenAck {
        /// Origin tag the call carried.
        origin: CallOrigin,
        /// Port identifier as the module saw it.
        port_id: String,
        /// Channel identifier.
        channel_id: String,
        /// Counterparty channel assignment.
        counterparty_channel_id: String,
        /// Version the counterparty settled on.
        counterparty_version: String,
    },
    /// `on_acknowledgement_packet` was forwarded.
    AckPacket {
        /// Origin tag the call carried.
        origin: CallOrigin,
        /// Source port of the packet as the module saw it.
        src_port: String,
        /// Packet sequence.
        sequence: u64,
        /// Raw acknowledgement bytes.
        ack: Vec<u8>,
    },
    /// `on_timeout_packet` was forwarded.
    TimeoutPacket {
        /// Origin tag the call carried.
        origin: CallOrigin,
        /// Source port of the packet as the module saw it.
        src_port: String,
        /// Packet sequence.
        sequence: u64,
    },
}

/// Records every callback delivered to it; clones share the recording.
///
/// Handshake opens answer with the proposed version; everything else
/// answers success unless a failure was scripted.
#[derive(Clone, Default)]
pub struct RecordingAuthModule {
    calls: Arc<Mutex<Vec<AuthCall>>>,
    fail_next: Arc<Mutex<Option<String>>>,
}

impl RecordingAuthModule {
    /// Creates a module that accepts every callback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts the next recorded callback to fail with `message`.
    pub fn fail_next(&self, message: &str) {
        *lock(&self.fail_next) = Some(message.to_string());
    }

    /// Every recorded callback, in order.
    pub fn calls(&self) -> Vec<AuthCall> {
        lock(&self.calls).clone()
    }

    fn outcome(&self) -> Result<(), DispatchError> {
        match lock(&self.fail_next).take() {
            Some(message) => Err(HookError(message).into()),
            None => Ok(()),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl IbcModule for RecordingAuthModule {
    fn on_chan_open_init(
        &mut self,
        origin: CallOrigin,
        order: Order,
        _connection_hops: &[ConnectionId],
        port_id: &PortId,
        channel_id: &ChannelId,
        _token: &CapabilityToken,
        counterparty: &Counterparty,
        version: &Version,
    ) -> Result<Version, DispatchError> {
        lock(&self.calls).push(AuthCall::OpenInit {
            origin,
            port_id: port_id.to_string(),
            channel_id: channel_id.to_string(),
            order,
            counterparty_port: counterparty.port_id.to_string(),
            version: version.to_string(),
        });
        self.outcome()?;
        Ok(version.clone())
    }

    fn on_chan_open_try(
        &mut self,
        _origin: CallOrigin,
        _order: Order,
        _connection_hops: &[ConnectionId],
        _port_id: &PortId,
        _channel_id: &ChannelId,
        _token: &CapabilityToken,
        _counterparty: &Counterparty,
        _counterparty_version: &Version,
    ) -> Result<Version, DispatchError> {
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
        lock(&self.calls).push(AuthCall::OpenAck {
            origin,
            port_id: port_id.to_string(),
            channel_id: channel_id.to_string(),
            counterparty_channel_id: counterparty_channel_id.to_string(),
            counterparty_version: counterparty_version.to_string(),
        });
        self.outcome()
    }

    fn on_chan_open_confirm(
        &mut self,
        _origin: CallOrigin,
        _port_id: &PortId,
        _channel_id: &ChannelId,
    ) -> Result<(), DispatchError> {
        Ok(())
    }

    fn on_chan_close_init(
        &mut self,
        _origin: CallOrigin,
        _port_id: &PortId,
        _channel_id: &ChannelId,
    ) -> Result<(), DispatchError> {
        Ok(())
    }

    fn on_chan_close_confirm(
        &mut self,
        _origin: CallOrigin,
        _port_id: &PortId,
        _channel_id: &ChannelId,
    ) -> Result<(), DispatchError> {
        Ok(())
    }

    #[allow(clippy::expect_used)]
    fn on_recv_packet(
        &mut self,
        _origin: CallOrigin,
        _packet: &Packet,
        _relayer: &Signer,
    ) -> AcknowledgementStatus {
        AcknowledgementStatus::success(
            StatusValue::new("AQ==").expect("status literal is not empty"),
        )
    }

    fn on_acknowledgement_packet(
        &mut self,
        origin: CallOrigin,
        packet: &Packet,
        acknowledgement: &Acknowledgement,
        _relayer: &Signer,
    ) -> Result<(), DispatchError> {
        lock(&self.calls).push(AuthCall::AckPacket {
            origin,
            src_port: packet.port_id_on_a.to_string(),
            sequence: packet.seq_on_a.into(),
            ack: acknowledgement.as_ref().to_vec(),
        });
        self.outcome()
    }

    fn on_timeout_packet(
        &mut self,
        origin: CallOrigin,
        packet: &Packet,
        _relayer: &Signer,
    ) -> Result<(), DispatchError> {
        lock(&self.calls).push(AuthCall::TimeoutPacket {
            origin,
            src_port: packet.port_id_on_a.to_string(),
            sequence: packet.seq_on_a.into(),
        });
        self.outcome()
    }
}
