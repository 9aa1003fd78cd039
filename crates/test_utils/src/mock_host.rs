// Path: crates/test_utils/src/mock_host.rs
//! A recording contract host and a validating address codec.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use ibc_core_channel_types::channel::ChannelEnd;
use ibc_core_host_types::identifiers::{ChannelId, PortId};

use icw_api::host::{AddressCodec, ContractHost};
use icw_types::account::AccountId;
use icw_types::error::{AddressError, HookError};
use icw_types::wasm_msg;

use crate::mock_store::SharedChannelStore;

/// One recorded contract hook invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    /// `on_open_channel` was invoked.
    OpenChannel {
        /// Target contract.
        contract: AccountId,
        /// Message handed to the hook.
        msg: wasm_msg::ChannelOpenMsg,
    },
    /// `on_connect_channel` was invoked.
    ConnectChannel {
        /// Target contract.
        contract: AccountId,
        /// Message handed to the hook.
        msg: wasm_msg::ChannelConnectMsg,
    },
    /// `on_ack_packet` was invoked.
    AckPacket {
        /// Target contract.
        contract: AccountId,
        /// Message handed to the hook.
        msg: wasm_msg::PacketAckMsg,
    },
    /// `on_timeout_packet` was invoked.
    TimeoutPacket {
        /// Target contract.
        contract: AccountId,
        /// Message handed to the hook.
        msg: wasm_msg::PacketTimeoutMsg,
    },
}

/// A contract host that records every hook invocation.
///
/// Clones share the same recording, so a test can keep a handle after
/// moving the host into a dispatcher stack. A failure can be scripted for
/// the next hook, and the host can emulate a contract that reads its
/// channel state mid-call via [`RecordingHost::observing_channel`].
#[derive(Clone, Default)]
pub struct RecordingHost {
    calls: Arc<Mutex<Vec<HostCall>>>,
    fail_next: Arc<Mutex<Option<String>>>,
    channel_view: Option<(SharedChannelStore, PortId, ChannelId)>,
    observed: Arc<Mutex<Vec<ChannelEnd>>>,
}

impl RecordingHost {
    /// Creates a host that accepts every hook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshots the given channel from `store` whenever the connect hook
    /// runs, before answering it.
    pub fn observing_channel(
        mut self,
        store: SharedChannelStore,
        port_id: PortId,
        channel_id: ChannelId,
    ) -> Self {
        self.channel_view = Some((store, port_id, channel_id));
        self
    }

    /// Scripts the next hook invocation to fail with `message`.
    pub fn fail_next(&self, message: &str) {
        *self.lock(&self.fail_next) = Some(message.to_string());
    }

    /// Every recorded hook invocation, in order.
    pub fn calls(&self) -> Vec<HostCall> {
        self.lock(&self.calls).clone()
    }

    /// Channel snapshots taken during connect hooks, in order.
    pub fn observed_channels(&self) -> Vec<ChannelEnd> {
        self.lock(&self.observed).clone()
    }

    fn lock<'a, T>(&self, mutex: &'a Mutex<T>) -> MutexGuard<'a, T> {
        mutex.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, call: HostCall) -> Result<Vec<u8>, HookError> {
        self.lock(&self.calls).push(call);
        match self.lock(&self.fail_next).take() {
            Some(message) => Err(HookError(message)),
            None => Ok(Vec::new()),
        }
    }
}

impl ContractHost for RecordingHost {
    fn on_open_channel(
        &mut self,
        contract: &AccountId,
        msg: &wasm_msg::ChannelOpenMsg,
    ) -> Result<Vec<u8>, HookError> {
        self.record(HostCall::OpenChannel {
            contract: contract.clone(),
            msg: msg.clone(),
        })
    }

    fn on_connect_channel(
        &mut self,
        contract: &AccountId,
        msg: &wasm_msg::ChannelConnectMsg,
    ) -> Result<Vec<u8>, HookError> {
        if let Some((store, port_id, channel_id)) = &self.channel_view {
            if let Some(channel) = store.channel(port_id, channel_id) {
                self.lock(&self.observed).push(channel);
            }
        }
        self.record(HostCall::ConnectChannel {
            contract: contract.clone(),
            msg: msg.clone(),
        })
    }

    fn on_ack_packet(
        &mut self,
        contract: &AccountId,
        msg: &wasm_msg::PacketAckMsg,
    ) -> Result<Vec<u8>, HookError> {
        self.record(HostCall::AckPacket {
            contract: contract.clone(),
            msg: msg.clone(),
        })
    }

    fn on_timeout_packet(
        &mut self,
        contract: &AccountId,
        msg: &wasm_msg::PacketTimeoutMsg,
    ) -> Result<Vec<u8>, HookError> {
        self.record(HostCall::TimeoutPacket {
            contract: contract.clone(),
            msg: msg.clone(),
        })
    }
}

/// A validating stand-in for a chain's bech32-style address codec.
///
/// Accepts `{hrp}1{data}` with non-empty lowercase alphanumeric data and
/// uses the whole human-readable string as the account bytes, which keeps
/// test assertions legible. Real deployments plug in their chain's codec.
#[derive(Clone, Debug)]
pub struct PrefixAddressCodec {
    hrp: String,
}

impl PrefixAddressCodec {
    /// A codec expecting the given human-readable prefix.
    pub fn new(hrp: &str) -> Self {
        Self {
            hrp: hrp.to_string(),
        }
    }

    /// A codec for `cosmos1...` addresses.
    pub fn cosmos() -> Self {
        Self::new("cosmos")
    }
}

impl AddressCodec for PrefixAddressCodec {
    fn decode(&self, human: &str) -> Result<AccountId, AddressError> {
        let data = human
            .strip_prefix(self.hrp.as_str())
            .and_then(|rest| rest.strip_prefix('1'))
            .ok_or_else(|| AddressError(format!("expected {}1... address, got {human}", self.hrp)))?;
        if data.is_empty()
            || !data
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        {
            return Err(AddressError(format!("malformed address data in {human}")));
        }
        Ok(AccountId(human.as_bytes().to_vec()))
    }
}
