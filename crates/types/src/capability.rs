// Path: crates/types/src/capability.rs
//! Capability tokens and the paths they are claimed under.

use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// An opaque authorization token minted by the capability store.
///
/// The shim never inspects the index; it only carries the token between
/// the protocol core, the dispatchers, and the store. At most one claim
/// may exist per capability path.
#[derive(
    Encode,
    Decode,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Debug,
    Default,
    Hash,
)]
#[serde(transparent)]
pub struct CapabilityToken(pub u64);

impl From<u64> for CapabilityToken {
    fn from(index: u64) -> Self {
        Self(index)
    }
}

/// Renders the capability path of a channel, `ports/{port}/channels/{channel}`.
///
/// Each dispatcher claims under the port identifier it was invoked with, so
/// the two owners of one logical channel claim under different paths.
pub fn channel_capability_path(port_id: &str, channel_id: &str) -> String {
    format!("ports/{port_id}/channels/{channel_id}")
}
