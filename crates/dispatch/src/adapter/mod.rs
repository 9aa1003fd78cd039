// Path: crates/dispatch/src/adapter/mod.rs
//! Store adapters placed between the contract-side dispatcher and the
//! protocol core's real stores.
//!
//! Both adapters key their behavior off the explicit call origin: under a
//! forwarded (`IcaAuth`) call chain the capability adapter suppresses the
//! duplicate claim and the channel adapter maps contract-namespace ports
//! back to the account namespace the core stored them under. Direct calls
//! pass through untouched.

/// Claim de-duplication over a capability store.
pub mod capability;
/// Port-namespace mapping over a channel store.
pub mod channel;

pub use capability::CapabilityAdapter;
pub use channel::ChannelAdapter;
