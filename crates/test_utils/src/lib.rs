// Path: crates/test_utils/src/lib.rs
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
        clippy::indexing_slicing
    )
)]

//! # ICW Test Utilities
//!
//! Utilities for testing the ICW port shim components: in-memory stores, a
//! recording contract host, a recording legacy auth module, and assertion
//! macros shared across the workspace's test suites.

pub mod assertions;
pub mod fixtures;
pub mod mock_host;
pub mod mock_module;
pub mod mock_store;

// Re-exported for the `assert_code!` macro, which names it by `$crate` path.
pub use icw_api::error::ErrorCode;

pub use mock_host::{HostCall, PrefixAddressCodec, RecordingHost};
pub use mock_module::{AuthCall, RecordingAuthModule};
pub use mock_store::{
    MemoryCapabilityStore, MemoryChannelStore, SharedCapabilityStore, SharedChannelStore,
};
