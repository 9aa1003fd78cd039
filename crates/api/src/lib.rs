// Path: crates/api/src/lib.rs

//! # ICW API Crate Lints
//!
//! Non-test code in this crate is linted panic-free: unwraps, explicit
//! panics, and direct slice indexing are denied, and every failure has to
//! surface as a typed error instead.
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::todo,
        clippy::unimplemented,
        clippy::indexing_slicing
    )
)]
//! # ICW API
//!
//! Core traits and interfaces for the ICW port shim. This crate defines the
//! stable contract between the protocol core, the dispatchers, and the
//! collaborator subsystems (capability store, channel store, contract host).

/// Re-exports all core error types from the central `icw-types` crate.
pub mod error;
/// The contract execution host and address codec seams.
pub mod host;
/// The channel and packet callback surface exposed to the protocol core.
pub mod module;
/// Capability and channel store seams consumed by the dispatchers.
pub mod store;

/// One-stop imports for the seam traits and error types most callers need.
pub mod prelude {
    pub use crate::error::{
        AddressError, CapabilityError, DispatchError, ErrorCode, HookError, ResultExt,
    };
    pub use crate::host::{AddressCodec, ContractHost};
    pub use crate::module::IbcModule;
    pub use crate::store::{CapabilityStore, ChannelStore};
}
