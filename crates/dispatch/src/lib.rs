// Path: crates/dispatch/src/lib.rs
#![forbid(unsafe_code)]

//! # ICW Dispatch
//!
//! The dispatch layer of the ICW port shim: one generic channel/packet
//! callback middleware, the two inner handlers it is deployed with, and the
//! store adapters that let the account-abstraction and contract execution
//! layers share a channel without tripping over each other's state.
//!
//! The controller-side stack wraps the legacy account-authentication module
//! ([`IcaAuthHandler`]); the contract-side stack marshals callbacks into the
//! execution host's message schema ([`WasmHostHandler`]). Both run under the
//! same [`IbcMiddleware`], which owns capability claiming and the refusal
//! responses for callbacks neither role supports.

/// Store adapters shared between the two dispatcher roles.
pub mod adapter;
/// The inner-handler seam and its two concrete implementations.
pub mod handler;
/// Pure transforms from protocol-core structures to the host schema.
pub mod marshal;
/// The generic callback middleware.
pub mod middleware;

pub use adapter::{CapabilityAdapter, ChannelAdapter};
pub use handler::{
    ConnectChannelRequest, IcaAuthHandler, InnerHandler, OpenChannelRequest, WasmHostHandler,
};
pub use middleware::IbcMiddleware;
