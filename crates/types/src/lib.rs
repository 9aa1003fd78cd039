// Path: crates/types/src/lib.rs
#![forbid(unsafe_code)]
#![deny(missing_docs)]

//! # ICW Types
//!
//! This crate is the foundational library for the ICW port shim, containing
//! the data structures, namespace constants, and error types shared by every
//! other crate in the workspace.
//!
//! ## Architectural Role
//!
//! As the base crate, `icw-types` has minimal dependencies and is itself a
//! dependency for every other crate in the workspace. This structure prevents
//! circular dependencies and provides a stable, canonical definition for
//! shared types like `CallOrigin`, `PortNamespaces`, `CapabilityToken`, and
//! the dispatch error enums.

/// The workspace-wide `Result` alias, defaulting to the dispatch error.
pub type Result<T, E = crate::error::DispatchError> = std::result::Result<T, E>;

/// Contract account identifiers in raw byte form.
pub mod account;
/// Capability tokens and the paths they are claimed under.
pub mod capability;
/// A unified set of all error types used across the shim.
pub mod error;
/// Port identifier namespaces and prefix rewriting.
pub mod port;
/// The explicit call-origin marker threaded through every dispatch call.
pub mod scope;
/// The in-memory message schema of the contract execution host.
pub mod wasm_msg;
