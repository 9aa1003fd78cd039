// Path: crates/api/src/error.rs
//! Re-exports the shim's error types so API consumers need only this crate.

pub use icw_types::error::{
    AddressError, CapabilityError, DispatchError, ErrorCode, HookError, ResultExt,
};
