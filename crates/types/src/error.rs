// Path: crates/types/src/error.rs
//! Core error types for the ICW port shim.

use thiserror::Error;

/// Maps an error to a stable, machine-readable string code.
pub trait ErrorCode {
    /// The code logged and asserted on for this variant.
    fn code(&self) -> &'static str;
}

/// Errors raised while dispatching channel and packet callbacks.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// A port identifier did not carry the expected namespace prefix or an
    /// embedded contract address failed to decode.
    #[error("Malformed port identifier {port_id}: {reason}")]
    MalformedPortId {
        /// The offending port identifier.
        port_id: String,
        /// What was wrong with it.
        reason: String,
    },
    /// A channel identifier violates the execution host's naming constraints.
    #[error("Invalid channel identifier {channel_id}: {reason}")]
    InvalidChannel {
        /// The offending channel identifier.
        channel_id: String,
        /// What was wrong with it.
        reason: String,
    },
    /// No channel metadata exists under the given port/channel pair.
    #[error("Channel not found: port {port_id}, channel {channel_id}")]
    ChannelNotFound {
        /// Port identifier of the missing channel.
        port_id: String,
        /// Channel identifier of the missing channel.
        channel_id: String,
    },
    /// A capability store operation failed.
    #[error(transparent)]
    Capability(#[from] CapabilityError),
    /// An invoked inner handler or host hook returned an error.
    #[error("Hook failed: {0}")]
    Hook(#[from] HookError),
    /// A dispatch error annotated with the step that produced it.
    #[error("{step}: {source}")]
    Step {
        /// Short static description of the failed step.
        step: &'static str,
        /// The underlying error.
        source: Box<DispatchError>,
    },
}

impl ErrorCode for DispatchError {
    fn code(&self) -> &'static str {
        match self {
            Self::MalformedPortId { .. } => "DISPATCH_MALFORMED_PORT_ID",
            Self::InvalidChannel { .. } => "DISPATCH_INVALID_CHANNEL_ID",
            Self::ChannelNotFound { .. } => "DISPATCH_CHANNEL_NOT_FOUND",
            Self::Capability(inner) => inner.code(),
            Self::Hook(_) => "DISPATCH_HOOK_FAILED",
            Self::Step { source, .. } => source.code(),
        }
    }
}

/// Errors surfaced by a capability store.
#[derive(Error, Debug)]
pub enum CapabilityError {
    /// A token is already claimed under the given path.
    #[error("Capability already claimed at {path}")]
    AlreadyClaimed {
        /// The contested capability path.
        path: String,
    },
    /// The caller does not own the token recorded under the given path.
    #[error("Capability not owned at {path}")]
    NotOwned {
        /// The capability path that failed the ownership check.
        path: String,
    },
}

impl ErrorCode for CapabilityError {
    fn code(&self) -> &'static str {
        match self {
            Self::AlreadyClaimed { .. } => "CAP_ALREADY_CLAIMED",
            Self::NotOwned { .. } => "CAP_NOT_OWNED",
        }
    }
}

/// An opaque failure reported by a contract host hook or an inner module.
///
/// The shim never interprets the text; it is carried verbatim into
/// [`DispatchError::Hook`].
#[derive(Error, Debug)]
#[error("{0}")]
pub struct HookError(pub String);

impl ErrorCode for HookError {
    fn code(&self) -> &'static str {
        "DISPATCH_HOOK_FAILED"
    }
}

/// A human-readable account string that failed to decode.
#[derive(Error, Debug)]
#[error("Invalid address encoding: {0}")]
pub struct AddressError(pub String);

impl ErrorCode for AddressError {
    fn code(&self) -> &'static str {
        "ADDR_INVALID_ENCODING"
    }
}

/// Extension trait for annotating a failed result with a static step tag.
pub trait ResultExt<T> {
    /// Wraps the error in [`DispatchError::Step`] under the given tag.
    fn step(self, step: &'static str) -> Result<T, DispatchError>;
}

impl<T, E: Into<DispatchError>> ResultExt<T> for Result<T, E> {
    fn step(self, step: &'static str) -> Result<T, DispatchError> {
        self.map_err(|e| DispatchError::Step {
            step,
            source: Box::new(e.into()),
        })
    }
}
