// Path: crates/types/src/scope.rs
//! The explicit call-origin marker threaded through every dispatch call.

/// Identifies the call chain an operation belongs to.
///
/// When the account-authentication dispatcher forwards a callback to the
/// contract-side dispatcher it tags the forwarded call with
/// [`CallOrigin::IcaAuth`], letting the shared capability and channel
/// adapters tell the channel's two owners apart. The marker is carry-only
/// state: it travels as an explicit argument for the duration of one call
/// chain and is never persisted or stored globally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CallOrigin {
    /// The protocol core invoked the callback directly.
    #[default]
    Direct,
    /// The callback was forwarded by the account-authentication dispatcher.
    IcaAuth,
}

impl CallOrigin {
    /// True when the call was forwarded by the account-authentication
    /// dispatcher.
    pub fn is_ica_auth(self) -> bool {
        matches!(self, Self::IcaAuth)
    }
}
