// Path: crates/dispatch/src/adapter/capability.rs
//! Claim de-duplication over a capability store.
//!
//! When the account-authentication dispatcher forwards a handshake into the
//! contract-side dispatcher, both middlewares reach their claim step for
//! the same logical channel. The controller side claims under the original
//! port with a direct origin; the forwarded chain arrives here tagged
//! [`CallOrigin::IcaAuth`](icw_types::scope::CallOrigin::IcaAuth) and its
//! claim is absorbed as a no-op success. Lookups and ownership checks are
//! never suppressed.

use icw_api::store::CapabilityStore;
use icw_types::capability::CapabilityToken;
use icw_types::error::CapabilityError;
use icw_types::scope::CallOrigin;

/// Wraps a capability store, absorbing claims from forwarded call chains.
pub struct CapabilityAdapter<S> {
    inner: S,
}

impl<S: CapabilityStore> CapabilityAdapter<S> {
    /// Wraps `inner`.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// The wrapped store.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Unwraps the adapter.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: CapabilityStore> CapabilityStore for CapabilityAdapter<S> {
    fn get(&self, origin: CallOrigin, path: &str) -> Option<CapabilityToken> {
        self.inner.get(origin, path)
    }

    fn claim(
        &mut self,
        origin: CallOrigin,
        token: &CapabilityToken,
        path: &str,
    ) -> Result<(), CapabilityError> {
        if origin.is_ica_auth() {
            tracing::debug!(target: "ica.cap", path, "absorbing forwarded capability claim");
            return Ok(());
        }
        self.inner.claim(origin, token, path)
    }

    fn authenticate(&self, origin: CallOrigin, token: &CapabilityToken, path: &str) -> bool {
        self.inner.authenticate(origin, token, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A store that conflicts on every claim, so any claim reaching it is
    /// observable as an error.
    struct ConflictStore;

    impl CapabilityStore for ConflictStore {
        fn get(&self, _origin: CallOrigin, _path: &str) -> Option<CapabilityToken> {
            None
        }

        fn claim(
            &mut self,
            _origin: CallOrigin,
            _token: &CapabilityToken,
            path: &str,
        ) -> Result<(), CapabilityError> {
            Err(CapabilityError::AlreadyClaimed {
                path: path.to_string(),
            })
        }

        fn authenticate(
            &self,
            _origin: CallOrigin,
            _token: &CapabilityToken,
            _path: &str,
        ) -> bool {
            false
        }
    }

    #[test]
    fn test_forwarded_claim_never_reaches_the_store() {
        let mut adapter = CapabilityAdapter::new(ConflictStore);
        let token = CapabilityToken(1);
        assert!(adapter
            .claim(CallOrigin::IcaAuth, &token, "ports/p/channels/c")
            .is_ok());
    }

    #[test]
    fn test_direct_claim_delegates_and_surfaces_conflicts() {
        let mut adapter = CapabilityAdapter::new(ConflictStore);
        let token = CapabilityToken(1);
        assert!(matches!(
            adapter.claim(CallOrigin::Direct, &token, "ports/p/channels/c"),
            Err(CapabilityError::AlreadyClaimed { .. })
        ));
    }

    #[test]
    fn test_lookup_and_authentication_are_never_suppressed() {
        let mut inner = icw_test_utils::MemoryCapabilityStore::new();
        let token = inner.mint();
        let mut adapter = CapabilityAdapter::new(inner);
        adapter
            .claim(CallOrigin::Direct, &token, "ports/p/channels/c")
            .unwrap();

        // Both origins see the same record; neither skips the store.
        assert_eq!(
            adapter.get(CallOrigin::IcaAuth, "ports/p/channels/c"),
            Some(token)
        );
        assert!(adapter.authenticate(CallOrigin::IcaAuth, &token, "ports/p/channels/c"));
        assert!(!adapter.authenticate(CallOrigin::Direct, &CapabilityToken(99), "ports/p/channels/c"));
    }
}
