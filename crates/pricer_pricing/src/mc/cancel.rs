//! Cooperative cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use pricer_core::types::PricingError;

/// Shared cancellation flag.
///
/// Clones share the same flag. Simulators check it once per time step and
/// the American pricer once per backward step; a cancelled computation
/// returns [`PricingError::Cancelled`].
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::CancellationToken;
///
/// let token = CancellationToken::new();
/// let handle = token.clone();
/// assert!(token.check().is_ok());
///
/// handle.cancel();
/// assert!(token.is_cancelled());
/// assert!(token.check().is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a token that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Returns true once cancellation has been requested.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// Returns `Err(PricingError::Cancelled)` once cancellation has been requested.
    #[inline]
    pub fn check(&self) -> Result<(), PricingError> {
        if self.is_cancelled() {
            Err(PricingError::Cancelled)
        } else {
            Ok(())
        }
    }
}
