//! The seam between the library and the R runtime.
//!
//! Everything above this module depends only on the [`RBridge`] trait, so
//! the marshaler and client are testable with synthetic frames and no R
//! installation present.

mod mock;
mod rscript;
pub(crate) mod script;

pub use mock::MockBridge;
pub use rscript::RscriptBridge;

use crate::error::Result;
use crate::foreign::RFrame;

/// Evaluates an R expression that yields a data.frame and returns it as
/// a foreign frame.
///
/// Implementations must be thread-safe (`Send + Sync`); each evaluation
/// is independent and holds no shared mutable state.
pub trait RBridge: Send + Sync {
    /// Evaluate `fragment` (an R expression or block yielding a
    /// data.frame) and return the resulting tabular value.
    fn eval_frame(&self, fragment: &str) -> Result<RFrame>;

    /// Name of this bridge (for diagnostics).
    fn name(&self) -> &str;
}

impl<T: RBridge + ?Sized> RBridge for std::sync::Arc<T> {
    fn eval_frame(&self, fragment: &str) -> Result<RFrame> {
        (**self).eval_frame(fragment)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
