//! Minimal registry contract for feature slices.

use std::any::Any;
use std::fmt::Debug;

/// Implemented by every initialized feature slice (see `edupath_derive::feature_slice`).
pub trait FeatureSlice: Any + Debug + Send + Sync {
    /// Stable slice name used in startup logs.
    fn name(&self) -> &'static str;

    /// Helper to allow downcasting from the trait object.
    fn as_any(&self) -> &dyn Any;
}
