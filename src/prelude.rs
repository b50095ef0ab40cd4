//! This module provides an easy single import for those using this crate.

pub use crate::filter::multi::{PerSignalFilter, SharedFilter};
pub use crate::filter::single::SingleFilter;
pub use crate::filter::FilterError;
pub use crate::util::sample::Sample;
pub use crate::Signal;
