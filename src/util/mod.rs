//! Helper functions for working with filter coefficients and sample types.

/// Some basic math functions on coefficient sets
pub mod math;
/// Per-width constants and binary I/O for sample types
pub mod sample;
