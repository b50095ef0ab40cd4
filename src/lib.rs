//! Recursive (IIR) digital filters for one or many independent sample
//! streams.
//!
//! A filter is built from a rational transfer function given as feedforward
//! coefficients `b` and feedback coefficients `a`.  Samples are pushed through
//! one at a time (or one per channel at a time) and each filter keeps its own
//! delay line between calls.
//!
//! # Example
//!
//! ```
//! use iir_rs::prelude::*;
//!
//! let b = [0.0675, 0.1349, 0.0675];
//! let a = [1.0, -1.1430, 0.4128];
//!
//! let mut single = SingleFilter::<Signal>::new(3, &b, &a).unwrap();
//! let mut multi = SharedFilter::<Signal>::new(3, 4, Some(&b[..]), Some(&a[..])).unwrap();
//!
//! for i in 0..32 {
//!     let x = (i as Signal * 0.2).sin();
//!     let y = single.add_input(x);
//!     assert!(multi.add_input(&[x; 4]).unwrap().iter().all(|v| *v == y));
//! }
//! ```

pub mod filter;
pub mod prelude;
pub mod reference;
pub mod util;

/// Sample type used by the demos and reference tooling.
///
/// `f32` by default, `f64` with the `double` feature.
#[cfg(not(feature = "double"))]
pub type Signal = f32;

/// Sample type used by the demos and reference tooling.
///
/// `f32` by default, `f64` with the `double` feature.
#[cfg(feature = "double")]
pub type Signal = f64;
