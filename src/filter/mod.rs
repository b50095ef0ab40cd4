//! Recursive (IIR) filters for one or many sample streams.
//!
//! IIR filters are feedback based systems, and have all the caveats
//! associated with any feedback system.  If poorly designed they can be
//! unstable, and their phase and group delay responses are non-linear.  In
//! exchange a well designed IIR filter is extremely cheap: many times a design
//! that requires an 81 tap FIR filter could only require 9 coefficients from
//! a well designed IIR alternative.
//!
//! Every filter in this module is described by a rational transfer function
//! with feedforward coefficients `b` and feedback coefficients `a`, both of
//! length `order + 1`.  Coefficients are normalized on entry so that
//! `a[0] == 1`, and samples are run through a transposed Direct-Form-II
//! recursion (see [`iir::iir`]).
//!
//! Three kinds of filter are provided:
//!
//! * [`single::SingleFilter`] - one coefficient set, one sample stream.
//! * [`multi::SharedFilter`] - one coefficient set applied to N streams.
//! * [`multi::PerSignalFilter`] - N coefficient sets for N streams.
//!
//! Dropping a filter releases all of its buffers.

use std::error;
use std::fmt;

use num_traits::Float;

pub mod coefs;
pub mod delay;
pub mod iir;
pub mod multi;
pub mod single;

/// Errors reported by filter construction and coefficient updates.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterError {
    /// Fewer than two coefficients were requested.
    InvalidOrder(isize),
    /// A multi-stream filter was requested with no channels.
    InvalidChannelCount(isize),
    /// A filter buffer could not be allocated.
    AllocationFailure,
    /// `a[0]` is zero or a required coefficient array is missing.
    InvalidCoefficients,
    InvalidChannelIndex { index: usize, n_signals: usize },
    CoefficientCountMismatch { expected: usize, found: usize },
    /// An input vector does not hold one sample per channel.
    InputLengthMismatch { expected: usize, found: usize },
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            FilterError::InvalidOrder(n_coefs) => write!(
                f,
                "Filter error: not enough coefficients ({}), min is 2",
                n_coefs
            ),
            FilterError::InvalidChannelCount(n_signals) => write!(
                f,
                "Filter error: invalid number of signals ({})",
                n_signals
            ),
            FilterError::AllocationFailure => {
                write!(f, "Filter error: unable to allocate filter memory")
            }
            FilterError::InvalidCoefficients => write!(
                f,
                "Filter error: coefficients missing or a[0] is zero"
            ),
            FilterError::InvalidChannelIndex { index, n_signals } => write!(
                f,
                "Filter error: signal index {} out of range [0, {})",
                index, n_signals
            ),
            FilterError::CoefficientCountMismatch { expected, found } => {
                write!(
                    f,
                    "Filter error: expected {} coefficients, got {}",
                    expected, found
                )
            }
            FilterError::InputLengthMismatch { expected, found } => write!(
                f,
                "Filter error: expected {} input samples, got {}",
                expected, found
            ),
        }
    }
}

impl error::Error for FilterError {
    fn cause(&self) -> Option<&dyn error::Error> {
        None
    }
}

/// Checks a requested coefficient count, returning it as a `usize`.
pub(crate) fn check_n_coefs(n_coefs: isize) -> Result<usize, FilterError> {
    if n_coefs < 2 {
        return Err(FilterError::InvalidOrder(n_coefs));
    }
    Ok(n_coefs as usize)
}

/// Checks a requested channel count, returning it as a `usize`.
pub(crate) fn check_n_signals(n_signals: isize) -> Result<usize, FilterError> {
    if n_signals <= 0 {
        return Err(FilterError::InvalidChannelCount(n_signals));
    }
    Ok(n_signals as usize)
}

/// Allocates a zeroed buffer, reporting exhaustion instead of aborting.
pub(crate) fn alloc_zeroed<T: Float>(len: usize) -> Result<Vec<T>, FilterError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| FilterError::AllocationFailure)?;
    buf.resize(len, T::zero());
    Ok(buf)
}

#[cfg(test)]
mod test {
    use crate::filter::*;

    #[test]
    fn test_check_counts() {
        assert_eq!(check_n_coefs(-10), Err(FilterError::InvalidOrder(-10)));
        assert_eq!(check_n_coefs(0), Err(FilterError::InvalidOrder(0)));
        assert_eq!(check_n_coefs(1), Err(FilterError::InvalidOrder(1)));
        assert_eq!(check_n_coefs(2), Ok(2));
        assert_eq!(
            check_n_signals(-10),
            Err(FilterError::InvalidChannelCount(-10))
        );
        assert_eq!(
            check_n_signals(0),
            Err(FilterError::InvalidChannelCount(0))
        );
        assert_eq!(check_n_signals(3), Ok(3));
    }

    #[test]
    fn test_alloc_zeroed() {
        let buf: Vec<f32> = alloc_zeroed(7).unwrap();
        assert_eq!(buf, vec![0.0; 7]);
        let huge: Result<Vec<f64>, _> = alloc_zeroed(usize::MAX / 4);
        assert_eq!(huge, Err(FilterError::AllocationFailure));
    }

    #[test]
    fn test_display() {
        let err = FilterError::InvalidChannelIndex {
            index: 5,
            n_signals: 5,
        };
        assert_eq!(
            err.to_string(),
            "Filter error: signal index 5 out of range [0, 5)"
        );
    }
}
