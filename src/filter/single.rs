//! A single input signal IIR filter.
//!
//! Holds one coefficient set and one delay line, and filters a scalar stream
//! one sample at a time.  State persists across calls until [`reset`] is
//! called.
//!
//! [`reset`]: SingleFilter::reset

use log::{debug, warn};
use num_traits::Float;

use crate::filter::coefs::CoefBank;
use crate::filter::delay::DelayLines;
use crate::filter::iir::iir;
use crate::filter::{check_n_coefs, FilterError};

/// An IIR filter for one sample stream.
///
/// # Examples
///
/// ```
/// use iir_rs::filter::single::SingleFilter;
///
/// // y[n] = 0.5 x[n] + 0.5 y[n - 1], given with a[0] = 2
/// let mut filter = SingleFilter::new(2, &[1.0_f32, 0.0], &[2.0, -1.0]).unwrap();
///
/// assert_eq!(filter.add_input(4.0), 2.0);
/// assert_eq!(filter.add_input(4.0), 3.0);
/// assert_eq!(filter.last_output(), 3.0);
/// ```
#[derive(Clone, Debug)]
pub struct SingleFilter<T> {
    coefs: CoefBank<T>,
    state: DelayLines<T>,
    last_output: T,
}

impl<T> SingleFilter<T>
where
    T: Float,
{
    /// Creates a filter at rest with `n_coefs` coefficients (order + 1).
    ///
    /// # Arguments
    ///
    /// * `n_coefs` - Number of coefficients, at least 2.
    /// * `b` - Feedforward coefficients, `n_coefs` values.
    /// * `a` - Feedback coefficients, `n_coefs` values with `a[0] != 0`.
    pub fn new(n_coefs: isize, b: &[T], a: &[T]) -> Result<Self, FilterError> {
        let n_coefs = check_n_coefs(n_coefs).map_err(|e| {
            warn!("unable to create single filter: {}", e);
            e
        })?;

        let mut coefs = CoefBank::zeroed(n_coefs, 1)?;
        coefs.store(0, b, a)?;
        let state = DelayLines::zeroed(n_coefs, 1)?;
        debug!("created single filter with {} coefficients", n_coefs);

        Ok(SingleFilter {
            coefs,
            state,
            last_output: T::zero(),
        })
    }

    /// Filters the next input sample and returns the output.
    ///
    /// Runs in O(n_coefs) and never allocates.
    #[inline]
    pub fn add_input(&mut self, input: T) -> T {
        let (b, a) = self.coefs.pair(0);
        self.last_output = iir(input, b, a, self.state.segment_mut(0));
        self.last_output
    }

    /// Filters a batch of samples, returning one output per input.
    pub fn add_inputs(&mut self, input: &[T]) -> Vec<T> {
        input.iter().map(|x| self.add_input(*x)).collect()
    }

    /// Filters `samples` in place.
    pub fn filter_in_place(&mut self, samples: &mut [T]) {
        for x in samples.iter_mut() {
            *x = self.add_input(*x);
        }
    }

    /// Replaces the coefficients.  The delay line is left as it is.
    ///
    /// On error the previous coefficients are kept.
    pub fn set_coefs(&mut self, b: &[T], a: &[T]) -> Result<(), FilterError> {
        self.coefs.store(0, b, a)
    }

    /// Returns the filter to rest: zero state and zero last output.
    pub fn reset(&mut self) {
        self.state.reset();
        self.last_output = T::zero();
    }

    /// The most recent output, or zero if nothing has been filtered since
    /// creation or the last reset.
    pub fn last_output(&self) -> T {
        self.last_output
    }

    pub fn n_coefs(&self) -> usize {
        self.coefs.n_coefs()
    }

    pub fn order(&self) -> usize {
        self.coefs.n_coefs() - 1
    }

    /// Normalized feedback coefficients.
    pub fn coefs_a(&self) -> &[T] {
        self.coefs.a(0)
    }

    /// Normalized feedforward coefficients.
    pub fn coefs_b(&self) -> &[T] {
        self.coefs.b(0)
    }

    pub fn delay_line(&self) -> &[T] {
        self.state.segment(0)
    }
}
