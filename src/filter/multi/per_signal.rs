//! Multiple input signal filter with a coefficient set per signal.

use num_traits::Float;

use crate::filter::multi::{MultiCore, PerSignal};
use crate::filter::FilterError;

/// Filters `n_signals` independent streams, each with its own coefficients.
///
/// Coefficients given at creation are normalized once and copied to every
/// channel.  Channels diverge afterwards through
/// [`set_coefs_one_signal`](PerSignalFilter::set_coefs_one_signal).
///
/// # Examples
///
/// ```
/// use iir_rs::filter::multi::PerSignalFilter;
///
/// let b = [1.0_f32, 0.0];
/// let a = [1.0, 0.0];
/// let mut filter = PerSignalFilter::new(2, 2, Some(&b[..]), Some(&a[..])).unwrap();
///
/// // Channel 1 becomes a gain of 0.5.
/// filter.set_coefs_one_signal(&[1.0, 0.0], &[2.0, 0.0], 1).unwrap();
/// assert_eq!(filter.add_input(&[4.0, 4.0]).unwrap(), &[4.0, 2.0]);
/// ```
#[derive(Clone, Debug)]
pub struct PerSignalFilter<T> {
    core: MultiCore<T, PerSignal>,
}

impl<T> PerSignalFilter<T>
where
    T: Float,
{
    /// Creates a filter at rest.
    ///
    /// # Arguments
    ///
    /// * `n_coefs` - Number of coefficients (order + 1), at least 2.
    /// * `n_signals` - Number of channels, at least 1.
    /// * `b`, `a` - One coefficient set, replicated into every channel.  When
    ///   either is `None` every channel starts with zero coefficients.
    pub fn new(
        n_coefs: isize,
        n_signals: isize,
        b: Option<&[T]>,
        a: Option<&[T]>,
    ) -> Result<Self, FilterError> {
        Ok(PerSignalFilter {
            core: MultiCore::new(n_coefs, n_signals, b, a)?,
        })
    }

    /// Replaces and normalizes the coefficients of channel `signal` only.
    ///
    /// Delay lines are untouched, and on error every channel keeps its
    /// previous coefficients.
    pub fn set_coefs_one_signal(
        &mut self,
        b: &[T],
        a: &[T],
        signal: usize,
    ) -> Result<(), FilterError> {
        self.core.set_coefs_one(b, a, signal)
    }

    /// Normalizes `b` and `a` once and copies them into every channel.
    pub fn set_coefs_all_signals(
        &mut self,
        b: &[T],
        a: &[T],
    ) -> Result<(), FilterError> {
        self.core.set_coefs_all(b, a)
    }

    /// Filters one sample per channel.
    ///
    /// The returned slice is the filter's output buffer and stays valid until
    /// the next mutating call.
    #[inline]
    pub fn add_input(&mut self, input: &[T]) -> Result<&[T], FilterError> {
        self.core.add_input(input)
    }

    pub fn add_input_into(
        &mut self,
        input: &[T],
        output: &mut [T],
    ) -> Result<(), FilterError> {
        self.core.add_input_into(input, output)
    }

    /// Like [`add_input`](PerSignalFilter::add_input), computing channels in
    /// parallel.
    pub fn add_input_par(&mut self, input: &[T]) -> Result<&[T], FilterError>
    where
        T: Send + Sync,
    {
        self.core.add_input_par(input)
    }

    pub fn last_output(&self) -> &[T] {
        self.core.last_output()
    }

    pub fn last_output_copy(&self) -> Vec<T> {
        self.core.last_output_copy()
    }

    pub fn reset(&mut self) {
        self.core.reset()
    }

    pub fn n_signals(&self) -> usize {
        self.core.n_signals()
    }

    pub fn n_coefs(&self) -> usize {
        self.core.n_coefs()
    }

    pub fn order(&self) -> usize {
        self.core.n_coefs() - 1
    }

    /// Normalized feedback coefficients of channel `signal`.
    pub fn coefs_a(&self, signal: usize) -> Result<&[T], FilterError> {
        self.core.check_signal(signal)?;
        Ok(self.core.coefs().a(signal))
    }

    /// Normalized feedforward coefficients of channel `signal`.
    pub fn coefs_b(&self, signal: usize) -> Result<&[T], FilterError> {
        self.core.check_signal(signal)?;
        Ok(self.core.coefs().b(signal))
    }

    pub fn delay_line(&self, signal: usize) -> Result<&[T], FilterError> {
        self.core.delay_line(signal)
    }
}

#[cfg(test)]
mod test {
    use crate::filter::multi::PerSignalFilter;
    use crate::filter::FilterError;

    #[test]
    fn test_invalid_creation() {
        let b = [1.0_f64; 20];
        let a = [1.0_f64; 20];
        for n in &[-10, 0, 1] {
            assert_eq!(
                PerSignalFilter::new(*n, 5, Some(&b[..]), Some(&a[..])).unwrap_err(),
                FilterError::InvalidOrder(*n)
            );
        }
        for n in &[-10, 0] {
            assert_eq!(
                PerSignalFilter::new(20, *n, Some(&b[..]), Some(&a[..])).unwrap_err(),
                FilterError::InvalidChannelCount(*n)
            );
        }
        assert_eq!(
            PerSignalFilter::new(2, 3, Some(&[1.0_f64, 1.0][..]), Some(&[0.0, 1.0][..]))
                .unwrap_err(),
            FilterError::InvalidCoefficients
        );
    }

    #[test]
    fn test_creation_replicates() {
        let filter = PerSignalFilter::new(
            3,
            4,
            Some(&[1.0_f64, 2.0, 1.0][..]),
            Some(&[2.0, 1.0, 0.5][..]),
        )
        .unwrap();
        for k in 0..4 {
            assert_eq!(filter.coefs_a(k).unwrap(), &[1.0, 0.5, 0.25]);
            assert_eq!(filter.coefs_b(k).unwrap(), &[0.5, 1.0, 0.5]);
        }
        assert_eq!(
            filter.coefs_a(4).unwrap_err(),
            FilterError::InvalidChannelIndex {
                index: 4,
                n_signals: 4
            }
        );
    }

    #[test]
    fn test_set_one_signal() {
        let mut filter = PerSignalFilter::<f32>::new(2, 3, None, None).unwrap();
        filter.set_coefs_all_signals(&[1.0, 0.0], &[1.0, 0.0]).unwrap();
        filter.set_coefs_one_signal(&[3.0, 0.0], &[1.0, 0.0], 2).unwrap();

        assert_eq!(filter.coefs_b(0).unwrap(), &[1.0, 0.0]);
        assert_eq!(filter.coefs_b(1).unwrap(), &[1.0, 0.0]);
        assert_eq!(filter.coefs_b(2).unwrap(), &[3.0, 0.0]);
        assert_eq!(filter.add_input(&[1.0, 2.0, 3.0]).unwrap(), &[1.0, 2.0, 9.0]);

        assert_eq!(
            filter
                .set_coefs_one_signal(&[1.0, 0.0], &[1.0, 0.0], 3)
                .unwrap_err(),
            FilterError::InvalidChannelIndex {
                index: 3,
                n_signals: 3
            }
        );
        assert_eq!(
            filter
                .set_coefs_one_signal(&[1.0, 0.0, 0.0], &[1.0, 0.0, 0.0], 0)
                .unwrap_err(),
            FilterError::CoefficientCountMismatch {
                expected: 2,
                found: 3
            }
        );
        assert_eq!(filter.coefs_b(2).unwrap(), &[3.0, 0.0]);
    }

    #[test]
    fn test_set_coefs_keeps_state() {
        let mut filter = PerSignalFilter::new(
            2,
            2,
            Some(&[0.5_f64, 0.5][..]),
            Some(&[1.0, -0.5][..]),
        )
        .unwrap();
        filter.add_input(&[1.0, -1.0]).unwrap();
        let z0 = filter.delay_line(0).unwrap().to_vec();
        let z1 = filter.delay_line(1).unwrap().to_vec();

        filter.set_coefs_one_signal(&[1.0, 0.0], &[1.0, 0.0], 1).unwrap();
        filter.set_coefs_all_signals(&[2.0, 0.0], &[1.0, 0.0]).unwrap();
        assert_eq!(filter.delay_line(0).unwrap(), &z0[..]);
        assert_eq!(filter.delay_line(1).unwrap(), &z1[..]);
    }
}
