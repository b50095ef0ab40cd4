//! Multiple input signal filter with shared coefficients.

use num_traits::Float;

use crate::filter::multi::{MultiCore, Shared};
use crate::filter::FilterError;

/// Filters `n_signals` independent streams with one shared coefficient set.
///
/// # Examples
///
/// ```
/// use iir_rs::filter::multi::SharedFilter;
///
/// let b = [0.5_f64, 0.5];
/// let a = [1.0, 0.0];
/// let mut filter = SharedFilter::new(2, 3, Some(&b[..]), Some(&a[..])).unwrap();
///
/// assert_eq!(filter.add_input(&[2.0, 4.0, 6.0]).unwrap(), &[1.0, 2.0, 3.0]);
/// assert_eq!(filter.add_input(&[0.0, 0.0, 0.0]).unwrap(), &[1.0, 2.0, 3.0]);
/// ```
#[derive(Clone, Debug)]
pub struct SharedFilter<T> {
    core: MultiCore<T, Shared>,
}

impl<T> SharedFilter<T>
where
    T: Float,
{
    /// Creates a filter at rest.
    ///
    /// # Arguments
    ///
    /// * `n_coefs` - Number of coefficients (order + 1), at least 2.
    /// * `n_signals` - Number of channels, at least 1.
    /// * `b`, `a` - Coefficients shared by every channel.  When either is
    ///   `None` the coefficients start at zero and must be provided through
    ///   [`set_coefs`](SharedFilter::set_coefs).
    pub fn new(
        n_coefs: isize,
        n_signals: isize,
        b: Option<&[T]>,
        a: Option<&[T]>,
    ) -> Result<Self, FilterError> {
        Ok(SharedFilter {
            core: MultiCore::new(n_coefs, n_signals, b, a)?,
        })
    }

    /// Replaces and normalizes the shared coefficients.  Delay lines are
    /// untouched, and on error the previous coefficients are kept.
    pub fn set_coefs(&mut self, b: &[T], a: &[T]) -> Result<(), FilterError> {
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

    /// Like [`add_input`](SharedFilter::add_input), writing the outputs into
    /// `output`.
    pub fn add_input_into(
        &mut self,
        input: &[T],
        output: &mut [T],
    ) -> Result<(), FilterError> {
        self.core.add_input_into(input, output)
    }

    /// Like [`add_input`](SharedFilter::add_input), computing channels in
    /// parallel.
    pub fn add_input_par(&mut self, input: &[T]) -> Result<&[T], FilterError>
    where
        T: Send + Sync,
    {
        self.core.add_input_par(input)
    }

    /// View of the last outputs, one per channel.
    pub fn last_output(&self) -> &[T] {
        self.core.last_output()
    }

    /// Owned copy of the last outputs.
    pub fn last_output_copy(&self) -> Vec<T> {
        self.core.last_output_copy()
    }

    /// Zeroes every delay line and the output vector.
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

    pub fn coefs_a(&self) -> &[T] {
        self.core.coefs().a(0)
    }

    pub fn coefs_b(&self) -> &[T] {
        self.core.coefs().b(0)
    }

    pub fn delay_line(&self, signal: usize) -> Result<&[T], FilterError> {
        self.core.delay_line(signal)
    }
}

#[cfg(test)]
mod test {
    use crate::filter::multi::SharedFilter;
    use crate::filter::FilterError;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_invalid_creation() {
        let b = [1.0_f32; 20];
        let a = [1.0_f32; 20];
        for n in &[-10, 0, 1] {
            assert_eq!(
                SharedFilter::new(*n, 5, Some(&b[..]), Some(&a[..])).unwrap_err(),
                FilterError::InvalidOrder(*n)
            );
        }
        for n in &[-10, 0] {
            assert_eq!(
                SharedFilter::new(20, *n, Some(&b[..]), Some(&a[..])).unwrap_err(),
                FilterError::InvalidChannelCount(*n)
            );
        }
    }

    #[test]
    fn test_set_coefs() {
        let mut filter = SharedFilter::<f64>::new(3, 2, None, None).unwrap();
        filter
            .set_coefs(&[1.0, 2.0, 1.0], &[4.0, 2.0, 1.0])
            .unwrap();
        assert_approx_eq!(filter.coefs_a()[0], 1.0);
        assert_approx_eq!(filter.coefs_a()[2], 0.25);
        assert_approx_eq!(filter.coefs_b()[1], 0.5);

        assert_eq!(
            filter.set_coefs(&[1.0, 2.0], &[1.0, 2.0]).unwrap_err(),
            FilterError::CoefficientCountMismatch {
                expected: 3,
                found: 2
            }
        );
        assert_approx_eq!(filter.coefs_b()[1], 0.5);
    }

    #[test]
    fn test_equal_outputs() {
        let b = [0.0675_f32, 0.1349, 0.0675];
        let a = [1.0, -1.1430, 0.4128];
        let mut filter = SharedFilter::new(3, 6, Some(&b[..]), Some(&a[..])).unwrap();
        for i in 0..500 {
            let x = [((i % 17) as f32 - 8.0) * 3.5; 6];
            let y = filter.add_input(&x).unwrap();
            assert!(y.iter().all(|v| *v == y[0]));
        }
    }

    #[test]
    fn test_output_copy() {
        let mut filter =
            SharedFilter::new(2, 2, Some(&[1.0_f64, 0.0][..]), Some(&[1.0, 0.0][..]))
                .unwrap();
        filter.add_input(&[3.0, 4.0]).unwrap();
        let copy = filter.last_output_copy();
        filter.add_input(&[5.0, 6.0]).unwrap();
        assert_eq!(copy, vec![3.0, 4.0]);
        assert_eq!(filter.last_output(), &[5.0, 6.0]);

        filter.reset();
        assert_eq!(filter.last_output(), &[0.0, 0.0]);
    }
}
