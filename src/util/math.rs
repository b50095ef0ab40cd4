use num_traits::Float;

use crate::filter::single::SingleFilter;
use crate::filter::FilterError;

/// Steady-state gain of a filter for a constant input: `sum(b) / sum(a)`.
///
/// The ratio is unaffected by normalization, so raw or normalized
/// coefficients give the same value.
///
/// # Examples
///
/// ```
/// use iir_rs::util::math::dc_gain;
///
/// assert_eq!(dc_gain(&[0.25_f64, 0.25], &[1.0, -0.5]), 1.0);
/// ```
pub fn dc_gain<T: Float>(b: &[T], a: &[T]) -> T {
    let sum = |v: &[T]| v.iter().fold(T::zero(), |acc, x| acc + *x);
    sum(b) / sum(a)
}

/// Computes the first `len` samples of a filter's impulse response.
///
/// # Arguments
///
/// * `b` - Feedforward coefficients.
/// * `a` - Feedback coefficients, same length as `b`.
/// * `len` - Number of output samples.
///
/// # Examples
///
/// ```
/// use iir_rs::util::math::impulse_response;
///
/// let h = impulse_response(&[1.0_f64, 0.0], &[1.0, -0.5], 4).unwrap();
/// assert_eq!(h, vec![1.0, 0.5, 0.25, 0.125]);
/// ```
pub fn impulse_response<T: Float>(
    b: &[T],
    a: &[T],
    len: usize,
) -> Result<Vec<T>, FilterError> {
    let mut filter = SingleFilter::new(b.len() as isize, b, a)?;
    let mut response = Vec::with_capacity(len);
    for i in 0..len {
        let x = if i == 0 { T::one() } else { T::zero() };
        response.push(filter.add_input(x));
    }
    Ok(response)
}
