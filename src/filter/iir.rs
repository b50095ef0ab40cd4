//! Implementation of the transposed Direct-Form-II IIR recursion.
//!
//! Coefficients are assumed to be normalized (`a[0] == 1`) and the state
//! holds `b.len() - 1` values.  The state starts at all zeros for a filter at
//! rest.  Every filter kind in this crate runs its samples through [`iir`],
//! so a channel of a multi-stream filter produces exactly the same values as
//! a single-stream filter with the same coefficients.

use num_traits::Float;

/// Runs one sample through the filter and returns the output sample.
///
/// # Arguments
///
/// * `input` - Input sample to be filtered.
/// * `b` - Normalized feedforward coefficients.
/// * `a` - Normalized feedback coefficients, same length as `b`.
/// * `state` - Delay line of length `b.len() - 1`, updated in place.
///
/// # Examples
///
/// ```
/// use iir_rs::filter::iir::*;
///
/// let b = [0.5_f64, 0.5];
/// let a = [1.0, -0.25];
/// let mut state = vec![0.0; 1];
///
/// assert_eq!(iir(2.0, &b, &a, &mut state), 1.0);
/// assert_eq!(iir(2.0, &b, &a, &mut state), 2.25);
/// ```
#[inline]
pub fn iir<T>(input: T, b: &[T], a: &[T], state: &mut [T]) -> T
where
    T: Float,
{
    let n_coefs = b.len();
    debug_assert!(n_coefs >= 2);
    debug_assert_eq!(a.len(), n_coefs);
    debug_assert_eq!(state.len(), n_coefs - 1);

    let a = &a[..n_coefs];
    let state = &mut state[..n_coefs - 1];

    let output = state[0] + b[0] * input;
    for j in 1..n_coefs - 1 {
        state[j - 1] = state[j] + input * b[j] - output * a[j];
    }
    state[n_coefs - 2] = input * b[n_coefs - 1] - output * a[n_coefs - 1];
    output
}

/// Runs a batch of samples through the filter.
///
/// # Arguments
///
/// * `input` - Input batch of samples to be filtered.
/// * `b` - Normalized feedforward coefficients.
/// * `a` - Normalized feedback coefficients, same length as `b`.
/// * `state` - Delay line of length `b.len() - 1`, updated in place.
///
/// # Examples
///
/// ```
/// use iir_rs::filter::iir::*;
///
/// let input: Vec<f32> = (0..100).map(|x| (x as f32).cos()).collect();
/// let b = [0.2, 0.6, 0.6, 0.2];
/// let a = [1.0, -0.4, 0.2, -0.1];
/// let mut state = vec![0.0; 3];
///
/// let output = batch_iir(&input, &b, &a, &mut state);
/// assert_eq!(output.len(), input.len());
/// ```
pub fn batch_iir<T>(input: &[T], b: &[T], a: &[T], state: &mut [T]) -> Vec<T>
where
    T: Float,
{
    input.iter().map(|x| iir(*x, b, a, state)).collect()
}
