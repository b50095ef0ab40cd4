//! Coefficient normalization and storage.
//!
//! A [`CoefBank`] owns one or more coefficient sets laid out set-major: all
//! of one set's `a` coefficients followed by its `b` coefficients, then the
//! next set.  Callers only ever see per-set slices.

use log::warn;
use num_traits::Float;

use crate::filter::{alloc_zeroed, FilterError};

/// Divides the first `n_coefs` entries of `b` and `a` by `a[0]`, in place.
///
/// Neither slice is modified when `a[0]` is zero or either slice holds fewer
/// than `n_coefs` values.
///
/// # Arguments
///
/// * `n_coefs` - Number of coefficients to normalize.
/// * `b` - Feedforward coefficients.
/// * `a` - Feedback coefficients.
///
/// # Examples
///
/// ```
/// use iir_rs::filter::coefs::normalize;
///
/// let mut b = vec![1.0_f64, 2.0, 3.0];
/// let mut a = vec![2.0, 4.0, 8.0];
/// normalize(3, &mut b, &mut a).unwrap();
///
/// assert_eq!(a, vec![1.0, 2.0, 4.0]);
/// assert_eq!(b, vec![0.5, 1.0, 1.5]);
/// ```
pub fn normalize<T>(
    n_coefs: usize,
    b: &mut [T],
    a: &mut [T],
) -> Result<(), FilterError>
where
    T: Float,
{
    if n_coefs == 0 || a.len() < n_coefs || b.len() < n_coefs {
        return Err(FilterError::InvalidCoefficients);
    }
    let a0 = a[0];
    if a0 == T::zero() {
        return Err(FilterError::InvalidCoefficients);
    }
    for (x, y) in a[..n_coefs].iter_mut().zip(b[..n_coefs].iter_mut()) {
        *x = *x / a0;
        *y = *y / a0;
    }
    Ok(())
}

/// Owned storage for `n_sets` coefficient sets of `n_coefs` values each.
#[derive(Clone, Debug)]
pub struct CoefBank<T> {
    n_coefs: usize,
    n_sets: usize,
    data: Vec<T>,
}

impl<T> CoefBank<T>
where
    T: Float,
{
    /// Allocates a bank with every coefficient set to zero.
    pub fn zeroed(n_coefs: usize, n_sets: usize) -> Result<Self, FilterError> {
        let len = n_coefs
            .checked_mul(n_sets)
            .and_then(|x| x.checked_mul(2))
            .ok_or(FilterError::AllocationFailure)?;
        Ok(CoefBank {
            n_coefs,
            n_sets,
            data: alloc_zeroed(len)?,
        })
    }

    pub fn n_coefs(&self) -> usize {
        self.n_coefs
    }

    pub fn n_sets(&self) -> usize {
        self.n_sets
    }

    /// Feedback coefficients of set `set`.
    #[inline]
    pub fn a(&self, set: usize) -> &[T] {
        let start = 2 * self.n_coefs * set;
        &self.data[start..start + self.n_coefs]
    }

    /// Feedforward coefficients of set `set`.
    #[inline]
    pub fn b(&self, set: usize) -> &[T] {
        let start = 2 * self.n_coefs * set + self.n_coefs;
        &self.data[start..start + self.n_coefs]
    }

    /// Returns `(b, a)` for set `set`.
    #[inline]
    pub fn pair(&self, set: usize) -> (&[T], &[T]) {
        let start = 2 * self.n_coefs * set;
        let (a, b) =
            self.data[start..start + 2 * self.n_coefs].split_at(self.n_coefs);
        (b, a)
    }

    /// Copies `b` and `a` into set `set` and normalizes them.
    ///
    /// On error the stored coefficients are left untouched.
    pub fn store(
        &mut self,
        set: usize,
        b: &[T],
        a: &[T],
    ) -> Result<(), FilterError> {
        if set >= self.n_sets {
            return Err(FilterError::InvalidChannelIndex {
                index: set,
                n_signals: self.n_sets,
            });
        }
        self.check(b, a)?;

        let n = self.n_coefs;
        let start = 2 * n * set;
        let (a_slot, b_slot) = self.data[start..start + 2 * n].split_at_mut(n);
        a_slot.copy_from_slice(a);
        b_slot.copy_from_slice(b);
        normalize(n, b_slot, a_slot)
    }

    /// Normalizes `b` and `a` once and copies the result into every set.
    pub fn store_all(&mut self, b: &[T], a: &[T]) -> Result<(), FilterError> {
        self.store(0, b, a)?;
        let stride = 2 * self.n_coefs;
        for set in 1..self.n_sets {
            self.data.copy_within(0..stride, set * stride);
        }
        Ok(())
    }

    fn check(&self, b: &[T], a: &[T]) -> Result<(), FilterError> {
        for len in &[b.len(), a.len()] {
            if *len != self.n_coefs {
                warn!(
                    "rejecting {} coefficients for a filter of {}",
                    len, self.n_coefs
                );
                return Err(FilterError::CoefficientCountMismatch {
                    expected: self.n_coefs,
                    found: *len,
                });
            }
        }
        if a[0] == T::zero() {
            warn!("rejecting coefficients with a[0] == 0");
            return Err(FilterError::InvalidCoefficients);
        }
        Ok(())
    }
}
