//! Per-channel delay lines.
//!
//! Each channel owns a contiguous segment of `n_coefs - 1` state values.
//! Segments start at zero and are only changed by the filter recursion and by
//! [`DelayLines::reset`].

use num_traits::Float;

use crate::filter::{alloc_zeroed, FilterError};

#[derive(Clone, Debug)]
pub struct DelayLines<T> {
    len: usize,
    data: Vec<T>,
}

impl<T> DelayLines<T>
where
    T: Float,
{
    /// Allocates `n_signals` zeroed delay lines for a filter with `n_coefs`
    /// coefficients.
    pub fn zeroed(n_coefs: usize, n_signals: usize) -> Result<Self, FilterError> {
        let len = n_coefs.saturating_sub(1);
        let total = len
            .checked_mul(n_signals)
            .ok_or(FilterError::AllocationFailure)?;
        Ok(DelayLines {
            len,
            data: alloc_zeroed(total)?,
        })
    }

    /// Length of one channel's delay line.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn n_signals(&self) -> usize {
        if self.len == 0 {
            0
        } else {
            self.data.len() / self.len
        }
    }

    #[inline]
    pub fn segment(&self, signal: usize) -> &[T] {
        let start = self.len * signal;
        &self.data[start..start + self.len]
    }

    #[inline]
    pub fn segment_mut(&mut self, signal: usize) -> &mut [T] {
        let start = self.len * signal;
        &mut self.data[start..start + self.len]
    }

    /// Mutable iterator over every channel's segment, in channel order.
    pub fn segments_mut(&mut self) -> std::slice::ChunksExactMut<'_, T> {
        self.data.chunks_exact_mut(self.len)
    }

    /// The whole state buffer, channel-major.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Zeroes every delay line.
    pub fn reset(&mut self) {
        for z in self.data.iter_mut() {
            *z = T::zero();
        }
    }
}

#[cfg(test)]
mod test {
    use crate::filter::delay::*;

    #[test]
    fn test_segments() {
        let mut lines = DelayLines::<f32>::zeroed(4, 3).unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines.n_signals(), 3);

        lines.segment_mut(1).copy_from_slice(&[1.0, 2.0, 3.0]);
        assert_eq!(lines.segment(0), &[0.0, 0.0, 0.0]);
        assert_eq!(lines.segment(1), &[1.0, 2.0, 3.0]);
        assert_eq!(lines.segment(2), &[0.0, 0.0, 0.0]);
        assert_eq!(lines.segments_mut().count(), 3);

        lines.reset();
        assert_eq!(lines.segment(1), &[0.0, 0.0, 0.0]);
    }
}
