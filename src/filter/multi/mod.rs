//! Multiple input signal IIR filters.
//!
//! Both filters here process `n_signals` independent channels per call, each
//! channel with its own delay line.  They differ only in where a channel's
//! coefficients come from:
//!
//! * [`SharedFilter`] - every channel uses the same coefficient set.
//! * [`PerSignalFilter`] - every channel owns a coefficient set, which can be
//!   replaced on its own.
//!
//! Channel `k` of either filter produces bit-identical output to a
//! [`SingleFilter`] with channel `k`'s coefficients fed channel `k`'s input.
//!
//! [`SingleFilter`]: crate::filter::single::SingleFilter

use std::marker::PhantomData;

use log::{debug, warn};
use num_traits::Float;
use rayon::prelude::*;

use crate::filter::coefs::CoefBank;
use crate::filter::delay::DelayLines;
use crate::filter::iir::iir;
use crate::filter::{alloc_zeroed, check_n_coefs, check_n_signals, FilterError};

pub mod per_signal;
pub mod shared;

pub use self::per_signal::PerSignalFilter;
pub use self::shared::SharedFilter;

/// Where each channel's coefficients live.
pub(crate) trait CoefLayout {
    /// True when every channel owns a coefficient set.
    const PER_SIGNAL: bool;
    const NAME: &'static str;

    #[inline]
    fn n_sets(n_signals: usize) -> usize {
        if Self::PER_SIGNAL {
            n_signals
        } else {
            1
        }
    }

    #[inline]
    fn set_for(signal: usize) -> usize {
        if Self::PER_SIGNAL {
            signal
        } else {
            0
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Shared;

#[derive(Clone, Debug)]
pub(crate) struct PerSignal;

impl CoefLayout for Shared {
    const PER_SIGNAL: bool = false;
    const NAME: &'static str = "shared";
}

impl CoefLayout for PerSignal {
    const PER_SIGNAL: bool = true;
    const NAME: &'static str = "per-signal";
}

/// State and recursion common to both multi-stream filters.
#[derive(Clone, Debug)]
pub(crate) struct MultiCore<T, L> {
    n_signals: usize,
    coefs: CoefBank<T>,
    state: DelayLines<T>,
    output: Vec<T>,
    layout: PhantomData<L>,
}

impl<T, L> MultiCore<T, L>
where
    T: Float,
    L: CoefLayout,
{
    pub fn new(
        n_coefs: isize,
        n_signals: isize,
        b: Option<&[T]>,
        a: Option<&[T]>,
    ) -> Result<Self, FilterError> {
        let (n_coefs, n_signals) = check_n_coefs(n_coefs)
            .and_then(|n| Ok((n, check_n_signals(n_signals)?)))
            .map_err(|e| {
                warn!("unable to create {} filter: {}", L::NAME, e);
                e
            })?;

        let state = DelayLines::zeroed(n_coefs, n_signals)?;
        let coefs = CoefBank::zeroed(n_coefs, L::n_sets(n_signals))?;
        let output = alloc_zeroed(n_signals)?;

        let mut core = MultiCore {
            n_signals,
            coefs,
            state,
            output,
            layout: PhantomData,
        };
        if let (Some(b), Some(a)) = (b, a) {
            core.set_coefs_all(b, a)?;
        }
        debug!(
            "created {} filter with {} coefficients and {} signals",
            L::NAME,
            n_coefs,
            n_signals
        );
        Ok(core)
    }

    pub fn set_coefs_all(&mut self, b: &[T], a: &[T]) -> Result<(), FilterError> {
        self.coefs.store_all(b, a)
    }

    pub fn set_coefs_one(
        &mut self,
        b: &[T],
        a: &[T],
        signal: usize,
    ) -> Result<(), FilterError> {
        self.check_signal(signal)?;
        self.coefs.store(L::set_for(signal), b, a)
    }

    #[inline]
    pub fn add_input(&mut self, input: &[T]) -> Result<&[T], FilterError> {
        self.check_input(input)?;
        let coefs = &self.coefs;
        for (k, ((z, y), x)) in self
            .state
            .segments_mut()
            .zip(self.output.iter_mut())
            .zip(input.iter())
            .enumerate()
        {
            let (b, a) = coefs.pair(L::set_for(k));
            *y = iir(*x, b, a, z);
        }
        Ok(&self.output)
    }

    pub fn add_input_par(&mut self, input: &[T]) -> Result<&[T], FilterError>
    where
        T: Send + Sync,
    {
        self.check_input(input)?;
        let coefs = &self.coefs;
        let len = self.state.len();
        self.state
            .as_mut_slice()
            .par_chunks_exact_mut(len)
            .zip(self.output.par_iter_mut())
            .zip(input.par_iter())
            .enumerate()
            .for_each(|(k, ((z, y), x))| {
                let (b, a) = coefs.pair(L::set_for(k));
                *y = iir(*x, b, a, z);
            });
        Ok(&self.output)
    }

    pub fn add_input_into(
        &mut self,
        input: &[T],
        output: &mut [T],
    ) -> Result<(), FilterError> {
        if output.len() != self.n_signals {
            return Err(FilterError::InputLengthMismatch {
                expected: self.n_signals,
                found: output.len(),
            });
        }
        output.copy_from_slice(self.add_input(input)?);
        Ok(())
    }

    pub fn last_output(&self) -> &[T] {
        &self.output
    }

    pub fn last_output_copy(&self) -> Vec<T> {
        self.output.clone()
    }

    pub fn reset(&mut self) {
        self.state.reset();
        for y in self.output.iter_mut() {
            *y = T::zero();
        }
    }

    pub fn n_signals(&self) -> usize {
        self.n_signals
    }

    pub fn n_coefs(&self) -> usize {
        self.coefs.n_coefs()
    }

    pub fn coefs(&self) -> &CoefBank<T> {
        &self.coefs
    }

    pub fn delay_line(&self, signal: usize) -> Result<&[T], FilterError> {
        self.check_signal(signal)?;
        Ok(self.state.segment(signal))
    }

    pub fn check_signal(&self, signal: usize) -> Result<(), FilterError> {
        if signal >= self.n_signals {
            warn!(
                "signal index {} out of range for {} filter of {} signals",
                signal,
                L::NAME,
                self.n_signals
            );
            return Err(FilterError::InvalidChannelIndex {
                index: signal,
                n_signals: self.n_signals,
            });
        }
        Ok(())
    }

    #[inline]
    fn check_input(&self, input: &[T]) -> Result<(), FilterError> {
        if input.len() != self.n_signals {
            return Err(FilterError::InputLengthMismatch {
                expected: self.n_signals,
                found: input.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::filter::multi::*;

    #[test]
    fn test_layout_sets() {
        assert_eq!(Shared::n_sets(5), 1);
        assert_eq!(Shared::set_for(4), 0);
        assert_eq!(PerSignal::n_sets(5), 5);
        assert_eq!(PerSignal::set_for(4), 4);
    }

    #[test]
    fn test_core_creation_failures() {
        for n in &[-10, 0, 1] {
            let res = MultiCore::<f32, Shared>::new(*n, 3, None, None);
            assert_eq!(res.unwrap_err(), FilterError::InvalidOrder(*n));
        }
        for n in &[-10, 0] {
            let res = MultiCore::<f32, PerSignal>::new(4, *n, None, None);
            assert_eq!(res.unwrap_err(), FilterError::InvalidChannelCount(*n));
        }
    }

    #[test]
    fn test_core_without_coefs() {
        // Creation without coefficients leaves them zeroed.
        let mut core = MultiCore::<f64, PerSignal>::new(3, 2, None, None).unwrap();
        assert_eq!(core.coefs().a(1), &[0.0, 0.0, 0.0]);
        assert_eq!(core.add_input(&[1.0, 2.0]).unwrap(), &[0.0, 0.0]);
    }

    #[test]
    fn test_core_par_matches_serial() {
        let b = [0.2_f64, 0.4, 0.2];
        let a = [1.0, -0.3, 0.1];
        let mut serial =
            MultiCore::<f64, PerSignal>::new(3, 8, Some(&b[..]), Some(&a[..])).unwrap();
        serial.set_coefs_one(&[1.0, 0.0, 0.5], &[2.0, 0.5, 0.0], 3).unwrap();
        let mut par = serial.clone();

        for i in 0..100 {
            let x: Vec<f64> = (0..8).map(|k| ((i * k) % 13) as f64 - 6.0).collect();
            let y_serial = serial.add_input(&x).unwrap().to_vec();
            let y_par = par.add_input_par(&x).unwrap();
            assert_eq!(&y_serial[..], y_par);
        }
    }

    #[test]
    fn test_core_input_length() {
        let mut core = MultiCore::<f32, Shared>::new(
            2,
            3,
            Some(&[1.0, 0.0][..]),
            Some(&[1.0, 0.0][..]),
        )
        .unwrap();
        assert_eq!(
            core.add_input(&[1.0, 2.0]).unwrap_err(),
            FilterError::InputLengthMismatch {
                expected: 3,
                found: 2
            }
        );
        let mut out = [0.0; 2];
        assert!(core.add_input_into(&[1.0, 2.0, 3.0], &mut out).is_err());
        let mut out = [0.0; 3];
        core.add_input_into(&[1.0, 2.0, 3.0], &mut out).unwrap();
        assert_eq!(out, [1.0, 2.0, 3.0]);
    }
}
