//! Reference data for checking filters against known-good outputs.
//!
//! A reference data set holds one coefficient set, an input sequence and
//! (optionally) the outputs some trusted implementation produced for it.
//! Data sets are stored either as a compact binary file (see [`binary`]) or
//! as comma separated text (see [`text`]).

use std::error;
use std::fmt;
use std::io;

use log::debug;

use crate::filter::multi::PerSignalFilter;
use crate::filter::single::SingleFilter;
use crate::filter::FilterError;
use crate::util::sample::Sample;

pub mod binary;
pub mod text;

#[derive(Debug)]
pub enum ReferenceError {
    Io(io::Error),
    /// The file holds samples of a different width than requested.
    TypeMismatch { expected: u8, found: u8 },
    /// The file contents do not follow the expected layout.
    Format(String),
    Filter(FilterError),
}

impl fmt::Display for ReferenceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReferenceError::Io(e) => write!(f, "Reference error: {}", e),
            ReferenceError::TypeMismatch { expected, found } => write!(
                f,
                "Reference error: datatype mismatch, expected '{}' and file is '{}'",
                *expected as char, *found as char
            ),
            ReferenceError::Format(msg) => {
                write!(f, "Reference error: bad file format: {}", msg)
            }
            ReferenceError::Filter(e) => write!(f, "Reference error: {}", e),
        }
    }
}

impl error::Error for ReferenceError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ReferenceError::Io(e) => Some(e),
            ReferenceError::Filter(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ReferenceError {
    fn from(e: io::Error) -> Self {
        ReferenceError::Io(e)
    }
}

impl From<FilterError> for ReferenceError {
    fn from(e: FilterError) -> Self {
        ReferenceError::Filter(e)
    }
}

/// The first point where two output sequences disagree.
#[derive(Clone, Debug, PartialEq)]
pub enum Mismatch<T> {
    Length { expected: usize, actual: usize },
    Value { index: usize, expected: T, actual: T },
}

/// Compares two output sequences sample by sample.
///
/// Samples match when they differ by no more than `tolerance`; a tolerance
/// of zero asks for bit-exact equality.
///
/// # Examples
///
/// ```
/// use iir_rs::reference::{compare, Mismatch};
///
/// assert_eq!(compare(&[1.0_f64, 2.0], &[1.0, 2.05], 0.1), Ok(()));
/// assert_eq!(
///     compare(&[1.0_f64, 2.0], &[1.0, 2.5], 0.1),
///     Err(Mismatch::Value { index: 1, expected: 2.5, actual: 2.0 })
/// );
/// ```
pub fn compare<T: Sample>(
    actual: &[T],
    expected: &[T],
    tolerance: T,
) -> Result<(), Mismatch<T>> {
    if actual.len() != expected.len() {
        return Err(Mismatch::Length {
            expected: expected.len(),
            actual: actual.len(),
        });
    }
    match actual
        .iter()
        .zip(expected.iter())
        .position(|(x, y)| (*x - *y).abs() > tolerance || x.is_nan() != y.is_nan())
    {
        Some(index) => Err(Mismatch::Value {
            index,
            expected: expected[index],
            actual: actual[index],
        }),
        None => Ok(()),
    }
}

/// One coefficient set with an input sequence and its expected outputs.
#[derive(Clone, Debug, PartialEq)]
pub struct ReferenceData<T> {
    pub a: Vec<T>,
    pub b: Vec<T>,
    pub inputs: Vec<T>,
    pub outputs: Option<Vec<T>>,
}

impl<T: Sample> ReferenceData<T> {
    pub fn n_coefs(&self) -> usize {
        self.a.len()
    }

    pub fn n_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Runs the inputs through a fresh [`SingleFilter`].
    pub fn run_single(&self) -> Result<Vec<T>, ReferenceError> {
        let mut filter = SingleFilter::new(self.n_coefs() as isize, &self.b, &self.a)?;
        debug!(
            "running {} {} inputs through a single filter",
            self.n_inputs(),
            T::TYPE_NAME
        );
        Ok(filter.add_inputs(&self.inputs))
    }

    /// Runs the inputs through channel 0 of a fresh [`PerSignalFilter`] with
    /// `n_signals` channels, every channel fed the same input.
    pub fn run_multi(&self, n_signals: usize) -> Result<Vec<T>, ReferenceError> {
        let mut filter = PerSignalFilter::new(
            self.n_coefs() as isize,
            n_signals as isize,
            Some(&self.b[..]),
            Some(&self.a[..]),
        )?;
        let mut frame = vec![T::zero(); n_signals];
        let mut outputs = Vec::with_capacity(self.n_inputs());
        for x in &self.inputs {
            for v in frame.iter_mut() {
                *v = *x;
            }
            outputs.push(filter.add_input(&frame)?[0]);
        }
        Ok(outputs)
    }

    /// Compares `actual` against the stored outputs using the width's
    /// default tolerance.
    pub fn check(&self, actual: &[T]) -> Result<(), ReferenceError> {
        let expected = self.outputs.as_ref().ok_or_else(|| {
            ReferenceError::Format("reference holds no outputs".to_string())
        })?;
        compare(actual, expected, T::TOLERANCE).map_err(|m| {
            ReferenceError::Format(format!("outputs differ: {:?}", m))
        })
    }

    fn validate(&self) -> Result<(), ReferenceError> {
        if self.a.len() != self.b.len() {
            return Err(ReferenceError::Format(format!(
                "{} a coefficients but {} b coefficients",
                self.a.len(),
                self.b.len()
            )));
        }
        if let Some(outputs) = &self.outputs {
            if outputs.len() != self.inputs.len() {
                return Err(ReferenceError::Format(format!(
                    "{} inputs but {} outputs",
                    self.inputs.len(),
                    outputs.len()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::reference::*;

    fn lowpass() -> ReferenceData<f64> {
        ReferenceData {
            a: vec![1.0, -1.1430, 0.4128],
            b: vec![0.0675, 0.1349, 0.0675],
            inputs: (0..300).map(|x| (x as f64 * 0.075).sin() * 1500.0).collect(),
            outputs: None,
        }
    }

    #[test]
    fn test_compare() {
        assert_eq!(
            compare(&[1.0_f32], &[1.0, 2.0], 0.0),
            Err(Mismatch::Length {
                expected: 2,
                actual: 1
            })
        );
        assert_eq!(compare(&[1.0_f32, 2.0], &[1.0, 2.0], 0.0), Ok(()));
        assert!(compare(&[f64::NAN], &[1.0], 1.0).is_err());
    }

    #[test]
    fn test_single_matches_multi() {
        let data = lowpass();
        let single = data.run_single().unwrap();
        let multi = data.run_multi(5).unwrap();
        assert_eq!(single, multi);
    }

    #[test]
    fn test_check() {
        let mut data = lowpass();
        assert!(data.check(&[]).is_err());

        let outputs = data.run_single().unwrap();
        data.outputs = Some(outputs.clone());
        data.check(&outputs).unwrap();

        let mut off = outputs;
        off[10] += 1e-3;
        assert!(data.check(&off).is_err());
    }

    #[test]
    fn test_validate() {
        let mut data = lowpass();
        data.validate().unwrap();
        data.outputs = Some(vec![0.0; 3]);
        assert!(data.validate().is_err());
        data.outputs = None;
        data.b.pop();
        assert!(data.validate().is_err());
    }
}
