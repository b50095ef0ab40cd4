//! Binary reference files.
//!
//! Every value is stored in host byte-order:
//!
//! ```text
//! i32          n_coefs
//! i32          n_inputs
//! u8           type tag ('f' for f32, 'd' for f64)
//! T[n_coefs]   a coefficients
//! T[n_coefs]   b coefficients
//! T[n_inputs]  inputs
//! T[n_inputs]  outputs
//! ```

use std::convert::TryFrom;
use std::io::{Read, Write};

use byteorder::{NativeEndian, ReadBytesExt, WriteBytesExt};
use log::debug;

use crate::reference::{ReferenceData, ReferenceError};
use crate::util::sample::Sample;

/// Name of the binary file for `stem`, tagged with the sample width.
///
/// # Examples
///
/// ```
/// use iir_rs::reference::binary::binary_file_name;
///
/// assert_eq!(binary_file_name::<f32>("lowpass_out"), "lowpass_out_float.bin");
/// assert_eq!(binary_file_name::<f64>("lowpass_out"), "lowpass_out_double.bin");
/// ```
pub fn binary_file_name<T: Sample>(stem: &str) -> String {
    format!("{}_{}.bin", stem, T::TYPE_NAME)
}

fn read_vec<T: Sample, R: Read>(
    reader: &mut R,
    len: usize,
) -> Result<Vec<T>, ReferenceError> {
    let mut values = Vec::new();
    for _ in 0..len {
        values.push(T::read_sample(reader)?);
    }
    Ok(values)
}

fn header_count(value: i32, name: &str) -> Result<usize, ReferenceError> {
    usize::try_from(value).map_err(|_| {
        ReferenceError::Format(format!("negative {} ({})", name, value))
    })
}

/// Reads a binary reference data set.
///
/// The file must hold samples of width `T`; any other type tag is a
/// `TypeMismatch`.
pub fn read_binary<T: Sample, R: Read>(
    reader: &mut R,
) -> Result<ReferenceData<T>, ReferenceError> {
    let n_coefs = header_count(reader.read_i32::<NativeEndian>()?, "n_coefs")?;
    let n_inputs =
        header_count(reader.read_i32::<NativeEndian>()?, "n_inputs")?;
    let tag = reader.read_u8()?;
    if tag != T::TYPE_TAG {
        return Err(ReferenceError::TypeMismatch {
            expected: T::TYPE_TAG,
            found: tag,
        });
    }
    debug!(
        "n_coefs: {}, n_inputs: {}, dtype: '{}'",
        n_coefs, n_inputs, tag as char
    );

    let a = read_vec(reader, n_coefs)?;
    let b = read_vec(reader, n_coefs)?;
    let inputs = read_vec(reader, n_inputs)?;
    let outputs = read_vec(reader, n_inputs)?;

    let data = ReferenceData {
        a,
        b,
        inputs,
        outputs: Some(outputs),
    };
    data.validate()?;
    Ok(data)
}

/// Writes `data` with `outputs` as its output section.
pub fn write_binary<T: Sample, W: Write>(
    writer: &mut W,
    data: &ReferenceData<T>,
    outputs: &[T],
) -> Result<(), ReferenceError> {
    data.validate()?;
    if outputs.len() != data.n_inputs() {
        return Err(ReferenceError::Format(format!(
            "{} inputs but {} outputs",
            data.n_inputs(),
            outputs.len()
        )));
    }
    let too_big = |name: &str| ReferenceError::Format(format!("{} too large", name));
    let n_coefs = i32::try_from(data.n_coefs()).map_err(|_| too_big("n_coefs"))?;
    let n_inputs =
        i32::try_from(data.n_inputs()).map_err(|_| too_big("n_inputs"))?;

    writer.write_i32::<NativeEndian>(n_coefs)?;
    writer.write_i32::<NativeEndian>(n_inputs)?;
    writer.write_u8(T::TYPE_TAG)?;
    for x in data
        .a
        .iter()
        .chain(data.b.iter())
        .chain(data.inputs.iter())
        .chain(outputs.iter())
    {
        x.write_sample(writer)?;
    }
    Ok(())
}
