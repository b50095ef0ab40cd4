//! Comma separated text reference files.
//!
//! ```text
//! <n_coefs>, <n_inputs>
//! <a_0>, ..., <a_n_coefs-1>
//! <b_0>, ..., <b_n_coefs-1>
//! <input_0>, ..., <input_n_inputs-1>
//! <output_0>, ..., <output_n_inputs-1>     (optional)
//! ```

use std::io::BufRead;
use std::str::FromStr;

use log::debug;

use crate::reference::{ReferenceData, ReferenceError};
use crate::util::sample::Sample;

fn parse_line<T: FromStr>(
    line: &str,
    expected: usize,
    name: &str,
) -> Result<Vec<T>, ReferenceError> {
    let values = line
        .split(',')
        .map(|field| {
            field.trim().parse::<T>().map_err(|_| {
                ReferenceError::Format(format!(
                    "bad value '{}' reading {}",
                    field.trim(),
                    name
                ))
            })
        })
        .collect::<Result<Vec<T>, _>>()?;
    if values.len() != expected {
        return Err(ReferenceError::Format(format!(
            "expected {} values reading {}, found {}",
            expected,
            name,
            values.len()
        )));
    }
    Ok(values)
}

fn section<T: FromStr>(
    lines: &[String],
    index: usize,
    len: usize,
    name: &str,
) -> Result<Vec<T>, ReferenceError> {
    let line = lines
        .get(index)
        .ok_or_else(|| ReferenceError::Format(format!("missing {}", name)))?;
    parse_line(line, len, name)
}

/// Reads a text reference data set.  The outputs line may be missing.
///
/// # Examples
///
/// ```
/// use iir_rs::reference::text::read_text;
///
/// let file = "2, 3\n1.0, -0.5\n0.5, 0.0\n1.0, 1.0, 1.0\n";
/// let data = read_text::<f64, _>(file.as_bytes()).unwrap();
///
/// assert_eq!(data.a, vec![1.0, -0.5]);
/// assert_eq!(data.inputs, vec![1.0, 1.0, 1.0]);
/// assert_eq!(data.outputs, None);
/// ```
pub fn read_text<T: Sample, R: BufRead>(
    reader: R,
) -> Result<ReferenceData<T>, ReferenceError> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }

    let header = lines
        .first()
        .ok_or_else(|| ReferenceError::Format("empty file".to_string()))?;
    let counts: Vec<usize> = parse_line(header, 2, "n_coefs, n_inputs")?;
    let (n_coefs, n_inputs) = (counts[0], counts[1]);
    debug!("n_coefs {}, n_inputs {}", n_coefs, n_inputs);

    let a = section(&lines, 1, n_coefs, "a_coefs")?;
    let b = section(&lines, 2, n_coefs, "b_coefs")?;
    let inputs = section(&lines, 3, n_inputs, "inputs")?;
    let outputs = match lines.len() {
        0..=4 => None,
        _ => Some(section(&lines, 4, n_inputs, "outputs")?),
    };

    let data = ReferenceData {
        a,
        b,
        inputs,
        outputs,
    };
    data.validate()?;
    Ok(data)
}

/// Renders `values` as a MATLAB vector literal named `name`.
///
/// Values are printed with the width's number of significant decimals and
/// wrapped every ten values.
///
/// # Examples
///
/// ```
/// use iir_rs::reference::text::dump_matlab_vector;
///
/// assert_eq!(
///     dump_matlab_vector("x", &[1.0_f32, 0.5]),
///     "x=single([...\n1.00000, 0.50000...\n])\n"
/// );
/// ```
pub fn dump_matlab_vector<T: Sample>(name: &str, values: &[T]) -> String {
    let (open, close) = if T::TYPE_TAG == b'f' {
        ("single([", "])")
    } else {
        ("[", "]")
    };
    let mut out = format!("{}={}...\n", name, open);
    for (i, x) in values.iter().enumerate() {
        out.push_str(&format!("{:.*}", T::DIGITS, x));
        if i + 1 < values.len() {
            out.push_str(", ");
            if i % 10 == 9 {
                out.push_str("...\n");
            }
        }
    }
    out.push_str("...\n");
    out.push_str(close);
    out.push('\n');
    out
}
