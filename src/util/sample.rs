//! Sample types the filters are built with.
//!
//! The filters themselves only need `num_traits::Float`.  The tooling around
//! them (reference files, comparisons) also needs to know how a width is
//! tagged and stored on disk and how close two outputs must be to be
//! considered equal, which is what [`Sample`] provides.

use std::fmt::{Debug, Display};
use std::io::{self, Read, Write};
use std::str::FromStr;

use byteorder::{NativeEndian, ReadBytesExt, WriteBytesExt};
use num_traits::Float;

pub trait Sample:
    Float + FromStr + Debug + Display + Send + Sync + 'static
{
    /// One-byte tag identifying the width in reference files.
    const TYPE_TAG: u8;
    /// Name of the width, used in file names and messages.
    const TYPE_NAME: &'static str;
    /// Largest difference tolerated when comparing against reference data.
    const TOLERANCE: Self;
    /// Number of decimals worth printing.
    const DIGITS: usize;

    fn read_sample<R: Read>(reader: &mut R) -> io::Result<Self>;

    fn write_sample<W: Write>(self, writer: &mut W) -> io::Result<()>;
}

impl Sample for f32 {
    const TYPE_TAG: u8 = b'f';
    const TYPE_NAME: &'static str = "float";
    const TOLERANCE: f32 = 1e-5;
    const DIGITS: usize = 5;

    fn read_sample<R: Read>(reader: &mut R) -> io::Result<Self> {
        reader.read_f32::<NativeEndian>()
    }

    fn write_sample<W: Write>(self, writer: &mut W) -> io::Result<()> {
        writer.write_f32::<NativeEndian>(self)
    }
}

impl Sample for f64 {
    const TYPE_TAG: u8 = b'd';
    const TYPE_NAME: &'static str = "double";
    const TOLERANCE: f64 = 1e-7;
    const DIGITS: usize = 7;

    fn read_sample<R: Read>(reader: &mut R) -> io::Result<Self> {
        reader.read_f64::<NativeEndian>()
    }

    fn write_sample<W: Write>(self, writer: &mut W) -> io::Result<()> {
        writer.write_f64::<NativeEndian>(self)
    }
}
