//! Immutable byte sequences with slice decoding.
//!
//! A [`BitArray`] is a window `[start, end)` over a shared byte buffer.
//! [`BitArray::slice_after`] and [`BitArray::binary_from_slice`] narrow the
//! window without copying, so pattern matching on a large binary only
//! allocates for the values it decodes.
//!
//! Offsets passed to the decoders are byte offsets relative to the current
//! window. The caller guarantees `start <= end <= len()`; generated code
//! checks sizes before it decodes, so out-of-range offsets panic as a plain
//! indexing bug rather than a runtime fault.

use std::fmt;

use crate::codec::{get_u32, get_u64, unsupported_width};
use crate::error::{fatal, RuntimeError};
use crate::hash::Fnv32;
use crate::shared::Shared;
use crate::value::Structural;

/// Immutable view of bytes.
#[derive(Clone)]
pub struct BitArray {
    bytes: Shared<[u8]>,
    start: usize,
    end: usize,
}

/// Concatenate encoded segments into one bit array.
///
/// Segments are typically the output of the [`crate::codec`] encoders, or
/// another bit array embedded whole.
pub fn to_bit_array<I, S>(segments: I) -> BitArray
where
    I: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    let mut bytes = Vec::new();
    let mut count = 0_usize;
    for segment in segments {
        bytes.extend_from_slice(segment.as_ref());
        count += 1;
    }
    tracing::trace!(segments = count, len = bytes.len(), "assembled bit array");
    BitArray::from(bytes)
}

impl BitArray {
    /// The empty bit array.
    pub fn empty() -> Self {
        BitArray::from(Vec::new())
    }

    /// The bytes inside the window. Used when a bit array is embedded as a
    /// segment of another.
    pub fn buffer(&self) -> &[u8] {
        &self.bytes[self.start..self.end]
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Byte at `index` widened to `i64`, or -1 past the end.
    pub fn byte_at(&self, index: usize) -> i64 {
        self.buffer().get(index).map_or(-1, |&b| i64::from(b))
    }

    /// Decode bytes `[start, end)` as an integer.
    ///
    /// With `is_signed`, the value is two's complement over `8 * (end - start)`
    /// bits. Widths of 8 bytes or more keep only the low 64 bits and are
    /// read as an `i64` bit pattern either way. An empty slice decodes to 0.
    #[allow(
        clippy::cast_possible_wrap,
        reason = "decoded bit patterns are reinterpreted as two's complement"
    )]
    pub fn int_from_slice(&self, start: usize, end: usize, is_big_endian: bool, is_signed: bool) -> i64 {
        let bytes = &self.buffer()[start..end];
        let accumulate = |acc: u64, &b: &u8| (acc << 8) | u64::from(b);
        let raw = if is_big_endian {
            bytes.iter().fold(0, accumulate)
        } else {
            bytes.iter().rev().fold(0, accumulate)
        };

        let width = bytes.len() * 8;
        if !is_signed || width == 0 || width >= 64 {
            return raw as i64;
        }
        let sign_bit = 1_u64 << (width - 1);
        if raw & sign_bit == 0 {
            raw as i64
        } else {
            raw.wrapping_sub(1_u64 << width) as i64
        }
    }

    /// Decode bytes `[start, end)` as an IEEE-754 float.
    ///
    /// Fatal ([`RuntimeError::UnsupportedWidth`]) unless the slice is exactly
    /// 4 or 8 bytes.
    pub fn float_from_slice(&self, start: usize, end: usize, is_big_endian: bool) -> f64 {
        match self.try_float_from_slice(start, end, is_big_endian) {
            Ok(value) => value,
            Err(error) => fatal(error),
        }
    }

    pub fn try_float_from_slice(
        &self,
        start: usize,
        end: usize,
        is_big_endian: bool,
    ) -> Result<f64, RuntimeError> {
        match self.buffer()[start..end] {
            [a, b, c, d] => Ok(f64::from(f32::from_bits(get_u32(
                [a, b, c, d],
                is_big_endian,
            )))),
            [a, b, c, d, e, f, g, h] => Ok(f64::from_bits(get_u64(
                [a, b, c, d, e, f, g, h],
                is_big_endian,
            ))),
            ref other => Err(unsupported_width(other.len() as u64 * 8)),
        }
    }

    /// Everything from `start` to the end of the window. Shares storage.
    #[must_use]
    pub fn slice_after(&self, start: usize) -> BitArray {
        self.window(start, self.len())
    }

    /// Bytes `[start, end)` of the window. Shares storage.
    #[must_use]
    pub fn binary_from_slice(&self, start: usize, end: usize) -> BitArray {
        self.window(start, end)
    }

    fn window(&self, start: usize, end: usize) -> BitArray {
        let len = self.buffer()[start..end].len();
        BitArray {
            bytes: Shared::clone(&self.bytes),
            start: self.start + start,
            end: self.start + start + len,
        }
    }
}

impl Structural for BitArray {
    fn hash32(&self) -> u32 {
        Fnv32::hash_bytes(self.buffer())
    }

    fn equal(&self, other: &Self) -> bool {
        self.buffer() == other.buffer()
    }
}

impl PartialEq for BitArray {
    fn eq(&self, other: &Self) -> bool {
        self.buffer() == other.buffer()
    }
}

impl Eq for BitArray {}

impl AsRef<[u8]> for BitArray {
    fn as_ref(&self) -> &[u8] {
        self.buffer()
    }
}

impl From<Vec<u8>> for BitArray {
    fn from(bytes: Vec<u8>) -> Self {
        let end = bytes.len();
        BitArray {
            bytes: Shared::from(bytes),
            start: 0,
            end,
        }
    }
}

impl From<&[u8]> for BitArray {
    fn from(bytes: &[u8]) -> Self {
        BitArray::from(bytes.to_vec())
    }
}

impl Default for BitArray {
    fn default() -> Self {
        BitArray::empty()
    }
}

impl fmt::Debug for BitArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<<")?;
        for (i, byte) in self.buffer().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{byte}")?;
        }
        write!(f, ">>")
    }
}
