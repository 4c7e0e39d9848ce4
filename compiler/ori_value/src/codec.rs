//! Binary segment encoders.
//!
//! Generated code builds a bit array by encoding each segment here and
//! concatenating the segments with [`crate::to_bit_array`]. Decoding lives on
//! [`crate::BitArray`].
//!
//! # Layout contract
//!
//! For a fixed `(size_bits, is_big_endian)`, the bytes written by
//! [`sized_int`]/[`sized_float`] are bit-exact and read back through
//! `BitArray::int_from_slice`/`BitArray::float_from_slice` to the original
//! value (modulo truncation to the target width). Only 32- and 64-bit
//! widths exist; anything else is a fatal [`RuntimeError::UnsupportedWidth`].
//!
//! # Endianness
//!
//! Requests matching [`HOST_IS_BIG_ENDIAN`] are written host-native; the
//! others are byte-swapped first. The host order is fixed at compile time
//! from the target triple.

use crate::error::{fatal, RuntimeError};

/// Byte order of the compilation target.
pub const HOST_IS_BIG_ENDIAN: bool = cfg!(target_endian = "big");

/// Encode a signed integer into `size_bits / 8` bytes, truncating to the
/// target width. Fatal for widths other than 32 and 64.
pub fn sized_int(value: i64, size_bits: u32, is_big_endian: bool) -> Vec<u8> {
    match try_sized_int(value, size_bits, is_big_endian) {
        Ok(bytes) => bytes,
        Err(error) => fatal(error),
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "sized integers keep the low bits of the two's complement pattern"
)]
pub fn try_sized_int(value: i64, size_bits: u32, is_big_endian: bool) -> Result<Vec<u8>, RuntimeError> {
    match size_bits {
        32 => Ok(put_u32(value as u32, is_big_endian).to_vec()),
        64 => Ok(put_u64(value as u64, is_big_endian).to_vec()),
        _ => Err(unsupported_width(u64::from(size_bits))),
    }
}

/// Encode a float as IEEE-754 binary32 or binary64. Fatal for other widths.
pub fn sized_float(value: f64, size_bits: u32, is_big_endian: bool) -> Vec<u8> {
    match try_sized_float(value, size_bits, is_big_endian) {
        Ok(bytes) => bytes,
        Err(error) => fatal(error),
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "binary32 segments round to the nearest f32"
)]
pub fn try_sized_float(
    value: f64,
    size_bits: u32,
    is_big_endian: bool,
) -> Result<Vec<u8>, RuntimeError> {
    match size_bits {
        32 => Ok(put_u32((value as f32).to_bits(), is_big_endian).to_vec()),
        64 => Ok(put_u64(value.to_bits(), is_big_endian).to_vec()),
        _ => Err(unsupported_width(u64::from(size_bits))),
    }
}

/// UTF-8 bytes of a string. No terminator, no length prefix.
pub fn string_bits(s: &str) -> Vec<u8> {
    s.as_bytes().to_vec()
}

/// UTF-8 bytes of a single code point (1 to 4 bytes).
pub fn codepoint_bits(codepoint: char) -> Vec<u8> {
    let mut buf = [0; 4];
    codepoint.encode_utf8(&mut buf).as_bytes().to_vec()
}

// ── Host-order byte helpers (shared with the decoders) ───────────────────

pub(crate) fn put_u32(bits: u32, is_big_endian: bool) -> [u8; 4] {
    if is_big_endian == HOST_IS_BIG_ENDIAN {
        bits.to_ne_bytes()
    } else {
        bits.swap_bytes().to_ne_bytes()
    }
}

pub(crate) fn put_u64(bits: u64, is_big_endian: bool) -> [u8; 8] {
    if is_big_endian == HOST_IS_BIG_ENDIAN {
        bits.to_ne_bytes()
    } else {
        bits.swap_bytes().to_ne_bytes()
    }
}

pub(crate) fn get_u32(bytes: [u8; 4], is_big_endian: bool) -> u32 {
    let native = u32::from_ne_bytes(bytes);
    if is_big_endian == HOST_IS_BIG_ENDIAN {
        native
    } else {
        native.swap_bytes()
    }
}

pub(crate) fn get_u64(bytes: [u8; 8], is_big_endian: bool) -> u64 {
    let native = u64::from_ne_bytes(bytes);
    if is_big_endian == HOST_IS_BIG_ENDIAN {
        native
    } else {
        native.swap_bytes()
    }
}

pub(crate) fn unsupported_width(bits: u64) -> RuntimeError {
    tracing::debug!(bits, "rejected sized value width");
    RuntimeError::UnsupportedWidth { bits }
}

#[cfg(test)]
mod tests;
