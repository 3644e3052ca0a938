//! Byte-order-aware numeric value conversions
//!
//! Converts between 32-bit numeric attribute values and their DICOM byte
//! representations. Undersized inputs are zero-padded according to the byte
//! order so the numeric magnitude is preserved; oversized inputs drop the
//! insignificant padding end at read time.
//!
//! # Examples
//!
//! ```
//! use dicomweb_rust::codec::{bytes_to_int, int_to_bytes, ByteOrder};
//!
//! let bytes = int_to_bytes(1, ByteOrder::LittleEndian);
//! assert_eq!(bytes, vec![0x01, 0x00, 0x00, 0x00]);
//! assert_eq!(bytes_to_int(&bytes, ByteOrder::LittleEndian), 1);
//! ```

use crate::codec::ByteOrder;
use bytes::{Buf, BufMut, BytesMut};

/// Width in bytes of the 32-bit numeric value representations
const NUMERIC_WIDTH: usize = 4;

/// Interpret a byte sequence as a two's-complement 32-bit integer
///
/// Inputs shorter than 4 bytes are zero-padded per [`resize_numeric`] before
/// reading. For inputs longer than 4 bytes, big-endian reads the *last* 4
/// bytes (leading bytes are insignificant padding) and little-endian reads
/// the *first* 4 bytes (trailing bytes are dropped).
pub fn bytes_to_int(bytes: &[u8], order: ByteOrder) -> i32 {
    let aligned = align_for_read(bytes, order);
    let mut buf = &aligned[..];
    match order {
        ByteOrder::LittleEndian => buf.get_i32_le(),
        ByteOrder::BigEndian => buf.get_i32(),
    }
}

/// Interpret a byte sequence as an IEEE-754 single-precision float
///
/// Applies the same resize and offset rules as [`bytes_to_int`].
pub fn bytes_to_float(bytes: &[u8], order: ByteOrder) -> f32 {
    let aligned = align_for_read(bytes, order);
    let mut buf = &aligned[..];
    match order {
        ByteOrder::LittleEndian => buf.get_f32_le(),
        ByteOrder::BigEndian => buf.get_f32(),
    }
}

/// Encode a 32-bit integer as exactly 4 bytes under the given byte order
pub fn int_to_bytes(value: i32, order: ByteOrder) -> Vec<u8> {
    let mut buf = BytesMut::with_capacity(NUMERIC_WIDTH);
    match order {
        ByteOrder::LittleEndian => buf.put_i32_le(value),
        ByteOrder::BigEndian => buf.put_i32(value),
    }
    buf.to_vec()
}

/// Encode a single-precision float as exactly 4 bytes under the given byte order
pub fn float_to_bytes(value: f32, order: ByteOrder) -> Vec<u8> {
    let mut buf = BytesMut::with_capacity(NUMERIC_WIDTH);
    match order {
        ByteOrder::LittleEndian => buf.put_f32_le(value),
        ByteOrder::BigEndian => buf.put_f32(value),
    }
    buf.to_vec()
}

/// Resize a numeric byte sequence to at least `new_length` bytes
///
/// If the input already has `new_length` bytes or more it is returned
/// unchanged; truncation never happens here, only at read time. Otherwise a
/// zero-filled buffer of `new_length` bytes is allocated and the input is
/// copied in at offset 0 for little-endian (missing high-order bytes become
/// the trailing zero pad) or right-aligned for big-endian (missing high-order
/// bytes become the leading zero pad), preserving the numeric magnitude.
///
/// # Examples
///
/// ```
/// use dicomweb_rust::codec::{resize_numeric, ByteOrder};
///
/// assert_eq!(resize_numeric(&[0x01], ByteOrder::LittleEndian, 4), vec![1, 0, 0, 0]);
/// assert_eq!(resize_numeric(&[0x01], ByteOrder::BigEndian, 4), vec![0, 0, 0, 1]);
/// ```
pub fn resize_numeric(bytes: &[u8], order: ByteOrder, new_length: usize) -> Vec<u8> {
    if bytes.len() >= new_length {
        return bytes.to_vec();
    }

    let mut resized = vec![0u8; new_length];
    match order {
        ByteOrder::LittleEndian => resized[..bytes.len()].copy_from_slice(bytes),
        ByteOrder::BigEndian => resized[new_length - bytes.len()..].copy_from_slice(bytes),
    }
    resized
}

/// Produce the exact 4-byte window a numeric read operates on
fn align_for_read(bytes: &[u8], order: ByteOrder) -> [u8; NUMERIC_WIDTH] {
    let resized;
    let bytes = if bytes.len() < NUMERIC_WIDTH {
        resized = resize_numeric(bytes, order, NUMERIC_WIDTH);
        &resized[..]
    } else {
        bytes
    };

    // Oversized input: big-endian significance lives in the trailing bytes
    let offset = match order {
        ByteOrder::BigEndian if bytes.len() > NUMERIC_WIDTH => bytes.len() - NUMERIC_WIDTH,
        _ => 0,
    };

    let mut window = [0u8; NUMERIC_WIDTH];
    window.copy_from_slice(&bytes[offset..offset + NUMERIC_WIDTH]);
    window
}
