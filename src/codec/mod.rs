//! Numeric attribute codec for the DICOM wire format
//!
//! DICOM encodes fixed-width numeric attribute values (US, SS, UL, SL, FL...)
//! as raw byte sequences whose layout depends on the transfer syntax's byte
//! order. This module provides lossless, byte-order-aware conversion between
//! 32-bit integer/float values and byte sequences, including the zero-pad and
//! offset rules applied to undersized or oversized inputs.
//!
//! All operations are pure and stateless; they are safe to call concurrently
//! without coordination.

pub mod byte_order;
pub mod numeric;

pub use byte_order::ByteOrder;
pub use numeric::{
    bytes_to_float, bytes_to_int, float_to_bytes, int_to_bytes, resize_numeric,
};
