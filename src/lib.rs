//! Byte-order-aware wrappers over [`std::io`] streams.
//!
//! [`EndianReader`] and [`EndianWriter`] wrap any [`Read`](std::io::Read) or
//! [`Write`](std::io::Write) implementation and add read/write operations for
//! fixed-width scalars (8/16/32/64-bit integers, IEEE-754 floats, booleans,
//! UTF-16 code units) and homogeneous arrays of them, under a selectable
//! [`ByteOrder`]. The order defaults to big-endian and may be switched at any
//! time; the switch takes effect on the next operation.
//!
//! # Padding policy
//!
//! A bulk array read that reaches end of stream in the middle of an element
//! treats the unread trailing bytes of that element as zero and keeps going,
//! so a truncated stream still populates the full requested window (the tail
//! decodes to zero, `false` or `0.0`). Single-value reads do not pad: a short
//! read of one scalar is an error. Writes never pad; a short write by the
//! underlying stream is always an error.

#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(missing_docs)]

mod error;
mod order;
mod reader;
mod writer;


pub use error::{Error, Result};
pub use order::ByteOrder;
pub use reader::EndianReader;
pub use writer::EndianWriter;
