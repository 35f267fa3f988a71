use std::io::{self, Seek, SeekFrom, Write};

use crate::error::{check_window, Error, Result};
use crate::order::ByteOrder;

/// Wraps a [`Write`] stream and encodes fixed-width scalars and arrays of
/// scalars into it under a selectable [`ByteOrder`].
///
/// Every operation pushes exactly the width of the value being written; a
/// short write by the underlying stream surfaces as [`Error::Io`], never as
/// silently truncated output. There is no write-side padding policy.
///
/// The writer keeps no buffer of its own. Raw byte access and flushing are
/// available through the forwarding [`Write`] impl.
pub struct EndianWriter<W> {
    inner: W,
    order: ByteOrder,
}

impl<W> EndianWriter<W> {
    /// Creates a big-endian writer over `inner`.
    pub fn new(inner: W) -> Self {
        Self::with_order(inner, ByteOrder::BigEndian)
    }

    /// Creates a writer over `inner` using `order` for multi-byte values.
    pub fn with_order(inner: W, order: ByteOrder) -> Self {
        Self { inner, order }
    }

    /// Returns the byte order currently in effect.
    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    /// Changes the byte order for all subsequent writes.
    pub fn set_byte_order(&mut self, order: ByteOrder) {
        self.order = order;
    }

    /// Gets a reference to the underlying stream.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Gets a mutable reference to the underlying stream.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Unwraps the writer, returning the underlying stream.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> EndianWriter<W> {
    /// Writes a single `u8`.
    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        Ok(self.inner.write_all(&[value])?)
    }

    /// Writes a single `i8`.
    pub fn write_i8(&mut self, value: i8) -> Result<()> {
        self.write_u8(value as u8)
    }

    /// Writes a single `bool`. `true` is encoded as 1, `false` as 0.
    pub fn write_bool(&mut self, value: bool) -> Result<()> {
        self.write_u8(value as u8)
    }

    /// Writes a single `u16` in the current byte order.
    pub fn write_u16(&mut self, value: u16) -> Result<()> {
        let raw = self.order.u16_to(value);
        Ok(self.inner.write_all(&raw)?)
    }

    /// Writes a single `i16` in the current byte order.
    pub fn write_i16(&mut self, value: i16) -> Result<()> {
        self.write_u16(value as u16)
    }

    /// Writes a single UTF-16 code unit (a 2-byte character code) in the
    /// current byte order. The wire format is identical to [`write_u16`].
    ///
    /// [`write_u16`]: EndianWriter::write_u16
    pub fn write_wchar(&mut self, value: u16) -> Result<()> {
        self.write_u16(value)
    }

    /// Writes a single `u32` in the current byte order.
    pub fn write_u32(&mut self, value: u32) -> Result<()> {
        let raw = self.order.u32_to(value);
        Ok(self.inner.write_all(&raw)?)
    }

    /// Writes a single `i32` in the current byte order.
    pub fn write_i32(&mut self, value: i32) -> Result<()> {
        self.write_u32(value as u32)
    }

    /// Writes a single `f32` in the current byte order.
    pub fn write_f32(&mut self, value: f32) -> Result<()> {
        self.write_u32(value.to_bits())
    }

    /// Writes a single `u64` in the current byte order.
    pub fn write_u64(&mut self, value: u64) -> Result<()> {
        let raw = self.order.u64_to(value);
        Ok(self.inner.write_all(&raw)?)
    }

    /// Writes a single `i64` in the current byte order.
    pub fn write_i64(&mut self, value: i64) -> Result<()> {
        self.write_u64(value as u64)
    }

    /// Writes a single `f64` in the current byte order.
    pub fn write_f64(&mut self, value: f64) -> Result<()> {
        self.write_u64(value.to_bits())
    }

    /// Writes every byte of `values`.
    pub fn write_bytes(&mut self, values: &[u8]) -> Result<()> {
        Ok(self.inner.write_all(values)?)
    }

    /// Writes `values[offset..offset + length]`.
    pub fn write_bytes_range(&mut self, values: &[u8], offset: usize, length: usize) -> Result<()> {
        check_window(values.len(), offset, length)?;
        Ok(self.inner.write_all(&values[offset..offset + length])?)
    }

    /// Writes every boolean of `values`, one byte per element.
    ///
    /// `packed` requests the bit-packed layout, which is not supported and
    /// always fails with [`Error::PackedUnsupported`].
    pub fn write_bools(&mut self, values: &[bool], packed: bool) -> Result<()> {
        self.write_bools_range(values, 0, values.len(), packed)
    }

    /// Writes `values[offset..offset + length]`, one byte per element.
    ///
    /// `packed` requests the bit-packed layout, which is not supported and
    /// always fails with [`Error::PackedUnsupported`].
    pub fn write_bools_range(
        &mut self,
        values: &[bool],
        offset: usize,
        length: usize,
        packed: bool,
    ) -> Result<()> {
        if packed {
            return Err(Error::PackedUnsupported);
        }
        check_window(values.len(), offset, length)?;
        for &value in &values[offset..offset + length] {
            self.write_bool(value)?;
        }
        Ok(())
    }

    /// Writes every `u16` of `values` in the current byte order.
    pub fn write_u16s(&mut self, values: &[u16]) -> Result<()> {
        self.write_u16s_range(values, 0, values.len())
    }

    /// Writes `values[offset..offset + length]` in the current byte order.
    pub fn write_u16s_range(&mut self, values: &[u16], offset: usize, length: usize) -> Result<()> {
        check_window(values.len(), offset, length)?;
        for &value in &values[offset..offset + length] {
            self.write_u16(value)?;
        }
        Ok(())
    }

    /// Writes every `i16` of `values` in the current byte order.
    pub fn write_i16s(&mut self, values: &[i16]) -> Result<()> {
        self.write_i16s_range(values, 0, values.len())
    }

    /// Writes `values[offset..offset + length]` in the current byte order.
    pub fn write_i16s_range(&mut self, values: &[i16], offset: usize, length: usize) -> Result<()> {
        check_window(values.len(), offset, length)?;
        for &value in &values[offset..offset + length] {
            self.write_i16(value)?;
        }
        Ok(())
    }

    /// Writes every `u32` of `values` in the current byte order.
    pub fn write_u32s(&mut self, values: &[u32]) -> Result<()> {
        self.write_u32s_range(values, 0, values.len())
    }

    /// Writes `values[offset..offset + length]` in the current byte order.
    pub fn write_u32s_range(&mut self, values: &[u32], offset: usize, length: usize) -> Result<()> {
        check_window(values.len(), offset, length)?;
        for &value in &values[offset..offset + length] {
            self.write_u32(value)?;
        }
        Ok(())
    }

    /// Writes every `i32` of `values` in the current byte order.
    pub fn write_i32s(&mut self, values: &[i32]) -> Result<()> {
        self.write_i32s_range(values, 0, values.len())
    }

    /// Writes `values[offset..offset + length]` in the current byte order.
    pub fn write_i32s_range(&mut self, values: &[i32], offset: usize, length: usize) -> Result<()> {
        check_window(values.len(), offset, length)?;
        for &value in &values[offset..offset + length] {
            self.write_i32(value)?;
        }
        Ok(())
    }

    /// Writes every `f32` of `values` in the current byte order.
    pub fn write_f32s(&mut self, values: &[f32]) -> Result<()> {
        self.write_f32s_range(values, 0, values.len())
    }

    /// Writes `values[offset..offset + length]` in the current byte order.
    pub fn write_f32s_range(&mut self, values: &[f32], offset: usize, length: usize) -> Result<()> {
        check_window(values.len(), offset, length)?;
        for &value in &values[offset..offset + length] {
            self.write_f32(value)?;
        }
        Ok(())
    }

    /// Writes every `u64` of `values` in the current byte order.
    pub fn write_u64s(&mut self, values: &[u64]) -> Result<()> {
        self.write_u64s_range(values, 0, values.len())
    }

    /// Writes `values[offset..offset + length]` in the current byte order.
    pub fn write_u64s_range(&mut self, values: &[u64], offset: usize, length: usize) -> Result<()> {
        check_window(values.len(), offset, length)?;
        for &value in &values[offset..offset + length] {
            self.write_u64(value)?;
        }
        Ok(())
    }

    /// Writes every `i64` of `values` in the current byte order.
    pub fn write_i64s(&mut self, values: &[i64]) -> Result<()> {
        self.write_i64s_range(values, 0, values.len())
    }

    /// Writes `values[offset..offset + length]` in the current byte order.
    pub fn write_i64s_range(&mut self, values: &[i64], offset: usize, length: usize) -> Result<()> {
        check_window(values.len(), offset, length)?;
        for &value in &values[offset..offset + length] {
            self.write_i64(value)?;
        }
        Ok(())
    }

    /// Writes every `f64` of `values` in the current byte order.
    pub fn write_f64s(&mut self, values: &[f64]) -> Result<()> {
        self.write_f64s_range(values, 0, values.len())
    }

    /// Writes `values[offset..offset + length]` in the current byte order.
    pub fn write_f64s_range(&mut self, values: &[f64], offset: usize, length: usize) -> Result<()> {
        check_window(values.len(), offset, length)?;
        for &value in &values[offset..offset + length] {
            self.write_f64(value)?;
        }
        Ok(())
    }
}

/// Raw byte writes and flushes forward verbatim to the underlying stream.
impl<W: Write> Write for EndianWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Repositioning forwards verbatim to the underlying stream.
impl<W: Seek> Seek for EndianWriter<W> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.inner.seek(pos)
    }
}
