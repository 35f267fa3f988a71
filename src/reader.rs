use std::io::{self, Read, Seek, SeekFrom};

use crate::error::{check_window, Error, Result};
use crate::order::ByteOrder;

/// Wraps a [`Read`] stream and decodes fixed-width scalars and arrays of
/// scalars from it under a selectable [`ByteOrder`].
///
/// Single-value reads (`read_u32`, `read_f64`, ...) consume exactly the width
/// of the requested type and fail with [`Error::Io`] if the stream ends
/// first. Bulk array reads (`read_u32s`, `read_f64s`, ...) instead apply the
/// padding policy: an element cut short by end of stream has its unread
/// trailing bytes taken as zero, so the requested window is always fully
/// populated unless a hard I/O error occurs.
///
/// The reader keeps no buffer of its own; every operation maps directly onto
/// reads of the underlying stream, in call order. Raw byte access is
/// available through the forwarding [`Read`] impl.
pub struct EndianReader<R> {
    inner: R,
    order: ByteOrder,
}

impl<R> EndianReader<R> {
    /// Creates a big-endian reader over `inner`.
    pub fn new(inner: R) -> Self {
        Self::with_order(inner, ByteOrder::BigEndian)
    }

    /// Creates a reader over `inner` using `order` for multi-byte values.
    pub fn with_order(inner: R, order: ByteOrder) -> Self {
        Self { inner, order }
    }

    /// Returns the byte order currently in effect.
    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    /// Changes the byte order for all subsequent reads.
    pub fn set_byte_order(&mut self, order: ByteOrder) {
        self.order = order;
    }

    /// Gets a reference to the underlying stream.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Gets a mutable reference to the underlying stream.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Unwraps the reader, returning the underlying stream.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> EndianReader<R> {
    /// Stages the next `N` bytes of the stream. Fails if fewer are available.
    fn read_scratch<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut raw = [0u8; N];
        self.inner.read_exact(&mut raw)?;
        Ok(raw)
    }

    /// Stages up to `N` bytes for a bulk decode. The array starts zeroed, so
    /// when the stream ends mid-element the positions from the count actually
    /// read through `N - 1` are left at zero (the padding policy).
    fn read_scratch_padded<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut raw = [0u8; N];
        read_fully(&mut self.inner, &mut raw)?;
        Ok(raw)
    }

    /// Reads a single `u8`.
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_scratch::<1>()?[0])
    }

    /// Reads a single `i8`.
    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    /// Reads a single `bool`. Any non-zero byte decodes as `true`.
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    /// Reads a single `u16` in the current byte order.
    pub fn read_u16(&mut self) -> Result<u16> {
        let raw = self.read_scratch()?;
        Ok(self.order.u16_from(raw))
    }

    /// Reads a single `i16` in the current byte order.
    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(self.read_u16()? as i16)
    }

    /// Reads a single UTF-16 code unit (a 2-byte character code) in the
    /// current byte order. The wire format is identical to [`read_u16`].
    ///
    /// [`read_u16`]: EndianReader::read_u16
    pub fn read_wchar(&mut self) -> Result<u16> {
        self.read_u16()
    }

    /// Reads a single `u32` in the current byte order.
    pub fn read_u32(&mut self) -> Result<u32> {
        let raw = self.read_scratch()?;
        Ok(self.order.u32_from(raw))
    }

    /// Reads a single `i32` in the current byte order.
    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(self.read_u32()? as i32)
    }

    /// Reads a single `f32` in the current byte order.
    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(f32::from_bits(self.read_u32()?))
    }

    /// Reads a single `u64` in the current byte order.
    pub fn read_u64(&mut self) -> Result<u64> {
        let raw = self.read_scratch()?;
        Ok(self.order.u64_from(raw))
    }

    /// Reads a single `i64` in the current byte order.
    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(self.read_u64()? as i64)
    }

    /// Reads a single `f64` in the current byte order.
    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(f64::from_bits(self.read_u64()?))
    }

    /// Fills `values` with bytes until it is full or the stream ends,
    /// returning the count actually obtained.
    pub fn read_bytes(&mut self, values: &mut [u8]) -> Result<usize> {
        let length = values.len();
        self.read_bytes_range(values, 0, length)
    }

    /// Fills `values[offset..offset + length]` with bytes until the window is
    /// full or the stream ends, returning the count actually obtained.
    pub fn read_bytes_range(
        &mut self,
        values: &mut [u8],
        offset: usize,
        length: usize,
    ) -> Result<usize> {
        check_window(values.len(), offset, length)?;
        Ok(read_fully(&mut self.inner, &mut values[offset..offset + length])?)
    }

    /// Reads `values.len()` booleans into `values`.
    ///
    /// `packed` requests the bit-packed layout, which is not supported and
    /// always fails with [`Error::PackedUnsupported`].
    pub fn read_bools(&mut self, values: &mut [bool], packed: bool) -> Result<usize> {
        let length = values.len();
        self.read_bools_range(values, 0, length, packed)
    }

    /// Reads `length` booleans into `values[offset..offset + length]`.
    ///
    /// `packed` requests the bit-packed layout, which is not supported and
    /// always fails with [`Error::PackedUnsupported`].
    pub fn read_bools_range(
        &mut self,
        values: &mut [bool],
        offset: usize,
        length: usize,
        packed: bool,
    ) -> Result<usize> {
        if packed {
            return Err(Error::PackedUnsupported);
        }
        check_window(values.len(), offset, length)?;
        for slot in &mut values[offset..offset + length] {
            let raw = self.read_scratch_padded::<1>()?;
            *slot = raw[0] != 0;
        }
        Ok(length)
    }

    /// Reads `values.len()` `u16` values into `values`.
    pub fn read_u16s(&mut self, values: &mut [u16]) -> Result<usize> {
        let length = values.len();
        self.read_u16s_range(values, 0, length)
    }

    /// Reads `length` `u16` values into `values[offset..offset + length]`,
    /// zero-padding elements cut short by end of stream.
    pub fn read_u16s_range(
        &mut self,
        values: &mut [u16],
        offset: usize,
        length: usize,
    ) -> Result<usize> {
        check_window(values.len(), offset, length)?;
        for slot in &mut values[offset..offset + length] {
            let raw = self.read_scratch_padded()?;
            *slot = self.order.u16_from(raw);
        }
        Ok(length)
    }

    /// Reads `values.len()` `i16` values into `values`.
    pub fn read_i16s(&mut self, values: &mut [i16]) -> Result<usize> {
        let length = values.len();
        self.read_i16s_range(values, 0, length)
    }

    /// Reads `length` `i16` values into `values[offset..offset + length]`,
    /// zero-padding elements cut short by end of stream.
    pub fn read_i16s_range(
        &mut self,
        values: &mut [i16],
        offset: usize,
        length: usize,
    ) -> Result<usize> {
        check_window(values.len(), offset, length)?;
        for slot in &mut values[offset..offset + length] {
            let raw = self.read_scratch_padded()?;
            *slot = self.order.u16_from(raw) as i16;
        }
        Ok(length)
    }

    /// Reads `values.len()` `u32` values into `values`.
    pub fn read_u32s(&mut self, values: &mut [u32]) -> Result<usize> {
        let length = values.len();
        self.read_u32s_range(values, 0, length)
    }

    /// Reads `length` `u32` values into `values[offset..offset + length]`,
    /// zero-padding elements cut short by end of stream.
    pub fn read_u32s_range(
        &mut self,
        values: &mut [u32],
        offset: usize,
        length: usize,
    ) -> Result<usize> {
        check_window(values.len(), offset, length)?;
        for slot in &mut values[offset..offset + length] {
            let raw = self.read_scratch_padded()?;
            *slot = self.order.u32_from(raw);
        }
        Ok(length)
    }

    /// Reads `values.len()` `i32` values into `values`.
    pub fn read_i32s(&mut self, values: &mut [i32]) -> Result<usize> {
        let length = values.len();
        self.read_i32s_range(values, 0, length)
    }

    /// Reads `length` `i32` values into `values[offset..offset + length]`,
    /// zero-padding elements cut short by end of stream.
    pub fn read_i32s_range(
        &mut self,
        values: &mut [i32],
        offset: usize,
        length: usize,
    ) -> Result<usize> {
        check_window(values.len(), offset, length)?;
        for slot in &mut values[offset..offset + length] {
            let raw = self.read_scratch_padded()?;
            *slot = self.order.u32_from(raw) as i32;
        }
        Ok(length)
    }

    /// Reads `values.len()` `f32` values into `values`.
    pub fn read_f32s(&mut self, values: &mut [f32]) -> Result<usize> {
        let length = values.len();
        self.read_f32s_range(values, 0, length)
    }

    /// Reads `length` `f32` values into `values[offset..offset + length]`,
    /// zero-padding elements cut short by end of stream.
    pub fn read_f32s_range(
        &mut self,
        values: &mut [f32],
        offset: usize,
        length: usize,
    ) -> Result<usize> {
        check_window(values.len(), offset, length)?;
        for slot in &mut values[offset..offset + length] {
            let raw = self.read_scratch_padded()?;
            *slot = f32::from_bits(self.order.u32_from(raw));
        }
        Ok(length)
    }

    /// Reads `values.len()` `u64` values into `values`.
    pub fn read_u64s(&mut self, values: &mut [u64]) -> Result<usize> {
        let length = values.len();
        self.read_u64s_range(values, 0, length)
    }

    /// Reads `length` `u64` values into `values[offset..offset + length]`,
    /// zero-padding elements cut short by end of stream.
    pub fn read_u64s_range(
        &mut self,
        values: &mut [u64],
        offset: usize,
        length: usize,
    ) -> Result<usize> {
        check_window(values.len(), offset, length)?;
        for slot in &mut values[offset..offset + length] {
            let raw = self.read_scratch_padded()?;
            *slot = self.order.u64_from(raw);
        }
        Ok(length)
    }

    /// Reads `values.len()` `i64` values into `values`.
    pub fn read_i64s(&mut self, values: &mut [i64]) -> Result<usize> {
        let length = values.len();
        self.read_i64s_range(values, 0, length)
    }

    /// Reads `length` `i64` values into `values[offset..offset + length]`,
    /// zero-padding elements cut short by end of stream.
    pub fn read_i64s_range(
        &mut self,
        values: &mut [i64],
        offset: usize,
        length: usize,
    ) -> Result<usize> {
        check_window(values.len(), offset, length)?;
        for slot in &mut values[offset..offset + length] {
            let raw = self.read_scratch_padded()?;
            *slot = self.order.u64_from(raw) as i64;
        }
        Ok(length)
    }

    /// Reads `values.len()` `f64` values into `values`.
    pub fn read_f64s(&mut self, values: &mut [f64]) -> Result<usize> {
        let length = values.len();
        self.read_f64s_range(values, 0, length)
    }

    /// Reads `length` `f64` values into `values[offset..offset + length]`,
    /// zero-padding elements cut short by end of stream.
    pub fn read_f64s_range(
        &mut self,
        values: &mut [f64],
        offset: usize,
        length: usize,
    ) -> Result<usize> {
        check_window(values.len(), offset, length)?;
        for slot in &mut values[offset..offset + length] {
            let raw = self.read_scratch_padded()?;
            *slot = f64::from_bits(self.order.u64_from(raw));
        }
        Ok(length)
    }
}

/// Raw byte reads forward verbatim to the underlying stream.
impl<R: Read> Read for EndianReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

/// Repositioning forwards verbatim to the underlying stream.
impl<R: Seek> Seek for EndianReader<R> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.inner.seek(pos)
    }
}

/// Reads until `buf` is full or the stream reports end of input, returning
/// the count actually obtained. `Interrupted` reads are retried.
pub(crate) fn read_fully<R: Read>(inner: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match inner.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
