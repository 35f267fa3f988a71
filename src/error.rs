use thiserror::Error;

/// Result alias used by every fallible operation in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type shared by [`EndianReader`](crate::EndianReader) and
/// [`EndianWriter`](crate::EndianWriter).
///
/// `Io` is the only kind that can occur after the underlying stream has been
/// touched; `OutOfBounds` and `PackedUnsupported` are argument errors raised
/// before any I/O is attempted.
#[derive(Debug, Error)]
pub enum Error {
    /// The underlying stream failed to satisfy a read or write request.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An array window does not fit inside the caller's slice.
    #[error("window of {length} elements at offset {offset} is out of bounds for a slice of {size}")]
    OutOfBounds {
        /// First element of the requested window.
        offset: usize,
        /// Number of elements in the requested window.
        length: usize,
        /// Length of the caller's slice.
        size: usize,
    },

    /// Packed booleans are not supported (yet).
    #[error("packed booleans are not supported (yet)")]
    PackedUnsupported,
}

/// Validates an `offset`/`length` window against a slice of `size` elements.
///
/// Overflow of `offset + length` is rejected rather than wrapped.
pub(crate) fn check_window(size: usize, offset: usize, length: usize) -> Result<()> {
    match offset.checked_add(length) {
        Some(end) if end <= size => Ok(()),
        _ => Err(Error::OutOfBounds {
            offset,
            length,
            size,
        }),
    }
}
