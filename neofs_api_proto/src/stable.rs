//! Deterministic encoding.
//!
//! A message is encoded as its fields in ascending field-number order, each field being
//! skipped when it holds the zero value of its type. Two messages with equal field values
//! therefore always encode to equal bytes, no matter how they were built. Signatures are
//! computed over these bytes.

use crate::error::Result;

pub trait StableSize {
    /// Exact number of bytes [`StableMarshal::stable_marshal_into`] writes.
    fn stable_size(&self) -> usize;
}

pub trait StableMarshal: StableSize {
    /// Writes the encoding to the front of `buf` and returns the count of bytes written.
    ///
    /// Fails with [`crate::Error::BufferTooSmall`] if `buf` is shorter than [`StableSize::stable_size`].
    fn stable_marshal_into(&self, buf: &mut [u8]) -> Result<usize>;

    fn stable_marshal(&self) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; self.stable_size()];
        let w_len = self.stable_marshal_into(&mut buf)?;
        buf.truncate(w_len);
        Ok(buf)
    }
}

/* An absent message encodes to nothing. */
impl<T: StableSize> StableSize for Option<T> {
    fn stable_size(&self) -> usize {
        match self {
            None => 0,
            Some(t) => t.stable_size(),
        }
    }
}
impl<T: StableMarshal> StableMarshal for Option<T> {
    fn stable_marshal_into(&self, buf: &mut [u8]) -> Result<usize> {
        match self {
            None => Ok(0),
            Some(t) => t.stable_marshal_into(buf),
        }
    }
}

/* Recursive messages are boxed. */
impl<T: StableSize + ?Sized> StableSize for Box<T> {
    fn stable_size(&self) -> usize {
        (**self).stable_size()
    }
}
impl<T: StableMarshal + ?Sized> StableMarshal for Box<T> {
    fn stable_marshal_into(&self, buf: &mut [u8]) -> Result<usize> {
        (**self).stable_marshal_into(buf)
    }
}

impl<T: StableSize + ?Sized> StableSize for &T {
    fn stable_size(&self) -> usize {
        (**self).stable_size()
    }
}
impl<T: StableMarshal + ?Sized> StableMarshal for &T {
    fn stable_marshal_into(&self, buf: &mut [u8]) -> Result<usize> {
        (**self).stable_marshal_into(buf)
    }
}
