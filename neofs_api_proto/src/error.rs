use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum Error {
    /// The destination slice cannot hold the encoding of a field or message.
    #[error("buffer too small: need {need} bytes, have {have}")]
    BufferTooSmall { need: usize, have: usize },

    /// Malformed wire bytes: truncated varint, length prefix overrun, bad UTF-8, etc.
    #[error("decode error: {0}")]
    Decode(String),

    #[error("message too large: {size} bytes exceeds maximum {max} bytes")]
    MessageTooLarge { size: usize, max: usize },

    #[error("json error: {0}")]
    Json(String),

    #[error("signature error: {0}")]
    Signature(String),
}

impl Error {
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    pub fn signature(msg: impl Into<String>) -> Self {
        Self::Signature(msg.into())
    }
}

/// Fails with [`Error::BufferTooSmall`] unless `buf` holds at least `need` bytes.
pub fn ensure_len(buf: &[u8], need: usize) -> Result<()> {
    if buf.len() < need {
        return Err(Error::BufferTooSmall {
            need,
            have: buf.len(),
        });
    }
    Ok(())
}
