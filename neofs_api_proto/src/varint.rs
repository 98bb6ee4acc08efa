//! LEB-128 varints, as used for tags, length prefixes and integral field values.
//!
//! ```text
//! 300 = 0b1_0010_1100
//!     => [0b1010_1100, 0b0000_0010]
//!         ^ continuation bit set on every byte but the last
//! ```

use crate::error::{ensure_len, Error, Result};

pub const MAX_VARINT_LEN: usize = 10;

/// Number of bytes [`encode`] writes for `v`. Always within `1..=10`.
pub fn encoded_len(v: u64) -> usize {
    let bits = 64 - (v | 1).leading_zeros() as usize;
    (bits + 6) / 7
}

pub fn encode(mut v: u64, buf: &mut [u8]) -> Result<usize> {
    ensure_len(buf, encoded_len(v))?;

    let mut i = 0;
    while v >= 0x80 {
        buf[i] = (v as u8) | 0x80;
        v >>= 7;
        i += 1;
    }
    buf[i] = v as u8;

    Ok(i + 1)
}

/// Returns the decoded value and the count of bytes consumed.
pub fn decode(buf: &[u8]) -> Result<(u64, usize)> {
    let mut v = 0u64;
    for (i, byte) in buf.iter().enumerate().take(MAX_VARINT_LEN) {
        let byte = *byte;
        if i == MAX_VARINT_LEN - 1 && byte > 1 {
            return Err(Error::decode("varint overflows u64"));
        }
        v |= ((byte & 0x7f) as u64) << (7 * i);
        if byte < 0x80 {
            return Ok((v, i + 1));
        }
    }
    if buf.len() >= MAX_VARINT_LEN {
        Err(Error::decode("varint longer than 10 bytes"))
    } else {
        Err(Error::decode("truncated varint"))
    }
}
