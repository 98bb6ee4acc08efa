use crate::error::{ensure_len, Result};
use crate::varint;
use crate::wire::{field_prefix, WireType};

/// Size of a length-delimited field carrying `len` body bytes, written even when `len == 0`.
pub fn delimited_size(field: u32, len: usize) -> usize {
    let (_, prefix_len) = field_prefix(field, WireType::LengthDelimited);
    prefix_len + varint::encoded_len(len as u64) + len
}

/// Writes tag and length prefix, then `body`, even when `body` is empty.
pub fn delimited_marshal(field: u32, buf: &mut [u8], body: &[u8]) -> Result<usize> {
    ensure_len(buf, delimited_size(field, body.len()))?;

    let mut offset = delimited_header_marshal(field, buf, body.len())?;
    buf[offset..offset + body.len()].copy_from_slice(body);
    offset += body.len();
    Ok(offset)
}

/// Writes only tag and length prefix. The caller writes the `len` body bytes that follow.
pub(crate) fn delimited_header_marshal(field: u32, buf: &mut [u8], len: usize) -> Result<usize> {
    let (tag, _) = field_prefix(field, WireType::LengthDelimited);
    let mut offset = tag.encode(buf)?;
    offset += varint::encode(len as u64, &mut buf[offset..])?;
    Ok(offset)
}

pub fn bytes_size(field: u32, v: &[u8]) -> usize {
    if v.is_empty() {
        return 0;
    }
    delimited_size(field, v.len())
}
pub fn bytes_marshal(field: u32, buf: &mut [u8], v: &[u8]) -> Result<usize> {
    if v.is_empty() {
        return Ok(0);
    }
    delimited_marshal(field, buf, v)
}

pub fn string_size(field: u32, v: &str) -> usize {
    bytes_size(field, v.as_bytes())
}
pub fn string_marshal(field: u32, buf: &mut [u8], v: &str) -> Result<usize> {
    bytes_marshal(field, buf, v.as_bytes())
}
