use crate::error::{ensure_len, Result};
use crate::varint;
use crate::wire::{field_prefix, WireType};
use std::mem;

/* Varint family. */

fn varint_field_size(field: u32, v: u64) -> usize {
    if v == 0 {
        return 0;
    }
    let (_, prefix_len) = field_prefix(field, WireType::Varint);
    prefix_len + varint::encoded_len(v)
}

fn varint_field_marshal(field: u32, buf: &mut [u8], v: u64) -> Result<usize> {
    if v == 0 {
        return Ok(0);
    }
    let (tag, prefix_len) = field_prefix(field, WireType::Varint);
    ensure_len(buf, prefix_len + varint::encoded_len(v))?;

    let mut offset = tag.encode(buf)?;
    offset += varint::encode(v, &mut buf[offset..])?;
    Ok(offset)
}

pub fn uint32_size(field: u32, v: u32) -> usize {
    varint_field_size(field, v as u64)
}
pub fn uint32_marshal(field: u32, buf: &mut [u8], v: u32) -> Result<usize> {
    varint_field_marshal(field, buf, v as u64)
}

pub fn uint64_size(field: u32, v: u64) -> usize {
    varint_field_size(field, v)
}
pub fn uint64_marshal(field: u32, buf: &mut [u8], v: u64) -> Result<usize> {
    varint_field_marshal(field, buf, v)
}

/// Negative values are sign-extended to 64 bits and so take 10 bytes, as protobuf mandates.
pub fn int32_size(field: u32, v: i32) -> usize {
    varint_field_size(field, v as i64 as u64)
}
pub fn int32_marshal(field: u32, buf: &mut [u8], v: i32) -> Result<usize> {
    varint_field_marshal(field, buf, v as i64 as u64)
}

pub fn int64_size(field: u32, v: i64) -> usize {
    varint_field_size(field, v as u64)
}
pub fn int64_marshal(field: u32, buf: &mut [u8], v: i64) -> Result<usize> {
    varint_field_marshal(field, buf, v as u64)
}

pub fn bool_size(field: u32, v: bool) -> usize {
    varint_field_size(field, v as u64)
}
pub fn bool_marshal(field: u32, buf: &mut [u8], v: bool) -> Result<usize> {
    varint_field_marshal(field, buf, v as u64)
}

/// Enums travel as int32.
pub fn enum_size(field: u32, v: i32) -> usize {
    int32_size(field, v)
}
pub fn enum_marshal(field: u32, buf: &mut [u8], v: i32) -> Result<usize> {
    int32_marshal(field, buf, v)
}

/* Fixed64. */

pub fn fixed64_size(field: u32, v: u64) -> usize {
    if v == 0 {
        return 0;
    }
    let (_, prefix_len) = field_prefix(field, WireType::Fixed64);
    prefix_len + mem::size_of::<u64>()
}
pub fn fixed64_marshal(field: u32, buf: &mut [u8], v: u64) -> Result<usize> {
    if v == 0 {
        return Ok(0);
    }
    let (tag, prefix_len) = field_prefix(field, WireType::Fixed64);
    let body = v.to_le_bytes();
    ensure_len(buf, prefix_len + body.len())?;

    let offset = tag.encode(buf)?;
    buf[offset..offset + body.len()].copy_from_slice(&body);
    Ok(offset + body.len())
}
