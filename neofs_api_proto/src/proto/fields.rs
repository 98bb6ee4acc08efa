use crate::error::{Error, Result};
use crate::varint;
use crate::wire::{Tag, WireType};
use std::mem;

/// One field as it sits on the wire.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct RawField<'a> {
    pub field: u32,
    pub wire_type: WireType,
    /// The varint value, the 8 fixed64 bytes, or the length-delimited body.
    pub body: RawBody<'a>,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum RawBody<'a> {
    Varint(u64),
    Fixed64(u64),
    Delimited(&'a [u8]),
}

/// Walks the top-level fields of an encoded message without interpreting them.
pub struct FieldIter<'a> {
    buf: &'a [u8],
    offset: usize,
    failed: bool,
}

impl<'a> FieldIter<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            offset: 0,
            failed: false,
        }
    }

    fn read_field(&mut self) -> Result<RawField<'a>> {
        let rest = &self.buf[self.offset..];
        let (tag, mut r_len) = Tag::decode(rest)?;
        let wire_type = tag.wire_type()?;

        let body = match wire_type {
            WireType::Varint => {
                let (v, delta_r_len) = varint::decode(&rest[r_len..])?;
                r_len += delta_r_len;
                RawBody::Varint(v)
            }
            WireType::Fixed64 => {
                let end = r_len + mem::size_of::<u64>();
                let bytes = rest
                    .get(r_len..end)
                    .ok_or_else(|| Error::decode("truncated fixed64"))?;
                let mut arr = [0u8; mem::size_of::<u64>()];
                arr.copy_from_slice(bytes);
                r_len = end;
                RawBody::Fixed64(u64::from_le_bytes(arr))
            }
            WireType::LengthDelimited => {
                let (len, delta_r_len) = varint::decode(&rest[r_len..])?;
                r_len += delta_r_len;
                let len = usize::try_from(len)
                    .map_err(|_| Error::decode("length prefix overflows usize"))?;
                let end = r_len
                    .checked_add(len)
                    .ok_or_else(|| Error::decode("length prefix overflows usize"))?;
                let body = rest.get(r_len..end).ok_or_else(|| {
                    Error::decode(format!(
                        "length prefix {len} exceeds the remaining {} bytes",
                        rest.len() - r_len
                    ))
                })?;
                r_len = end;
                RawBody::Delimited(body)
            }
        };

        self.offset += r_len;
        Ok(RawField {
            field: tag.field(),
            wire_type,
            body,
        })
    }
}

impl<'a> Iterator for FieldIter<'a> {
    type Item = Result<RawField<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.offset >= self.buf.len() {
            return None;
        }
        let res = self.read_field();
        if res.is_err() {
            self.failed = true;
        }
        Some(res)
    }
}

/// Field numbers of the top-level fields, in wire order.
pub fn field_numbers(buf: &[u8]) -> Result<Vec<u32>> {
    FieldIter::new(buf).map(|res| res.map(|f| f.field)).collect()
}
