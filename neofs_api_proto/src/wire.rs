use crate::error::{Error, Result};
use crate::varint;
use derive_more::{Deref, From};
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

/// Largest field number protobuf allows: 2^29 - 1.
pub const MAX_FIELD_NUMBER: u32 = (1 << 29) - 1;

/// The wire types this codec writes. Groups (3, 4) and fixed32 (5) never appear in the schema.
#[repr(u8)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, FromPrimitive, Debug)]
pub enum WireType {
    Varint = 0,
    Fixed64 = 1,
    LengthDelimited = 2,
}

/// `(field_number << 3) | wire_type`.
#[derive(From, Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct Tag(u64);

impl Tag {
    pub fn new(field: u32, wire_type: WireType) -> Self {
        debug_assert!(
            (1..=MAX_FIELD_NUMBER).contains(&field),
            "field number {field} out of range"
        );
        Self(((field as u64) << 3) | wire_type as u64)
    }

    pub fn field(&self) -> u32 {
        (self.0 >> 3) as u32
    }

    pub fn wire_type(&self) -> Result<WireType> {
        let int = (self.0 & 0b111) as u8;
        WireType::from_u8(int).ok_or_else(|| Error::decode(format!("unsupported wire type {int}")))
    }

    pub fn encoded_len(&self) -> usize {
        varint::encoded_len(self.0)
    }

    pub fn encode(&self, buf: &mut [u8]) -> Result<usize> {
        varint::encode(self.0, buf)
    }

    pub fn decode(buf: &[u8]) -> Result<(Self, usize)> {
        let (int, r_len) = varint::decode(buf)?;
        let tag = Self(int);
        if tag.field() == 0 || int > (((MAX_FIELD_NUMBER as u64) << 3) | 0b111) {
            return Err(Error::decode(format!("invalid field number in tag {int}")));
        }
        Ok((tag, r_len))
    }
}

/// The tag for a field together with the byte length of its varint encoding.
pub fn field_prefix(field: u32, wire_type: WireType) -> (Tag, usize) {
    let tag = Tag::new(field, wire_type);
    let len = tag.encoded_len();
    (tag, len)
}
