use crate::error::Result;
use crate::proto::delimited::{delimited_marshal, delimited_size};
use crate::proto::nested::{nested_present_marshal, nested_present_size};
use crate::stable::{StableMarshal, StableSize};

/* Each element repeats the full tag. Empty elements are still written. */

pub fn repeated_bytes_size<B: AsRef<[u8]>>(field: u32, v: &[B]) -> usize {
    v.iter().map(|b| delimited_size(field, b.as_ref().len())).sum()
}
pub fn repeated_bytes_marshal<B: AsRef<[u8]>>(
    field: u32,
    buf: &mut [u8],
    v: &[B],
) -> Result<usize> {
    let mut offset = 0;
    for b in v {
        offset += delimited_marshal(field, &mut buf[offset..], b.as_ref())?;
    }
    Ok(offset)
}

pub fn repeated_string_size<S: AsRef<str>>(field: u32, v: &[S]) -> usize {
    v.iter().map(|s| delimited_size(field, s.as_ref().len())).sum()
}
pub fn repeated_string_marshal<S: AsRef<str>>(
    field: u32,
    buf: &mut [u8],
    v: &[S],
) -> Result<usize> {
    let mut offset = 0;
    for s in v {
        offset += delimited_marshal(field, &mut buf[offset..], s.as_ref().as_bytes())?;
    }
    Ok(offset)
}

pub fn repeated_nested_size<M: StableSize>(field: u32, v: &[M]) -> usize {
    v.iter().map(|m| nested_present_size(field, m)).sum()
}
pub fn repeated_nested_marshal<M: StableMarshal>(
    field: u32,
    buf: &mut [u8],
    v: &[M],
) -> Result<usize> {
    let mut offset = 0;
    for m in v {
        offset += nested_present_marshal(field, &mut buf[offset..], m)?;
    }
    Ok(offset)
}
