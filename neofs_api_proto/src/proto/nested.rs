use crate::error::{ensure_len, Result};
use crate::proto::delimited::{delimited_header_marshal, delimited_size};
use crate::stable::{StableMarshal, StableSize};

/// Zero for an absent message. A present message is framed even when it is itself empty.
pub fn nested_size<M: StableSize>(field: u32, msg: Option<&M>) -> usize {
    match msg {
        None => 0,
        Some(msg) => nested_present_size(field, msg),
    }
}

pub fn nested_marshal<M: StableMarshal>(
    field: u32,
    buf: &mut [u8],
    msg: Option<&M>,
) -> Result<usize> {
    match msg {
        None => Ok(0),
        Some(msg) => nested_present_marshal(field, buf, msg),
    }
}

pub fn nested_present_size<M: StableSize>(field: u32, msg: &M) -> usize {
    delimited_size(field, msg.stable_size())
}

pub fn nested_present_marshal<M: StableMarshal>(
    field: u32,
    buf: &mut [u8],
    msg: &M,
) -> Result<usize> {
    let body_len = msg.stable_size();
    ensure_len(buf, delimited_size(field, body_len))?;

    let offset = delimited_header_marshal(field, buf, body_len)?;
    let w_len = msg.stable_marshal_into(&mut buf[offset..offset + body_len])?;
    debug_assert_eq!(body_len, w_len, "size/marshal disagree in field {field}");

    Ok(offset + w_len)
}
