pub mod uint32 {
    use crate::json;
    use neofs_api_proto::{proto, Result};
    use serde_json::{Map, Value};

    pub fn size(field: u32, v: &u32) -> usize {
        proto::uint32_size(field, *v)
    }
    pub fn marshal(field: u32, buf: &mut [u8], v: &u32) -> Result<usize> {
        proto::uint32_marshal(field, buf, *v)
    }
    pub fn to_grpc(v: &u32) -> u32 {
        *v
    }
    pub fn from_grpc(v: u32) -> Result<u32> {
        Ok(v)
    }
    fn to_json(v: &u32) -> Value {
        Value::from(*v)
    }
    fn from_json(v: Option<&Value>) -> Result<u32> {
        json::u32_from(v)
    }
    json_by_value!(u32);
}

pub mod uint64 {
    use crate::json;
    use neofs_api_proto::{proto, Result};
    use serde_json::{Map, Value};

    pub fn size(field: u32, v: &u64) -> usize {
        proto::uint64_size(field, *v)
    }
    pub fn marshal(field: u32, buf: &mut [u8], v: &u64) -> Result<usize> {
        proto::uint64_marshal(field, buf, *v)
    }
    pub fn to_grpc(v: &u64) -> u64 {
        *v
    }
    pub fn from_grpc(v: u64) -> Result<u64> {
        Ok(v)
    }
    fn to_json(v: &u64) -> Value {
        Value::String(v.to_string())
    }
    fn from_json(v: Option<&Value>) -> Result<u64> {
        json::u64_from(v)
    }
    json_by_value!(u64);
}

pub mod int64 {
    use crate::json;
    use neofs_api_proto::{proto, Result};
    use serde_json::{Map, Value};

    pub fn size(field: u32, v: &i64) -> usize {
        proto::int64_size(field, *v)
    }
    pub fn marshal(field: u32, buf: &mut [u8], v: &i64) -> Result<usize> {
        proto::int64_marshal(field, buf, *v)
    }
    pub fn to_grpc(v: &i64) -> i64 {
        *v
    }
    pub fn from_grpc(v: i64) -> Result<i64> {
        Ok(v)
    }
    fn to_json(v: &i64) -> Value {
        Value::String(v.to_string())
    }
    fn from_json(v: Option<&Value>) -> Result<i64> {
        json::i64_from(v)
    }
    json_by_value!(i64);
}

/// Little-endian 8-byte integer; only the audit epoch uses it.
pub mod fixed64 {
    use crate::json;
    use neofs_api_proto::{proto, Result};
    use serde_json::{Map, Value};

    pub fn size(field: u32, v: &u64) -> usize {
        proto::fixed64_size(field, *v)
    }
    pub fn marshal(field: u32, buf: &mut [u8], v: &u64) -> Result<usize> {
        proto::fixed64_marshal(field, buf, *v)
    }
    pub fn to_grpc(v: &u64) -> u64 {
        *v
    }
    pub fn from_grpc(v: u64) -> Result<u64> {
        Ok(v)
    }
    fn to_json(v: &u64) -> Value {
        Value::String(v.to_string())
    }
    fn from_json(v: Option<&Value>) -> Result<u64> {
        json::u64_from(v)
    }
    json_by_value!(u64);
}

pub mod boolean {
    use crate::json;
    use neofs_api_proto::{proto, Result};
    use serde_json::{Map, Value};

    pub fn size(field: u32, v: &bool) -> usize {
        proto::bool_size(field, *v)
    }
    pub fn marshal(field: u32, buf: &mut [u8], v: &bool) -> Result<usize> {
        proto::bool_marshal(field, buf, *v)
    }
    pub fn to_grpc(v: &bool) -> bool {
        *v
    }
    pub fn from_grpc(v: bool) -> Result<bool> {
        Ok(v)
    }
    fn to_json(v: &bool) -> Value {
        Value::Bool(*v)
    }
    fn from_json(v: Option<&Value>) -> Result<bool> {
        json::bool_from(v)
    }
    json_by_value!(bool);
}

/// A [`ProtoEnum`](crate::enums::ProtoEnum), carried as int32 on the wire and as its identifier in JSON.
/// Unknown values are kept, and written to JSON as numbers.
pub mod enumeration {
    use crate::enums::ProtoEnum;
    use crate::json;
    use neofs_api_proto::{proto, Result};
    use serde_json::{Map, Value};

    pub fn size<E: ProtoEnum>(field: u32, v: &E) -> usize {
        proto::enum_size(field, v.value())
    }
    pub fn marshal<E: ProtoEnum>(field: u32, buf: &mut [u8], v: &E) -> Result<usize> {
        proto::enum_marshal(field, buf, v.value())
    }
    pub fn to_grpc<E: ProtoEnum>(v: &E) -> i32 {
        v.value()
    }
    pub fn from_grpc<E: ProtoEnum>(v: i32) -> Result<E> {
        Ok(E::from_value(v))
    }
    pub fn write_json<E: ProtoEnum>(obj: &mut Map<String, Value>, name: crate::json::Key, v: &E) {
        crate::field::insert(obj, name, json::enum_to(*v));
    }
    pub fn read_json<E: ProtoEnum>(obj: &Map<String, Value>, name: crate::json::Key) -> Result<E> {
        json::enum_from(json::lookup(obj, name))
    }
}
