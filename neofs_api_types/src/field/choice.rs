use crate::convert::{FromGrpc, IntoGrpc};
use neofs_api_proto::{Result, StableMarshal};
use serde_json::{Map, Value};

/// A closed set of alternative fields, declared with `stable_oneof!`.
///
/// The member that is set is always written, even when its value is empty.
pub trait Oneof: StableMarshal + IntoGrpc + FromGrpc {
    /// Inserts the set member under its own key. Unset members are not emitted.
    fn write_json(&self, obj: &mut Map<String, Value>);

    /// Fails when more than one member key is present.
    fn read_json(obj: &Map<String, Value>) -> Result<Option<Self>>;
}

/// A oneof field of a message. Its row carries the lowest member number, which orders it
/// among the other fields; the members encode under their own numbers.
pub mod oneof {
    use super::Oneof;
    use neofs_api_proto::{Result, StableMarshal, StableSize};
    use serde_json::{Map, Value};

    pub fn size<O: Oneof>(_field: u32, v: &Option<O>) -> usize {
        v.stable_size()
    }
    pub fn marshal<O: Oneof>(_field: u32, buf: &mut [u8], v: &Option<O>) -> Result<usize> {
        v.stable_marshal_into(buf)
    }
    pub fn to_grpc<O: Oneof>(v: &Option<O>) -> Option<O::Grpc> {
        v.as_ref().map(O::to_grpc)
    }
    pub fn from_grpc<O: Oneof>(v: Option<O::Grpc>) -> Result<Option<O>> {
        v.map(O::from_grpc).transpose()
    }
    pub fn write_json<O: Oneof>(
        obj: &mut Map<String, Value>,
        _name: crate::json::Key,
        v: &Option<O>,
    ) {
        if let Some(o) = v {
            o.write_json(obj);
        }
    }
    pub fn read_json<O: Oneof>(
        obj: &Map<String, Value>,
        _name: crate::json::Key,
    ) -> Result<Option<O>> {
        O::read_json(obj)
    }
}

/// Member kinds. Unlike fields, a set member is written even when it holds an empty value.
pub mod member {
    pub mod message {
        use crate::convert::{FromGrpc, IntoGrpc};
        use crate::json::{FromJson, ToJson};
        use neofs_api_proto::{proto, Result, StableMarshal, StableSize};
        use serde_json::Value;

        pub fn size<M: StableSize>(field: u32, v: &M) -> usize {
            proto::nested_present_size(field, v)
        }
        pub fn marshal<M: StableMarshal>(field: u32, buf: &mut [u8], v: &M) -> Result<usize> {
            proto::nested_present_marshal(field, buf, v)
        }
        pub fn to_grpc<M: IntoGrpc>(v: &M) -> M::Grpc {
            v.to_grpc()
        }
        pub fn from_grpc<M: FromGrpc>(v: M::Grpc) -> Result<M> {
            M::from_grpc(v)
        }
        pub fn to_json<M: ToJson>(v: &M) -> Value {
            v.to_json()
        }
        pub fn from_json<M: FromJson>(v: &Value) -> Result<M> {
            M::from_json(v)
        }
    }

    pub mod bytes {
        use crate::json;
        use neofs_api_proto::{proto, Result};
        use serde_json::Value;

        pub fn size(field: u32, v: &[u8]) -> usize {
            proto::delimited_size(field, v.len())
        }
        pub fn marshal(field: u32, buf: &mut [u8], v: &[u8]) -> Result<usize> {
            proto::delimited_marshal(field, buf, v)
        }
        pub fn to_grpc(v: &[u8]) -> Vec<u8> {
            v.to_vec()
        }
        pub fn from_grpc(v: Vec<u8>) -> Result<Vec<u8>> {
            Ok(v)
        }
        pub fn to_json(v: &[u8]) -> Value {
            json::bytes_to(v)
        }
        pub fn from_json(v: &Value) -> Result<Vec<u8>> {
            json::bytes_from(Some(v))
        }
    }
}
