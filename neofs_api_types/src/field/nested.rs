/// An optional nested message. `None` is omitted on the wire and is `null` in JSON.
pub mod message {
    use crate::convert::{FromGrpc, IntoGrpc};
    use crate::json::{self, FromJson, ToJson};
    use neofs_api_proto::{proto, Result, StableMarshal, StableSize};
    use serde_json::{Map, Value};

    pub fn size<M: StableSize>(field: u32, v: &Option<M>) -> usize {
        proto::nested_size(field, v.as_ref())
    }
    pub fn marshal<M: StableMarshal>(field: u32, buf: &mut [u8], v: &Option<M>) -> Result<usize> {
        proto::nested_marshal(field, buf, v.as_ref())
    }
    pub fn to_grpc<M: IntoGrpc>(v: &Option<M>) -> Option<M::Grpc> {
        v.as_ref().map(IntoGrpc::to_grpc)
    }
    pub fn from_grpc<M: FromGrpc>(v: Option<M::Grpc>) -> Result<Option<M>> {
        v.map(M::from_grpc).transpose()
    }
    pub fn write_json<M: ToJson>(
        obj: &mut Map<String, Value>,
        name: crate::json::Key,
        v: &Option<M>,
    ) {
        let value = v.as_ref().map_or(Value::Null, ToJson::to_json);
        crate::field::insert(obj, name, value);
    }
    pub fn read_json<M: FromJson>(
        obj: &Map<String, Value>,
        name: crate::json::Key,
    ) -> Result<Option<M>> {
        json::lookup(obj, name).map(M::from_json).transpose()
    }
}
