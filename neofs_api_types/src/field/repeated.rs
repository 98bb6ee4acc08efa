/* Every element is written, in order, including empty ones. */

pub mod repeated_message {
    use crate::convert::{FromGrpc, IntoGrpc};
    use crate::json::{self, FromJson, ToJson};
    use neofs_api_proto::{proto, Result, StableMarshal, StableSize};
    use serde_json::{Map, Value};

    pub fn size<M: StableSize>(field: u32, v: &Vec<M>) -> usize {
        proto::repeated_nested_size(field, v)
    }
    pub fn marshal<M: StableMarshal>(field: u32, buf: &mut [u8], v: &Vec<M>) -> Result<usize> {
        proto::repeated_nested_marshal(field, buf, v)
    }
    pub fn to_grpc<M: IntoGrpc>(v: &Vec<M>) -> Vec<M::Grpc> {
        v.iter().map(IntoGrpc::to_grpc).collect()
    }
    pub fn from_grpc<M: FromGrpc>(v: Vec<M::Grpc>) -> Result<Vec<M>> {
        v.into_iter().map(M::from_grpc).collect()
    }
    pub fn write_json<M: ToJson>(obj: &mut Map<String, Value>, name: crate::json::Key, v: &Vec<M>) {
        let values = v.iter().map(ToJson::to_json).collect();
        crate::field::insert(obj, name, Value::Array(values));
    }
    pub fn read_json<M: FromJson>(
        obj: &Map<String, Value>,
        name: crate::json::Key,
    ) -> Result<Vec<M>> {
        json::expect_array(json::lookup(obj, name))?
            .iter()
            .map(M::from_json)
            .collect()
    }
}

pub mod repeated_bytes {
    use crate::json;
    use neofs_api_proto::{proto, Result};
    use serde_json::{Map, Value};

    pub fn size(field: u32, v: &Vec<Vec<u8>>) -> usize {
        proto::repeated_bytes_size(field, v)
    }
    pub fn marshal(field: u32, buf: &mut [u8], v: &Vec<Vec<u8>>) -> Result<usize> {
        proto::repeated_bytes_marshal(field, buf, v)
    }
    pub fn to_grpc(v: &Vec<Vec<u8>>) -> Vec<Vec<u8>> {
        v.clone()
    }
    pub fn from_grpc(v: Vec<Vec<u8>>) -> Result<Vec<Vec<u8>>> {
        Ok(v)
    }
    fn to_json(v: &Vec<Vec<u8>>) -> Value {
        Value::Array(v.iter().map(|b| json::bytes_to(b)).collect())
    }
    fn from_json(v: Option<&Value>) -> Result<Vec<Vec<u8>>> {
        json::expect_array(v)?
            .iter()
            .map(|b| json::bytes_from(Some(b)))
            .collect()
    }
    json_by_value!(Vec<Vec<u8>>);
}

pub mod repeated_string {
    use crate::json;
    use neofs_api_proto::{proto, Result};
    use serde_json::{Map, Value};

    pub fn size(field: u32, v: &Vec<String>) -> usize {
        proto::repeated_string_size(field, v)
    }
    pub fn marshal(field: u32, buf: &mut [u8], v: &Vec<String>) -> Result<usize> {
        proto::repeated_string_marshal(field, buf, v)
    }
    pub fn to_grpc(v: &Vec<String>) -> Vec<String> {
        v.clone()
    }
    pub fn from_grpc(v: Vec<String>) -> Result<Vec<String>> {
        Ok(v)
    }
    fn to_json(v: &Vec<String>) -> Value {
        Value::Array(v.iter().cloned().map(Value::String).collect())
    }
    fn from_json(v: Option<&Value>) -> Result<Vec<String>> {
        json::expect_array(v)?
            .iter()
            .map(|s| json::string_from(Some(s)))
            .collect()
    }
    json_by_value!(Vec<String>);
}
