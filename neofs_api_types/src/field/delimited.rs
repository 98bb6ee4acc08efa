pub mod bytes {
    use crate::json;
    use neofs_api_proto::{proto, Result};
    use serde_json::{Map, Value};

    pub fn size(field: u32, v: &Vec<u8>) -> usize {
        proto::bytes_size(field, v)
    }
    pub fn marshal(field: u32, buf: &mut [u8], v: &Vec<u8>) -> Result<usize> {
        proto::bytes_marshal(field, buf, v)
    }
    pub fn to_grpc(v: &Vec<u8>) -> Vec<u8> {
        v.clone()
    }
    pub fn from_grpc(v: Vec<u8>) -> Result<Vec<u8>> {
        Ok(v)
    }
    fn to_json(v: &Vec<u8>) -> Value {
        json::bytes_to(v)
    }
    fn from_json(v: Option<&Value>) -> Result<Vec<u8>> {
        json::bytes_from(v)
    }
    json_by_value!(Vec<u8>);
}

pub mod string {
    use crate::json;
    use neofs_api_proto::{proto, Result};
    use serde_json::{Map, Value};

    pub fn size(field: u32, v: &String) -> usize {
        proto::string_size(field, v)
    }
    pub fn marshal(field: u32, buf: &mut [u8], v: &String) -> Result<usize> {
        proto::string_marshal(field, buf, v)
    }
    pub fn to_grpc(v: &String) -> String {
        v.clone()
    }
    pub fn from_grpc(v: String) -> Result<String> {
        Ok(v)
    }
    fn to_json(v: &String) -> Value {
        Value::String(v.clone())
    }
    fn from_json(v: Option<&Value>) -> Result<String> {
        json::string_from(v)
    }
    json_by_value!(String);
}
