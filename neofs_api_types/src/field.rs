//! Field kinds. Every kind module exposes the same six functions, which
//! `stable_message!` calls with the field number and the field's value:
//!
//! - `size` and `marshal`, delegating to the encoders in [`neofs_api_proto::proto`];
//! - `to_grpc` and `from_grpc`, converting to and from the transport mirror's field type;
//! - `write_json` and `read_json`, for the JSON mapping.

use serde_json::{Map, Value};

/// `write_json`/`read_json` for kinds whose JSON value depends only on the field value.
macro_rules! json_by_value {
    ($t:ty) => {
        pub fn write_json(obj: &mut Map<String, Value>, name: crate::json::Key, v: &$t) {
            crate::field::insert(obj, name, to_json(v));
        }
        pub fn read_json(obj: &Map<String, Value>, name: crate::json::Key) -> Result<$t> {
            from_json(crate::json::lookup(obj, name))
        }
    };
}

mod choice;
mod delimited;
mod nested;
mod repeated;
mod scalar;

pub use choice::{member, oneof, Oneof};
pub use delimited::{bytes, string};
pub use nested::message;
pub use repeated::{repeated_bytes, repeated_message, repeated_string};
pub use scalar::{boolean, enumeration, fixed64, int64, uint32, uint64};

pub(crate) fn insert(obj: &mut Map<String, Value>, key: impl Into<crate::json::Key>, value: Value) {
    obj.insert(key.into().json_name(), value);
}
