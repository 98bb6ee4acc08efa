//! Response status. Code 0 is success; the message and details are free-form.

use crate::grpc;

stable_message! {
    pub struct Detail => grpc::status::Detail {
        id: u32 = 1 => uint32,
        value: Vec<u8> = 2 => bytes,
    }
}

stable_message! {
    pub struct Status => grpc::status::Status {
        code: u32 = 1 => uint32,
        message: String = 2 => string,
        details: Vec<Detail> = 3 => repeated_message,
    }
}

impl Status {
    pub const OK: u32 = 0;

    pub fn is_ok(&self) -> bool {
        self.code == Self::OK
    }
}
