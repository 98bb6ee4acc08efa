//! Conversions between the message types and their transport mirrors in [`crate::grpc`].

use neofs_api_proto::Result;

pub trait IntoGrpc {
    type Grpc;

    fn to_grpc(&self) -> Self::Grpc;
}

/// Fails when the transport value cannot be represented.
pub trait FromGrpc: IntoGrpc + Sized {
    fn from_grpc(grpc: Self::Grpc) -> Result<Self>;
}

impl<T: IntoGrpc> IntoGrpc for Box<T> {
    type Grpc = Box<T::Grpc>;

    fn to_grpc(&self) -> Self::Grpc {
        Box::new((**self).to_grpc())
    }
}
impl<T: FromGrpc> FromGrpc for Box<T> {
    fn from_grpc(grpc: Self::Grpc) -> Result<Self> {
        T::from_grpc(*grpc).map(Box::new)
    }
}
