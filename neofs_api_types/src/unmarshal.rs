use crate::convert::FromGrpc;
use neofs_api_proto::{DecodeConfig, Error, Result};
use prost::Message;
use std::any;

/// Decodes wire bytes: first into the transport mirror with prost, then field by field into `Self`.
pub trait Unmarshal: Sized {
    fn unmarshal(buf: &[u8]) -> Result<Self>;

    /// Refuses input larger than `config.max_message_size` before decoding any of it.
    fn unmarshal_bounded(buf: &[u8], config: &DecodeConfig) -> Result<Self> {
        if buf.len() > config.max_message_size {
            tracing::debug!(
                size = buf.len(),
                max = config.max_message_size,
                "refusing to decode {}",
                any::type_name::<Self>()
            );
            return Err(Error::MessageTooLarge {
                size: buf.len(),
                max: config.max_message_size,
            });
        }
        Self::unmarshal(buf)
    }
}

impl<T> Unmarshal for T
where
    T: FromGrpc,
    T::Grpc: Message + Default,
{
    fn unmarshal(buf: &[u8]) -> Result<Self> {
        let grpc = <T::Grpc as Message>::decode(buf).map_err(|e| {
            tracing::debug!(len = buf.len(), "{}: {e}", any::type_name::<T>());
            Error::decode(e.to_string())
        })?;
        T::from_grpc(grpc).map_err(|e| {
            tracing::debug!("{}: {e}", any::type_name::<T>());
            e
        })
    }
}
