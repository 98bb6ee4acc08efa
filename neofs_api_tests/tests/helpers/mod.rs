pub mod gen;

use gen::Arbitrary;
use neofs_api_types::{FromGrpc, FromJson, StableMarshal, ToJson, Unmarshal};
use once_cell::sync::Lazy;
use std::fmt::Debug;
use tracing_subscriber::EnvFilter;

/// Everything a message type offers, with prost as the independent reference codec.
pub trait Msg:
    StableMarshal
    + Unmarshal
    + FromGrpc
    + ToJson
    + FromJson
    + Arbitrary
    + PartialEq
    + Clone
    + Default
    + Debug
{
    /// prost's encoding of the transport mirror.
    fn prost_encode(&self) -> Vec<u8>;

    /// prost's decoding into the transport mirror, converted back.
    fn prost_decode(buf: &[u8]) -> anyhow::Result<Self>;
}

impl<M> Msg for M
where
    M: StableMarshal
        + Unmarshal
        + FromGrpc
        + ToJson
        + FromJson
        + Arbitrary
        + PartialEq
        + Clone
        + Default
        + Debug,
    M::Grpc: prost::Message + Default,
{
    fn prost_encode(&self) -> Vec<u8> {
        prost::Message::encode_to_vec(&self.to_grpc())
    }

    fn prost_decode(buf: &[u8]) -> anyhow::Result<Self> {
        let grpc = <M::Grpc as prost::Message>::decode(buf)?;
        Ok(M::from_grpc(grpc)?)
    }
}

static TRACING: Lazy<()> = Lazy::new(|| {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
});

/// Routes `tracing` output through the test harness. Filter with `RUST_LOG`.
pub fn init_tracing() {
    Lazy::force(&TRACING);
}

/// Calls `$check::<M>($args)?` for every message type.
macro_rules! for_each_message {
    ($check:ident ( $($arg:expr),* $(,)? )) => {{
        use neofs_api_types::{
            acl, audit, container, link, lock, netmap, object, refs, session, status,
            storagegroup, tombstone,
        };

        $check::<refs::ObjectId>($($arg),*)?;
        $check::<refs::ContainerId>($($arg),*)?;
        $check::<refs::OwnerId>($($arg),*)?;
        $check::<refs::Address>($($arg),*)?;
        $check::<refs::Version>($($arg),*)?;
        $check::<refs::Signature>($($arg),*)?;
        $check::<refs::SignatureRfc6979>($($arg),*)?;
        $check::<refs::Checksum>($($arg),*)?;

        $check::<object::Attribute>($($arg),*)?;
        $check::<object::ShortHeader>($($arg),*)?;
        $check::<object::Header>($($arg),*)?;
        $check::<object::Split>($($arg),*)?;
        $check::<object::Object>($($arg),*)?;
        $check::<object::SplitInfo>($($arg),*)?;
        $check::<object::HeaderWithSignature>($($arg),*)?;
        $check::<object::Range>($($arg),*)?;
        $check::<object::SearchFilter>($($arg),*)?;
        $check::<object::GetRequestBody>($($arg),*)?;
        $check::<object::GetObjectInit>($($arg),*)?;
        $check::<object::GetResponseBody>($($arg),*)?;
        $check::<object::PutObjectInit>($($arg),*)?;
        $check::<object::PutRequestBody>($($arg),*)?;
        $check::<object::PutResponseBody>($($arg),*)?;
        $check::<object::DeleteRequestBody>($($arg),*)?;
        $check::<object::DeleteResponseBody>($($arg),*)?;
        $check::<object::HeadRequestBody>($($arg),*)?;
        $check::<object::HeadResponseBody>($($arg),*)?;
        $check::<object::SearchRequestBody>($($arg),*)?;
        $check::<object::SearchResponseBody>($($arg),*)?;
        $check::<object::GetRangeRequestBody>($($arg),*)?;
        $check::<object::GetRangeResponseBody>($($arg),*)?;
        $check::<object::GetRangeHashRequestBody>($($arg),*)?;
        $check::<object::GetRangeHashResponseBody>($($arg),*)?;

        $check::<acl::HeaderFilter>($($arg),*)?;
        $check::<acl::Target>($($arg),*)?;
        $check::<acl::Record>($($arg),*)?;
        $check::<acl::Table>($($arg),*)?;
        $check::<acl::TokenLifetime>($($arg),*)?;
        $check::<acl::BearerTokenBody>($($arg),*)?;
        $check::<acl::BearerToken>($($arg),*)?;

        $check::<session::ObjectSessionContext>($($arg),*)?;
        $check::<session::ContainerSessionContext>($($arg),*)?;
        $check::<session::TokenLifetime>($($arg),*)?;
        $check::<session::SessionTokenBody>($($arg),*)?;
        $check::<session::SessionToken>($($arg),*)?;
        $check::<session::XHeader>($($arg),*)?;
        $check::<session::RequestMetaHeader>($($arg),*)?;
        $check::<session::ResponseMetaHeader>($($arg),*)?;
        $check::<session::RequestVerificationHeader>($($arg),*)?;
        $check::<session::ResponseVerificationHeader>($($arg),*)?;

        $check::<status::Detail>($($arg),*)?;
        $check::<status::Status>($($arg),*)?;

        $check::<audit::DataAuditResult>($($arg),*)?;

        $check::<netmap::Replica>($($arg),*)?;
        $check::<netmap::Selector>($($arg),*)?;
        $check::<netmap::Filter>($($arg),*)?;
        $check::<netmap::PlacementPolicy>($($arg),*)?;
        $check::<netmap::NodeAttribute>($($arg),*)?;
        $check::<netmap::NodeInfo>($($arg),*)?;
        $check::<netmap::Netmap>($($arg),*)?;
        $check::<netmap::NetworkParameter>($($arg),*)?;
        $check::<netmap::NetworkConfig>($($arg),*)?;
        $check::<netmap::NetworkInfo>($($arg),*)?;

        $check::<container::ContainerAttribute>($($arg),*)?;
        $check::<container::Container>($($arg),*)?;

        $check::<storagegroup::StorageGroup>($($arg),*)?;

        $check::<tombstone::Tombstone>($($arg),*)?;

        $check::<lock::Lock>($($arg),*)?;

        $check::<link::MeasuredObject>($($arg),*)?;
        $check::<link::Link>($($arg),*)?;
    }};
}
pub(crate) use for_each_message;
