use neofs_api_types::object::{GetObjectPart, HeadPart, PutObjectPart, RangePart};
use neofs_api_types::session::SessionContext;
use neofs_api_types::{
    acl, audit, container, link, lock, netmap, object, refs, session, status, storagegroup,
    tombstone, ProtoEnum,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Source of randomly populated messages. Nesting stops at `depth`.
pub struct Gen {
    rng: StdRng,
    depth: u32,
}

impl Gen {
    pub fn new(seed: u64, depth: u32) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            depth,
        }
    }

    pub fn gen<T: Arbitrary>(&mut self) -> T {
        T::arbitrary(self)
    }

    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> Option<T> {
        if self.depth == 0 {
            return None;
        }
        self.depth -= 1;
        let t = f(self);
        self.depth += 1;
        Some(t)
    }

    /// About a third of the scalars come out as zero, to exercise omission.
    fn zero(&mut self) -> bool {
        self.rng.gen_bool(0.3)
    }
}

pub trait Arbitrary: Sized {
    /// Leaves are generated in long runs without consuming depth.
    const LEAF: bool = false;

    fn arbitrary(g: &mut Gen) -> Self;
}

impl Arbitrary for u8 {
    const LEAF: bool = true;

    fn arbitrary(g: &mut Gen) -> Self {
        g.rng.gen()
    }
}

impl Arbitrary for u32 {
    fn arbitrary(g: &mut Gen) -> Self {
        if g.zero() {
            0
        } else {
            g.rng.gen()
        }
    }
}

impl Arbitrary for u64 {
    fn arbitrary(g: &mut Gen) -> Self {
        if g.zero() {
            0
        } else {
            g.rng.gen()
        }
    }
}

impl Arbitrary for i64 {
    fn arbitrary(g: &mut Gen) -> Self {
        if g.zero() {
            0
        } else {
            g.rng.gen()
        }
    }
}

impl Arbitrary for bool {
    fn arbitrary(g: &mut Gen) -> Self {
        g.rng.gen()
    }
}

impl Arbitrary for String {
    fn arbitrary(g: &mut Gen) -> Self {
        const WORDS: &[&str] = &["", "a", "Name", "$Object:ownerID", "ключ", "日本", "x y", "\"q\""];
        let n = g.rng.gen_range(0..=3);
        (0..n)
            .map(|_| *WORDS.choose(&mut g.rng).unwrap_or(&""))
            .collect()
    }
}

impl<T: Arbitrary> Arbitrary for Vec<T> {
    fn arbitrary(g: &mut Gen) -> Self {
        if T::LEAF {
            let n = if g.zero() { 0 } else { g.rng.gen_range(1..=48) };
            return (0..n).map(|_| T::arbitrary(g)).collect();
        }
        g.nested(|g| {
            let n = g.rng.gen_range(0..=3);
            (0..n).map(|_| T::arbitrary(g)).collect()
        })
        .unwrap_or_default()
    }
}

impl<T: Arbitrary> Arbitrary for Option<T> {
    fn arbitrary(g: &mut Gen) -> Self {
        if g.rng.gen_bool(0.25) {
            return None;
        }
        g.nested(T::arbitrary)
    }
}

impl<T: Arbitrary> Arbitrary for Box<T> {
    fn arbitrary(g: &mut Gen) -> Self {
        Box::new(T::arbitrary(g))
    }
}

macro_rules! arbitrary_enum {
    ($( $t:ty = $max:literal ),+ $(,)?) => {
        $(
            impl Arbitrary for $t {
                // One past the last declared value comes out as `Unknown`.
                fn arbitrary(g: &mut Gen) -> Self {
                    let value = g.rng.gen_range(0..=$max + 1);
                    <$t as ProtoEnum>::from_value(value)
                }
            }
        )+
    };
}

macro_rules! arbitrary_message {
    ($( $t:ty { $($field:ident),+ $(,)? } )+) => {
        $(
            impl Arbitrary for $t {
                fn arbitrary(g: &mut Gen) -> Self {
                    Self {
                        $( $field: g.gen(), )+
                    }
                }
            }
        )+
    };
}

arbitrary_enum! {
    refs::ChecksumType = 2,
    refs::SignatureScheme = 3,
    object::ObjectType = 4,
    object::MatchType = 4,
    acl::Role = 3,
    acl::MatchType = 2,
    acl::Operation = 7,
    acl::Action = 2,
    acl::HeaderType = 3,
    session::ObjectSessionVerb = 7,
    session::ContainerSessionVerb = 3,
    netmap::Operation = 8,
    netmap::Clause = 2,
    netmap::NodeState = 3,
}

arbitrary_message! {
    refs::ObjectId { value }
    refs::ContainerId { value }
    refs::OwnerId { value }
    refs::Address { container_id, object_id }
    refs::Version { major, minor }
    refs::Signature { key, sign, scheme }
    refs::SignatureRfc6979 { key, sign }
    refs::Checksum { checksum_type, sum }

    object::Attribute { key, value }
    object::ShortHeader {
        version, creation_epoch, owner_id, object_type, payload_length, payload_hash,
        homomorphic_hash,
    }
    object::Header {
        version, container_id, owner_id, creation_epoch, payload_length, payload_hash,
        object_type, homomorphic_hash, session_token, attributes, split,
    }
    object::Split { parent, previous, parent_signature, parent_header, children, split_id, first }
    object::Object { object_id, signature, header, payload }
    object::SplitInfo { split_id, last_part, link, first_part }
    object::HeaderWithSignature { header, signature }
    object::Range { offset, length }
    object::SearchFilter { match_type, key, value }
    object::GetRequestBody { address, raw }
    object::GetObjectInit { object_id, signature, header }
    object::GetResponseBody { object_part }
    object::PutObjectInit { object_id, signature, header, copies_number }
    object::PutRequestBody { object_part }
    object::PutResponseBody { object_id }
    object::DeleteRequestBody { address }
    object::DeleteResponseBody { tombstone }
    object::HeadRequestBody { address, main_only, raw }
    object::HeadResponseBody { head }
    object::SearchRequestBody { container_id, version, filters }
    object::SearchResponseBody { id_list }
    object::GetRangeRequestBody { address, range, raw }
    object::GetRangeResponseBody { range_part }
    object::GetRangeHashRequestBody { address, ranges, salt, checksum_type }
    object::GetRangeHashResponseBody { checksum_type, hash_list }

    acl::HeaderFilter { header_type, match_type, key, value }
    acl::Target { role, keys }
    acl::Record { operation, action, filters, targets }
    acl::Table { version, container_id, records }
    acl::TokenLifetime { exp, nbf, iat }
    acl::BearerTokenBody { eacl_table, owner_id, lifetime }
    acl::BearerToken { body, signature }

    session::ObjectSessionContext { verb, address }
    session::ContainerSessionContext { verb, wildcard, container_id }
    session::TokenLifetime { exp, nbf, iat }
    session::SessionTokenBody { id, owner_id, lifetime, session_key, context }
    session::SessionToken { body, signature }
    session::XHeader { key, value }
    session::RequestMetaHeader {
        version, epoch, ttl, x_headers, session_token, bearer_token, origin, magic_number,
    }
    session::ResponseMetaHeader { version, epoch, ttl, x_headers, origin, status }
    session::RequestVerificationHeader { body_signature, meta_signature, origin_signature, origin }
    session::ResponseVerificationHeader { body_signature, meta_signature, origin_signature, origin }

    status::Detail { id, value }
    status::Status { code, message, details }

    audit::DataAuditResult {
        version, audit_epoch, container_id, public_key, complete, requests, retries, pass_sg,
        fail_sg, hit, miss, fail, pass_nodes, fail_nodes,
    }

    netmap::Replica { count, selector }
    netmap::Selector { name, count, clause, attribute, filter }
    netmap::Filter { name, key, op, value, filters }
    netmap::PlacementPolicy { replicas, container_backup_factor, selectors, filters }
    netmap::NodeAttribute { key, value, parents }
    netmap::NodeInfo { public_key, addresses, attributes, state }
    netmap::Netmap { epoch, nodes }
    netmap::NetworkParameter { key, value }
    netmap::NetworkConfig { parameters }
    netmap::NetworkInfo { current_epoch, magic_number, ms_per_block, network_config }

    container::ContainerAttribute { key, value }
    container::Container { version, owner_id, nonce, basic_acl, attributes, placement_policy }

    storagegroup::StorageGroup { validation_data_size, validation_hash, expiration_epoch, members }

    tombstone::Tombstone { expiration_epoch, split_id, members }

    lock::Lock { members }

    link::MeasuredObject { id, size }
    link::Link { children }
}

impl Arbitrary for GetObjectPart {
    fn arbitrary(g: &mut Gen) -> Self {
        match g.rng.gen_range(0..3) {
            0 => Self::Init(g.gen()),
            1 => Self::Chunk(g.gen()),
            _ => Self::SplitInfo(g.gen()),
        }
    }
}

impl Arbitrary for PutObjectPart {
    fn arbitrary(g: &mut Gen) -> Self {
        match g.rng.gen_range(0..2) {
            0 => Self::Init(g.gen()),
            _ => Self::Chunk(g.gen()),
        }
    }
}

impl Arbitrary for HeadPart {
    fn arbitrary(g: &mut Gen) -> Self {
        match g.rng.gen_range(0..3) {
            0 => Self::Header(g.gen()),
            1 => Self::ShortHeader(g.gen()),
            _ => Self::SplitInfo(g.gen()),
        }
    }
}

impl Arbitrary for RangePart {
    fn arbitrary(g: &mut Gen) -> Self {
        match g.rng.gen_range(0..2) {
            0 => Self::Chunk(g.gen()),
            _ => Self::SplitInfo(g.gen()),
        }
    }
}

impl Arbitrary for SessionContext {
    fn arbitrary(g: &mut Gen) -> Self {
        match g.rng.gen_range(0..2) {
            0 => Self::Object(g.gen()),
            _ => Self::Container(g.gen()),
        }
    }
}
