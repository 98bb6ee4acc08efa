use anyhow::Result;
use neofs_api_proto::{DecodeConfig, Error};
use neofs_api_types::grpc;
use neofs_api_types::object::{Attribute, GetResponseBody, Header, Object, ObjectType};
use neofs_api_types::refs::{Address, Checksum, ChecksumType, Signature, SignatureScheme, Version};
use neofs_api_types::{ProtoEnum, StableMarshal, StableSize, Unmarshal};
use prost::Message;

fn is_decode_error<T>(res: neofs_api_types::Result<T>) -> bool {
    matches!(res, Err(Error::Decode(_)))
}

pub fn rejects_malformed_bytes() -> Result<()> {
    /* Length prefix runs past the end. */
    assert!(is_decode_error(Address::unmarshal(&[0x0a, 0x05, 0x01])));

    /* Strings must be UTF-8. */
    assert!(is_decode_error(Attribute::unmarshal(&[0x0a, 0x01, 0xff])));

    /* Varint longer than ten bytes. */
    let mut overlong = vec![0x08];
    overlong.extend([0xff; 10]);
    overlong.push(0x01);
    assert!(is_decode_error(Version::unmarshal(&overlong)));

    /* Truncated varint. */
    assert!(is_decode_error(Version::unmarshal(&[0x08, 0x80])));

    /* A varint field sent length-delimited. */
    assert!(is_decode_error(Version::unmarshal(&[0x0a, 0x00])));

    /* Field number zero. */
    assert!(is_decode_error(Version::unmarshal(&[0x00, 0x01])));

    Ok(())
}

pub fn skips_unknown_fields() -> Result<()> {
    let version = Version::unmarshal(&[0x08, 0x02, 0x78, 0x05, 0x10, 0x0d])?;
    assert_eq!(Version { major: 2, minor: 13 }, version);
    Ok(())
}

pub fn keeps_unknown_enum_values() -> Result<()> {
    let sum = Checksum::unmarshal(&[0x08, 0x07])?;
    assert_eq!(ChecksumType::Unknown(7), sum.checksum_type);
    assert_eq!(vec![0x08, 0x07], sum.stable_marshal()?);

    /* Negative values are ten-byte varints on the wire. */
    let mut negative = vec![0x18];
    negative.extend([0xff; 9]);
    negative.push(0x01);
    let sig = Signature::unmarshal(&negative)?;
    assert_eq!(SignatureScheme::Unknown(-1), sig.scheme);
    assert_eq!(-1, sig.scheme.value());
    assert_eq!(negative, sig.stable_marshal()?);

    /* A header from a node that knows more object types. */
    let newer = grpc::object::Header {
        object_type: 5,
        creation_epoch: 7,
        ..Default::default()
    };
    let bytes = newer.encode_to_vec();
    let header = Header::unmarshal(&bytes)?;
    assert_eq!(ObjectType::Unknown(5), header.object_type);
    assert_eq!(7, header.creation_epoch);
    assert_eq!(bytes, header.stable_marshal()?);
    assert_eq!(header.stable_size(), bytes.len());

    Ok(())
}

pub fn bounded_unmarshal() -> Result<()> {
    let obj = Object {
        payload: vec![7; 1000],
        ..Default::default()
    };
    let bytes = obj.stable_marshal()?;
    assert_eq!(1003, bytes.len());

    let exact = DecodeConfig {
        max_message_size: obj.stable_size(),
    };
    assert_eq!(obj, Object::unmarshal_bounded(&bytes, &exact)?);

    let tight = DecodeConfig {
        max_message_size: 1002,
    };
    assert_eq!(
        Err(Error::MessageTooLarge {
            size: 1003,
            max: 1002
        }),
        Object::unmarshal_bounded(&bytes, &tight)
    );

    /* The limit applies before any parsing, even to garbage. */
    let garbage = vec![0xff; 64];
    let small = DecodeConfig {
        max_message_size: 16,
    };
    assert!(matches!(
        GetResponseBody::unmarshal_bounded(&garbage, &small),
        Err(Error::MessageTooLarge { .. })
    ));

    let config: DecodeConfig = serde_json::from_str(r#"{"max_message_size": 16}"#)?;
    assert_eq!(small, config);
    assert_eq!(DecodeConfig::default(), serde_json::from_str::<DecodeConfig>("{}")?);

    Ok(())
}
