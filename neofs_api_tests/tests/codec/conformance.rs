use super::super::helpers::{gen::Gen, Msg};
use anyhow::Result;
use itertools::Itertools;
use neofs_api_proto::{proto, Error};
use neofs_api_types::{StableMarshal, StableSize};
use serde_json::json;
use std::any;

/// The zero message encodes to nothing, decodes from nothing, and so does an absent one.
pub fn defaults<M: Msg>() -> Result<()> {
    let name = any::type_name::<M>();
    let m = M::default();

    assert_eq!(0, m.stable_size(), "{name}");
    assert_eq!(Vec::<u8>::new(), m.stable_marshal()?, "{name}");
    assert_eq!(Vec::<u8>::new(), m.prost_encode(), "{name}");
    assert_eq!(m, M::unmarshal(&[])?, "{name}");

    assert_eq!(0, None::<M>.stable_size(), "{name}");
    assert_eq!(Vec::<u8>::new(), None::<M>.stable_marshal()?, "{name}");

    assert_eq!(m, M::from_json(&json!({}))?, "{name}");
    assert_eq!(m, M::from_json(&m.to_json())?, "{name}");

    Ok(())
}

/// Randomly populated messages: sizes agree, bytes match prost, every decoder restores the value.
pub fn random<M: Msg>(g: &mut Gen, rounds: usize) -> Result<()> {
    let name = any::type_name::<M>();

    for _ in 0..rounds {
        let m = g.gen::<M>();

        let bytes = m.stable_marshal()?;
        assert_eq!(m.stable_size(), bytes.len(), "{name}");
        assert_eq!(m.prost_encode(), bytes, "{name}: {m:?}");

        assert_eq!(m, M::unmarshal(&bytes)?, "{name}");
        assert_eq!(m, M::prost_decode(&bytes)?, "{name}");

        let fields = proto::field_numbers(&bytes)?;
        assert!(
            fields.iter().tuple_windows().all(|(a, b)| a <= b),
            "{name}: fields out of order {fields:?}"
        );

        assert_eq!(m, M::from_json(&m.to_json())?, "{name}");
        assert_eq!(m, M::from_json_str(&m.to_json_string())?, "{name}");

        /* Exactly the prefix is written into a larger buffer. */
        let mut big = vec![0xa5; bytes.len() + 7];
        assert_eq!(bytes.len(), m.stable_marshal_into(&mut big)?, "{name}");
        assert_eq!(&bytes[..], &big[..bytes.len()], "{name}");
        assert!(big[bytes.len()..].iter().all(|b| *b == 0xa5), "{name}");

        if !bytes.is_empty() {
            let mut short = vec![0; bytes.len() - 1];
            assert!(
                matches!(m.stable_marshal_into(&mut short), Err(Error::BufferTooSmall { .. })),
                "{name}"
            );
        }
    }

    Ok(())
}
