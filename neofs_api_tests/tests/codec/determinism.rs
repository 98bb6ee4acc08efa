use super::super::helpers::{gen::Gen, Msg};
use anyhow::Result;
use itertools::Itertools;
use neofs_api_types::object::{Attribute, Header, ObjectType, Split};
use neofs_api_types::refs::{Checksum, ChecksumType, ContainerId, ObjectId, OwnerId, Version};
use neofs_api_types::StableMarshal;
use rand::seq::SliceRandom;
use std::any;

type Setter = Box<dyn Fn(&mut Header)>;

fn header_setters() -> Vec<Setter> {
    vec![
        Box::new(|h: &mut Header| h.version = Some(Version { major: 2, minor: 18 })),
        Box::new(|h: &mut Header| h.container_id = Some(ContainerId::new(vec![1; 32]))),
        Box::new(|h: &mut Header| h.owner_id = Some(OwnerId::new(vec![0x35; 25]))),
        Box::new(|h: &mut Header| h.creation_epoch = 1234),
        Box::new(|h: &mut Header| h.object_type = ObjectType::StorageGroup),
        Box::new(|h: &mut Header| {
            h.payload_hash = Some(Checksum {
                checksum_type: ChecksumType::Sha256,
                sum: vec![0xcd; 32],
            })
        }),
        Box::new(|h: &mut Header| {
            h.attributes = vec![Attribute {
                key: "Name".into(),
                value: "x".into(),
            }]
        }),
        Box::new(|h: &mut Header| {
            h.split = Some(Split {
                parent: Some(ObjectId::new(vec![2; 32])),
                ..Default::default()
            })
        }),
    ]
}

/// Assigning the same fields in any order yields the same bytes.
pub fn construction_order() -> Result<()> {
    let setters = header_setters();

    let mut expected = Header::default();
    setters.iter().for_each(|set| set(&mut expected));
    let expected = expected.stable_marshal()?;

    for order in (0..setters.len()).permutations(4) {
        let mut rest = (0..setters.len()).filter(|i| !order.contains(i)).collect::<Vec<_>>();
        rest.shuffle(&mut rand::thread_rng());

        let mut header = Header::default();
        for i in order.into_iter().chain(rest) {
            setters[i](&mut header);
        }
        assert_eq!(expected, header.stable_marshal()?);
    }

    Ok(())
}

/// Marshaling is a pure function of the field values.
pub fn repeatable<M: Msg>(g: &mut Gen) -> Result<()> {
    let name = any::type_name::<M>();

    let m = g.gen::<M>();
    let copy = m.clone();
    let first = m.stable_marshal()?;
    assert_eq!(first, m.stable_marshal()?, "{name}");
    assert_eq!(first, copy.stable_marshal()?, "{name}");

    let decoded = M::unmarshal(&first)?;
    assert_eq!(first, decoded.stable_marshal()?, "{name}");

    Ok(())
}
