use super::super::helpers::gen::Gen;
use anyhow::Result;
use neofs_api_proto::signature::DataSigner;
use neofs_api_proto::{BufferPool, Error, PoolConfig};
use neofs_api_types::object::Header;
use neofs_api_types::refs::{Signature, SignatureScheme};
use neofs_api_types::session::RequestMetaHeader;
use neofs_api_types::signature::{sign_message, verify_message, SignatureIssuer, SignatureVerifier};
use neofs_api_types::{StableMarshal, StableSize};
use sha2::{Digest, Sha512};
use std::thread;

struct DigestKey(Vec<u8>);

impl DataSigner for DigestKey {
    fn sign(&self, data: &[u8]) -> neofs_api_types::Result<Vec<u8>> {
        let mut hasher = Sha512::new();
        hasher.update(&self.0);
        hasher.update(data);
        Ok(hasher.finalize().to_vec())
    }
}

impl SignatureIssuer for DigestKey {
    fn public_key(&self) -> Vec<u8> {
        self.0.clone()
    }

    fn scheme(&self) -> SignatureScheme {
        SignatureScheme::EcdsaSha512
    }
}

struct DigestVerifier;

impl SignatureVerifier for DigestVerifier {
    fn verify(&self, signature: &Signature, data: &[u8]) -> neofs_api_types::Result<()> {
        if DigestKey(signature.key.clone()).sign(data)? == signature.sign {
            Ok(())
        } else {
            Err(Error::signature("digest mismatch"))
        }
    }
}

/// The signature covers the stable bytes and nothing else.
pub fn signature_covers_stable_bytes() -> Result<()> {
    let pool = BufferPool::default();
    let mut g = Gen::new(7, 3);
    let key = DigestKey(vec![2; 33]);

    for _ in 0..20 {
        let header = g.gen::<Header>();
        let sig = sign_message(&pool, &header, &key)?;
        assert_eq!(key.sign(&header.stable_marshal()?)?, sig.sign);
        verify_message(&pool, &header, &sig, &DigestVerifier)?;

        let mut other = header.clone();
        other.creation_epoch = other.creation_epoch.wrapping_add(1);
        assert!(verify_message(&pool, &other, &sig, &DigestVerifier).is_err());
    }
    Ok(())
}

/// Many threads sign through one pool; it never holds more than its limit.
pub fn shared_pool_under_contention() -> Result<()> {
    let pool = BufferPool::new(PoolConfig {
        max_pooled: 4,
        max_retained_capacity: 1 << 16,
    });

    thread::scope(|s| {
        let handles = (0..8u64)
            .map(|t| {
                let pool = &pool;
                s.spawn(move || -> Result<()> {
                    let mut g = Gen::new(t, 2);
                    let key = DigestKey(vec![t as u8; 33]);
                    for _ in 0..50 {
                        let meta = g.gen::<RequestMetaHeader>();
                        let sig = sign_message(pool, &meta, &key)?;
                        verify_message(pool, &meta, &sig, &DigestVerifier)?;
                    }
                    Ok(())
                })
            })
            .collect::<Vec<_>>();
        handles
            .into_iter()
            .try_for_each(|h| h.join().map_err(|_| anyhow::anyhow!("signer panicked"))?)
    })?;

    assert!(*pool.pooled() <= 4);
    Ok(())
}

/// Buffers larger than the retained capacity are dropped on release.
pub fn pool_drops_oversized_buffers() -> Result<()> {
    let pool = BufferPool::new(PoolConfig {
        max_pooled: 4,
        max_retained_capacity: 64,
    });
    let key = DigestKey(vec![1; 33]);

    let small = RequestMetaHeader {
        epoch: 1,
        ..Default::default()
    };
    sign_message(&pool, &small, &key)?;
    assert_eq!(1, *pool.pooled());

    let large = Header {
        payload_length: 1,
        attributes: vec![Default::default(); 64],
        ..Default::default()
    };
    assert!(large.stable_size() > 64);
    sign_message(&pool, &large, &key)?;
    assert_eq!(1, *pool.pooled());
    Ok(())
}
