//! Signing messages into [`Signature`] values.
//!
//! The signed data is always the stable encoding of the message, so any party holding the
//! same field values recomputes the same bytes.

use crate::refs::{Signature, SignatureScheme};
use crate::session::{RequestMetaHeader, RequestVerificationHeader};
use neofs_api_proto::signature::{sign_stable, verify_stable, DataSigner, DataVerifier};
use neofs_api_proto::{BufferPool, Error, Result, StableMarshal};

/// A signer that knows its own public key and scheme.
pub trait SignatureIssuer: DataSigner {
    fn public_key(&self) -> Vec<u8>;

    fn scheme(&self) -> SignatureScheme;
}

/// Checks a [`Signature`] against the key and scheme it carries.
pub trait SignatureVerifier {
    fn verify(&self, signature: &Signature, data: &[u8]) -> Result<()>;
}

struct BoundVerifier<'a, V: ?Sized> {
    verifier: &'a V,
    signature: &'a Signature,
}

impl<'a, V: SignatureVerifier + ?Sized> DataVerifier for BoundVerifier<'a, V> {
    fn verify(&self, data: &[u8], _sign: &[u8]) -> Result<()> {
        self.verifier.verify(self.signature, data)
    }
}

pub fn sign_message<M, S>(pool: &BufferPool, msg: &M, issuer: &S) -> Result<Signature>
where
    M: StableMarshal,
    S: SignatureIssuer + ?Sized,
{
    let sign = sign_stable(pool, msg, issuer)?;
    tracing::trace!(len = sign.len(), scheme = ?issuer.scheme(), "signed message");
    Ok(Signature {
        key: issuer.public_key(),
        sign,
        scheme: issuer.scheme(),
    })
}

pub fn verify_message<M, V>(
    pool: &BufferPool,
    msg: &M,
    signature: &Signature,
    verifier: &V,
) -> Result<()>
where
    M: StableMarshal,
    V: SignatureVerifier + ?Sized,
{
    let bound = BoundVerifier {
        verifier,
        signature,
    };
    verify_stable(pool, msg, &signature.sign, &bound)
}

/// Builds the verification header of one request hop.
///
/// The body is signed only by the first hop, the one without an `origin`. Every hop signs
/// its meta header and the verification header it received.
pub fn sign_request<B, S>(
    pool: &BufferPool,
    body: &B,
    meta: &RequestMetaHeader,
    origin: Option<RequestVerificationHeader>,
    issuer: &S,
) -> Result<RequestVerificationHeader>
where
    B: StableMarshal,
    S: SignatureIssuer + ?Sized,
{
    let body_signature = if origin.is_none() {
        Some(sign_message(pool, body, issuer)?)
    } else {
        None
    };
    Ok(RequestVerificationHeader {
        body_signature,
        meta_signature: Some(sign_message(pool, meta, issuer)?),
        origin_signature: Some(sign_message(pool, &origin, issuer)?),
        origin: origin.map(Box::new),
    })
}

/// Walks the `origin` chains of the meta and verification headers in step, checking every
/// signature on the way.
///
/// The two chains must have the same length.
pub fn verify_request<B, V>(
    pool: &BufferPool,
    body: &B,
    meta: &RequestMetaHeader,
    verification: &RequestVerificationHeader,
    verifier: &V,
) -> Result<()>
where
    B: StableMarshal,
    V: SignatureVerifier + ?Sized,
{
    let mut meta = meta;
    let mut header = verification;
    loop {
        let meta_signature = header
            .meta_signature
            .as_ref()
            .ok_or_else(|| Error::signature("missing meta signature"))?;
        verify_message(pool, meta, meta_signature, verifier)?;

        let origin_signature = header
            .origin_signature
            .as_ref()
            .ok_or_else(|| Error::signature("missing origin signature"))?;
        verify_message(pool, &header.origin, origin_signature, verifier)?;

        match (&header.origin, &meta.origin) {
            (Some(origin), Some(meta_origin)) => {
                header = &**origin;
                meta = &**meta_origin;
            }
            (None, None) => {
                let body_signature = header
                    .body_signature
                    .as_ref()
                    .ok_or_else(|| Error::signature("missing body signature"))?;
                return verify_message(pool, body, body_signature, verifier);
            }
            (Some(_), None) => {
                return Err(Error::signature("more verification hops than meta headers"));
            }
            (None, Some(_)) => {
                return Err(Error::signature("more meta headers than verification hops"));
            }
        }
    }
}
