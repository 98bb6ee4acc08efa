use crate::error::Result;
use crate::pool::BufferPool;
use crate::stable::StableMarshal;

/// Produces a signature over the stable bytes of a message.
pub trait DataSigner {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>>;
}

/// Checks a signature over the stable bytes of a message.
pub trait DataVerifier {
    fn verify(&self, data: &[u8], signature: &[u8]) -> Result<()>;
}

/// The bytes a signature covers: exactly the stable encoding of `msg`.
pub struct StableDataSource<'m, M> {
    msg: &'m M,
}

impl<'m, M: StableMarshal> StableDataSource<'m, M> {
    pub fn new(msg: &'m M) -> Self {
        Self { msg }
    }

    pub fn signed_data_size(&self) -> usize {
        self.msg.stable_size()
    }

    /// Writes the signed data to the front of `buf` and returns that prefix.
    pub fn read_signed_data<'b>(&self, buf: &'b mut [u8]) -> Result<&'b [u8]> {
        let w_len = self.msg.stable_marshal_into(buf)?;
        Ok(&buf[..w_len])
    }

    /// Runs `f` over the signed data, using a scratch buffer borrowed from `pool`.
    pub fn with_signed_data<T>(
        &self,
        pool: &BufferPool,
        f: impl FnOnce(&[u8]) -> Result<T>,
    ) -> Result<T> {
        let mut buf = pool.acquire(self.signed_data_size());
        let res = self.read_signed_data(&mut buf).and_then(f);
        pool.release(buf);
        res
    }
}

pub fn sign_stable<M, S>(pool: &BufferPool, msg: &M, signer: &S) -> Result<Vec<u8>>
where
    M: StableMarshal,
    S: DataSigner + ?Sized,
{
    StableDataSource::new(msg).with_signed_data(pool, |data| signer.sign(data))
}

pub fn verify_stable<M, V>(
    pool: &BufferPool,
    msg: &M,
    signature: &[u8],
    verifier: &V,
) -> Result<()>
where
    M: StableMarshal,
    V: DataVerifier + ?Sized,
{
    StableDataSource::new(msg).with_signed_data(pool, |data| verifier.verify(data, signature))
}
