//! 256-bit double-SHA256 digests for transactions, sighashes and block headers.
//!
//! Bytes are kept in wire order. The hex form shown by block explorers is the
//! byte-reversed view, so `encode`/`decode` flip the order.
use crate::util::{Error, Result, Serializable};
use bitcoin_hashes::{sha256d as bh_sha256d, Hash as BHHash};
use num_bigint::BigUint;
use std::fmt;
use std::io;
use std::io::{Read, Write};

/// 256-bit hash in wire byte order.
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hash256(pub [u8; 32]);

impl Hash256 {
    /// Converts the hash into its display hex (byte-reversed).
    #[must_use]
    #[inline]
    pub fn encode(&self) -> String {
        let mut r = self.0;
        r.reverse();
        hex::encode(r)
    }

    /// Parses 64 hex characters in display order into a hash.
    ///
    /// # Errors
    /// `Error::InvalidEncoding` on bad length or non-hex characters.
    pub fn decode(s: &str) -> Result<Hash256> {
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s, &mut bytes)
            .map_err(|e| Error::InvalidEncoding(format!("hash {:?}: {}", s, e)))?;
        bytes.reverse();
        Ok(Hash256(bytes))
    }

    /// First byte of the digest as produced by the hash function.
    #[must_use]
    #[inline]
    pub fn leading_byte(&self) -> u8 {
        self.0[0]
    }

    /// Interprets the hash as a little-endian unsigned integer, as proof of work does.
    #[must_use]
    pub fn to_uint(&self) -> BigUint {
        BigUint::from_bytes_le(&self.0)
    }
}

impl From<bh_sha256d::Hash> for Hash256 {
    fn from(h: bh_sha256d::Hash) -> Self {
        Hash256(h.to_byte_array())
    }
}

impl Serializable<Hash256> for Hash256 {
    fn read(reader: &mut dyn Read) -> Result<Hash256> {
        let mut bytes = [0; 32];
        reader.read_exact(&mut bytes)?;
        Ok(Hash256(bytes))
    }

    fn write(&self, writer: &mut dyn Write) -> io::Result<()> {
        writer.write_all(&self.0)
    }
}

/// Hashes a data array twice using SHA256.
#[must_use]
#[inline]
pub fn sha256d(data: &[u8]) -> Hash256 {
    bh_sha256d::Hash::hash(data).into()
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.encode())
    }
}
