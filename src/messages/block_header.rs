//! 80-byte block header.

use crate::pow::compact_to_target;
use crate::util::{sha256d, Hash256, Result, Serializable};
use byteorder::{LittleEndian, ReadBytesExt};
use num_bigint::BigUint;
use std::io;
use std::io::{Read, Write};

/// Block header.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone)]
pub struct BlockHeader {
    /// Block version specifying which validation rules to use.
    pub version: u32,
    /// Hash of the previous block.
    pub prev_hash: Hash256,
    /// Root of the merkle tree of this block's transaction hashes.
    pub merkle_root: Hash256,
    /// Timestamp when this block was created as recorded by the miner.
    pub timestamp: u32,
    /// Target difficulty bits in compact form.
    pub bits: u32,
    /// Nonce used to mine the block.
    pub nonce: u32,
}

impl BlockHeader {
    /// Size of the BlockHeader in bytes (80).
    pub const SIZE: usize = 80;

    /// Wire bytes: every field little-endian, hashes in wire order.
    #[must_use]
    pub fn to_array(&self) -> [u8; Self::SIZE] {
        let mut v = [0u8; Self::SIZE];
        v[0..4].copy_from_slice(&self.version.to_le_bytes());
        v[4..36].copy_from_slice(&self.prev_hash.0);
        v[36..68].copy_from_slice(&self.merkle_root.0);
        v[68..72].copy_from_slice(&self.timestamp.to_le_bytes());
        v[72..76].copy_from_slice(&self.bits.to_le_bytes());
        v[76..80].copy_from_slice(&self.nonce.to_le_bytes());
        v
    }

    /// Calculates the hash for this block header.
    #[must_use]
    pub fn hash(&self) -> Hash256 {
        sha256d(&self.to_array())
    }

    /// Target the block hash must not exceed.
    ///
    /// # Errors
    /// `Error::InvalidEncoding` if the bits describe a fractional target.
    pub fn target(&self) -> Result<BigUint> {
        compact_to_target(self.bits)
    }

    /// Returns whether the header hash is at or below its own target.
    ///
    /// # Errors
    /// See [`BlockHeader::target`].
    pub fn meets_target(&self) -> Result<bool> {
        Ok(self.hash().to_uint() <= self.target()?)
    }
}

impl Serializable<BlockHeader> for BlockHeader {
    fn read(reader: &mut dyn Read) -> Result<BlockHeader> {
        let version = reader.read_u32::<LittleEndian>()?;
        let prev_hash = Hash256::read(reader)?;
        let merkle_root = Hash256::read(reader)?;
        let timestamp = reader.read_u32::<LittleEndian>()?;
        let bits = reader.read_u32::<LittleEndian>()?;
        let nonce = reader.read_u32::<LittleEndian>()?;
        Ok(BlockHeader {
            version,
            prev_hash,
            merkle_root,
            timestamp,
            bits,
            nonce,
        })
    }

    fn write(&self, writer: &mut dyn Write) -> io::Result<()> {
        writer.write_all(&self.to_array())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn block_125552() -> BlockHeader {
        BlockHeader {
            version: 0x00000001,
            prev_hash: Hash256::decode(
                "00000000000008a3a41b85b8b29ad444def299fee21793cd8b9e567eab02cd81",
            )
            .unwrap(),
            merkle_root: Hash256::decode(
                "2b12fcf1b09288fcaff797d71e950e71ae42b91e8bdb2304758dfcffc2b620e3",
            )
            .unwrap(),
            timestamp: 0x4dd7f5c7,
            bits: 0x1a44b9f2,
            nonce: 0x9546a142,
        }
    }

    #[test]
    fn write_read() {
        let h = block_125552();
        let v = h.to_bytes().unwrap();
        assert_eq!(v.len(), BlockHeader::SIZE);
        assert_eq!(BlockHeader::read(&mut Cursor::new(&v)).unwrap(), h);
    }

    #[test]
    fn hash() {
        assert_eq!(
            block_125552().hash().encode(),
            "00000000000000001e8d6829a8a21adc5d38d0a473b144b6765798e61f98bd1d"
        );
    }

    #[test]
    fn proof_of_work() {
        let valid = block_125552();
        assert!(valid.meets_target().unwrap());
        let mut h = valid.clone();
        h.nonce = 0;
        assert!(!h.meets_target().unwrap());
    }
}
