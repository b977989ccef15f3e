//! Proof-of-work target math and explorer header serialization.
//!
//! Compact "bits" pack a target as one exponent byte and a three byte
//! coefficient: `target = coefficient * 256^(exponent - 3)`. All arithmetic is
//! done on [`BigUint`] so large exponents stay exact.
use crate::messages::BlockHeader;
use crate::util::endian::decode_fixed;
use crate::util::{Error, Hash256, Result, Serializable};
use num_bigint::BigUint;
use num_traits::{FromPrimitive, Zero};
use serde::{Deserialize, Serialize};

/// Compact bits of the difficulty-1 target.
pub const DIFFICULTY_ONE_BITS: u32 = 0x1d00ffff;

/// Decodes compact bits given as 8 big-endian hex characters, e.g. `"1d00ffff"`.
///
/// # Errors
/// `Error::InvalidEncoding` for malformed hex or a fractional target.
pub fn decode_compact_bits(bits_hex: &str) -> Result<BigUint> {
    compact_to_target(u32::from_be_bytes(decode_fixed::<4>(bits_hex)?))
}

/// Expands numeric compact bits into the full target.
///
/// The coefficient is taken as an unsigned 24-bit value. Exponents below 3
/// shift right; if that would drop set bits the target is not an integer and
/// the bits are rejected.
///
/// # Errors
/// `Error::InvalidEncoding` if the target would be fractional.
pub fn compact_to_target(bits: u32) -> Result<BigUint> {
    let exponent = (bits >> 24) as usize;
    let coefficient = BigUint::from(bits & 0x00ff_ffff);
    if exponent >= 3 {
        return Ok(coefficient << (8 * (exponent - 3)));
    }
    let shift = 8 * (3 - exponent);
    let target = &coefficient >> shift;
    if &target << shift != coefficient {
        return Err(Error::InvalidEncoding(format!(
            "Compact bits {:08x} describe a fractional target",
            bits
        )));
    }
    Ok(target)
}

/// The difficulty-1 target, `0xffff * 256^26`.
#[must_use]
pub fn difficulty_one_target() -> BigUint {
    BigUint::from(0xffffu32) << 208
}

/// Converts a pool difficulty into a target. Fractional difficulties are floored.
///
/// # Errors
/// `Error::BadArgument` if the difficulty is not finite or floors below 1.
pub fn pool_difficulty_to_target(difficulty: f64) -> Result<BigUint> {
    if !difficulty.is_finite() {
        return Err(Error::BadArgument(format!("Difficulty not finite: {}", difficulty)));
    }
    let floored = difficulty.floor();
    if floored < 1.0 {
        return Err(Error::BadArgument(format!("Difficulty below 1: {}", difficulty)));
    }
    // Every finite integral f64 converts exactly.
    let difficulty = BigUint::from_f64(floored)
        .ok_or_else(|| Error::BadArgument(format!("Difficulty not integral: {}", difficulty)))?;
    pool_difficulty_to_target_int(&difficulty)
}

/// Integer form of [`pool_difficulty_to_target`]: difficulty-1 target divided by
/// `difficulty`, truncating.
///
/// # Errors
/// `Error::BadArgument` if `difficulty` is zero.
pub fn pool_difficulty_to_target_int(difficulty: &BigUint) -> Result<BigUint> {
    if difficulty.is_zero() {
        return Err(Error::BadArgument("Difficulty must be non-zero".to_string()));
    }
    Ok(difficulty_one_target() / difficulty)
}

/// Block header as returned by block explorer JSON APIs.
///
/// Hashes and bits are big-endian display hex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderInfo {
    /// Block version.
    pub version: u32,
    /// Previous block hash. Absent for the genesis block.
    #[serde(rename = "previousblockhash", default, skip_serializing_if = "Option::is_none")]
    pub prev_hash: Option<String>,
    /// Merkle root.
    #[serde(rename = "merkleroot")]
    pub merkle_root: String,
    /// Block time.
    pub time: u32,
    /// Compact target bits, 8 hex characters.
    pub bits: String,
    /// Nonce.
    pub nonce: u32,
}

impl HeaderInfo {
    /// Parses the display fields into a wire header.
    ///
    /// # Errors
    /// `Error::InvalidEncoding` if a hash or the bits are malformed.
    pub fn to_block_header(&self) -> Result<BlockHeader> {
        let prev_hash = match &self.prev_hash {
            Some(h) => Hash256::decode(h)?,
            None => Hash256::default(),
        };
        Ok(BlockHeader {
            version: self.version,
            prev_hash,
            merkle_root: Hash256::decode(&self.merkle_root)?,
            timestamp: self.time,
            bits: u32::from_be_bytes(decode_fixed::<4>(&self.bits)?),
            nonce: self.nonce,
        })
    }
}

/// Serializes an explorer header into the 80-byte raw header hex (160 characters).
///
/// Version, time and nonce are written little-endian; hashes and bits are
/// byte-reversed from their display form.
///
/// # Errors
/// `Error::InvalidEncoding` if a hash or the bits are malformed.
pub fn serialize_header(header: &HeaderInfo) -> Result<String> {
    Ok(header.to_block_header()?.to_hex()?)
}
