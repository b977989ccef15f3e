//! Hex string helpers for byte-order flips and fixed-width fields.
//!
//! Explorers and RPC print hashes and header fields big-endian while the
//! wire format is little-endian. These helpers work on hex byte pairs.
use crate::util::{Error, Result};

/// Reverses the order of the hex byte pairs in `hex_str`.
///
/// # Errors
/// `Error::InvalidEncoding` if the length is odd or a character is not hex.
pub fn reverse_endian(hex_str: &str) -> Result<String> {
    let mut bytes = hex::decode(hex_str)
        .map_err(|e| Error::InvalidEncoding(format!("{:?}: {}", hex_str, e)))?;
    bytes.reverse();
    Ok(hex::encode(bytes))
}

/// Parses exactly `N` bytes of hex.
///
/// # Errors
/// `Error::InvalidEncoding` on wrong length or non-hex characters.
pub fn decode_fixed<const N: usize>(hex_str: &str) -> Result<[u8; N]> {
    let mut out = [0u8; N];
    hex::decode_to_slice(hex_str, &mut out).map_err(|e| {
        Error::InvalidEncoding(format!("expected {} hex chars, got {:?}: {}", N * 2, hex_str, e))
    })?;
    Ok(out)
}

/// Pads `hex_str` with leading zeros to `byte_len` bytes, or to an even length when
/// `byte_len` is zero or already satisfied.
#[must_use]
pub fn pad_leading_zero(hex_str: &str, byte_len: usize) -> String {
    if hex_str.len() < byte_len * 2 {
        return format!("{:0>width$}", hex_str, width = byte_len * 2);
    }
    if hex_str.len() % 2 == 0 {
        hex_str.to_string()
    } else {
        format!("0{}", hex_str)
    }
}

/// Formats `n` as lowercase hex, left-padded with zeros to at least `padding` chars.
#[must_use]
#[inline]
pub fn num_to_hex(n: u64, padding: usize) -> String {
    format!("{:0>width$x}", n, width = padding)
}

/// Encodes a u32 as 4 little-endian bytes in hex (always 8 chars).
#[must_use]
#[inline]
pub fn uint32_to_le_hex(n: u32) -> String {
    hex::encode(n.to_le_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reverse_endian_flips_pairs() {
        assert_eq!(reverse_endian("1d00ffff").unwrap(), "ffff001d");
        assert_eq!(reverse_endian("").unwrap(), "");
        assert_eq!(reverse_endian("ab").unwrap(), "ab");
        assert!(matches!(reverse_endian("abc"), Err(Error::InvalidEncoding(_))));
        assert!(matches!(reverse_endian("zz"), Err(Error::InvalidEncoding(_))));
    }

    #[test]
    fn decode_fixed_checks_width() {
        assert_eq!(decode_fixed::<4>("1d00ffff").unwrap(), [0x1d, 0x00, 0xff, 0xff]);
        assert!(decode_fixed::<4>("1d00ff").is_err());
        assert!(decode_fixed::<4>("1d00ffff00").is_err());
    }

    #[test]
    fn pad_leading_zero_cases() {
        assert_eq!(pad_leading_zero("abc", 0), "0abc");
        assert_eq!(pad_leading_zero("ab", 0), "ab");
        assert_eq!(pad_leading_zero("1", 4), "00000001");
        assert_eq!(pad_leading_zero("123456789", 4), "0123456789");
    }

    #[test]
    fn fixed_width_numbers() {
        assert_eq!(num_to_hex(255, 4), "00ff");
        assert_eq!(num_to_hex(0x12345, 2), "12345");
        assert_eq!(uint32_to_le_hex(1), "01000000");
        assert_eq!(uint32_to_le_hex(0x495fab29), "29ab5f49");
        assert_eq!(uint32_to_le_hex(0), "00000000");
    }
}
