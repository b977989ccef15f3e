//! Base58check encoding and P2PKH addresses.
//!
//! The checksum is the first four bytes of the double SHA256 of the payload.

use crate::network::Network;
use crate::util::{sha256d, Error, Hash160, Result};
use base58::{FromBase58, ToBase58};

/// Appends the checksum and encodes as base58.
#[must_use]
pub fn check_encode(data: &[u8]) -> String {
    let mut v = Vec::with_capacity(data.len() + 4);
    v.extend_from_slice(data);
    v.extend_from_slice(&sha256d(data).0[..4]);
    v.to_base58()
}

/// Decodes base58 and verifies and strips the checksum.
///
/// # Errors
/// `Error::FromBase58Error` on bad characters, `Error::BadData` on short input or checksum mismatch.
pub fn check_decode(input: &str) -> Result<Vec<u8>> {
    let mut bytes = input.from_base58()?;
    if bytes.len() < 5 {
        return Err(Error::BadData(format!("Base58check too short: {}", bytes.len())));
    }
    let split = bytes.len() - 4;
    if sha256d(&bytes[..split]).0[..4] != bytes[split..] {
        return Err(Error::BadData("Invalid checksum".to_string()));
    }
    bytes.truncate(split);
    Ok(bytes)
}

/// Encodes a P2PKH address for `network`.
#[must_use]
pub fn encode_p2pkh_address(network: Network, pubkey_hash: &Hash160) -> String {
    let mut v = [0u8; 21];
    v[0] = network.p2pkh_version();
    v[1..].copy_from_slice(&pubkey_hash.0);
    check_encode(&v)
}

/// Decodes a P2PKH address into its version byte and public key hash.
///
/// # Errors
/// `Error::BadData` on bad length or checksum.
pub fn decode_address(input: &str) -> Result<(u8, Hash160)> {
    let bytes = check_decode(input)?;
    if bytes.len() != 21 {
        return Err(Error::BadData("Invalid address length".to_string()));
    }
    let mut hash = Hash160([0; 20]);
    hash.0.copy_from_slice(&bytes[1..]);
    Ok((bytes[0], hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    use pretty_assertions::assert_eq;

    #[test]
    fn mainnet_p2pkh() -> Result<()> {
        let pkh = Hash160(hex!("f54a5851e9372b87810a8e60cdd2e7cfd80b6e31"));
        let address = encode_p2pkh_address(Network::Mainnet, &pkh);
        assert_eq!(address, "1PMycacnJaSqwwJqjawXBErnLsZ7RkXUAs");
        assert_eq!(decode_address(&address)?, (0x00, pkh));
        Ok(())
    }

    #[test]
    fn testnet_version() -> Result<()> {
        let pkh = Hash160([9; 20]);
        let address = encode_p2pkh_address(Network::Testnet, &pkh);
        assert!(address.starts_with('m') || address.starts_with('n'));
        assert_eq!(decode_address(&address)?.0, 0x6f);
        Ok(())
    }

    #[test]
    fn corrupted_checksum() {
        let mut address = encode_p2pkh_address(Network::Mainnet, &Hash160([1; 20]));
        let last = address.pop().unwrap();
        address.push(if last == '2' { '3' } else { '2' });
        assert_eq!(decode_address(&address).unwrap_err().to_string(), "Bad data: Invalid checksum");
        assert!(matches!(check_decode("0OIl"), Err(Error::FromBase58Error(_))));
    }
}
