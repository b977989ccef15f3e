//! Bitcoin SV networks and their version bytes.
use crate::util::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Network type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Network {
    /// Main network.
    Mainnet,
    /// Public test network.
    #[default]
    Testnet,
    /// Scaling test network.
    STN,
}

impl Network {
    /// Version byte prefixed to a WIF-encoded private key.
    #[must_use]
    pub fn wif_prefix(self) -> u8 {
        match self {
            Network::Mainnet => 0x80,
            Network::Testnet | Network::STN => 0xef,
        }
    }

    /// Version byte of a P2PKH address.
    #[must_use]
    pub fn p2pkh_version(self) -> u8 {
        match self {
            Network::Mainnet => 0x00,
            Network::Testnet | Network::STN => 0x6f,
        }
    }

    /// Path segment used by block explorer APIs.
    #[must_use]
    pub fn api_name(self) -> &'static str {
        match self {
            Network::Mainnet => "main",
            Network::Testnet => "test",
            Network::STN => "stn",
        }
    }

    /// Returns the network that uses `prefix` for WIF keys. Testnet and STN share one.
    #[must_use]
    pub fn from_wif_prefix(prefix: u8) -> Option<Network> {
        match prefix {
            0x80 => Some(Network::Mainnet),
            0xef => Some(Network::Testnet),
            _ => None,
        }
    }
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(s: &str) -> Result<Network> {
        match s.to_ascii_lowercase().as_str() {
            "main" | "mainnet" => Ok(Network::Mainnet),
            "test" | "testnet" => Ok(Network::Testnet),
            "stn" => Ok(Network::STN),
            other => Err(Error::BadArgument(format!("Unknown network: {}", other))),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.api_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_names() {
        assert_eq!("Mainnet".parse::<Network>().unwrap(), Network::Mainnet);
        assert_eq!("test".parse::<Network>().unwrap(), Network::Testnet);
        assert_eq!("STN".parse::<Network>().unwrap(), Network::STN);
        assert_eq!(
            "regtest".parse::<Network>().unwrap_err().to_string(),
            "Bad argument: Unknown network: regtest"
        );
    }

    #[test]
    fn prefixes() {
        assert_eq!(Network::from_wif_prefix(Network::Mainnet.wif_prefix()), Some(Network::Mainnet));
        assert_eq!(Network::from_wif_prefix(Network::STN.wif_prefix()), Some(Network::Testnet));
        assert_eq!(Network::from_wif_prefix(0x00), None);
        assert_eq!(Network::Testnet.p2pkh_version(), 0x6f);
    }
}
