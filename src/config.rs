//! Startup configuration read from the environment.
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `BSV_PRIVATE_KEY` | WIF of the funding key | required |
//! | `BSV_PRIVATE_KEY_2`, `BSV_PRIVATE_KEY_3` | extra keys for multi-key contracts | the funding key |
//! | `BSV_NETWORK` | `mainnet`, `testnet` or `stn` | `testnet` |
//! | `BSV_API_PREFIX` | block explorer base URL | WhatsOnChain for the network |

use crate::network::Network;
use crate::wallet::PrivateKey;
use crate::util::{Error, Result};
use log::info;
use std::env;

/// Funding key variable.
pub const PRIVATE_KEY_VAR: &str = "BSV_PRIVATE_KEY";
/// Second key variable.
pub const PRIVATE_KEY_2_VAR: &str = "BSV_PRIVATE_KEY_2";
/// Third key variable.
pub const PRIVATE_KEY_3_VAR: &str = "BSV_PRIVATE_KEY_3";
/// Network variable.
pub const NETWORK_VAR: &str = "BSV_NETWORK";
/// Explorer API prefix variable.
pub const API_PREFIX_VAR: &str = "BSV_API_PREFIX";

/// Keys and endpoints used by deployment tooling.
#[derive(Debug, Clone)]
pub struct Config {
    /// Network all keys must belong to.
    pub network: Network,
    /// Funding and default signing key.
    pub private_key: PrivateKey,
    /// Second signing key.
    pub private_key_2: PrivateKey,
    /// Third signing key.
    pub private_key_3: PrivateKey,
    /// Block explorer API base URL.
    pub api_prefix: String,
}

impl Config {
    /// Loads from process environment variables.
    ///
    /// # Errors
    /// See [`Config::from_lookup`].
    pub fn from_env() -> Result<Config> {
        Config::from_lookup(|name| env::var(name).ok())
    }

    /// Loads using `lookup` to resolve variable names. Empty values count as unset.
    ///
    /// # Errors
    /// `Error::IllegalState` if no funding key is set, `Error::BadData` if a key
    /// belongs to another network, and parse errors for malformed values.
    pub fn from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let network = match get(NETWORK_VAR) {
            Some(s) => s.trim().parse()?,
            None => Network::default(),
        };

        let wif = get(PRIVATE_KEY_VAR).ok_or_else(|| {
            Error::IllegalState(format!(
                "{} is not set; generate a key with wallet::generate_private_key",
                PRIVATE_KEY_VAR
            ))
        })?;
        let private_key = load_key(&wif, network)?;
        let private_key_2 = match get(PRIVATE_KEY_2_VAR) {
            Some(wif) => load_key(&wif, network)?,
            None => private_key,
        };
        let private_key_3 = match get(PRIVATE_KEY_3_VAR) {
            Some(wif) => load_key(&wif, network)?,
            None => private_key,
        };

        let api_prefix = get(API_PREFIX_VAR)
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| default_api_prefix(network));

        let config = Config {
            network,
            private_key,
            private_key_2,
            private_key_3,
            api_prefix,
        };
        info!(
            "Loaded config: network={}, address={}, api_prefix={}",
            config.network,
            config.private_key.address(),
            config.api_prefix
        );
        Ok(config)
    }
}

/// WhatsOnChain API base URL for `network`.
#[must_use]
pub fn default_api_prefix(network: Network) -> String {
    format!("https://api.whatsonchain.com/v1/bsv/{}", network.api_name())
}

fn load_key(wif: &str, network: Network) -> Result<PrivateKey> {
    let key = PrivateKey::from_wif(wif.trim())?;
    // Testnet and STN share a WIF prefix.
    let same = match network {
        Network::Mainnet => key.network() == Network::Mainnet,
        Network::Testnet | Network::STN => key.network() != Network::Mainnet,
    };
    if !same {
        return Err(Error::BadData(format!(
            "Key for {} used on {}",
            key.network(),
            network
        )));
    }
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    const TESTNET_WIF: &str = "cUS5fdQ7P26VsWuFcBzLt7Jemcx2ho2sgUPnZDGjhP7DLounEegj";
    const MAINNET_WIF: &str = "5HueCGU8rMjxEXxiPuD5BDku4MkFqeZyd4dZ1jvhTVqvbTLvyTJ";

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn defaults() -> Result<()> {
        let config = load(&[(PRIVATE_KEY_VAR, TESTNET_WIF)])?;
        assert_eq!(config.network, Network::Testnet);
        assert_eq!(config.api_prefix, "https://api.whatsonchain.com/v1/bsv/test");
        assert_eq!(config.private_key_2, config.private_key);
        assert_eq!(config.private_key_3, config.private_key);
        Ok(())
    }

    #[test]
    fn explicit_values() -> Result<()> {
        let second = crate::wallet::generate_private_key(Network::Testnet).to_wif();
        let config = load(&[
            (PRIVATE_KEY_VAR, TESTNET_WIF),
            (PRIVATE_KEY_2_VAR, second.as_str()),
            (PRIVATE_KEY_3_VAR, ""),
            (NETWORK_VAR, "stn"),
            (API_PREFIX_VAR, "http://localhost:3000/v1/bsv/stn/"),
        ])?;
        assert_eq!(config.network, Network::STN);
        assert_eq!(config.private_key_2.to_wif(), second);
        assert_eq!(config.private_key_3, config.private_key);
        assert_eq!(config.api_prefix, "http://localhost:3000/v1/bsv/stn");
        Ok(())
    }

    #[test]
    fn missing_key_is_an_error() {
        let e = load(&[(NETWORK_VAR, "testnet")]).unwrap_err();
        assert!(matches!(e, Error::IllegalState(_)));
        assert!(e.to_string().contains(PRIVATE_KEY_VAR));
    }

    #[test]
    fn network_mismatch() {
        assert_eq!(
            load(&[(PRIVATE_KEY_VAR, MAINNET_WIF)]).unwrap_err().to_string(),
            "Bad data: Key for main used on test"
        );
        assert!(load(&[(PRIVATE_KEY_VAR, MAINNET_WIF), (NETWORK_VAR, "mainnet")]).is_ok());
        assert!(load(&[(PRIVATE_KEY_VAR, TESTNET_WIF), (NETWORK_VAR, "regtest")]).is_err());
    }
}
