//! Secp256k1 private key bound to a network.
use crate::address::{check_decode, check_encode, encode_p2pkh_address};
use crate::network::Network;
use crate::script::Script;
use crate::transaction::{generate_signature, p2pkh};
use crate::util::{hash160, Error, Hash160, Hash256, Result};
use log::info;
use secp256k1::{PublicKey, Secp256k1, SecretKey};
use std::fmt;

/// Private key with the network and public key format it was encoded for.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PrivateKey {
    secret: SecretKey,
    network: Network,
    compressed: bool,
}

impl PrivateKey {
    /// Wraps a secret key. The public key is used in compressed form.
    #[must_use]
    pub fn new(secret: SecretKey, network: Network) -> PrivateKey {
        PrivateKey {
            secret,
            network,
            compressed: true,
        }
    }

    /// Parses a WIF string.
    ///
    /// # Errors
    /// `Error::BadData` for an unknown prefix or bad length, base58check and
    /// secp256k1 errors otherwise.
    pub fn from_wif(wif: &str) -> Result<PrivateKey> {
        let data = check_decode(wif)?;
        let compressed = match data.len() {
            33 => false,
            34 if data[33] == 0x01 => true,
            len => return Err(Error::BadData(format!("Invalid WIF payload length: {}", len))),
        };
        let network = Network::from_wif_prefix(data[0])
            .ok_or_else(|| Error::BadData(format!("Unknown WIF prefix: {:#04x}", data[0])))?;
        let secret = SecretKey::from_slice(&data[1..33])?;
        Ok(PrivateKey {
            secret,
            network,
            compressed,
        })
    }

    /// Encodes as WIF.
    #[must_use]
    pub fn to_wif(&self) -> String {
        let mut v = Vec::with_capacity(34);
        v.push(self.network.wif_prefix());
        v.extend_from_slice(&self.secret.secret_bytes());
        if self.compressed {
            v.push(0x01);
        }
        check_encode(&v)
    }

    /// Network the key was encoded for.
    #[must_use]
    pub fn network(&self) -> Network {
        self.network
    }

    /// Raw 32 secret bytes.
    #[must_use]
    pub fn secret_bytes(&self) -> [u8; 32] {
        self.secret.secret_bytes()
    }

    /// Serialized public key, 33 bytes if compressed, 65 otherwise.
    #[must_use]
    pub fn public_key_bytes(&self) -> Vec<u8> {
        let secp = Secp256k1::signing_only();
        let pk = PublicKey::from_secret_key(&secp, &self.secret);
        if self.compressed {
            pk.serialize().to_vec()
        } else {
            pk.serialize_uncompressed().to_vec()
        }
    }

    /// Hash160 of the serialized public key.
    #[must_use]
    pub fn pubkey_hash(&self) -> Hash160 {
        hash160(&self.public_key_bytes())
    }

    /// P2PKH address.
    #[must_use]
    pub fn address(&self) -> String {
        encode_p2pkh_address(self.network, &self.pubkey_hash())
    }

    /// P2PKH lock script paying this key.
    #[must_use]
    pub fn lock_script(&self) -> Script {
        p2pkh::create_lock_script(&self.pubkey_hash())
    }

    /// Signs a sighash digest; returns DER with the sighash type appended.
    ///
    /// # Errors
    /// Secp256k1 errors.
    pub fn sign(&self, sighash: &Hash256, sighash_type: u8) -> Result<Vec<u8>> {
        generate_signature(&self.secret_bytes(), sighash, sighash_type)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("network", &self.network)
            .field("address", &self.address())
            .finish_non_exhaustive()
    }
}

/// Generates a new random key for `network` and logs its address for funding.
#[must_use]
pub fn generate_private_key(network: Network) -> PrivateKey {
    let secret = loop {
        if let Ok(sk) = SecretKey::from_slice(&rand::random::<[u8; 32]>()) {
            break sk;
        }
    };
    let key = PrivateKey::new(secret, network);
    info!("Generated new {} private key, fund its address {}", network, key.address());
    key
}
