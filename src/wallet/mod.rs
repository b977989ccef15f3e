//! Private keys: WIF encoding, explicit generation, addresses and signing.
//!
//! Keys are never created as a side effect of loading the library. Use
//! [`generate_private_key`] and store the resulting WIF in the configuration.

mod private_key;

pub use self::private_key::{generate_private_key, PrivateKey};
