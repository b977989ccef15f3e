#![warn(missing_docs)]
#![deny(unsafe_code)]

/*! # BSV Helper

Helpers for deploying and calling Bitcoin SV smart contracts: BIP-143 sighash
preimages, sequence grinding for low-S safe digests, compact target and pool
difficulty math, and raw block header serialization.

## Usage
```
use bsv_helper::pow::{decode_compact_bits, pool_difficulty_to_target};
let one = decode_compact_bits("1d00ffff").unwrap();
assert_eq!(pool_difficulty_to_target(2.0).unwrap(), one / 2u32);
```

## Logging
Uses the `log` facade. Install any logger (e.g. `env_logger`) in the binary to
see grinding and key generation messages.
*/

pub mod address;
pub mod config;
pub mod messages;
pub mod network;
pub mod pow;
pub mod script;
pub mod transaction;
pub mod util;
pub mod wallet;
