//! Miscellaneous helpers: hashing, serialization, varints, hex byte order and errors.

pub mod endian;
mod hash160;
mod hash256;
mod result;
mod serdes;
pub(crate) mod var_int;

pub use self::endian::{num_to_hex, pad_leading_zero, reverse_endian, uint32_to_le_hex};
pub use self::hash160::{hash160, Hash160};
pub use self::hash256::{sha256d, Hash256};
pub use self::result::{Error, Result};
pub use self::serdes::Serializable;
