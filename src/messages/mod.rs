//! Wire structures: transactions and block headers.

mod block_header;
mod out_point;
mod tx;
mod tx_in;
mod tx_out;

pub use self::block_header::BlockHeader;
pub use self::out_point::OutPoint;
pub use self::tx::Tx;
pub use self::tx_in::{TxIn, SEQUENCE_FINAL};
pub use self::tx_out::TxOut;

use crate::script::Script;
use crate::util::{var_int, Error, Result};
use std::io::Read;

/// Largest script accepted when reading. Guards allocation, not consensus.
pub const MAX_SCRIPT_LEN: u64 = 0x0400_0000;

/// Reads a varint length-prefixed script.
pub(crate) fn read_script(reader: &mut dyn Read) -> Result<Script> {
    let len = var_int::read(reader)?;
    if len > MAX_SCRIPT_LEN {
        return Err(Error::BadData(format!("Script too long: {} > {}", len, MAX_SCRIPT_LEN)));
    }
    let mut script = vec![0; len as usize];
    reader.read_exact(&mut script)?;
    Ok(Script(script))
}
