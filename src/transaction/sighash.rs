//! Sighash preimage and digest for signing Bitcoin SV inputs.
//!
//! Implements the BIP-143 serialization with the FORKID flag. The preimage is
//! what contracts receive through `OP_PUSH_TX` style checks, and its double
//! SHA256 is the message that gets signed.
use crate::messages::Tx;
use crate::util::{sha256d, var_int, Error, Hash256, Result, Serializable};
use byteorder::{LittleEndian, WriteBytesExt};

const FORK_ID: u32 = 0;

/// Signs all outputs.
pub const SIGHASH_ALL: u8 = 0x01;
/// Signs no outputs.
pub const SIGHASH_NONE: u8 = 0x02;
/// Signs only the output at the same index as the input.
pub const SIGHASH_SINGLE: u8 = 0x03;
/// Signs only this input, others may be added.
pub const SIGHASH_ANYONECANPAY: u8 = 0x80;
/// Replay protection flag required after the 2017 fork.
pub const SIGHASH_FORKID: u8 = 0x40;

/// Cache for sighash intermediates (prevouts, sequences, outputs).
///
/// Only valid for one unchanged transaction. Any edit to inputs or outputs,
/// including a sequence bump, needs a fresh cache.
#[derive(Default, Debug)]
pub struct SigHashCache {
    hash_prevouts: Option<Hash256>,
    hash_sequence: Option<Hash256>,
    hash_outputs: Option<Hash256>,
}

impl SigHashCache {
    /// Creates a new empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Computes the preimage for input `n_input`.
///
/// Layout: version | hashPrevouts | hashSequence | outpoint | scriptCode |
/// value | nSequence | hashOutputs | locktime | sighash type.
///
/// # Errors
/// `Error::BadArgument` if `n_input` is out of range or FORKID is not set.
pub fn sighash_preimage(
    tx: &Tx,
    n_input: usize,
    script_code: &[u8],
    satoshis: i64,
    sighash_type: u8,
    cache: &mut SigHashCache,
) -> Result<Vec<u8>> {
    if n_input >= tx.inputs.len() {
        return Err(Error::BadArgument(format!(
            "Input index {} out of range for {} inputs",
            n_input,
            tx.inputs.len()
        )));
    }
    if sighash_type & SIGHASH_FORKID == 0 {
        return Err(Error::BadArgument(format!(
            "Sighash type {:#04x} lacks FORKID",
            sighash_type
        )));
    }
    let base_type = sighash_type & 0x1f;
    let anyone_can_pay = sighash_type & SIGHASH_ANYONECANPAY != 0;
    let mut s = Vec::with_capacity(156 + script_code.len());

    s.write_u32::<LittleEndian>(tx.version)?;

    if anyone_can_pay {
        s.extend_from_slice(&[0u8; 32]);
    } else {
        let h = match cache.hash_prevouts {
            Some(h) => h,
            None => {
                let mut prevouts = Vec::with_capacity(36 * tx.inputs.len());
                for input in &tx.inputs {
                    input.prev_output.write(&mut prevouts)?;
                }
                *cache.hash_prevouts.insert(sha256d(&prevouts))
            }
        };
        s.extend_from_slice(&h.0);
    }

    if anyone_can_pay || base_type == SIGHASH_SINGLE || base_type == SIGHASH_NONE {
        s.extend_from_slice(&[0u8; 32]);
    } else {
        let h = match cache.hash_sequence {
            Some(h) => h,
            None => {
                let mut sequences = Vec::with_capacity(4 * tx.inputs.len());
                for input in &tx.inputs {
                    sequences.write_u32::<LittleEndian>(input.sequence)?;
                }
                *cache.hash_sequence.insert(sha256d(&sequences))
            }
        };
        s.extend_from_slice(&h.0);
    }

    let input = &tx.inputs[n_input];
    input.prev_output.write(&mut s)?;
    var_int::write(script_code.len() as u64, &mut s)?;
    s.extend_from_slice(script_code);
    s.write_i64::<LittleEndian>(satoshis)?;
    s.write_u32::<LittleEndian>(input.sequence)?;

    if base_type != SIGHASH_SINGLE && base_type != SIGHASH_NONE {
        let h = match cache.hash_outputs {
            Some(h) => h,
            None => {
                let mut outputs =
                    Vec::with_capacity(tx.outputs.iter().map(|o| o.size()).sum());
                for out in &tx.outputs {
                    out.write(&mut outputs)?;
                }
                *cache.hash_outputs.insert(sha256d(&outputs))
            }
        };
        s.extend_from_slice(&h.0);
    } else if base_type == SIGHASH_SINGLE && n_input < tx.outputs.len() {
        s.extend_from_slice(&sha256d(&tx.outputs[n_input].to_bytes()?).0);
    } else {
        s.extend_from_slice(&[0u8; 32]);
    }

    s.write_u32::<LittleEndian>(tx.lock_time)?;
    s.write_u32::<LittleEndian>((FORK_ID << 8) | u32::from(sighash_type))?;
    Ok(s)
}

/// Computes the sighash digest (double SHA256 of the preimage).
///
/// # Errors
/// Same as [`sighash_preimage`].
pub fn sighash(
    tx: &Tx,
    n_input: usize,
    script_code: &[u8],
    satoshis: i64,
    sighash_type: u8,
    cache: &mut SigHashCache,
) -> Result<Hash256> {
    let preimage = sighash_preimage(tx, n_input, script_code, satoshis, sighash_type, cache)?;
    Ok(sha256d(&preimage))
}

/// Source of sighash preimages for a transaction input.
pub trait PreimageProvider {
    /// Returns the preimage of input `n_input` spending `lock_script` worth `satoshis`.
    ///
    /// # Errors
    /// Implementation defined; typically an out of range input index.
    fn preimage(&self, tx: &Tx, n_input: usize, lock_script: &[u8], satoshis: i64)
        -> Result<Vec<u8>>;
}

/// BIP-143 FORKID preimages with a fixed sighash type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForkIdPreimage {
    /// Sighash type byte, must include `SIGHASH_FORKID`.
    pub sighash_type: u8,
}

impl Default for ForkIdPreimage {
    fn default() -> Self {
        ForkIdPreimage {
            sighash_type: SIGHASH_ALL | SIGHASH_FORKID,
        }
    }
}

impl PreimageProvider for ForkIdPreimage {
    fn preimage(
        &self,
        tx: &Tx,
        n_input: usize,
        lock_script: &[u8],
        satoshis: i64,
    ) -> Result<Vec<u8>> {
        let mut cache = SigHashCache::new();
        sighash_preimage(tx, n_input, lock_script, satoshis, self.sighash_type, &mut cache)
    }
}
