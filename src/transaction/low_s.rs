//! Sighash grinding so contract-verified signatures come out low-S.
//!
//! Contracts that check the sighash preimage on chain derive the signature
//! from the digest, and only digests whose leading byte is below
//! [`MSB_THRESHOLD`] yield a canonical low-S value. The digest is steered by
//! bumping the input's sequence number, which the sighash covers, so no
//! re-signing or nonce search is needed.
use crate::messages::Tx;
use crate::transaction::sighash::{ForkIdPreimage, PreimageProvider};
use crate::util::{sha256d, Error, Result};
use log::{debug, warn};

/// Digests with a leading byte below this value are safe.
pub const MSB_THRESHOLD: u8 = 0x7e;

/// Number of sequence values tried before giving up.
pub const MAX_LOW_S_ATTEMPTS: u32 = 25;

/// Bumps the sequence of input `n_input` until its sighash is low-S safe,
/// using the default `SIGHASH_ALL | SIGHASH_FORKID` preimage.
///
/// Giving up after [`MAX_LOW_S_ATTEMPTS`] is not an error: the transaction is
/// left in its last tried state. Call [`check_low_s`] when it matters.
///
/// # Errors
/// `Error::BadArgument` if `n_input` is out of range.
pub fn fix_low_s(tx: &mut Tx, lock_script: &[u8], satoshis: i64, n_input: usize) -> Result<()> {
    fix_low_s_with(&ForkIdPreimage::default(), tx, lock_script, satoshis, n_input)
}

/// [`fix_low_s`] with a caller supplied preimage source.
///
/// # Errors
/// `Error::BadArgument` if `n_input` is out of range, or whatever the provider returns.
pub fn fix_low_s_with<P: PreimageProvider + ?Sized>(
    provider: &P,
    tx: &mut Tx,
    lock_script: &[u8],
    satoshis: i64,
    n_input: usize,
) -> Result<()> {
    if n_input >= tx.inputs.len() {
        return Err(Error::BadArgument(format!(
            "Input index {} out of range for {} inputs",
            n_input,
            tx.inputs.len()
        )));
    }
    let start = tx.inputs[n_input].sequence;
    for attempt in 0..MAX_LOW_S_ATTEMPTS {
        let msb = sighash_msb(provider, tx, lock_script, satoshis, n_input)?;
        if msb < MSB_THRESHOLD {
            debug!(
                "Input {} sighash low-S safe after {} bumps (msb {:#04x})",
                n_input, attempt, msb
            );
            return Ok(());
        }
        let input = &mut tx.inputs[n_input];
        input.sequence = input.sequence.wrapping_add(1);
    }
    warn!(
        "Input {} sighash not low-S safe after {} attempts from sequence {}",
        n_input, MAX_LOW_S_ATTEMPTS, start
    );
    Ok(())
}

/// Returns whether the sighash of input `n_input` is low-S safe, using the
/// default `SIGHASH_ALL | SIGHASH_FORKID` preimage. Does not modify `tx`.
///
/// # Errors
/// `Error::BadArgument` if `n_input` is out of range.
pub fn check_low_s(tx: &Tx, lock_script: &[u8], satoshis: i64, n_input: usize) -> Result<bool> {
    check_low_s_with(&ForkIdPreimage::default(), tx, lock_script, satoshis, n_input)
}

/// [`check_low_s`] with a caller supplied preimage source.
///
/// # Errors
/// Whatever the provider returns.
pub fn check_low_s_with<P: PreimageProvider + ?Sized>(
    provider: &P,
    tx: &Tx,
    lock_script: &[u8],
    satoshis: i64,
    n_input: usize,
) -> Result<bool> {
    Ok(sighash_msb(provider, tx, lock_script, satoshis, n_input)? < MSB_THRESHOLD)
}

fn sighash_msb<P: PreimageProvider + ?Sized>(
    provider: &P,
    tx: &Tx,
    lock_script: &[u8],
    satoshis: i64,
    n_input: usize,
) -> Result<u8> {
    let preimage = provider.preimage(tx, n_input, lock_script, satoshis)?;
    Ok(sha256d(&preimage).leading_byte())
}
