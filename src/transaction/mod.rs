//! Transaction signing helpers for contract deployment and calls.
//!
//! Sighash preimages follow BIP-143 with FORKID. [`low_s`] grinds the input
//! sequence so contract-checked signatures are canonical.
//!
//! # Examples
//!
//! ```
//! use bsv_helper::transaction::{generate_signature, low_s, new_dummy_tx, DEFAULT_INPUT_SATOSHIS};
//! use bsv_helper::transaction::sighash::{sighash, SigHashCache, SIGHASH_ALL, SIGHASH_FORKID};
//!
//! let mut tx = new_dummy_tx();
//! let lock_script = [0x51u8];
//! low_s::fix_low_s(&mut tx, &lock_script, DEFAULT_INPUT_SATOSHIS, 0).unwrap();
//! let sighash_type = SIGHASH_ALL | SIGHASH_FORKID;
//! let digest = sighash(&tx, 0, &lock_script, DEFAULT_INPUT_SATOSHIS, sighash_type, &mut SigHashCache::new()).unwrap();
//! let signature = generate_signature(&[1; 32], &digest, sighash_type).unwrap();
//! assert_eq!(*signature.last().unwrap(), sighash_type);
//! ```
pub mod low_s;
pub mod metanet;
pub mod p2pkh;
pub mod sighash;

use crate::messages::{OutPoint, Tx, TxIn, TxOut};
use crate::util::{Error, Hash256, Result};
use secp256k1::{Message, Secp256k1, SecretKey};

/// Satoshis assumed for the dummy input of [`new_dummy_tx`].
pub const DEFAULT_INPUT_SATOSHIS: i64 = 100_000;

/// Generates a DER-encoded ECDSA signature over `sighash` with the sighash type appended.
///
/// S is normalized to the low half of the curve order.
///
/// # Errors
/// `Error::Secp256k1Error` for an invalid private key.
pub fn generate_signature(private_key: &[u8; 32], sighash: &Hash256, sighash_type: u8) -> Result<Vec<u8>> {
    let secp = Secp256k1::signing_only();
    let secret_key = SecretKey::from_slice(private_key)?;
    let message = Message::from_digest(sighash.0);
    let mut signature = secp.sign_ecdsa(&message, &secret_key);
    signature.normalize_s();
    let mut der = signature.serialize_der().to_vec();
    der.push(sighash_type);
    Ok(der)
}

/// Creates a version 1 transaction with one final input spending output 0 of
/// a random dummy txid, for simulating contract calls locally.
#[must_use]
pub fn new_dummy_tx() -> Tx {
    Tx {
        version: 1,
        inputs: vec![TxIn {
            prev_output: OutPoint {
                hash: Hash256(rand::random()),
                index: 0,
            },
            ..Default::default()
        }],
        outputs: vec![],
        lock_time: 0,
    }
}

/// Builds an input spending output `output_index` of `prev_tx` with an empty
/// unlock script, returned with the output it spends.
///
/// The output supplies the lock script and satoshis the sighash needs.
///
/// # Errors
/// `Error::BadArgument` if `prev_tx` has no such output.
pub fn create_input_from_prev_tx(prev_tx: &Tx, output_index: usize) -> Result<(TxIn, TxOut)> {
    let output = prev_tx.outputs.get(output_index).ok_or_else(|| {
        Error::BadArgument(format!(
            "Output index {} out of range for {} outputs",
            output_index,
            prev_tx.outputs.len()
        ))
    })?;
    let index = u32::try_from(output_index)
        .map_err(|_| Error::BadArgument(format!("Output index too large: {}", output_index)))?;
    let input = TxIn {
        prev_output: OutPoint {
            hash: prev_tx.hash()?,
            index,
        },
        ..Default::default()
    };
    Ok((input, output.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::SEQUENCE_FINAL;
    use crate::script::Script;
    use crate::util::sha256d;
    use pretty_assertions::assert_eq;
    use secp256k1::ecdsa::Signature;
    use secp256k1::PublicKey;

    #[test]
    fn signature_verifies_and_is_low_s() -> Result<()> {
        let key = [7u8; 32];
        let digest = sha256d(b"contract call");
        let der = generate_signature(&key, &digest, 0x41)?;
        assert_eq!(*der.last().unwrap(), 0x41);

        let secp = Secp256k1::new();
        let sk = SecretKey::from_slice(&key)?;
        let pk = PublicKey::from_secret_key(&secp, &sk);
        let sig = Signature::from_der(&der[..der.len() - 1])?;
        secp.verify_ecdsa(&Message::from_digest(digest.0), &sig, &pk)?;
        let mut normalized = sig;
        normalized.normalize_s();
        assert_eq!(normalized, sig);
        Ok(())
    }

    #[test]
    fn invalid_key() {
        let digest = sha256d(b"x");
        assert!(matches!(
            generate_signature(&[0u8; 32], &digest, 0x41),
            Err(Error::Secp256k1Error(_))
        ));
    }

    #[test]
    fn dummy_tx_shape() {
        let a = new_dummy_tx();
        let b = new_dummy_tx();
        assert_eq!(a.inputs.len(), 1);
        assert_eq!(a.inputs[0].prev_output.index, 0);
        assert_eq!(a.inputs[0].sequence, SEQUENCE_FINAL);
        assert!(a.outputs.is_empty());
        assert_ne!(a.inputs[0].prev_output.hash, b.inputs[0].prev_output.hash);
    }

    #[test]
    fn input_from_prev_tx_spends_the_output() -> Result<()> {
        let mut prev = new_dummy_tx();
        prev.outputs = vec![
            TxOut { satoshis: 1_000, lock_script: Script(vec![0x51]) },
            TxOut { satoshis: 2_500, lock_script: Script(vec![0x52, 0x87]) },
        ];
        let (input, spent) = create_input_from_prev_tx(&prev, 1)?;
        assert_eq!(input.prev_output.hash, prev.hash()?);
        assert_eq!(input.prev_output.index, 1);
        assert!(input.unlock_script.0.is_empty());
        assert_eq!(input.sequence, SEQUENCE_FINAL);
        assert_eq!(spent, prev.outputs[1]);

        let mut tx = Tx { version: 1, inputs: vec![input], outputs: vec![], lock_time: 0 };
        low_s::fix_low_s(&mut tx, &spent.lock_script.0, spent.satoshis, 0)?;
        Ok(())
    }

    #[test]
    fn input_from_prev_tx_out_of_range() {
        let prev = new_dummy_tx();
        assert!(matches!(
            create_input_from_prev_tx(&prev, 0),
            Err(Error::BadArgument(_))
        ));
    }
}
