//! Pay-to-Public-Key-Hash (P2PKH) lock and unlock scripts.
use crate::script::op_codes::{OP_CHECKSIG, OP_DUP, OP_EQUALVERIFY, OP_HASH160, OP_PUSH};
use crate::script::Script;
use crate::util::{Error, Hash160, Result};

/// Creates P2PKH lock script (DUP HASH160 [hash] EQUALVERIFY CHECKSIG).
#[must_use]
pub fn create_lock_script(pubkey_hash: &Hash160) -> Script {
    let mut script = Script::new();
    script.append(OP_DUP);
    script.append(OP_HASH160);
    script.append(OP_PUSH + 20);
    script.append_slice(&pubkey_hash.0);
    script.append(OP_EQUALVERIFY);
    script.append(OP_CHECKSIG);
    script
}

/// Creates P2PKH unlock script (push sig, push pubkey).
///
/// # Errors
/// Only if a push is too large to encode.
pub fn create_unlock_script(sig: &[u8], public_key: &[u8]) -> Result<Script> {
    let mut script = Script::new();
    script.append_data(sig)?;
    script.append_data(public_key)?;
    Ok(script)
}

/// Checks if script is a P2PKH lock.
#[must_use]
pub fn check_lock_script(lock_script: &[u8]) -> bool {
    lock_script.len() == 25
        && lock_script[0] == OP_DUP
        && lock_script[1] == OP_HASH160
        && lock_script[2] == OP_PUSH + 20
        && lock_script[23] == OP_EQUALVERIFY
        && lock_script[24] == OP_CHECKSIG
}

/// Extracts the public key hash from a P2PKH lock.
///
/// # Errors
/// `Error::BadData` if the script is not a P2PKH lock.
pub fn extract_pubkeyhash(lock_script: &[u8]) -> Result<Hash160> {
    if !check_lock_script(lock_script) {
        return Err(Error::BadData("Not P2PKH lock".to_string()));
    }
    let mut hash160 = Hash160([0; 20]);
    hash160.0.copy_from_slice(&lock_script[3..23]);
    Ok(hash160)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::next_op;
    use crate::script::op_codes::OP_1;
    use pretty_assertions::assert_eq;

    #[test]
    fn lock_script_shape() {
        let s = create_lock_script(&Hash160([5; 20]));
        assert_eq!(s.to_hex(), format!("76a914{}88ac", "05".repeat(20)));
        assert!(check_lock_script(&s.0));
        assert_eq!(extract_pubkeyhash(&s.0).unwrap(), Hash160([5; 20]));
        let mut longer = s.clone();
        longer.append(OP_1);
        assert!(!check_lock_script(&longer.0));
        assert_eq!(
            extract_pubkeyhash(&longer.0).unwrap_err().to_string(),
            "Bad data: Not P2PKH lock"
        );
    }

    #[test]
    fn unlock_script_pushes() {
        let s = create_unlock_script(&[1; 72], &[2; 33]).unwrap();
        assert_eq!(s.0.len(), 1 + 72 + 1 + 33);
        assert_eq!(next_op(0, &s.0), 73);
        assert_eq!(next_op(73, &s.0), s.0.len());
        assert_eq!(&s.0[74..], &[2; 33]);
    }
}
