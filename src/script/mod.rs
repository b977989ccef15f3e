//! Script byte container and push helpers.
use crate::util::{Error, Result};
use op_codes::{OP_PUSHDATA1, OP_PUSHDATA2, OP_PUSHDATA4};
use std::fmt;

pub mod op_codes;

/// Transaction script (raw bytes).
#[derive(Default, Clone, PartialEq, Eq, Hash)]
pub struct Script(pub Vec<u8>);

impl Script {
    /// Creates an empty script.
    #[must_use]
    pub fn new() -> Script {
        Script(vec![])
    }

    /// Parses a script from hex.
    ///
    /// # Errors
    /// `Error::InvalidEncoding` if `s` is not hex.
    pub fn from_hex(s: &str) -> Result<Script> {
        hex::decode(s)
            .map(Script)
            .map_err(|e| Error::InvalidEncoding(format!("script hex: {}", e)))
    }

    /// Appends a single opcode or byte.
    pub fn append(&mut self, byte: u8) {
        self.0.push(byte);
    }

    /// Appends raw bytes without a length prefix.
    pub fn append_slice(&mut self, slice: &[u8]) {
        self.0.extend_from_slice(slice);
    }

    /// Appends `data` with the smallest push prefix that fits.
    ///
    /// # Errors
    /// `Error::BadArgument` if the data does not fit a 4-byte length.
    pub fn append_data(&mut self, data: &[u8]) -> Result<()> {
        let len = data.len();
        match len {
            0..=75 => self.0.push(len as u8),
            76..=0xff => {
                self.0.push(OP_PUSHDATA1);
                self.0.push(len as u8);
            }
            0x100..=0xffff => {
                self.0.push(OP_PUSHDATA2);
                self.0.extend_from_slice(&(len as u16).to_le_bytes());
            }
            _ => {
                let len = u32::try_from(len)
                    .map_err(|_| Error::BadArgument(format!("Push too large: {}", len)))?;
                self.0.push(OP_PUSHDATA4);
                self.0.extend_from_slice(&len.to_le_bytes());
            }
        }
        self.0.extend_from_slice(data);
        Ok(())
    }

    /// Hex of the script bytes.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

/// Returns the index of the operation following the one at `i`.
///
/// Truncated pushes return the script length.
#[cfg(test)]
pub(crate) fn next_op(i: usize, script: &[u8]) -> usize {
    if i >= script.len() {
        return script.len();
    }
    let next = match script[i] {
        len @ 1..=75 => i + 1 + len as usize,
        OP_PUSHDATA1 if i + 1 < script.len() => i + 2 + script[i + 1] as usize,
        OP_PUSHDATA2 if i + 2 < script.len() => {
            i + 3 + u16::from_le_bytes([script[i + 1], script[i + 2]]) as usize
        }
        OP_PUSHDATA4 if i + 4 < script.len() => {
            let mut len = [0u8; 4];
            len.copy_from_slice(&script[i + 1..i + 5]);
            i + 5 + u32::from_le_bytes(len) as usize
        }
        OP_PUSHDATA1 | OP_PUSHDATA2 | OP_PUSHDATA4 => script.len(),
        _ => i + 1,
    };
    next.min(script.len())
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Script({})", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::op_codes::*;
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn append_data_prefixes() {
        let mut s = Script::new();
        s.append_data(&[7; 75]).unwrap();
        assert_eq!(s.0[0], 75);
        assert_eq!(s.0.len(), 76);

        let mut s = Script::new();
        s.append_data(&[7; 76]).unwrap();
        assert_eq!(&s.0[..2], &[OP_PUSHDATA1, 76]);

        let mut s = Script::new();
        s.append_data(&[7; 256]).unwrap();
        assert_eq!(&s.0[..3], &[OP_PUSHDATA2, 0x00, 0x01]);
        assert_eq!(s.0.len(), 259);
    }

    #[test]
    fn next_op_walks_pushes() {
        let mut s = Script::new();
        s.append(OP_DUP);
        s.append_data(&[1, 2, 3]).unwrap();
        s.append_data(&[9; 80]).unwrap();
        s.append(OP_CHECKSIG);
        assert_eq!(next_op(0, &s.0), 1);
        assert_eq!(next_op(1, &s.0), 5);
        assert_eq!(next_op(5, &s.0), 87);
        assert_eq!(next_op(87, &s.0), 88);
        assert_eq!(next_op(0, &[OP_PUSH + 20, 1, 2]), 3);
        assert_eq!(next_op(0, &[OP_PUSHDATA2, 1]), 2);
    }

    #[test]
    fn hex_round_trip() {
        let s = Script::from_hex("76a914").unwrap();
        assert_eq!(s.0, vec![OP_DUP, OP_HASH160, 20]);
        assert_eq!(s.to_hex(), "76a914");
        assert!(Script::from_hex("7").is_err());
    }
}
