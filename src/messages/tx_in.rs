//! Transaction input.
use crate::messages::{read_script, OutPoint};
use crate::script::Script;
use crate::util::{var_int, Result, Serializable};
use byteorder::{LittleEndian, ReadBytesExt};
use std::io;
use std::io::{Read, Write};

/// Sequence number of a final input.
pub const SEQUENCE_FINAL: u32 = 0xffff_ffff;

/// Transaction input.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct TxIn {
    /// The previous output transaction reference.
    pub prev_output: OutPoint,
    /// Script satisfying the spent output's lock script.
    pub unlock_script: Script,
    /// Sequence number. Covered by the sighash, so changing it changes the digest.
    pub sequence: u32,
}

impl Default for TxIn {
    fn default() -> TxIn {
        TxIn {
            prev_output: OutPoint::default(),
            unlock_script: Script::new(),
            sequence: SEQUENCE_FINAL,
        }
    }
}

impl TxIn {
    /// Returns the size of the transaction input in bytes.
    #[must_use]
    #[inline]
    pub fn size(&self) -> usize {
        OutPoint::SIZE
            + var_int::size(self.unlock_script.0.len() as u64)
            + self.unlock_script.0.len()
            + 4
    }
}

impl Serializable<TxIn> for TxIn {
    fn read(reader: &mut dyn Read) -> Result<TxIn> {
        let prev_output = OutPoint::read(reader)?;
        let unlock_script = read_script(reader)?;
        let sequence = reader.read_u32::<LittleEndian>()?;
        Ok(TxIn {
            prev_output,
            unlock_script,
            sequence,
        })
    }

    fn write(&self, writer: &mut dyn Write) -> io::Result<()> {
        self.prev_output.write(writer)?;
        var_int::write(self.unlock_script.0.len() as u64, writer)?;
        writer.write_all(&self.unlock_script.0)?;
        writer.write_all(&self.sequence.to_le_bytes())
    }
}
