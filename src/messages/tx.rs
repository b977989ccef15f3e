//! Bitcoin SV transaction.

use crate::messages::{TxIn, TxOut};
use crate::util::{sha256d, var_int, Error, Hash256, Result, Serializable};
use byteorder::{LittleEndian, ReadBytesExt};
use std::fmt;
use std::io;
use std::io::{Cursor, Read, Write};

/// Cap on input and output counts accepted when reading.
const MAX_IO_COUNT: u64 = 100_000_000;

/// Bitcoin transaction.
#[derive(Default, PartialEq, Eq, Hash, Clone)]
pub struct Tx {
    /// Transaction version.
    pub version: u32,
    /// Transaction inputs.
    pub inputs: Vec<TxIn>,
    /// Transaction outputs.
    pub outputs: Vec<TxOut>,
    /// The block number or timestamp at which this transaction is unlocked.
    pub lock_time: u32,
}

impl Tx {
    /// Calculates the hash of the transaction in wire order.
    ///
    /// # Errors
    /// Only if serialization fails.
    pub fn hash(&self) -> Result<Hash256> {
        Ok(sha256d(&self.to_bytes()?))
    }

    /// Transaction id as shown by explorers.
    ///
    /// # Errors
    /// Only if serialization fails.
    pub fn id(&self) -> Result<String> {
        Ok(self.hash()?.encode())
    }

    /// Parses a raw transaction from hex.
    ///
    /// # Errors
    /// `Error::InvalidEncoding` for bad hex, `Error::BadData` for trailing bytes,
    /// IO errors for truncated data.
    pub fn from_hex(s: &str) -> Result<Tx> {
        let bytes = hex::decode(s).map_err(|e| Error::InvalidEncoding(format!("tx hex: {}", e)))?;
        let mut cursor = Cursor::new(&bytes);
        let tx = Tx::read(&mut cursor)?;
        if cursor.position() as usize != bytes.len() {
            return Err(Error::BadData(format!(
                "{} trailing bytes after tx",
                bytes.len() - cursor.position() as usize
            )));
        }
        Ok(tx)
    }

    /// Serialized size in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        8 + var_int::size(self.inputs.len() as u64)
            + self.inputs.iter().map(TxIn::size).sum::<usize>()
            + var_int::size(self.outputs.len() as u64)
            + self.outputs.iter().map(TxOut::size).sum::<usize>()
    }
}

impl Serializable<Tx> for Tx {
    fn read(reader: &mut dyn Read) -> Result<Tx> {
        let version = reader.read_u32::<LittleEndian>()?;
        let n_inputs = var_int::read(reader)?;
        if n_inputs > MAX_IO_COUNT {
            return Err(Error::BadData(format!("Too many inputs: {}", n_inputs)));
        }
        let mut inputs = Vec::with_capacity(n_inputs.min(1024) as usize);
        for _ in 0..n_inputs {
            inputs.push(TxIn::read(reader)?);
        }
        let n_outputs = var_int::read(reader)?;
        if n_outputs > MAX_IO_COUNT {
            return Err(Error::BadData(format!("Too many outputs: {}", n_outputs)));
        }
        let mut outputs = Vec::with_capacity(n_outputs.min(1024) as usize);
        for _ in 0..n_outputs {
            outputs.push(TxOut::read(reader)?);
        }
        let lock_time = reader.read_u32::<LittleEndian>()?;
        Ok(Tx {
            version,
            inputs,
            outputs,
            lock_time,
        })
    }

    fn write(&self, writer: &mut dyn Write) -> io::Result<()> {
        writer.write_all(&self.version.to_le_bytes())?;
        var_int::write(self.inputs.len() as u64, writer)?;
        for tx_in in &self.inputs {
            tx_in.write(writer)?;
        }
        var_int::write(self.outputs.len() as u64, writer)?;
        for tx_out in &self.outputs {
            tx_out.write(writer)?;
        }
        writer.write_all(&self.lock_time.to_le_bytes())
    }
}

impl fmt::Debug for Tx {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let inputs_str = format!("[<{} inputs>]", self.inputs.len());
        let outputs_str = format!("[<{} outputs>]", self.outputs.len());
        let mut d = f.debug_struct("Tx");
        d.field("version", &self.version);
        if self.inputs.len() <= 3 {
            d.field("inputs", &self.inputs);
        } else {
            d.field("inputs", &inputs_str);
        }
        if self.outputs.len() <= 3 {
            d.field("outputs", &self.outputs);
        } else {
            d.field("outputs", &outputs_str);
        }
        d.field("lock_time", &self.lock_time).finish()
    }
}
