//! Binary serialization trait for wire objects.
use crate::util::Result;
use std::io;
use std::io::{Read, Write};

/// An object that may be serialized and deserialized.
pub trait Serializable<T> {
    /// Reads the object from serialized form.
    ///
    /// # Errors
    /// Propagates IO errors or invalid data.
    fn read(reader: &mut dyn Read) -> Result<T>
    where
        Self: Sized;

    /// Writes the object to serialized form.
    ///
    /// # Errors
    /// IO errors.
    fn write(&self, writer: &mut dyn Write) -> io::Result<()>;

    /// Serializes into a new byte vector.
    ///
    /// # Errors
    /// IO errors from `write`.
    fn to_bytes(&self) -> io::Result<Vec<u8>> {
        let mut v = Vec::new();
        self.write(&mut v)?;
        Ok(v)
    }

    /// Serializes into lowercase hex.
    ///
    /// # Errors
    /// IO errors from `write`.
    fn to_hex(&self) -> io::Result<String> {
        Ok(hex::encode(self.to_bytes()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::{LittleEndian, ReadBytesExt};
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    struct Pair(u16, u16);

    impl Serializable<Pair> for Pair {
        fn read(reader: &mut dyn Read) -> Result<Pair> {
            Ok(Pair(reader.read_u16::<LittleEndian>()?, reader.read_u16::<LittleEndian>()?))
        }
        fn write(&self, writer: &mut dyn Write) -> io::Result<()> {
            writer.write_all(&self.0.to_le_bytes())?;
            writer.write_all(&self.1.to_le_bytes())
        }
    }

    #[test]
    fn default_helpers() {
        let p = Pair(1, 0x0203);
        assert_eq!(p.to_bytes().unwrap(), vec![1, 0, 3, 2]);
        assert_eq!(p.to_hex().unwrap(), "01000302");
        let back = Pair::read(&mut Cursor::new(vec![1, 0, 3, 2])).unwrap();
        assert_eq!((back.0, back.1), (1, 0x0203));
    }

    #[test]
    fn short_read() {
        let e = Pair::read(&mut Cursor::new(vec![0u8; 3])).err().unwrap();
        assert_eq!(e.to_string(), "IO error: failed to fill whole buffer");
    }
}
