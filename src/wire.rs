use super::error::Error;
use std::io::{ErrorKind, Read, Write};

pub(crate) const WIRE_FALSE: u8 = 0x00;
pub(crate) const WIRE_TRUE: u8 = 0x01;

/// Reads exactly `buf.len()` bytes. A stream that runs dry mid-field is an
/// encoding-level failure, not a stream failure.
pub(crate) fn read_exact(input: &mut dyn Read, buf: &mut [u8]) -> Result<(), Error> {
    input.read_exact(buf).map_err(|e| {
        if e.kind() == ErrorKind::UnexpectedEof {
            Error::UnexpectedEnd(buf.len())
        } else {
            Error::Stream(e)
        }
    })
}

macro_rules! uint_codec {
    ($write:ident, $read:ident, $ty:ty) => {
        pub(crate) fn $write(out: &mut dyn Write, v: $ty) -> Result<(), Error> {
            Ok(out.write_all(&v.to_be_bytes())?)
        }

        pub(crate) fn $read(input: &mut dyn Read) -> Result<$ty, Error> {
            let mut buf = [0_u8; ::core::mem::size_of::<$ty>()];
            read_exact(input, &mut buf)?;
            Ok(<$ty>::from_be_bytes(buf))
        }
    };
}

uint_codec!(write_u8, read_u8, u8);
uint_codec!(write_u16, read_u16, u16);
uint_codec!(write_u32, read_u32, u32);
uint_codec!(write_u64, read_u64, u64);

pub(crate) fn write_bool(out: &mut dyn Write, v: bool) -> Result<(), Error> {
    write_u8(out, if v { WIRE_TRUE } else { WIRE_FALSE })
}

pub(crate) fn read_bool(input: &mut dyn Read) -> Result<bool, Error> {
    match read_u8(input)? {
        WIRE_FALSE => Ok(false),
        WIRE_TRUE => Ok(true),
        other => Err(Error::InvalidEncoding(other)),
    }
}

/// Writes the 4-byte big-endian length prefix. The overflow check runs
/// before any byte reaches the stream.
pub(crate) fn write_len(out: &mut dyn Write, len: usize) -> Result<(), Error> {
    let len = u32::try_from(len).map_err(|_| Error::Overflow)?;
    write_u32(out, len)
}

pub(crate) fn read_len(input: &mut dyn Read) -> Result<usize, Error> {
    Ok(read_u32(input)? as usize)
}

pub(crate) fn write_bytes(out: &mut dyn Write, bytes: &[u8]) -> Result<(), Error> {
    write_len(out, bytes.len())?;
    Ok(out.write_all(bytes)?)
}

pub(crate) fn read_bytes(input: &mut dyn Read) -> Result<Vec<u8>, Error> {
    let len = read_len(input)?;
    let mut buf = vec![0_u8; len];
    read_exact(input, &mut buf)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn uint_big_endian() {
        let mut buf: Vec<u8> = vec![];
        write_u16(&mut buf, 0).unwrap();
        write_u16(&mut buf, u16::MAX).unwrap();
        assert_eq!(buf, hex!("0000ffff"));

        let mut buf: Vec<u8> = vec![];
        write_u32(&mut buf, 0x0102_0304).unwrap();
        write_u64(&mut buf, 0x0102_0304_0506_0708).unwrap();
        assert_eq!(buf, hex!("010203040102030405060708"));

        let mut input = &buf[..];
        assert_eq!(read_u32(&mut input).unwrap(), 0x0102_0304);
        assert_eq!(read_u64(&mut input).unwrap(), 0x0102_0304_0506_0708);
    }

    #[test]
    fn bool_strictness() {
        for (wire, expected) in [(&hex!("00"), false), (&hex!("01"), true)] {
            assert_eq!(read_bool(&mut &wire[..]).unwrap(), expected);
        }

        for bad in [0x02_u8, 0x80, 0xff] {
            assert!(matches!(
                read_bool(&mut &[bad][..]),
                Err(Error::InvalidEncoding(b)) if b == bad
            ));
        }
    }

    #[test]
    fn bytes_prefix() {
        let mut buf: Vec<u8> = vec![];
        write_bytes(&mut buf, &[0x01, 0x02]).unwrap();
        assert_eq!(buf, hex!("000000020102"));

        assert_eq!(read_bytes(&mut &buf[..]).unwrap(), vec![0x01, 0x02]);
    }

    #[test]
    fn truncated_bytes() {
        let wire = hex!("000000050102");
        assert!(matches!(
            read_bytes(&mut &wire[..]),
            Err(Error::UnexpectedEnd(5))
        ));
    }

    #[test]
    fn overflow_writes_nothing() {
        let mut buf: Vec<u8> = vec![];
        let too_long = u32::MAX as usize + 1;
        assert!(matches!(write_len(&mut buf, too_long), Err(Error::Overflow)));
        assert!(buf.is_empty());
    }
}
