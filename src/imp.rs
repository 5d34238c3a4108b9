use super::{
    dispatch::{decode_field, encode_field},
    error::Error,
    wire, Decodable, Encodable, Field,
};
use arrayvec::ArrayVec;
use bytes::Bytes;
use std::{
    any::Any,
    io::{Read, Write},
};

macro_rules! impl_as_any {
    () => {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    };
}

impl Field for bool {
    impl_as_any!();

    fn encode_wire(&self, out: &mut dyn Write) -> Result<(), Error> {
        wire::write_bool(out, *self)
    }

    fn decode_wire(&mut self, input: &mut dyn Read) -> Result<(), Error> {
        *self = wire::read_bool(input)?;
        Ok(())
    }
}

macro_rules! impl_field_for_uint {
    ($ty:ty, $write:path, $read:path) => {
        impl Field for $ty {
            impl_as_any!();

            fn encode_wire(&self, out: &mut dyn Write) -> Result<(), Error> {
                $write(out, *self)
            }

            fn decode_wire(&mut self, input: &mut dyn Read) -> Result<(), Error> {
                *self = $read(input)?;
                Ok(())
            }
        }
    };
}

impl_field_for_uint!(u8, wire::write_u8, wire::read_u8);
impl_field_for_uint!(u16, wire::write_u16, wire::read_u16);
impl_field_for_uint!(u32, wire::write_u32, wire::read_u32);
impl_field_for_uint!(u64, wire::write_u64, wire::read_u64);

// Text is the bytes rule over the utf-8 representation.
impl Field for String {
    impl_as_any!();

    fn encode_wire(&self, out: &mut dyn Write) -> Result<(), Error> {
        wire::write_bytes(out, self.as_bytes())
    }

    fn decode_wire(&mut self, input: &mut dyn Read) -> Result<(), Error> {
        let buf = wire::read_bytes(input)?;
        *self =
            String::from_utf8(buf).map_err(|e| Error::InvalidText(e.utf8_error().valid_up_to()))?;
        Ok(())
    }
}

impl Field for Bytes {
    impl_as_any!();

    fn encode_wire(&self, out: &mut dyn Write) -> Result<(), Error> {
        wire::write_bytes(out, self)
    }

    fn decode_wire(&mut self, input: &mut dyn Read) -> Result<(), Error> {
        *self = Bytes::from(wire::read_bytes(input)?);
        Ok(())
    }
}

// A fixed-size array carries no prefix: the length is part of the type and
// known to both sides. Byte arrays skip per-element dispatch and travel as
// raw bytes.
impl<T: Field, const N: usize> Field for [T; N] {
    impl_as_any!();

    fn encode_wire(&self, out: &mut dyn Write) -> Result<(), Error> {
        if let Some(raw) = <dyn Any>::downcast_ref::<[u8; N]>(self) {
            return Ok(out.write_all(raw)?);
        }
        for item in self {
            encode_field(out, item)?;
        }
        Ok(())
    }

    fn decode_wire(&mut self, input: &mut dyn Read) -> Result<(), Error> {
        if let Some(raw) = <dyn Any>::downcast_mut::<[u8; N]>(self) {
            return wire::read_exact(input, raw);
        }
        for slot in self.iter_mut() {
            decode_field(input, slot)?;
        }
        Ok(())
    }
}

impl<T> Field for Vec<T>
where
    T: Field + Default,
{
    impl_as_any!();

    fn encode_wire(&self, out: &mut dyn Write) -> Result<(), Error> {
        if let Some(raw) = <dyn Any>::downcast_ref::<Vec<u8>>(self) {
            return wire::write_bytes(out, raw);
        }
        wire::write_len(out, self.len())?;
        for item in self {
            encode_field(out, item)?;
        }
        Ok(())
    }

    fn decode_wire(&mut self, input: &mut dyn Read) -> Result<(), Error> {
        if let Some(raw) = <dyn Any>::downcast_mut::<Vec<u8>>(self) {
            *raw = wire::read_bytes(input)?;
            return Ok(());
        }
        let len = wire::read_len(input)?;
        let mut out = Vec::new();
        for _ in 0..len {
            let mut item = T::default();
            decode_field(input, &mut item)?;
            out.push(item);
        }
        // the slot is replaced wholesale, never merged
        *self = out;
        Ok(())
    }
}

impl<T, const N: usize> Field for ArrayVec<T, N>
where
    T: Field + Default,
{
    impl_as_any!();

    fn encode_wire(&self, out: &mut dyn Write) -> Result<(), Error> {
        if let Some(raw) = <dyn Any>::downcast_ref::<ArrayVec<u8, N>>(self) {
            return wire::write_bytes(out, raw);
        }
        wire::write_len(out, self.len())?;
        for item in self {
            encode_field(out, item)?;
        }
        Ok(())
    }

    fn decode_wire(&mut self, input: &mut dyn Read) -> Result<(), Error> {
        let len = if let Some(raw) = <dyn Any>::downcast_mut::<ArrayVec<u8, N>>(self) {
            let buf = wire::read_bytes(input)?;
            raw.clear();
            return raw
                .try_extend_from_slice(&buf)
                .map_err(|_| Error::Overflow);
        } else {
            wire::read_len(input)?
        };
        if len > N {
            return Err(Error::Overflow);
        }
        let mut out = Self::new();
        for _ in 0..len {
            let mut item = T::default();
            decode_field(input, &mut item)?;
            out.push(item);
        }
        *self = out;
        Ok(())
    }
}

// Indirection is transparent on the wire: a boxed value dispatches, and
// canonicalizes for registry lookup, as its pointee.
impl<T: Field + ?Sized> Field for Box<T> {
    fn as_any(&self) -> &dyn Any {
        (**self).as_any()
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        (**self).as_any_mut()
    }

    fn as_encodable(&self) -> Option<&dyn Encodable> {
        (**self).as_encodable()
    }

    fn as_decodable(&mut self) -> Option<&mut dyn Decodable> {
        (**self).as_decodable()
    }

    fn encode_wire(&self, out: &mut dyn Write) -> Result<(), Error> {
        (**self).encode_wire(out)
    }

    fn decode_wire(&mut self, input: &mut dyn Read) -> Result<(), Error> {
        (**self).decode_wire(input)
    }
}

/// Wires a self-coding type into the dispatch engine.
///
/// The type must implement [`Encodable`] and [`Decodable`] (or one of them,
/// with the `encode_only`/`decode_only` forms).
#[macro_export]
macro_rules! impl_field_for_codec {
    ($ty:ty) => {
        impl $crate::Field for $ty {
            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::core::any::Any {
                self
            }

            fn as_encodable(&self) -> ::core::option::Option<&dyn $crate::Encodable> {
                ::core::option::Option::Some(self)
            }

            fn as_decodable(&mut self) -> ::core::option::Option<&mut dyn $crate::Decodable> {
                ::core::option::Option::Some(self)
            }
        }
    };
    ($ty:ty, encode_only) => {
        impl $crate::Field for $ty {
            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::core::any::Any {
                self
            }

            fn as_encodable(&self) -> ::core::option::Option<&dyn $crate::Encodable> {
                ::core::option::Option::Some(self)
            }
        }
    };
    ($ty:ty, decode_only) => {
        impl $crate::Field for $ty {
            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::core::any::Any {
                self
            }

            fn as_decodable(&mut self) -> ::core::option::Option<&mut dyn $crate::Decodable> {
                ::core::option::Option::Some(self)
            }
        }
    };
}

/// Wires a type into the dispatch engine for registry lookup only. Without
/// a registered codec such a type fails with `UnsupportedType`.
#[macro_export]
macro_rules! impl_field_for_well_known {
    ($ty:ty) => {
        impl $crate::Field for $ty {
            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::core::any::Any {
                self
            }
        }
    };
}
