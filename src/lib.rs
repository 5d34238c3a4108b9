mod dispatch;
mod error;
mod imp;
mod wellknown;
mod wire;

pub use self::{
    dispatch::{decode_field, decode_fields, encode_field, encode_fields},
    error::Error,
    wellknown::{configure, DecodeFn, EncodeFn, Registry, TypeKey},
};
use auto_impl::auto_impl;
#[cfg(feature = "derive")]
pub use mwire_derive::*;
use std::{
    any::Any,
    io::{Read, Write},
};

/// A type that takes full control of its own wire representation.
#[auto_impl(&, Box, Arc)]
pub trait Encodable {
    fn encode(&self, out: &mut dyn Write) -> Result<(), Error>;
}

/// Decoding counterpart of [`Encodable`]. Fills `self` from the stream.
pub trait Decodable {
    fn decode(&mut self, input: &mut dyn Read) -> Result<(), Error>;
}

/// A value the dispatch engine can put on the wire.
///
/// The engine probes each value in a fixed order: the self-codec hooks
/// ([`Field::as_encodable`]/[`Field::as_decodable`]), then the well-known
/// registry keyed by [`TypeKey`], then the built-in wire rule
/// ([`Field::encode_wire`]/[`Field::decode_wire`]). A type that overrides
/// nothing is rejected with [`Error::UnsupportedType`].
pub trait Field: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn as_encodable(&self) -> Option<&dyn Encodable> {
        None
    }

    fn as_decodable(&mut self) -> Option<&mut dyn Decodable> {
        None
    }

    fn encode_wire(&self, out: &mut dyn Write) -> Result<(), Error> {
        let _ = out;
        Err(Error::UnsupportedType(std::any::type_name::<Self>()))
    }

    fn decode_wire(&mut self, input: &mut dyn Read) -> Result<(), Error> {
        let _ = input;
        Err(Error::UnsupportedType(std::any::type_name::<Self>()))
    }
}
