use super::{
    error::Error,
    wellknown::{registry, TypeKey},
    Field,
};
use std::io::{Read, Write};

/// Encodes one value.
///
/// Rules are tried in a fixed order: the value's own codec, then the
/// well-known table, then the built-in wire rule. The same order applies
/// recursively to every element of a container.
pub fn encode_field(out: &mut dyn Write, value: &(impl Field + ?Sized)) -> Result<(), Error> {
    if let Some(custom) = value.as_encodable() {
        return custom.encode(out);
    }
    if let Some(encode) = registry().encoder(TypeKey::for_value(value.as_any())) {
        return encode(value.as_any(), out);
    }
    value.encode_wire(out)
}

/// Decodes one value into `slot`, replacing its contents.
pub fn decode_field(input: &mut dyn Read, slot: &mut (impl Field + ?Sized)) -> Result<(), Error> {
    if let Some(custom) = slot.as_decodable() {
        return custom.decode(input);
    }
    if let Some(decode) = registry().decoder(TypeKey::for_value(slot.as_any())) {
        return decode(slot.as_any_mut(), input);
    }
    slot.decode_wire(input)
}

/// Encodes values strictly left to right. The first failure aborts the
/// remainder; bytes already written stay written.
pub fn encode_fields(out: &mut dyn Write, values: &[&dyn Field]) -> Result<(), Error> {
    for value in values {
        encode_field(out, *value)?;
    }
    Ok(())
}

/// Decodes into slots strictly left to right, aborting on the first failure.
pub fn decode_fields(input: &mut dyn Read, slots: &mut [&mut dyn Field]) -> Result<(), Error> {
    for slot in slots.iter_mut() {
        decode_field(input, &mut **slot)?;
    }
    Ok(())
}
