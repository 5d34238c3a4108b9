use super::{error::Error, wire};
use derive_more::Deref;
use std::{
    any::{self, Any, TypeId},
    collections::HashMap,
    io::{Read, Write},
    sync::OnceLock,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

/// Canonical registry key. Two values of the same concrete type modulo
/// indirection map to the same key: forwarding [`Field`] impls (`Box<T>`)
/// hand the engine the pointee's `Any` view, never their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deref)]
pub struct TypeKey(TypeId);

impl TypeKey {
    pub fn of<T: Any + ?Sized>() -> Self {
        Self(TypeId::of::<T>())
    }

    pub(crate) fn for_value(value: &dyn Any) -> Self {
        Self(value.type_id())
    }
}

pub type EncodeFn = Box<dyn Fn(&dyn Any, &mut dyn Write) -> Result<(), Error> + Send + Sync>;
pub type DecodeFn = Box<dyn Fn(&mut dyn Any, &mut dyn Read) -> Result<(), Error> + Send + Sync>;

struct Entry {
    encode: EncodeFn,
    decode: DecodeFn,
}

/// Table of codecs for concrete types whose wire representation is a
/// designed exception rather than a structural decomposition. Populated once
/// at process start, read-only afterwards.
pub struct Registry {
    entries: HashMap<TypeKey, Entry>,
}

impl Registry {
    fn with_builtins() -> Self {
        let mut reg = Self {
            entries: HashMap::new(),
        };
        reg.register::<SystemTime>(encode_system_time, decode_system_time);
        reg
    }

    /// Registers a codec pair for `T`.
    ///
    /// Registration is static configuration: a duplicate key is a wiring
    /// mistake and panics rather than silently shadowing a codec.
    pub fn register<T: Any>(
        &mut self,
        encode: fn(&T, &mut dyn Write) -> Result<(), Error>,
        decode: fn(&mut T, &mut dyn Read) -> Result<(), Error>,
    ) {
        let name = any::type_name::<T>();
        let entry = Entry {
            encode: Box::new(move |value, out| match value.downcast_ref::<T>() {
                Some(value) => encode(value, out),
                None => Err(Error::InvalidTarget(name)),
            }),
            decode: Box::new(move |slot, input| match slot.downcast_mut::<T>() {
                Some(slot) => decode(slot, input),
                None => Err(Error::InvalidTarget(name)),
            }),
        };
        if self.entries.insert(TypeKey::of::<T>(), entry).is_some() {
            panic!("duplicate well-known codec for {name}");
        }
    }

    pub fn encoder(&self, key: TypeKey) -> Option<&EncodeFn> {
        self.entries.get(&key).map(|entry| &entry.encode)
    }

    pub fn decoder(&self, key: TypeKey) -> Option<&DecodeFn> {
        self.entries.get(&key).map(|entry| &entry.decode)
    }
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Installs the process-wide well-known codec table.
///
/// Callable at most once, before the first encode or decode call; later
/// calls change nothing and return `false`. If never called, the first
/// codec call installs the built-in table.
pub fn configure(build: impl FnOnce(&mut Registry)) -> bool {
    let mut reg = Registry::with_builtins();
    build(&mut reg);
    REGISTRY.set(reg).is_ok()
}

pub(crate) fn registry() -> &'static Registry {
    REGISTRY.get_or_init(Registry::with_builtins)
}

// Timestamps travel as 8-byte big-endian unix seconds.
fn encode_system_time(v: &SystemTime, out: &mut dyn Write) -> Result<(), Error> {
    let secs = v
        .duration_since(UNIX_EPOCH)
        .map_err(|_| Error::Overflow)?
        .as_secs();
    wire::write_u64(out, secs)
}

fn decode_system_time(slot: &mut SystemTime, input: &mut dyn Read) -> Result<(), Error> {
    let secs = wire::read_u64(input)?;
    *slot = UNIX_EPOCH
        .checked_add(Duration::from_secs(secs))
        .ok_or(Error::Overflow)?;
    Ok(())
}

crate::impl_field_for_well_known!(SystemTime);

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn lookup_by_canonical_key() {
        let reg = Registry::with_builtins();
        assert!(reg.encoder(TypeKey::of::<SystemTime>()).is_some());
        assert!(reg.decoder(TypeKey::of::<SystemTime>()).is_some());

        // an unregistered type simply falls through
        assert!(reg.encoder(TypeKey::of::<u64>()).is_none());
        assert!(reg.decoder(TypeKey::of::<u64>()).is_none());
    }

    #[test]
    #[should_panic(expected = "duplicate well-known codec")]
    fn duplicate_registration() {
        let mut reg = Registry::with_builtins();
        reg.register::<SystemTime>(encode_system_time, decode_system_time);
    }

    #[test]
    fn system_time_vector() {
        let mut buf: Vec<u8> = vec![];
        encode_system_time(&(UNIX_EPOCH + Duration::from_secs(1)), &mut buf).unwrap();
        assert_eq!(buf, hex!("0000000000000001"));

        let mut slot = UNIX_EPOCH;
        decode_system_time(&mut slot, &mut &buf[..]).unwrap();
        assert_eq!(slot, UNIX_EPOCH + Duration::from_secs(1));
    }

    #[test]
    fn system_time_before_epoch() {
        let mut buf: Vec<u8> = vec![];
        let pre_epoch = UNIX_EPOCH - Duration::from_secs(1);
        assert!(matches!(
            encode_system_time(&pre_epoch, &mut buf),
            Err(Error::Overflow)
        ));
        assert!(buf.is_empty());
    }
}
