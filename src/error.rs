#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid boolean value: {0:#04x}")]
    InvalidEncoding(u8),
    #[error("text field is not valid utf-8 at byte {0}")]
    InvalidText(usize),
    #[error("unexpected end of stream while reading {0} bytes")]
    UnexpectedEnd(usize),
    #[error("variable-length field too large to encode")]
    Overflow,
    #[error("type {0} has no wire representation")]
    UnsupportedType(&'static str),
    #[error("decode target is not a writable {0} slot")]
    InvalidTarget(&'static str),
    #[error("{0}")]
    Custom(&'static str),
    #[error(transparent)]
    Stream(#[from] std::io::Error),
}
