use std::fmt;
use std::io;

pub type Result<T> = std::result::Result<T, FormatError>;

/// Malformed version text or an out of range field count.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FormatError(pub(crate) &'static str);

impl FormatError {
    pub(crate) const EMPTY: Self = Self("empty version");
    pub(crate) const TOO_FEW_FIELDS: Self = Self("too few fields in version");
    pub(crate) const TOO_MANY_FIELDS: Self = Self("too many fields in version");
    pub(crate) const INVALID_FIELD: Self = Self("invalid version field");
    pub(crate) const FIELD_COUNT: Self = Self("field count out of range");

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    pub fn into_io_err(self) -> io::Error {
        io::Error::new(io::ErrorKind::InvalidData, self)
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for FormatError {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn into_io_err() {
        let e = FormatError::INVALID_FIELD.into_io_err();
        assert_eq!(e.kind(), io::ErrorKind::InvalidData);
        assert_eq!(e.to_string(), "invalid version field");
    }
}
