//! Alphanumeric versions: `Major.Minor[.Build[.Revision]]` where every field is either a run of
//! decimal digits or a single letter.

use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter;
use std::str::FromStr;

use crate::error::{FormatError, Result};
use crate::util;

pub const MAX_FIELDS: usize = 4;

/// Raw text of a single version field.
///
/// Equality of `Field` is textual: `0200` and `200`, or `A` and `a`, are different fields even
/// though versions built from them compare equal.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Field {
    Number(String),
    Letter(char),
}

impl_is_as! { Field:
    is_number, as_number <= Number(v) -> &str { v.as_str() },
    is_letter, as_letter <= Letter(v) -> char { *v },
}

impl Field {
    fn parse(s: &str) -> Result<Self> {
        if util::is_digits(s) {
            Ok(Field::Number(s.into()))
        } else if let Some(c) = util::is_letter(s) {
            Ok(Field::Letter(c))
        } else {
            Err(FormatError::INVALID_FIELD)
        }
    }

    /// Numeric value of the field. `None` for letters and for numbers that don't fit `u64`.
    pub fn to_u64(&self) -> Option<u64> {
        self.as_number().and_then(|s| atoi::atoi(s.as_bytes()))
    }

    fn key(&self) -> Key {
        match self {
            Field::Number(s) => Key::Number(util::strip_zeros(s)),
            Field::Letter(c) => Key::Letter(*c),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Field::Number(s) => f.write_str(s),
            Field::Letter(c) => write!(f, "{}", c),
        }
    }
}

/// Normalized comparison token of one field position.
#[derive(Clone, Copy, Debug)]
enum Key<'a> {
    Number(&'a str),
    Letter(char),
    Text(&'a str),
}

impl<'a> Key<'a> {
    const ZERO: Key<'static> = Key::Number("0");

    fn of(field: Option<&'a Field>) -> Self {
        field.map_or(Self::ZERO, Field::key)
    }

    fn from_token(s: &'a str) -> Self {
        if util::is_digits(s) {
            Key::Number(util::strip_zeros(s))
        } else {
            Key::Text(s)
        }
    }

    fn text<'b>(&'b self, buf: &'b mut [u8; 4]) -> &'b str {
        match self {
            Key::Number(s) | Key::Text(s) => *s,
            Key::Letter(c) => &*c.encode_utf8(buf),
        }
    }

    // Numbers rank below anything non-numeric.
    fn compare(&self, other: &Key) -> Ordering {
        match (self, other) {
            (Key::Number(a), Key::Number(b)) => util::cmp_digits(a, b),
            (Key::Number(_), _) => Ordering::Less,
            (_, Key::Number(_)) => Ordering::Greater,
            (a, b) => {
                let (mut x, mut y) = ([0; 4], [0; 4]);
                util::cmp_folded(a.text(&mut x), b.text(&mut y))
            }
        }
    }

    fn hash_into<H: Hasher>(&self, state: &mut H) {
        match self {
            Key::Number(s) => {
                0u8.hash(state);
                s.hash(state);
            }
            _ => {
                1u8.hash(state);
                let mut buf = [0; 4];
                for c in util::fold(self.text(&mut buf)) {
                    c.hash(state);
                }
            }
        }
    }
}

/// Three-way comparison of two field tokens.
///
/// Digit runs compare by numeric value regardless of length, any digit run sorts before
/// non-numeric text, and non-numeric text compares case-insensitively.
pub fn compare_tokens(a: &str, b: &str) -> Ordering {
    Key::from_token(a).compare(&Key::from_token(b))
}

/// Compares versions that might be missing altogether. A missing version sorts first.
pub fn compare(a: Option<&Version>, b: Option<&Version>) -> Ordering {
    a.cmp(&b)
}

#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde_with::SerializeDisplay, serde_with::DeserializeFromStr))]
pub struct Version {
    major: Field,
    minor: Field,
    build: Option<Field>,
    revision: Option<Field>,
}

impl Version {
    pub(crate) fn new(major: Field, minor: Field, build: Option<Field>, revision: Option<Field>)
        -> Self
    {
        assert!(build.is_some() || revision.is_none());
        Self {
            major,
            minor,
            build,
            revision,
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(FormatError::EMPTY);
        }

        let mut fields = Vec::with_capacity(MAX_FIELDS);
        for seg in s.split('.') {
            if fields.len() == MAX_FIELDS {
                return Err(FormatError::TOO_MANY_FIELDS);
            }
            fields.push(Field::parse(seg)?);
        }

        let mut it = fields.into_iter();
        match (it.next(), it.next()) {
            (Some(major), Some(minor)) => Ok(Self::new(major, minor, it.next(), it.next())),
            _ => Err(FormatError::TOO_FEW_FIELDS),
        }
    }

    /// Same as [`parse`](Self::parse) but for callers that only want to know whether `s` is a
    /// valid version.
    pub fn try_parse(s: &str) -> Option<Self> {
        Self::parse(s).ok()
    }

    pub fn major(&self) -> &Field {
        &self.major
    }

    /// Always `Some` for a parsed version.
    pub fn minor(&self) -> Option<&Field> {
        Some(&self.minor)
    }

    pub fn build(&self) -> Option<&Field> {
        self.build.as_ref()
    }

    pub fn revision(&self) -> Option<&Field> {
        self.revision.as_ref()
    }

    /// Field by zero-based position: major, minor, build, revision.
    pub fn field(&self, i: usize) -> Option<&Field> {
        match i {
            0 => Some(&self.major),
            1 => Some(&self.minor),
            2 => self.build(),
            3 => self.revision(),
            _ => None,
        }
    }

    /// Number of fields present in the source text, between 2 and 4.
    pub fn field_count(&self) -> usize {
        self.fields().count()
    }

    pub fn fields(&self) -> impl Iterator<Item=&Field> {
        iter::once(&self.major)
            .chain(iter::once(&self.minor))
            .chain(self.build.as_ref())
            .chain(self.revision.as_ref())
    }

    /// Display adapter that writes exactly `count` fields, filling missing ones with `0`.
    pub fn display_fields(&self, count: usize) -> Result<DisplayFields> {
        if count < 1 || count > MAX_FIELDS {
            return Err(FormatError::FIELD_COUNT);
        }
        Ok(DisplayFields {
            version: self,
            count,
        })
    }

    pub fn to_string_fields(&self, count: usize) -> Result<String> {
        self.display_fields(count).map(|v| v.to_string())
    }

    fn keys(&self) -> [Key; MAX_FIELDS] {
        [
            self.major.key(),
            self.minor.key(),
            Key::of(self.build.as_ref()),
            Key::of(self.revision.as_ref()),
        ]
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.keys(), other.keys());
        a.iter().zip(b.iter())
            .map(|(a, b)| a.compare(b))
            .find(|&o| o != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for key in &self.keys() {
            key.hash_into(state);
        }
    }
}

impl FromStr for Version {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = FormatError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.major)?;
        for field in self.fields().skip(1) {
            write!(f, ".{}", field)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Version({})", self)
    }
}

/// Returned by [`Version::display_fields`].
#[derive(Clone, Copy, Debug)]
pub struct DisplayFields<'a> {
    version: &'a Version,
    count: usize,
}

impl fmt::Display for DisplayFields<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.version.major)?;
        for i in 1..self.count {
            match self.version.field(i) {
                Some(field) => write!(f, ".{}", field)?,
                None => f.write_str(".0")?,
            }
        }
        Ok(())
    }
}
