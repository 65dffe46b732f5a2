//! Internal implementation of the deterministic file identifier.

use crate::{UuidError, UuidResult};
use std::{fmt, str::FromStr};

use ::uuid::Uuid;

/// Byte offsets of the hyphens in a canonical hyphenated UUID.
const HYPHEN_OFFSETS: [usize; 4] = [8, 13, 18, 23];

/// Length of a canonical hyphenated UUID.
const CANONICAL_LEN: usize = 36;

/// Identifier for a stored file, derived deterministically from its filename.
///
/// Once constructed the wrapped UUID always renders in canonical hyphenated lowercase form.
///
/// # Construction
/// - [`FileId::from_filename`] derives the identifier for a filename found on disk.
/// - [`FileId::parse`] validates an externally supplied identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(Uuid);

impl FileId {
    /// Derives the identifier for `filename`.
    ///
    /// This hashes the UTF-8 bytes of `filename` under the DNS namespace using the version-5
    /// (SHA-1) scheme. The same filename always yields the same identifier.
    pub fn from_filename(filename: &str) -> Self {
        Self(Uuid::new_v5(&Uuid::NAMESPACE_DNS, filename.as_bytes()))
    }

    /// Validates and parses an identifier string that must already be in canonical form.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidInput`] if `input` is not canonical.
    pub fn parse(input: &str) -> UuidResult<Self> {
        if !Self::is_canonical(input) {
            return Err(UuidError::InvalidInput(format!(
                "identifier must be a lowercase hyphenated UUID, got: '{}'",
                input
            )));
        }

        Uuid::parse_str(input)
            .map(Self)
            .map_err(|e| UuidError::InvalidInput(format!("invalid identifier '{}': {}", input, e)))
    }

    /// Returns true if `input` is a canonical hyphenated lowercase UUID.
    ///
    /// Purely syntactic: checks length, hyphen placement and that every other byte is a
    /// lowercase hex digit.
    pub fn is_canonical(input: &str) -> bool {
        input.len() == CANONICAL_LEN
            && input.bytes().enumerate().all(|(i, b)| {
                if HYPHEN_OFFSETS.contains(&i) {
                    b == b'-'
                } else {
                    matches!(b, b'0'..=b'9' | b'a'..=b'f')
                }
            })
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for FileId {
    type Err = UuidError;

    /// Equivalent to [`FileId::parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FileId::parse(s)
    }
}
