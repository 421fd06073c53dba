//! # Error Types
//!
//! The single error enum shared by every decode path in the crate.
//!
//! Every variant is a *rejection*: a condition under which no message object
//! is produced at all. Field-level problems (a token that fails its numeric
//! cast, an unknown enum letter, a bad hemisphere) are deliberately not
//! errors; they leave the affected field absent and the message intact. See
//! the crate-level documentation for the two-tier model.

use thiserror::Error;

use crate::field::FieldName;
use crate::sentences::SentenceId;

/// Reasons a raw sentence is rejected without producing a message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input contains no `$` start delimiter.
    #[error("missing '$' start delimiter")]
    MissingStart,

    /// The sentence contains no `*` checksum delimiter.
    #[error("missing '*' checksum delimiter")]
    MissingChecksum,

    /// The payload contains non-ASCII bytes.
    ///
    /// NMEA 0183 is an ASCII protocol; checksums are only meaningful over
    /// ASCII payloads.
    #[error("sentence contains non-ASCII data")]
    NonAscii,

    /// The declared checksum token is not exactly two hexadecimal digits.
    #[error("malformed checksum token {0:?}")]
    InvalidChecksum(String),

    /// The computed checksum does not match the declared one.
    ///
    /// Carries both the checksum computed over the received body and the
    /// value declared after the `*` delimiter.
    #[error("checksum mismatch: computed {computed:02x}, declared {declared:02x}")]
    ChecksumMismatch {
        /// Checksum computed from the received body
        computed: u8,
        /// Checksum declared in the sentence
        declared: u8,
    },

    /// The address token does not name a supported sentence type.
    #[error("unknown sentence type in address {0:?}")]
    UnknownSentenceType(String),

    /// A sentence of one type was handed to another type's constructor.
    #[error("sentence type mismatch: expected {expected}, found {found}")]
    SentenceMismatch {
        /// The type whose constructor was called
        expected: SentenceId,
        /// The type named by the address token
        found: SentenceId,
    },

    /// The token count does not match the schema.
    ///
    /// For wire text this counts the data tokens after the address token;
    /// for the list shape it counts the logical fields plus the trailing
    /// checksum element.
    #[error("expected {expected} fields, found {found}")]
    FieldCount {
        /// Token count the schema calls for
        expected: usize,
        /// Token count received
        found: usize,
    },

    /// A required key is missing from the map shape.
    #[error("missing field {0}")]
    MissingField(FieldName),

    /// The map shape contains a key outside the sentence's schema.
    #[error("unexpected field {0}")]
    UnexpectedField(FieldName),
}
