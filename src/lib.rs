//! # NMEA 0183 Codec
//!
//! A bidirectional codec for NMEA 0183, the ASCII sentence protocol spoken
//! by marine navigation and weather instruments, with the wire format:
//! `$HHH,D1,D2,...,Dn*CC\r\n`
//!
//! Both directions are covered:
//! - Parsing wire text into typed, checksum-verified messages
//! - Serializing messages back into canonical, checksummed sentences
//!
//! Messages can also be constructed from an ordered field list or a keyed
//! field map (see [`RawSentence`]); all three shapes are mutually
//! consistent and serialize to the same canonical text.
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_codec::{NmeaSentence, create_message};
//!
//! let line = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47";
//!
//! match NmeaSentence::from_text(line).unwrap() {
//!     NmeaSentence::GGA(gga) => {
//!         assert_eq!(gga.satellite_count, Some(8));
//!         assert_eq!(gga.to_sentence(), line);
//!     }
//!     _ => println!("Other sentence type parsed"),
//! }
//!
//! // Stream consumers skip anything unparseable instead of aborting.
//! let lines = [line, "not a sentence", "$HEROT,-11.23,A*07"];
//! let parsed: Vec<_> = lines.iter().filter_map(|raw| create_message(raw)).collect();
//! assert_eq!(parsed.len(), 2);
//! ```
//!
//! ## Error model
//!
//! Failures split into two tiers, and the split is part of the API
//! contract. Structural problems reject the whole sentence with an
//! [`Error`]: bad framing, checksum mismatches, wrong field counts,
//! unknown sentence ids. A field token that is merely unconvertible (a
//! non-numeric speed, an enum letter outside its vocabulary) costs only
//! that field, which reads as [`None`] on an otherwise valid message. A
//! message in hand therefore always means the sentence itself was well
//! formed.
//!
//! ## Feature flags
//!
//! - `serde`: `Serialize`/`Deserialize` on all message and content types.

pub mod checksum;
pub mod error;

mod dispatch;
mod field;
mod frame;
mod sentences;
mod talker;

pub use dispatch::{create_message, find_sentence_type};
pub use error::Error;
pub use field::FieldName;
pub use frame::RawSentence;
pub use sentences::{
    DPT, EastWest, FaaMode, FixQuality, GGA, GST, HDT, MWV, NmeaSentence, PASHR, RMC, ROT,
    SentenceId, Status, VHW, VTG, WindReference, WindSpeedUnit, ZDA,
};
pub use talker::TalkerId;

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;
