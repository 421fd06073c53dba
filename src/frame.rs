//! # Sentence Frame
//!
//! The envelope shared by every sentence type: locating and verifying the
//! `$<body>*<hh>` framing on the text path, normalizing the ordered-list
//! and keyed-map construction shapes into schema-ordered tokens, and
//! sealing outbound bodies back into wire form.
//!
//! Everything here is a structural check, so every failure is a rejection.
//! Field content is none of the frame's business; tokens leave this module
//! uninterpreted.

use std::collections::BTreeMap;

use crate::checksum;
use crate::error::Error;
use crate::field::FieldName;
use crate::talker::TalkerId;

/// A raw sentence in one of the three accepted construction shapes.
///
/// All three shapes are mutually consistent: parsing any of them and
/// serializing reproduces the same canonical wire text.
///
/// # Examples
///
/// ```rust
/// use nmea0183_codec::{DPT, RawSentence};
///
/// let from_text = DPT::new(RawSentence::Text("$SDDPT,76.2,0.8*6c")).unwrap();
/// let from_list = DPT::new(RawSentence::Fields(&["76.2", "0.8", "", "67"])).unwrap();
///
/// assert_eq!(from_text.water_depth, from_list.water_depth);
/// ```
#[derive(Debug, Clone, Copy)]
pub enum RawSentence<'a> {
    /// Delimited wire text, e.g. `"$GPGGA,...*47"`. Leading garbage before
    /// the `$` and trailing CR/LF are tolerated.
    Text(&'a str),
    /// Logical field values in schema order, followed by one trailing
    /// element holding the checksum of the canonical encoding.
    Fields(&'a [&'a str]),
    /// Logical field values keyed by name, with [`FieldName::Checksum`]
    /// carrying the checksum of the canonical encoding.
    Map(&'a BTreeMap<FieldName, &'a str>),
}

/// A checksum-verified text sentence split into address and data tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TextFrame<'a> {
    /// Talker resolved from the address token; `None` for unknown prefixes
    /// and the `--` placeholder.
    pub(crate) talker: Option<TalkerId>,
    /// The address token without its `$`, e.g. `GPGGA` or `PASHR`.
    pub(crate) address: &'a str,
    /// Data tokens between the address and the `*`, in wire order.
    pub(crate) fields: Vec<&'a str>,
}

/// Splits and verifies a text-shape sentence.
///
/// Parsing starts at the first `$` and runs to the end of the line minus
/// any CR/LF, so receiver-log lines with leading noise still frame. The
/// declared checksum must be exactly two hex digits (either case) and
/// match the XOR of the body.
pub(crate) fn split_text(line: &str) -> Result<TextFrame<'_>, Error> {
    let start = line.find('$').ok_or(Error::MissingStart)?;
    let sentence = line[start..].trim_end_matches(['\r', '\n']);

    if !sentence.is_ascii() {
        return Err(Error::NonAscii);
    }

    let (body, declared_token) = sentence[1..]
        .split_once('*')
        .ok_or(Error::MissingChecksum)?;
    let declared = checksum::hex_pair(declared_token)
        .ok_or_else(|| Error::InvalidChecksum(declared_token.to_owned()))?;
    let computed = checksum::compute(body);

    if computed != declared {
        return Err(Error::ChecksumMismatch { computed, declared });
    }

    let (address, fields) = match body.split_once(',') {
        Some((address, rest)) => (address, rest.split(',').collect()),
        None => (body, Vec::new()),
    };

    Ok(TextFrame {
        talker: TalkerId::resolve(address),
        address,
        fields,
    })
}

/// Splits a list-shape input into its field tokens and declared checksum.
///
/// The list must hold exactly `expected` logical values plus the trailing
/// checksum element. Verifying the declared value against the re-encoded
/// sentence is the caller's job; only the hex syntax is checked here.
pub(crate) fn split_list<'a>(
    tokens: &'a [&'a str],
    expected: usize,
) -> Result<(&'a [&'a str], u8), Error> {
    let (declared_token, fields) = match tokens.split_last() {
        Some(split) if tokens.len() == expected + 1 => split,
        _ => {
            return Err(Error::FieldCount {
                expected: expected + 1,
                found: tokens.len(),
            });
        }
    };

    let declared = checksum::hex_pair(declared_token)
        .ok_or_else(|| Error::InvalidChecksum((*declared_token).to_owned()))?;

    Ok((fields, declared))
}

/// Extracts schema-ordered field tokens from a map-shape input.
///
/// Every schema key and [`FieldName::Checksum`] must be present, and no
/// key outside the schema is accepted. The key set is closed by the
/// [`FieldName`] enum, so misspelled names cannot slip through as strings.
pub(crate) fn split_map<'a>(
    map: &BTreeMap<FieldName, &'a str>,
    schema: &[FieldName],
) -> Result<(Vec<&'a str>, u8), Error> {
    for key in map.keys() {
        if *key != FieldName::Checksum && !schema.contains(key) {
            return Err(Error::UnexpectedField(*key));
        }
    }

    let declared_token = map
        .get(&FieldName::Checksum)
        .ok_or(Error::MissingField(FieldName::Checksum))?;
    let declared = checksum::hex_pair(declared_token)
        .ok_or_else(|| Error::InvalidChecksum((*declared_token).to_owned()))?;

    let mut fields = Vec::with_capacity(schema.len());
    for name in schema {
        fields.push(*map.get(name).ok_or(Error::MissingField(*name))?);
    }

    Ok((fields, declared))
}

/// Builds the address token for a talker-prefixed sentence. A missing
/// talker renders the `--` placeholder.
pub(crate) fn address(talker: Option<TalkerId>, id: &str) -> String {
    match talker {
        Some(talker) => format!("{talker}{id}"),
        None => format!("--{id}"),
    }
}

/// Seals a finished body into wire form: `$<body>*<hh>`.
pub(crate) fn seal(body: &str) -> String {
    format!(
        "${body}*{}",
        checksum::to_hex(checksum::compute(body))
    )
}
