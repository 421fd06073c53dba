//! # Sentence Dispatch
//!
//! Stream-facing entry points. [`create_message`] is the forgiving front
//! door: any rejection becomes [`None`] so a consumer iterating receiver
//! output can skip bad lines without aborting, with the reason surfaced at
//! debug level. Callers that need the reject reason use
//! [`NmeaSentence::from_text`] directly.

use crate::sentences::NmeaSentence;

/// Extracts the type token from raw text: everything between `$` and the
/// first `,`, with any `-` placeholder characters removed. `"$GPGGA,..."`
/// and `"$--GGA,..."` both yield their concatenated talker+sentence-id
/// spelling (`"GPGGA"`, `"GGA"`).
///
/// Returns [`None`] when the input has no `$` delimiter. The token is not
/// checked against the supported sentence-id set.
pub fn find_sentence_type(raw: &str) -> Option<String> {
    let start = raw.find('$')?;
    let token = raw[start + 1..]
        .split([',', '*'])
        .next()?
        .trim_end_matches(['\r', '\n']);

    Some(token.replace('-', ""))
}

/// Parses one raw line into the matching sentence type, or [`None`] for
/// anything unparseable: framing problems, checksum mismatches, unknown
/// sentence ids, wrong field counts. Never panics on arbitrary input.
pub fn create_message(raw: &str) -> Option<NmeaSentence> {
    match NmeaSentence::from_text(raw) {
        Ok(sentence) => Some(sentence),
        Err(error) => {
            log::debug!("skipping unparseable sentence {raw:?}: {error}");
            None
        }
    }
}
