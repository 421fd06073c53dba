//! # Checksum Engine
//!
//! XOR checksum computation and validation for NMEA 0183 sentences.
//!
//! The NMEA 0183 checksum is the XOR of every byte between the `$` prefix and
//! the `*` delimiter (both excluded), rendered as a two-digit hexadecimal
//! number. This module never trusts a checksum carried by input data:
//! serialization always recomputes from the outgoing body, and validation
//! always recomputes from the received body before comparing.

/// Calculates the XOR checksum of a sentence body.
///
/// The body is everything between the `$` prefix and the `*` delimiter,
/// excluding both. Folding XOR over an empty body yields `0`.
///
/// # Examples
///
/// ```rust
/// use nmea0183_codec::checksum::compute;
///
/// assert_eq!(compute("GPGGA,123456,data"), 0x41);
/// assert_eq!(
///     compute("GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,"),
///     0x47,
/// );
/// assert_eq!(compute(""), 0x00);
/// ```
pub fn compute(body: &str) -> u8 {
    body.bytes().fold(0u8, |accumulated_xor, byte| accumulated_xor ^ byte)
}

/// Formats a checksum value as a two-digit lowercase hexadecimal string.
///
/// The output is always exactly two digits, zero-padded. Lowercase is the
/// published rendering; [`hex_pair`] accepts either case on input.
///
/// # Examples
///
/// ```rust
/// use nmea0183_codec::checksum::to_hex;
///
/// assert_eq!(to_hex(0x47), "47");
/// assert_eq!(to_hex(0x0a), "0a");
/// assert_eq!(to_hex(0xff), "ff");
/// ```
pub fn to_hex(checksum: u8) -> String {
    format!("{checksum:02x}")
}

/// Verifies the checksum of a complete sentence.
///
/// Strips one leading `$` if present, splits at the *first* `*`, and
/// compares the checksum computed over the left-hand side against the
/// declared hexadecimal value on the right. Trailing whitespace after the
/// declared digits is tolerated.
///
/// Returns `false` for a missing `*` delimiter, a declared value that is
/// not exactly two hexadecimal digits, or a mismatch. Never panics.
///
/// # Examples
///
/// ```rust
/// use nmea0183_codec::checksum::validate;
///
/// assert!(validate("$GPGGA,123456,data*41"));
/// assert!(validate("GPGGA,123456,data*41"));
/// assert!(validate("$GPGGA,123456,data*41\r\n"));
/// assert!(!validate("$GPGGA,123456,data*42"));
/// assert!(!validate("$GPGGA,123456,data"));
/// ```
pub fn validate(sentence: &str) -> bool {
    let body = sentence.strip_prefix('$').unwrap_or(sentence);

    match body.split_once('*') {
        Some((body, declared)) => {
            let declared = declared.trim_end();
            match hex_pair(declared) {
                Some(declared) => compute(body) == declared,
                None => false,
            }
        }
        None => false,
    }
}

/// Parses a checksum token: exactly two hexadecimal digits, either case.
///
/// `u8::from_str_radix` alone would admit sign prefixes such as `"+f"`,
/// so the digits are checked first.
pub(crate) fn hex_pair(token: &str) -> Option<u8> {
    let bytes = token.as_bytes();
    if bytes.len() != 2 || !bytes.iter().all(u8::is_ascii_hexdigit) {
        return None;
    }

    u8::from_str_radix(token, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_known_bodies() {
        assert_eq!(compute(""), 0);
        assert_eq!(compute("GPGGA,123456,data"), 0x41);
        assert_eq!(
            compute("GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W"),
            0x6a,
        );
    }

    #[test]
    fn test_compute_is_order_sensitive() {
        assert_ne!(compute("GPGGA,12"), compute("GPGGA,21"));
    }

    #[test]
    fn test_to_hex_width_and_case() {
        assert_eq!(to_hex(0x00), "00");
        assert_eq!(to_hex(0x07), "07");
        assert_eq!(to_hex(0x6a), "6a");
        assert_eq!(to_hex(0xff), "ff");
    }

    #[test]
    fn test_validate() {
        let cases = [
            "$GPGGA,123456,data*41",
            "GPGGA,123456,data*41",
            "$GPGGA,123456,data*41\r\n",
            "$GPGGA,123456,data*41 \r\n",
            "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47",
        ];

        for &sentence in &cases {
            assert!(validate(sentence), "Failed: {sentence:?}");
        }

        let cases = [
            "$GPGGA,123456,data*42",  // wrong value
            "$GPGGA,123456,data",     // no delimiter
            "$GPGGA,123456,data*",    // empty token
            "$GPGGA,123456,data*4",   // one digit
            "$GPGGA,123456,data*411", // three digits
            "$GPGGA,123456,data*4x",  // not hex
            "",
        ];

        for &sentence in &cases {
            assert!(!validate(sentence), "Failed: {sentence:?}");
        }
    }

    #[test]
    fn test_validate_splits_at_first_star() {
        // Everything after the first '*' is the declared value; a second
        // '*' cannot re-frame the body.
        assert!(!validate("$AB*CD*12"));
    }

    #[test]
    fn test_hex_pair() {
        assert_eq!(hex_pair("47"), Some(0x47));
        assert_eq!(hex_pair("6A"), Some(0x6a));
        assert_eq!(hex_pair("6a"), Some(0x6a));
        assert_eq!(hex_pair("00"), Some(0x00));
        assert_eq!(hex_pair("+f"), None);
        assert_eq!(hex_pair("4"), None);
        assert_eq!(hex_pair("471"), None);
        assert_eq!(hex_pair(""), None);
        assert_eq!(hex_pair("g1"), None);
    }
}
