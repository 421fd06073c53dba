#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::field::{FieldName, cast, encode};
use crate::frame;
use crate::talker::TalkerId;

use super::{SentenceId, Status, message_ops};

/// ROT - Rate Of Turn
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rot_rate_of_turn>
///
/// ```text
///         1   2
///         |   |
///  $--ROT,x.x,A*hh<CR><LF>
/// ```
///
/// Rate is degrees per minute, negative when the bow turns to port.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ROT {
    /// Talker of the sentence, serialized as the `--` placeholder when absent
    pub talker_id: Option<TalkerId>,
    /// Rate of turn in degrees per minute
    pub rate_of_turn: Option<f32>,
    /// Validity of the reading
    pub status: Option<Status>,
}

impl ROT {
    /// Logical field schema, in list-shape binding order.
    pub const FIELDS: &'static [FieldName] = &[FieldName::RateOfTurn, FieldName::Status];

    pub(crate) fn from_wire(talker: Option<TalkerId>, tokens: &[&str]) -> Result<Self, Error> {
        if tokens.len() != 2 {
            return Err(Error::FieldCount {
                expected: 2,
                found: tokens.len(),
            });
        }

        Ok(Self {
            talker_id: talker,
            ..Self::from_fields(tokens)
        })
    }

    fn from_fields(tokens: &[&str]) -> Self {
        Self {
            talker_id: None,
            rate_of_turn: cast(tokens[0]),
            status: cast(tokens[1]),
        }
    }

    fn wire_body(&self) -> String {
        format!(
            "{},{},{}",
            frame::address(self.talker_id, SentenceId::ROT.as_str()),
            encode::float(self.rate_of_turn, 7, 3),
            encode::letter(self.status.map(|status| status.as_char())),
        )
    }
}

message_ops!(ROT, SentenceId::ROT);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum;

    #[test]
    fn test_rot_parsing() {
        let rot = ROT::from_text("$HEROT,-11.23,A*07").unwrap();

        assert_eq!(rot.talker_id, Some(TalkerId::HE));
        assert_eq!(rot.rate_of_turn, Some(-11.23));
        assert_eq!(rot.status, Some(Status::Valid));

        assert_eq!(rot.to_sentence(), frame::seal("HEROT,-11.230,A"));
    }

    #[test]
    fn test_rot_soft_nulls() {
        let rot = ROT::from_text(&frame::seal("HEROT,fast,B")).unwrap();

        assert_eq!(rot.rate_of_turn, None);
        assert_eq!(rot.status, None);
        assert_eq!(rot.to_sentence(), frame::seal("HEROT,,"));
    }

    #[test]
    fn test_rot_rejects_wrong_cardinality() {
        for body in ["HEROT,-11.23", "HEROT,-11.23,A,extra"] {
            let result = ROT::from_text(&frame::seal(body));
            assert!(
                matches!(result, Err(Error::FieldCount { expected: 2, .. })),
                "Failed: {body:?}\n\t{result:?}"
            );
        }
    }

    #[test]
    fn test_rot_from_tokens() {
        let canonical_body = "--ROT,-11.230,A";
        let declared = checksum::to_hex(checksum::compute(canonical_body));

        let rot = ROT::from_tokens(&["-11.23", "A", declared.as_str()]).unwrap();

        assert_eq!(rot.rate_of_turn, Some(-11.23));
        assert_eq!(rot.to_sentence(), frame::seal(canonical_body));
    }
}
