#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::field::{FieldName, cast, encode};
use crate::frame;
use crate::talker::TalkerId;

use super::{SentenceId, Status, WindReference, WindSpeedUnit, message_ops};

/// MWV - Wind Speed and Angle
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_mwv_wind_speed_and_angle>
///
/// ```text
///         1   2 3   4 5
///         |   | |   | |
///  $--MWV,x.x,a,x.x,a,A*hh<CR><LF>
/// ```
///
/// Unlike the fixed unit letters of [`VTG`](crate::VTG), the reference and
/// speed-unit letters here are data: the instrument chooses them per
/// sentence, so they decode into fields of their own instead of gating
/// their neighbors.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MWV {
    /// Talker of the sentence, serialized as the `--` placeholder when absent
    pub talker_id: Option<TalkerId>,
    /// Wind angle in degrees, 0 to 359
    pub wind_angle: Option<f32>,
    /// What the angle is measured against
    pub reference: Option<WindReference>,
    /// Wind speed in the declared unit
    pub wind_speed: Option<f32>,
    /// Unit of the wind speed
    pub speed_unit: Option<WindSpeedUnit>,
    /// Validity of the reading
    pub status: Option<Status>,
}

impl MWV {
    /// Logical field schema, in list-shape binding order.
    pub const FIELDS: &'static [FieldName] = &[
        FieldName::WindAngle,
        FieldName::Reference,
        FieldName::WindSpeed,
        FieldName::SpeedUnit,
        FieldName::Status,
    ];

    pub(crate) fn from_wire(talker: Option<TalkerId>, tokens: &[&str]) -> Result<Self, Error> {
        if tokens.len() != 5 {
            return Err(Error::FieldCount {
                expected: 5,
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
            wind_angle: cast(tokens[0]),
            reference: cast(tokens[1]),
            wind_speed: cast(tokens[2]),
            speed_unit: cast(tokens[3]),
            status: cast(tokens[4]),
        }
    }

    fn wire_body(&self) -> String {
        format!(
            "{},{},{},{},{},{}",
            frame::address(self.talker_id, SentenceId::MWV.as_str()),
            encode::float(self.wind_angle, 7, 3),
            encode::letter(self.reference.map(|reference| reference.as_char())),
            encode::float(self.wind_speed, 7, 3),
            encode::letter(self.speed_unit.map(|unit| unit.as_char())),
            encode::letter(self.status.map(|status| status.as_char())),
        )
    }
}

message_ops!(MWV, SentenceId::MWV);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum;

    #[test]
    fn test_mwv_parsing() {
        let mwv = MWV::from_text(&frame::seal("WIMWV,214.8,R,0.1,K,A")).unwrap();

        assert_eq!(mwv.talker_id, Some(TalkerId::WI));
        assert_eq!(mwv.wind_angle, Some(214.8));
        assert_eq!(mwv.reference, Some(WindReference::Relative));
        assert_eq!(mwv.wind_speed, Some(0.1));
        assert_eq!(mwv.speed_unit, Some(WindSpeedUnit::KilometersPerHour));
        assert_eq!(mwv.status, Some(Status::Valid));

        assert_eq!(
            mwv.to_sentence(),
            frame::seal("WIMWV,214.800,R,000.100,K,A")
        );
    }

    #[test]
    fn test_mwv_letters_are_data_not_structure() {
        // A bad reference letter drops only itself; the angle survives.
        let mwv = MWV::from_text(&frame::seal("WIMWV,214.8,X,0.1,K,A")).unwrap();

        assert_eq!(mwv.wind_angle, Some(214.8));
        assert_eq!(mwv.reference, None);
        assert_eq!(mwv.to_sentence(), frame::seal("WIMWV,214.800,,000.100,K,A"));
    }

    #[test]
    fn test_mwv_rejects_wrong_cardinality() {
        for body in ["WIMWV,214.8,R,0.1,K", "WIMWV,214.8,R,0.1,K,A,extra"] {
            let result = MWV::from_text(&frame::seal(body));
            assert!(
                matches!(result, Err(Error::FieldCount { expected: 5, .. })),
                "Failed: {body:?}\n\t{result:?}"
            );
        }
    }

    #[test]
    fn test_mwv_from_tokens() {
        let canonical_body = "--MWV,045.000,T,012.500,N,A";
        let declared = checksum::to_hex(checksum::compute(canonical_body));

        let tokens = ["45", "T", "12.5", "N", "A", declared.as_str()];
        let mwv = MWV::from_tokens(&tokens).unwrap();

        assert_eq!(mwv.reference, Some(WindReference::True));
        assert_eq!(mwv.speed_unit, Some(WindSpeedUnit::Knots));
        assert_eq!(mwv.to_sentence(), frame::seal(canonical_body));
    }
}
