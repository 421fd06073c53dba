#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::field::{self, FieldName, cast, encode};
use crate::frame;
use crate::talker::TalkerId;

use super::{EastWest, FaaMode, SentenceId, Status, message_ops};

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///         1         2 3       4 5        6 7   8   9    10  11 12
///         |         | |       | |        | |   |   |    |   |  |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxxxx,x.x,a,m*hh<CR><LF>
/// ```
///
/// NMEA 2.3 appended the twelfth FAA mode field. Both layouts are accepted
/// on the way in; a sentence without the mode reads as
/// [`FaaMode::NotValid`], and serialization always emits the full
/// twelve-field form.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RMC {
    /// Talker of the sentence, serialized as the `--` placeholder when absent
    pub talker_id: Option<TalkerId>,
    /// Fix time in UTC
    pub fix_time: Option<time::Time>,
    /// Position status
    pub status: Option<Status>,
    /// Latitude in signed decimal degrees, northern hemisphere positive
    pub latitude: Option<f64>,
    /// Longitude in signed decimal degrees, eastern hemisphere positive
    pub longitude: Option<f64>,
    /// Speed over ground in knots
    pub speed_over_ground: Option<f32>,
    /// Track made good in degrees true
    pub course_over_ground: Option<f32>,
    /// Fix date as the raw `ddmmyy` token
    pub fix_date: Option<String>,
    /// Magnetic variation magnitude in degrees
    pub magnetic_variation: Option<f32>,
    /// Direction the magnetic variation applies
    pub magnetic_variation_direction: Option<EastWest>,
    /// FAA mode indicator
    pub faa_mode: FaaMode,
}

impl RMC {
    /// Logical field schema, in list-shape binding order.
    pub const FIELDS: &'static [FieldName] = &[
        FieldName::Time,
        FieldName::Status,
        FieldName::Latitude,
        FieldName::Longitude,
        FieldName::SpeedKnots,
        FieldName::Track,
        FieldName::Date,
        FieldName::MagneticVariation,
        FieldName::MagneticVariationDirection,
        FieldName::FaaMode,
    ];

    pub(crate) fn from_wire(talker: Option<TalkerId>, tokens: &[&str]) -> Result<Self, Error> {
        let faa_token = match tokens.len() {
            11 => "",
            12 => tokens[11],
            found => {
                return Err(Error::FieldCount {
                    expected: 12,
                    found,
                });
            }
        };

        Ok(Self {
            talker_id: talker,
            fix_time: cast(tokens[0]),
            status: cast(tokens[1]),
            latitude: field::latitude(tokens[2], tokens[3]),
            longitude: field::longitude(tokens[4], tokens[5]),
            speed_over_ground: cast(tokens[6]),
            course_over_ground: cast(tokens[7]),
            fix_date: cast(tokens[8]),
            magnetic_variation: cast(tokens[9]),
            magnetic_variation_direction: cast(tokens[10]),
            faa_mode: cast(faa_token).unwrap_or_default(),
        })
    }

    fn from_fields(tokens: &[&str]) -> Self {
        Self {
            talker_id: None,
            fix_time: cast(tokens[0]),
            status: cast(tokens[1]),
            latitude: cast(tokens[2]),
            longitude: cast(tokens[3]),
            speed_over_ground: cast(tokens[4]),
            course_over_ground: cast(tokens[5]),
            fix_date: cast(tokens[6]),
            magnetic_variation: cast(tokens[7]),
            magnetic_variation_direction: cast(tokens[8]),
            faa_mode: cast(tokens[9]).unwrap_or_default(),
        }
    }

    fn wire_body(&self) -> String {
        let address = frame::address(self.talker_id, SentenceId::RMC.as_str());
        let (latitude, ns) = encode::latitude(self.latitude);
        let (longitude, ew) = encode::longitude(self.longitude);

        format!(
            "{address},{},{},{latitude},{ns},{longitude},{ew},{},{},{},{},{},{}",
            encode::time(self.fix_time),
            encode::letter(self.status.map(|status| status.as_char())),
            encode::float(self.speed_over_ground, 4, 2),
            encode::float(self.course_over_ground, 5, 2),
            encode::raw(self.fix_date.as_ref()),
            encode::float(self.magnetic_variation, 5, 1),
            encode::letter(
                self.magnetic_variation_direction
                    .map(|direction| direction.as_char()),
            ),
            self.faa_mode.as_char(),
        )
    }
}

message_ops!(RMC, SentenceId::RMC);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum;

    const CANONICAL: &str =
        "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A";

    #[test]
    fn test_rmc_canonical_fields() {
        let rmc = RMC::from_text(CANONICAL).unwrap();

        assert_eq!(rmc.talker_id, Some(TalkerId::GP));
        assert_eq!(
            rmc.fix_time,
            Some(time::Time::from_hms(12, 35, 19).unwrap())
        );
        assert_eq!(rmc.status, Some(Status::Valid));
        assert!((rmc.latitude.unwrap() - 48.1173).abs() < 1e-9);
        assert!((rmc.longitude.unwrap() - (11.0 + 31.0 / 60.0)).abs() < 1e-9);
        assert_eq!(rmc.speed_over_ground, Some(22.4));
        assert_eq!(rmc.course_over_ground, Some(84.4));
        assert_eq!(rmc.fix_date.as_deref(), Some("230394"));
        assert_eq!(rmc.magnetic_variation, Some(3.1));
        assert_eq!(rmc.magnetic_variation_direction, Some(EastWest::West));
        assert_eq!(rmc.faa_mode, FaaMode::NotValid);
    }

    #[test]
    fn test_rmc_normalizes_to_the_twelve_field_form() {
        let rmc = RMC::from_text(CANONICAL).unwrap();

        assert_eq!(
            rmc.to_sentence(),
            frame::seal("GPRMC,123519,A,4807.038,N,01131.000,E,22.40,84.40,230394,003.1,W,N")
        );
    }

    #[test]
    fn test_rmc_reads_the_faa_mode_when_present() {
        let body = "GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W,D";
        let rmc = RMC::from_text(&frame::seal(body)).unwrap();

        assert_eq!(rmc.faa_mode, FaaMode::Differential);
    }

    #[test]
    fn test_rmc_rejects_wrong_cardinality() {
        let cases = [
            "GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1",
            "GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W,A,extra",
            "GPRMC,123519",
        ];

        for &body in &cases {
            let result = RMC::from_text(&frame::seal(body));
            assert!(
                matches!(result, Err(Error::FieldCount { expected: 12, .. })),
                "Failed: {body:?}\n\t{result:?}"
            );
        }
    }

    #[test]
    fn test_rmc_soft_nulls() {
        let body = "GPRMC,123519,X,4807.038,N,01131.000,E,fast,084.4,230394,003.1,W,A";
        let rmc = RMC::from_text(&frame::seal(body)).unwrap();

        assert_eq!(rmc.status, None);
        assert_eq!(rmc.speed_over_ground, None);
        assert_eq!(rmc.course_over_ground, Some(84.4));
    }

    #[test]
    fn test_rmc_from_tokens() {
        let canonical_body = "--RMC,,A,,,,,12.50,,,,,A";
        let declared = checksum::to_hex(checksum::compute(canonical_body));

        let tokens = ["", "A", "", "", "12.5", "", "", "", "", "A", declared.as_str()];
        let rmc = RMC::from_tokens(&tokens).unwrap();

        assert_eq!(rmc.status, Some(Status::Valid));
        assert_eq!(rmc.speed_over_ground, Some(12.5));
        assert_eq!(rmc.faa_mode, FaaMode::Autonomous);
        assert_eq!(rmc.to_sentence(), frame::seal(canonical_body));
    }
}
