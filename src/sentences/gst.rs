#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::field::{FieldName, cast, encode};
use crate::frame;
use crate::talker::TalkerId;

use super::{SentenceId, message_ops};

/// GST - GPS Pseudorange Noise Statistics
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gst_gps_pseudorange_noise_statistics>
///
/// ```text
///         1         2   3   4   5   6   7   8
///         |         |   |   |   |   |   |   |
///  $--GST,hhmmss.ss,x.x,x.x,x.x,x.x,x.x,x.x,x.x*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GST {
    /// Talker of the sentence, serialized as the `--` placeholder when absent
    pub talker_id: Option<TalkerId>,
    /// Time of the associated fix in UTC
    pub fix_time: Option<time::Time>,
    /// RMS value of the pseudorange residuals in meters
    pub rms_std_dev: Option<f32>,
    /// Standard deviation of the error ellipse semi-major axis in meters
    pub semi_major_std_dev: Option<f32>,
    /// Standard deviation of the error ellipse semi-minor axis in meters
    pub semi_minor_std_dev: Option<f32>,
    /// Orientation of the semi-major axis in degrees true
    pub orientation: Option<f32>,
    /// Standard deviation of the latitude error in meters
    pub lat_std_dev: Option<f32>,
    /// Standard deviation of the longitude error in meters
    pub lon_std_dev: Option<f32>,
    /// Standard deviation of the altitude error in meters
    pub alt_std_dev: Option<f32>,
}

impl GST {
    /// Logical field schema, in list-shape binding order.
    pub const FIELDS: &'static [FieldName] = &[
        FieldName::Time,
        FieldName::RmsStdDev,
        FieldName::SemiMajorStdDev,
        FieldName::SemiMinorStdDev,
        FieldName::Orientation,
        FieldName::LatStdDev,
        FieldName::LonStdDev,
        FieldName::AltStdDev,
    ];

    pub(crate) fn from_wire(talker: Option<TalkerId>, tokens: &[&str]) -> Result<Self, Error> {
        if tokens.len() != 8 {
            return Err(Error::FieldCount {
                expected: 8,
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
            fix_time: cast(tokens[0]),
            rms_std_dev: cast(tokens[1]),
            semi_major_std_dev: cast(tokens[2]),
            semi_minor_std_dev: cast(tokens[3]),
            orientation: cast(tokens[4]),
            lat_std_dev: cast(tokens[5]),
            lon_std_dev: cast(tokens[6]),
            alt_std_dev: cast(tokens[7]),
        }
    }

    fn wire_body(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},{},{}",
            frame::address(self.talker_id, SentenceId::GST.as_str()),
            encode::time(self.fix_time),
            encode::plain(self.rms_std_dev, 1),
            encode::plain(self.semi_major_std_dev, 1),
            encode::plain(self.semi_minor_std_dev, 1),
            encode::plain(self.orientation, 1),
            encode::plain(self.lat_std_dev, 1),
            encode::plain(self.lon_std_dev, 1),
            encode::plain(self.alt_std_dev, 1),
        )
    }
}

message_ops!(GST, SentenceId::GST);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum;

    #[test]
    fn test_gst_parsing() {
        let body = "GPGST,172814.0,0.006,0.023,0.020,273.6,0.023,0.020,0.031";
        let gst = GST::from_text(&frame::seal(body)).unwrap();

        assert_eq!(gst.talker_id, Some(TalkerId::GP));
        assert_eq!(
            gst.fix_time,
            Some(time::Time::from_hms(17, 28, 14).unwrap())
        );
        assert_eq!(gst.rms_std_dev, Some(0.006));
        assert_eq!(gst.orientation, Some(273.6));
        assert_eq!(gst.alt_std_dev, Some(0.031));
    }

    #[test]
    fn test_gst_serializes_at_one_decimal() {
        let gst = GST {
            talker_id: Some(TalkerId::GN),
            fix_time: Some(time::Time::from_hms(17, 28, 14).unwrap()),
            rms_std_dev: Some(1.23),
            orientation: Some(273.6),
            ..GST::default()
        };

        assert_eq!(
            gst.to_sentence(),
            frame::seal("GNGST,172814,1.2,,,273.6,,,")
        );
    }

    #[test]
    fn test_gst_rejects_wrong_cardinality() {
        for body in ["GPGST,172814.0,0.006", "GPGST,172814.0,1,2,3,4,5,6,7,8"] {
            let result = GST::from_text(&frame::seal(body));
            assert!(
                matches!(result, Err(Error::FieldCount { expected: 8, .. })),
                "Failed: {body:?}\n\t{result:?}"
            );
        }
    }

    #[test]
    fn test_gst_from_tokens() {
        let canonical_body = "--GST,172814,0.5,0.3,0.2,273.6,0.3,0.2,0.5";
        let declared = checksum::to_hex(checksum::compute(canonical_body));

        let tokens = [
            "172814",
            "0.5",
            "0.3",
            "0.2",
            "273.6",
            "0.3",
            "0.2",
            "0.5",
            declared.as_str(),
        ];
        let gst = GST::from_tokens(&tokens).unwrap();

        assert_eq!(gst.semi_major_std_dev, Some(0.3));
        assert_eq!(gst.to_sentence(), frame::seal(canonical_body));
    }
}
