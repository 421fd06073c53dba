#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::field::{self, FieldName, cast, encode};
use crate::frame;
use crate::talker::TalkerId;

use super::{FixQuality, SentenceId, message_ops};

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                      11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
///
/// On the wire, latitude and longitude travel as `ddmm.mm` magnitudes with
/// a separate hemisphere letter and the two altitude values carry an `M`
/// unit marker. The decoded message holds signed decimal degrees and bare
/// meters instead; the wire composites are rebuilt on serialization.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GGA {
    /// Talker of the sentence, serialized as the `--` placeholder when absent
    pub talker_id: Option<TalkerId>,
    /// Fix time in UTC
    pub fix_time: Option<time::Time>,
    /// Latitude in signed decimal degrees, northern hemisphere positive
    pub latitude: Option<f64>,
    /// Longitude in signed decimal degrees, eastern hemisphere positive
    pub longitude: Option<f64>,
    /// GPS Quality Indicator
    pub fix_quality: Option<FixQuality>,
    /// Number of satellites in use
    pub satellite_count: Option<u8>,
    /// Horizontal Dilution of Precision
    pub hdop: Option<f32>,
    /// Altitude above/below mean sea level (geoid) in meters
    pub altitude: Option<f32>,
    /// Geoidal separation in meters, the difference between the WGS-84 earth ellipsoid and mean sea level (geoid),
    /// negative values indicate that the geoid is below the ellipsoid
    pub geoidal_separation: Option<f32>,
    /// Age of Differential GPS data in seconds, null field when DGPS is not used
    pub age_of_dgps: Option<f32>,
    /// Differential reference station ID
    pub ref_station_id: Option<u16>,
}

impl GGA {
    /// Logical field schema, in list-shape binding order.
    pub const FIELDS: &'static [FieldName] = &[
        FieldName::Time,
        FieldName::Latitude,
        FieldName::Longitude,
        FieldName::FixQuality,
        FieldName::SatelliteCount,
        FieldName::Hdop,
        FieldName::Altitude,
        FieldName::GeoidalSeparation,
        FieldName::AgeOfDgps,
        FieldName::RefStationId,
    ];

    pub(crate) fn from_wire(talker: Option<TalkerId>, tokens: &[&str]) -> Result<Self, Error> {
        if tokens.len() != 14 {
            return Err(Error::FieldCount {
                expected: 14,
                found: tokens.len(),
            });
        }

        Ok(Self {
            talker_id: talker,
            fix_time: cast(tokens[0]),
            latitude: field::latitude(tokens[1], tokens[2]),
            longitude: field::longitude(tokens[3], tokens[4]),
            fix_quality: cast(tokens[5]),
            satellite_count: cast(tokens[6]),
            hdop: cast(tokens[7]),
            altitude: field::with_unit(tokens[8], tokens[9], 'M'),
            geoidal_separation: field::with_unit(tokens[10], tokens[11], 'M'),
            age_of_dgps: cast(tokens[12]),
            ref_station_id: cast(tokens[13]),
        })
    }

    fn from_fields(tokens: &[&str]) -> Self {
        Self {
            talker_id: None,
            fix_time: cast(tokens[0]),
            latitude: cast(tokens[1]),
            longitude: cast(tokens[2]),
            fix_quality: cast(tokens[3]),
            satellite_count: cast(tokens[4]),
            hdop: cast(tokens[5]),
            altitude: cast(tokens[6]),
            geoidal_separation: cast(tokens[7]),
            age_of_dgps: cast(tokens[8]),
            ref_station_id: cast(tokens[9]),
        }
    }

    fn wire_body(&self) -> String {
        let address = frame::address(self.talker_id, SentenceId::GGA.as_str());
        let (latitude, ns) = encode::latitude(self.latitude);
        let (longitude, ew) = encode::longitude(self.longitude);

        format!(
            "{address},{},{latitude},{ns},{longitude},{ew},{},{},{},{},M,{},M,{},{}",
            encode::time(self.fix_time),
            encode::letter(self.fix_quality.map(|quality| quality.as_char())),
            encode::uint(self.satellite_count, 2),
            encode::plain(self.hdop, 1),
            encode::plain(self.altitude, 1),
            encode::plain(self.geoidal_separation, 1),
            encode::plain(self.age_of_dgps, 1),
            encode::uint(self.ref_station_id, 4),
        )
    }
}

message_ops!(GGA, SentenceId::GGA);
