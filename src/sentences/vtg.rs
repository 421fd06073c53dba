#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::field::{self, FieldName, cast, encode};
use crate::frame;
use crate::talker::TalkerId;

use super::{FaaMode, SentenceId, message_ops};

/// VTG - Track Made Good and Ground Speed
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vtg_track_made_good_and_ground_speed>
///
/// ```text
///          1   2 3   4 5   6 7   8 9  10
///          |   | |   | |   | |   | |  |
///  $--VTG,x.x,T,x.x,M,x.x,N,x.x,K,m*hh<CR><LF>
/// ```
///
/// Each value travels with a fixed unit letter (`T`, `M`, `N`, `K`). The
/// letters are structure, not data: they are always emitted, and on the
/// way in a value whose letter is wrong or missing reads as absent. The
/// trailing FAA mode is the NMEA 2.3 addition and both layouts are
/// accepted, as in [`RMC`](crate::RMC).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VTG {
    /// Talker of the sentence, serialized as the `--` placeholder when absent
    pub talker_id: Option<TalkerId>,
    /// Course over ground in degrees true
    pub course_over_ground_true: Option<f32>,
    /// Course over ground in degrees magnetic
    pub course_over_ground_magnetic: Option<f32>,
    /// Speed over ground in knots
    pub speed_over_ground_knots: Option<f32>,
    /// Speed over ground in kilometers per hour
    pub speed_over_ground_kmh: Option<f32>,
    /// FAA mode indicator
    pub faa_mode: FaaMode,
}

impl VTG {
    /// Logical field schema, in list-shape binding order.
    pub const FIELDS: &'static [FieldName] = &[
        FieldName::CourseTrue,
        FieldName::CourseMagnetic,
        FieldName::SpeedKnots,
        FieldName::SpeedKmh,
        FieldName::FaaMode,
    ];

    pub(crate) fn from_wire(talker: Option<TalkerId>, tokens: &[&str]) -> Result<Self, Error> {
        let faa_token = match tokens.len() {
            8 => "",
            9 => tokens[8],
            found => {
                return Err(Error::FieldCount {
                    expected: 9,
                    found,
                });
            }
        };

        Ok(Self {
            talker_id: talker,
            course_over_ground_true: field::with_unit(tokens[0], tokens[1], 'T'),
            course_over_ground_magnetic: field::with_unit(tokens[2], tokens[3], 'M'),
            speed_over_ground_knots: field::with_unit(tokens[4], tokens[5], 'N'),
            speed_over_ground_kmh: field::with_unit(tokens[6], tokens[7], 'K'),
            faa_mode: cast(faa_token).unwrap_or_default(),
        })
    }

    fn from_fields(tokens: &[&str]) -> Self {
        Self {
            talker_id: None,
            course_over_ground_true: cast(tokens[0]),
            course_over_ground_magnetic: cast(tokens[1]),
            speed_over_ground_knots: cast(tokens[2]),
            speed_over_ground_kmh: cast(tokens[3]),
            faa_mode: cast(tokens[4]).unwrap_or_default(),
        }
    }

    fn wire_body(&self) -> String {
        format!(
            "{},{},T,{},M,{},N,{},K,{}",
            frame::address(self.talker_id, SentenceId::VTG.as_str()),
            encode::float(self.course_over_ground_true, 5, 2),
            encode::float(self.course_over_ground_magnetic, 5, 2),
            encode::float(self.speed_over_ground_knots, 4, 2),
            encode::float(self.speed_over_ground_kmh, 4, 2),
            self.faa_mode.as_char(),
        )
    }
}

message_ops!(VTG, SentenceId::VTG);
