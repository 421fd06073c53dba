#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::field::{self, FieldName, cast, encode};
use crate::frame;
use crate::talker::TalkerId;

use super::{SentenceId, message_ops};

/// VHW - Water Speed and Heading
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vhw_water_speed_and_heading>
///
/// ```text
///         1   2 3   4 5   6 7   8
///         |   | |   | |   | |   |
///  $--VHW,x.x,T,x.x,M,x.x,N,x.x,K*hh<CR><LF>
/// ```
///
/// Speeds are through the water, not over ground.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VHW {
    /// Talker of the sentence, serialized as the `--` placeholder when absent
    pub talker_id: Option<TalkerId>,
    /// Heading in degrees true
    pub heading_true: Option<f32>,
    /// Heading in degrees magnetic
    pub heading_magnetic: Option<f32>,
    /// Speed through the water in knots
    pub water_speed_knots: Option<f32>,
    /// Speed through the water in kilometers per hour
    pub water_speed_kmh: Option<f32>,
}

impl VHW {
    /// Logical field schema, in list-shape binding order.
    pub const FIELDS: &'static [FieldName] = &[
        FieldName::HeadingTrue,
        FieldName::HeadingMagnetic,
        FieldName::SpeedKnots,
        FieldName::SpeedKmh,
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
            heading_true: field::with_unit(tokens[0], tokens[1], 'T'),
            heading_magnetic: field::with_unit(tokens[2], tokens[3], 'M'),
            water_speed_knots: field::with_unit(tokens[4], tokens[5], 'N'),
            water_speed_kmh: field::with_unit(tokens[6], tokens[7], 'K'),
        })
    }

    fn from_fields(tokens: &[&str]) -> Self {
        Self {
            talker_id: None,
            heading_true: cast(tokens[0]),
            heading_magnetic: cast(tokens[1]),
            water_speed_knots: cast(tokens[2]),
            water_speed_kmh: cast(tokens[3]),
        }
    }

    fn wire_body(&self) -> String {
        format!(
            "{},{},T,{},M,{},N,{},K",
            frame::address(self.talker_id, SentenceId::VHW.as_str()),
            encode::float(self.heading_true, 7, 3),
            encode::float(self.heading_magnetic, 7, 3),
            encode::float(self.water_speed_knots, 7, 3),
            encode::float(self.water_speed_kmh, 7, 3),
        )
    }
}

message_ops!(VHW, SentenceId::VHW);
