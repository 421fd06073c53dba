#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::field::{FieldName, cast, encode};
use crate::frame;
use crate::talker::TalkerId;

use super::{SentenceId, message_ops};

/// DPT - Depth of Water
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_dpt_depth_of_water>
///
/// ```text
///         1   2   3
///         |   |   |
///  $--DPT,x.x,x.x,x.x*hh<CR><LF>
/// ```
///
/// A positive transducer offset is the distance from the transducer up to
/// the water line, a negative one down to the keel. The third field is the
/// NMEA 3.0 maximum range scale; older two-field sentences are accepted
/// and serialization always emits all three slots.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DPT {
    /// Talker of the sentence, serialized as the `--` placeholder when absent
    pub talker_id: Option<TalkerId>,
    /// Water depth below the transducer in meters
    pub water_depth: Option<f32>,
    /// Offset from the transducer in meters
    pub offset_from_transducer: Option<f32>,
    /// Maximum range scale in use in meters
    pub max_range_scale: Option<f32>,
}

impl DPT {
    /// Logical field schema, in list-shape binding order.
    pub const FIELDS: &'static [FieldName] = &[
        FieldName::WaterDepth,
        FieldName::TransducerOffset,
        FieldName::MaxRangeScale,
    ];

    pub(crate) fn from_wire(talker: Option<TalkerId>, tokens: &[&str]) -> Result<Self, Error> {
        let scale_token = match tokens.len() {
            2 => "",
            3 => tokens[2],
            found => {
                return Err(Error::FieldCount {
                    expected: 3,
                    found,
                });
            }
        };

        Ok(Self {
            talker_id: talker,
            water_depth: cast(tokens[0]),
            offset_from_transducer: cast(tokens[1]),
            max_range_scale: cast(scale_token),
        })
    }

    fn from_fields(tokens: &[&str]) -> Self {
        Self {
            talker_id: None,
            water_depth: cast(tokens[0]),
            offset_from_transducer: cast(tokens[1]),
            max_range_scale: cast(tokens[2]),
        }
    }

    fn wire_body(&self) -> String {
        format!(
            "{},{},{},{}",
            frame::address(self.talker_id, SentenceId::DPT.as_str()),
            encode::float(self.water_depth, 7, 3),
            encode::float(self.offset_from_transducer, 7, 3),
            encode::float(self.max_range_scale, 7, 3),
        )
    }
}

message_ops!(DPT, SentenceId::DPT);
