#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::field::{self, FieldName, cast, encode};
use crate::frame;
use crate::talker::TalkerId;

use super::{SentenceId, message_ops};

/// HDT - Heading - True
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_hdt_heading_true>
///
/// ```text
///         1   2
///         |   |
///  $--HDT,x.x,T*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HDT {
    /// Talker of the sentence, serialized as the `--` placeholder when absent
    pub talker_id: Option<TalkerId>,
    /// Heading in degrees true
    pub heading_true: Option<f32>,
}

impl HDT {
    /// Logical field schema, in list-shape binding order.
    pub const FIELDS: &'static [FieldName] = &[FieldName::HeadingTrue];

    pub(crate) fn from_wire(talker: Option<TalkerId>, tokens: &[&str]) -> Result<Self, Error> {
        if tokens.len() != 2 {
            return Err(Error::FieldCount {
                expected: 2,
                found: tokens.len(),
            });
        }

        Ok(Self {
            talker_id: talker,
            heading_true: field::with_unit(tokens[0], tokens[1], 'T'),
        })
    }

    fn from_fields(tokens: &[&str]) -> Self {
        Self {
            talker_id: None,
            heading_true: cast(tokens[0]),
        }
    }

    fn wire_body(&self) -> String {
        format!(
            "{},{},T",
            frame::address(self.talker_id, SentenceId::HDT.as_str()),
            encode::float(self.heading_true, 7, 3),
        )
    }
}

message_ops!(HDT, SentenceId::HDT);
