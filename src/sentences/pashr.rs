#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::field::{self, FieldName, cast, encode};
use crate::talker::TalkerId;

use super::{SentenceId, message_ops};

/// PASHR - RT300 proprietary roll and pitch sentence
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_pashr_rt300_proprietary_roll_and_pitch_sentence>
///
/// ```text
///           1         2   3 4   5   6   7   8   9   10 11
///           |         |   | |   |   |   |   |   |   |  |
///  $PASHR,hhmmss.sss,x.x,T,x.x,x.x,x.x,x.x,x.x,x.x,x,x*hh<CR><LF>
/// ```
///
/// The address is the fixed proprietary token `PASHR`: `P` is the
/// proprietary prefix and `ASHR` the Ashtech vendor mnemonic, so there is
/// no per-device talker to carry and none is stored.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PASHR {
    /// Time in UTC
    pub time: Option<time::Time>,
    /// Heading in degrees true
    pub heading: Option<f32>,
    /// Roll in degrees, positive for starboard side down
    pub roll: Option<f32>,
    /// Pitch in degrees, positive for bow up
    pub pitch: Option<f32>,
    /// Heave in meters, positive up
    pub heave: Option<f32>,
    /// Roll angle accuracy estimate in degrees
    pub roll_accuracy: Option<f32>,
    /// Pitch angle accuracy estimate in degrees
    pub pitch_accuracy: Option<f32>,
    /// Heading angle accuracy estimate in degrees
    pub heading_accuracy: Option<f32>,
    /// Aiding status bit, true when GPS aiding is active
    pub aiding_status: Option<bool>,
    /// IMU status bit, true when the IMU is out of synchronization
    pub imu_status: Option<bool>,
}

impl PASHR {
    /// Logical field schema, in list-shape binding order.
    pub const FIELDS: &'static [FieldName] = &[
        FieldName::Time,
        FieldName::Heading,
        FieldName::Roll,
        FieldName::Pitch,
        FieldName::Heave,
        FieldName::RollAccuracy,
        FieldName::PitchAccuracy,
        FieldName::HeadingAccuracy,
        FieldName::AidingStatus,
        FieldName::ImuStatus,
    ];

    /// The fixed proprietary talker.
    pub const fn talker_id(&self) -> Option<TalkerId> {
        Some(TalkerId::P)
    }

    pub(crate) fn from_wire(_talker: Option<TalkerId>, tokens: &[&str]) -> Result<Self, Error> {
        if tokens.len() != 11 {
            return Err(Error::FieldCount {
                expected: 11,
                found: tokens.len(),
            });
        }

        Ok(Self {
            time: cast(tokens[0]),
            heading: field::with_unit(tokens[1], tokens[2], 'T'),
            roll: cast(tokens[3]),
            pitch: cast(tokens[4]),
            heave: cast(tokens[5]),
            roll_accuracy: cast(tokens[6]),
            pitch_accuracy: cast(tokens[7]),
            heading_accuracy: cast(tokens[8]),
            aiding_status: cast(tokens[9]),
            imu_status: cast(tokens[10]),
        })
    }

    fn from_fields(tokens: &[&str]) -> Self {
        Self {
            time: cast(tokens[0]),
            heading: cast(tokens[1]),
            roll: cast(tokens[2]),
            pitch: cast(tokens[3]),
            heave: cast(tokens[4]),
            roll_accuracy: cast(tokens[5]),
            pitch_accuracy: cast(tokens[6]),
            heading_accuracy: cast(tokens[7]),
            aiding_status: cast(tokens[8]),
            imu_status: cast(tokens[9]),
        }
    }

    fn wire_body(&self) -> String {
        format!(
            "PASHR,{},{},T,{},{},{},{},{},{},{},{}",
            encode::time(self.time),
            encode::float(self.heading, 7, 3),
            encode::float(self.roll, 7, 3),
            encode::float(self.pitch, 7, 3),
            encode::float(self.heave, 7, 3),
            encode::float(self.roll_accuracy, 7, 3),
            encode::float(self.pitch_accuracy, 7, 3),
            encode::float(self.heading_accuracy, 7, 3),
            encode::bit(self.aiding_status),
            encode::bit(self.imu_status),
        )
    }
}

message_ops!(PASHR, SentenceId::PASHR);
