#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::field::{FieldName, cast, encode};
use crate::frame;
use crate::talker::TalkerId;

use super::{SentenceId, message_ops};

/// ZDA - Time and Date - UTC, day, month, year and local time zone
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_zda_time_date_utc_day_month_year_and_local_time_zone>
///
/// ```text
///         1         2  3  4    5  6  7
///         |         |  |  |    |  |  |
///  $--ZDA,hhmmss.ss,xx,xx,xxxx,xx,xx*hh<CR><LF>
/// ```
///
/// Zone hours carry the sign of the whole local offset (`-08,45` is eight
/// hours forty-five minutes behind UTC); zone minutes are an unsigned
/// magnitude.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZDA {
    /// Talker of the sentence, serialized as the `--` placeholder when absent
    pub talker_id: Option<TalkerId>,
    /// Time in UTC
    pub time: Option<time::Time>,
    /// Day of the month, 01 to 31
    pub day: Option<u8>,
    /// Month of the year, 01 to 12
    pub month: Option<u8>,
    /// Four-digit year
    pub year: Option<u16>,
    /// Local zone offset hours, signed
    pub zone_hours: Option<i8>,
    /// Local zone offset minutes, 00 to 59
    pub zone_minutes: Option<u8>,
}

impl ZDA {
    /// Logical field schema, in list-shape binding order.
    pub const FIELDS: &'static [FieldName] = &[
        FieldName::Time,
        FieldName::Day,
        FieldName::Month,
        FieldName::Year,
        FieldName::ZoneHours,
        FieldName::ZoneMinutes,
    ];

    pub(crate) fn from_wire(talker: Option<TalkerId>, tokens: &[&str]) -> Result<Self, Error> {
        if tokens.len() != 6 {
            return Err(Error::FieldCount {
                expected: 6,
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
            time: cast(tokens[0]),
            day: cast(tokens[1]),
            month: cast(tokens[2]),
            year: cast(tokens[3]),
            zone_hours: cast(tokens[4]),
            zone_minutes: cast(tokens[5]),
        }
    }

    fn wire_body(&self) -> String {
        format!(
            "{},{},{},{},{},{},{}",
            frame::address(self.talker_id, SentenceId::ZDA.as_str()),
            encode::time(self.time),
            encode::uint(self.day, 2),
            encode::uint(self.month, 2),
            encode::uint(self.year, 4),
            encode::zone_hours(self.zone_hours),
            encode::uint(self.zone_minutes, 2),
        )
    }
}

message_ops!(ZDA, SentenceId::ZDA);

impl From<time::OffsetDateTime> for ZDA {
    fn from(moment: time::OffsetDateTime) -> Self {
        let offset = moment.offset();

        Self {
            talker_id: None,
            time: Some(moment.time()),
            day: Some(moment.day()),
            month: Some(u8::from(moment.month())),
            year: moment.year().try_into().ok(),
            zone_hours: Some(offset.whole_hours()),
            zone_minutes: Some(offset.minutes_past_hour().unsigned_abs()),
        }
    }
}

/// A ZDA carrying a complete time, date, and zone converts back into a
/// concrete moment; any absent part makes the conversion `None`.
impl From<ZDA> for Option<time::OffsetDateTime> {
    fn from(zda: ZDA) -> Self {
        let time = zda.time?;
        let date = time::Date::from_calendar_date(
            i32::from(zda.year?),
            time::Month::try_from(zda.month?).ok()?,
            zda.day?,
        )
        .ok()?;

        let hours = zda.zone_hours?;
        let minutes = i8::try_from(zda.zone_minutes?).ok()?;
        let minutes = if hours < 0 { -minutes } else { minutes };
        let offset = time::UtcOffset::from_hms(hours, minutes, 0).ok()?;

        Some(time::PrimitiveDateTime::new(date, time).assume_offset(offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum;

    #[test]
    fn test_zda_parsing() {
        let body = "GPZDA,160012.71,11,03,2004,-1,00";
        let zda = ZDA::from_text(&frame::seal(body)).unwrap();

        assert_eq!(zda.talker_id, Some(TalkerId::GP));
        assert_eq!(
            zda.time,
            Some(time::Time::from_hms_milli(16, 0, 12, 710).unwrap())
        );
        assert_eq!(zda.day, Some(11));
        assert_eq!(zda.month, Some(3));
        assert_eq!(zda.year, Some(2004));
        assert_eq!(zda.zone_hours, Some(-1));
        assert_eq!(zda.zone_minutes, Some(0));

        // Zone hours normalize to the two-digit form on the way out.
        assert_eq!(
            zda.to_sentence(),
            frame::seal("GPZDA,160012.71,11,03,2004,-01,00")
        );
    }

    #[test]
    fn test_zda_rejects_wrong_cardinality() {
        for body in ["GPZDA,160012.71,11,03,2004,-1", "GPZDA,160012.71,11,03,2004,-1,00,x"] {
            let result = ZDA::from_text(&frame::seal(body));
            assert!(
                matches!(result, Err(Error::FieldCount { expected: 6, .. })),
                "Failed: {body:?}\n\t{result:?}"
            );
        }
    }

    #[test]
    fn test_zda_from_tokens() {
        let canonical_body = "--ZDA,123519,11,03,2004,-08,45";
        let declared = checksum::to_hex(checksum::compute(canonical_body));

        let tokens = ["123519", "11", "3", "2004", "-8", "45", declared.as_str()];
        let zda = ZDA::from_tokens(&tokens).unwrap();

        assert_eq!(zda.zone_hours, Some(-8));
        assert_eq!(zda.to_sentence(), frame::seal(canonical_body));
    }

    #[test]
    fn test_zda_from_offset_date_time() {
        let date = time::Date::from_calendar_date(2004, time::Month::March, 11).unwrap();
        let time = time::Time::from_hms_milli(16, 0, 12, 710).unwrap();
        let offset = time::UtcOffset::from_hms(-8, -45, 0).unwrap();
        let moment = time::PrimitiveDateTime::new(date, time).assume_offset(offset);

        let zda = ZDA::from(moment);
        assert_eq!(zda.day, Some(11));
        assert_eq!(zda.month, Some(3));
        assert_eq!(zda.year, Some(2004));
        assert_eq!(zda.zone_hours, Some(-8));
        assert_eq!(zda.zone_minutes, Some(45));

        assert_eq!(Option::<time::OffsetDateTime>::from(zda), Some(moment));
    }

    #[test]
    fn test_zda_incomplete_conversion_is_none() {
        let zda = ZDA {
            day: Some(11),
            month: Some(3),
            year: Some(2004),
            ..ZDA::default()
        };

        assert_eq!(Option::<time::OffsetDateTime>::from(zda), None);
    }
}
