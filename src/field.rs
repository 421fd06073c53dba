//! # Field Codec
//!
//! Best-effort conversion between wire tokens and typed field values.
//!
//! Casting here is deliberately soft: a token that does not convert yields
//! [`None`], never an error. Structural problems (token counts, checksums,
//! delimiters) are the frame's business; by the time a token reaches this
//! module the sentence has already been accepted, and the worst a bad token
//! can do is leave its field absent. Every cast is whole-token: trailing
//! garbage fails the conversion.
//!
//! The typed side of the codec speaks plain units. Latitude and longitude
//! are signed decimal degrees (south and west negative); the `ddmm.mmm` +
//! hemisphere-letter encoding exists only on the wire and is handled by the
//! conversion helpers here.

use nom::{
    Parser,
    bytes::complete::take,
    character::complete,
    combinator::{all_consuming, opt, peek},
    number::complete::{double, float},
    sequence::preceded,
};
use time::Time;

/// A field value that can be cast from a single wire token.
///
/// Implementations are whole-token and infallible in the error sense:
/// malformed input is simply `None`.
pub(crate) trait FieldCast: Sized {
    fn cast(token: &str) -> Option<Self>;
}

/// Casts one token. Thin generic front over [`FieldCast`] so binders can
/// lean on inference from the target field type.
pub(crate) fn cast<T: FieldCast>(token: &str) -> Option<T> {
    T::cast(token)
}

macro_rules! impl_int_cast {
    ($($t:ty => $parser:expr),* $(,)?) => {
        $(
            impl FieldCast for $t {
                fn cast(token: &str) -> Option<Self> {
                    let result: nom::IResult<&str, $t> = all_consuming($parser).parse(token);
                    result.ok().map(|(_, value)| value)
                }
            }
        )*
    };
}

macro_rules! impl_float_cast {
    ($($t:ty => $parser:expr),* $(,)?) => {
        $(
            impl FieldCast for $t {
                fn cast(token: &str) -> Option<Self> {
                    let result: nom::IResult<&str, $t> = all_consuming($parser).parse(token);
                    // nom admits "inf"/"nan" spellings; no instrument emits
                    // them and they cannot round-trip a fixed-width format.
                    result.ok().map(|(_, value)| value).filter(|value| value.is_finite())
                }
            }
        )*
    };
}

impl_int_cast! {
    u8 => complete::u8,
    u16 => complete::u16,
    i8 => complete::i8,
}

impl_float_cast! {
    f32 => float,
    f64 => double,
}

impl FieldCast for bool {
    /// Wire bit: `"1"` or `"0"` only.
    fn cast(token: &str) -> Option<Self> {
        match token {
            "1" => Some(true),
            "0" => Some(false),
            _ => None,
        }
    }
}

impl FieldCast for String {
    /// Pass-through for raw string fields; an empty token is an absent one.
    fn cast(token: &str) -> Option<Self> {
        if token.is_empty() {
            None
        } else {
            Some(token.to_owned())
        }
    }
}

impl FieldCast for Time {
    /// UTC time of day: `HHMMSS` with optional fractional seconds. The
    /// seconds part is two fixed digits; the fraction starts at the dot.
    fn cast(token: &str) -> Option<Self> {
        let result: nom::IResult<&str, (u8, u8, u8, Option<f32>)> = all_consuming((
            take(2u8).and_then(complete::u8),
            take(2u8).and_then(complete::u8),
            take(2u8).and_then(complete::u8),
            opt(preceded(peek(complete::char('.')), float)),
        ))
        .parse(token);
        let (_, (hour, minute, second, fraction)) = result.ok()?;

        let millisecond = match fraction {
            Some(fraction) if fraction.is_finite() => (fraction * 1000.0).round() as u16,
            Some(_) => return None,
            None => 0,
        };

        Time::from_hms_milli(hour, minute, second, millisecond).ok()
    }
}

/// Casts a latitude from its wire pair: `ddmm.mmm` magnitude plus `N`/`S`
/// hemisphere. The sign of the result comes solely from the hemisphere.
pub(crate) fn latitude(magnitude: &str, hemisphere: &str) -> Option<f64> {
    let value = coordinate(magnitude)?;
    match hemisphere {
        "N" => Some(value),
        "S" => Some(-value),
        _ => None,
    }
}

/// Casts a longitude from its wire pair: `dddmm.mmm` magnitude plus `E`/`W`
/// hemisphere.
pub(crate) fn longitude(magnitude: &str, hemisphere: &str) -> Option<f64> {
    let value = coordinate(magnitude)?;
    match hemisphere {
        "E" => Some(value),
        "W" => Some(-value),
        _ => None,
    }
}

/// `ddmm.mmm` to unsigned decimal degrees. The magnitude must be
/// non-negative with a minutes part below 60.
fn coordinate(magnitude: &str) -> Option<f64> {
    let raw: f64 = cast(magnitude)?;
    if raw.is_sign_negative() {
        return None;
    }

    let degrees = (raw / 100.0).trunc();
    let minutes = raw - degrees * 100.0;
    if minutes >= 60.0 {
        return None;
    }

    Some(degrees + minutes / 60.0)
}

/// Casts a value token gated by a unit or marker token (`M`, `T`, `N`, `K`).
///
/// The marker must be exactly the expected letter for the value to be kept;
/// otherwise the whole field is absent. The sentence itself stays valid
/// either way.
pub(crate) fn with_unit<T: FieldCast>(value: &str, marker: &str, unit: char) -> Option<T> {
    if marker.len() == 1 && marker.starts_with(unit) {
        cast(value)
    } else {
        None
    }
}

/// Fixed-width token rendering.
///
/// One width per field category, stable across releases:
///
/// - latitude `ddmm.mmm`, longitude `dddmm.mmm` (three-decimal minutes)
/// - angles, turn rates, depths, through-water speeds: width 7, 3 decimals
/// - courses over ground: width 5, 2 decimals
/// - speeds over ground: width 4, 2 decimals
/// - magnetic variation: width 5, 1 decimal
/// - DOP, altitude, geoidal separation, DGPS age, standard deviations:
///   1 decimal, no padding
/// - counts and calendar parts: zero-padded ints (2 or 4 digits)
///
/// Absent values render as empty tokens.
pub(crate) mod encode {
    use time::Time;

    /// Zero-padded float token; `width` counts the whole token including
    /// any sign and the decimal point, so `(7, 3)` renders 54.7 as
    /// `054.700` and -4.5 as `-04.500`.
    pub(crate) fn float(value: Option<f32>, width: usize, precision: usize) -> String {
        match value {
            Some(value) => format!("{value:0width$.precision$}"),
            None => String::new(),
        }
    }

    /// Unpadded float token with fixed precision: 0.9 at precision 1 stays
    /// `0.9`.
    pub(crate) fn plain(value: Option<f32>, precision: usize) -> String {
        match value {
            Some(value) => format!("{value:.precision$}"),
            None => String::new(),
        }
    }

    /// Zero-padded integer token.
    pub(crate) fn uint<T: std::fmt::Display>(value: Option<T>, width: usize) -> String {
        match value {
            Some(value) => format!("{value:0width$}"),
            None => String::new(),
        }
    }

    /// Signed zone-hours token: two digits, leading minus when negative.
    pub(crate) fn zone_hours(value: Option<i8>) -> String {
        match value {
            Some(hours) if hours < 0 => format!("-{:02}", -i16::from(hours)),
            Some(hours) => format!("{hours:02}"),
            None => String::new(),
        }
    }

    /// Single-letter token for a content enum.
    pub(crate) fn letter(value: Option<char>) -> String {
        value.map(String::from).unwrap_or_default()
    }

    /// Wire bit token.
    pub(crate) fn bit(value: Option<bool>) -> String {
        match value {
            Some(true) => "1".to_owned(),
            Some(false) => "0".to_owned(),
            None => String::new(),
        }
    }

    /// Raw string token passed through unchanged.
    pub(crate) fn raw(value: Option<&String>) -> String {
        value.cloned().unwrap_or_default()
    }

    /// UTC time token: `HHMMSS`, with fractional seconds appended only
    /// when non-zero. Fractions print to three digits with at most one
    /// trailing zero trimmed, so half a second is `.50` and five
    /// milliseconds stay `.005`.
    pub(crate) fn time(value: Option<Time>) -> String {
        let Some(t) = value else {
            return String::new();
        };

        let (hour, minute, second) = (t.hour(), t.minute(), t.second());
        let millisecond = t.millisecond();

        if millisecond == 0 {
            return format!("{hour:02}{minute:02}{second:02}");
        }

        let mut fraction = format!("{millisecond:03}");
        if fraction.ends_with('0') {
            fraction.pop();
        }

        format!("{hour:02}{minute:02}{second:02}.{fraction}")
    }

    /// Latitude as its wire pair: `ddmm.mmm` magnitude token plus `N`/`S`
    /// hemisphere token, both empty when the value is absent.
    pub(crate) fn latitude(value: Option<f64>) -> (String, String) {
        coordinate(value, 2, 'N', 'S')
    }

    /// Longitude as its wire pair: `dddmm.mmm` plus `E`/`W`.
    pub(crate) fn longitude(value: Option<f64>) -> (String, String) {
        coordinate(value, 3, 'E', 'W')
    }

    fn coordinate(
        value: Option<f64>,
        degree_width: usize,
        positive: char,
        negative: char,
    ) -> (String, String) {
        let Some(signed) = value else {
            return (String::new(), String::new());
        };

        let hemisphere = if signed < 0.0 { negative } else { positive };
        let magnitude = signed.abs();
        let mut degrees = magnitude.trunc() as u32;
        let mut minutes = magnitude.fract() * 60.0;

        // Rounding to three decimals can reach 60.000; carry into degrees.
        minutes = (minutes * 1000.0).round() / 1000.0;
        if minutes >= 60.0 {
            minutes = 0.0;
            degrees += 1;
        }

        (
            format!("{degrees:0degree_width$}{minutes:06.3}"),
            hemisphere.to_string(),
        )
    }
}

macro_rules! field_names {
    ($($variant:ident => $name:literal),* $(,)?) => {
        /// The closed key set for the keyed-map construction shape.
        ///
        /// Every sentence schema names its fields from this enum (see the
        /// `FIELDS` const on each message type), and map construction
        /// requires every schema key plus [`FieldName::Checksum`]. Using a
        /// closed enum instead of strings makes an unknown key a
        /// construction-time error rather than something silently ignored.
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum FieldName {
            $($variant,)*
        }

        impl FieldName {
            /// The schema name of this field.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }
        }
    };
}

field_names! {
    // position and fix
    Time => "time",
    Latitude => "latitude",
    Longitude => "longitude",
    FixQuality => "fix_quality",
    SatelliteCount => "satellite_count",
    Hdop => "hdop",
    Altitude => "altitude",
    GeoidalSeparation => "geoidal_separation",
    AgeOfDgps => "age_of_dgps",
    RefStationId => "ref_station_id",
    // navigation
    Status => "status",
    SpeedKnots => "speed_knots",
    SpeedKmh => "speed_kmh",
    Track => "track",
    Date => "date",
    MagneticVariation => "magnetic_variation",
    MagneticVariationDirection => "magnetic_variation_direction",
    FaaMode => "faa_mode",
    CourseTrue => "course_true",
    CourseMagnetic => "course_magnetic",
    // calendar
    Day => "day",
    Month => "month",
    Year => "year",
    ZoneHours => "zone_hours",
    ZoneMinutes => "zone_minutes",
    // pseudorange error statistics
    RmsStdDev => "rms_std_dev",
    SemiMajorStdDev => "semi_major_std_dev",
    SemiMinorStdDev => "semi_minor_std_dev",
    Orientation => "orientation",
    LatStdDev => "lat_std_dev",
    LonStdDev => "lon_std_dev",
    AltStdDev => "alt_std_dev",
    // heading and attitude
    HeadingTrue => "heading_true",
    HeadingMagnetic => "heading_magnetic",
    Heading => "heading",
    Roll => "roll",
    Pitch => "pitch",
    Heave => "heave",
    RollAccuracy => "roll_accuracy",
    PitchAccuracy => "pitch_accuracy",
    HeadingAccuracy => "heading_accuracy",
    AidingStatus => "aiding_status",
    ImuStatus => "imu_status",
    RateOfTurn => "rate_of_turn",
    // wind
    WindAngle => "wind_angle",
    Reference => "reference",
    WindSpeed => "wind_speed",
    SpeedUnit => "speed_unit",
    // depth
    WaterDepth => "water_depth",
    TransducerOffset => "transducer_offset",
    MaxRangeScale => "max_range_scale",
    // framing
    Checksum => "checksum",
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
