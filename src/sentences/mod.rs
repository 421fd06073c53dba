mod dpt;
mod gga;
mod gst;
mod hdt;
mod mwv;
mod pashr;
mod rmc;
mod rot;
mod vhw;
mod vtg;
mod zda;

pub use dpt::DPT;
pub use gga::GGA;
pub use gst::GST;
pub use hdt::HDT;
pub use mwv::MWV;
pub use pashr::PASHR;
pub use rmc::RMC;
pub use rot::ROT;
pub use vhw::VHW;
pub use vtg::VTG;
pub use zda::ZDA;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::frame;
use crate::talker::TalkerId;

/// Sentence-type identifier: the trailing three letters of the address
/// token, or the proprietary `PASHR`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentenceId {
    DPT,
    GGA,
    GST,
    HDT,
    MWV,
    PASHR,
    RMC,
    ROT,
    VHW,
    VTG,
    ZDA,
}

impl SentenceId {
    /// The wire spelling of this id.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DPT => "DPT",
            Self::GGA => "GGA",
            Self::GST => "GST",
            Self::HDT => "HDT",
            Self::MWV => "MWV",
            Self::PASHR => "PASHR",
            Self::RMC => "RMC",
            Self::ROT => "ROT",
            Self::VHW => "VHW",
            Self::VTG => "VTG",
            Self::ZDA => "ZDA",
        }
    }

    /// Matches an address token (`GPGGA`, `--ROT`, `PASHR`, ...) against
    /// the known id set. The proprietary `PASHR` is matched by its full
    /// spelling, everything else by its trailing three characters.
    pub(crate) fn from_address(token: &str) -> Option<Self> {
        if token.ends_with("PASHR") {
            return Some(Self::PASHR);
        }

        match token.get(token.len().checked_sub(3)?..)? {
            "DPT" => Some(Self::DPT),
            "GGA" => Some(Self::GGA),
            "GST" => Some(Self::GST),
            "HDT" => Some(Self::HDT),
            "MWV" => Some(Self::MWV),
            "RMC" => Some(Self::RMC),
            "ROT" => Some(Self::ROT),
            "VHW" => Some(Self::VHW),
            "VTG" => Some(Self::VTG),
            "ZDA" => Some(Self::ZDA),
            _ => None,
        }
    }
}

impl std::fmt::Display for SentenceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! letter_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $char:literal => $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// The single-character wire form.
            pub const fn as_char(&self) -> char {
                match self {
                    $(Self::$variant => $char,)*
                }
            }
        }

        impl crate::field::FieldCast for $name {
            fn cast(token: &str) -> Option<Self> {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    $((Some($char), None) => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

letter_enum! {
    /// Status Mode Indicator
    pub enum Status {
        /// A - Valid
        'A' => Valid,
        /// V - Invalid
        'V' => Invalid,
    }
}

letter_enum! {
    /// FAA Mode Indicator
    ///
    /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_sentence_mixes_and_nmea_variations>
    pub enum FaaMode {
        /// A - Autonomous mode
        'A' => Autonomous,
        /// D - Differential mode
        'D' => Differential,
        /// E - Estimated (dead-reckoning) mode
        'E' => Estimated,
        /// M - Manual input mode
        'M' => ManualInput,
        /// S - Simulated mode
        'S' => Simulated,
        /// N - Data not valid
        'N' => NotValid,
    }
}

/// A sentence without a mode token, or with one outside the vocabulary,
/// reads as not valid.
impl Default for FaaMode {
    fn default() -> Self {
        Self::NotValid
    }
}

letter_enum! {
    /// GPS Quality Indicator
    pub enum FixQuality {
        /// 0 - Fix not available
        '0' => FixNotAvailable,
        /// 1 - GPS fix
        '1' => GpsFix,
        /// 2 - Differential GPS fix
        '2' => DifferentialGpsFix,
        /// 3 - PPS fix
        '3' => PpsFix,
        /// 4 - Real Time Kinematic
        '4' => RealTimeKinematic,
        /// 5 - Float RTK
        '5' => FloatRtk,
        /// 6 - Estimated (dead reckoning)
        '6' => Estimated,
        /// 7 - Manual input mode
        '7' => ManualInput,
        /// 8 - Simulation mode
        '8' => Simulation,
    }
}

letter_enum! {
    /// Magnetic variation direction
    pub enum EastWest {
        /// E - East, variation applies eastward
        'E' => East,
        /// W - West, variation applies westward
        'W' => West,
    }
}

letter_enum! {
    /// Wind angle reference
    pub enum WindReference {
        /// R - Relative to the bow
        'R' => Relative,
        /// T - True (relative to north)
        'T' => True,
    }
}

letter_enum! {
    /// Wind speed unit
    pub enum WindSpeedUnit {
        /// K - Kilometers per hour
        'K' => KilometersPerHour,
        /// M - Meters per second
        'M' => MetersPerSecond,
        /// N - Knots
        'N' => Knots,
    }
}

/// Generates the shared construction and serialization surface for one
/// sentence type: shape dispatch, the three constructors, checksum access,
/// and `Display`. The per-type `from_wire`, `from_fields`, and `wire_body`
/// stay hand-written next to the schema they implement.
macro_rules! message_ops {
    ($name:ident, $id:expr) => {
        impl $name {
            /// Builds a message from any of the three construction shapes.
            pub fn new(raw: $crate::frame::RawSentence<'_>) -> Result<Self, $crate::error::Error> {
                match raw {
                    $crate::frame::RawSentence::Text(text) => Self::from_text(text),
                    $crate::frame::RawSentence::Fields(fields) => Self::from_tokens(fields),
                    $crate::frame::RawSentence::Map(map) => Self::from_map(map),
                }
            }

            /// Parses a wire text line. The address must name this
            /// sentence type; a valid sentence of another type is a
            /// [`SentenceMismatch`](crate::Error::SentenceMismatch).
            pub fn from_text(text: &str) -> Result<Self, $crate::error::Error> {
                let frame = $crate::frame::split_text(text)?;
                let id = $crate::sentences::SentenceId::from_address(frame.address).ok_or_else(
                    || $crate::error::Error::UnknownSentenceType(frame.address.to_owned()),
                )?;

                if id != $id {
                    return Err($crate::error::Error::SentenceMismatch {
                        expected: $id,
                        found: id,
                    });
                }

                Self::from_wire(frame.talker, &frame.fields)
            }

            /// Builds a message from logical field values in schema order
            /// (see [`Self::FIELDS`]) plus one trailing element carrying
            /// the checksum of the canonical encoding.
            pub fn from_tokens(tokens: &[&str]) -> Result<Self, $crate::error::Error> {
                let (fields, declared) = $crate::frame::split_list(tokens, Self::FIELDS.len())?;
                Self::from_fields(fields).verify(declared)
            }

            /// Builds a message from logical field values keyed by name.
            /// The map must hold every key in [`Self::FIELDS`] plus
            /// [`FieldName::Checksum`](crate::FieldName::Checksum), and
            /// nothing else.
            pub fn from_map(
                map: &std::collections::BTreeMap<$crate::field::FieldName, &str>,
            ) -> Result<Self, $crate::error::Error> {
                let (fields, declared) = $crate::frame::split_map(map, Self::FIELDS)?;
                Self::from_fields(&fields).verify(declared)
            }

            fn verify(self, declared: u8) -> Result<Self, $crate::error::Error> {
                let computed = self.checksum();
                if computed == declared {
                    Ok(self)
                } else {
                    Err($crate::error::Error::ChecksumMismatch { computed, declared })
                }
            }

            /// Serializes to canonical wire text, `$<body>*<hh>`, with a
            /// freshly computed checksum.
            pub fn to_sentence(&self) -> String {
                $crate::frame::seal(&self.wire_body())
            }

            /// The checksum of the canonical encoding. Derived from the
            /// current field values, never stored.
            pub fn checksum(&self) -> u8 {
                $crate::checksum::compute(&self.wire_body())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.to_sentence())
            }
        }
    };
}

pub(crate) use message_ops;

/// A unified enum over all supported NMEA 0183 sentence types.
///
/// Each variant wraps the corresponding strongly-typed struct, giving
/// type-safe access to decoded sentence data while letting a stream
/// consumer handle every type through one entry point.
///
/// [`NmeaSentence::from_text`] runs the full inbound pipeline: framing and
/// checksum verification, talker resolution, sentence-id matching, and
/// positional field binding. Structural problems reject the whole line;
/// an individual field token that fails its cast merely leaves that field
/// `None`, so a superficially well-formed sentence always produces a
/// message (see [`Error`] for the dividing line).
///
/// ## Example Usage
///
/// ```rust
/// use nmea0183_codec::{NmeaSentence, TalkerId};
///
/// let sentence = NmeaSentence::from_text(
///     "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47",
/// )
/// .unwrap();
///
/// match sentence {
///     NmeaSentence::GGA(gga) => {
///         assert_eq!(gga.talker_id, Some(TalkerId::GP));
///         assert_eq!(gga.satellite_count, Some(8));
///     }
///     _ => println!("Other sentence type parsed"),
/// }
/// ```
///
/// Serialization reverses the pipeline and always reproduces canonical
/// text:
///
/// ```rust
/// use nmea0183_codec::NmeaSentence;
///
/// let line = "$SDDPT,076.200,000.800,*70";
/// let sentence = NmeaSentence::from_text(line).unwrap();
///
/// assert_eq!(sentence.to_sentence(), line);
/// assert_eq!(sentence.checksum(), 0x70);
/// ```
///
/// ## Supported Sentence Types
///
/// | Variant          | Sentence Type                              | Description                        |
/// |------------------|--------------------------------------------|------------------------------------|
/// | DPT([`DPT`])     | Depth of Water                             | Water depth with transducer offset |
/// | GGA([`GGA`])     | Global Positioning System Fix Data         | GPS position and fix quality       |
/// | GST([`GST`])     | GPS Pseudorange Noise Statistics           | Position error statistics          |
/// | HDT([`HDT`])     | Heading - True                             | True heading from gyro or compass  |
/// | MWV([`MWV`])     | Wind Speed and Angle                       | Relative or true wind              |
/// | PASHR([`PASHR`]) | RT300 proprietary roll and pitch sentence  | Inertial attitude and accuracies   |
/// | RMC([`RMC`])     | Recommended Minimum Navigation Information | Essential navigation data          |
/// | ROT([`ROT`])     | Rate Of Turn                               | Turn rate, negative toward port    |
/// | VHW([`VHW`])     | Water Speed and Heading                    | Through-water speed and heading    |
/// | VTG([`VTG`])     | Track Made Good and Ground Speed           | Velocity over ground               |
/// | ZDA([`ZDA`])     | Time and Date                              | UTC, day, month, year, local zone  |
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum NmeaSentence {
    /// Depth of Water
    DPT(DPT),
    /// Global Positioning System Fix Data
    GGA(GGA),
    /// GPS Pseudorange Noise Statistics
    GST(GST),
    /// Heading - True
    HDT(HDT),
    /// Wind Speed and Angle
    MWV(MWV),
    /// RT300 proprietary roll and pitch sentence
    PASHR(PASHR),
    /// Recommended Minimum Navigation Information
    RMC(RMC),
    /// Rate Of Turn
    ROT(ROT),
    /// Water Speed and Heading
    VHW(VHW),
    /// Track Made Good and Ground Speed
    VTG(VTG),
    /// Time and Date
    ZDA(ZDA),
}

impl NmeaSentence {
    /// Parses a full wire line into the matching sentence type.
    pub fn from_text(text: &str) -> Result<Self, Error> {
        let frame = frame::split_text(text)?;
        let id = SentenceId::from_address(frame.address)
            .ok_or_else(|| Error::UnknownSentenceType(frame.address.to_owned()))?;

        match id {
            SentenceId::DPT => DPT::from_wire(frame.talker, &frame.fields).map(Self::DPT),
            SentenceId::GGA => GGA::from_wire(frame.talker, &frame.fields).map(Self::GGA),
            SentenceId::GST => GST::from_wire(frame.talker, &frame.fields).map(Self::GST),
            SentenceId::HDT => HDT::from_wire(frame.talker, &frame.fields).map(Self::HDT),
            SentenceId::MWV => MWV::from_wire(frame.talker, &frame.fields).map(Self::MWV),
            SentenceId::PASHR => PASHR::from_wire(frame.talker, &frame.fields).map(Self::PASHR),
            SentenceId::RMC => RMC::from_wire(frame.talker, &frame.fields).map(Self::RMC),
            SentenceId::ROT => ROT::from_wire(frame.talker, &frame.fields).map(Self::ROT),
            SentenceId::VHW => VHW::from_wire(frame.talker, &frame.fields).map(Self::VHW),
            SentenceId::VTG => VTG::from_wire(frame.talker, &frame.fields).map(Self::VTG),
            SentenceId::ZDA => ZDA::from_wire(frame.talker, &frame.fields).map(Self::ZDA),
        }
    }

    /// The sentence-type id of the wrapped message.
    pub const fn sentence_id(&self) -> SentenceId {
        match self {
            Self::DPT(_) => SentenceId::DPT,
            Self::GGA(_) => SentenceId::GGA,
            Self::GST(_) => SentenceId::GST,
            Self::HDT(_) => SentenceId::HDT,
            Self::MWV(_) => SentenceId::MWV,
            Self::PASHR(_) => SentenceId::PASHR,
            Self::RMC(_) => SentenceId::RMC,
            Self::ROT(_) => SentenceId::ROT,
            Self::VHW(_) => SentenceId::VHW,
            Self::VTG(_) => SentenceId::VTG,
            Self::ZDA(_) => SentenceId::ZDA,
        }
    }

    /// The talker of the wrapped message. The proprietary PASHR sentence
    /// always reports [`TalkerId::P`].
    pub const fn talker_id(&self) -> Option<TalkerId> {
        match self {
            Self::DPT(dpt) => dpt.talker_id,
            Self::GGA(gga) => gga.talker_id,
            Self::GST(gst) => gst.talker_id,
            Self::HDT(hdt) => hdt.talker_id,
            Self::MWV(mwv) => mwv.talker_id,
            Self::PASHR(pashr) => pashr.talker_id(),
            Self::RMC(rmc) => rmc.talker_id,
            Self::ROT(rot) => rot.talker_id,
            Self::VHW(vhw) => vhw.talker_id,
            Self::VTG(vtg) => vtg.talker_id,
            Self::ZDA(zda) => zda.talker_id,
        }
    }

    /// Serializes the wrapped message to canonical wire text.
    pub fn to_sentence(&self) -> String {
        match self {
            Self::DPT(dpt) => dpt.to_sentence(),
            Self::GGA(gga) => gga.to_sentence(),
            Self::GST(gst) => gst.to_sentence(),
            Self::HDT(hdt) => hdt.to_sentence(),
            Self::MWV(mwv) => mwv.to_sentence(),
            Self::PASHR(pashr) => pashr.to_sentence(),
            Self::RMC(rmc) => rmc.to_sentence(),
            Self::ROT(rot) => rot.to_sentence(),
            Self::VHW(vhw) => vhw.to_sentence(),
            Self::VTG(vtg) => vtg.to_sentence(),
            Self::ZDA(zda) => zda.to_sentence(),
        }
    }

    /// The checksum of the wrapped message's canonical encoding.
    pub fn checksum(&self) -> u8 {
        match self {
            Self::DPT(dpt) => dpt.checksum(),
            Self::GGA(gga) => gga.checksum(),
            Self::GST(gst) => gst.checksum(),
            Self::HDT(hdt) => hdt.checksum(),
            Self::MWV(mwv) => mwv.checksum(),
            Self::PASHR(pashr) => pashr.checksum(),
            Self::RMC(rmc) => rmc.checksum(),
            Self::ROT(rot) => rot.checksum(),
            Self::VHW(vhw) => vhw.checksum(),
            Self::VTG(vtg) => vtg.checksum(),
            Self::ZDA(zda) => zda.checksum(),
        }
    }
}

impl std::fmt::Display for NmeaSentence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_sentence())
    }
}
