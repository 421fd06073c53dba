//! # Talker Registry
//!
//! The closed table of NMEA 0183 talker identifier mnemonics: the one- or
//! two-letter equipment-category prefix that opens every address token
//! (`GP` in `GPGGA`, `HE` in `HEHDT`, the bare `P` of proprietary
//! sentences).
//!
//! <https://gpsd.gitlab.io/gpsd/NMEA.html#_talker_ids>
//!
//! The table is versioned standard data, compiled in as match arms; it is
//! never extended at runtime and unknown prefixes resolve to nothing.

macro_rules! talker_ids {
    (
        $(
            $prefix:literal => $variant:ident: $description:literal
        ),* $(,)?
    ) => {
        /// NMEA 0183 talker identifier mnemonics.
        ///
        /// Each variant is the equipment category named by a sentence's
        /// address prefix. [`TalkerId::resolve`] maps an address token to
        /// its talker; [`TalkerId::prefix`] gives back the wire form.
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum TalkerId {
            $(
                #[doc = $description]
                $variant,
            )*
        }

        impl TalkerId {
            /// Every registered talker, in mnemonic order.
            pub const ALL: &'static [TalkerId] = &[$(Self::$variant,)*];

            /// The wire prefix of this talker, e.g. `"GP"`.
            pub const fn prefix(&self) -> &'static str {
                match self {
                    $(Self::$variant => $prefix,)*
                }
            }

            /// A human-readable description of the equipment category.
            pub const fn description(&self) -> &'static str {
                match self {
                    $(Self::$variant => $description,)*
                }
            }

            fn from_prefix(prefix: &str) -> Option<Self> {
                match prefix {
                    $($prefix => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

talker_ids! {
    "AB" => AB: "Independent AIS base station",
    "AD" => AD: "Dependent AIS base station",
    "AG" => AG: "Heading track controller (autopilot), general",
    "AI" => AI: "Mobile class A or B AIS station",
    "AN" => AN: "AIS aids-to-navigation station",
    "AP" => AP: "Heading track controller (autopilot), magnetic",
    "AR" => AR: "AIS receiving station",
    "AS" => AS: "AIS limited base station",
    "AT" => AT: "AIS transmitting station",
    "AX" => AX: "AIS simplex repeater station",
    "BI" => BI: "Bilge systems",
    "BN" => BN: "Bridge navigational watch alarm system",
    "CA" => CA: "Central alarm management",
    "CD" => CD: "Digital selective calling (DSC)",
    "CR" => CR: "Data receiver",
    "CS" => CS: "Communications satellite",
    "CT" => CT: "Radio-telephone (MF/HF)",
    "CV" => CV: "Radio-telephone (VHF)",
    "CX" => CX: "Scanning receiver",
    "DF" => DF: "Direction finder",
    "DP" => DP: "Dynamic positioning",
    "DU" => DU: "Duplex repeater station",
    "EC" => EC: "Electronic chart system (ECS)",
    "EI" => EI: "Electronic chart display and information system (ECDIS)",
    "EP" => EP: "Emergency position indicating beacon (EPIRB)",
    "ER" => ER: "Engine room monitoring systems",
    "FD" => FD: "Fire door controller/monitoring point",
    "FE" => FE: "Fire extinguisher system",
    "FR" => FR: "Fire detection point",
    "FS" => FS: "Fire sprinkler system",
    "GA" => GA: "Galileo positioning system",
    "GB" => GB: "BeiDou positioning system",
    "GI" => GI: "NavIC positioning system (IRNSS)",
    "GL" => GL: "GLONASS receiver",
    "GN" => GN: "Global navigation satellite system (GNSS)",
    "GP" => GP: "Global positioning system (GPS)",
    "GQ" => GQ: "QZSS positioning system",
    "HC" => HC: "Compass, magnetic",
    "HD" => HD: "Hull door controller/monitoring panel",
    "HE" => HE: "Gyro, north seeking",
    "HF" => HF: "Fluxgate compass",
    "HN" => HN: "Gyro, non-north seeking",
    "HS" => HS: "Hull stress monitoring",
    "II" => II: "Integrated instrumentation",
    "IN" => IN: "Integrated navigation",
    "JA" => JA: "Alarm and monitoring system (reserved)",
    "JB" => JB: "Reefer monitoring system (reserved)",
    "JC" => JC: "Power management system (reserved)",
    "JD" => JD: "Propulsion control system (reserved)",
    "JE" => JE: "Engine control console (reserved)",
    "JF" => JF: "Propulsion boiler (reserved)",
    "JG" => JG: "Auxiliary boiler (reserved)",
    "JH" => JH: "Electronic governor system (reserved)",
    "LC" => LC: "Loran C receiver",
    "MX" => MX: "Multiplexer",
    "NL" => NL: "Navigation light controller",
    "NV" => NV: "Night vision equipment",
    "P" => P: "Proprietary code",
    "RA" => RA: "Radar and/or radar plotting",
    "RB" => RB: "Record book (reserved)",
    "RC" => RC: "Propulsion machinery including remote control",
    "RI" => RI: "Rudder angle indicator (reserved)",
    "SA" => SA: "Physical shore AIS station",
    "SC" => SC: "Steering control system/device (reserved)",
    "SD" => SD: "Sounder, depth",
    "SG" => SG: "Steering gear/steering engine",
    "SN" => SN: "Electronic positioning system, other/general",
    "SS" => SS: "Sounder, scanning",
    "TC" => TC: "Track control system (reserved)",
    "TI" => TI: "Turn rate indicator",
    "U1" => U1: "User configured talker identifier",
    "U2" => U2: "User configured talker identifier",
    "U3" => U3: "User configured talker identifier",
    "U4" => U4: "User configured talker identifier",
    "U5" => U5: "User configured talker identifier",
    "U6" => U6: "User configured talker identifier",
    "U7" => U7: "User configured talker identifier",
    "U8" => U8: "User configured talker identifier",
    "UP" => UP: "Microprocessor controller",
    "VA" => VA: "VHF data exchange system (VDES), ASM",
    "VD" => VD: "Doppler speed log, other/general",
    "VM" => VM: "Speed log, water, magnetic",
    "VR" => VR: "Voyage data recorder",
    "VS" => VS: "VHF data exchange system (VDES), satellite",
    "VT" => VT: "VHF data exchange system (VDES), terrestrial",
    "VW" => VW: "Speed log, water, mechanical",
    "WD" => WD: "Watertight door controller/monitoring panel",
    "WI" => WI: "Weather instruments",
    "WL" => WL: "Water level detection systems",
    "YX" => YX: "Transducer",
    "ZA" => ZA: "Atomic clock",
    "ZC" => ZC: "Chronometer",
    "ZQ" => ZQ: "Quartz clock",
    "ZV" => ZV: "Radio update clock",
}

impl TalkerId {
    /// Resolves the talker of an address token.
    ///
    /// A leading `$` is stripped if present. Matching is longest-first:
    /// the two leading characters are looked up before falling back to the
    /// one-letter proprietary prefix, so `"APRMC"` is an autopilot while
    /// `"PASHR"` is proprietary.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nmea0183_codec::TalkerId;
    ///
    /// assert_eq!(TalkerId::resolve("GPGGA"), Some(TalkerId::GP));
    /// assert_eq!(TalkerId::resolve("$HEROT"), Some(TalkerId::HE));
    /// assert_eq!(TalkerId::resolve("PASHR"), Some(TalkerId::P));
    /// assert_eq!(TalkerId::resolve("ZZXXX"), None);
    /// ```
    pub fn resolve(token: &str) -> Option<Self> {
        let token = token.strip_prefix('$').unwrap_or(token);

        if let Some(id) = token.get(..2).and_then(Self::from_prefix) {
            return Some(id);
        }

        token.get(..1).and_then(Self::from_prefix)
    }
}

impl std::fmt::Display for TalkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.prefix())
    }
}
