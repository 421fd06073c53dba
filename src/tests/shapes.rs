//! Consistency across the three construction shapes.
//!
//! Parsing any shape of the same sentence and serializing must reproduce
//! one canonical text. List and map shapes carry no talker, so the wire
//! text they are compared against uses the `--` placeholder.

use std::collections::BTreeMap;

use crate::{DPT, Error, FieldName, MWV, RawSentence, ZDA};

#[test]
fn test_three_shapes_produce_the_same_message() {
    let mwv = MWV {
        talker_id: None,
        wind_angle: Some(214.8),
        reference: Some(crate::WindReference::Relative),
        wind_speed: Some(0.1),
        speed_unit: Some(crate::WindSpeedUnit::Knots),
        status: Some(crate::Status::Valid),
    };
    let text = mwv.to_sentence();
    let declared = format!("{:02x}", mwv.checksum());

    let from_text = MWV::new(RawSentence::Text(&text)).unwrap();

    let tokens = ["214.8", "R", "0.1", "N", "A", declared.as_str()];
    let from_list = MWV::new(RawSentence::Fields(&tokens)).unwrap();

    let map = BTreeMap::from([
        (FieldName::WindAngle, "214.8"),
        (FieldName::Reference, "R"),
        (FieldName::WindSpeed, "0.1"),
        (FieldName::SpeedUnit, "N"),
        (FieldName::Status, "A"),
        (FieldName::Checksum, declared.as_str()),
    ]);
    let from_map = MWV::new(RawSentence::Map(&map)).unwrap();

    assert_eq!(from_text, mwv);
    assert_eq!(from_list, mwv);
    assert_eq!(from_map, mwv);

    assert_eq!(from_text.to_sentence(), text);
    assert_eq!(from_list.to_sentence(), text);
    assert_eq!(from_map.to_sentence(), text);
}

#[test]
fn test_list_shape_rejects_wrong_length() {
    // DPT has three logical fields; four elements means fields + checksum.
    let result = DPT::new(RawSentence::Fields(&["76.2", "0.8", "67"]));
    assert_eq!(
        result,
        Err(Error::FieldCount {
            expected: 4,
            found: 3,
        })
    );

    let result = DPT::new(RawSentence::Fields(&["76.2", "0.8", "", "1.0", "67"]));
    assert_eq!(
        result,
        Err(Error::FieldCount {
            expected: 4,
            found: 5,
        })
    );
}

#[test]
fn test_list_shape_rejects_wrong_declared_checksum() {
    // Canonical re-encoding of these fields checksums to 0x67.
    assert!(DPT::new(RawSentence::Fields(&["76.2", "0.8", "", "67"])).is_ok());

    let result = DPT::new(RawSentence::Fields(&["76.2", "0.8", "", "68"]));
    assert_eq!(
        result,
        Err(Error::ChecksumMismatch {
            computed: 0x67,
            declared: 0x68,
        })
    );
}

#[test]
fn test_list_shape_rejects_malformed_checksum_element() {
    let result = DPT::new(RawSentence::Fields(&["76.2", "0.8", "", "6g"]));
    assert_eq!(result, Err(Error::InvalidChecksum("6g".to_owned())));
}

#[test]
fn test_map_shape_rejects_missing_checksum_key() {
    let map = BTreeMap::from([
        (FieldName::WaterDepth, "76.2"),
        (FieldName::TransducerOffset, "0.8"),
        (FieldName::MaxRangeScale, ""),
    ]);

    assert_eq!(
        DPT::new(RawSentence::Map(&map)),
        Err(Error::MissingField(FieldName::Checksum))
    );
}

#[test]
fn test_map_shape_rejects_missing_schema_key() {
    let map = BTreeMap::from([
        (FieldName::WaterDepth, "76.2"),
        (FieldName::TransducerOffset, "0.8"),
        (FieldName::Checksum, "67"),
    ]);

    assert_eq!(
        DPT::new(RawSentence::Map(&map)),
        Err(Error::MissingField(FieldName::MaxRangeScale))
    );
}

#[test]
fn test_map_shape_rejects_key_from_another_schema() {
    let map = BTreeMap::from([
        (FieldName::Time, "123519"),
        (FieldName::Day, "11"),
        (FieldName::Month, "3"),
        (FieldName::Year, "2004"),
        (FieldName::ZoneHours, "0"),
        (FieldName::ZoneMinutes, "0"),
        (FieldName::WaterDepth, "76.2"),
        (FieldName::Checksum, "00"),
    ]);

    assert_eq!(
        ZDA::new(RawSentence::Map(&map)),
        Err(Error::UnexpectedField(FieldName::WaterDepth))
    );
}

#[test]
fn test_soft_nulls_apply_to_list_and_map_shapes_too() {
    let dpt = DPT {
        talker_id: None,
        water_depth: None,
        offset_from_transducer: Some(0.8),
        max_range_scale: None,
    };
    let declared = format!("{:02x}", dpt.checksum());

    // An unconvertible depth costs the field, not the message, exactly as
    // on the text path. The checksum is over the canonical re-encoding, in
    // which the failed field is an empty token.
    let expected = Ok(dpt);
    let from_list = DPT::new(RawSentence::Fields(&["deep", "0.8", "", declared.as_str()]));
    assert_eq!(from_list, expected);

    let map = BTreeMap::from([
        (FieldName::WaterDepth, "deep"),
        (FieldName::TransducerOffset, "0.8"),
        (FieldName::MaxRangeScale, ""),
        (FieldName::Checksum, declared.as_str()),
    ]);
    assert_eq!(DPT::new(RawSentence::Map(&map)), expected);
}
