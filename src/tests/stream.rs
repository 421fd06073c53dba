//! End-to-end behavior on receiver output: the published example
//! sentences, line noise, and batch skipping.

use crate::{
    FaaMode, FixQuality, NmeaSentence, SentenceId, Status, TalkerId, create_message,
    find_sentence_type,
};

const GGA: &str = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47";
const RMC: &str = "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A";

#[test]
fn test_published_gga_example() {
    let message = create_message(GGA).unwrap();
    assert_eq!(message.sentence_id(), SentenceId::GGA);
    assert_eq!(message.talker_id(), Some(TalkerId::GP));
    assert_eq!(message.checksum(), 0x47);

    // The canonical encoding of this sentence is the sentence itself.
    assert_eq!(message.to_sentence(), GGA);

    let NmeaSentence::GGA(gga) = message else {
        panic!("wrong variant");
    };
    assert_eq!(gga.fix_quality, Some(FixQuality::GpsFix));
    assert_eq!(gga.satellite_count, Some(8));
}

#[test]
fn test_published_rmc_example() {
    let NmeaSentence::RMC(rmc) = create_message(RMC).unwrap() else {
        panic!("wrong variant");
    };

    assert_eq!(rmc.status, Some(Status::Valid));
    assert_eq!(rmc.fix_date.as_deref(), Some("230394"));
    assert_eq!(rmc.faa_mode, FaaMode::NotValid);
}

#[test]
fn test_batch_skips_bad_lines() {
    let lines = [
        GGA,
        "",
        "not a sentence at all",
        "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*48",
        "$GPXXX,1,2*4c",
        "$HEROT,-11.23,A*07\r\n",
        "$GPGGA,123519*77",
    ];

    let parsed: Vec<NmeaSentence> = lines.iter().filter_map(|raw| create_message(raw)).collect();

    let ids: Vec<SentenceId> = parsed.iter().map(NmeaSentence::sentence_id).collect();
    assert_eq!(ids, [SentenceId::GGA, SentenceId::ROT]);
}

#[test]
fn test_receiver_log_noise_is_tolerated() {
    let line = "2015-03-01T12:35:19Z $GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n";

    let message = create_message(line).unwrap();
    assert_eq!(message.to_sentence(), GGA);
}

#[test]
fn test_type_token_extraction_matches_dispatch() {
    assert_eq!(find_sentence_type(GGA).as_deref(), Some("GPGGA"));
    assert_eq!(find_sentence_type(RMC).as_deref(), Some("GPRMC"));
    assert_eq!(
        find_sentence_type("$PASHR,085335.000,224.19,T,-01.26,+00.83,+00.00,0.101,0.113,0.267,1,0*2E")
            .as_deref(),
        Some("PASHR")
    );
    assert_eq!(find_sentence_type("no delimiter"), None);
}

#[test]
fn test_unknown_talker_survives_the_round_trip() {
    // ZZ is outside the registry; the sentence still parses, and the
    // unknown talker serializes as the -- placeholder.
    let message = create_message("$ZZGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*50").unwrap();

    assert_eq!(message.talker_id(), None);
    assert!(message.to_sentence().starts_with("$--GGA,"));
}
