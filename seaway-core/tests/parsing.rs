use seaway_core::nmea::checksum::with_checksum;
use seaway_core::{AisMessage, ParseError, Talker, TalkerTable};

const BODIES: [&str; 4] = [
    "BSVDM,2,2,5,B,00000000008,2",
    "AIVDM,1,1,,B,13b2AH8000bkvNajJ=1ov2C>25`4,0",
    "BSVDM,2,1,0,A,577V7s02?k61I8Lg<00Dq@E918U<F1=@58000016Op`BL5D8tIm5@PDPCp0T,0",
    "ABVDO,1,1,9,A,402=a1Qv0OGb`0Nj2N>t`;700D0B,0",
];

#[test]
fn test_valid_sentences_expose_their_fields() {
    for body in BODIES {
        let line = with_checksum('!', body);
        let message = AisMessage::parse(&line).unwrap();
        let fields: Vec<&str> = body.split(',').collect();

        assert_eq!(message.format(), format!("!{}", fields[0]));
        assert_eq!(message.fragment_count().to_string(), fields[1]);
        assert_eq!(message.fragment_index().to_string(), fields[2]);
        assert_eq!(message.sequential_message_id(), fields[3]);
        assert_eq!(message.channel(), fields[4]);
        assert_eq!(message.payload(), fields[5]);
        assert_eq!(message.fill_bits(), fields[6]);
        assert_eq!(message.checksum(), &line[line.len() - 2..]);
    }
}

#[test]
fn test_altered_checksum_is_rejected() {
    for body in BODIES {
        let line = with_checksum('$', body);
        let (head, declared) = line.split_at(line.len() - 2);
        let altered = u8::from_str_radix(declared, 16).unwrap() ^ 0x01;
        let line = format!("{}{:02X}", head, altered);

        assert!(matches!(
            AisMessage::parse(&line),
            Err(ParseError::ChecksumMismatch { .. })
        ));
    }
}

#[test]
fn test_short_sentences_are_rejected() {
    for fields in 1..7 {
        let body: Vec<&str> = "BSVDM,2,2,5,B,00000000008,2".split(',').take(fields).collect();
        let line = with_checksum('$', &body.join(","));
        assert_eq!(
            AisMessage::parse(&line),
            Err(ParseError::TooFewFields {
                expected: 7,
                found: fields
            })
        );
    }
}

#[test]
fn test_rejections() {
    assert_eq!(AisMessage::parse(""), Err(ParseError::Empty));
    assert_eq!(
        AisMessage::parse("$BSVDM,2,2,5,B,00000000008,2"),
        Err(ParseError::MissingChecksum)
    );
    assert!(AisMessage::parse(
        "$GPGGA,024654.00,3351.0141,S,15117.2167,E,1,06,1.06,00105,M,021,M,,*77"
    )
    .is_err());
    assert_eq!(
        AisMessage::parse("\\c:12x*00\\$BSVDM,2,2,5,B,00000000008,2*33"),
        Err(ParseError::InvalidTimestamp("12x".to_string()))
    );
}

#[test]
fn test_talkers() {
    let bs = AisMessage::parse("$BSVDM,2,2,5,B,00000000008,2*33").unwrap();
    assert_eq!(bs.talker(), Talker::Unknown);

    let ai = AisMessage::parse("!AIVDM,1,1,,B,13b2AH8000bkvNajJ=1ov2C>25`4,0*0F").unwrap();
    assert_eq!(ai.talker(), Talker::MobileStation);

    let table = TalkerTable::default().with("BS", Talker::BaseStation);
    let bs = AisMessage::parse_with("$BSVDM,2,2,5,B,00000000008,2*33", &table).unwrap();
    assert_eq!(bs.talker(), Talker::BaseStation);
}

#[test]
fn test_tag_block_times() {
    let m = AisMessage::parse(
        "\\g:1-2-1234,s:r3669961,c:1120959341*51\\$BSVDM,2,2,5,B,00000000008,2*33",
    )
    .unwrap();
    assert_eq!(m.time(), Some(1_120_959_341_000));
    assert_eq!(m.tag_block().unwrap().source.as_deref(), Some("r3669961"));

    let m = AisMessage::parse("\\c:1357563697*00\\!AIVDM,1,1,,B,13b2AH8000bkvNajJ=1ov2C>25`4,0*0F")
        .unwrap();
    assert_eq!(m.time(), Some(1_357_563_697_000));
    assert_eq!(m.timestamped().unwrap().time, 1_357_563_697_000);
}

#[test]
fn test_fragment_items() {
    let m = AisMessage::parse(
        "\\g:1-2-1536,c:1334258609*2F\\!BSVDM,2,1,0,A,577V7s02?k61I8Lg<00Dq@E918U<F1=@58000016Op`BL5D8tIm5@PDPCp0T,0*5B",
    )
    .unwrap();
    let items = m.sentence().items();
    assert_eq!(items[0], "!BSVDM");
    assert_eq!(items[1], "2");
    assert_eq!(items[2], "1");
    let group = m.tag_block().unwrap().group.unwrap();
    assert_eq!((group.count, group.index, group.id), (1, 2, 1536));
}
