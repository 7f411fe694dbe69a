use ble_property_sheet::{
    error::ErrorType,
    gatt::characteristic::Characteristic,
    property::{Payload, PropertyBlock, PropertyEncoder, PropertyKind, PropertyType},
    uuid::PROPERTY_DESCRIPTOR_UUID,
};
use proptest::prelude::*;

fn init_logging() {
    let _ = pretty_env_logger::try_init();
}

fn blocks(c: &Characteristic) -> Vec<Vec<u8>> {
    c.descriptors_with(PROPERTY_DESCRIPTOR_UUID)
        .map(|d| d.value.clone().unwrap_or_default())
        .collect()
}

fn add_each_kind(enc: &mut PropertyEncoder, c: &mut Characteristic, name: &str) {
    enc.add_bool(c, name).unwrap();
    enc.add_int(c, name).unwrap();
    enc.add_float(c, name).unwrap();
    enc.add_text(c, name).unwrap();
    enc.add_date(c, name).unwrap();
    enc.add_time(c, name).unwrap();
    enc.add_range(c, name, 1, 9).unwrap();
    enc.add_select(c, name, "Low|High").unwrap();
}

#[test]
fn type_code_and_sort_position_lead_every_block() {
    init_logging();
    let mut enc = PropertyEncoder::new();
    let mut c = Characteristic::default();
    add_each_kind(&mut enc, &mut c, "Setting");

    let expected_types = [0x01, 0x02, 0x07, 0x04, 0x05, 0x06, 0x03, 0x08];
    let blocks = blocks(&c);
    assert_eq!(blocks.len(), expected_types.len());
    for (i, (block, ty)) in blocks.iter().zip(expected_types).enumerate() {
        assert_eq!(block[0], ty);
        assert_eq!(block[1], i as u8);
        assert_eq!(&block[2..4], &[0, 0]);
    }
}

#[test]
fn staged_title_applies_to_exactly_one_property() {
    init_logging();
    let mut enc = PropertyEncoder::new();
    let mut c = Characteristic::default();
    enc.add_text(&mut c, "Before").unwrap();
    enc.add_title("Sensors");
    enc.add_float(&mut c, "Temp").unwrap();
    enc.add_float(&mut c, "Humidity").unwrap();

    let blocks = blocks(&c);
    assert_eq!(blocks[0], [0x04, 0, 0, 0, 6, b'B', b'e', b'f', b'o', b'r', b'e']);

    let title_at = 4 + 1 + "Temp".len();
    assert_eq!(blocks[1][title_at], 0x01);
    assert_eq!(blocks[1][title_at + 1], 7);
    assert_eq!(&blocks[1][title_at + 2..title_at + 9], b"Sensors");
    assert_eq!(blocks[1][title_at + 9], 0x04);

    let after = 4 + 1 + "Humidity".len();
    assert_eq!(blocks[2][after], 0x04);
    assert_eq!(blocks[2].len(), after + 5);
}

#[test]
fn default_increments_match_explicit_ones() {
    let mut implicit = PropertyEncoder::new();
    let mut explicit = PropertyEncoder::new();
    let mut a = Characteristic::default();
    let mut b = Characteristic::default();

    implicit.add_int(&mut a, "Count").unwrap();
    explicit.add_int_with_increment(&mut b, "Count", 1).unwrap();
    implicit.add_float(&mut a, "Gain").unwrap();
    explicit.add_float_with_increment(&mut b, "Gain", 0.01).unwrap();

    assert_eq!(blocks(&a), blocks(&b));
}

#[test]
fn range_block_carries_both_bounds() {
    let mut enc = PropertyEncoder::new();
    let mut c = Characteristic::default();
    enc.add_range(&mut c, "Volume", 10, 20).unwrap();
    assert_eq!(
        blocks(&c)[0],
        [
            0x03, 0, 0, 0, 6, b'V', b'o', b'l', b'u', b'm', b'e', 0x02, 10, 0, 0, 0, 20, 0, 0, 0
        ]
    );
}

#[test]
fn invalid_select_options_attach_nothing() {
    init_logging();
    let mut enc = PropertyEncoder::new();
    let mut c = Characteristic::default();
    enc.add_bool(&mut c, "Power").unwrap();
    let before = c.clone();

    let err = enc.add_select(&mut c, "Mode", "").unwrap_err();
    assert_eq!(err.error_type(), &ErrorType::InvalidOptions);
    let err = enc.add_select(&mut c, "Mode", &"o".repeat(65)).unwrap_err();
    assert_eq!(err.error_type(), &ErrorType::InvalidOptions);
    assert_eq!(c, before);

    // exactly 64 bytes is still accepted
    enc.add_select(&mut c, "Mode", &"o".repeat(64)).unwrap();
    assert_eq!(c.descriptors.len(), 2);
    assert_eq!(blocks(&c)[1][1], 1);
}

#[test]
fn long_names_are_truncated_for_every_kind() {
    let name = "n".repeat(100);
    let mut enc = PropertyEncoder::new();
    let mut c = Characteristic::default();
    add_each_kind(&mut enc, &mut c, &name);

    for block in blocks(&c) {
        assert_eq!(block[4], 64);
        assert_eq!(&block[5..69], &name.as_bytes()[..64]);
        let decoded = PropertyBlock::parse(&block).unwrap();
        assert_eq!(decoded.name.len(), 64);
    }
}

#[test]
fn sheet_decodes_as_the_client_sees_it() {
    let mut enc = PropertyEncoder::new();
    let mut c = Characteristic::default();
    enc.add_title("Display");
    enc.add_range(&mut c, "Brightness", 0, 255).unwrap();
    enc.add_select(&mut c, "Units", "Metric|Imperial").unwrap();
    enc.add_date(&mut c, "Calibrated").unwrap();

    let decoded: Vec<PropertyBlock> = blocks(&c)
        .iter()
        .map(|b| PropertyBlock::parse(b).unwrap())
        .collect();

    assert_eq!(decoded[0].property_type, PropertyType::Range);
    assert_eq!(decoded[0].title.as_deref(), Some("Display"));
    assert_eq!(decoded[0].payload, Payload::Range { min: 0, max: 255 });

    assert_eq!(decoded[1].title, None);
    assert_eq!(
        decoded[1].payload,
        Payload::Options(vec!["Metric".to_string(), "Imperial".to_string()])
    );

    assert_eq!(decoded[2].property_type, PropertyType::Date);
    assert_eq!(decoded[2].sort_position, 2);
    assert_eq!(decoded[2].payload, Payload::None);
}

#[test]
fn encode_matches_what_add_attaches() {
    let mut enc = PropertyEncoder::new();
    let mut c = Characteristic::default();
    enc.add_title("Net");
    let preview = enc
        .encode("SSID", &PropertyKind::Text)
        .unwrap();
    enc.add(&mut c, "SSID", PropertyKind::Text).unwrap();
    assert_eq!(blocks(&c)[0], preview);
}

fn arb_kind() -> impl Strategy<Value = PropertyKind<'static>> {
    prop_oneof![
        Just(PropertyKind::Bool),
        any::<u32>().prop_map(|increment| PropertyKind::Int { increment }),
        Just(PropertyKind::Float { increment: 0.25 }),
        Just(PropertyKind::Text),
        Just(PropertyKind::Date),
        Just(PropertyKind::Time),
        (any::<u32>(), any::<u32>()).prop_map(|(min, max)| PropertyKind::Range { min, max }),
        Just(PropertyKind::Select { options: "a|b|c" }),
    ]
}

proptest! {
    #[test]
    fn names_clamp_to_a_prefix(name in "\\PC{1,100}") {
        let enc = PropertyEncoder::new();
        let block = enc.encode(&name, &PropertyKind::Bool).unwrap();
        let decoded = PropertyBlock::parse(&block).unwrap();
        prop_assert!(decoded.name.len() <= 64);
        prop_assert!(!decoded.name.is_empty());
        prop_assert!(name.starts_with(&decoded.name));
        prop_assert_eq!(usize::from(block[4]), decoded.name.len());
    }

    #[test]
    fn sort_positions_follow_attach_order(kinds in proptest::collection::vec(arb_kind(), 1..40)) {
        let mut enc = PropertyEncoder::new();
        let mut c = Characteristic::default();
        for kind in &kinds {
            enc.add(&mut c, "p", *kind).unwrap();
        }
        let decoded: Vec<PropertyBlock> = blocks(&c)
            .iter()
            .map(|b| PropertyBlock::parse(b).unwrap())
            .collect();
        for (i, (block, kind)) in decoded.iter().zip(&kinds).enumerate() {
            prop_assert_eq!(block.sort_position as usize, i);
            prop_assert_eq!(block.property_type, kind.property_type());
        }
    }
}
