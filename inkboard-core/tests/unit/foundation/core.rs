use super::*;

#[test]
fn parses_hex_forms() {
    assert_eq!("#fff".parse::<Color>().unwrap(), Color::WHITE);
    assert_eq!("#000000".parse::<Color>().unwrap(), Color::BLACK);
    assert_eq!(
        "#11223344".parse::<Color>().unwrap(),
        Color {
            r: 0x11,
            g: 0x22,
            b: 0x33,
            a: 0x44
        }
    );
}

#[test]
fn parses_named_grays() {
    assert_eq!("white".parse::<Color>().unwrap(), Color::WHITE);
    assert_eq!("Black".parse::<Color>().unwrap(), Color::BLACK);
    assert_eq!("gray".parse::<Color>().unwrap(), Color::gray_level(0x80));
    assert_eq!("grey".parse::<Color>().unwrap(), Color::gray_level(0x80));
}

#[test]
fn rejects_bad_literals() {
    assert!("#12345".parse::<Color>().is_err());
    assert!("#gggggg".parse::<Color>().is_err());
    assert!("chartreuse".parse::<Color>().is_err());
}

#[test]
fn display_round_trips_through_parse() {
    let c = Color::rgb(0x12, 0xab, 0xef);
    assert_eq!(c.to_string().parse::<Color>().unwrap(), c);
}

#[test]
fn serde_uses_string_form() {
    let c: Color = serde_json::from_str("\"#808080\"").unwrap();
    assert_eq!(c, Color::gray_level(0x80));
    assert_eq!(serde_json::to_string(&c).unwrap(), "\"#808080\"");
}

#[test]
fn premul_scales_channels_by_alpha() {
    let c = Color {
        r: 255,
        g: 128,
        b: 0,
        a: 128,
    };
    let [r, g, b, a] = c.to_premul_rgba8();
    assert_eq!(a, 128);
    assert_eq!(r, 128);
    assert_eq!(g, 64);
    assert_eq!(b, 0);

    assert_eq!(Color::WHITE.to_premul_rgba8(), [255, 255, 255, 255]);
}
