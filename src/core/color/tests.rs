use super::*;

#[test]
fn test_color_hex_roundtrip() {
    let c = Color::new(0x1D, 0x2B, 0x53);
    assert_eq!(c.to_hex(), "#1D2B53");
    assert_eq!(Color::from_hex("#1D2B53"), Some(c));
}

#[test]
fn test_color_hex_without_hash() {
    assert_eq!(Color::from_hex("ff0000"), Some(Color::new(255, 0, 0)));
}

#[test]
fn test_color_hex_rejects_garbage() {
    assert_eq!(Color::from_hex("#fff"), None);
    assert_eq!(Color::from_hex("#gggggg"), None);
    assert_eq!(Color::from_hex(""), None);
}

#[test]
fn test_color_hex_trims_whitespace() {
    assert_eq!(Color::from_hex(" #000000 "), Some(Color::black()));
}
