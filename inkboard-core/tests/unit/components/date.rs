use super::*;
use crate::foundation::core::{Canvas, Color};

#[test]
fn config_defaults() {
    let cfg: DateConfig = parse_config(serde_json::Value::Null).unwrap();
    assert!(!cfg.show_extended);
    assert!(cfg.style.font_size.is_none());
}

#[test]
fn renders_without_font() {
    let component = DateComponent::new(
        parse_config(serde_json::json!({ "showExtended": true, "background": "#dddddd" }))
            .unwrap(),
    );
    let mut surface = Surface::new(
        Canvas {
            width: 200,
            height: 100,
        },
        Color::WHITE,
    )
    .unwrap();
    component
        .render(&mut surface, Rect::new(10.0, 10.0, 190.0, 90.0))
        .unwrap();
}
