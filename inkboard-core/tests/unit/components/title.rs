use super::*;
use crate::foundation::core::{Canvas, Color};

fn frame_px(frame: &crate::render::surface::FrameRgba, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * frame.width + x) * 4) as usize;
    [
        frame.data[i],
        frame.data[i + 1],
        frame.data[i + 2],
        frame.data[i + 3],
    ]
}

#[test]
fn config_defaults_to_empty_text() {
    let cfg: TitleConfig = parse_config(serde_json::Value::Null).unwrap();
    assert!(cfg.text.is_empty());
}

#[test]
fn paints_background_and_border_inside_bounds() {
    let component = TitleComponent::new(
        parse_config(serde_json::json!({
            "text": "TEST",
            "background": "#000000",
            "borderWidth": 0.0
        }))
        .unwrap(),
    );
    let mut surface = Surface::new(
        Canvas {
            width: 100,
            height: 100,
        },
        Color::WHITE,
    )
    .unwrap();
    component
        .render(&mut surface, Rect::new(10.0, 10.0, 90.0, 50.0))
        .unwrap();
    let frame = surface.into_frame();

    assert_eq!(frame_px(&frame, 50, 30), [0, 0, 0, 255]);
    assert_eq!(frame_px(&frame, 50, 80), [255, 255, 255, 255]);
    assert_eq!(frame_px(&frame, 5, 30), [255, 255, 255, 255]);
}

#[test]
fn empty_text_renders_only_the_frame() {
    let component = TitleComponent::new(
        parse_config(serde_json::json!({ "borderWidth": 2.0 })).unwrap(),
    );
    let mut surface = Surface::new(
        Canvas {
            width: 100,
            height: 100,
        },
        Color::WHITE,
    )
    .unwrap();
    component
        .render(&mut surface, Rect::new(0.0, 0.0, 100.0, 100.0))
        .unwrap();
}
