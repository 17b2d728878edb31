use super::*;

fn px(frame: &FrameRgba, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * frame.width + x) * 4) as usize;
    [
        frame.data[i],
        frame.data[i + 1],
        frame.data[i + 2],
        frame.data[i + 3],
    ]
}

#[track_caller]
fn assert_px(frame: &FrameRgba, x: u32, y: u32, color: Color) {
    let got = px(frame, x, y);
    let want = color.to_premul_rgba8();
    for (g, w) in got.iter().zip(want.iter()) {
        assert!(
            (i16::from(*g) - i16::from(*w)).abs() <= 2,
            "pixel ({x},{y}) = {got:?}, expected ~{want:?}"
        );
    }
}

#[test]
fn new_surface_is_cleared_to_background() {
    let surface = Surface::new(
        Canvas {
            width: 32,
            height: 32,
        },
        Color::WHITE,
    )
    .unwrap();
    let frame = surface.into_frame();

    assert_eq!(frame.width, 32);
    assert_eq!(frame.height, 32);
    assert_eq!(frame.data.len(), 32 * 32 * 4);
    assert_px(&frame, 0, 0, Color::WHITE);
    assert_px(&frame, 16, 16, Color::WHITE);
    assert_px(&frame, 31, 31, Color::WHITE);
}

#[test]
fn zero_sized_canvas_is_rejected() {
    assert!(
        Surface::new(
            Canvas {
                width: 0,
                height: 8
            },
            Color::WHITE
        )
        .is_err()
    );
}

#[test]
fn fill_rect_paints_interior_only() {
    let mut surface = Surface::new(
        Canvas {
            width: 64,
            height: 64,
        },
        Color::WHITE,
    )
    .unwrap();
    surface.fill_rect(Rect::new(8.0, 8.0, 32.0, 32.0), Color::BLACK);
    let frame = surface.into_frame();

    assert_px(&frame, 16, 16, Color::BLACK);
    assert_px(&frame, 48, 48, Color::WHITE);
    assert_px(&frame, 4, 4, Color::WHITE);
}

#[test]
fn later_fills_paint_over_earlier_ones() {
    let mut surface = Surface::new(
        Canvas {
            width: 64,
            height: 64,
        },
        Color::WHITE,
    )
    .unwrap();
    surface.fill_rect(Rect::new(0.0, 0.0, 40.0, 40.0), Color::BLACK);
    surface.fill_rect(Rect::new(24.0, 24.0, 64.0, 64.0), Color::gray_level(0x80));
    let frame = surface.into_frame();

    // overlap region shows the later fill
    assert_px(&frame, 32, 32, Color::gray_level(0x80));
    // non-overlapping parts keep their own paint
    assert_px(&frame, 8, 8, Color::BLACK);
    assert_px(&frame, 56, 56, Color::gray_level(0x80));
}

#[test]
fn stroke_rect_paints_edges_not_interior() {
    let mut surface = Surface::new(
        Canvas {
            width: 64,
            height: 64,
        },
        Color::WHITE,
    )
    .unwrap();
    surface.stroke_rect(Rect::new(8.0, 8.0, 56.0, 56.0), Color::BLACK, 2.0);
    let frame = surface.into_frame();

    assert_px(&frame, 32, 9, Color::BLACK);
    assert_px(&frame, 9, 32, Color::BLACK);
    assert_px(&frame, 32, 32, Color::WHITE);
}

#[test]
fn text_without_font_is_a_noop() {
    let mut surface = Surface::new(
        Canvas {
            width: 64,
            height: 64,
        },
        Color::WHITE,
    )
    .unwrap();
    assert!(!surface.has_font());
    assert!(
        surface
            .measure_text("hello", TextStyle::sized(16.0), None)
            .is_none()
    );
    surface.draw_text(
        "hello",
        TextStyle::sized(16.0),
        Point::new(4.0, 4.0),
        None,
    );
    let frame = surface.into_frame();
    assert_px(&frame, 32, 32, Color::WHITE);
}

#[test]
fn encode_png_round_trips_dimensions_and_pixels() {
    let mut surface = Surface::new(
        Canvas {
            width: 16,
            height: 16,
        },
        Color::WHITE,
    )
    .unwrap();
    surface.fill_rect(Rect::new(0.0, 0.0, 8.0, 16.0), Color::BLACK);
    let frame = surface.into_frame();

    let bytes = encode_png(&frame).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(decoded.width(), 16);
    assert_eq!(decoded.height(), 16);
    assert_eq!(decoded.get_pixel(2, 8).0, [0, 0, 0, 255]);
    assert_eq!(decoded.get_pixel(12, 8).0, [255, 255, 255, 255]);
}
