use super::*;

#[test]
fn parses_layout_file_shape() {
    let layout = LayoutConfig::from_json(
        r#"{
            "grid": { "rows": 2, "cols": 2 },
            "components": [
                {
                    "type": "title",
                    "position": { "row": 0, "col": 0, "colSpan": 2 },
                    "config": { "text": "TEST" }
                },
                { "type": "clock", "position": { "row": 1, "col": 0 } }
            ]
        }"#,
    )
    .unwrap();

    let grid = layout.grid.unwrap();
    assert_eq!(grid.rows, 2);
    assert_eq!(grid.cols, 2);
    // rows/cols given, margin/gap fall back to defaults
    assert_eq!(grid.margin, 10.0);
    assert_eq!(grid.gap, 5.0);

    assert_eq!(layout.components.len(), 2);
    assert_eq!(layout.components[0].kind, "title");
    assert_eq!(layout.components[0].position.col_span, 2);
    assert_eq!(layout.components[0].config["text"], "TEST");
    // missing config deserializes as null and is accepted
    assert!(layout.components[1].config.is_null());
}

#[test]
fn grid_override_is_optional() {
    let layout = LayoutConfig::from_json(r#"{ "components": [] }"#).unwrap();
    assert!(layout.grid.is_none());
    assert!(layout.components.is_empty());
}

#[test]
fn rejects_malformed_json() {
    assert!(LayoutConfig::from_json("{").is_err());
    assert!(LayoutConfig::from_json(r#"{ "components": 3 }"#).is_err());
}

#[test]
fn missing_file_is_an_error() {
    let err = LayoutConfig::from_path(std::path::Path::new("/nonexistent/layout.json"));
    assert!(err.is_err());
}

#[test]
fn default_dashboard_round_trips_and_names_builtins() {
    let layout = LayoutConfig::default_dashboard();
    let kinds: Vec<&str> = layout.components.iter().map(|c| c.kind.as_str()).collect();
    assert!(kinds.contains(&"clock"));
    assert!(kinds.contains(&"date"));
    assert!(kinds.contains(&"weather"));
    assert!(kinds.contains(&"stats"));
    assert!(kinds.contains(&"device-stats"));
    assert!(kinds.contains(&"title"));

    let json = serde_json::to_string(&layout).unwrap();
    let back = LayoutConfig::from_json(&json).unwrap();
    assert_eq!(back.components.len(), layout.components.len());
}
