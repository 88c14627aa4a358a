use super::*;
use crate::foundation::core::Rect;
use crate::surface::Surface;

const SCENE: &str = r#"
{
  "config": { "screen_width": 8, "screen_height": 8, "objects_per_layer": 4 },
  "surfaces": {
    "bg": { "solid": { "width": 8, "height": 8, "rgba": [0, 0, 255, 255] } },
    "sheet": { "solid": { "width": 4, "height": 2, "rgba": [255, 0, 0, 255] }, "grid": [2, 1] },
    "cells": {
      "solid": { "width": 4, "height": 4, "rgba": [0, 255, 0, 255] },
      "regions": [{ "x": 0, "y": 0, "width": 1, "height": 1 }]
    }
  },
  "objects": [
    { "layer": "background", "index": 0, "data": { "kind": "image", "surface": "bg" } },
    {
      "index": 2, "x": 3, "y": 3, "patt_no": 1, "alpha": 200,
      "clip": [0, 0, 4, 4], "colour": [0, 0, 0, 0],
      "data": { "kind": "image", "surface": "sheet" }
    },
    {
      "index": 3, "visible": false,
      "data": {
        "kind": "animation", "surface": "sheet", "after": "hide",
        "frames": [{ "patt_no": 0, "duration_ms": 50 }]
      }
    },
    { "index": 1, "text": "hi", "text_size": 20, "data": { "kind": "text" } }
  ]
}
"#;

fn parse(json: &str) -> SceneDef {
    SceneDef::from_reader(json.as_bytes()).unwrap()
}

#[test]
fn parses_surfaces_and_objects() {
    let def = parse(SCENE);
    assert_eq!(def.config.screen_width, 8);
    assert_eq!(def.config.screen_height, 8);
    assert_eq!(def.surfaces.len(), 3);
    assert_eq!(def.surfaces["sheet"].grid, Some([2, 1]));
    assert!(matches!(
        def.surfaces["bg"].source,
        SurfaceSource::Solid { width: 8, .. }
    ));
    assert_eq!(def.objects.len(), 4);
    assert_eq!(def.objects[0].layer, LayerKind::Background);
    assert!(def.objects[0].visible);
    assert_eq!(def.objects[1].layer, LayerKind::Foreground);
    assert!(matches!(
        def.objects[2].data,
        Some(DataDef::Animation {
            after: AfterAnimation::Hide,
            ..
        })
    ));
}

#[test]
fn object_def_maps_onto_object_state() {
    let def = parse(SCENE);
    let obj = def.objects[1].to_object().unwrap();
    assert!(obj.visible());
    assert_eq!((obj.x(), obj.y()), (3, 3));
    assert_eq!(obj.patt_no(), 1);
    assert_eq!(obj.alpha(), 200);
    assert_eq!(obj.clip(), ClipRect::new(0, 0, 4, 4));
    assert_eq!(obj.tint(), Rgb::WHITE);
    assert_eq!(obj.object_data().unwrap().kind(), "image");
    assert!(obj.handle().is_detached());

    let text = def.objects[3].to_object().unwrap();
    assert_eq!(text.text_text(), "hi");
    assert_eq!(text.text_size(), 20);
}

#[test]
fn surface_def_applies_pattern_table() {
    let def = parse(SCENE);
    let base = Path::new(".");
    let sheet = def.surfaces["sheet"].build(base).unwrap();
    assert_eq!(sheet.region(1), Rect::new(2, 0, 2, 2));
    let cells = def.surfaces["cells"].build(base).unwrap();
    assert_eq!(cells.region(0), Rect::new(0, 0, 1, 1));
}

#[test]
fn build_populates_system() {
    let def = parse(SCENE);
    let mut sys = def.build(Path::new(".")).unwrap();
    assert!(sys.surfaces().contains("sheet"));
    let obj = sys.object(LayerKind::Foreground, 2).unwrap();
    assert_eq!(obj.x(), 3);
    assert_eq!(obj.handle(), crate::ObjectHandle::slot(LayerKind::Foreground, 2));

    // The text object has no renderer and is skipped; everything else draws.
    let stats = sys.render_frame().unwrap();
    assert_eq!(stats.ok, 2);
    assert_eq!(stats.failed, 1);
    let px = sys.screen().pixels();
    assert_eq!(px.pixel(7, 7), Some([0, 0, 255, 255]));
    // Pattern 1 of the sheet at (3, 3), alpha 200 over blue.
    assert_eq!(px.pixel(3, 3), Some([200, 0, 55, 255]));
    // Clipped away at x = 4.
    assert_eq!(px.pixel(4, 4), Some([0, 0, 255, 255]));
}

#[test]
fn validation_catches_bad_references() {
    let mut def = parse(SCENE);
    def.objects[1].data = Some(DataDef::Image {
        surface: "nope".to_owned(),
    });
    let err = def.validate().unwrap_err();
    assert!(err.to_string().contains("nope"));

    let mut def = parse(SCENE);
    def.objects[0].index = 4;
    assert!(matches!(def.validate(), Err(SceneError::Validation(_))));

    // Render targets may name surfaces captured later.
    let mut def = parse(SCENE);
    def.objects[1].data = Some(DataDef::RenderTarget {
        surface: "later".to_owned(),
    });
    def.validate().unwrap();
}

#[test]
fn malformed_json_is_serde_error() {
    let err = SceneDef::from_reader("{ \"objects\": 3 }".as_bytes()).unwrap_err();
    assert!(matches!(err, SceneError::Serde(_)));

    let err = SceneDef::from_path("/nonexistent/scene.json").unwrap_err();
    assert!(matches!(err, SceneError::Validation(_)));
}

#[test]
fn zero_sized_solid_is_rejected() {
    let def: SurfaceDef =
        serde_json::from_str(r#"{ "solid": { "width": 0, "height": 2, "rgba": [0, 0, 0, 0] } }"#)
            .unwrap();
    assert!(def.build(Path::new(".")).is_err());
}
