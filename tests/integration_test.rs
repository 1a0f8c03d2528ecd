use barview::{BarController, ConfigError, ConfigModel, ControlEvent, IndexError};
use anyhow::Result;
use serde_json::json;
use std::env;
use std::fs;

/// A configuration document where slider and axis share `[350, 750]`.
fn config_document() -> serde_json::Value {
    json!({
        "slider": { "min": 350, "max": 750 },
        "yaxis": { "min": 350, "max": 750 },
        "checkbox_values": [50, 40, 30, 20, 10, 60, 70, 80, 90, 100, 110, 120],
        "font": { "family": "Helvetica", "title_size": 16, "label_size": 12 },
        "colors": {
            "background": "#f0f0f0",
            "frame_background": "#ffffff",
            "slider_background": "#f0f0f0",
            "trough": "#d3d3d3",
            "select": "#4682b4",
            "text": "black",
            "bar_left": "#4682B4",
            "bar_right": "#FF6347"
        },
        "layout": {
            "padding": 20,
            "frame_padding": 20,
            "slider_length": 300,
            "slider_sliderlength": 30,
            "slider_width": 20,
            "bar_padding": 30,
            "bar_width": 50
        }
    })
}

fn controller_for(doc: &serde_json::Value) -> Result<BarController> {
    Ok(BarController::new(ConfigModel::from_json_str(&doc.to_string())?))
}

#[test]
fn test_load_config_from_file() -> Result<()> {
    let path = env::temp_dir().join("barview_integration_config.json");
    fs::write(&path, config_document().to_string())?;

    let config = ConfigModel::load(&path)?;
    assert_eq!(config.checkbox_count(), 12);
    assert_eq!(config.title(), "Bar Length Controller");

    let _ = fs::remove_file(&path);
    Ok(())
}

#[test]
fn test_slider_scenario_midpoint() -> Result<()> {
    let mut controller = controller_for(&config_document())?;

    controller.handle_event(ControlEvent::ViewportResized { width: 400.0, height: 300.0 })?;
    let frame = controller.handle_event(ControlEvent::SliderChanged(550))?;

    // usable height 270, half way up the axis
    assert_eq!(frame.left.rect.height(), 135.0);
    assert_eq!(frame.left.rect.bottom(), 270.0);
    assert_eq!(frame.left.rect.center().x, 100.0);
    assert_eq!(frame.left.rect.width(), 50.0);
    assert_eq!(frame.left.label, "550");
    Ok(())
}

#[test]
fn test_checkbox_sum_scenario() -> Result<()> {
    let mut controller = controller_for(&config_document())?;

    for index in [0, 1, 5] {
        controller.set_checkbox_flag(index, true)?;
    }

    assert_eq!(controller.right_value(), 150.0);
    assert_eq!(controller.compute_frame().right.label, "150");
    Ok(())
}

#[test]
fn test_equal_slider_bounds_fail_construction() {
    let mut doc = config_document();
    doc["slider"] = json!({ "min": 400, "max": 400 });

    let result = ConfigModel::from_json_str(&doc.to_string());
    assert!(matches!(result, Err(ConfigError::InvalidRange { name: "slider", .. })));
}

#[test]
fn test_missing_section_fails_construction() {
    let mut doc = config_document();
    doc.as_object_mut().unwrap().remove("colors");

    assert!(matches!(
        ConfigModel::from_json_str(&doc.to_string()),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_slider_at_axis_minimum_has_empty_bar() -> Result<()> {
    let mut controller = controller_for(&config_document())?;
    controller.on_viewport_resize(400.0, 300.0);
    controller.set_slider_value(350);

    assert_eq!(controller.compute_frame().left.rect.height(), 0.0);
    Ok(())
}

#[test]
fn test_values_above_axis_saturate() -> Result<()> {
    let mut doc = config_document();
    doc["slider"] = json!({ "min": 0, "max": 2000 });
    let mut controller = controller_for(&doc)?;
    controller.on_viewport_resize(400.0, 300.0);

    controller.set_slider_value(2000);
    for index in 0..12 {
        controller.set_checkbox_flag(index, true)?;
    }

    let frame = controller.compute_frame();
    assert_eq!(frame.left.rect.height(), 270.0);
    assert_eq!(frame.left.rect.top(), 0.0);
    assert_eq!(frame.left.label, "2000");

    // 780 is above the axis maximum of 750
    assert_eq!(frame.right.label, "780");
    assert_eq!(frame.right.rect.height(), 270.0);
    Ok(())
}

#[test]
fn test_tiny_viewports_never_produce_negative_geometry() -> Result<()> {
    let mut controller = controller_for(&config_document())?;
    controller.set_slider_value(700);

    for height in [0.0, 10.0, 29.0, 30.0] {
        controller.on_viewport_resize(400.0, height);
        let frame = controller.compute_frame();
        for bar in [&frame.left, &frame.right] {
            assert_eq!(bar.rect.height(), 0.0);
            assert!(bar.rect.top() >= 0.0);
            assert!(bar.label_pos.y >= 0.0);
        }
    }
    Ok(())
}

#[test]
fn test_out_of_range_checkbox_is_an_index_error() -> Result<()> {
    let mut controller = controller_for(&config_document())?;

    let err = controller
        .handle_event(ControlEvent::CheckboxToggled { index: 12, value: true })
        .unwrap_err();
    assert_eq!(err, IndexError { index: 12, len: 12 });
    assert_eq!(err.to_string(), "Checkbox index 12 out of range (have 12 checkboxes)");
    Ok(())
}

#[test]
fn test_diverging_slider_and_axis_ranges_are_kept() -> Result<()> {
    let mut doc = config_document();
    doc["slider"] = json!({ "min": 0, "max": 100 });
    doc["yaxis"] = json!({ "min": 0, "max": 1000 });
    let mut controller = controller_for(&doc)?;
    controller.on_viewport_resize(200.0, 1030.0);

    controller.set_slider_value(100);
    let frame = controller.compute_frame();

    // the slider maxes out at a tenth of the shared axis
    assert_eq!(frame.left.rect.height(), 100.0);
    assert_eq!(frame.left.label, "100");
    Ok(())
}

#[test]
fn test_resize_rescales_label_font() -> Result<()> {
    let mut controller = controller_for(&config_document())?;

    controller.handle_event(ControlEvent::ViewportResized { width: 800.0, height: 1200.0 })?;
    assert_eq!(controller.label_font_size(), 24.0);
    assert_eq!(controller.title_font_size(), 24.0);

    controller.handle_event(ControlEvent::ViewportResized { width: 800.0, height: 400.0 })?;
    assert_eq!(controller.label_font_size(), 12.0);
    assert_eq!(controller.title_font_size(), 16.0);
    Ok(())
}
