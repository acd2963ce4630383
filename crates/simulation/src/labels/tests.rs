use super::*;

#[test]
fn test_default_is_english() {
    assert_eq!(DashboardLabels::default(), DashboardLabels::english());
}

#[test]
fn test_presets_differ_only_in_text() {
    let en = DashboardLabels::english();
    let es = DashboardLabels::spanish();
    assert_ne!(en.page_title, es.page_title);
    assert_eq!(es.emissions_chart.export_stem, "GEI_Evitados");
    assert_eq!(es.water_chart.export_stem, "Agua_Ahorrada");
    assert_eq!(es.revenue_chart.export_stem, "Ingresos_Estimados");
    assert_eq!(en.location, es.location);
}

#[test]
fn test_partial_json_falls_back_to_defaults() {
    let json = r#"{ "page_title": "Custom title", "baseline_category": "Before" }"#;
    let labels = DashboardLabels::from_json_str(json).expect("parse");
    assert_eq!(labels.page_title, "Custom title");
    assert_eq!(labels.baseline_category, "Before");
    assert_eq!(
        labels.projection_category,
        DashboardLabels::english().projection_category
    );
}

#[test]
fn test_partial_nested_json_keeps_preset_fields() {
    let json = r#"{
        "page_title": "Custom title",
        "emissions_chart": { "title": "Custom GHG" },
        "water_saved": { "caption": "Per year" }
    }"#;
    let labels = DashboardLabels::from_json_str(json).expect("parse");
    let english = DashboardLabels::english();

    assert_eq!(labels.page_title, "Custom title");
    assert_eq!(labels.emissions_chart.title, "Custom GHG");
    assert_eq!(labels.emissions_chart.y_label, english.emissions_chart.y_label);
    assert_eq!(
        labels.emissions_chart.export_stem,
        english.emissions_chart.export_stem
    );
    assert_eq!(labels.water_saved.caption, "Per year");
    assert_eq!(labels.water_saved.label, english.water_saved.label);
    assert_eq!(labels.water_saved.unit, english.water_saved.unit);
    assert_eq!(labels.revenue_chart, english.revenue_chart);
}

#[test]
fn test_wrongly_typed_field_is_parse_error() {
    let err = DashboardLabels::from_json_str(r#"{ "emissions_chart": { "title": 5 } }"#)
        .unwrap_err();
    assert!(matches!(err, LabelsError::Parse(_)));
}

#[test]
fn test_invalid_json_is_parse_error() {
    let err = DashboardLabels::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, LabelsError::Parse(_)));
    assert!(format!("{err}").contains("Invalid label file"), "got: {err}");
}

#[test]
fn test_missing_file_is_io_error() {
    let err = DashboardLabels::from_json_file("/nonexistent/impact_labels.json").unwrap_err();
    assert!(matches!(err, LabelsError::Io(_)));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_resolve_selectors() {
    assert_eq!(DashboardLabels::resolve(None), DashboardLabels::english());
    assert_eq!(
        DashboardLabels::resolve(Some(SPANISH_PRESET)),
        DashboardLabels::spanish()
    );
    assert_eq!(
        DashboardLabels::resolve(Some("/nonexistent/impact_labels.json")),
        DashboardLabels::english(),
        "unreadable file should fall back to defaults"
    );
}

#[test]
fn test_resolve_reads_json_file() {
    let dir = "/tmp/impact_labels_test_resolve";
    let _ = std::fs::remove_dir_all(dir);
    std::fs::create_dir_all(dir).unwrap();
    let path = format!("{dir}/labels.json");
    std::fs::write(
        &path,
        r#"{ "charts_header": "Charts!", "revenue_chart": { "export_stem": "Revenue" } }"#,
    )
    .unwrap();

    let labels = DashboardLabels::resolve(Some(&path));
    assert_eq!(labels.charts_header, "Charts!");
    assert_eq!(labels.revenue_chart.export_stem, "Revenue");
    assert_eq!(
        labels.revenue_chart.title,
        DashboardLabels::english().revenue_chart.title
    );

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn test_download_text_substitutes_file_name() {
    let labels = DashboardLabels::english();
    assert_eq!(
        labels.download_text("Water_Saved.png"),
        "Download Water_Saved.png"
    );
}

#[test]
fn test_slider_text_lookup() {
    let labels = DashboardLabels::english();
    assert_eq!(
        labels.slider(Parameter::MarketPrice).label,
        labels.market_price.label
    );
    assert_eq!(
        labels.slider(Parameter::ProductionVolume).help,
        labels.production_volume.help
    );
}

#[test]
fn test_labels_json_round_trip_keeps_presets() {
    let es = DashboardLabels::spanish();
    let json = serde_json::to_string(&es).expect("serialize");
    let back = DashboardLabels::from_json_str(&json).expect("parse");
    assert_eq!(back, es);
}
