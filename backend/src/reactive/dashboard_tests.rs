use super::*;
use crate::models::{LaunchRecord, OutcomeClass, PayloadRange, SiteSelection};
use serde_json::json;

fn dashboard() -> Dashboard {
    let dataset = Dataset::from_records(vec![
        LaunchRecord::new("A", 500.0, OutcomeClass::Success, "v1.0"),
        LaunchRecord::new("A", 9000.0, OutcomeClass::Failure, "FT"),
        LaunchRecord::new("B", 3000.0, OutcomeClass::Success, "B4"),
    ])
    .unwrap();
    Dashboard::new(Arc::new(dataset))
}

#[test]
fn test_initial_render_computes_every_output() {
    let response = dashboard().update(&UpdateRequest::default()).unwrap();

    assert_eq!(response.outputs.len(), 2);
    let pie = response.outputs["success-pie-chart"].chart.as_pie().unwrap();
    assert_eq!(pie.title, "Total Success Launches by Site");
    let scatter = response.outputs["success-payload-scatter-chart"]
        .chart
        .as_scatter()
        .unwrap();
    // Initial slider value spans the whole dataset
    assert_eq!(scatter.points.len(), 3);
}

#[test]
fn test_slider_change_only_updates_scatter() {
    let mut request = UpdateRequest {
        changed_inputs: vec!["payload-slider".to_string()],
        ..Default::default()
    };
    request
        .inputs
        .insert("payload-slider".to_string(), json!([0, 4000]));
    request
        .inputs
        .insert("site-dropdown".to_string(), json!("ALL"));

    let response = dashboard().update(&request).unwrap();
    assert_eq!(response.outputs.len(), 1);
    let scatter = response.outputs["success-payload-scatter-chart"]
        .chart
        .as_scatter()
        .unwrap();
    assert_eq!(scatter.points.len(), 2);
}

#[test]
fn test_dropdown_change_updates_both() {
    let mut request = UpdateRequest {
        changed_inputs: vec!["site-dropdown".to_string()],
        ..Default::default()
    };
    request.inputs.insert("site-dropdown".to_string(), json!("A"));

    let response = dashboard().update(&request).unwrap();
    assert_eq!(response.outputs.len(), 2);

    let pie = response.outputs["success-pie-chart"].chart.as_pie().unwrap();
    assert_eq!(pie.title, "Total Success Launches for Site A");
    let scatter = response.outputs["success-payload-scatter-chart"]
        .chart
        .as_scatter()
        .unwrap();
    assert!(scatter.points.iter().all(|p| p.launch_site == "A"));
}

#[test]
fn test_unknown_changed_input() {
    let request = UpdateRequest {
        changed_inputs: vec!["color-picker".to_string()],
        ..Default::default()
    };
    let err = dashboard().update(&request).unwrap_err();
    assert_eq!(err, HandlerError::UnknownInput("color-picker".to_string()));
}

#[test]
fn test_render_unknown_output() {
    let dash = dashboard();
    let state = dash.initial_state();
    let err = dash.render("missing-chart", &state).unwrap_err();
    assert_eq!(err, HandlerError::UnknownOutput("missing-chart".to_string()));
}

#[test]
fn test_render_is_idempotent() {
    let dash = dashboard();
    let state = ControlState {
        site: SiteSelection::from("B"),
        payload_range: PayloadRange::new(0.0, 10000.0),
    };
    let first = dash.render("success-payload-scatter-chart", &state).unwrap();
    let second = dash.render("success-payload-scatter-chart", &state).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_initial_state_and_layout() {
    let dash = dashboard();
    let state = dash.initial_state();
    assert_eq!(state.site, SiteSelection::All);
    assert_eq!(state.payload_range, PayloadRange::new(500.0, 9000.0));
    assert_eq!(dash.site_options().len(), 3);
    assert_eq!(dash.layout().components.len(), 5);
}
