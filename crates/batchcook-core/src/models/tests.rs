use jiff::civil::{date, time};
use serde_json::json;

use super::*;

#[test]
fn test_minimal_step_defaults() {
    let step: Step = serde_json::from_value(json!({ "duration_minutes": 12 })).unwrap();
    assert_eq!(step.title, "");
    assert_eq!(step.duration_minutes, 12);
    assert!(!step.is_passive);
    assert!(!step.is_supervision);
    assert!(!step.is_noisy);
    assert!(step.requires_appliances.is_empty());
    assert!(step.temperature_celsius.is_none());
    assert!(!step.is_scheduled());
    assert_eq!(step.group_or_default(), 0);
}

#[test]
fn test_step_without_duration_is_rejected() {
    let result: Result<Step, _> = serde_json::from_value(json!({ "title": "Chop" }));
    assert!(result.is_err());
}

#[test]
fn test_legacy_keys() {
    let step: Step = serde_json::from_value(json!({
        "title": "Cuire le riz",
        "duree_minutes": 20,
        "est_supervision": true,
        "robots": ["stovetop", "stovetop"]
    }))
    .unwrap();
    assert_eq!(step.duration_minutes, 20);
    assert!(step.is_supervision);
    assert_eq!(step.requires_appliances.len(), 1);
}

#[test]
fn test_unscheduled_step_serializes_without_schedule_fields() {
    let value = serde_json::to_value(Step::new("Peel", 5)).unwrap();
    assert!(value.get("parallel_group").is_none());
    assert!(value.get("sequence_order").is_none());
    assert!(value.get("status").is_none());

    let value = serde_json::to_value(Step::new("Peel", 5).scheduled(3, 7)).unwrap();
    assert_eq!(value["parallel_group"], 3);
    assert_eq!(value["sequence_order"], 7);
}

#[test]
fn test_step_helpers() {
    let blender = Step::new("Blend", 5).with_appliance("blender");
    let smoothie = Step::new("Smoothie", 3)
        .with_appliance("blender")
        .with_appliance("stovetop");
    let chop = Step::new("Chop", 10);
    assert!(blender.shares_appliance_with(&smoothie));
    assert!(!blender.shares_appliance_with(&chop));

    let supervised = Step::new("Braise", 120).supervised();
    assert!(supervised.is_supervision && supervised.is_passive);

    assert!(Step::new("x", 1).with_status(StepStatus::Done).is_done());
    assert!(!Step::new("x", 1).with_status(StepStatus::InProgress).is_done());
}

#[test]
fn test_step_status_serialization() {
    assert_eq!(
        serde_json::to_value(StepStatus::InProgress).unwrap(),
        json!("inprogress")
    );
    assert_eq!(
        serde_json::from_value::<StepStatus>(json!("done")).unwrap(),
        StepStatus::Done
    );
    assert!(serde_json::from_value::<StepStatus>(json!("burnt")).is_err());
}

#[test]
fn test_session_round_trip_and_portions() {
    let session: Session = serde_json::from_value(json!({
        "date": "2026-11-08",
        "selected_recipe_ids": [4, 2, 4],
        "available_appliances": ["oven"],
        "preparations": [
            { "name": "Chili", "portions": 6, "conservation_days": 3, "storage_location": "refrigerator" },
            { "name": "Bolognese", "portions": 8, "storage_location": "freezer" }
        ]
    }))
    .unwrap();
    assert_eq!(session.date, date(2026, 11, 8));
    assert_eq!(session.selected_recipe_ids.len(), 2);
    assert!(session.steps.is_empty());
    assert_eq!(session.preparations[1].conservation_days, 0);
    assert_eq!(session.total_portions(), 14);
}

#[test]
fn test_child_safe_moment_flattens_step() {
    let moment = ChildSafeMoment {
        step: Step::new("Wash lettuce", 5).scheduled(0, 2),
        kind: MomentKind::Help {
            keyword: "wash".to_string(),
        },
        advice: "Jules can help".to_string(),
    };
    let value = serde_json::to_value(&moment).unwrap();
    assert_eq!(value["title"], "Wash lettuce");
    assert_eq!(value["sequence_order"], 2);
    assert_eq!(value["kind"], json!({ "mode": "help", "keyword": "wash" }));

    let watch = serde_json::to_value(MomentKind::Watch).unwrap();
    assert_eq!(watch, json!({ "mode": "watch" }));
}

#[test]
fn test_timed_step_times_serialize_as_clock_strings() {
    let timed = TimedStep {
        step: Step::new("Bake", 30),
        start: time(14, 0, 0, 0),
        end: time(14, 30, 0, 0),
    };
    let value = serde_json::to_value(&timed).unwrap();
    assert_eq!(value["start"], "14:00:00");
    assert_eq!(value["title"], "Bake");
}

#[test]
fn test_group_count() {
    let plan = SessionPlan {
        steps: vec![
            Step::new("a", 1).scheduled(0, 1),
            Step::new("b", 1).scheduled(0, 2),
            Step::new("c", 1).scheduled(4, 3),
        ],
        conflicts: vec![],
        raw_duration: 3,
        optimized_duration: 2,
        time_saved_pct: 33.3,
    };
    assert_eq!(plan.group_count(), 2);
}

#[test]
fn test_validation_report() {
    let report = ValidationReport::from_errors(vec!["unknown appliance: wok".to_string()]);
    assert!(!report.valid);
    assert!(report.mentions("wok"));
    assert!(ValidationReport::from_errors(vec![]).valid);
}
