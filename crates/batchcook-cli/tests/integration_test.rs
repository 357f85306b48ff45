//! CLI output must be the core Display output verbatim in `--no-color`
//! mode, which is also what the MCP tools return.

use std::process::Command;

use batchcook_core::{
    display::{Conflicts, Moments},
    Kitchen, KitchenConfig, Step,
};
use tempfile::TempDir;

fn run_cli_command(home: &TempDir, args: &[&str]) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_batchcook"))
        .env("XDG_CONFIG_HOME", home.path())
        .arg("--no-color")
        .args(args)
        .output()
        .expect("Failed to run CLI command");
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

fn fixture_steps() -> Vec<Step> {
    vec![
        Step::new("Simmer ratatouille", 75)
            .supervised()
            .with_appliance("stovetop"),
        Step::new("Slow-cook beans", 240)
            .supervised()
            .with_appliance("slow_cooker"),
        Step::new("Pour batter into molds", 5).with_description("Small hands welcome"),
        Step::new("Grind spices", 3)
            .with_appliance("food_processor")
            .noisy(),
        Step::new("Knead dough", 15).with_appliance("stand_mixer"),
        Step::new("Whip cream", 6).with_appliance("stand_mixer"),
    ]
}

fn write_steps(home: &TempDir, steps: &[Step]) -> String {
    let path = home.path().join("steps.json");
    std::fs::write(&path, serde_json::to_string(steps).unwrap()).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_plan_output_matches_display() {
    let home = TempDir::new().unwrap();
    let file = write_steps(&home, &fixture_steps());
    let kitchen = Kitchen::new(KitchenConfig::default());

    let expected = kitchen.plan_steps(&fixture_steps()).to_string();
    assert_eq!(run_cli_command(&home, &["plan", &file]), expected);
}

#[test]
fn test_conflict_output_matches_display() {
    let home = TempDir::new().unwrap();
    let kitchen = Kitchen::new(KitchenConfig::default());
    let scheduled = kitchen.optimize(&fixture_steps());
    let file = write_steps(&home, &scheduled);

    let conflicts = kitchen.detect_conflicts(&scheduled);
    // Both mixer steps are packed beside the slow cooker.
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].appliance, "stand_mixer");

    let expected = Conflicts(conflicts).to_string();
    assert_eq!(run_cli_command(&home, &["conflicts", &file]), expected);
}

#[test]
fn test_jules_output_matches_display() {
    let home = TempDir::new().unwrap();
    let file = write_steps(&home, &fixture_steps());
    let kitchen = Kitchen::new(KitchenConfig::default());

    let scheduled = kitchen.optimize(&fixture_steps());
    let expected = Moments(kitchen.child_safe_moments(&scheduled)).to_string();
    let output = run_cli_command(&home, &["jules", &file]);
    assert_eq!(output, expected);
    assert!(output.contains("Pour batter into molds"));
    assert!(!output.contains("Grind spices"));
}
