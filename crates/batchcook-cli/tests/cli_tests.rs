use std::path::PathBuf;

use assert_cmd::Command;
use jiff::{ToSpan, Zoned};
use predicates::prelude::*;
use tempfile::TempDir;

/// Temp dir that doubles as XDG config home, so no user config leaks in.
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// `batchcook --no-color` with the config lookup confined to `home`.
fn batchcook_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("batchcook").expect("Failed to find batchcook binary");
    cmd.env("XDG_CONFIG_HOME", home.path())
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

fn write_json(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write fixture");
    path
}

fn next_week() -> String {
    Zoned::now()
        .date()
        .checked_add(7.days())
        .expect("date in range")
        .to_string()
}

const STEPS: &str = r#"[
    {"title": "Roast vegetables", "duration_minutes": 60, "is_supervision": true,
     "requires_appliances": ["oven"], "temperature_celsius": 200},
    {"title": "Mix the vinaigrette", "duration_minutes": 10},
    {"title": "Blend the soup", "duration_minutes": 10, "requires_appliances": ["blender"],
     "is_noisy": true},
    {"title": "Peel potatoes", "duration_minutes": 20}
]"#;

#[test]
fn test_cli_plan_step_list() {
    let home = create_cli_test_environment();
    let file = write_json(&home, "steps.json", STEPS);

    batchcook_cmd(&home)
        .args(["plan", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Session Plan"))
        .stdout(predicate::str::contains("- Sequential time: 1h40"))
        .stdout(predicate::str::contains("- Optimized time: 1h"))
        .stdout(predicate::str::contains("- Time saved: 40%"))
        .stdout(predicate::str::contains("### 1. Roast vegetables (1h)"));
}

#[test]
fn test_cli_plan_session_rejected() {
    let home = create_cli_test_environment();
    let file = write_json(
        &home,
        "session.json",
        r#"{"date": "2001-01-01", "selected_recipe_ids": [], "available_appliances": ["four"]}"#,
    );

    batchcook_cmd(&home)
        .args(["plan", file.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid session"))
        .stderr(predicate::str::contains("date in past"))
        .stderr(predicate::str::contains("unknown appliance: four"));
}

#[test]
fn test_cli_plan_session_from_stdin_as_json() {
    let home = create_cli_test_environment();
    let session = format!(
        r#"{{"date": "{}", "selected_recipe_ids": [1, 2], "available_appliances": ["oven"],
            "steps": {STEPS}}}"#,
        next_week()
    );

    let output = batchcook_cmd(&home)
        .args(["--json", "plan", "-"])
        .write_stdin(session)
        .output()
        .expect("Failed to run batchcook");
    assert!(output.status.success());

    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).expect("JSON output");
    assert_eq!(plan["raw_duration"], 100);
    assert_eq!(plan["optimized_duration"], 60);
    assert_eq!(plan["steps"].as_array().unwrap().len(), 4);
    assert_eq!(plan["steps"][0]["sequence_order"], 1);
}

#[test]
fn test_cli_conflicts() {
    let home = create_cli_test_environment();
    let file = write_json(
        &home,
        "scheduled.json",
        r#"[
            {"title": "Puree", "duration_minutes": 5, "robots": ["blender"],
             "parallel_group": 0, "sequence_order": 1},
            {"title": "Smoothie", "duration_minutes": 5, "robots": ["blender"],
             "parallel_group": 0, "sequence_order": 2},
            {"title": "Gratin", "duration_minutes": 40, "robots": ["oven"],
             "parallel_group": 0, "sequence_order": 3},
            {"title": "Tart", "duration_minutes": 30, "robots": ["oven"],
             "parallel_group": 0, "sequence_order": 4}
        ]"#,
    );

    batchcook_cmd(&home)
        .args(["conflicts", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("**blender** (group 0)"))
        .stdout(predicate::str::contains("Puree, Smoothie"))
        .stdout(predicate::str::contains("oven").not());
}

#[test]
fn test_cli_conflicts_none() {
    let home = create_cli_test_environment();
    let file = write_json(&home, "steps.json", "[]");

    batchcook_cmd(&home)
        .args(["conflicts", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No appliance conflicts."));
}

#[test]
fn test_cli_optimize_aliases() {
    let home = create_cli_test_environment();
    let file = write_json(&home, "steps.json", STEPS);

    batchcook_cmd(&home)
        .args(["o", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("### 4. Blend the soup"));
}

#[test]
fn test_cli_validate_session() {
    let home = create_cli_test_environment();

    batchcook_cmd(&home)
        .args([
            "validate",
            "session",
            "--date",
            &next_week(),
            "--recipes",
            "1,2",
            "--appliances",
            "oven,stand_mixer",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: no problems found."));

    batchcook_cmd(&home)
        .args([
            "validate",
            "session",
            "--date",
            "yesterday",
            "--appliances",
            "wok",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Error: 3 problem(s) found."))
        .stdout(predicate::str::contains("Invalid input for field 'date'"))
        .stdout(predicate::str::contains("no recipes"))
        .stdout(predicate::str::contains("unknown appliance: wok"));
}

#[test]
fn test_cli_validate_session_counts_distinct_recipes() {
    let home = create_cli_test_environment();

    batchcook_cmd(&home)
        .args([
            "validate",
            "session",
            "--date",
            &next_week(),
            "--recipes",
            "1,1,1,1,1,1,1,1,1,1,1",
            "--appliances",
            "oven",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: no problems found."));
}

#[test]
fn test_cli_validate_preparation() {
    let home = create_cli_test_environment();

    batchcook_cmd(&home)
        .args([
            "validate",
            "preparation",
            "Chili",
            "--portions",
            "6",
            "--days",
            "4",
            "--location",
            "refrigerator",
        ])
        .assert()
        .success();

    batchcook_cmd(&home)
        .args([
            "validate",
            "preparation",
            "Chili",
            "--portions",
            "6",
            "--days",
            "8",
            "--location",
            "refrigerator",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "8 days exceeds the refrigerator maximum of 5 days",
        ));
}

#[test]
fn test_cli_jules() {
    let home = create_cli_test_environment();
    let file = write_json(&home, "steps.json", STEPS);

    batchcook_cmd(&home)
        .args(["jules", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jules can help: 'Mix the vinaigrette'"))
        .stdout(predicate::str::contains(
            "Jules can watch 'Roast vegetables' from a high chair",
        ))
        .stdout(predicate::str::contains("Blend the soup").not())
        .stdout(predicate::str::contains("Peel potatoes").not());
}

#[test]
fn test_cli_nap() {
    let home = create_cli_test_environment();
    let file = write_json(&home, "steps.json", STEPS);

    // Every step fits beside the roast, so all of them start at 13:00.
    batchcook_cmd(&home)
        .args([
            "nap",
            file.to_str().unwrap(),
            "--start",
            "13:00",
            "--nap-start",
            "13:05",
            "--nap-end",
            "15:00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Before the nap\n\nNothing scheduled."))
        .stdout(predicate::str::contains("- 13:00-14:00 Roast vegetables"))
        .stdout(predicate::str::contains("- 13:00-13:10 Blend the soup (noisy)"))
        .stdout(predicate::str::contains(
            "'Blend the soup' is noisy and runs 13:00-13:10",
        ));
}

#[test]
fn test_cli_nap_rejects_bad_time() {
    let home = create_cli_test_environment();
    let file = write_json(&home, "steps.json", STEPS);

    batchcook_cmd(&home)
        .args([
            "nap",
            file.to_str().unwrap(),
            "--start",
            "1pm",
            "--nap-start",
            "13:30",
            "--nap-end",
            "15:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("start_time"));
}

#[test]
fn test_cli_stats() {
    let home = create_cli_test_environment();
    let file = write_json(
        &home,
        "session.json",
        r#"{"date": "2026-01-04",
            "steps": [
                {"title": "Bake", "duration_minutes": 60, "is_supervision": true,
                 "requires_appliances": ["oven"], "status": "done"},
                {"title": "Chop", "duration_minutes": 20, "status": "inprogress"}
            ],
            "preparations": [
                {"name": "Gratin", "portions": 6, "conservation_days": 3,
                 "storage_location": "refrigerator"}
            ]}"#,
    );

    batchcook_cmd(&home)
        .args(["stats", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Progress: 1/2 steps (50%)"))
        .stdout(predicate::str::contains("- Sequential time: 1h20"))
        .stdout(predicate::str::contains("- Optimized time: 1h"))
        .stdout(predicate::str::contains("- Preparations: 1 (6 portions)"))
        .stdout(predicate::str::contains("- oven: 1 step(s)"));
}

#[test]
fn test_cli_history() {
    let home = create_cli_test_environment();
    let first = write_json(
        &home,
        "first.json",
        r#"[{"date": "2026-02-01", "steps": [{"duration_minutes": 30, "robots": ["oven"]}]},
            {"date": "2026-02-08", "steps": [{"duration_minutes": 50, "robots": ["oven"]}]}]"#,
    );
    let second = write_json(
        &home,
        "second.json",
        r#"{"date": "2026-02-15", "steps": [{"duration_minutes": 10, "robots": ["blender"]}]}"#,
    );

    batchcook_cmd(&home)
        .args(["history", first.to_str().unwrap(), second.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Sessions: 3"))
        .stdout(predicate::str::contains("- Average duration: 30 min"))
        .stdout(predicate::str::contains("- Most used appliance: oven"))
        .stdout(predicate::str::contains("- Longest streak: 3 week(s)"));
}

#[test]
fn test_cli_appliances() {
    let home = create_cli_test_environment();

    batchcook_cmd(&home)
        .arg("appliances")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Appliances"))
        .stdout(predicate::str::contains("`air_fryer`"))
        .stdout(predicate::str::contains("# Storage Locations"))
        .stdout(predicate::str::contains("keeps up to 30 days"));
}

#[test]
fn test_cli_config_file() {
    let home = create_cli_test_environment();
    let config = write_json(
        &home,
        "kitchen.json",
        r#"{"appliances": [{"id": "four", "display_name": "Four", "allows_parallel_use": true}],
            "child_name": "Léa"}"#,
    );
    let steps = write_json(&home, "steps.json", STEPS);

    batchcook_cmd(&home)
        .args(["--config-file", config.to_str().unwrap(), "appliances"])
        .assert()
        .success()
        .stdout(predicate::str::contains("`four`"))
        .stdout(predicate::str::contains("`oven`").not());

    batchcook_cmd(&home)
        .args([
            "--config-file",
            config.to_str().unwrap(),
            "jules",
            steps.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Léa can help"));
}

#[test]
fn test_cli_missing_config_file() {
    let home = create_cli_test_environment();
    let missing = home.path().join("nope.json");

    batchcook_cmd(&home)
        .args(["--config-file", missing.to_str().unwrap(), "appliances"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Failed to load kitchen configuration",
        ));
}

#[test]
fn test_cli_format() {
    let home = create_cli_test_environment();

    batchcook_cmd(&home)
        .args(["format", "125"])
        .assert()
        .success()
        .stdout("2h05\n");

    batchcook_cmd(&home)
        .args(["format", "90", "--start", "23:15"])
        .assert()
        .success()
        .stdout("1h30 (ends at 00:45)\n");
}

#[test]
fn test_cli_bad_json() {
    let home = create_cli_test_environment();
    let file = write_json(&home, "broken.json", "{ not json");

    batchcook_cmd(&home)
        .args(["optimize", file.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not valid JSON"));
}
