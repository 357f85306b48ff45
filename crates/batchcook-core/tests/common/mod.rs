use batchcook_core::{Kitchen, KitchenBuilder, Session, Step};
use jiff::{civil::Date, ToSpan, Zoned};
use tempfile::TempDir;

/// Kitchen loaded from a config file written into a fresh temp dir.
pub async fn kitchen_from_json(json: &str) -> (TempDir, Kitchen) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("kitchen.json");
    std::fs::write(&path, json).expect("Failed to write config");
    let kitchen = KitchenBuilder::new()
        .with_config_path(Some(&path))
        .build()
        .await
        .expect("Failed to build kitchen");
    (temp_dir, kitchen)
}

/// A date safely in the future for session validation.
pub fn next_week() -> Date {
    Zoned::now()
        .date()
        .checked_add(7.days())
        .expect("date in range")
}

/// A typical Sunday session: two long oven/slow-cooker operations and
/// a handful of hands-on tasks.
pub fn sunday_steps() -> Vec<Step> {
    vec![
        Step::new("Roast chicken", 90)
            .supervised()
            .with_appliance("oven")
            .at_temperature(200.0),
        Step::new("Braise beef", 180)
            .supervised()
            .with_appliance("slow_cooker"),
        Step::new("Mix the salad dressing", 10),
        Step::new("Peel carrots", 15),
        Step::new("Blend soup", 8).with_appliance("blender").noisy(),
        Step::new("Bake cookies", 20)
            .with_appliance("oven")
            .at_temperature(180.0),
        Step::new("Label containers", 10),
    ]
}

pub fn session_with(date: Date, steps: Vec<Step>) -> Session {
    let mut session = Session::new(date);
    session.selected_recipe_ids = [1, 2, 3].into_iter().collect();
    session.available_appliances = ["oven", "slow_cooker", "blender"]
        .into_iter()
        .map(String::from)
        .collect();
    session.steps = steps;
    session
}
