//! Session and preparation checks run before scheduling.
//!
//! Both validators collect every problem instead of stopping at the first
//! one, and neither ever fails: the outcome is a [`ValidationReport`].

use std::collections::BTreeSet;

use jiff::{civil::Date, Zoned};

use crate::{config::KitchenConfig, models::ValidationReport};

/// Minimum length of a preparation name, in characters.
pub const MIN_PREPARATION_NAME_LEN: usize = 3;

/// Accepted range of portions for a preparation.
pub const PORTIONS_RANGE: std::ops::RangeInclusive<i64> = 1..=20;

/// Checks a proposed session against today's date in the system time zone.
///
/// See [`validate_session_on`] for the rules.
pub fn validate_session<R, A, S>(
    config: &KitchenConfig,
    date: Date,
    recipe_ids: R,
    appliances: A,
) -> ValidationReport
where
    R: IntoIterator,
    R::Item: Ord,
    A: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    validate_session_on(config, Zoned::now().date(), date, recipe_ids, appliances)
}

/// Checks a proposed session relative to `today`.
///
/// - the date may be today but not earlier;
/// - at least one and at most `max_recipes_per_session` distinct recipes;
/// - every appliance must be in the registry (one error per unknown id).
pub fn validate_session_on<R, A, S>(
    config: &KitchenConfig,
    today: Date,
    date: Date,
    recipe_ids: R,
    appliances: A,
) -> ValidationReport
where
    R: IntoIterator,
    R::Item: Ord,
    A: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut errors = Vec::new();

    if date < today {
        errors.push(format!("date in past: {date} is before {today}"));
    }

    let recipe_count = recipe_ids.into_iter().collect::<BTreeSet<_>>().len();
    if recipe_count == 0 {
        errors.push("no recipes: select at least one recipe".to_string());
    } else if recipe_count > config.max_recipes_per_session {
        errors.push(format!(
            "too many recipes: {recipe_count} selected, at most {} per session",
            config.max_recipes_per_session
        ));
    }

    for appliance in appliances {
        let appliance = appliance.as_ref();
        if config.appliance(appliance).is_none() {
            errors.push(format!("unknown appliance: {appliance}"));
        }
    }

    ValidationReport::from_errors(errors)
}

/// Checks the fields of a preparation.
///
/// - name of at least [`MIN_PREPARATION_NAME_LEN`] characters (trimmed);
/// - portions within [`PORTIONS_RANGE`];
/// - known storage location;
/// - conservation days not negative and not above the location's maximum.
///   Exceeding the maximum is reported, never clamped.
pub fn validate_preparation(
    config: &KitchenConfig,
    name: &str,
    portions: i64,
    conservation_days: i64,
    storage_location: &str,
) -> ValidationReport {
    let mut errors = Vec::new();

    if name.trim().chars().count() < MIN_PREPARATION_NAME_LEN {
        errors.push(format!(
            "name too short: at least {MIN_PREPARATION_NAME_LEN} characters required"
        ));
    }

    if !PORTIONS_RANGE.contains(&portions) {
        errors.push(format!(
            "portions out of range: {portions} is not between {} and {}",
            PORTIONS_RANGE.start(),
            PORTIONS_RANGE.end()
        ));
    }

    if conservation_days < 0 {
        errors.push(format!(
            "conservation days must not be negative (got {conservation_days})"
        ));
    }

    match config.storage_location(storage_location) {
        None => errors.push(format!("unknown storage location: {storage_location}")),
        Some(location) if conservation_days > i64::from(location.max_conservation_days) => {
            errors.push(format!(
                "conservation too long: {conservation_days} days exceeds the {} maximum of {} days",
                location.display_name.to_lowercase(),
                location.max_conservation_days
            ));
        }
        Some(_) => {}
    }

    ValidationReport::from_errors(errors)
}
