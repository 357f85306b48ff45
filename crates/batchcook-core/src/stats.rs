//! Roll-ups over scheduled sessions and session history.

use jiff::civil::Date;
use log::debug;

use crate::{
    models::{ApplianceUsage, HistoryStats, Session, SessionStats, Step},
    schedule::{sequential_duration, time_saved_pct, total_duration},
};

/// Summarizes one session.
///
/// `optimized_duration` uses the groups already on the steps, so pass a
/// scheduled session to get meaningful savings.
pub fn session_statistics(session: &Session) -> SessionStats {
    let step_count = session.steps.len() as u32;
    let completed_count = session.steps.iter().filter(|s| s.is_done()).count() as u32;
    let progress_pct = if step_count == 0 {
        0.0
    } else {
        f64::from(completed_count) / f64::from(step_count) * 100.0
    };

    let raw_duration = sequential_duration(&session.steps);
    let optimized_duration = total_duration(&session.steps);

    SessionStats {
        step_count,
        completed_count,
        progress_pct,
        raw_duration,
        optimized_duration,
        time_saved_pct: time_saved_pct(raw_duration, optimized_duration),
        preparation_count: session.preparations.len() as u32,
        total_portions: session.total_portions(),
        appliances_used: appliance_usage(session.steps.iter()),
    }
}

/// Aggregates past sessions.
///
/// The most used appliance is the one claimed by the most steps overall;
/// ties go to whichever appliance was encountered first while walking the
/// sessions in the given order.
pub fn history_statistics(sessions: &[Session]) -> HistoryStats {
    if sessions.is_empty() {
        return HistoryStats::default();
    }

    let count = sessions.len() as f64;
    let total_minutes: u64 = sessions
        .iter()
        .map(|s| u64::from(total_duration(&s.steps)))
        .sum();
    let total_portions: i64 = sessions.iter().map(Session::total_portions).sum();

    let usage = appliance_usage(sessions.iter().flat_map(|s| s.steps.iter()));
    let most_used_appliance = usage
        .iter()
        .fold(None::<&ApplianceUsage>, |best, u| match best {
            Some(b) if b.count >= u.count => Some(b),
            _ => Some(u),
        })
        .map(|u| u.appliance.clone());

    let dates: Vec<Date> = sessions.iter().map(|s| s.date).collect();
    let stats = HistoryStats {
        session_count: sessions.len() as u32,
        average_duration: total_minutes as f64 / count,
        average_portions: total_portions as f64 / count,
        most_used_appliance,
        longest_streak_weeks: longest_weekly_streak(&dates),
    };
    debug!("history over {} sessions: {:?}", sessions.len(), stats);
    stats
}

/// Counts steps per appliance, keeping first-encounter order.
fn appliance_usage<'a>(steps: impl Iterator<Item = &'a Step>) -> Vec<ApplianceUsage> {
    let mut usage: Vec<ApplianceUsage> = Vec::new();
    for appliance in steps.flat_map(|s| s.requires_appliances.iter()) {
        match usage.iter_mut().find(|u| &u.appliance == appliance) {
            Some(entry) => entry.count += 1,
            None => usage.push(ApplianceUsage {
                appliance: appliance.clone(),
                count: 1,
            }),
        }
    }
    usage
}

/// Longest run of consecutive Monday-based weeks holding a session.
fn longest_weekly_streak(dates: &[Date]) -> u32 {
    let mut weeks: Vec<Date> = dates.iter().filter_map(|d| week_start(*d)).collect();
    weeks.sort_unstable();
    weeks.dedup();

    let mut longest = 0u32;
    let mut current = 0u32;
    let mut previous: Option<Date> = None;
    for week in weeks {
        let consecutive = previous
            .and_then(|p| p.until(week).ok())
            .is_some_and(|gap| gap.get_days() == 7);
        current = if consecutive { current + 1 } else { 1 };
        longest = longest.max(current);
        previous = Some(week);
    }
    longest
}

fn week_start(date: Date) -> Option<Date> {
    let back = i64::from(date.weekday().to_monday_zero_offset());
    date.checked_sub(jiff::Span::new().days(back)).ok()
}
