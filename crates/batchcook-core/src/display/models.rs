//! Display implementations for domain models.
//!
//! All output is markdown, rendered by the CLI's terminal renderer or
//! returned verbatim to MCP clients.

use std::fmt;

use super::{datetime::ClockTime, Minutes};
use crate::{
    models::{
        Appliance, ChildSafeMoment, Conflict, HistoryStats, MomentKind, NapPlan, SessionPlan,
        SessionStats, Step, StepStatus, StorageLocation, TimedStep, ValidationReport,
    },
    params::FormattedDuration,
};

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Step {
    /// Compact one-line tags: appliances, flags, temperature, status.
    fn tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self
            .requires_appliances
            .iter()
            .map(|a| format!("`{a}`"))
            .collect();
        if self.is_supervision {
            tags.push("unattended".to_string());
        } else if self.is_passive {
            tags.push("passive".to_string());
        }
        if self.is_noisy {
            tags.push("noisy".to_string());
        }
        if let Some(t) = self.temperature_celsius {
            tags.push(format!("{t}°C"));
        }
        if let Some(status) = self.status {
            tags.push(status.with_icon().to_string());
        }
        tags
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sequence_order {
            Some(order) => write!(f, "### {order}. ")?,
            None => write!(f, "### ")?,
        }
        writeln!(f, "{} ({})", self.title, Minutes(self.duration_minutes))?;

        let tags = self.tags();
        if !tags.is_empty() {
            writeln!(f)?;
            writeln!(f, "- {}", tags.join(" · "))?;
        }
        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- **{}** (group {}): {}", self.appliance, self.group, self.message)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            return writeln!(f, "Success: no problems found.");
        }
        writeln!(f, "Error: {} problem(s) found.", self.errors.len())?;
        writeln!(f)?;
        for error in &self.errors {
            writeln!(f, "- {error}")?;
        }
        Ok(())
    }
}

impl fmt::Display for SessionPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Session Plan")?;
        writeln!(f)?;

        if self.steps.is_empty() {
            return writeln!(f, "No steps to schedule.");
        }

        writeln!(
            f,
            "- Steps: {} in {} parallel group(s)",
            self.steps.len(),
            self.group_count()
        )?;
        writeln!(f, "- Sequential time: {}", Minutes(self.raw_duration))?;
        writeln!(f, "- Optimized time: {}", Minutes(self.optimized_duration))?;
        writeln!(f, "- Time saved: {:.0}%", self.time_saved_pct)?;

        let mut current: Option<u32> = None;
        for step in &self.steps {
            if step.parallel_group != current {
                current = step.parallel_group;
                let group = current.unwrap_or(0);
                let longest = self
                    .steps
                    .iter()
                    .filter(|s| s.parallel_group == current)
                    .map(|s| s.duration_minutes)
                    .max()
                    .unwrap_or(0);
                writeln!(f)?;
                writeln!(f, "## Group {group} ({})", Minutes(longest))?;
                writeln!(f)?;
            }
            write!(f, "{step}")?;
        }

        if !self.conflicts.is_empty() {
            writeln!(f, "## Conflicts")?;
            writeln!(f)?;
            for conflict in &self.conflicts {
                write!(f, "{conflict}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for ChildSafeMoment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icon = match self.kind {
            MomentKind::Help { .. } => "🙌",
            MomentKind::Watch => "👀",
        };
        let order = self
            .step
            .sequence_order
            .map(|o| format!("{o}. "))
            .unwrap_or_default();
        writeln!(f, "- {icon} {order}**{}**: {}", self.step.title, self.advice)
    }
}

impl fmt::Display for TimedStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- {}-{} {}{}",
            ClockTime(&self.start),
            ClockTime(&self.end),
            self.step.title,
            if self.step.is_noisy { " (noisy)" } else { "" }
        )
    }
}

impl fmt::Display for NapPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Nap-Aware Plan")?;
        for (title, bucket) in [
            ("Before the nap", &self.before_nap),
            ("During the nap", &self.during_nap),
            ("After the nap", &self.after_nap),
        ] {
            writeln!(f)?;
            writeln!(f, "## {title}")?;
            writeln!(f)?;
            if bucket.is_empty() {
                writeln!(f, "Nothing scheduled.")?;
            }
            for timed in bucket {
                write!(f, "{timed}")?;
            }
        }
        if !self.advisories.is_empty() {
            writeln!(f)?;
            writeln!(f, "## Advisories")?;
            writeln!(f)?;
            for advisory in &self.advisories {
                writeln!(f, "- ⚠ {advisory}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for SessionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Session Statistics")?;
        writeln!(f)?;
        writeln!(
            f,
            "- Progress: {}/{} steps ({:.0}%)",
            self.completed_count, self.step_count, self.progress_pct
        )?;
        writeln!(f, "- Sequential time: {}", Minutes(self.raw_duration))?;
        writeln!(f, "- Optimized time: {}", Minutes(self.optimized_duration))?;
        writeln!(f, "- Time saved: {:.0}%", self.time_saved_pct)?;
        writeln!(
            f,
            "- Preparations: {} ({} portions)",
            self.preparation_count, self.total_portions
        )?;
        if !self.appliances_used.is_empty() {
            writeln!(f)?;
            writeln!(f, "## Appliances")?;
            writeln!(f)?;
            for usage in &self.appliances_used {
                writeln!(f, "- {}: {} step(s)", usage.appliance, usage.count)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for HistoryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Session History")?;
        writeln!(f)?;
        if self.session_count == 0 {
            return writeln!(f, "No sessions recorded.");
        }
        writeln!(f, "- Sessions: {}", self.session_count)?;
        writeln!(
            f,
            "- Average duration: {}",
            Minutes(self.average_duration.round() as u32)
        )?;
        writeln!(f, "- Average portions: {:.1}", self.average_portions)?;
        if let Some(appliance) = &self.most_used_appliance {
            writeln!(f, "- Most used appliance: {appliance}")?;
        }
        writeln!(f, "- Longest streak: {} week(s)", self.longest_streak_weeks)
    }
}

impl fmt::Display for Appliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {} **{}** (`{}`)", self.icon, self.display_name, self.id)?;
        if self.allows_parallel_use {
            write!(f, " · shareable")?;
        } else {
            write!(f, " · single-use")?;
        }
        if !self.description.is_empty() {
            write!(f, " · {}", self.description)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for StorageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- {} **{}** (`{}`) · keeps up to {} days",
            self.icon, self.display_name, self.id, self.max_conservation_days
        )
    }
}

impl fmt::Display for FormattedDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted)?;
        if let Some(end) = &self.ends_at {
            write!(f, " (ends at {})", ClockTime(end))?;
        }
        writeln!(f)
    }
}
