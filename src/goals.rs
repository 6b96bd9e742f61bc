//! Daily reading goal and experience tracking.
//!
//! Minutes read reset when the calendar day changes; experience accumulates
//! forever and determines the reader's level.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const GOAL_FILE: &str = "reading_goal.json";
const EXP_PER_LEVEL: u64 = 100;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalState {
    /// Local calendar date of the last recorded minute.
    #[serde(default)]
    pub day: Option<NaiveDate>,
    #[serde(default)]
    pub minutes_read: u32,
    #[serde(default)]
    pub exp: u64,
}

/// Outcome of one reading tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    pub minutes_read: u32,
    pub leveled_up: bool,
}

#[derive(Debug)]
pub struct GoalTracker {
    state: GoalState,
    daily_goal: u32,
    exp_per_minute: u32,
    path: Option<PathBuf>,
}

impl GoalTracker {
    /// Load persisted progress from `.cache/reading_goal.json`.
    pub fn load(daily_goal: u32, exp_per_minute: u32) -> Self {
        let path = Path::new(crate::cache::CACHE_DIR).join(GOAL_FILE);
        let state = read_state(&path);
        let mut tracker = Self::with_state(state, daily_goal, exp_per_minute);
        tracker.path = Some(path);
        tracker.roll_day(today());
        tracker
    }

    /// Tracker that never touches the filesystem.
    pub fn with_state(state: GoalState, daily_goal: u32, exp_per_minute: u32) -> Self {
        Self {
            state,
            daily_goal,
            exp_per_minute,
            path: None,
        }
    }

    pub fn daily_goal(&self) -> u32 {
        self.daily_goal
    }

    pub fn exp(&self) -> u64 {
        self.state.exp
    }

    pub fn level(&self) -> u64 {
        level_for(self.state.exp)
    }

    pub fn goal_reached(&self) -> bool {
        self.state.minutes_read >= self.daily_goal
    }

    pub fn status_label(&self) -> String {
        let mark = if self.goal_reached() { " ✓" } else { "" };
        format!(
            "{}/{} min{mark} · Lv {}",
            self.state.minutes_read,
            self.daily_goal,
            self.level()
        )
    }

    /// Record one minute of reading on `day` and award its experience.
    pub fn record_minute(&mut self, day: NaiveDate) -> TickOutcome {
        self.roll_day(day);
        self.state.minutes_read = self.state.minutes_read.saturating_add(1);
        let leveled_up = self.add_exp(u64::from(self.exp_per_minute));
        self.persist();
        TickOutcome {
            minutes_read: self.state.minutes_read,
            leveled_up,
        }
    }

    /// Returns `true` when the award crosses into a new level.
    pub fn add_exp(&mut self, amount: u64) -> bool {
        let before = self.level();
        self.state.exp = self.state.exp.saturating_add(amount);
        let after = self.level();
        if after > before {
            info!(level = after, exp = self.state.exp, "Reader leveled up");
            true
        } else {
            false
        }
    }

    fn roll_day(&mut self, day: NaiveDate) {
        if self.state.day != Some(day) {
            debug!(from = ?self.state.day, to = %day, "New reading day; resetting minutes");
            self.state.day = Some(day);
            self.state.minutes_read = 0;
        }
    }

    fn persist(&self) {
        let Some(path) = &self.path else {
            return;
        };
        if let Some(parent) = path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                warn!(path = %parent.display(), "Failed to create cache directory: {err}");
                return;
            }
        }
        match serde_json::to_string(&self.state) {
            Ok(contents) => {
                if let Err(err) = fs::write(path, contents) {
                    warn!(path = %path.display(), "Failed to save reading goal: {err}");
                }
            }
            Err(err) => warn!("Failed to serialize reading goal: {err}"),
        }
    }
}

pub fn level_for(exp: u64) -> u64 {
    1 + exp / EXP_PER_LEVEL
}

/// Today's date in the user's local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn read_state(path: &Path) -> GoalState {
    let Ok(data) = fs::read_to_string(path) else {
        return GoalState::default();
    };
    serde_json::from_str(&data).unwrap_or_else(|err| {
        warn!(path = %path.display(), "Resetting unreadable reading goal: {err}");
        GoalState::default()
    })
}
