use super::super::state::App;
use super::Effect;
use crate::goals::today;
use tracing::info;

impl App {
    pub(super) fn handle_save_bookmark(&mut self, effects: &mut Vec<Effect>) {
        self.notice = Some(format!("Bookmarked: {}", self.reader.document().footer_label()));
        effects.push(Effect::SaveBookmark);
    }

    pub(super) fn handle_reading_tick(&mut self) {
        let outcome = self.goals.record_minute(today());
        info!(
            minutes = outcome.minutes_read,
            goal = self.goals.daily_goal(),
            exp = self.goals.exp(),
            "Recorded reading minute"
        );
        if outcome.leveled_up {
            self.notice = Some(format!("Level up! Now level {}", self.goals.level()));
        } else if outcome.minutes_read == self.goals.daily_goal() {
            self.notice = Some("Daily reading goal reached".to_string());
        }
    }
}
