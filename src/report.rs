//! Auto-generated daily report for a finished quest.

use crate::adventure_log::CompletionReport;
use crate::quests::ActiveQuest;
use chrono::{DateTime, Local};

const REPORT_HEADLINE: &str = "[Auto-generated Daily Report]";

/// Builds the report for `active` as of `now`.
///
/// Pure: touches neither the profile nor the log. The caller applies the
/// report together with the reward.
pub fn generate_report(active: &ActiveQuest, now: DateTime<Local>) -> CompletionReport {
    CompletionReport {
        quest_id: active.quest.id,
        title: active.quest.title.to_string(),
        completed_at: now,
        narrative: narrative(active),
    }
}

fn narrative(active: &ActiveQuest) -> String {
    let quest = &active.quest;
    let mut lines = vec![
        REPORT_HEADLINE.to_string(),
        format!(
            "On today's quest \"{}\", our hero put on a splendid performance.",
            quest.title
        ),
        format!("The work at {} was especially swift.", quest.location),
    ];

    if active.photos > 0 || active.memos > 0 {
        lines.push(format!(
            "Field notes: {} photo(s), {} memo(s).",
            active.photos, active.memos
        ));
    }

    lines.push(format!("EXP earned: {}", quest.exp));
    lines.push(format!("Reward: {}", quest.reward));
    lines.join("\n")
}
