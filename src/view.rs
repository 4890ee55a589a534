//! State → view projection.
//!
//! Each screen is described as plain data: every string the player will see
//! is formatted here, so the terminal layer only lays it out. Projecting the
//! same state twice gives equal views.

use crate::adventure_log::CompletionReport;
use crate::lifecycle::QuestState;
use crate::navigator::Screen;
use crate::opening::OPENING_SPEAKER;
use crate::quests::{ActiveQuest, QuestDefinition};
use crate::state::{AppState, FieldNoteKind, Notice};

pub const PLACEHOLDER_LABEL: &str = "NO IMAGE";
pub const REPORT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Quest art. Missing references become the placeholder tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageView {
    Asset(&'static str),
    Placeholder,
}

impl ImageView {
    pub fn for_reference(image: Option<&'static str>) -> Self {
        match image {
            Some(path) if !path.is_empty() => ImageView::Asset(path),
            _ => ImageView::Placeholder,
        }
    }

    /// Text drawn inside the image tile.
    pub fn caption(&self) -> &'static str {
        match *self {
            // Show just the file name
            ImageView::Asset(path) => path.rsplit('/').next().unwrap_or(path),
            ImageView::Placeholder => PLACEHOLDER_LABEL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub level_text: String,
    pub gold_text: String,
    pub music_icon: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavTabView {
    pub key: &'static str,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestCardView {
    pub rank: &'static str,
    pub title: String,
    pub reward_text: String,
    pub image: ImageView,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartyRoleView {
    pub role: &'static str,
    pub member: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestDetailView {
    pub image: ImageView,
    pub rank: &'static str,
    pub title: String,
    pub description: String,
    pub facts: Vec<String>,
    pub party: Vec<PartyRoleView>,
    pub party_note: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveQuestView {
    pub banner: &'static str,
    pub title: String,
    pub started_text: String,
    pub camera_text: &'static str,
    pub field_notes_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntryView {
    pub date_text: String,
    pub title: String,
    pub narrative: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub hero_text: String,
    pub exp_text: String,
    /// Progress toward the next level, 0-100
    pub exp_percent: u16,
    pub gold_text: String,
    pub cleared_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpeningView {
    pub speaker: &'static str,
    pub text: String,
    /// The start button only appears once the message is fully shown
    pub ready: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyView {
    Opening(OpeningView),
    QuestBoard(Vec<QuestCardView>),
    QuestDetail(QuestDetailView),
    ActiveQuest(ActiveQuestView),
    Report {
        /// Entries from the scroll position down, newest first
        entries: Vec<ReportEntryView>,
        empty_text: Option<&'static str>,
        /// Shown when newer entries are scrolled out of sight
        scroll_text: Option<String>,
    },
    Profile(ProfileView),
}

impl BodyView {
    pub fn title(&self) -> &'static str {
        match self {
            BodyView::Opening(_) => " A Royal Summons ",
            BodyView::QuestBoard(_) => " Quest Board ",
            BodyView::QuestDetail(_) => " Quest Details ",
            BodyView::ActiveQuest(_) => " Quest In Progress ",
            BodyView::Report { .. } => " Adventure Log ",
            BodyView::Profile(_) => " Status ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogTone {
    Warning,
    Celebration,
    Info,
}

/// Modal drawn on top of the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogView {
    pub title: &'static str,
    pub lines: Vec<String>,
    pub controls: Vec<(&'static str, &'static str)>,
    pub tone: DialogTone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub header: HeaderView,
    pub nav: Vec<NavTabView>,
    pub body: BodyView,
    pub controls: Vec<(&'static str, &'static str)>,
    pub dialog: Option<DialogView>,
}

/// Projects the whole screen.
pub fn project(state: &AppState, music_playing: bool) -> View {
    let body = project_body(state);
    View {
        header: project_header(state, music_playing),
        nav: project_nav(state.current_screen()),
        controls: controls_for(&body),
        body,
        dialog: project_dialog(state),
    }
}

fn project_header(state: &AppState, music_playing: bool) -> HeaderView {
    let profile = state.profile();
    HeaderView {
        level_text: format!("Lv.{}", profile.level),
        gold_text: format!("{} G", profile.gold),
        music_icon: if music_playing { "🔊" } else { "🔇" },
    }
}

fn project_nav(current: Screen) -> Vec<NavTabView> {
    Screen::NAV_TABS
        .iter()
        .zip(["1", "2", "3"])
        .map(|(screen, key)| NavTabView {
            key,
            label: screen.label(),
            active: *screen == current,
        })
        .collect()
}

fn project_body(state: &AppState) -> BodyView {
    match state.current_screen() {
        Screen::Opening => match state.opening() {
            Some(scene) => BodyView::Opening(OpeningView {
                speaker: OPENING_SPEAKER,
                text: scene.visible_text(),
                ready: scene.is_finished(),
            }),
            None => project_home(state),
        },
        Screen::Home => project_home(state),
        Screen::Report => project_report(state),
        Screen::Profile => project_profile(state),
    }
}

/// Home shows whichever of board, detail or active quest the lifecycle is in.
fn project_home(state: &AppState) -> BodyView {
    match state.quest_state() {
        QuestState::Browsing => BodyView::QuestBoard(
            state
                .catalog()
                .iter()
                .enumerate()
                .map(|(i, quest)| quest_card(quest, i == state.board_cursor()))
                .collect(),
        ),
        QuestState::Viewing(quest) => BodyView::QuestDetail(quest_detail(quest)),
        QuestState::Active(active) => BodyView::ActiveQuest(active_quest(active)),
    }
}

fn quest_card(quest: &QuestDefinition, selected: bool) -> QuestCardView {
    QuestCardView {
        rank: quest.rank.label(),
        title: quest.title.to_string(),
        reward_text: format!("Reward: {}", quest.reward),
        image: ImageView::for_reference(quest.image),
        selected,
    }
}

fn quest_detail(quest: &QuestDefinition) -> QuestDetailView {
    QuestDetailView {
        image: ImageView::for_reference(quest.image),
        rank: quest.rank.label(),
        title: quest.title.to_string(),
        description: quest.description.to_string(),
        facts: vec![
            format!("Location: {}", quest.location),
            format!("Reward: {}", quest.reward),
            format!("EXP: {}", quest.exp),
        ],
        party: vec![
            PartyRoleView {
                role: "Hero (Leader)",
                member: "Child",
            },
            PartyRoleView {
                role: "Support (Porter)",
                member: "Guardian A",
            },
        ],
        party_note: "* During the quest, the support follows the leader's instructions.",
    }
}

fn active_quest(active: &ActiveQuest) -> ActiveQuestView {
    ActiveQuestView {
        banner: "QUEST IN PROGRESS",
        title: active.quest.title.to_string(),
        started_text: format!("Started at {}", active.started_at.format("%H:%M")),
        camera_text: "📷 Camera starting... (simulation)",
        field_notes_text: format!("Photos: {}   Memos: {}", active.photos, active.memos),
    }
}

fn report_entry(report: &CompletionReport) -> ReportEntryView {
    ReportEntryView {
        date_text: report.completed_at.format(REPORT_DATE_FORMAT).to_string(),
        title: report.title.clone(),
        narrative: report.narrative.clone(),
    }
}

fn project_report(state: &AppState) -> BodyView {
    let log = state.adventure_log();
    let skipped = state.log_scroll();
    BodyView::Report {
        entries: log.iter().skip(skipped).map(report_entry).collect(),
        empty_text: log.is_empty().then_some("No records yet."),
        scroll_text: (skipped > 0).then(|| format!("▲ {} newer report(s) above", skipped)),
    }
}

fn project_profile(state: &AppState) -> BodyView {
    let profile = state.profile();
    BodyView::Profile(ProfileView {
        hero_text: format!("Hero (Lv.{})", profile.level),
        exp_text: format!("Current EXP: {} / {}", profile.exp, profile.exp_to_level_up()),
        exp_percent: (profile.exp * 100 / profile.exp_to_level_up().max(1)).min(100) as u16,
        gold_text: format!("Gold: {} G", profile.gold),
        cleared_text: format!("Quests cleared: {}", state.adventure_log().len()),
    })
}

fn project_dialog(state: &AppState) -> Option<DialogView> {
    if state.pending_navigation().is_some() {
        return Some(DialogView {
            title: " Quest In Progress ",
            lines: vec![
                "You are on a quest.".to_string(),
                "Abandon it? No reward will be given.".to_string(),
            ],
            controls: vec![("[Y]", "Abandon"), ("[N]", "Keep going")],
            tone: DialogTone::Warning,
        });
    }

    state.notice().map(|notice| match notice {
        Notice::QuestCleared { title } => DialogView {
            title: " Quest Complete ",
            lines: vec![
                format!("\"{}\" is complete!", title),
                "Great work out there!".to_string(),
            ],
            controls: vec![("[Enter]", "Read the log")],
            tone: DialogTone::Info,
        },
        Notice::LevelUp { level } => DialogView {
            title: " LEVEL UP! ",
            lines: vec![
                "🆙".to_string(),
                format!("The hero reached level {}!", level),
                "Maybe there are new things you can do?".to_string(),
            ],
            controls: vec![("[Enter]", "Hooray!")],
            tone: DialogTone::Celebration,
        },
        Notice::FieldNote(FieldNoteKind::Photo) => DialogView {
            title: " Snap! ",
            lines: vec!["Photo recorded.".to_string()],
            controls: vec![("[Enter]", "OK")],
            tone: DialogTone::Info,
        },
        Notice::FieldNote(FieldNoteKind::Memo) => DialogView {
            title: " Field Memo ",
            lines: vec![
                "\"So that's how it works!\"".to_string(),
                "Memo recorded.".to_string(),
            ],
            controls: vec![("[Enter]", "OK")],
            tone: DialogTone::Info,
        },
    })
}

fn controls_for(body: &BodyView) -> Vec<(&'static str, &'static str)> {
    let mut controls = match body {
        BodyView::Opening(opening) if opening.ready => vec![("[Enter]", "Begin the adventure")],
        BodyView::Opening(_) => vec![("[Enter]", "Skip")],
        BodyView::QuestBoard(_) => vec![("[↑↓]", "Select"), ("[Enter]", "Details")],
        BodyView::QuestDetail(_) => vec![("[Enter]", "Start quest!"), ("[Esc]", "Back")],
        BodyView::ActiveQuest(_) => vec![
            ("[Enter]", "Report completion"),
            ("[C]", "Photo"),
            ("[V]", "Memo"),
        ],
        BodyView::Report { entries, .. } if !entries.is_empty() => vec![("[↑↓]", "Scroll")],
        BodyView::Report { .. } | BodyView::Profile(_) => Vec::new(),
    };
    controls.push(("[M]", "Music"));
    controls.push(("[Q]", "Quit"));
    controls
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    #[test]
    fn test_board_projection() {
        let state = AppState::new();
        let view = project(&state, false);
        let BodyView::QuestBoard(cards) = &view.body else {
            panic!("expected quest board, got {:?}", view.body);
        };
        assert_eq!(cards.len(), 3);
        assert!(cards[0].selected);
        assert!(!cards[1].selected);
        assert_eq!(cards[0].reward_text, "Reward: 100 G");
        assert_eq!(cards[0].rank, "D");
        assert_eq!(view.header.level_text, "Lv.1");
        assert_eq!(view.header.gold_text, "0 G");
        assert_eq!(view.header.music_icon, "🔇");
        assert!(view.dialog.is_none());
    }

    #[test]
    fn test_nav_marks_current_tab() {
        let mut state = AppState::new();
        state.request_navigation(Screen::Report);
        let nav = project(&state, true).nav;
        let active: Vec<&str> = nav.iter().filter(|t| t.active).map(|t| t.label).collect();
        assert_eq!(active, vec!["Adventure Log"]);
    }

    #[test]
    fn test_missing_image_uses_placeholder() {
        assert_eq!(ImageView::for_reference(None), ImageView::Placeholder);
        assert_eq!(ImageView::for_reference(Some("")), ImageView::Placeholder);
        assert_eq!(ImageView::Placeholder.caption(), "NO IMAGE");
        assert_eq!(
            ImageView::for_reference(Some("assets/quest_park.png")).caption(),
            "quest_park.png"
        );
    }

    #[test]
    fn test_detail_and_active_projection() {
        let mut state = AppState::new();
        state.open_selected_quest().unwrap();
        let view = project(&state, false);
        let BodyView::QuestDetail(detail) = &view.body else {
            panic!("expected detail");
        };
        assert_eq!(detail.title, "Clean Up the Park");
        assert_eq!(detail.party.len(), 2);

        state.start_quest(Local::now()).unwrap();
        let view = project(&state, false);
        let BodyView::ActiveQuest(active) = &view.body else {
            panic!("expected active quest");
        };
        assert_eq!(active.title, "Clean Up the Park");
        assert_eq!(active.field_notes_text, "Photos: 0   Memos: 0");
    }

    #[test]
    fn test_empty_report() {
        let mut state = AppState::new();
        state.request_navigation(Screen::Report);
        assert_eq!(
            project(&state, false).body,
            BodyView::Report {
                entries: Vec::new(),
                empty_text: Some("No records yet."),
                scroll_text: None,
            }
        );
    }

    #[test]
    fn test_report_projection_follows_scroll() {
        let mut state = AppState::new();
        for _ in 0..2 {
            state.cursor_down();
        }
        for _ in 0..3 {
            state.open_selected_quest().unwrap();
            state.start_quest(Local::now()).unwrap();
            state.finish_quest(Local::now()).unwrap();
            state.dismiss_notice();
            state.request_navigation(Screen::Home);
            state.cursor_up();
        }
        state.request_navigation(Screen::Report);
        state.scroll_log_down();
        state.scroll_log_down();

        let BodyView::Report {
            entries,
            scroll_text,
            ..
        } = project(&state, false).body
        else {
            panic!("expected report");
        };
        let titles: Vec<&str> = entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["A Letter to Grandpa"]);
        assert_eq!(
            scroll_text.as_deref(),
            Some("▲ 2 newer report(s) above")
        );
    }

    #[test]
    fn test_profile_projection() {
        let mut state = AppState::new();
        state.request_navigation(Screen::Profile);
        let BodyView::Profile(profile) = project(&state, false).body else {
            panic!("expected profile");
        };
        assert_eq!(profile.hero_text, "Hero (Lv.1)");
        assert_eq!(profile.exp_text, "Current EXP: 0 / 100");
        assert_eq!(profile.exp_percent, 0);
        assert_eq!(profile.gold_text, "Gold: 0 G");
        assert_eq!(profile.cleared_text, "Quests cleared: 0");
    }

    #[test]
    fn test_confirmation_dialog_projection() {
        let mut state = AppState::new();
        state.open_selected_quest().unwrap();
        state.start_quest(Local::now()).unwrap();
        state.request_navigation(Screen::Profile);
        let dialog = project(&state, false).dialog.expect("dialog");
        assert_eq!(dialog.tone, DialogTone::Warning);
        assert_eq!(dialog.controls[0], ("[Y]", "Abandon"));
    }

    #[test]
    fn test_projection_is_repeatable() {
        let mut state = AppState::new();
        state.cursor_down();
        assert_eq!(project(&state, true), project(&state, true));
    }
}
