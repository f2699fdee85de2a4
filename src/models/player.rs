use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ActivePlayer {
    #[serde(rename = "playerid")]
    pub player_id: i64,
    #[serde(rename = "type", default)]
    pub media_type: String,
    #[serde(rename = "playertype", default)]
    pub player_type: Option<String>,
}

/// The currently playing item as returned by `Player.GetItem`.
///
/// Kodi only includes the requested properties that apply to the item, so
/// everything beyond `type` is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct PlayerItem {
    #[serde(rename = "type", default)]
    pub item_type: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(rename = "showtitle", default)]
    pub show_title: Option<String>,
    #[serde(default)]
    pub season: Option<i64>,
    #[serde(default)]
    pub episode: Option<i64>,
    #[serde(default)]
    pub year: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetItemResult {
    pub item: PlayerItem,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq)]
pub struct PlayerTime {
    #[serde(default)]
    pub hours: u64,
    #[serde(default)]
    pub minutes: u64,
    #[serde(default)]
    pub seconds: u64,
    #[serde(default)]
    pub milliseconds: u64,
}

impl PlayerTime {
    /// Whole seconds; milliseconds are dropped.
    pub fn to_duration(self) -> Duration {
        let millis =
            ((self.hours * 60 + self.minutes) * 60 + self.seconds) * 1000 + self.milliseconds;
        Duration::from_secs(millis / 1000)
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq)]
pub struct PlaybackProperties {
    #[serde(default)]
    pub speed: i64,
    #[serde(default)]
    pub time: PlayerTime,
    #[serde(rename = "totaltime", default)]
    pub total_time: PlayerTime,
}

impl PlaybackProperties {
    pub fn is_playing(&self) -> bool {
        self.speed != 0
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlayPauseResult {
    #[serde(default)]
    pub speed: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum PlayPauseAction {
    Play,
    Pause,
    #[default]
    Toggle,
}

impl PlayPauseAction {
    /// Value of the `play` parameter of `Player.PlayPause`.
    pub fn to_param(self) -> serde_json::Value {
        match self {
            PlayPauseAction::Play => serde_json::Value::Bool(true),
            PlayPauseAction::Pause => serde_json::Value::Bool(false),
            PlayPauseAction::Toggle => serde_json::Value::String("toggle".to_string()),
        }
    }

    pub fn as_arg(self) -> &'static str {
        match self {
            PlayPauseAction::Play => "play",
            PlayPauseAction::Pause => "pause",
            PlayPauseAction::Toggle => "toggle",
        }
    }
}

/// Snapshot of the first active player.
#[derive(Debug, Clone, PartialEq)]
pub struct NowPlaying {
    pub player_id: i64,
    pub title: Option<String>,
    pub playing: bool,
    pub elapsed: Duration,
    pub total: Duration,
}
