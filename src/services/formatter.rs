use crate::models::PlayerItem;
use std::time::Duration;

/// Human-readable title for the playing item.
///
/// Episodes render as `Show S01E02: Title` and movies as `Title (1999)`.
/// Anything else falls back to the item's title, then its label.
pub fn format_title(item: &PlayerItem) -> Option<String> {
    let title = non_empty(item.title.as_deref());

    match item.item_type.as_str() {
        "episode" => {
            if let (Some(show), Some(season), Some(episode)) =
                (non_empty(item.show_title.as_deref()), item.season, item.episode)
            {
                // Kodi reports -1 for unknown season/episode numbers
                if season >= 0 && episode >= 0 {
                    return Some(format!(
                        "{} S{:02}E{:02}: {}",
                        show,
                        season,
                        episode,
                        title.unwrap_or_default()
                    ));
                }
            }
        }
        "movie" => {
            if let (Some(title), Some(year)) = (title, item.year.filter(|y| *y > 0)) {
                return Some(format!("{} ({})", title, year));
            }
        }
        _ => {}
    }

    title
        .or_else(|| non_empty(item.label.as_deref()))
        .map(str::to_string)
}

/// `H:MM:SS`, hours unpadded.
pub fn format_clock(duration: Duration) -> String {
    let total = duration.as_secs();
    format!("{}:{:02}:{:02}", total / 3600, (total / 60) % 60, total % 60)
}

pub fn remaining(elapsed: Duration, total: Duration) -> Duration {
    total.saturating_sub(elapsed)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
