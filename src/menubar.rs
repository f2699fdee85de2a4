use crate::models::{NowPlaying, PlayPauseAction};
use crate::services::formatter::{format_clock, remaining};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/"]
struct Assets;

const ICON_PATH: &str = "kodi.svg";
const SEPARATOR: &str = "---";

/// Base64 template image for the menu-bar header.
pub fn icon() -> Option<String> {
    Assets::get(ICON_PATH).map(|file| STANDARD.encode(file.data))
}

/// Renders playback state as xbar markup.
pub struct MenuBar<'a> {
    url: &'a str,
    executable: &'a str,
    icon: Option<String>,
}

impl<'a> MenuBar<'a> {
    pub fn new(url: &'a str, executable: &'a str, icon: Option<String>) -> Self {
        Self {
            url,
            executable,
            icon,
        }
    }

    pub fn render(&self, now_playing: Option<&NowPlaying>) -> Vec<String> {
        let mut lines = vec![self.header(now_playing), SEPARATOR.to_string()];

        match now_playing {
            Some(np) => {
                let title = np.title.as_deref().unwrap_or("Unknown");
                lines.push(format!("{} | href={}", strip_pipes(title), self.url));
                lines.push(format!(
                    "{} / {}",
                    format_clock(np.elapsed),
                    format_clock(np.total)
                ));
                lines.push(self.control(np));
            }
            None => lines.push(format!("Inactive | href={}", self.url)),
        }

        lines
    }

    fn header(&self, now_playing: Option<&NowPlaying>) -> String {
        let text = now_playing
            .map(|np| {
                format!(
                    "{} {} / -{}",
                    if np.playing { "▶" } else { "⏸" },
                    format_clock(np.elapsed),
                    format_clock(remaining(np.elapsed, np.total))
                )
            })
            .unwrap_or_default();

        match &self.icon {
            Some(icon) if text.is_empty() => format!("| templateImage={}", icon),
            Some(icon) => format!("{} | templateImage={}", text, icon),
            None if text.is_empty() => "Kodi".to_string(),
            None => text,
        }
    }

    fn control(&self, np: &NowPlaying) -> String {
        let (label, action) = if np.playing {
            ("Pause", PlayPauseAction::Pause)
        } else {
            ("Play", PlayPauseAction::Play)
        };

        let player_id = np.player_id.to_string();
        let args = ["play-pause", "--player", &player_id, action.as_arg()];

        let mut line = format!("{} | shell={}", label, quote_param(self.executable));
        for (i, arg) in args.iter().enumerate() {
            line.push_str(&format!(" param{}={}", i + 1, quote_param(arg)));
        }
        line.push_str(" terminal=false refresh=true");
        line
    }
}

fn strip_pipes(text: &str) -> String {
    text.replace('|', "")
}

/// Quotes an xbar parameter value when it would otherwise be split.
fn quote_param(value: &str) -> String {
    let needs_quotes = value.is_empty()
        || value
            .chars()
            .any(|c| c.is_whitespace() || c == '"' || c == '\\' || c == '|');

    if !needs_quotes {
        return value.to_string();
    }

    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn playing(title: &str, playing: bool) -> NowPlaying {
        NowPlaying {
            player_id: 1,
            title: Some(title.to_string()),
            playing,
            elapsed: Duration::from_secs(630),
            total: Duration::from_secs(3723),
        }
    }

    #[test]
    fn test_inactive() {
        let menu = MenuBar::new("http://kodi.local:8080/", "/usr/bin/kodi-menubar", Some("ICON".into()));
        assert_eq!(
            menu.render(None),
            vec![
                "| templateImage=ICON",
                "---",
                "Inactive | href=http://kodi.local:8080/",
            ]
        );
    }

    #[test]
    fn test_playing() {
        let menu = MenuBar::new("http://kodi.local:8080/", "/usr/bin/kodi-menubar", Some("ICON".into()));
        let lines = menu.render(Some(&playing("Title (1999)", true)));

        assert_eq!(
            lines,
            vec![
                "▶ 0:10:30 / -0:51:33 | templateImage=ICON",
                "---",
                "Title (1999) | href=http://kodi.local:8080/",
                "0:10:30 / 1:02:03",
                "Pause | shell=/usr/bin/kodi-menubar param1=play-pause param2=--player param3=1 param4=pause terminal=false refresh=true",
            ]
        );
    }

    #[test]
    fn test_paused_offers_play() {
        let menu = MenuBar::new("http://kodi.local:8080/", "/opt/My Apps/kodi-menubar", None);
        let lines = menu.render(Some(&playing("Title", false)));

        assert!(lines[0].starts_with("⏸ "));
        assert_eq!(
            lines[4],
            "Play | shell=\"/opt/My Apps/kodi-menubar\" param1=play-pause param2=--player param3=1 param4=play terminal=false refresh=true"
        );
    }

    #[test]
    fn test_title_pipes_stripped() {
        let menu = MenuBar::new("http://kodi.local:8080/", "kodi-menubar", None);
        let lines = menu.render(Some(&playing("A | B", true)));
        assert_eq!(lines[2], "A  B | href=http://kodi.local:8080/");
    }

    #[test]
    fn test_quote_param() {
        assert_eq!(quote_param("plain"), "plain");
        assert_eq!(quote_param("two words"), "\"two words\"");
        assert_eq!(quote_param("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(quote_param(""), "\"\"");
    }

    #[test]
    fn test_icon_embedded() {
        let icon = icon().unwrap();
        let svg = STANDARD.decode(icon).unwrap();
        assert!(String::from_utf8(svg).unwrap().contains("<svg"));
    }
}
