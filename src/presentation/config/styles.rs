use std::{collections::HashMap, str::FromStr};

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Error as _, Deserialize, Deserializer};

/// Named theme tokens, e.g. `"phosphor": "bold #00ff41 on #0a0f0a"`
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl Styles {
    /// Style for a token, falling back to `fallback` when the config does not define it
    pub fn get_or(&self, token: &str, fallback: Style) -> Style {
        self.0.get(token).copied().unwrap_or(fallback)
    }
}

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(token, raw)| {
                parse_style(&raw)
                    .map(|style| (token, style))
                    .map_err(D::Error::custom)
            })
            .collect::<Result<_, _>>()?;

        Ok(Styles(styles))
    }
}

/// Parses `"[modifiers] [fg] [on bg]"`
pub fn parse_style(line: &str) -> Result<Style, String> {
    let (foreground, background) = match line.split_once(" on ") {
        Some((fg, bg)) => (fg, Some(bg.trim())),
        None => (line, None),
    };

    let mut style = Style::default();
    for word in foreground.split_whitespace() {
        match parse_modifier(word) {
            Some(modifier) => style = style.add_modifier(modifier),
            None => style = style.fg(parse_color(word)?),
        }
    }
    if let Some(background) = background {
        style = style.bg(parse_color(background)?);
    }
    Ok(style)
}

fn parse_modifier(word: &str) -> Option<Modifier> {
    match word.to_ascii_lowercase().as_str() {
        "bold" => Some(Modifier::BOLD),
        "dim" => Some(Modifier::DIM),
        "italic" => Some(Modifier::ITALIC),
        "underline" | "underlined" => Some(Modifier::UNDERLINED),
        "blink" => Some(Modifier::SLOW_BLINK),
        "reverse" | "reversed" => Some(Modifier::REVERSED),
        _ => None,
    }
}

fn parse_color(s: &str) -> Result<Color, String> {
    Color::from_str(s).map_err(|_| format!("Unable to parse color `{s}`"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_fg_only() -> Result<(), String> {
        assert_eq!(
            parse_style("#00ff41")?,
            Style::default().fg(Color::Rgb(0x00, 0xff, 0x41))
        );
        Ok(())
    }

    #[test]
    fn test_parse_modifier_fg_bg() -> Result<(), String> {
        assert_eq!(
            parse_style("bold #00ff41 on #0a0f0a")?,
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Rgb(0x00, 0xff, 0x41))
                .bg(Color::Rgb(0x0a, 0x0f, 0x0a))
        );
        Ok(())
    }

    #[test]
    fn test_parse_named_colors() -> Result<(), String> {
        assert_eq!(
            parse_style("red on black")?,
            Style::default().fg(Color::Red).bg(Color::Black)
        );
        Ok(())
    }

    #[test]
    fn test_parse_invalid_color() {
        assert!(parse_style("#zzzzzz").is_err());
    }

    #[test]
    fn test_deserialize_styles() -> Result<(), json5::Error> {
        let styles: Styles = json5::from_str(r#"{ "alert": "bold #ff0000" }"#)?;
        assert_eq!(
            styles.get_or("alert", Style::default()),
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Rgb(0xff, 0, 0))
        );
        assert_eq!(
            styles.get_or("missing", Style::default().fg(Color::Blue)),
            Style::default().fg(Color::Blue)
        );
        Ok(())
    }
}
