use std::collections::HashMap;

pub struct Theme {
    pub colors: HashMap<&'static str, (&'static str, &'static str)>, // (bg, fg)
}

impl Theme {
    pub fn get_colors(&self, segment: &str) -> Option<(&'static str, &'static str)> {
        self.colors.get(segment).copied()
    }

    fn from_pairs(pairs: [(&'static str, (&'static str, &'static str)); 3]) -> Self {
        Self {
            colors: pairs.into_iter().collect(),
        }
    }
}

pub fn get_theme(name: &str) -> Theme {
    match name {
        "dark" => dark_theme(),
        "light" => light_theme(),
        "nord" => nord_theme(),
        "tokyo-night" => tokyo_night_theme(),
        "rose-pine" => rose_pine_theme(),
        _ => dark_theme(), // fallback
    }
}

fn dark_theme() -> Theme {
    Theme::from_pairs([
        ("directory", ("#2d3748", "#e2e8f0")),
        ("git", ("#38a169", "#f7fafc")),
        ("az", ("#3182ce", "#f7fafc")),
    ])
}

fn light_theme() -> Theme {
    Theme::from_pairs([
        ("directory", ("#f7fafc", "#2d3748")),
        ("git", ("#c6f6d5", "#1a202c")),
        ("az", ("#bee3f8", "#1a202c")),
    ])
}

fn nord_theme() -> Theme {
    Theme::from_pairs([
        ("directory", ("#2e3440", "#d8dee9")),
        ("git", ("#5e81ac", "#eceff4")),
        ("az", ("#81a1c1", "#eceff4")),
    ])
}

fn tokyo_night_theme() -> Theme {
    Theme::from_pairs([
        ("directory", ("#1a1b26", "#c0caf5")),
        ("git", ("#9ece6a", "#1a1b26")),
        ("az", ("#7aa2f7", "#1a1b26")),
    ])
}

fn rose_pine_theme() -> Theme {
    Theme::from_pairs([
        ("directory", ("#191724", "#e0def4")),
        ("git", ("#31748f", "#e0def4")),
        ("az", ("#c4a7e7", "#191724")),
    ])
}

/// Parse a `#rrggbb` color; anything else renders as white.
pub fn parse_color(color: &str) -> (u8, u8, u8) {
    let hex = match color.strip_prefix('#') {
        Some(hex) if hex.len() == 6 && hex.is_ascii() => hex,
        _ => return (255, 255, 255),
    };

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
    (channel(0..2), channel(2..4), channel(4..6))
}

/// Closest color in the xterm 256-color palette (6x6x6 cube + grayscale ramp).
pub fn rgb_to_8bit((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r >= 248 {
            231
        } else {
            ((r - 8) / 10) + 232
        }
    } else {
        let scale = |c: u8| (c as u16 * 5 / 255) as u8;
        16 + 36 * scale(r) + 6 * scale(g) + scale(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_theme_falls_back_to_dark() {
        let theme = get_theme("does-not-exist");
        assert_eq!(theme.get_colors("az"), Some(("#3182ce", "#f7fafc")));
    }

    #[test]
    fn every_theme_colors_every_segment() {
        for name in ["dark", "light", "nord", "tokyo-night", "rose-pine"] {
            let theme = get_theme(name);
            for segment in ["directory", "git", "az"] {
                assert!(theme.get_colors(segment).is_some(), "{name} lacks {segment}");
            }
        }
    }

    #[test]
    fn parses_hex_colors() {
        assert_eq!(parse_color("#3182ce"), (0x31, 0x82, 0xce));
        assert_eq!(parse_color("3182ce"), (255, 255, 255));
        assert_eq!(parse_color("#zzzzzz"), (255, 255, 255));
    }

    #[test]
    fn maps_to_256_palette() {
        assert_eq!(rgb_to_8bit((0, 0, 0)), 16);
        assert_eq!(rgb_to_8bit((255, 255, 255)), 231);
        assert_eq!(rgb_to_8bit((255, 0, 0)), 196);
        assert_eq!(rgb_to_8bit((128, 128, 128)), 244);
        assert_eq!(rgb_to_8bit((238, 238, 238)), 255);
        assert_eq!(rgb_to_8bit((248, 248, 248)), 231);
    }
}
