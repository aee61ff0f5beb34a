use crate::config::{Config, SegmentConfig};
use crate::environment::Environment;
use crate::segments::{AzSegment, DirectorySegment, GitSegment, Segment};
use crate::themes::{get_theme, parse_color, rgb_to_8bit, Theme};
use crate::utils::debug_with_context;
use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Off,
    Ansi256,
    TrueColor,
}

impl ColorMode {
    /// Decide how to color from `NO_COLOR`, `TERM` and `COLORTERM`.
    pub fn detect(env: &dyn Environment) -> Self {
        if env.getenv_non_empty("NO_COLOR").is_some() {
            return ColorMode::Off;
        }

        let term = env.getenv("TERM").unwrap_or_default();
        if term.is_empty() || term == "dumb" {
            return ColorMode::Off;
        }

        let colorterm = env.getenv("COLORTERM").unwrap_or_default();
        if colorterm.contains("truecolor")
            || colorterm.contains("24bit")
            || term == "xterm-kitty"
            || term == "alacritty"
        {
            ColorMode::TrueColor
        } else {
            ColorMode::Ansi256
        }
    }
}

/// Build the segments enabled in `config`, in display order.
pub fn build_segments<'a>(
    config: &'a Config,
    env: &'a dyn Environment,
    fallback: &'a SegmentConfig,
) -> Vec<Box<dyn Segment + 'a>> {
    let mut segments: Vec<Box<dyn Segment + 'a>> = Vec::new();

    if let Some(c) = active(&config.segments.directory, fallback) {
        segments.push(Box::new(DirectorySegment::new(env, &c.properties)));
    }
    if let Some(c) = active(&config.segments.git, fallback) {
        segments.push(Box::new(GitSegment::new(env, &c.properties)));
    }
    if let Some(c) = active(&config.segments.az, fallback) {
        segments.push(Box::new(AzSegment::new(env, &c.properties)));
    }

    segments
}

/// Render one prompt line.
pub fn generate_prompt(config: &Config, env: &dyn Environment) -> String {
    let fallback = SegmentConfig::default();
    let theme = get_theme(&config.theme);
    let colors = ColorMode::detect(env);

    let rendered: Vec<String> = build_segments(config, env, &fallback)
        .iter()
        .filter(|segment| {
            let enabled = segment.enabled();
            if !enabled {
                debug_with_context("prompt", &format!("Skipping {} segment", segment.name()));
            }
            enabled
        })
        .map(|segment| {
            let text = format!(" {} ", segment.string());
            apply_theme_colors(&text, segment.name(), &theme, colors)
        })
        .collect();

    let separator = if config.style == "powerline" { " ⮀ " } else { "  " };
    rendered.join(separator)
}

/// A segment missing from the config is shown with default properties.
fn active<'a>(
    segment: &'a Option<SegmentConfig>,
    fallback: &'a SegmentConfig,
) -> Option<&'a SegmentConfig> {
    match segment {
        Some(config) if !config.enabled => None,
        Some(config) => Some(config),
        None => Some(fallback),
    }
}

pub fn apply_theme_colors(text: &str, segment: &str, theme: &Theme, mode: ColorMode) -> String {
    let Some((bg, fg)) = theme.get_colors(segment) else {
        return text.to_string();
    };
    let (bg_r, bg_g, bg_b) = parse_color(bg);
    let (fg_r, fg_g, fg_b) = parse_color(fg);

    match mode {
        ColorMode::Off => text.to_string(),
        ColorMode::TrueColor => text
            .on_truecolor(bg_r, bg_g, bg_b)
            .truecolor(fg_r, fg_g, fg_b)
            .to_string(),
        ColorMode::Ansi256 => format!(
            "\x1b[48;5;{}m\x1b[38;5;{}m{}\x1b[0m",
            rgb_to_8bit((bg_r, bg_g, bg_b)),
            rgb_to_8bit((fg_r, fg_g, fg_b)),
            text
        ),
    }
}
