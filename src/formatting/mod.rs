pub mod numbers;

use colored::*;
use std::env;
use std::io::IsTerminal;

pub use numbers::{format_currency, format_number, format_percent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when stdout is a terminal
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmojiMode {
    /// Emoji when the terminal supports color
    Auto,
    Always,
    Never,
}

impl EmojiMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    pub fn should_use_emoji(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_emoji_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
    pub emoji: EmojiMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            emoji: EmojiMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn new(color: ColorMode, emoji: EmojiMode) -> Self {
        Self { color, emoji }
    }

    pub fn from_env() -> Self {
        let mut config = Self::default();

        // Check NO_COLOR environment variable (per no-color.org standard)
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        // Check CLICOLOR environment variable
        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }

        // Check CLICOLOR_FORCE environment variable
        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }

    /// Create a plain output configuration (ASCII-only, no colors, no emoji)
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
            emoji: EmojiMode::Never,
        }
    }
}

/// Styling hooks used by the terminal renderer.
pub trait OutputFormatter {
    /// Option B accents and the boost headline.
    fn new_way(&self, text: &str) -> String;
    fn warning(&self, text: &str) -> String;
    fn heading(&self, text: &str) -> String;
    fn emoji(&self, emoji: &str, fallback: &str) -> String;
    fn bold(&self, text: &str) -> String;
    fn dim(&self, text: &str) -> String;
    /// Whether non-ASCII glyphs (emoji, infinity sign) may be printed.
    fn unicode(&self) -> bool;
}

pub struct ColoredFormatter {
    config: FormattingConfig,
    color: bool,
}

impl ColoredFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        let color = config.color.should_use_color();
        colored::control::set_override(color);
        Self { config, color }
    }

    fn styled(&self, text: &str, style: impl FnOnce(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn new_way(&self, text: &str) -> String {
        self.styled(text, |t| t.green().bold())
    }

    fn warning(&self, text: &str) -> String {
        self.styled(text, |t| t.yellow())
    }

    fn heading(&self, text: &str) -> String {
        self.styled(text, |t| t.bright_white().bold().underline())
    }

    fn emoji(&self, emoji: &str, fallback: &str) -> String {
        if self.unicode() {
            emoji.to_string()
        } else {
            fallback.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        self.styled(text, |t| t.bold())
    }

    fn dim(&self, text: &str) -> String {
        self.styled(text, |t| t.dimmed())
    }

    fn unicode(&self) -> bool {
        self.config.emoji.should_use_emoji()
    }
}

/// No color, no emoji, ASCII only.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn new_way(&self, text: &str) -> String {
        text.to_string()
    }

    fn warning(&self, text: &str) -> String {
        text.to_string()
    }

    fn heading(&self, text: &str) -> String {
        text.to_string()
    }

    fn emoji(&self, _emoji: &str, fallback: &str) -> String {
        fallback.to_string()
    }

    fn bold(&self, text: &str) -> String {
        text.to_string()
    }

    fn dim(&self, text: &str) -> String {
        text.to_string()
    }

    fn unicode(&self) -> bool {
        false
    }
}

/// Pick the formatter matching a configuration.
pub fn formatter_for(config: FormattingConfig) -> Box<dyn OutputFormatter> {
    if config == FormattingConfig::plain() {
        Box::new(PlainFormatter)
    } else {
        Box::new(ColoredFormatter::new(config))
    }
}

fn detect_color_support() -> bool {
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    std::io::stdout().is_terminal()
}

fn detect_emoji_support() -> bool {
    detect_color_support()
}

/// ASCII stand-ins for the emoji markers used in the result cards.
pub fn emoji_or_fallback(emoji: &str) -> (&str, &str) {
    match emoji {
        "💰" => ("💰", "[$]"),
        "📊" => ("📊", "[CPL]"),
        "📋" => ("📋", "[DEALS]"),
        "🏆" => ("🏆", "[GCI]"),
        "📈" => ("📈", "[ROI]"),
        "🚨" => ("🚨", "[!]"),
        "✅" => ("✅", "[OK]"),
        "🔒" => ("🔒", ">>"),
        "⚠" => ("⚠", "[WARN]"),
        _ => (emoji, ""),
    }
}
