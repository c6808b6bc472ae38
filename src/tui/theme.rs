//! Colours and styles shared by the scanner views.

use crate::types::Tone;
use ratatui::style::{Color, Modifier, Style};

/// Palette for the scanner screens.
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub favorable: Color,
    pub warning: Color,
    pub danger: Color,
    pub neutral: Color,
    pub muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            secondary: Color::Magenta,
            favorable: Color::Green,
            warning: Color::Yellow,
            danger: Color::Red,
            neutral: Color::White,
            muted: Color::DarkGray,
        }
    }
}

impl Theme {
    /// Block titles.
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Column headers.
    pub fn header(&self) -> Style {
        Style::default()
            .fg(self.secondary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for a classification tone. Warning uses the danger colour.
    pub fn tone(&self, tone: Tone) -> Style {
        match tone {
            Tone::Favorable => Style::default().fg(self.favorable),
            Tone::Warning => Style::default().fg(self.danger),
            Tone::Neutral => Style::default().fg(self.neutral),
        }
    }

    /// Green for gains, red for losses.
    pub fn change(&self, value: f64) -> Style {
        if value >= 0.0 {
            Style::default().fg(self.favorable)
        } else {
            Style::default().fg(self.danger)
        }
    }

    pub fn neutral(&self) -> Style {
        Style::default().fg(self.neutral)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.danger)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Block borders.
    pub fn border(&self) -> Style {
        Style::default().fg(self.primary)
    }

    /// Selected route tab.
    pub fn tab_active(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_inactive(&self) -> Style {
        Style::default().fg(self.muted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_colours() {
        let theme = Theme::default();
        assert_eq!(theme.tone(Tone::Favorable).fg, Some(Color::Green));
        assert_eq!(theme.tone(Tone::Warning).fg, Some(Color::Red));
        assert_eq!(theme.tone(Tone::Neutral).fg, Some(Color::White));
    }

    #[test]
    fn test_change_sign() {
        let theme = Theme::default();
        assert_eq!(theme.change(0.5).fg, Some(Color::Green));
        assert_eq!(theme.change(0.0).fg, Some(Color::Green));
        assert_eq!(theme.change(-0.1).fg, Some(Color::Red));
    }
}
