//! Color palettes for the quiz TUI

use ratatui::prelude::*;

use crate::config::ThemeChoice;

/// Complete color palette for the TUI
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeColors {
    // Progress gauge
    pub gauge_filled: Color,
    pub gauge_empty: Color,

    // Question and options
    pub prompt_style: Style,
    pub option_key: Color,
    pub option_text: Color,
    pub option_selected: Style,
    pub option_answered: Color,
    pub weighted_marker: Color,

    // General colors
    pub muted: Color,
    pub title_color: Color,

    // Status bar colors
    pub status_bar_bg: Color,
    pub status_key_color: Color,
    pub flash_info: Color,

    // Popup overlay colors
    pub popup_border: Color,
    pub popup_title: Style,
    pub popup_bg: Color,
}

impl ThemeColors {
    /// Dark theme palette
    pub fn dark() -> Self {
        Self {
            gauge_filled: Color::Cyan,
            gauge_empty: Color::Indexed(236),
            prompt_style: Style::new().fg(Color::White).bold(),
            option_key: Color::Cyan,
            option_text: Color::Gray,
            option_selected: Style::new().fg(Color::Black).bg(Color::Cyan).bold(),
            option_answered: Color::Green,
            weighted_marker: Color::Yellow,
            muted: Color::Gray,
            title_color: Color::Cyan,
            status_bar_bg: Color::Indexed(236),
            status_key_color: Color::Cyan,
            flash_info: Color::Yellow,
            popup_border: Color::Cyan,
            popup_title: Style::new().fg(Color::Cyan).bold(),
            popup_bg: Color::Indexed(234),
        }
    }

    /// Light theme palette, tuned for bright backgrounds
    pub fn light() -> Self {
        Self {
            gauge_filled: Color::Blue,
            gauge_empty: Color::Indexed(252),
            prompt_style: Style::new().fg(Color::Black).bold(),
            option_key: Color::Blue,
            option_text: Color::Indexed(238),
            option_selected: Style::new().fg(Color::White).bg(Color::Blue).bold(),
            option_answered: Color::Indexed(28),
            weighted_marker: Color::Indexed(130),
            muted: Color::Indexed(243),
            title_color: Color::Blue,
            status_bar_bg: Color::Indexed(253),
            status_key_color: Color::Blue,
            flash_info: Color::Indexed(130),
            popup_border: Color::Blue,
            popup_title: Style::new().fg(Color::Blue).bold(),
            popup_bg: Color::Indexed(255),
        }
    }
}

/// Background luma above which the terminal counts as light
const LIGHT_LUMA_THRESHOLD: f32 = 0.6;

/// Pick a palette. `Auto` asks the terminal for its background and falls
/// back to dark when it can't tell.
pub fn resolve_theme(choice: ThemeChoice) -> ThemeColors {
    match choice {
        ThemeChoice::Dark => ThemeColors::dark(),
        ThemeChoice::Light => ThemeColors::light(),
        ThemeChoice::Auto => match terminal_light::luma() {
            Ok(luma) if luma > LIGHT_LUMA_THRESHOLD => ThemeColors::light(),
            Ok(_) => ThemeColors::dark(),
            Err(e) => {
                tracing::debug!(error = %e, "could not detect terminal background");
                ThemeColors::dark()
            }
        },
    }
}
