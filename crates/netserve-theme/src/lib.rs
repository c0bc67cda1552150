use ratatui::{
    prelude::*,
    style::palette::tailwind,
};

/// Console theme - every color and prebuilt style the views draw with
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg_primary: Color,
    pub bg_sidebar: Color,
    pub bg_panel: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,
    /// High-contrast foreground for the focused/active element
    pub active_fg: Color,

    // Status colors
    pub status_success: Color,
    pub status_error: Color,
    pub status_warning: Color,
    pub status_info: Color,
    pub status_running: Color,

    // Selection colors
    pub selected_bg: Color,
    pub selected_fg: Color,

    // Chart colors
    pub chart_bar: Color,
    pub chart_value: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default), modelled after the NetServe web dashboard
    pub fn dark() -> Self {
        Self {
            bg_primary: tailwind::SLATE.c950,
            bg_sidebar: tailwind::SLATE.c900,
            bg_panel: tailwind::SLATE.c800,

            text_primary: tailwind::SLATE.c100,
            text_secondary: tailwind::SLATE.c300,
            text_muted: tailwind::SLATE.c400,

            accent_primary: tailwind::EMERALD.c400,
            accent_secondary: tailwind::EMERALD.c600,
            active_fg: tailwind::AMBER.c300,

            status_success: tailwind::GREEN.c400,
            status_error: tailwind::RED.c400,
            status_warning: tailwind::YELLOW.c400,
            status_info: tailwind::SKY.c400,
            status_running: tailwind::YELLOW.c300,

            selected_bg: tailwind::SLATE.c700,
            selected_fg: Color::White,

            chart_bar: tailwind::EMERALD.c500,
            chart_value: tailwind::SLATE.c950,
        }
    }

    // Prebuilt styles for common use cases

    /// Style for panel backgrounds (palette, login card, pages)
    pub fn panel_background(&self) -> Style {
        Style::default().bg(self.bg_panel)
    }

    pub fn sidebar_background(&self) -> Style {
        Style::default().bg(self.bg_sidebar)
    }

    /// Style for panel borders
    pub fn panel_border(&self) -> Style {
        Style::default().fg(self.accent_secondary)
    }

    /// Style for panel titles
    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key hints (e.g., "Ctrl+K" in "Ctrl+K palette")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for table headers
    pub fn table_header(&self) -> Style {
        Style::default()
            .fg(self.text_secondary)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Style for the highlighted row/entry
    pub fn selection(&self) -> Style {
        Style::default()
            .fg(self.active_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selection_bg(&self) -> Color {
        self.selected_bg
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent_primary)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.status_error)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success(&self) -> Style {
        Style::default()
            .fg(self.status_success)
            .add_modifier(Modifier::BOLD)
    }

    pub fn warning(&self) -> Style {
        Style::default()
            .fg(self.status_warning)
            .add_modifier(Modifier::BOLD)
    }
}
