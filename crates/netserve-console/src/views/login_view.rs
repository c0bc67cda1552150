use crate::actions::{Action, GlobalAction, LoginAction, NavigationAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::state::{AppState, LoginField, LoginFormState};
use crate::views::{View, ViewId};
use figlet_rs::FIGfont;
use netserve_theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Login screen - the only view before an operator session exists
#[derive(Debug, Clone)]
pub struct LoginView;

impl LoginView {
    pub fn new() -> Self {
        Self
    }
}

impl View for LoginView {
    fn view_id(&self) -> ViewId {
        ViewId::Login
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render(state, area, f);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::TEXT_INPUT
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_navigation(&self, nav: NavigationAction) -> Option<Action> {
        let action = match nav {
            NavigationAction::Next => LoginAction::NextField,
            NavigationAction::Previous => LoginAction::PrevField,
        };
        Some(Action::Login(action))
    }

    fn translate_text_input(&self, input: TextInputAction) -> Option<Action> {
        let action = match input {
            TextInputAction::Char(c) => LoginAction::Char(c),
            TextInputAction::Backspace => LoginAction::Backspace,
            TextInputAction::ClearLine | TextInputAction::Escape => LoginAction::ClearField,
            TextInputAction::Confirm => LoginAction::Submit,
        };
        Some(Action::Login(action))
    }

    fn accepts_action(&self, action: &Action) -> bool {
        match action {
            // No overlays before sign-in
            Action::Global(GlobalAction::PushView(_)) => false,
            Action::Global(_) | Action::Login(_) | Action::Navigate(_) | Action::TextInput(_) => {
                true
            }
            _ => false,
        }
    }
}

fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let form = &state.login;

    f.render_widget(Block::default().style(theme.panel_background()), area);

    let banner = banner_lines(&state.config.company_name, theme);
    let banner_height = banner.len() as u16;

    let [_, banner_area, _, form_area, _] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(banner_height),
        Constraint::Length(1),
        Constraint::Length(9),
        Constraint::Min(0),
    ])
    .areas(area);

    f.render_widget(
        Paragraph::new(banner).alignment(Alignment::Center),
        banner_area,
    );

    let form_width = (area.width * 50 / 100).clamp(44, 64).min(area.width);
    let form_area = Rect {
        x: area.x + area.width.saturating_sub(form_width) / 2,
        width: form_width,
        ..form_area
    };
    render_form(form, theme, form_area, f);
}

fn render_form(form: &LoginFormState, theme: &Theme, area: Rect, f: &mut Frame) {
    f.render_widget(Clear, area);

    let footer_hint = Line::from(vec![
        Span::styled(" Tab", theme.key_hint().bold()),
        Span::styled(" switch field  ", theme.muted()),
        Span::styled("Enter", theme.key_hint().bold()),
        Span::styled(" sign in  ", theme.muted()),
        Span::styled("Ctrl+C", theme.key_hint().bold()),
        Span::styled(" quit ", theme.muted()),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Operator Sign-in ")
        .title_style(theme.panel_title().add_modifier(Modifier::BOLD))
        .title_bottom(footer_hint)
        .title_alignment(Alignment::Center)
        .border_style(theme.panel_border().add_modifier(Modifier::BOLD))
        .style(theme.panel_background());
    f.render_widget(block, area);

    let inner = area.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });
    let [username_area, password_area, _, message_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(2),
    ])
    .areas(inner);

    let masked = "•".repeat(form.password.chars().count());
    render_field(f, username_area, LoginField::Username, &form.username, form, theme);
    render_field(f, password_area, LoginField::Password, &masked, form, theme);

    let message = if form.submitting {
        Line::from(Span::styled("Authenticating...", theme.warning().italic()))
    } else if let Some(error) = &form.last_error {
        Line::from(Span::styled(error.as_str(), theme.error().bold()))
    } else {
        Line::from(Span::styled(
            "Sign in with your operator account",
            theme.text_secondary(),
        ))
    };
    f.render_widget(
        Paragraph::new(message).alignment(Alignment::Center),
        message_area,
    );
}

/// Render one labelled field; the focused field gets the cursor
fn render_field(
    f: &mut Frame,
    area: Rect,
    field: LoginField,
    value: &str,
    form: &LoginFormState,
    theme: &Theme,
) {
    let label_width = 11;
    let focused = form.focused_field == field && !form.submitting;

    let indicator = if focused { "> " } else { "  " };
    let label_style = if focused {
        theme.text().add_modifier(Modifier::BOLD)
    } else {
        theme.text()
    };
    let value_style = if focused {
        Style::default()
            .fg(theme.active_fg)
            .bg(theme.selection_bg())
    } else {
        theme.text()
    };

    let line = Line::from(vec![
        Span::styled(indicator, theme.accent().bold()),
        Span::styled(
            format!("{:width$}", format!("{}:", field.label()), width = label_width),
            label_style,
        ),
        Span::styled(value.to_string(), value_style),
        if focused {
            Span::styled("▌", theme.accent())
        } else {
            Span::raw("")
        },
    ]);
    f.render_widget(Paragraph::new(line), area);
}

/// Company name as a FIGlet banner, plain text if the font cannot render it
fn banner_lines(company: &str, theme: &Theme) -> Vec<Line<'static>> {
    let figure = match FIGfont::standard() {
        Ok(font) => font.convert(company).map(|figure| figure.to_string()),
        Err(e) => {
            log::warn!("Failed to load FIGlet font: {}", e);
            None
        }
    };

    let lines: Vec<String> = match figure {
        Some(text) => text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(String::from)
            .collect(),
        None => vec![company.to_string()],
    };

    lines
        .into_iter()
        .map(|line| Line::from(Span::styled(line, theme.panel_title().bold())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{CommandPaletteAction, ReportAction};
    use crate::views::CommandPaletteView;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|f| crate::views::render(state, f.area(), f))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_translations() {
        let view = LoginView::new();
        assert!(matches!(
            view.translate_navigation(NavigationAction::Next),
            Some(Action::Login(LoginAction::NextField))
        ));
        assert!(matches!(
            view.translate_text_input(TextInputAction::Escape),
            Some(Action::Login(LoginAction::ClearField))
        ));
        assert!(matches!(
            view.translate_text_input(TextInputAction::Confirm),
            Some(Action::Login(LoginAction::Submit))
        ));
    }

    #[test]
    fn test_rejects_overlays_and_dashboard_actions() {
        let view = LoginView::new();
        assert!(!view.accepts_action(&Action::Global(GlobalAction::PushView(Box::new(
            CommandPaletteView::new()
        )))));
        assert!(!view.accepts_action(&Action::Report(ReportAction::Generate)));
        assert!(!view.accepts_action(&Action::CommandPalette(CommandPaletteAction::Close)));
        assert!(view.accepts_action(&Action::Global(GlobalAction::Quit)));
        assert!(view.accepts_action(&Action::Login(LoginAction::Logout)));
    }

    #[test]
    fn test_password_is_masked() {
        let mut state = AppState::default();
        state.login.username = "admin".to_string();
        state.login.password = "secret".to_string();

        let text = screen_text(&state);
        assert!(text.contains("Operator Sign-in"));
        assert!(text.contains("admin"));
        assert!(text.contains("••••••"));
        assert!(!text.contains("secret"));
    }

    #[test]
    fn test_shows_last_error() {
        let mut state = AppState::default();
        state.login.last_error = Some("Invalid username or password".to_string());
        assert!(screen_text(&state).contains("Invalid username or password"));
    }
}
