use crate::actions::{Action, PointerAction, RouterAction};
use crate::capabilities::PanelCapabilities;
use crate::palette::navigation_targets;
use crate::state::AppState;
use crate::view_models::DashboardViewModel;
use crate::views::{pages, screen_layout, View, ViewId};
use ratatui::{
    layout::{Constraint, Layout, Margin, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const SIDEBAR_WIDTH: u16 = 26;

/// Dashboard shell: header, sidebar navigation and the routed page
#[derive(Debug, Clone)]
pub struct DashboardView;

impl DashboardView {
    pub fn new() -> Self {
        Self
    }
}

/// Areas of the dashboard inside the view body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardLayout {
    pub header: Rect,
    pub sidebar: Rect,
    pub page: Rect,
}

impl DashboardLayout {
    /// Rows inside the sidebar border, one per navigation target
    pub fn sidebar_items(&self) -> Rect {
        self.sidebar.inner(Margin {
            horizontal: 1,
            vertical: 1,
        })
    }
}

pub fn dashboard_layout(area: Rect) -> DashboardLayout {
    let [header, body] = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
    let [sidebar, page] =
        Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)]).areas(body);
    DashboardLayout {
        header,
        sidebar,
        page,
    }
}

impl View for DashboardView {
    fn view_id(&self) -> ViewId {
        ViewId::Dashboard
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render(state, area, f);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::POINTER
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_pointer(&self, pointer: PointerAction, state: &AppState) -> Option<Action> {
        // Only clicks navigate; hovering the sidebar does nothing
        let PointerAction::Click { column, row } = pointer else {
            return None;
        };

        let items = dashboard_layout(screen_layout(state.viewport).0).sidebar_items();
        if column < items.x || column >= items.right() || row < items.y || row >= items.bottom() {
            return None;
        }

        navigation_targets()
            .into_iter()
            .nth((row - items.y) as usize)
            .map(|target| Action::Router(RouterAction::Navigate(target.path)))
    }
}

fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let vm = DashboardViewModel::from_state(state);
    let layout = dashboard_layout(area);

    f.render_widget(Block::default().style(theme.panel_background()), area);

    // Header
    let mut hint_spans = Vec::new();
    for (hint, title) in &vm.header_hints {
        hint_spans.push(Span::styled(hint.as_str(), theme.key_hint().bold()));
        hint_spans.push(Span::styled(format!(" {}  ", title), theme.muted()));
    }
    let header = Paragraph::new(Line::from(hint_spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Line::from(vec![
                Span::styled(format!(" {} ", vm.company), theme.panel_title().bold()),
                Span::styled(format!("/ {} ", vm.page_title), theme.text_secondary()),
            ]))
            .title(
                Line::from(Span::styled(
                    format!(" {} ", vm.operator),
                    theme.accent().bold(),
                ))
                .right_aligned(),
            )
            .border_style(theme.panel_border())
            .style(theme.panel_background()),
    );
    f.render_widget(header, layout.header);

    // Sidebar
    let lines: Vec<Line> = vm
        .sidebar
        .iter()
        .map(|item| {
            let style = if item.is_active {
                theme.selection()
            } else {
                theme.text()
            };
            Line::from(vec![
                Span::styled(format!("{} ", item.icon), style),
                Span::styled(format!("{:<18}", item.label), style),
                Span::styled(format!("{:>2}", item.hint), theme.key_hint()),
            ])
        })
        .collect();
    let sidebar = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Navigation ")
            .title_style(theme.panel_title())
            .border_style(theme.panel_border())
            .style(theme.sidebar_background()),
    );
    f.render_widget(sidebar, layout.sidebar);

    pages::render_page(state, layout.page, f);
}
