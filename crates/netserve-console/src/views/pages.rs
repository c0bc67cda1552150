//! Dashboard pages, one per route
//!
//! The dashboard shell renders the header and sidebar; everything right of
//! the sidebar is drawn here based on `state.router.current`.

use crate::domain_models::{NodeStatus, TicketPriority};
use crate::palette::catalog::{
    ANALYTICS_PATH, CLIENTS_PATH, INVENTORY_PATH, NETWORK_PATH, OVERVIEW_PATH, SETTINGS_PATH,
    TICKETS_PATH,
};
use crate::state::AppState;
use netserve_theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

/// Render the page registered for the current route
pub fn render_page(state: &AppState, area: Rect, f: &mut Frame) {
    match state.router.current.as_str() {
        OVERVIEW_PATH => render_overview(state, area, f),
        TICKETS_PATH => render_tickets(state, area, f),
        CLIENTS_PATH => render_clients(state, area, f),
        NETWORK_PATH => render_network(state, area, f),
        INVENTORY_PATH => render_inventory(state, area, f),
        ANALYTICS_PATH => render_analytics(state, area, f),
        SETTINGS_PATH => render_settings(state, area, f),
        other => render_not_found(other, &state.theme, area, f),
    }
}

fn page_block(title: &str, theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .title_style(theme.panel_title().add_modifier(Modifier::BOLD))
        .border_style(theme.panel_border())
        .style(theme.panel_background())
}

/// Bordered table with a styled header row
fn render_table(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    title: &str,
    headers: &[&str],
    rows: Vec<Row>,
    widths: &[Constraint],
) {
    let header_style = theme.table_header();
    let header = Row::new(headers.iter().map(|h| Cell::from(*h).style(header_style)))
        .style(header_style)
        .height(1);

    let table = Table::new(rows, widths.to_vec())
        .header(header)
        .block(page_block(title, theme))
        .column_spacing(2);
    f.render_widget(table, area);
}

fn render_overview(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let data = &state.data;

    let [tiles_area, rest] =
        Layout::vertical([Constraint::Length(5), Constraint::Min(0)]).areas(area);
    let tiles = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(tiles_area);

    let kpis = [
        ("Open tickets", data.open_tickets().to_string(), theme.warning()),
        (
            "SLA compliance",
            format!("{:.1}%", data.sla_compliance()),
            theme.success(),
        ),
        (
            "Avg. uptime",
            format!("{:.2}%", data.average_uptime()),
            theme.accent(),
        ),
        ("Clients", data.clients.len().to_string(), theme.text()),
    ];

    for ((label, value, style), tile) in kpis.into_iter().zip(tiles.iter()) {
        let paragraph = Paragraph::new(vec![
            Line::from(Span::styled(value, style.add_modifier(Modifier::BOLD))),
            Line::from(Span::styled(label, theme.muted())),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.panel_border())
                .style(theme.panel_background()),
        );
        f.render_widget(paragraph, *tile);
    }

    let node_summary = Line::from(vec![
        Span::styled("Network: ", theme.text_secondary()),
        Span::styled(
            format!("{} online", data.nodes_with_status(NodeStatus::Online)),
            theme.success(),
        ),
        Span::raw("  "),
        Span::styled(
            format!("{} degraded", data.nodes_with_status(NodeStatus::Degraded)),
            theme.warning(),
        ),
        Span::raw("  "),
        Span::styled(
            format!("{} offline", data.nodes_with_status(NodeStatus::Offline)),
            theme.error(),
        ),
    ]);

    let mut lines = vec![node_summary, Line::from("")];
    lines.extend(
        data.tickets
            .iter()
            .filter(|t| t.open && t.priority == TicketPriority::Critical)
            .map(|t| {
                Line::from(vec![
                    Span::styled("● ", theme.error()),
                    Span::styled(format!("{} ", t.code), theme.text().bold()),
                    Span::styled(format!("{} ({})", t.subject, t.client), theme.text()),
                ])
            }),
    );

    f.render_widget(
        Paragraph::new(lines).block(page_block("Overview", theme)),
        rest,
    );
}

fn priority_color(priority: TicketPriority, theme: &Theme) -> Color {
    match priority {
        TicketPriority::Critical => theme.status_error,
        TicketPriority::High => theme.status_warning,
        TicketPriority::Medium => theme.status_info,
        TicketPriority::Low => theme.text_muted,
    }
}

fn render_tickets(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let rows = state
        .data
        .tickets
        .iter()
        .map(|t| {
            let status = if t.open { "Open" } else { "Closed" };
            Row::new(vec![
                Cell::from(t.code.clone()),
                Cell::from(t.subject.clone()),
                Cell::from(t.client.clone()),
                Cell::from(t.priority.label())
                    .style(Style::default().fg(priority_color(t.priority, theme))),
                Cell::from(status),
            ])
            .style(theme.text())
        })
        .collect();

    render_table(
        f,
        area,
        theme,
        "Ticket Manager",
        &["Code", "Subject", "Client", "Priority", "Status"],
        rows,
        &[
            Constraint::Length(9),
            Constraint::Percentage(35),
            Constraint::Percentage(25),
            Constraint::Length(9),
            Constraint::Length(7),
        ],
    );
}

fn render_clients(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let rows = state
        .data
        .clients
        .iter()
        .map(|c| {
            Row::new(vec![
                Cell::from(c.id.to_string()),
                Cell::from(c.name.clone()),
                Cell::from(c.tier.clone()),
                Cell::from(c.region.clone()),
            ])
            .style(theme.text())
        })
        .collect();

    render_table(
        f,
        area,
        theme,
        "Clients",
        &["ID", "Name", "Tier", "Region"],
        rows,
        &[
            Constraint::Length(8),
            Constraint::Percentage(45),
            Constraint::Length(8),
            Constraint::Min(10),
        ],
    );
}

fn render_network(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let rows = state
        .data
        .nodes
        .iter()
        .map(|n| {
            let color = match n.status {
                NodeStatus::Online => theme.status_success,
                NodeStatus::Degraded => theme.status_warning,
                NodeStatus::Offline => theme.status_error,
            };
            let latency = if n.status == NodeStatus::Offline {
                "-".to_string()
            } else {
                format!("{} ms", n.latency_ms)
            };
            Row::new(vec![
                Cell::from(n.hostname.clone()),
                Cell::from(n.site.clone()),
                Cell::from(n.status.label()).style(Style::default().fg(color)),
                Cell::from(latency),
                Cell::from(format!("{:.2}%", n.uptime_pct)),
            ])
            .style(theme.text())
        })
        .collect();

    render_table(
        f,
        area,
        theme,
        "Network Monitor",
        &["Host", "Site", "Status", "Latency", "Uptime"],
        rows,
        &[
            Constraint::Length(18),
            Constraint::Length(14),
            Constraint::Length(9),
            Constraint::Length(8),
            Constraint::Length(8),
        ],
    );
}

fn render_inventory(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let rows = state
        .data
        .assets
        .iter()
        .map(|a| {
            Row::new(vec![
                Cell::from(a.tag.clone()),
                Cell::from(a.kind.clone()),
                Cell::from(a.model.clone()),
                Cell::from(a.assigned_to.clone()),
            ])
            .style(theme.text())
        })
        .collect();

    render_table(
        f,
        area,
        theme,
        "Inventory",
        &["Tag", "Type", "Model", "Assigned to"],
        rows,
        &[
            Constraint::Length(8),
            Constraint::Length(9),
            Constraint::Percentage(35),
            Constraint::Min(10),
        ],
    );
}

fn render_analytics(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let [chart_area, report_area] =
        Layout::vertical([Constraint::Min(8), Constraint::Length(3)]).areas(area);

    let chart = BarChart::default()
        .block(page_block("Analytics - tickets per month", theme))
        .data(state.data.ticket_volume.as_slice())
        .bar_width(6)
        .bar_gap(2)
        .bar_style(Style::default().fg(theme.chart_bar))
        .value_style(
            Style::default()
                .fg(theme.chart_value)
                .bg(theme.chart_bar)
                .add_modifier(Modifier::BOLD),
        )
        .label_style(theme.text_secondary());
    f.render_widget(chart, chart_area);

    let report_line = if state.report.generating {
        Line::from(Span::styled("Generating BI report...", theme.warning().italic()))
    } else if let Some(name) = &state.report.last_report {
        Line::from(vec![
            Span::styled("Last report: ", theme.text_secondary()),
            Span::styled(name.as_str(), theme.success()),
        ])
    } else {
        let hint = state
            .keymap
            .compact_hint_for_command(crate::command_id::CommandId::ReportGenerate)
            .unwrap_or_default();
        Line::from(vec![
            Span::styled("Press ", theme.muted()),
            Span::styled(hint, theme.key_hint().bold()),
            Span::styled(" to generate a BI report", theme.muted()),
        ])
    };
    f.render_widget(
        Paragraph::new(report_line).block(page_block("Reports", theme)),
        report_area,
    );
}

fn render_settings(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let config = &state.config;
    let row = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<18}", label), theme.text_secondary()),
            Span::styled(value, theme.text()),
        ])
    };

    let config_path = netserve_config::app_config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(no config directory)".to_string());

    let lines = vec![
        row("Company", config.company_name.clone()),
        row("Operators", config.operators.len().to_string()),
        row("Login delay", format!("{} ms", config.login_delay_ms)),
        row("Report delay", format!("{} ms", config.report_delay_ms)),
        row("Config file", config_path),
    ];
    f.render_widget(
        Paragraph::new(lines).block(page_block("Settings", theme)),
        area,
    );
}

fn render_not_found(path: &str, theme: &Theme, area: Rect, f: &mut Frame) {
    let lines = vec![
        Line::from(Span::styled("Route not found", theme.error().bold())),
        Line::from(Span::styled(path.to_string(), theme.muted())),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(page_block("404", theme)),
        area,
    );
}
