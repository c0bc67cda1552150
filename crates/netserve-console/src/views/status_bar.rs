//! Status Bar Widget
//!
//! Format: `[timestamp] icon message                     [source]`

use crate::view_models::StatusBarViewModel;
use ratatui::{buffer::Buffer, layout::Rect, text::Line, widgets::Widget};

pub struct StatusBarWidget<'a>(pub &'a StatusBarViewModel);

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vm = self.0;
        if area.height < 1 || area.width < 4 {
            return;
        }

        buf.set_style(area, ratatui::style::Style::default().bg(vm.bg_color));

        let right = if vm.source.is_empty() {
            String::new()
        } else {
            format!("[{}]", vm.source)
        };
        let right_width = right.chars().count() as u16;

        let mut left = String::from(" ");
        if !vm.timestamp.is_empty() {
            left.push_str(&format!("[{}] ", vm.timestamp));
        }
        let prefix_width = left.chars().count() as u16;

        // Leave room for the source tag and one cell of padding on each side
        let message_room = area
            .width
            .saturating_sub(prefix_width + right_width + 3) as usize;
        let mut message = format!("{} {}", vm.icon, vm.message);
        if message.chars().count() > message_room {
            message = message
                .chars()
                .take(message_room.saturating_sub(1))
                .collect::<String>()
                + "…";
        }

        buf.set_string(area.x, area.y, &left, vm.metadata_style);
        buf.set_line(
            area.x + prefix_width,
            area.y,
            &Line::styled(message, vm.message_style),
            message_room as u16,
        );
        if right_width > 0 && right_width + 1 < area.width {
            let x = area.x + area.width - right_width - 1;
            buf.set_string(x, area.y, &right, vm.metadata_style);
        }
    }
}
