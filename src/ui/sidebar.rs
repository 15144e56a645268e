use ratatui::{prelude::*, widgets::*};

use super::components::{render_button, ButtonVariant};
use crate::messages::RenderState;
use crate::theme::{Palette, Theme};

/// Width of the sidebar column
pub fn sidebar_width(state: &RenderState) -> u16 {
    if state.sidebar_collapsed {
        6
    } else {
        22
    }
}

pub fn draw_sidebar(f: &mut Frame, state: &RenderState, area: Rect, palette: Palette) {
    let items: Vec<ListItem> = state
        .sidebar_items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let is_active = item.route == state.route;
            let style = if is_active {
                Style::default().fg(palette.accent).bold()
            } else {
                Style::default().fg(palette.fg)
            };
            let text = if state.sidebar_collapsed {
                (i + 1).to_string()
            } else {
                format!("{} {}", i + 1, item.route.title())
            };
            ListItem::new(text).style(style)
        })
        .collect();

    let switcher = match state.theme {
        Theme::Light => "t ☾",
        Theme::Dark => "t ☀",
    };
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(palette.muted))
        .title_bottom(
            Line::from(Span::styled(
                if state.sidebar_collapsed { "b»" } else { "b «" },
                Style::default().fg(palette.muted),
            ))
            .right_aligned(),
        );
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    f.render_widget(List::new(items), chunks[0]);
    f.render_widget(
        render_button(switcher, ButtonVariant::Clear, false, palette),
        chunks[1],
    );
}
