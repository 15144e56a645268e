use ratatui::{prelude::*, widgets::*};

use crate::constants::APP_NAME;
use crate::messages::RenderState;
use crate::theme::Palette;

pub fn draw_navbar(f: &mut Frame, state: &RenderState, area: Rect, palette: Palette) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(40)])
        .split(area);

    let bar_style = Style::default().bg(palette.inverted_bg).fg(palette.inverted_fg);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(format!(" {} ", APP_NAME), bar_style.bold()),
        Span::styled(state.path.clone(), bar_style),
    ]))
    .style(bar_style);
    f.render_widget(title, chunks[0]);

    let account = match &state.user {
        Some(user) => format!("{} | o: sign out ", user.username),
        None => String::from("l: sign in "),
    };
    let right = Paragraph::new(account)
        .alignment(Alignment::Right)
        .style(bar_style);
    f.render_widget(right, chunks[1]);
}
