//! Form field primitives: controlled input, select and button
//!
//! These hold no state. Callers pass the value, focus and readonly flags and
//! get back a widget ready to render.

use ratatui::{prelude::*, widgets::*};

use crate::theme::Palette;

/// Renders a single-line text input
pub fn render_input<'a>(
    label: &'a str,
    value: &'a str,
    focused: bool,
    readonly: bool,
    palette: Palette,
) -> Paragraph<'a> {
    let border_style = if focused && !readonly {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.muted)
    };
    let text_style = if readonly {
        Style::default().fg(palette.muted)
    } else {
        Style::default().fg(palette.fg)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(label);

    Paragraph::new(Span::styled(value, text_style)).block(block)
}

/// Renders a select showing the current value between arrows
pub fn render_select<'a>(
    label: &'a str,
    value: Option<&'a str>,
    focused: bool,
    readonly: bool,
    palette: Palette,
) -> Paragraph<'a> {
    let border_style = if focused && !readonly {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.muted)
    };

    let value = value.unwrap_or("—");
    let content = if readonly {
        Line::from(Span::styled(value, Style::default().fg(palette.muted)))
    } else {
        Line::from(vec![
            Span::styled("◀ ", Style::default().fg(palette.accent)),
            Span::styled(value, Style::default().fg(palette.fg)),
            Span::styled(" ▶", Style::default().fg(palette.accent)),
        ])
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(label);

    Paragraph::new(content).block(block)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Plain text, no frame
    Clear,
    Outline,
}

/// Renders a button label with its key hint
pub fn render_button<'a>(
    label: &'a str,
    variant: ButtonVariant,
    disabled: bool,
    palette: Palette,
) -> Paragraph<'a> {
    let style = if disabled {
        Style::default().fg(palette.muted)
    } else {
        Style::default().fg(palette.accent).bold()
    };

    let paragraph = Paragraph::new(Span::styled(label, style)).alignment(Alignment::Center);
    match variant {
        ButtonVariant::Clear => paragraph,
        ButtonVariant::Outline => paragraph.block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(style),
        ),
    }
}

/// Rect of the given percentages centered in `r`
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
