//! Routed pages

use anyhow::bail;
use ratatui::{prelude::*, widgets::*};

use crate::constants::APP_VERSION;
use crate::entities::{Profile, ProfileField};
use crate::messages::ui_events::InputMode;
use crate::messages::RenderState;
use crate::router::AppRoute;
use crate::theme::Palette;
use crate::ui::components::{render_button, render_input, render_select, ButtonVariant};

/// Draw the page for the current route
pub fn draw_page(f: &mut Frame, state: &RenderState, area: Rect, palette: Palette) -> anyhow::Result<()> {
    match state.route {
        AppRoute::Main => draw_text_page(
            f,
            area,
            palette,
            "Main page",
            &[
                "Welcome.",
                "",
                "Use the number keys to switch pages, 'g' to go to a path,",
                "'t' to switch the theme and '?' for help.",
            ],
        ),
        AppRoute::About => {
            let version = format!("Version {}", APP_VERSION);
            draw_text_page(
                f,
                area,
                palette,
                "About",
                &[
                    "A themed shell with routing, sign-in and an editable profile.",
                    "",
                    version.as_str(),
                ],
            )
        }
        AppRoute::NotFound => draw_text_page(f, area, palette, "Not found", &["Page not found"]),
        AppRoute::Profile => draw_profile_page(f, state, area, palette)?,
    }
    Ok(())
}

fn draw_text_page(f: &mut Frame, area: Rect, palette: Palette, title: &str, lines: &[&str]) {
    let text: Vec<Line> = lines
        .iter()
        .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(palette.fg))))
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.muted))
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(palette.accent).bold());

    f.render_widget(Paragraph::new(text).block(block).wrap(Wrap { trim: false }), area);
}

fn draw_profile_page(f: &mut Frame, state: &RenderState, area: Rect, palette: Palette) -> anyhow::Result<()> {
    if !state.is_auth() {
        bail!("profile page mounted without a signed-in user");
    }

    let profile = &state.profile;
    let error_lines: Vec<Line> = profile
        .validate_errors
        .iter()
        .map(|e| Line::from(Span::styled(e.message(), Style::default().fg(palette.error))))
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                       // Header with buttons
            Constraint::Length(error_lines.len() as u16), // Validation errors
            Constraint::Min(0),                          // Card
        ])
        .split(area);

    draw_profile_header(f, state, chunks[0], palette);
    f.render_widget(Paragraph::new(error_lines), chunks[1]);

    match (&profile.form, &profile.error) {
        (_, Some(error)) if profile.data.is_none() => {
            let text = Paragraph::new(Span::styled(
                format!("{} (press 'r' to retry)", error),
                Style::default().fg(palette.error),
            ))
            .alignment(Alignment::Center);
            f.render_widget(text, chunks[2]);
        }
        (None, _) if profile.is_loading => {
            let text = Paragraph::new(Span::styled("Loading...", Style::default().fg(palette.muted)))
                .alignment(Alignment::Center);
            f.render_widget(text, chunks[2]);
        }
        (form, _) => {
            let empty = Profile::default();
            draw_profile_card(f, state, form.as_ref().unwrap_or(&empty), chunks[2], palette);
        }
    }
    Ok(())
}

fn draw_profile_header(f: &mut Frame, state: &RenderState, area: Rect, palette: Palette) {
    let profile = &state.profile;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(14), Constraint::Length(14)])
        .split(area);

    let title = if profile.is_loading && !profile.readonly {
        " Profile [saving...] "
    } else {
        " Profile "
    };
    f.render_widget(
        Paragraph::new(Span::styled(title, Style::default().fg(palette.accent).bold()))
            .block(Block::default().padding(Padding::top(1))),
        chunks[0],
    );

    if profile.readonly {
        f.render_widget(
            render_button("e: Edit", ButtonVariant::Outline, profile.is_loading, palette),
            chunks[2],
        );
    } else {
        f.render_widget(
            render_button("x: Cancel", ButtonVariant::Outline, profile.is_loading, palette),
            chunks[1],
        );
        f.render_widget(
            render_button("s: Save", ButtonVariant::Outline, profile.is_loading, palette),
            chunks[2],
        );
    }
}

fn draw_profile_card(f: &mut Frame, state: &RenderState, form: &Profile, area: Rect, palette: Palette) {
    let readonly = state.profile.readonly;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let rows_per_column = ProfileField::ALL.len().div_ceil(2);
    for (i, field) in ProfileField::ALL.iter().enumerate() {
        let column = columns[i / rows_per_column];
        let row = (i % rows_per_column) as u16;
        let cell = Rect {
            x: column.x,
            y: column.y + row * 3,
            width: column.width,
            height: 3,
        };
        if cell.bottom() > area.bottom() {
            continue;
        }

        let focused = !readonly && state.active_field == *field;
        let editing = focused && state.input_mode == InputMode::Editing;

        if field.is_select() {
            let value = match field {
                ProfileField::Currency => form.currency.map(|c| c.as_str()),
                _ => form.country.map(|c| c.as_str()),
            };
            f.render_widget(render_select(field.label(), value, focused, readonly, palette), cell);
        } else {
            let value = if editing {
                state.edit_buffer.clone()
            } else {
                form.field_text(*field)
            };
            let label = if editing {
                format!("{} (editing)", field.label())
            } else {
                field.label().to_string()
            };
            let widget = render_input(&label, &value, focused, readonly, palette);
            f.render_widget(widget, cell);

            if editing {
                let max_x = cell.x + cell.width.saturating_sub(2);
                let prefix_width = Span::raw(&state.edit_buffer[..state.cursor_position]).width() as u16;
                let cursor_x = (cell.x + prefix_width + 1).min(max_x);
                f.set_cursor_position(Position::new(cursor_x, cell.y + 1));
            }
        }
    }
}
