//! App shell rendering
//!
//! Every frame is drawn from a [`RenderState`] snapshot with the active
//! theme's palette: navbar, sidebar, the routed page inside the error
//! boundary, the status bar and any open popup.

pub mod components;
pub mod error_boundary;
pub mod navbar;
pub mod pages;
pub mod sidebar;

use ratatui::{prelude::*, widgets::*};

use crate::entities::LoginField;
use crate::messages::ui_events::InputMode;
use crate::messages::RenderState;
use crate::theme::Palette;
use components::{centered_rect, render_button, render_input, ButtonVariant};
pub use error_boundary::ErrorBoundary;

pub fn draw_ui(f: &mut Frame, state: &RenderState, boundary: &mut ErrorBoundary) {
    let area = f.area();
    let palette = state.theme.palette();

    f.render_widget(
        Block::default().style(Style::default().bg(palette.bg).fg(palette.fg)),
        area,
    );

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Navbar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    navbar::draw_navbar(f, state, main_chunks[0], palette);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(sidebar::sidebar_width(state)),
            Constraint::Min(0),
        ])
        .split(main_chunks[1]);

    sidebar::draw_sidebar(f, state, content[0], palette);

    boundary.sync_navigation(state.navigation_seq);
    boundary.render(f, content[1], palette, |f, area| {
        pages::draw_page(f, state, area, palette)
    });

    draw_status_bar(f, state, main_chunks[2], palette);

    if state.show_help {
        draw_help_popup(f, area, palette);
    }
    if state.show_login {
        draw_login_popup(f, state, area, palette);
    }
    if state.show_path_input {
        draw_path_popup(f, state, area, palette);
    }
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect, palette: Palette) {
    let hints = if state.input_mode == InputMode::Editing {
        " ESC/Enter: stop editing | arrows: move "
    } else if state.profile.is_loading {
        " Loading... "
    } else {
        " 1-9: page | g: go to | t: theme | b: sidebar | r: reload | ?: help | q: quit "
    };

    let mut spans = vec![Span::styled(hints, Style::default().fg(palette.muted))];
    if let Some(status) = &state.status {
        spans.push(Span::styled(format!(" {} ", status), Style::default().fg(palette.success)));
    }
    if let Some(saved_at) = state.profile.last_saved_at {
        spans.push(Span::styled(
            format!(" saved {} ", saved_at.with_timezone(&chrono::Local).format("%H:%M:%S")),
            Style::default().fg(palette.muted),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn popup_block(title: &str, palette: Palette) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .title(title)
        .style(Style::default().bg(palette.bg).fg(palette.fg))
}

fn draw_help_popup(f: &mut Frame, area: Rect, palette: Palette) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 KEYBOARD SHORTCUTS

 SHELL
   1-9                Open sidebar entry
   g                  Go to a path
   t                  Toggle light/dark theme
   b                  Collapse/expand sidebar
   r                  Reload current page
   l / o              Sign in / sign out

 PROFILE PAGE
   e                  Edit profile
   ↑ / ↓ / Tab        Move between fields
   Enter              Edit field / next option
   ← / →              Previous / next option
   s                  Save
   x / Esc            Cancel editing

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    f.render_widget(Clear, popup_area);
    f.render_widget(
        Paragraph::new(help_text)
            .block(popup_block(" Help ", palette))
            .wrap(Wrap { trim: false }),
        popup_area,
    );
}

fn draw_login_popup(f: &mut Frame, state: &RenderState, area: Rect, palette: Palette) {
    let popup_area = centered_rect(50, 50, area);
    f.render_widget(Clear, popup_area);

    let block = popup_block(" Sign in (Enter: submit, Tab: next field, Esc: close) ", palette);
    let inner = block.inner(popup_area);
    f.render_widget(block, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Username
            Constraint::Length(3), // Password
            Constraint::Length(1), // Error
            Constraint::Length(3), // Button
            Constraint::Min(0),
        ])
        .split(inner);

    let login = &state.login;
    let masked = "*".repeat(login.password.chars().count());
    f.render_widget(
        render_input("Username", &login.username, login.field == LoginField::Username, false, palette),
        chunks[0],
    );
    f.render_widget(
        render_input("Password", &masked, login.field == LoginField::Password, false, palette),
        chunks[1],
    );

    if let Some(error) = &login.error {
        f.render_widget(
            Paragraph::new(Span::styled(error.as_str(), Style::default().fg(palette.error))),
            chunks[2],
        );
    }

    let label = if login.is_loading { "Signing in..." } else { "Sign in" };
    f.render_widget(
        render_button(label, ButtonVariant::Outline, login.is_loading, palette),
        chunks[3],
    );
}

fn draw_path_popup(f: &mut Frame, state: &RenderState, area: Rect, palette: Palette) {
    let popup_area = centered_rect(60, 20, area);
    f.render_widget(Clear, popup_area);

    let input = Paragraph::new(state.path_input.as_str())
        .block(popup_block(" Go to path (Enter to open, Esc to cancel) ", palette))
        .wrap(Wrap { trim: false });
    f.render_widget(input, popup_area);
}
