//! Error boundary around the routed page
//!
//! A failed page render (returned error or panic) is recorded and replaced
//! by a static fallback. The boundary stays tripped until the next
//! navigation, including an explicit reload.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use ratatui::{prelude::*, widgets::*};

use crate::theme::Palette;

#[derive(Debug, Default)]
pub struct ErrorBoundary {
    error: Option<String>,
    navigation_seq: Option<u64>,
}

impl ErrorBoundary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset after a navigation. Same sequence number means same mount.
    pub fn sync_navigation(&mut self, navigation_seq: u64) {
        if self.navigation_seq != Some(navigation_seq) {
            if self.error.take().is_some() {
                tracing::info!(navigation_seq, "Error boundary reset");
            }
            self.navigation_seq = Some(navigation_seq);
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Run `render` unless the boundary has tripped; draw the fallback otherwise
    pub fn render<F>(&mut self, f: &mut Frame, area: Rect, palette: Palette, render: F)
    where
        F: FnOnce(&mut Frame, Rect) -> anyhow::Result<()>,
    {
        if self.error.is_none() {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| render(f, area)));
            let message = match outcome {
                Ok(Ok(())) => return,
                Ok(Err(e)) => format!("{:#}", e),
                Err(payload) => panic_message(payload.as_ref()),
            };
            tracing::error!(error = %message, "Page render failed");
            self.error = Some(message);
        }

        draw_page_error(f, area, palette);
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        String::from("page render panicked")
    }
}

/// Static fallback shown in place of a failed page
fn draw_page_error(f: &mut Frame, area: Rect, palette: Palette) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "An unexpected error occurred",
            Style::default().fg(palette.error).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press 'r' to reload the page",
            Style::default().fg(palette.muted),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.error));

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .style(Style::default().bg(palette.bg)),
        area,
    );
}
