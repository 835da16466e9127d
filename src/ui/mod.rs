//! Terminal rendering.
//!
//! Layout: navigation tabs on top, the current page in a centred column,
//! and a status/key-hint line at the bottom.

mod contact;
mod helpers;
mod listing;
mod theme;
mod villa;

pub use contact::map_panel_lines;
pub use helpers::{format_price, truncate_to_width};
pub use listing::{pagination_line, ListingRow};
pub use theme::*;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, InputMode, Screen, StatusKind};
use contact::render_contact;
use helpers::centered_column;
use listing::render_listing;
use villa::{render_booking, render_villa_detail};

/// Widest the content column grows on large terminals.
const MAX_CONTENT_WIDTH: u16 = 96;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // tabs + rule
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1), // status / hints
        ])
        .split(area);

    render_tabs(frame, chunks[0], app.screen);

    let body = centered_column(chunks[2], MAX_CONTENT_WIDTH);
    match app.screen {
        Screen::Offers => render_listing(frame, body, app, &app.offers, &app.offers_status),
        Screen::Amenities => {
            render_listing(frame, body, app, &app.amenities, &app.amenities_status)
        }
        Screen::Villas => render_listing(frame, body, app, &app.villas, &app.villas_status),
        Screen::VillaDetail => render_villa_detail(frame, body, app),
        Screen::Booking => render_booking(frame, body, app),
        Screen::Contact => render_contact(frame, body, app),
    }

    render_footer(frame, chunks[3], app);
}

fn render_tabs(frame: &mut Frame, area: Rect, screen: Screen) {
    let active = screen.tab();
    let mut spans = vec![Span::styled(
        " Lagoon Resort ",
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    )];
    for (index, tab) in Screen::TABS.iter().enumerate() {
        let style = if *tab == active {
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(format!("{} {}", index + 1, tab.title()), style));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(COLOR_BORDER)),
        ),
        area,
    );
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.status {
        Some(status) => {
            let color = match status.kind {
                StatusKind::Info => COLOR_DIM,
                StatusKind::Error => COLOR_ERROR,
            };
            Line::from(Span::styled(
                truncate_to_width(&status.text, area.width as usize),
                Style::default().fg(color),
            ))
        }
        None => Line::from(Span::styled(key_hints(app), Style::default().fg(COLOR_DIM))),
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Key reminders for the current page.
pub fn key_hints(app: &App) -> &'static str {
    if app.input_mode == InputMode::Search {
        return "type to filter · enter done · esc clear";
    }
    match app.screen {
        Screen::Villas => "←/→ page · ↑/↓ select · enter details · / search · s sort · q quit",
        Screen::Offers | Screen::Amenities => {
            "←/→ page · ↑/↓ select · / search · s sort · F5 refresh · q quit"
        }
        Screen::VillaDetail => "b book · esc back · q quit",
        Screen::Booking => "tab next field · enter submit · esc back",
        Screen::Contact => "r reload map · o open map link · q quit",
    }
}
