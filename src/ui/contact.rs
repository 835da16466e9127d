//! Contact page with the supervised map panel.

use std::time::Duration;

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_SUCCESS, COLOR_WARNING,
};
use crate::app::App;
use crate::embed::{EmbedPhase, EmbedView};

const CONTACT_LINES: [&str; 4] = [
    "Reservations   +960 400 1234",
    "Email          stay@lagoon-resort.example",
    "Front desk     open 24 hours",
    "Airport        45 min by seaplane",
];

pub fn render_contact(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CONTACT_LINES.len() as u16 + 2),
            Constraint::Min(6),
        ])
        .split(area);

    let details: Vec<Line> = CONTACT_LINES
        .iter()
        .map(|line| Line::from(Span::styled(*line, Style::default().fg(COLOR_HEADER))))
        .collect();
    frame.render_widget(
        Paragraph::new(details).block(
            Block::default()
                .title(" Get in touch ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(COLOR_BORDER)),
        ),
        chunks[0],
    );

    let lines = match &app.map {
        Some(map) => map_panel_lines(&map.view(), app.config.retry_delay, map.embed_url()),
        None => vec![Line::from(Span::styled("map not loaded", Style::default().fg(COLOR_DIM)))],
    };
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .title(" Location ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(COLOR_BORDER)),
        ),
        chunks[1],
    );
}

/// Text for the map panel in each embed phase.
pub fn map_panel_lines(
    view: &EmbedView,
    retry_delay: Duration,
    embed_url: &str,
) -> Vec<Line<'static>> {
    let dim = Style::default().fg(COLOR_DIM);
    let key = Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD);

    match view.phase {
        EmbedPhase::Loading => {
            let attempt = view.state.retry_count + 1;
            let mut text = "Loading map...".to_string();
            if attempt > 1 {
                text = format!("Loading map (attempt {} of {})...", attempt, view.max_retries + 1);
            }
            vec![Line::from(Span::styled(text, Style::default().fg(COLOR_WARNING)))]
        }
        EmbedPhase::Loaded => vec![
            Line::from(Span::styled("● Map loaded", Style::default().fg(COLOR_SUCCESS))),
            Line::from(Span::styled(embed_url.to_string(), dim)),
        ],
        EmbedPhase::ErrorRetrying(_) => {
            let text = if view.retry_scheduled {
                format!(
                    "Map failed to load. Retrying in {}s...",
                    retry_delay.as_secs_f64().ceil() as u64
                )
            } else {
                "Map failed to load. Retrying...".to_string()
            };
            vec![Line::from(Span::styled(text, Style::default().fg(COLOR_WARNING)))]
        }
        EmbedPhase::ErrorExhausted => {
            let mut lines = vec![
                Line::from(Span::styled("Unable to load the map.", Style::default().fg(COLOR_ERROR))),
                Line::from(vec![
                    Span::styled("[r]", key),
                    Span::styled(" try again", dim),
                ]),
            ];
            if let Some(url) = &view.fallback_url {
                lines.push(Line::from(vec![
                    Span::styled("[o]", key),
                    Span::styled(" open in browser: ", dim),
                    Span::styled(url.clone(), Style::default().fg(COLOR_HEADER)),
                ]));
            }
            lines
        }
    }
}
