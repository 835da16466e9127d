//! Villa detail page and booking form.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::helpers::format_price;
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_PRICE, COLOR_SUCCESS,
};
use crate::app::{App, BookingForm, FormField};
use crate::models::Villa;

pub fn render_villa_detail(frame: &mut Frame, area: Rect, app: &App) {
    let Some(villa) = app.detail_villa() else {
        frame.render_widget(
            Paragraph::new(Span::styled("villa not found", Style::default().fg(COLOR_DIM))),
            area,
        );
        return;
    };

    frame.render_widget(
        Paragraph::new(villa_lines(villa))
            .wrap(Wrap { trim: true })
            .block(panel(&villa.name)),
        area,
    );
}

fn villa_lines(villa: &Villa) -> Vec<Line<'static>> {
    let dim = Style::default().fg(COLOR_DIM);
    let mut lines = vec![
        Line::from(Span::styled(
            villa
                .price_per_night
                .map(|price| format!("{} per night", format_price(price)))
                .unwrap_or_else(|| "Rate on request".to_string()),
            Style::default().fg(COLOR_PRICE).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} bedroom(s) · up to {} guests", villa.bedrooms, villa.max_guests),
            dim,
        )),
        Line::default(),
        Line::from(Span::styled(villa.description.clone(), Style::default().fg(COLOR_HEADER))),
    ];
    if !villa.amenities.is_empty() {
        lines.push(Line::default());
        lines.extend(
            villa
                .amenities
                .iter()
                .map(|amenity| Line::from(Span::styled(format!("• {}", amenity), dim))),
        );
    }
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("[b]", Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)),
        Span::styled(" book this villa   ", dim),
        Span::styled("[esc]", Style::default().fg(COLOR_ACCENT)),
        Span::styled(" back", dim),
    ]));
    lines
}

pub fn render_booking(frame: &mut Frame, area: Rect, app: &App) {
    let (Some(villa), Some(form)) = (app.detail_villa(), app.booking.as_ref()) else {
        frame.render_widget(
            Paragraph::new(Span::styled("no villa selected", Style::default().fg(COLOR_DIM))),
            area,
        );
        return;
    };

    frame.render_widget(
        Paragraph::new(form_lines(form))
            .wrap(Wrap { trim: false })
            .block(panel(&format!("Book {}", villa.name))),
        area,
    );
}

fn form_lines(form: &BookingForm) -> Vec<Line<'static>> {
    let dim = Style::default().fg(COLOR_DIM);
    let mut lines = Vec::new();

    for field in FormField::ALL {
        let focused = form.focus() == field;
        let label_style = if focused {
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
        } else {
            dim
        };
        let mut value = vec![Span::styled(
            form.value(field).to_string(),
            Style::default().fg(COLOR_HEADER),
        )];
        if focused {
            value.push(Span::styled("_", Style::default().fg(COLOR_ACCENT)));
        }
        lines.push(Line::from(Span::styled(field.label(), label_style)));
        let mut row = vec![Span::raw("  ")];
        row.extend(value);
        lines.push(Line::from(row));
    }

    lines.push(Line::default());
    if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(error.clone(), Style::default().fg(COLOR_ERROR))));
    }
    if let Some(summary) = &form.summary {
        let total = summary
            .quote
            .total
            .map(format_price)
            .unwrap_or_else(|| "on request".to_string());
        lines.push(Line::from(Span::styled(
            format!(
                "✓ {} nights at {} for {} guest(s), total {}",
                summary.quote.nights, summary.villa_name, summary.guests, total
            ),
            Style::default().fg(COLOR_SUCCESS),
        )));
        lines.push(Line::from(Span::styled(
            format!("We will confirm by email to {}.", summary.email),
            dim,
        )));
    }
    lines.push(Line::from(Span::styled(
        "tab next field · enter submit · esc back",
        dim,
    )));
    lines
}

fn panel(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_unpriced_villa() {
        let villa = Villa {
            id: "v".to_string(),
            name: "V".to_string(),
            description: "Quiet".to_string(),
            price_per_night: None,
            max_guests: 2,
            bedrooms: 1,
            image_urls: Vec::new(),
            amenities: vec!["Garden".to_string()],
            created_at: None,
        };
        let text = text(&villa_lines(&villa));
        assert!(text.contains("Rate on request"));
        assert!(text.contains("• Garden"));
    }

    #[test]
    fn test_form_shows_error() {
        let mut form = BookingForm::new("v");
        form.error = Some("guest name is required".to_string());
        assert!(text(&form_lines(&form)).contains("guest name is required"));
    }
}
