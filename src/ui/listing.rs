//! Paginated listing screens: search bar, rows and the page bar.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::helpers::{format_price, truncate_to_width};
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_PRICE,
    COLOR_SELECTED_BG,
};
use crate::app::{App, InputMode, LoadStatus};
use crate::catalog::Catalog;
use crate::models::{Amenity, Listing, Offer, Villa};
use crate::pagination::{PageMarker, PageNav};

/// Rows each listing entry occupies.
const LINES_PER_ITEM: usize = 3;

/// How a record is summarised in a listing.
pub trait ListingRow: Listing {
    /// Right-aligned detail on the title line (price, category).
    fn badge(&self) -> Option<String>;
    fn subtitle(&self) -> String;
}

impl ListingRow for Offer {
    fn badge(&self) -> Option<String> {
        match (&self.discount, self.price) {
            (Some(discount), Some(price)) => Some(format!("{} · {}", discount, format_price(price))),
            (Some(discount), None) => Some(discount.clone()),
            (None, Some(price)) => Some(format_price(price)),
            (None, None) => None,
        }
    }

    fn subtitle(&self) -> String {
        self.description.clone()
    }
}

impl ListingRow for Amenity {
    fn badge(&self) -> Option<String> {
        self.category.clone()
    }

    fn subtitle(&self) -> String {
        self.description.clone()
    }
}

impl ListingRow for Villa {
    fn badge(&self) -> Option<String> {
        self.price_per_night
            .map(|price| format!("{} / night", format_price(price)))
    }

    fn subtitle(&self) -> String {
        format!(
            "{} bed · sleeps {} · {}",
            self.bedrooms, self.max_guests, self.description
        )
    }
}

pub fn render_listing<T: ListingRow>(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    catalog: &Catalog<T>,
    status: &LoadStatus,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // search
            Constraint::Length(1), // sort + count
            Constraint::Length(1),
            Constraint::Min(3), // rows
            Constraint::Length(1), // pages
        ])
        .split(area);

    render_search_bar(frame, chunks[0], catalog.query(), app.input_mode == InputMode::Search);

    let summary = format!(
        "{} result{} · sort: {}",
        catalog.match_count(),
        if catalog.match_count() == 1 { "" } else { "s" },
        catalog.sort().label()
    );
    frame.render_widget(
        Paragraph::new(Span::styled(summary, Style::default().fg(COLOR_DIM))),
        chunks[1],
    );

    render_rows(frame, chunks[3], app.selected, catalog, status);
    frame.render_widget(
        Paragraph::new(pagination_line(catalog.nav())).alignment(Alignment::Center),
        chunks[4],
    );
}

fn render_search_bar(frame: &mut Frame, area: Rect, query: &str, editing: bool) {
    let mut spans = vec![Span::styled("search: ", Style::default().fg(COLOR_DIM))];
    if query.is_empty() && !editing {
        spans.push(Span::styled("press / to search", Style::default().fg(COLOR_DIM)));
    } else {
        spans.push(Span::styled(query.to_string(), Style::default().fg(COLOR_HEADER)));
        if editing {
            spans.push(Span::styled(
                "_",
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::SLOW_BLINK),
            ));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_rows<T: ListingRow>(
    frame: &mut Frame,
    area: Rect,
    selected: usize,
    catalog: &Catalog<T>,
    status: &LoadStatus,
) {
    let placeholder = match status {
        LoadStatus::Loading => Some(("loading...".to_string(), COLOR_DIM)),
        LoadStatus::Failed(message) => Some((message.clone(), COLOR_ERROR)),
        LoadStatus::Ready if catalog.match_count() == 0 => {
            let text = if catalog.query().is_empty() {
                "nothing to show yet"
            } else {
                "no results"
            };
            Some((text.to_string(), COLOR_DIM))
        }
        LoadStatus::Ready => None,
    };
    if let Some((text, color)) = placeholder {
        frame.render_widget(
            Paragraph::new(Span::styled(text, Style::default().fg(color))),
            area,
        );
        return;
    }

    let width = area.width as usize;
    let fits = (area.height as usize / LINES_PER_ITEM).max(1);
    for (offset, item) in catalog.visible().into_iter().take(fits).enumerate() {
        let row = Rect::new(
            area.x,
            area.y + (offset * LINES_PER_ITEM) as u16,
            area.width,
            (LINES_PER_ITEM as u16 - 1).min(area.height),
        );
        let is_selected = offset == selected;
        let style = if is_selected {
            Style::default().bg(COLOR_SELECTED_BG)
        } else {
            Style::default()
        };

        let badge = item.badge().unwrap_or_default();
        let title_width = width.saturating_sub(badge.chars().count() + 4);
        let marker = if is_selected { "▸ " } else { "  " };
        let title = Line::from(vec![
            Span::styled(marker, Style::default().fg(COLOR_ACCENT)),
            Span::styled(
                truncate_to_width(item.title(), title_width),
                Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(badge, Style::default().fg(COLOR_PRICE)),
        ]);
        let subtitle = Line::from(Span::styled(
            format!("  {}", truncate_to_width(&item.subtitle(), width.saturating_sub(2))),
            Style::default().fg(COLOR_DIM),
        ));
        frame.render_widget(Paragraph::new(vec![title, subtitle]).style(style), row);
    }

    let divider = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(COLOR_BORDER));
    let bottom = Rect::new(area.x, area.y + area.height.saturating_sub(1), area.width, 1);
    frame.render_widget(divider, bottom);
}

/// The page bar: previous control, page numbers with gaps, next control.
///
/// Disabled controls are dimmed and the current page is highlighted.
pub fn pagination_line(nav: &PageNav) -> Line<'static> {
    let enabled = Style::default().fg(COLOR_HEADER);
    let disabled = Style::default().fg(COLOR_DIM);

    let mut spans = vec![Span::styled(
        "‹ prev",
        if nav.can_go_previous() { enabled } else { disabled },
    )];
    for marker in nav.markers() {
        spans.push(Span::raw("  "));
        spans.push(match marker {
            PageMarker::Number(page) if page == nav.current_page() => Span::styled(
                format!("[{}]", page),
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            ),
            PageMarker::Number(page) => Span::styled(page.to_string(), enabled),
            PageMarker::Ellipsis => Span::styled("…", disabled),
        });
    }
    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        "next ›",
        if nav.can_go_next() { enabled } else { disabled },
    ));
    Line::from(spans)
}
