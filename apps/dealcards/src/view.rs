//! Drawing: input box, status line, card grid.

use std::time::Instant;

use dealcards_cards::{Card, Frame as CardFrame, PlacedCard};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

const COLUMNS: usize = 2;
const CARD_HEIGHT: u16 = 7;

/// Slide distance that maps to one terminal row.
const OFFSET_PER_ROW: f32 = 10.0;

const BACKGROUND: Color = Color::Rgb(24, 24, 28);
const TEXT: Color = Color::Rgb(230, 230, 235);
const MUTED: Color = Color::Rgb(140, 140, 150);
const PRICE: Color = Color::Rgb(46, 204, 113);
const ACCENT: Color = Color::Rgb(241, 196, 15);

pub fn draw(frame: &mut Frame, app: &App, now: Instant) {
    let [input_area, status_area, cards_area, help_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let input = Paragraph::new(app.input.value()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Search games "),
    );
    frame.render_widget(input, input_area);
    frame.set_cursor_position((
        cursor_column(input_area, app.input.value()),
        input_area.y.saturating_add(1),
    ));

    frame.render_widget(
        Paragraph::new(app.board.status()).style(Style::default().fg(MUTED)),
        status_area,
    );

    draw_cards(frame, app, cards_area, now);

    frame.render_widget(
        Paragraph::new("Enter search · ↑↓ select · Ctrl-O open deal · Esc quit")
            .style(Style::default().fg(MUTED).add_modifier(Modifier::DIM)),
        help_area,
    );
}

/// Cursor column after `value` inside a bordered box, kept on the last
/// inner column once the text overflows.
fn cursor_column(area: Rect, value: &str) -> u16 {
    let width = u16::try_from(value.width()).unwrap_or(u16::MAX);
    area.x
        .saturating_add(1)
        .saturating_add(width)
        .min(area.right().saturating_sub(2))
}

/// Whether the terminal renders the RGB fade.
///
/// Without 24-bit color the blended colors get quantized and cards pop in
/// anyway, so the entrance animation is skipped.
pub fn supports_fade(colorterm: Option<&str>) -> bool {
    colorterm.is_some_and(|v| {
        v.eq_ignore_ascii_case("truecolor") || v.eq_ignore_ascii_case("24bit")
    })
}

fn draw_cards(frame: &mut Frame, app: &App, area: Rect, now: Instant) {
    let cards = app.board.cards();
    if cards.is_empty() || area.height < CARD_HEIGHT {
        return;
    }

    let visible_rows = (area.height / CARD_HEIGHT) as usize;
    let selected_row = app.selected / COLUMNS;
    let first_row = (selected_row + 1).saturating_sub(visible_rows);

    let column_width = area.width / COLUMNS as u16;
    for (index, placed) in cards.iter().enumerate() {
        let row = index / COLUMNS;
        if row < first_row || row >= first_row + visible_rows {
            continue;
        }
        let slot = Rect {
            x: area.x + (index % COLUMNS) as u16 * column_width,
            y: area.y + (row - first_row) as u16 * CARD_HEIGHT,
            width: column_width,
            height: CARD_HEIGHT,
        };
        draw_card(frame, placed, index == app.selected, slot, area, now);
    }
}

fn draw_card(
    frame: &mut Frame,
    placed: &PlacedCard,
    selected: bool,
    slot: Rect,
    bounds: Rect,
    now: Instant,
) {
    let state = placed.frame_at(now);
    if state.opacity <= 0.01 {
        return;
    }

    let rect = slot_offset(slot, state).intersection(bounds);
    if rect.is_empty() {
        return;
    }

    let card = &placed.card;
    let fade = |color: Color| fade_color(color, state.opacity);
    let border = if selected { ACCENT } else { MUTED };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(fade(border)));

    frame.render_widget(
        Paragraph::new(card_lines(card, selected, &fade)).block(block),
        rect,
    );
}

fn card_lines<'a>(card: &'a Card, selected: bool, fade: &dyn Fn(Color) -> Color) -> Vec<Line<'a>> {
    let thumb = if card.thumb.is_empty() {
        Span::styled("[no image]", Style::default().fg(fade(MUTED)))
    } else {
        Span::styled(card.thumb.as_str(), Style::default().fg(fade(MUTED)))
    };

    let mut bottom = vec![
        Span::styled("Cheapest price: ", Style::default().fg(fade(TEXT))),
        Span::styled(
            card.price.as_str(),
            Style::default().fg(fade(PRICE)).add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(deal) = &card.deal {
        let label = if selected {
            format!("  {} ↗ (Ctrl-O)", deal.label)
        } else {
            format!("  {} ↗", deal.label)
        };
        bottom.push(Span::styled(label, Style::default().fg(fade(ACCENT))));
    }

    vec![
        Line::from(Span::styled(
            card.title.as_str(),
            Style::default().fg(fade(TEXT)).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            card.steam_line.as_str(),
            Style::default().fg(fade(MUTED)),
        )),
        Line::from(thumb),
        Line::from(""),
        Line::from(bottom),
    ]
}

/// Moves a card slot down by its remaining slide offset.
fn slot_offset(slot: Rect, state: CardFrame) -> Rect {
    let rows = (state.offset_y.max(0.0) / OFFSET_PER_ROW).round() as u16;
    Rect {
        y: slot.y.saturating_add(rows),
        ..slot
    }
}

/// Blends `color` toward the background by `1 - opacity`.
fn fade_color(color: Color, opacity: f32) -> Color {
    let t = opacity.clamp(0.0, 1.0);
    match (BACKGROUND, color) {
        (Color::Rgb(br, bg, bb), Color::Rgb(r, g, b)) => Color::Rgb(
            lerp_channel(br, r, t),
            lerp_channel(bg, g, t),
            lerp_channel(bb, b, t),
        ),
        _ => color,
    }
}

fn lerp_channel(from: u8, to: u8, t: f32) -> u8 {
    (from as f32 + (to as f32 - from as f32) * t).round() as u8
}
