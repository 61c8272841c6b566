use super::app::{App, InputMode, Message};
use super::map_widget::TERMINAL_ATTRIBUTION;
use super::theme::theme;
use super::ui_modals::{draw_delete_confirm, draw_form_modal};
use super::ui_utils;
use crate::map::MapCanvas;
use crate::storage::KeyValueSlot;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::{Marker, border},
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, Paragraph, Wrap,
        canvas::{Canvas, Map, MapResolution},
    },
};

const SIDE_PANEL_WIDTH: u16 = 36;

pub fn draw<S: KeyValueSlot>(f: &mut Frame, app: &mut App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Map and side panel
            Constraint::Length(1), // Footer
        ])
        .split(f.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(SIDE_PANEL_WIDTH)])
        .split(chunks[0]);

    draw_map(f, app, body[0]);
    draw_side_panel(f, app, body[1]);
    draw_footer(f, app, chunks[1]);

    if app.show_help {
        draw_help_popup(f);
    }

    match app.input_mode {
        InputMode::Form => draw_form_modal(f, app),
        InputMode::DeleteConfirm => draw_delete_confirm(f, app),
        InputMode::Normal => {}
    }
}

fn draw_map<S: KeyValueSlot>(f: &mut Frame, app: &mut App<S>, area: Rect) {
    let t = theme();
    let focused = app.input_mode == InputMode::Normal;

    let block = Block::default()
        .title(format!(
            " Sentimental Atlas · zoom {} · {} pins ",
            app.map().view().zoom,
            app.map().pins().len()
        ))
        .title_bottom(Line::from(format!(" {} ", TERMINAL_ATTRIBUTION)).right_aligned())
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(t.border_style(focused));

    // Mouse clicks are resolved against the area of the last draw
    app.map_mut().set_area(block.inner(area));

    let map = app.map();
    let view = map.view();
    let cursor = map.cursor();
    let selected = map.selected().map(|p| p.handle);

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds(view.x_bounds())
        .y_bounds(view.y_bounds())
        .paint(|ctx| {
            ctx.draw(&Map {
                resolution: MapResolution::High,
                color: t.map_outline,
            });
            ctx.layer();

            for pin in map.pins() {
                if !view.contains(pin.at) {
                    continue;
                }
                let style = t.pin_style(Some(pin.handle) == selected);
                ctx.print(pin.at.lng, pin.at.lat, Span::styled("●", style));
            }

            if view.contains(cursor) {
                ctx.print(
                    cursor.lng,
                    cursor.lat,
                    Span::styled(
                        "+",
                        Style::default().fg(t.cursor).add_modifier(Modifier::BOLD),
                    ),
                );
            }
        });

    f.render_widget(canvas, area);
}

fn draw_side_panel<S: KeyValueSlot>(f: &mut Frame, app: &App<S>, area: Rect) {
    let t = theme();
    let map = app.map();

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Cursor  ", Style::default().fg(t.text_muted)),
            Span::styled(map.cursor().to_string(), Style::default().fg(t.cursor)),
        ]),
        Line::from(""),
    ];

    let title = match map.selected() {
        Some(pin) => {
            let popup = &pin.popup;
            let heading = if popup.title.is_empty() {
                "(untitled)".to_string()
            } else {
                popup.title.clone()
            };
            lines.push(Line::from(Span::styled(
                heading,
                Style::default()
                    .fg(t.popup_title)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(vec![
                Span::styled("Date: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(popup.date_label.clone(), Style::default().fg(t.popup_date)),
            ]));
            lines.push(Line::from(Span::styled(
                pin.at.to_string(),
                Style::default().fg(t.text_muted),
            )));
            lines.push(Line::from(""));
            for story_line in popup.story.lines() {
                lines.push(Line::from(Span::styled(
                    story_line.to_string(),
                    Style::default().fg(t.text),
                )));
            }
            if let Some(url) = &popup.image_url {
                lines.push(Line::from(""));
                lines.push(Line::from(vec![
                    Span::styled("Photo: ", Style::default().add_modifier(Modifier::BOLD)),
                    Span::styled(
                        ui_utils::truncate(url, usize::from(SIDE_PANEL_WIDTH) * 3),
                        Style::default().fg(t.popup_photo),
                    ),
                ]));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("d", Style::default().fg(t.help_key)),
                Span::raw(": "),
                Span::styled(
                    "Delete Memory",
                    Style::default()
                        .fg(t.popup_delete)
                        .add_modifier(Modifier::UNDERLINED),
                ),
            ]));
            format!(" Memory {} ", pin.memory_id())
        }
        None => {
            let hint = if map.pins().is_empty() {
                "No memories yet."
            } else {
                "No memory selected."
            };
            lines.push(Line::from(Span::styled(
                hint,
                Style::default().fg(t.text_muted),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Enter or click the map to pin a memory. Tab cycles through pins.",
                Style::default().fg(t.text_muted),
            )));
            " Memory ".to_string()
        }
    };

    let panel = Paragraph::new(lines)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .border_style(t.border_style(false)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(panel, area);
}

fn draw_footer<S: KeyValueSlot>(f: &mut Frame, app: &App<S>, area: Rect) {
    let t = theme();
    let mode_indicator = match app.input_mode {
        InputMode::Normal => Span::styled(
            " NORMAL ",
            Style::default().bg(t.mode_normal.0).fg(t.mode_normal.1),
        ),
        InputMode::Form => Span::styled(
            " NEW MEMORY ",
            Style::default().bg(t.mode_form.0).fg(t.mode_form.1),
        ),
        InputMode::DeleteConfirm => Span::styled(
            " DELETE ",
            Style::default().bg(t.mode_delete.0).fg(t.mode_delete.1),
        ),
    };

    let help_text = match app.input_mode {
        InputMode::Normal => {
            " ←↓↑→:move  +/-:zoom  Enter:pin  Tab:next pin  d:delete  ?:help  q:quit "
        }
        InputMode::Form => " Tab:next field  Enter:save  Esc:cancel ",
        InputMode::DeleteConfirm => " y/Enter:confirm  n/Esc:cancel ",
    };

    let mut footer_spans = vec![mode_indicator];

    match &app.message {
        Some(Message::Info(msg)) => {
            footer_spans.push(Span::raw(" "));
            footer_spans.push(Span::styled(
                msg.clone(),
                Style::default().fg(t.message).add_modifier(Modifier::BOLD),
            ));
        }
        Some(Message::Error(msg)) => {
            footer_spans.push(Span::raw(" "));
            footer_spans.push(Span::styled(
                msg.clone(),
                Style::default().fg(t.error).add_modifier(Modifier::BOLD),
            ));
        }
        None => {}
    }

    footer_spans.push(Span::styled(help_text, Style::default().fg(t.text_muted)));

    f.render_widget(Paragraph::new(Line::from(footer_spans)), area);
}

fn help_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<10}", key), Style::default().fg(theme().help_key)),
        Span::raw(description),
    ])
}

fn draw_help_popup(f: &mut Frame) {
    let area = ui_utils::centered_rect(60, 70, f.area());
    let t = theme();
    let heading = |text: &'static str| {
        Line::from(Span::styled(
            text,
            Style::default().add_modifier(Modifier::UNDERLINED),
        ))
    };

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        heading("Map"),
        help_line("←↓↑→ hjkl", "Move cursor (Shift for larger steps)"),
        help_line("C-←↓↑→", "Pan the map"),
        help_line("+/-", "Zoom in/out"),
        help_line("Click", "Pin a memory or select a pin"),
        help_line("Scroll", "Zoom in/out"),
        Line::from(""),
        heading("Memories"),
        help_line("Enter/a", "New memory at cursor"),
        help_line("Tab/n", "Select next pin"),
        help_line("S-Tab/N", "Select previous pin"),
        help_line("f", "Center on selected pin"),
        help_line("d/Del", "Delete selected memory"),
        help_line("r", "Reload from storage"),
        Line::from(""),
        help_line("?", "Toggle help"),
        help_line("Esc", "Close / Deselect"),
        help_line("q", "Quit"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .border_style(Style::default().fg(t.help_border)),
        )
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(help, area);
}
