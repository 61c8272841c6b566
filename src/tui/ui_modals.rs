use super::app::App;
use super::theme::theme;
use super::ui_utils;
use crate::controller::DELETE_PROMPT;
use crate::form::{FormField, MemoryForm};
use crate::storage::KeyValueSlot;
use ratatui::{
    Frame,
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

fn placeholder(field: FormField) -> &'static str {
    match field {
        FormField::Title => "Where were you?",
        FormField::Date => "YYYY-MM-DD (optional)",
        FormField::Story => "What happened here...",
        FormField::PhotoUrl => "https://... (optional)",
    }
}

fn field_lines(form: &MemoryForm, field: FormField) -> Vec<Line<'static>> {
    let t = theme();
    let active = form.focus() == field;
    let value = form.fields.get(field);

    let label_style = if active {
        Style::default()
            .fg(t.modal_cursor)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(t.text).add_modifier(Modifier::BOLD)
    };

    let mut lines = Vec::new();
    let mut value_lines = value.split('\n');
    let first = value_lines.next().unwrap_or("");

    let first_span = if value.is_empty() {
        Span::styled(placeholder(field), Style::default().fg(t.text_muted))
    } else {
        Span::raw(first.to_string())
    };

    lines.push(Line::from(vec![
        Span::styled(
            if active { "▶ " } else { "  " },
            Style::default().fg(t.modal_cursor),
        ),
        Span::styled(format!("{:<10} ", field.label()), label_style),
        first_span,
    ]));
    for rest in value_lines {
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(13)),
            Span::raw(rest.to_string()),
        ]));
    }
    if active && let Some(last) = lines.last_mut() {
        last.spans
            .push(Span::styled("_", Style::default().fg(t.modal_cursor)));
    }
    lines.push(Line::from(""));
    lines
}

pub fn draw_form_modal<S: KeyValueSlot>(f: &mut Frame, app: &App<S>) {
    let area = ui_utils::centered_rect(60, 50, f.area());
    let t = theme();
    let form = app.form();

    let title = match form.pending() {
        Some(at) => format!(" New memory at {} ", at),
        None => " New memory ".to_string(),
    };

    let mut content = vec![Line::from("")];
    for field in FormField::ALL {
        content.extend(field_lines(form, field));
    }
    content.push(Line::from(Span::styled(
        "  Enter: save   Tab: next field   Alt+Enter: new line   Esc: cancel",
        Style::default().fg(t.text_muted),
    )));

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .border_style(Style::default().fg(t.modal_border_create)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

pub fn draw_delete_confirm<S: KeyValueSlot>(f: &mut Frame, app: &App<S>) {
    let area = ui_utils::centered_rect(50, 20, f.area());
    let t = theme();

    let item_info = match app.selected_pin() {
        Some(pin) if !pin.popup.title.is_empty() => {
            format!("{} - {}", pin.memory_id(), pin.popup.title)
        }
        Some(pin) => pin.memory_id().to_string(),
        None => "No memory selected".to_string(),
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            DELETE_PROMPT,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(item_info, Style::default().fg(t.popup_title))),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "y",
                Style::default()
                    .fg(t.border_focused)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("/Enter = Yes    "),
            Span::styled(
                "n",
                Style::default()
                    .fg(t.modal_border_delete)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("/Esc = No"),
        ]),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Delete Confirmation ")
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .border_style(Style::default().fg(t.modal_border_delete)),
        )
        .alignment(ratatui::layout::Alignment::Center);

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}
