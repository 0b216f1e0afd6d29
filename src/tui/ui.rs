use ratatui::prelude::*;
use ratatui::widgets::{Block, Cell, Clear, Paragraph, Row, Table, Wrap};

use crate::tui::app::{App, InputMode};
use crate::tui::fields::{FieldId, FieldKind};
use crate::tui::theme;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < 8 || area.width < 40 {
        let msg = Paragraph::new("Terminal too small").alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    // Layout: Title(1) + Form(fill) + Status(1)
    let chunks = Layout::vertical([
        Constraint::Length(1), // Title bar
        Constraint::Fill(1),   // Form table
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    render_title(frame, chunks[0], app);
    render_form(frame, chunks[1], app);
    render_status_bar(frame, chunks[2], app);

    // Render overlays based on input mode
    match app.input_mode {
        InputMode::Help => render_help_popup(frame, app),
        InputMode::Result => render_result_popup(frame, app),
        InputMode::Breakdown => render_breakdown_popup(frame, app),
        InputMode::Normal | InputMode::Editing => {}
    }
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let left = "Manufacturing Performance";
    let mut spans = vec![Span::styled(
        left,
        Style::default().fg(theme::TITLE_COLOR).bold(),
    )];

    // Show the last score on the right once a prediction exists
    if let Some(result) = &app.result {
        let right = format!("last score: {}/100", result.score);
        let padding = (area.width as usize).saturating_sub(left.len() + right.len());
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(
            right,
            Style::default().fg(theme::band_color(result.band)),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_form(frame: &mut Frame, area: Rect, app: &mut App) {
    let mut rows: Vec<Row> = Vec::new();
    let mut selected_row = 0;
    let mut current_section = None;

    for (idx, field) in FieldId::ALL.iter().enumerate() {
        let section = field.section();
        if current_section != Some(section) {
            if current_section.is_some() {
                rows.push(Row::new(vec![Cell::from(""), Cell::from(""), Cell::from("")]));
            }
            rows.push(
                Row::new(vec![
                    Cell::from(section.title()).style(
                        Style::default().fg(theme::SECTION_COLOR).bold(),
                    ),
                    Cell::from(""),
                    Cell::from(""),
                ]),
            );
            current_section = Some(section);
        }

        if idx == app.selected {
            selected_row = rows.len();
        }
        rows.push(field_row(app, idx, *field));
    }

    let widths = [
        Constraint::Length(26), // Label (+ required mark)
        Constraint::Fill(1),    // Value
        Constraint::Length(12), // Unit
    ];

    let table = Table::new(rows, widths).row_highlight_style(theme::ROW_SELECTED);

    app.table_state.select(Some(selected_row));
    frame.render_stateful_widget(table, area, &mut app.table_state);
}

// Rows own their strings so the table can render against &mut TableState
fn field_row(app: &App, idx: usize, field: FieldId) -> Row<'static> {
    // Label with required mark
    let mut label_spans = vec![Span::raw(format!("  {}", field.label()))];
    if field.required() {
        label_spans.push(Span::styled(" *", Style::default().fg(theme::REQUIRED_MARK)));
    }

    // Value: the edit buffer while editing, otherwise the stored value or a
    // placeholder hint
    let editing = idx == app.selected && app.input_mode == InputMode::Editing;
    let value_span = if editing {
        Span::raw(format!("{}|", app.edit_buffer))
    } else {
        let value = field.get(&app.record);
        if value.is_empty() {
            let hint = match field.kind() {
                FieldKind::Select(_) => "(h/l to choose)",
                FieldKind::Derived => "(auto)",
                _ => "-",
            };
            Span::styled(hint, Style::default().fg(theme::PLACEHOLDER))
        } else if field.kind() == FieldKind::Derived {
            Span::styled(
                value.as_str().to_string(),
                Style::default().fg(theme::DERIVED_COLOR),
            )
        } else {
            Span::raw(value.as_str().to_string())
        }
    };

    let unit = field.unit().unwrap_or("");

    // Alternating row background (odd rows get subtle background)
    let row_style = if idx % 2 == 1 {
        Style::default().bg(theme::ROW_ALT_BG)
    } else {
        Style::default()
    };

    Row::new(vec![
        Cell::from(Line::from(label_spans)),
        Cell::from(value_span),
        Cell::from(Span::styled(unit, Style::default().fg(theme::UNIT_COLOR))),
    ])
    .style(row_style)
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let text = if let Some((ref msg, _)) = app.flash_message {
        let msg_color = if msg.starts_with("Required fields missing") || msg.starts_with("Failed")
        {
            theme::FLASH_ERROR
        } else {
            theme::FLASH_SUCCESS
        };
        Line::from(Span::styled(msg.clone(), Style::default().fg(msg_color)))
    } else {
        let hints: &[(&str, &str)] = match app.input_mode {
            InputMode::Editing => &[("Enter", ":apply "), ("Esc", ":cancel")],
            _ => &[
                ("j/k", ":nav "),
                ("Tab", ":section "),
                ("Enter", ":edit "),
                ("h/l", ":choose "),
                ("d", ":clear "),
                ("s", ":score "),
                ("r", ":reset "),
                ("?", ":help "),
                ("q", ":quit"),
            ],
        };

        let mut spans = Vec::new();
        for (key, label) in hints {
            spans.push(Span::styled(
                *key,
                Style::default().fg(theme::STATUS_KEY_COLOR),
            ));
            spans.push(Span::raw(*label));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(theme::STATUS_BAR_BG)),
        area,
    );
}

/// Create a centered rectangle with fixed width and height
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Render the prediction result popup
fn render_result_popup(frame: &mut Frame, app: &App) {
    let Some(result) = &app.result else {
        return;
    };

    let color = theme::band_color(result.band);
    let popup_area = centered_rect_fixed(56, 10, frame.area());

    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .title(" Prediction ")
        .border_style(Style::default().fg(color));
    frame.render_widget(block.clone(), popup_area);
    let inner = block.inner(popup_area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{}/100", result.score),
            Style::default().fg(color).bold(),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            result.band.category(),
            Style::default().fg(color).bold(),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(result.band.recommendation()).alignment(Alignment::Center),
        Line::from(""),
        Line::from(Span::styled(
            "b:breakdown  Esc:close",
            Style::default().fg(theme::MUTED),
        ))
        .alignment(Alignment::Center),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

/// Render the factor-by-factor breakdown popup
fn render_breakdown_popup(frame: &mut Frame, app: &App) {
    let Some(result) = &app.result else {
        return;
    };
    let breakdown = &result.breakdown;

    let height = (breakdown.factors.len() as u16) + 7;
    let popup_area = centered_rect_fixed(66, height, frame.area());

    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .title(" Score Breakdown ")
        .border_style(Style::default().fg(theme::POPUP_BORDER));
    frame.render_widget(block.clone(), popup_area);
    let inner = block.inner(popup_area);

    let mut lines = vec![Line::from(format!("{:<52}{:>8.1}", "Base score", breakdown.base))];
    for factor in &breakdown.factors {
        let delta = factor.after - factor.before;
        let color = if delta < 0.0 {
            theme::FLASH_ERROR
        } else {
            theme::FLASH_SUCCESS
        };
        lines.push(Line::from(Span::styled(
            format!(
                "{:<22}{:<30}{:>8.1}",
                factor.label, factor.detail, factor.after
            ),
            Style::default().fg(color),
        )));
    }
    if breakdown.factors.is_empty() {
        lines.push(Line::from(Span::styled(
            "No optional metrics present",
            Style::default().fg(theme::MUTED),
        )));
    }
    lines.push(Line::from(format!("{:<52}{:>8.1}", "Raw total", breakdown.raw)));
    lines.push(Line::from(format!("{:<52}{:>8}", "Final (0-100)", result.score)));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Esc to go back",
        Style::default().fg(theme::MUTED),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Render the help overlay: keys plus guidance for the selected field
fn render_help_popup(frame: &mut Frame, app: &App) {
    let popup_area = centered_rect_fixed(64, 20, frame.area());

    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .title(" Help ")
        .border_style(Style::default().fg(theme::POPUP_BORDER));
    frame.render_widget(block.clone(), popup_area);
    let inner = block.inner(popup_area);

    let key_style = Style::default().fg(Color::Cyan).bold();
    let mut lines = vec![
        Line::from(vec![Span::styled("j / k         ", key_style), Span::raw("Move between fields")]),
        Line::from(vec![Span::styled("Tab / S-Tab   ", key_style), Span::raw("Jump between sections")]),
        Line::from(vec![Span::styled("Enter         ", key_style), Span::raw("Edit field (or cycle a choice)")]),
        Line::from(vec![Span::styled("h / l         ", key_style), Span::raw("Step through choices")]),
        Line::from(vec![Span::styled("d             ", key_style), Span::raw("Clear field")]),
        Line::from(vec![Span::styled("s             ", key_style), Span::raw("Score the form")]),
        Line::from(vec![Span::styled("r             ", key_style), Span::raw("Reset the form")]),
        Line::from(vec![Span::styled("q / Ctrl-c    ", key_style), Span::raw("Quit")]),
        Line::from(""),
    ];

    // Guidance for the field under the cursor
    let field = app.selected_field();
    let help = crate::help::field_help(field);
    lines.push(Line::from(Span::styled(
        field.label(),
        Style::default().fg(theme::SECTION_COLOR).bold(),
    )));
    lines.push(Line::from(help.what));
    if let Some(how) = help.how {
        lines.push(Line::from(Span::styled(how, Style::default().fg(Color::Yellow))));
    }
    if let Some(example) = help.example {
        lines.push(Line::from(Span::styled(
            format!("e.g. {}", example),
            Style::default().fg(theme::MUTED),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(theme::MUTED),
    )));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
