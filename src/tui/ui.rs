use ratatui::prelude::*;
use ratatui::widgets::{Block, Clear, Gauge, List, ListItem, ListState, Paragraph, Wrap};

use crate::tui::app::{InputMode, QuizApp};

const OPTION_KEYS: [char; 6] = ['A', 'B', 'C', 'D', 'E', 'F'];

pub fn draw(frame: &mut Frame, app: &QuizApp) {
    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < 12 || area.width < 40 {
        let msg = Paragraph::new("Terminal too small").alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    // Layout: Title(1) + Gauge(1) + gap + Prompt(3) + Options(fill) + Status(1)
    let chunks = Layout::vertical([
        Constraint::Length(1), // Title bar
        Constraint::Length(1), // Progress gauge
        Constraint::Length(1), // Spacer
        Constraint::Length(3), // Question prompt
        Constraint::Fill(1),   // Options
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    render_title(frame, chunks[0], app);
    render_progress(frame, chunks[1], app);
    render_prompt(frame, chunks[3], app);
    render_options(frame, chunks[4], app);
    render_status_bar(frame, chunks[5], app);

    if app.input_mode == InputMode::Help {
        render_help_popup(frame, app);
    }
}

fn render_title(frame: &mut Frame, area: Rect, app: &QuizApp) {
    let title = "Disha Career Quiz";
    let counter = format!(
        "Question {} of {}",
        app.current + 1,
        app.question_count()
    );
    let padding_len = (area.width as usize).saturating_sub(title.len() + counter.len());

    let line = Line::from(vec![
        Span::styled(title, Style::default().fg(app.theme.title_color).bold()),
        Span::raw(" ".repeat(padding_len)),
        Span::styled(counter, Style::default().fg(app.theme.muted)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &QuizApp) {
    let label = format!("{}/{} answered", app.answered_count(), app.question_count());
    let gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(app.theme.gauge_filled)
                .bg(app.theme.gauge_empty),
        )
        .ratio(app.progress_ratio().clamp(0.0, 1.0))
        .label(label);
    frame.render_widget(gauge, area);
}

fn render_prompt(frame: &mut Frame, area: Rect, app: &QuizApp) {
    let Some(question) = app.current_question() else {
        return;
    };

    let mut spans = vec![Span::styled(question.prompt, app.theme.prompt_style)];
    if question.weighted {
        spans.push(Span::styled(
            "  (counts extra)",
            Style::default().fg(app.theme.weighted_marker),
        ));
    }

    let prompt = Paragraph::new(Line::from(spans)).wrap(Wrap { trim: true });
    frame.render_widget(prompt, area);
}

fn render_options(frame: &mut Frame, area: Rect, app: &QuizApp) {
    let Some(question) = app.current_question() else {
        return;
    };
    let answered = app.current_answer();

    let items: Vec<ListItem> = question
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let key = OPTION_KEYS.get(i).copied().unwrap_or('?');
            let is_answer = answered == Some(option.category);
            let marker = if is_answer { "● " } else { "  " };
            let text_color = if is_answer {
                app.theme.option_answered
            } else {
                app.theme.option_text
            };

            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(app.theme.option_answered)),
                Span::styled(
                    format!("{}) ", key),
                    Style::default().fg(app.theme.option_key).bold(),
                ),
                Span::styled(option.text, Style::default().fg(text_color)),
            ]))
        })
        .collect();

    let list = List::new(items).highlight_style(app.theme.option_selected);
    let mut state = ListState::default().with_selected(Some(app.cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &QuizApp) {
    let text = if let Some((ref msg, _)) = app.flash_message {
        Line::from(Span::styled(
            msg.clone(),
            Style::default().fg(app.theme.flash_info),
        ))
    } else {
        let hints = [
            ("A-F", ":answer "),
            ("j/k", ":move "),
            ("Enter", ":select "),
            ("Left", ":back "),
            ("?", ":help "),
            ("q", ":quit"),
        ];

        let mut spans = Vec::new();
        for (i, (key, label)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                *key,
                Style::default().fg(app.theme.status_key_color),
            ));
            spans.push(Span::raw(*label));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(app.theme.status_bar_bg)),
        area,
    );
}

/// Create a centered rectangle with fixed width and height
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    // Clamp dimensions to area bounds
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

/// Render the help overlay popup
fn render_help_popup(frame: &mut Frame, app: &QuizApp) {
    let popup_area = centered_rect_fixed(50, 13, frame.area());

    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .title(" Keyboard Shortcuts ")
        .title_style(app.theme.popup_title)
        .border_style(Style::default().fg(app.theme.popup_border))
        .style(Style::default().bg(app.theme.popup_bg));
    frame.render_widget(block.clone(), popup_area);

    let inner = block.inner(popup_area);

    let key_style = Style::default().fg(app.theme.status_key_color).bold();
    let rows = [
        ("a-f / 1-6     ", "Answer with that option"),
        ("j / Down      ", "Highlight next option"),
        ("k / Up        ", "Highlight previous option"),
        ("Enter / Space ", "Answer with highlighted option"),
        ("Left / p      ", "Previous question"),
        ("Right / n     ", "Next question (if answered)"),
        ("?             ", "Show/hide this help"),
        ("q / Esc       ", "Quit without scoring"),
    ];
    let mut help_lines: Vec<Line> = rows
        .iter()
        .map(|(key, desc)| Line::from(vec![Span::styled(*key, key_style), Span::raw(*desc)]))
        .collect();
    help_lines.push(Line::from(""));
    help_lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(app.theme.muted),
    )));

    frame.render_widget(Paragraph::new(help_lines), inner);
}
