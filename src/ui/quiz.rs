use ratatui::{prelude::*, widgets::Paragraph};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_progress(frame, chunks[0], app);

    let (view, question, answer, config) = app.view_parts();
    view.render(frame, chunks[1], question, answer, config);

    render_controls(frame, chunks[2]);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let progress = format!(
        "{}/{}",
        app.current_question_number(),
        app.total_questions()
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new(
        "←/→ column  ·  j/k move  ·  enter select  ·  n/p question  ·  f finish  ·  q quit",
    )
    .alignment(Alignment::Center)
    .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
