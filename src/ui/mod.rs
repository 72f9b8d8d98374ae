mod question;
mod quiz;
mod summary;
mod welcome;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::AppState;

pub use question::{ImageState, QuestionView};

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.state {
        AppState::Welcome => welcome::render(frame, area, app.total_questions()),
        AppState::Quiz => quiz::render(frame, area, app),
        AppState::Summary => summary::render(frame, area, app),
    }
}
