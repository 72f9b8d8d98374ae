//! The question view: heading, text, optional illustration and two
//! independent option columns, one per physical quantity.
//!
//! The view never owns the answer. It draws whatever pair the container
//! passes in and reports selections through the `on_answer_change` callback,
//! always with the complete updated pair.

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::assets::{self, ImageInfo};
use crate::config::Config;
use crate::models::{Answer, Column, OptionId, Question};

const IMAGE_ALT: &str = "Question illustration";
const IMAGE_BLOCK_HEIGHT: u16 = 3;

/// Load state of the question illustration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ImageState {
    #[default]
    Pending,
    Loaded(ImageInfo),
    /// Terminal: the image and its frame stay hidden for the life of the view.
    Failed,
}

/// Transient state of one displayed question. A fresh view is created each
/// time the container switches question.
#[derive(Debug, Default)]
pub struct QuestionView {
    image: ImageState,
    focus: Column,
    cursor: [usize; 2],
    scroll: [usize; 2],
    option_areas: Vec<(Rect, OptionId)>,
}

impl QuestionView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> Column {
        self.focus
    }

    pub fn cursor(&self, column: Column) -> usize {
        self.cursor[column.index()]
    }

    pub fn image_state(&self) -> &ImageState {
        &self.image
    }

    /// Load-error event for the illustration.
    pub fn image_error(&mut self) {
        self.image = ImageState::Failed;
    }

    /// Screen area of an option in the last rendered frame.
    pub fn option_area(&self, id: OptionId) -> Option<Rect> {
        self.option_areas
            .iter()
            .find(|(_, candidate)| *candidate == id)
            .map(|(area, _)| *area)
    }

    fn load_image(&mut self, question: &Question, config: &Config) {
        if self.image != ImageState::Pending {
            return;
        }
        let Some(url) = question.image_url() else {
            return;
        };
        match assets::load_image(config, url) {
            Some(Ok(info)) => self.image = ImageState::Loaded(info),
            Some(Err(_)) => self.image_error(),
            None => {}
        }
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        question: &Question,
        answer: Answer,
        config: &Config,
    ) {
        self.option_areas.clear();
        self.load_image(question, config);

        let image = match (&self.image, question.image_url()) {
            (ImageState::Loaded(info), Some(_)) => Some(info.clone()),
            _ => None,
        };
        let image_height = if image.is_some() { IMAGE_BLOCK_HEIGHT } else { 0 };
        let text = question_text(&question.text);
        let text_height = text.line_count(area.width) as u16 + 1;

        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(text_height),
            Constraint::Length(image_height),
            Constraint::Fill(1),
        ])
        .split(area);

        render_heading(frame, chunks[0], question.number);
        frame.render_widget(text, chunks[1]);
        if let Some(info) = image {
            render_image(frame, chunks[2], &info);
        }

        let columns = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .spacing(1)
            .split(chunks[3]);
        for column in Column::ALL {
            self.render_column(frame, columns[column.index()], question, answer, column);
        }
    }

    fn render_column(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        question: &Question,
        answer: Answer,
        column: Column,
    ) {
        let focused = self.focus == column;
        let border = if focused { Color::Cyan } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .padding(Padding::horizontal(1))
            .title(Span::styled(
                question.quantity(column).to_string(),
                Style::default().fg(Color::White).bold(),
            ));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let selected = answer.get(column);
        let visible = inner.height as usize;
        let offset = self.follow_cursor(column, visible, question.options.len());
        let rows = question.options.iter().enumerate().skip(offset).take(visible);
        for (row, (index, option)) in rows.enumerate() {
            let row = inner.y + row as u16;
            let row_area = Rect::new(inner.x, row, inner.width, 1);

            let is_selected = selected == Some(option.value);
            let under_cursor = focused && self.cursor[column.index()] == index;
            let style = if is_selected {
                Style::default().fg(Color::Green).bold()
            } else if under_cursor {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::Gray)
            };
            let marker = if under_cursor { ">" } else { " " };
            let radio = if is_selected { "(•)" } else { "( )" };

            let line = Line::from(vec![
                Span::styled(format!("{} ", marker), style),
                Span::styled(format!("{} ", radio), style),
                Span::styled(option.label.as_str(), style),
            ]);
            frame.render_widget(Paragraph::new(line), row_area);
            self.option_areas.push((
                row_area,
                OptionId {
                    column,
                    value: option.value,
                },
            ));
        }
    }

    /// Scrolls `column` so its cursor is inside a window of `visible` rows.
    fn follow_cursor(&mut self, column: Column, visible: usize, count: usize) -> usize {
        let cursor = self.cursor[column.index()];
        let mut offset = self.scroll[column.index()];
        if visible == 0 {
            return offset;
        }
        if cursor < offset {
            offset = cursor;
        } else if cursor >= offset + visible {
            offset = cursor + 1 - visible;
        }
        offset = offset.min(count.saturating_sub(visible));
        self.scroll[column.index()] = offset;
        offset
    }

    /// Returns true if the key was consumed by the view.
    pub fn handle_key<F>(
        &mut self,
        key: KeyCode,
        question: &Question,
        answer: Answer,
        on_answer_change: F,
    ) -> bool
    where
        F: FnMut(Answer),
    {
        let count = question.options.len();
        if count == 0 {
            return false;
        }
        let column = self.focus;
        let cursor = self.cursor[column.index()].min(count - 1);

        match key {
            KeyCode::Left | KeyCode::Char('h') => self.focus = Column::First,
            KeyCode::Right | KeyCode::Char('l') => self.focus = Column::Second,
            KeyCode::Tab | KeyCode::BackTab => self.focus = column.other(),
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor[column.index()] = (cursor + count - 1) % count;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor[column.index()] = (cursor + 1) % count;
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let id = OptionId {
                    column,
                    value: question.options[cursor].value,
                };
                self.select(id, answer, on_answer_change);
            }
            KeyCode::Char(digit) if digit.is_ascii_digit() => {
                let position = digit
                    .to_digit(10)
                    .filter(|d| *d >= 1)
                    .map(|d| d as usize - 1)
                    .filter(|index| *index < count);
                let Some(index) = position else {
                    return false;
                };
                self.cursor[column.index()] = index;
                let id = OptionId {
                    column,
                    value: question.options[index].value,
                };
                self.select(id, answer, on_answer_change);
            }
            _ => return false,
        }
        true
    }

    /// Left click on an option rendered in the last frame selects it.
    pub fn handle_mouse<F>(
        &mut self,
        event: MouseEvent,
        question: &Question,
        answer: Answer,
        on_answer_change: F,
    ) -> bool
    where
        F: FnMut(Answer),
    {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return false;
        }
        let position = Position::new(event.column, event.row);
        let Some(id) = self
            .option_areas
            .iter()
            .find(|(area, _)| area.contains(position))
            .map(|(_, id)| *id)
        else {
            return false;
        };

        self.focus = id.column;
        if let Some(index) = question.options.iter().position(|o| o.value == id.value) {
            self.cursor[id.column.index()] = index;
        }
        self.select(id, answer, on_answer_change);
        true
    }

    fn select<F>(&self, id: OptionId, answer: Answer, mut on_answer_change: F)
    where
        F: FnMut(Answer),
    {
        if answer.get(id.column) == Some(id.value) {
            return;
        }
        on_answer_change(answer.with(id.column, id.value));
    }
}

fn render_heading(frame: &mut Frame, area: Rect, number: u32) {
    let widget = Paragraph::new(format!("Question {}", number))
        .fg(Color::Cyan)
        .bold();
    frame.render_widget(widget, area);
}

fn question_text(text: &str) -> Paragraph<'_> {
    Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .fg(Color::White)
}

fn render_image(frame: &mut Frame, area: Rect, info: &ImageInfo) {
    let content = Line::from(vec![
        Span::styled(info.url.as_str(), Style::default().fg(Color::Yellow)),
        Span::styled(
            format!("  {}x{}", info.width, info.height),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    let widget = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title(IMAGE_ALT)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}
