use crossterm::event::{KeyCode, MouseEvent};
use log::debug;

use crate::config::Config;
use crate::models::{Answer, AppState, Question};
use crate::ui::QuestionView;

/// Owns the question bank and one answer pair per question.
pub struct App {
    pub state: AppState,
    config: Config,
    questions: Vec<Question>,
    answers: Vec<Answer>,
    current_question_index: usize,
    view: QuestionView,
    summary_scroll: usize,
}

impl App {
    /// `questions` must not be empty.
    pub fn with_questions(questions: Vec<Question>, config: Config) -> Self {
        let num_questions = questions.len();

        Self {
            state: AppState::Welcome,
            config,
            questions,
            answers: vec![Answer::default(); num_questions],
            current_question_index: 0,
            view: QuestionView::new(),
            summary_scroll: 0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_question_index]
    }

    pub fn current_answer(&self) -> Answer {
        self.answers[self.current_question_index]
    }

    pub fn current_question_number(&self) -> usize {
        self.current_question_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn view(&self) -> &QuestionView {
        &self.view
    }

    /// Everything the question view needs to draw the current question.
    pub fn view_parts(&mut self) -> (&mut QuestionView, &Question, Answer, &Config) {
        let index = self.current_question_index;
        (
            &mut self.view,
            &self.questions[index],
            self.answers[index],
            &self.config,
        )
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|answer| answer.is_complete()).count()
    }

    pub fn start_quiz(&mut self) {
        self.state = AppState::Quiz;
        self.show_question(0);
    }

    pub fn next_question(&mut self) {
        if self.current_question_index + 1 < self.questions.len() {
            self.show_question(self.current_question_index + 1);
        }
    }

    pub fn previous_question(&mut self) {
        if self.current_question_index > 0 {
            self.show_question(self.current_question_index - 1);
        }
    }

    pub fn finish(&mut self) {
        debug!(
            "[Quiz] Finished with {}/{} answered",
            self.answered_count(),
            self.total_questions()
        );
        self.state = AppState::Summary;
        self.summary_scroll = 0;
    }

    /// Back from the summary to the first question, keeping answers.
    pub fn review(&mut self) {
        self.state = AppState::Quiz;
        self.show_question(0);
    }

    pub fn restart(&mut self) {
        self.state = AppState::Welcome;
        self.answers = vec![Answer::default(); self.questions.len()];
        self.summary_scroll = 0;
        self.show_question(0);
    }

    pub fn summary_scroll(&self) -> usize {
        self.summary_scroll
    }

    pub fn scroll_summary_down(&mut self) {
        if self.summary_scroll + 1 < self.questions.len() {
            self.summary_scroll += 1;
        }
    }

    pub fn scroll_summary_up(&mut self) {
        self.summary_scroll = self.summary_scroll.saturating_sub(1);
    }

    /// Routes a key to the question view. Returns true if it was consumed.
    pub fn handle_question_key(&mut self, key: KeyCode) -> bool {
        let index = self.current_question_index;
        let question = &self.questions[index];
        let answers = &mut self.answers;
        let answer = answers[index];

        self.view.handle_key(key, question, answer, |updated| {
            debug!("[Quiz] Question {} answer -> {:?}", question.number, updated);
            answers[index] = updated;
        })
    }

    pub fn handle_question_mouse(&mut self, event: MouseEvent) -> bool {
        let index = self.current_question_index;
        let question = &self.questions[index];
        let answers = &mut self.answers;
        let answer = answers[index];

        self.view.handle_mouse(event, question, answer, |updated| {
            debug!("[Quiz] Question {} answer -> {:?}", question.number, updated);
            answers[index] = updated;
        })
    }

    fn show_question(&mut self, index: usize) {
        self.current_question_index = index;
        self.view = QuestionView::new();
    }
}
