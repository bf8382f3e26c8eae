//! TUI application state and logic

use crate::core::{Grid, random_board};
use crate::solver::{Solution, Solver};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

pub const MIN_SIZE: usize = 2;
pub const MAX_SIZE: usize = 8;
const DEFAULT_SIZE: usize = 4;
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub solver: Solver<'a>,
    pub size: usize,
    pub letters: String,
    pub grid: Option<Grid>,
    pub solution: Option<Solution>,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub scroll: usize,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Letters,
    Results,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub boards_solved: usize,
    pub total_words: usize,
    pub best_board: usize,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(solver: Solver<'a>) -> Self {
        Self {
            solver,
            size: DEFAULT_SIZE,
            letters: String::new(),
            grid: None,
            solution: None,
            input_mode: InputMode::Letters,
            messages: vec![
                Message {
                    text: "Type the board letters row by row, then press Enter.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Tab rolls a random board. +/- change the size.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            scroll: 0,
            should_quit: false,
        }
    }

    /// Letters needed to fill the board
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.size * self.size
    }

    pub fn push_letter(&mut self, letter: char) {
        if !letter.is_ascii_alphabetic() {
            return;
        }
        if self.letters.len() < self.cell_count() {
            self.letters.push(letter.to_ascii_lowercase());
        }
    }

    pub fn pop_letter(&mut self) {
        self.letters.pop();
    }

    pub fn clear_letters(&mut self) {
        self.letters.clear();
    }

    /// Grow or shrink the board, keeping it between `MIN_SIZE` and `MAX_SIZE`
    pub fn change_size(&mut self, grow: bool) {
        let size = if grow {
            (self.size + 1).min(MAX_SIZE)
        } else {
            self.size.saturating_sub(1).max(MIN_SIZE)
        };

        if size != self.size {
            self.size = size;
            self.letters.truncate(self.cell_count());
            self.add_message(&format!("Board size: {size}x{size}"), MessageStyle::Info);
        }
    }

    /// Solve the typed letters
    pub fn solve_letters(&mut self) {
        let needed = self.cell_count();
        if self.letters.len() != needed {
            self.add_message(
                &format!("Need {needed} letters, have {}", self.letters.len()),
                MessageStyle::Error,
            );
            return;
        }

        match Grid::from_letters(&self.letters, self.size, self.size) {
            Ok(grid) => self.solve_grid(grid),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Roll a random board and solve it
    pub fn generate_board(&mut self) {
        match random_board(&mut rand::rng(), self.size) {
            Ok(grid) => {
                self.letters = grid
                    .iter_rows()
                    .flatten()
                    .filter_map(|tile| tile.chars().next())
                    .collect();
                self.solve_grid(grid);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn solve_grid(&mut self, grid: Grid) {
        let solution = self.solver.solve(&grid);
        let found = solution.len();

        self.stats.boards_solved += 1;
        self.stats.total_words += found;
        self.stats.best_board = self.stats.best_board.max(found);

        let text = match solution.longest() {
            Some(longest) => format!(
                "Found {found} words in {:.1}ms, longest: {}",
                solution.elapsed().as_secs_f64() * 1_000.0,
                longest.to_uppercase()
            ),
            None => "No words on this board".to_string(),
        };
        let style = if found > 0 {
            MessageStyle::Success
        } else {
            MessageStyle::Error
        };
        self.add_message(&text, style);

        self.grid = Some(grid);
        self.solution = Some(solution);
        self.scroll = 0;
        self.input_mode = InputMode::Results;
    }

    /// Back to letter entry with an empty board
    pub fn new_board(&mut self) {
        self.letters.clear();
        self.grid = None;
        self.solution = None;
        self.scroll = 0;
        self.input_mode = InputMode::Letters;
        self.add_message("New board: type the letters.", MessageStyle::Info);
    }

    pub fn scroll_down(&mut self) {
        let words = self.solution.as_ref().map_or(0, Solution::len);
        if self.scroll + 1 < words {
            self.scroll += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only the most recent messages
        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            }

            match app.input_mode {
                InputMode::Letters => match key.code {
                    KeyCode::Esc => app.should_quit = true,
                    KeyCode::Enter => app.solve_letters(),
                    KeyCode::Tab => app.generate_board(),
                    KeyCode::Backspace => app.pop_letter(),
                    KeyCode::Delete => app.clear_letters(),
                    KeyCode::Char('+' | '=') => app.change_size(true),
                    KeyCode::Char('-') => app.change_size(false),
                    KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.push_letter(c);
                    }
                    _ => {}
                },
                InputMode::Results => match key.code {
                    KeyCode::Esc | KeyCode::Char('q') => app.should_quit = true,
                    KeyCode::Char('n') => app.new_board(),
                    KeyCode::Char('g') | KeyCode::Tab => app.generate_board(),
                    KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
                    KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::PrefixDictionary;

    fn dictionary() -> PrefixDictionary {
        ["cat", "cats", "act", "scat", "quit"].into_iter().collect()
    }

    #[test]
    fn letters_fill_up_to_board_size() {
        let dict = dictionary();
        let mut app = App::new(Solver::new(&dict));
        app.size = 2;
        for c in "CATSX1".chars() {
            app.push_letter(c);
        }
        assert_eq!(app.letters, "cats");
        app.pop_letter();
        assert_eq!(app.letters, "cat");
    }

    #[test]
    fn solving_switches_to_results() {
        let dict = dictionary();
        let mut app = App::new(Solver::new(&dict));
        app.size = 2;
        "cats".chars().for_each(|c| app.push_letter(c));

        app.solve_letters();

        assert_eq!(app.input_mode, InputMode::Results);
        assert_eq!(app.solution.as_ref().map(Solution::len), Some(4));
        assert_eq!(app.stats.boards_solved, 1);
        assert_eq!(app.stats.total_words, 4);
    }

    #[test]
    fn incomplete_board_is_not_solved() {
        let dict = dictionary();
        let mut app = App::new(Solver::new(&dict));
        app.push_letter('a');
        app.solve_letters();
        assert_eq!(app.input_mode, InputMode::Letters);
        assert!(matches!(
            app.messages.last().map(|m| &m.style),
            Some(MessageStyle::Error)
        ));
    }

    #[test]
    fn size_stays_in_range() {
        let dict = dictionary();
        let mut app = App::new(Solver::new(&dict));
        for _ in 0..10 {
            app.change_size(true);
        }
        assert_eq!(app.size, MAX_SIZE);
        for _ in 0..10 {
            app.change_size(false);
        }
        assert_eq!(app.size, MIN_SIZE);
    }

    #[test]
    fn shrinking_truncates_letters() {
        let dict = dictionary();
        let mut app = App::new(Solver::new(&dict));
        "abcdefghij".chars().for_each(|c| app.push_letter(c));
        app.change_size(false);
        assert_eq!(app.letters, "abcdefghi");
    }

    #[test]
    fn generated_board_is_solved() {
        let dict = dictionary();
        let mut app = App::new(Solver::new(&dict));
        app.generate_board();
        assert_eq!(app.input_mode, InputMode::Results);
        assert_eq!(app.letters.len(), app.cell_count());
        assert!(app.grid.is_some());
    }

    #[test]
    fn new_board_resets_state() {
        let dict = dictionary();
        let mut app = App::new(Solver::new(&dict));
        app.generate_board();
        app.new_board();
        assert_eq!(app.input_mode, InputMode::Letters);
        assert!(app.letters.is_empty());
        assert!(app.solution.is_none());
    }

    #[test]
    fn messages_are_capped() {
        let dict = dictionary();
        let mut app = App::new(Solver::new(&dict));
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages.last().unwrap().text, "message 9");
    }
}
