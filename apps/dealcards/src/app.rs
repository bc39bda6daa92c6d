//! Application state and terminal event loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use dealcards_cards::search::{Catalog, Dispatcher, Resolved, SearchFlow};
use dealcards_cards::input::{self, Key};
use dealcards_cards::{Board, Card, InputLine};
use dealcards_catalog::Query;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc::error::TryRecvError;

use crate::view;

/// Redraw interval; also the animation sampling tick.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// What a key press asks the event loop to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    Search(Query),
    OpenDeal(String),
    Quit,
}

/// Interactive state: input line, board, card selection.
pub struct App {
    pub(crate) input: InputLine,
    pub(crate) board: Board,
    pub(crate) selected: usize,
    flow: SearchFlow,
}

impl App {
    pub fn new(flow: SearchFlow) -> Self {
        Self {
            input: InputLine::new(),
            board: Board::new(),
            selected: 0,
            flow,
        }
    }

    /// Maps a key press to state changes and an [`Action`].
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => Action::Quit,
            KeyCode::Char('c') if ctrl => Action::Quit,
            KeyCode::Char('o') if ctrl => self
                .selected_card()
                .and_then(|card| card.deal.as_ref())
                .map_or(Action::None, |deal| Action::OpenDeal(deal.url.clone())),
            KeyCode::Up | KeyCode::Left => {
                self.selected = self.selected.saturating_sub(1);
                Action::None
            }
            KeyCode::Down | KeyCode::Right => {
                let last = self.board.cards().len().saturating_sub(1);
                self.selected = (self.selected + 1).min(last);
                Action::None
            }
            code => self.edit(input_key(code, ctrl)),
        }
    }

    /// Feeds a key to the input line, starting a search on a trigger.
    fn edit(&mut self, key: Key) -> Action {
        if input::is_trigger(key) {
            return match self.flow.trigger(&mut self.board, self.input.value()) {
                Some(query) => {
                    self.selected = 0;
                    Action::Search(query)
                }
                None => Action::None,
            };
        }
        match key {
            Key::Char(c) => self.input.push(c),
            Key::Backspace => self.input.backspace(),
            Key::Enter | Key::Other => {}
        }
        Action::None
    }

    /// Applies a finished search to the board.
    pub fn apply(&mut self, resolved: Resolved, now: Instant) {
        self.flow.finish(&mut self.board, resolved, now);
        if self.selected >= self.board.cards().len() {
            self.selected = 0;
        }
    }

    pub fn selected_card(&self) -> Option<&Card> {
        self.board.cards().get(self.selected).map(|placed| &placed.card)
    }
}

fn input_key(code: KeyCode, ctrl: bool) -> Key {
    match code {
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Char(c) if !ctrl => Key::Char(c),
        _ => Key::Other,
    }
}

/// Runs the terminal UI until the user quits.
pub async fn run(mut app: App, catalog: Arc<dyn Catalog>) -> Result<()> {
    let (dispatcher, mut results) = Dispatcher::new(catalog);

    let mut terminal = ratatui::init();
    terminal.clear()?;

    let (event_tx, event_rx) = mpsc::channel();
    let event_loop_running = Arc::new(AtomicBool::new(true));
    let event_loop_flag = Arc::clone(&event_loop_running);

    let event_thread = thread::spawn(move || -> Result<()> {
        while event_loop_flag.load(Ordering::Relaxed) {
            if event::poll(Duration::from_millis(50))? {
                let event = event::read()?;
                if event_tx.send(event).is_err() {
                    break;
                }
            }
        }
        Ok(())
    });

    let result: Result<()> = 'event_loop: loop {
        loop {
            match event_rx.try_recv() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    match app.handle_key(key) {
                        Action::None => {}
                        Action::Search(query) => {
                            tracing::info!(query = %query, "search triggered");
                            dispatcher.dispatch(query);
                        }
                        Action::OpenDeal(url) => {
                            if let Err(e) = open::that_detached(&url) {
                                tracing::warn!(url = %url, error = %e, "failed to open deal link");
                            }
                        }
                        Action::Quit => break 'event_loop Ok(()),
                    }
                }
                Ok(_) => {}
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    break 'event_loop Err(anyhow!("input event channel disconnected"));
                }
            }
        }

        loop {
            match results.try_recv() {
                Ok(resolved) => app.apply(resolved, Instant::now()),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    break 'event_loop Err(anyhow!("search result channel disconnected"));
                }
            }
        }

        let now = Instant::now();
        if let Err(e) = terminal.draw(|frame| view::draw(frame, &app, now)) {
            break Err(e.into());
        }

        tokio::time::sleep(FRAME_INTERVAL).await;
    };

    ratatui::restore();

    event_loop_running.store(false, Ordering::Relaxed);
    match event_thread.join() {
        Ok(join_result) => join_result?,
        Err(err) => std::panic::resume_unwind(err),
    }

    result
}

#[cfg(test)]
mod tests {
    use dealcards_cards::animation::Disabled;
    use dealcards_cards::search::SearchOutcome;
    use dealcards_catalog::{Endpoints, GameRecord};

    use super::*;

    fn app() -> App {
        App::new(SearchFlow::new(Endpoints::default(), Box::new(Disabled)))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(press(KeyCode::Char(c)));
        }
    }

    fn resolved(query: &str, records: Vec<GameRecord>) -> Resolved {
        Resolved {
            query: Query::parse(query).unwrap(),
            outcome: SearchOutcome::Found(records),
        }
    }

    fn with_deal(id: &str) -> GameRecord {
        GameRecord {
            title: Some(format!("Game {id}")),
            cheapest_deal_id: Some(id.into()),
            ..Default::default()
        }
    }

    #[test]
    fn enter_on_blank_prompts() {
        let mut app = app();
        type_text(&mut app, "   ");
        assert_eq!(app.handle_key(press(KeyCode::Enter)), Action::None);
        assert_eq!(app.board.status(), "Please type a game title first.");
    }

    #[test]
    fn enter_triggers_search() {
        let mut app = app();
        type_text(&mut app, " portal ");
        let action = app.handle_key(press(KeyCode::Enter));
        assert_eq!(action, Action::Search(Query::parse("portal").unwrap()));
        assert_eq!(app.board.status(), "Searching for \"portal\"...");
    }

    #[test]
    fn key_mapping() {
        assert_eq!(input_key(KeyCode::Enter, false), Key::Enter);
        assert_eq!(input_key(KeyCode::Char('x'), false), Key::Char('x'));
        assert_eq!(input_key(KeyCode::Char('x'), true), Key::Other);
        assert_eq!(input_key(KeyCode::Tab, false), Key::Other);
    }

    #[test]
    fn typing_never_searches() {
        let mut app = app();
        type_text(&mut app, "portal");
        assert_eq!(app.board.status(), "");
        assert_eq!(app.handle_key(press(KeyCode::Tab)), Action::None);
        assert_eq!(app.board.status(), "");
    }

    #[test]
    fn typing_and_backspace() {
        let mut app = app();
        type_text(&mut app, "doomx");
        app.handle_key(press(KeyCode::Backspace));
        assert_eq!(app.input.value(), "doom");
    }

    #[test]
    fn ctrl_chars_are_not_typed() {
        let mut app = app();
        assert_eq!(app.handle_key(ctrl('c')), Action::Quit);
        assert_eq!(app.handle_key(press(KeyCode::Esc)), Action::Quit);
        assert_eq!(app.input.value(), "");
    }

    #[test]
    fn selection_moves_within_cards() {
        let mut app = app();
        app.apply(resolved("x", vec![with_deal("1"), with_deal("2")]), Instant::now());

        app.handle_key(press(KeyCode::Down));
        app.handle_key(press(KeyCode::Down));
        assert_eq!(app.selected, 1);
        app.handle_key(press(KeyCode::Up));
        app.handle_key(press(KeyCode::Up));
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn ctrl_o_opens_selected_deal() {
        let mut app = app();
        app.apply(
            resolved("x", vec![with_deal("1"), GameRecord::default()]),
            Instant::now(),
        );

        assert_eq!(
            app.handle_key(ctrl('o')),
            Action::OpenDeal("https://www.cheapshark.com/redirect?dealID=1".into())
        );

        app.handle_key(press(KeyCode::Right));
        assert_eq!(app.handle_key(ctrl('o')), Action::None);
    }

    #[test]
    fn selection_reset_when_results_shrink() {
        let mut app = app();
        app.apply(
            resolved("x", vec![with_deal("1"), with_deal("2"), with_deal("3")]),
            Instant::now(),
        );
        app.selected = 2;
        app.apply(resolved("y", vec![with_deal("4")]), Instant::now());
        assert_eq!(app.selected, 0);
        assert_eq!(app.selected_card().unwrap().title, "Game 4");
    }
}
