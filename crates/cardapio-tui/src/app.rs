//! TUI application state machine.
//!
//! Owns the store, the navigation history, and the mounted screen. Every
//! store update and every navigation goes through here, so screens only ever
//! see lifecycle hooks.

use std::time::Duration;

use cardapio_store::action::Action;
use cardapio_store::dispatch::{ActionReceiver, Dispatch};
use cardapio_store::state::ItemCardapioState;
use cardapio_store::store::Store;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{DefaultTerminal, Frame};

use crate::error::{Result, TuiError};
use crate::event::{self, TerminalEvent};
use crate::route::{History, Route};
use crate::screen::Screen;
use crate::ui::delete_dialog::DeleteDialog;
use crate::ui::detail::DetailView;
use crate::ui::list::ListScreen;

/// Why the app stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exit {
    /// The user quit.
    Quit,
    /// Navigation reached a route with no terminal screen; the host should
    /// take over at this route.
    Handoff(Route),
}

/// Builds the screen that serves `route`, if the terminal has one.
fn screen_for(route: &Route) -> Option<Box<dyn Screen>> {
    match route {
        Route::List => Some(Box::new(ListScreen::new())),
        Route::Detail(id) => Some(Box::new(DetailView::new(id.clone()))),
        Route::Delete(id) => Some(Box::new(DeleteDialog::new(id.clone()))),
        Route::Edit(_) => None,
    }
}

/// Root application state for the TUI.
pub struct App<D: Dispatch> {
    /// Whether the app should continue running.
    pub running: bool,
    store: Store,
    history: History,
    screen: Box<dyn Screen>,
    dispatch: D,
    exit: Exit,
}

impl<D: Dispatch> std::fmt::Debug for App<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("running", &self.running)
            .field("route", self.history.current())
            .field("exit", &self.exit)
            .finish_non_exhaustive()
    }
}

impl<D: Dispatch> App<D> {
    /// Creates the app at `start` and mounts its screen.
    ///
    /// # Errors
    ///
    /// Returns `TuiError::NoScreen` if `start` has no terminal screen.
    pub fn new(start: Route, mut dispatch: D) -> Result<Self> {
        let mut screen = screen_for(&start).ok_or_else(|| TuiError::NoScreen {
            path: start.path(),
        })?;
        tracing::info!(route = %start, "mounting initial screen");
        screen.on_mount(&mut dispatch);
        Ok(Self {
            running: true,
            store: Store::new(),
            history: History::new(start),
            screen,
            dispatch,
            exit: Exit::Quit,
        })
    }

    /// Current store slice.
    #[must_use]
    pub const fn state(&self) -> &ItemCardapioState {
        self.store.state()
    }

    /// Route of the mounted screen.
    #[must_use]
    pub fn route(&self) -> &Route {
        self.history.current()
    }

    /// Navigation history, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Route] {
        self.history.entries()
    }

    /// The injected dispatcher.
    #[must_use]
    pub const fn dispatch(&self) -> &D {
        &self.dispatch
    }

    /// Why the app stopped, once it has.
    #[must_use]
    pub const fn exit(&self) -> &Exit {
        &self.exit
    }

    /// Signals the app to quit.
    pub fn quit(&mut self) {
        self.exit = Exit::Quit;
        self.running = false;
    }

    /// Applies a store action and lets the mounted screen react to it.
    pub fn apply(&mut self, action: Action) {
        let change = self.store.apply(action);
        self.screen.on_state_change(&change, &mut self.history);
        self.sync_route();
    }

    /// Routes one terminal event.
    pub fn handle_event(&mut self, event: TerminalEvent) {
        match event {
            TerminalEvent::Key(key) => self.handle_key(key),
            TerminalEvent::Resize(..) | TerminalEvent::Tick => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }
        let handled = self.screen.handle_key(
            key,
            self.store.state(),
            &mut self.dispatch,
            &mut self.history,
        );
        if !handled && key.code == KeyCode::Char('q') {
            self.quit();
            return;
        }
        self.sync_route();
    }

    /// Swaps screens after a navigation.
    fn sync_route(&mut self) {
        if !self.history.take_changed() {
            return;
        }
        let route = self.history.current().clone();
        self.screen.on_unmount();
        if let Some(mut screen) = screen_for(&route) {
            screen.on_mount(&mut self.dispatch);
            self.screen = screen;
        } else {
            tracing::info!(route = %route, "handing off route without a terminal screen");
            self.exit = Exit::Handoff(route);
            self.running = false;
        }
    }

    /// Draws the mounted screen over the whole frame.
    pub fn draw(&self, frame: &mut Frame<'_>) {
        self.screen.render(frame, frame.area(), self.store.state());
    }

    /// Applies every action that has already arrived.
    pub fn drain(&mut self, actions: &mut ActionReceiver) {
        while self.running {
            match actions.try_recv() {
                Ok(action) => self.apply(action),
                Err(_) => break,
            }
        }
    }

    /// Runs the event loop until the user quits or navigation leaves the
    /// terminal screens.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing or reading terminal input fails.
    pub fn run(
        mut self,
        terminal: &mut DefaultTerminal,
        actions: &mut ActionReceiver,
        tick: Duration,
    ) -> Result<Exit> {
        while self.running {
            let _ = terminal.draw(|frame| self.draw(frame))?;
            let event = event::next(tick)?;
            self.handle_event(event);
            self.drain(actions);
        }
        Ok(self.exit)
    }
}
