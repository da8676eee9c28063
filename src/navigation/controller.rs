//! Menu navigation state machine.

use crate::error::Result;
use crate::input::{normalize, InputAction, KeyReader, RawKey};
use crate::menu::{Menu, MenuState};
use crate::render::{frames, Console};
use log::debug;
use std::io::Write;

/// Outcome of one navigation session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationResult {
    ItemSelected(usize),
    Quit,
    ReturnToParent,
}

/// Where the controller is in its loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    AwaitingInput,
    HelpOverlay,
    Done(NavigationResult),
}

/// What one action does to the session while awaiting input
#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    /// Cursor may have moved; redraw and read again
    Redraw,
    /// Show the warning for this key, pause, then redraw
    Warn(RawKey),
    ShowHelp,
    Finish(NavigationResult),
}

/// Apply `action` to the cursor. Pure apart from the cursor move.
fn step(state: &mut MenuState<'_>, action: InputAction) -> Step {
    match action {
        InputAction::MoveUp => {
            state.move_up();
            Step::Redraw
        }
        InputAction::MoveDown => {
            state.move_down();
            Step::Redraw
        }
        InputAction::Confirm => {
            Step::Finish(NavigationResult::ItemSelected(state.selected_index()))
        }
        InputAction::SelectByNumber(index) => {
            if state.select_by_number(index) {
                Step::Finish(NavigationResult::ItemSelected(index))
            } else {
                Step::Redraw
            }
        }
        InputAction::Quit => Step::Finish(NavigationResult::Quit),
        InputAction::GoToParent => Step::Finish(NavigationResult::ReturnToParent),
        InputAction::ShowHelp => Step::ShowHelp,
        InputAction::Invalid(key) => Step::Warn(key),
    }
}

/// Drives one menu session: draw, read, transition, until a result is reached.
///
/// A fresh controller starts with the first item selected.
pub struct NavigationController<'a> {
    title: &'a str,
    state: MenuState<'a>,
    phase: Phase,
}

impl<'a> NavigationController<'a> {
    pub fn new(menu: &'a Menu) -> Self {
        Self {
            title: menu.title(),
            state: MenuState::new(menu),
            phase: Phase::AwaitingInput,
        }
    }

    /// Run until the session finishes. Interrupts end the session with `Quit`; output
    /// failures are returned as errors.
    pub fn run<K: KeyReader, W: Write>(
        &mut self,
        console: &mut Console<K, W>,
    ) -> Result<NavigationResult> {
        loop {
            match self.phase {
                Phase::AwaitingInput => self.await_input(console)?,
                Phase::HelpOverlay => self.show_help(console)?,
                Phase::Done(result) => {
                    debug!("Navigation of '{}' finished: {:?}", self.title, result);
                    return Ok(result);
                }
            }
        }
    }

    fn await_input<K: KeyReader, W: Write>(&mut self, console: &mut Console<K, W>) -> Result<()> {
        let frame = frames::menu_frame(self.title, &self.state, console.theme());
        console.clear()?;
        console.show(&frame)?;

        let key = match console.read_key() {
            Ok(key) => key,
            Err(err) if err.is_interrupt() => {
                self.phase = Phase::Done(NavigationResult::Quit);
                return Ok(());
            }
            Err(err) => return Err(err),
        };

        let action = normalize(&key, self.state.len());
        debug!("Key {:?} normalized to {:?}", key, action);

        match step(&mut self.state, action) {
            Step::Redraw => {}
            Step::Warn(key) => {
                let warning = frames::invalid_key_warning(&key, console.theme());
                console.show(&warning)?;
                console.pause_for_warning()?;
            }
            Step::ShowHelp => self.phase = Phase::HelpOverlay,
            Step::Finish(result) => self.phase = Phase::Done(result),
        }
        Ok(())
    }

    fn show_help<K: KeyReader, W: Write>(&mut self, console: &mut Console<K, W>) -> Result<()> {
        let overlay = frames::help_overlay(self.state.len(), console.theme());
        console.show(&overlay)?;

        self.phase = match console.read_key() {
            Ok(_) => Phase::AwaitingInput,
            Err(err) if err.is_interrupt() => Phase::Done(NavigationResult::Quit),
            Err(err) => return Err(err),
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::error::PortfolioError;
    use crate::menu::MenuItem;
    use crate::render::{Canvas, Theme};
    use std::collections::VecDeque;

    struct Scripted(VecDeque<Result<RawKey>>);

    impl KeyReader for Scripted {
        fn read_key(&mut self) -> Result<RawKey> {
            self.0.pop_front().unwrap_or(Ok(RawKey::Escape))
        }
    }

    fn noop(_canvas: &mut Canvas<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    fn menu(size: usize) -> Menu {
        let mut items: Vec<MenuItem> = (1..size)
            .map(|i| MenuItem::section("*", format!("Section {}", i), "test section", noop))
            .collect();
        items.push(MenuItem::exit("x", "Exit", "leave"));
        Menu::new("TEST MENU", items).unwrap()
    }

    fn run_with(menu: &Menu, keys: Vec<Result<RawKey>>) -> (NavigationResult, String) {
        let mut console = Console::new(
            Scripted(keys.into()),
            Vec::new(),
            Theme::plain(),
            Settings::immediate(),
        );
        let result = NavigationController::new(menu).run(&mut console).unwrap();
        let (_, out) = console.into_parts();
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn step_wraps_and_selects() {
        let menu = menu(6);
        let mut state = MenuState::new(&menu);

        assert_eq!(step(&mut state, InputAction::MoveUp), Step::Redraw);
        assert_eq!(state.selected_index(), 5);
        assert_eq!(
            step(&mut state, InputAction::Confirm),
            Step::Finish(NavigationResult::ItemSelected(5))
        );
    }

    #[test]
    fn step_ignores_out_of_range_selection() {
        let menu = menu(3);
        let mut state = MenuState::new(&menu);
        assert_eq!(step(&mut state, InputAction::SelectByNumber(7)), Step::Redraw);
        assert_eq!(state.selected_index(), 0);
    }

    #[test]
    fn step_maps_exits() {
        let menu = menu(3);
        let mut state = MenuState::new(&menu);
        assert_eq!(
            step(&mut state, InputAction::Quit),
            Step::Finish(NavigationResult::Quit)
        );
        assert_eq!(
            step(&mut state, InputAction::GoToParent),
            Step::Finish(NavigationResult::ReturnToParent)
        );
        assert_eq!(step(&mut state, InputAction::ShowHelp), Step::ShowHelp);
        assert_eq!(
            step(&mut state, InputAction::Invalid(RawKey::Left)),
            Step::Warn(RawKey::Left)
        );
    }

    #[test]
    fn arrow_then_enter_selects_moved_item() {
        let menu = menu(6);
        let (result, out) = run_with(&menu, vec![Ok(RawKey::Down), Ok(RawKey::Enter)]);

        assert_eq!(result, NavigationResult::ItemSelected(1));
        assert!(out.contains("► [2] * Section 2"));
    }

    #[test]
    fn digit_selects_directly() {
        let menu = menu(6);
        let (result, _) = run_with(&menu, vec![Ok(RawKey::Char('3'))]);
        assert_eq!(result, NavigationResult::ItemSelected(2));
    }

    #[test]
    fn invalid_key_warns_and_keeps_going() {
        let menu = menu(6);
        let (result, out) = run_with(&menu, vec![Ok(RawKey::Char('7')), Ok(RawKey::Char('q'))]);

        assert_eq!(result, NavigationResult::Quit);
        assert!(out.contains("Invalid input: '7'"));
        assert_eq!(out.matches("TEST MENU").count(), 2);
    }

    #[test]
    fn interrupt_during_help_quits() {
        let menu = menu(6);
        let (result, out) = run_with(
            &menu,
            vec![Ok(RawKey::Char('h')), Err(PortfolioError::Interrupted)],
        );

        assert_eq!(result, NavigationResult::Quit);
        assert!(out.contains("NAVIGATION HELP"));
    }

    #[test]
    fn help_returns_to_the_menu() {
        let menu = menu(6);
        let (result, out) = run_with(
            &menu,
            vec![
                Ok(RawKey::Char('h')),
                Ok(RawKey::Char('x')),
                Ok(RawKey::Char('m')),
            ],
        );

        assert_eq!(result, NavigationResult::ReturnToParent);
        assert!(out.contains("NAVIGATION HELP"));
        assert!(!out.contains("Invalid input"));
    }

    #[test]
    fn output_failure_is_an_error() {
        struct Closed;
        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::ErrorKind::BrokenPipe.into())
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let menu = menu(3);
        let mut console = Console::new(
            Scripted(VecDeque::new()),
            Closed,
            Theme::plain(),
            Settings::immediate(),
        );
        let err = NavigationController::new(&menu)
            .run(&mut console)
            .unwrap_err();
        assert!(matches!(err, PortfolioError::Io { .. }));
    }
}
