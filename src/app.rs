//! Application orchestration layer
//!
//! Drives the welcome screen, the main navigation loop and the exit screen. Every fault that is
//! not an interrupt is caught here and offered back to the user through the error screen.

use crate::content::{self, screens};
use crate::error::{PortfolioError, Result};
use crate::input::{KeyReader, RawKey};
use crate::menu::Menu;
use crate::navigation::{NavigationController, NavigationResult, SectionRunner};
use crate::render::{frames, Console};
use log::{debug, warn};
use std::io::Write;

/// Whether the main loop keeps going after a dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// What a key does on the error screen. Only the letters count here: Escape and digits that
/// would quit from the menu return to it instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorChoice {
    Quit,
    Help,
    BackToMenu,
}

fn error_choice(key: &RawKey) -> ErrorChoice {
    match key {
        RawKey::Char('q' | 'Q') => ErrorChoice::Quit,
        RawKey::Char('h' | 'H') => ErrorChoice::Help,
        _ => ErrorChoice::BackToMenu,
    }
}

/// Top-level driver owning the console and the main menu
pub struct Application<K, W> {
    console: Console<K, W>,
    menu: Menu,
}

impl<K: KeyReader, W: Write> Application<K, W> {
    /// Application over the portfolio's own main menu
    pub fn new(console: Console<K, W>) -> Result<Self> {
        Ok(Self::with_menu(console, content::main_menu()?))
    }

    pub fn with_menu(console: Console<K, W>, menu: Menu) -> Self {
        Self { console, menu }
    }

    /// Run to completion. Only a failure to draw the exit screen is returned as an error.
    pub fn run(&mut self) -> Result<()> {
        match self.welcome() {
            Ok(()) => self.main_loop(),
            Err(err) if err.is_interrupt() => debug!("Interrupted on the welcome screen"),
            Err(err) => warn!("Welcome screen failed: {}", err),
        }

        self.farewell()
    }

    pub fn console(&self) -> &Console<K, W> {
        &self.console
    }

    pub fn into_console(self) -> Console<K, W> {
        self.console
    }

    fn welcome(&mut self) -> Result<()> {
        let theme = self.console.theme().clone();
        let sections = self.menu.items().iter().filter(|item| !item.is_exit()).count();

        self.console.clear()?;
        self.console.show(&screens::welcome_intro(&theme))?;
        self.console
            .typewrite(&screens::welcome_features(sections, &theme))?;
        self.console.show(&screens::welcome_prompt(&theme))?;
        self.console.read_key()?;
        Ok(())
    }

    fn main_loop(&mut self) {
        loop {
            let flow = match self.dispatch() {
                Ok(flow) => flow,
                Err(err) if err.is_interrupt() => Flow::Exit,
                Err(err) => {
                    warn!("Recovering from error: {}", err);
                    self.recover(&err).unwrap_or_else(|screen_err| {
                        warn!("Error screen unavailable: {}", screen_err);
                        Flow::Exit
                    })
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }
    }

    /// One main-menu session and whatever it selected
    fn dispatch(&mut self) -> Result<Flow> {
        let result = NavigationController::new(&self.menu).run(&mut self.console)?;

        let index = match result {
            NavigationResult::Quit => return Ok(Flow::Exit),
            NavigationResult::ReturnToParent => return Ok(Flow::Continue),
            NavigationResult::ItemSelected(index) => index,
        };

        let Some(item) = self.menu.item(index) else {
            return Ok(Flow::Continue);
        };
        match item.handler() {
            None => Ok(Flow::Exit),
            Some(renderer) => {
                SectionRunner::new(item.label(), renderer, self.menu.len())
                    .run(&mut self.console)?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Show the error screen and let the user pick how to continue
    fn recover(&mut self, err: &PortfolioError) -> Result<Flow> {
        let screen = frames::error_screen(&err.to_string(), self.console.theme());
        self.console.clear()?;
        self.console.show(&screen)?;

        let key = match self.console.read_key() {
            Ok(key) => key,
            Err(read_err) if read_err.is_interrupt() => return Ok(Flow::Exit),
            Err(read_err) => return Err(read_err),
        };

        match error_choice(&key) {
            ErrorChoice::Quit => Ok(Flow::Exit),
            ErrorChoice::Help => {
                let overlay = frames::help_overlay(self.menu.len(), self.console.theme());
                self.console.show(&overlay)?;
                match self.console.read_key() {
                    Err(read_err) if read_err.is_interrupt() => Ok(Flow::Exit),
                    Err(read_err) => Err(read_err),
                    Ok(_) => Ok(Flow::Continue),
                }
            }
            ErrorChoice::BackToMenu => Ok(Flow::Continue),
        }
    }

    fn farewell(&mut self) -> Result<()> {
        let screen = screens::exit_screen(self.console.theme());
        self.console.clear()?;
        self.console.show(&screen)?;
        self.console.flush()
    }
}
