//! Section display with its footer sub-navigation.

use crate::error::{PortfolioError, Result};
use crate::input::{normalize, InputAction, KeyReader, RawKey};
use crate::render::{frames, Console, SectionRenderer};
use log::{debug, warn};
use std::io::Write;

/// Reduced action set available under a section footer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionCommand {
    ReturnToMenu,
    ShowHelp,
    Quit,
    /// Movement and number keys mean nothing here
    Ignore,
    Invalid(RawKey),
}

/// Interpret `key` under a section footer, using the top-level menu size for digits
pub fn section_command(key: &RawKey, menu_size: usize) -> SectionCommand {
    if *key == RawKey::Char(' ') {
        return SectionCommand::ReturnToMenu;
    }

    match normalize(key, menu_size) {
        InputAction::Confirm | InputAction::GoToParent => SectionCommand::ReturnToMenu,
        InputAction::ShowHelp => SectionCommand::ShowHelp,
        InputAction::Quit => SectionCommand::Quit,
        InputAction::MoveUp | InputAction::MoveDown | InputAction::SelectByNumber(_) => {
            SectionCommand::Ignore
        }
        InputAction::Invalid(key) => SectionCommand::Invalid(key),
    }
}

/// Footer choices that end the read loop
enum FooterChoice {
    ReturnToMenu,
    ShowHelp,
    Quit,
}

/// Shows one section and loops on its footer until the user leaves.
///
/// `Ok(())` means "back to the menu". Quitting is reported as `Err(Interrupted)` so every
/// enclosing loop unwinds; a renderer failure becomes `Err(Render)`.
pub struct SectionRunner<'a> {
    name: &'a str,
    renderer: &'a dyn SectionRenderer,
    menu_size: usize,
}

impl<'a> SectionRunner<'a> {
    pub fn new(name: &'a str, renderer: &'a dyn SectionRenderer, menu_size: usize) -> Self {
        Self {
            name,
            renderer,
            menu_size,
        }
    }

    pub fn run<K: KeyReader, W: Write>(&self, console: &mut Console<K, W>) -> Result<()> {
        debug!("Entering section '{}'", self.name);

        loop {
            console.clear()?;
            self.render_content(console)?;

            let footer = frames::section_footer(console.theme());
            console.show(&footer)?;

            match self.read_choice(console)? {
                FooterChoice::ReturnToMenu => {
                    debug!("Leaving section '{}'", self.name);
                    return Ok(());
                }
                FooterChoice::ShowHelp => {
                    let overlay = frames::help_overlay(self.menu_size, console.theme());
                    console.show(&overlay)?;
                    console.read_key()?;
                }
                FooterChoice::Quit => {
                    debug!("Quit requested from section '{}'", self.name);
                    return Err(PortfolioError::Interrupted);
                }
            }
        }
    }

    fn render_content<K: KeyReader, W: Write>(&self, console: &mut Console<K, W>) -> Result<()> {
        let mut canvas = console.canvas();
        self.renderer.render(&mut canvas).map_err(|err| {
            warn!("Section '{}' failed to render: {:#}", self.name, err);
            PortfolioError::render(self.name, format!("{:#}", err))
        })
    }

    /// Prompt and read until a key leaves the footer loop. Invalid keys are reported in
    /// place without redrawing the section.
    fn read_choice<K: KeyReader, W: Write>(
        &self,
        console: &mut Console<K, W>,
    ) -> Result<FooterChoice> {
        loop {
            let prompt = frames::footer_prompt(console.theme());
            console.prompt(&prompt)?;

            let key = console.read_key()?;
            console.newline()?;

            match section_command(&key, self.menu_size) {
                SectionCommand::ReturnToMenu => return Ok(FooterChoice::ReturnToMenu),
                SectionCommand::ShowHelp => return Ok(FooterChoice::ShowHelp),
                SectionCommand::Quit => return Ok(FooterChoice::Quit),
                SectionCommand::Ignore => debug!("Ignoring {:?} inside a section", key),
                SectionCommand::Invalid(key) => {
                    let warning = frames::section_invalid_warning(&key, console.theme());
                    console.show(&warning)?;
                }
            }
        }
    }
}
