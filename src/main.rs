//! portfolio - Interactive Terminal Portfolio
//!
//! Keyboard-navigated tour of a developer portfolio in the terminal.

use anyhow::Result;
use clap::Command;
use portfolio_term::{Application, Console, ConsoleKeyReader, InterruptFlag, Settings, Theme};
use std::io::{self, IsTerminal};

fn main() -> Result<()> {
    // Initialize logging (silent unless RUST_LOG is set)
    env_logger::init();

    // Parse command-line arguments (only --help and --version)
    Command::new("portfolio")
        .version(portfolio_term::VERSION)
        .about("An interactive, keyboard-navigated terminal portfolio")
        .long_about(
            "portfolio presents a developer portfolio as a terminal menu. Navigate with the \
             arrow keys or j/k, jump with number keys, press 'h' for help and 'q' to quit.",
        )
        .get_matches();

    let settings = Settings::load();
    let theme = Theme::for_color(settings.color && io::stdout().is_terminal());

    // Ctrl+C outside a raw read ends at the exit screen instead of killing the process
    let interrupt = InterruptFlag::new();
    if let Err(err) = interrupt.install() {
        log::warn!("Ctrl+C handler not installed: {}", err);
    }

    let console = Console::new(ConsoleKeyReader::new(), io::stdout(), theme, settings)
        .with_interrupt(interrupt);
    let mut app = Application::new(console)?;

    app.run()?;

    Ok(())
}
