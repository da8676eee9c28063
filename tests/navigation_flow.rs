//! End-to-end navigation scenarios driven by scripted keys and captured output.

use portfolio_term::input::{normalize, InputAction};
use portfolio_term::render::Canvas;
use portfolio_term::{
    Application, Console, InterruptFlag, KeyReader, Menu, MenuItem, NavigationController,
    NavigationResult, PortfolioError, RawKey, Result, Settings, Theme,
};
use std::collections::VecDeque;

/// Replays a fixed key sequence; an exhausted script behaves like a closed stream.
struct ScriptedKeys {
    keys: VecDeque<Result<RawKey>>,
}

impl ScriptedKeys {
    fn new(keys: Vec<Result<RawKey>>) -> Self {
        Self { keys: keys.into() }
    }

    fn from_names(names: &[&str]) -> Self {
        Self::new(names.iter().map(|name| Ok(name.parse().unwrap())).collect())
    }
}

impl KeyReader for ScriptedKeys {
    fn read_key(&mut self) -> Result<RawKey> {
        self.keys.pop_front().unwrap_or(Ok(RawKey::Escape))
    }
}

fn console(keys: ScriptedKeys) -> Console<ScriptedKeys, Vec<u8>> {
    Console::new(keys, Vec::new(), Theme::plain(), Settings::immediate())
}

fn output(console: Console<ScriptedKeys, Vec<u8>>) -> String {
    String::from_utf8(console.into_parts().1).unwrap()
}

fn run_portfolio(keys: ScriptedKeys) -> String {
    let mut app = Application::new(console(keys)).unwrap();
    app.run().unwrap();
    output(app.into_console())
}

fn greeting(canvas: &mut Canvas<'_>) -> anyhow::Result<()> {
    canvas.line("GREETING BODY")?;
    Ok(())
}

fn faulty(_canvas: &mut Canvas<'_>) -> anyhow::Result<()> {
    anyhow::bail!("template missing")
}

fn test_menu() -> Menu {
    Menu::new(
        "TEST NAVIGATION",
        vec![
            MenuItem::section("1", "Greeting", "works", greeting),
            MenuItem::section("2", "Broken", "always fails", faulty),
            MenuItem::exit("x", "Exit", "leave"),
        ],
    )
    .unwrap()
}

fn run_test_menu(keys: ScriptedKeys) -> String {
    let mut app = Application::with_menu(console(keys), test_menu());
    app.run().unwrap();
    output(app.into_console())
}

#[test]
fn move_up_from_first_item_selects_last() {
    let menu = portfolio_term::content::main_menu().unwrap();
    let mut console = console(ScriptedKeys::from_names(&["UP", "ENTER"]));

    let result = NavigationController::new(&menu).run(&mut console).unwrap();
    assert_eq!(result, NavigationResult::ItemSelected(5));
    assert!(output(console).contains("► [q] ❌ Exit"));
}

#[test]
fn digit_equal_to_menu_size_quits() {
    assert_eq!(normalize(&RawKey::Char('6'), 6), InputAction::Quit);
    assert_eq!(
        normalize(&RawKey::Char('7'), 6),
        InputAction::Invalid(RawKey::Char('7'))
    );

    let out = run_portfolio(ScriptedKeys::from_names(&["ENTER", "6"]));
    assert!(out.contains("Thanks for visiting my portfolio!"));
    assert!(!out.contains("Invalid input"));
}

#[test]
fn out_of_range_digit_warns_then_menu_redraws() {
    let out = run_portfolio(ScriptedKeys::from_names(&["ENTER", "7", "q"]));
    assert!(out.contains("⚠ Invalid input: '7'. Press 'h' for help."));
    assert_eq!(out.matches("PORTFOLIO NAVIGATION").count(), 2);
}

#[test]
fn closed_input_ends_at_exit_screen() {
    let out = run_portfolio(ScriptedKeys::new(vec![]));
    assert!(out.contains("Press any key to continue to the main menu..."));
    assert!(out.contains("Thanks for visiting my portfolio!"));
}

#[test]
fn interrupt_on_welcome_goes_straight_to_exit() {
    let out = run_portfolio(ScriptedKeys::new(vec![Err(PortfolioError::Interrupted)]));
    assert!(!out.contains("PORTFOLIO NAVIGATION"));
    assert!(out.contains("Thanks for visiting my portfolio!"));
}

#[test]
fn section_help_redisplays_the_same_section() {
    let out = run_test_menu(ScriptedKeys::from_names(&[
        "ENTER", // welcome
        "1",     // open Greeting
        "h",     // help inside the section
        "x",     // dismiss help
        "m",     // back to the menu
        "q",
    ]));

    assert_eq!(out.matches("GREETING BODY").count(), 2);
    assert!(out.contains("NAVIGATION HELP"));
    assert_eq!(out.matches("TEST NAVIGATION").count(), 2);
}

#[test]
fn quit_inside_section_ends_the_program() {
    let out = run_test_menu(ScriptedKeys::from_names(&["ENTER", "1", "q"]));
    assert_eq!(out.matches("TEST NAVIGATION").count(), 1);
    assert!(out.contains("Thanks for visiting my portfolio!"));
}

#[test]
fn interrupt_in_menu_help_quits() {
    let mut console = console(ScriptedKeys::new(vec![
        Ok(RawKey::Char('h')),
        Err(PortfolioError::Interrupted),
    ]));
    let menu = test_menu();

    let result = NavigationController::new(&menu).run(&mut console).unwrap();
    assert_eq!(result, NavigationResult::Quit);
}

#[test]
fn renderer_fault_shows_error_screen_and_returns_to_menu() {
    let out = run_test_menu(ScriptedKeys::from_names(&[
        "ENTER", // welcome
        "2",     // open Broken
        "ENTER", // back to the menu from the error screen
        "q",
    ]));

    assert!(out.contains("An unexpected error occurred"));
    assert!(out.contains("Error Details: Section 'Broken' failed to render: template missing"));
    assert_eq!(out.matches("TEST NAVIGATION").count(), 2);
    assert!(out.contains("Thanks for visiting my portfolio!"));
}

#[test]
fn quit_from_error_screen_leaves_the_loop() {
    let out = run_test_menu(ScriptedKeys::from_names(&["ENTER", "2", "q"]));
    assert!(out.contains("An unexpected error occurred"));
    assert_eq!(out.matches("TEST NAVIGATION").count(), 1);
}

#[test]
fn escape_on_error_screen_returns_to_menu() {
    let out = run_test_menu(ScriptedKeys::from_names(&["ENTER", "2", "ESC", "q"]));
    assert!(out.contains("An unexpected error occurred"));
    assert_eq!(out.matches("TEST NAVIGATION").count(), 2);
}

#[test]
fn help_from_error_screen_then_back_to_menu() {
    let out = run_test_menu(ScriptedKeys::from_names(&["ENTER", "2", "h", "x", "q"]));
    assert!(out.contains("NAVIGATION HELP"));
    assert_eq!(out.matches("TEST NAVIGATION").count(), 2);
}

#[test]
fn exit_item_ends_the_loop() {
    let out = run_test_menu(ScriptedKeys::from_names(&["ENTER", "UP", "ENTER"]));
    assert_eq!(out.matches("TEST NAVIGATION").count(), 2);
    assert!(!out.contains("GREETING BODY"));
    assert!(out.contains("Thanks for visiting my portfolio!"));
}

#[test]
fn go_to_parent_at_top_level_redisplays_menu() {
    let out = run_test_menu(ScriptedKeys::from_names(&["ENTER", "m", "q"]));
    assert_eq!(out.matches("TEST NAVIGATION").count(), 2);
}

#[test]
fn words_normalize_like_letters() {
    let out = run_test_menu(ScriptedKeys::from_names(&["ENTER", "1", "menu", "quit"]));
    assert_eq!(out.matches("GREETING BODY").count(), 1);
    assert_eq!(out.matches("TEST NAVIGATION").count(), 2);
}

/// Line input that is cut short by Ctrl+C after `before` keys.
struct SigintAfter {
    before: ScriptedKeys,
    remaining: usize,
    interrupt: InterruptFlag,
}

impl KeyReader for SigintAfter {
    fn read_key(&mut self) -> Result<RawKey> {
        if self.remaining == 0 {
            self.interrupt.raise();
            // The blocked line read still completes once the line is entered.
            return Ok(RawKey::Enter);
        }
        self.remaining -= 1;
        self.before.read_key()
    }
}

#[test]
fn ctrl_c_during_line_input_reaches_exit_screen() {
    let interrupt = InterruptFlag::new();
    let keys = SigintAfter {
        before: ScriptedKeys::from_names(&["ENTER", "1"]),
        remaining: 2,
        interrupt: interrupt.clone(),
    };
    let console = Console::new(keys, Vec::new(), Theme::plain(), Settings::immediate())
        .with_interrupt(interrupt);

    let mut app = Application::with_menu(console, test_menu());
    app.run().unwrap();

    let out = String::from_utf8(app.into_console().into_parts().1).unwrap();
    assert!(out.contains("GREETING BODY"));
    assert!(!out.contains("An unexpected error occurred"));
    assert!(out.contains("Thanks for visiting my portfolio!"));
}

#[test]
fn ctrl_c_before_the_welcome_key_skips_the_menu() {
    let interrupt = InterruptFlag::new();
    interrupt.raise();
    let console = console(ScriptedKeys::from_names(&["ENTER", "1"])).with_interrupt(interrupt);

    let mut app = Application::with_menu(console, test_menu());
    app.run().unwrap();

    let out = output(app.into_console());
    assert!(!out.contains("TEST NAVIGATION"));
    assert!(out.contains("Thanks for visiting my portfolio!"));
}
