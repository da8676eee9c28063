//! Key normalization.
//!
//! Maps raw keys onto the small action vocabulary the menus understand. The mapping is total:
//! every `RawKey` yields exactly one `InputAction`, with unknown keys carried in `Invalid`
//! so they can be shown back to the user.

use crate::input::raw::RawKey;

/// Largest menu whose last entry can still be reached with a single digit.
const SINGLE_DIGIT_LIMIT: usize = 9;

/// Menu-level actions produced from one keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    MoveUp,
    MoveDown,
    Confirm,
    /// Zero-based item index chosen with a digit key.
    SelectByNumber(usize),
    Quit,
    GoToParent,
    ShowHelp,
    Invalid(RawKey),
}

/// Interpret `key` for a menu of `max_menu_size` entries.
///
/// Digits `1..max_menu_size-1` select the matching item; the digit equal to `max_menu_size`
/// quits when the menu fits in single digits (the last entry is the exit entry).
pub fn normalize(key: &RawKey, max_menu_size: usize) -> InputAction {
    match key {
        RawKey::Up => InputAction::MoveUp,
        RawKey::Down => InputAction::MoveDown,
        RawKey::Enter => InputAction::Confirm,
        RawKey::Escape => InputAction::Quit,
        RawKey::Left | RawKey::Right => InputAction::Invalid(key.clone()),
        RawKey::Char(ch) => match ch.to_digit(10) {
            Some(digit) => normalize_digit(digit as usize, max_menu_size, key),
            None => normalize_command(&ch.to_string(), key),
        },
        RawKey::Text(text) => normalize_command(text, key),
    }
}

fn normalize_digit(digit: usize, max_menu_size: usize, key: &RawKey) -> InputAction {
    if (1..max_menu_size).contains(&digit) {
        InputAction::SelectByNumber(digit - 1)
    } else if digit == max_menu_size && max_menu_size <= SINGLE_DIGIT_LIMIT {
        InputAction::Quit
    } else {
        InputAction::Invalid(key.clone())
    }
}

fn normalize_command(command: &str, key: &RawKey) -> InputAction {
    match command.to_lowercase().as_str() {
        "q" | "quit" => InputAction::Quit,
        "m" | "menu" => InputAction::GoToParent,
        "h" | "help" => InputAction::ShowHelp,
        "j" => InputAction::MoveDown,
        "k" => InputAction::MoveUp,
        _ => InputAction::Invalid(key.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ch(c: char) -> RawKey {
        RawKey::Char(c)
    }

    #[test]
    fn canonical_keys_map_directly() {
        assert_eq!(normalize(&RawKey::Up, 6), InputAction::MoveUp);
        assert_eq!(normalize(&RawKey::Down, 6), InputAction::MoveDown);
        assert_eq!(normalize(&RawKey::Enter, 6), InputAction::Confirm);
        assert_eq!(normalize(&RawKey::Escape, 6), InputAction::Quit);
        assert_eq!(
            normalize(&RawKey::Left, 6),
            InputAction::Invalid(RawKey::Left)
        );
    }

    #[test]
    fn letter_commands_ignore_case() {
        assert_eq!(normalize(&ch('q'), 6), InputAction::Quit);
        assert_eq!(normalize(&ch('Q'), 6), InputAction::Quit);
        assert_eq!(normalize(&ch('M'), 6), InputAction::GoToParent);
        assert_eq!(normalize(&ch('h'), 6), InputAction::ShowHelp);
        assert_eq!(normalize(&ch('j'), 6), InputAction::MoveDown);
        assert_eq!(normalize(&ch('K'), 6), InputAction::MoveUp);
    }

    #[test]
    fn word_commands_match_their_letters() {
        let word = |w: &str| RawKey::Text(w.to_string());
        assert_eq!(normalize(&word("Quit"), 6), InputAction::Quit);
        assert_eq!(normalize(&word("menu"), 6), InputAction::GoToParent);
        assert_eq!(normalize(&word("HELP"), 6), InputAction::ShowHelp);
        assert_eq!(
            normalize(&word("jump"), 6),
            InputAction::Invalid(word("jump"))
        );
    }

    #[test]
    fn last_digit_quits_in_six_item_menu() {
        assert_eq!(normalize(&ch('6'), 6), InputAction::Quit);
    }

    #[test]
    fn digit_past_menu_is_invalid() {
        assert_eq!(normalize(&ch('7'), 6), InputAction::Invalid(ch('7')));
        assert_eq!(normalize(&ch('0'), 6), InputAction::Invalid(ch('0')));
    }

    #[test]
    fn quit_digit_needs_single_digit_menu() {
        assert_eq!(normalize(&ch('9'), 9), InputAction::Quit);
        assert_eq!(normalize(&ch('9'), 10), InputAction::SelectByNumber(8));
        // A ten-item menu has no single digit for its exit entry.
        assert_eq!(normalize(&ch('0'), 10), InputAction::Invalid(ch('0')));
    }

    #[test]
    fn unknown_characters_carry_the_key() {
        assert_eq!(normalize(&ch('x'), 6), InputAction::Invalid(ch('x')));
        assert_eq!(normalize(&ch(' '), 6), InputAction::Invalid(ch(' ')));
    }

    fn any_raw_key() -> impl Strategy<Value = RawKey> {
        prop_oneof![
            Just(RawKey::Up),
            Just(RawKey::Down),
            Just(RawKey::Left),
            Just(RawKey::Right),
            Just(RawKey::Enter),
            Just(RawKey::Escape),
            any::<char>().prop_map(RawKey::Char),
            ".{0,8}".prop_map(RawKey::Text),
        ]
    }

    proptest! {
        #[test]
        fn normalize_is_deterministic(key in any_raw_key(), size in 1usize..20) {
            prop_assert_eq!(normalize(&key, size), normalize(&key, size));
        }

        #[test]
        fn selectable_digits_map_to_zero_based_index(size in 2usize..=9, digit in 1usize..9) {
            prop_assume!(digit < size);
            let key = RawKey::Char(char::from_digit(digit as u32, 10).unwrap());
            prop_assert_eq!(normalize(&key, size), InputAction::SelectByNumber(digit - 1));
        }

        #[test]
        fn invalid_actions_carry_the_original_key(key in any_raw_key(), size in 1usize..20) {
            if let InputAction::Invalid(carried) = normalize(&key, size) {
                prop_assert_eq!(carried, key);
            }
        }
    }
}
