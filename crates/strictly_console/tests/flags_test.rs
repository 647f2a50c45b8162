//! Tests for command-line flag association and launch settings.

use std::collections::HashSet;
use std::io::Cursor;

use strictly_console::flags::{associate, associate_all};
use strictly_console::{LaunchSettings, WORD_FLAGS};
use strictly_guessing::StdRandom;

fn game_words() -> HashSet<&'static str> {
    WORD_FLAGS.into_iter().collect()
}

#[test]
fn test_word_flags_take_values() {
    let flags = associate(&["-min", "5", "-max", "50"], &game_words());
    assert_eq!(flags.len(), 2);
    assert_eq!(flags.get("min"), Some("5"));
    assert_eq!(flags.get("max"), Some("50"));
}

#[test]
fn test_unknown_word_splits_into_letters() {
    let flags = associate(&["-xy"], &game_words());
    assert_eq!(flags.len(), 2);
    assert_eq!(flags.get("x"), Some("x"));
    assert_eq!(flags.get("y"), Some("y"));
}

#[test]
fn test_split_flag_last_letter_takes_value() {
    let flags = associate(&["-xy", "value"], &game_words());
    assert_eq!(flags.get("x"), Some("x"));
    assert_eq!(flags.get("y"), Some("value"));
}

#[test]
fn test_flag_without_value_maps_to_itself() {
    let flags = associate(&["-help"], &game_words());
    assert_eq!(flags.get("help"), Some("help"));
}

#[test]
fn test_double_dash_help_is_word_flag() {
    let flags = associate(&["--help"], &game_words());
    assert!(flags.contains("-help"));
    assert_eq!(flags.len(), 1);
}

#[test]
fn test_single_letter_flag_is_recorded() {
    let flags = associate(&["-v"], &game_words());
    assert_eq!(flags.get("v"), Some("v"));
}

#[test]
fn test_associate_all_splits_every_word() {
    let flags = associate_all(&["-min", "5"]);
    assert!(!flags.contains("min"));
    assert_eq!(flags.get("m"), Some("m"));
    assert_eq!(flags.get("i"), Some("i"));
    assert_eq!(flags.get("n"), Some("5"));
}

#[test]
fn test_settings_from_flags() {
    let settings = LaunchSettings::from_args(&["-min", "5", "-max", "50", "-tries", "3"])
        .expect("valid settings");
    let config = settings.configuration().expect("configuration present");
    assert_eq!(*config.minimum(), 5);
    assert_eq!(*config.maximum(), 50);
    assert_eq!(*config.max_tries(), 3);
    assert!(!settings.show_help());
}

#[test]
fn test_settings_defaults() {
    let settings = LaunchSettings::from_args::<&str>(&[]).expect("valid settings");
    let config = settings.configuration().expect("configuration present");
    assert_eq!(*config.minimum(), 1);
    assert_eq!(*config.maximum(), 100);
    assert_eq!(*config.max_tries(), 10);
}

#[test]
fn test_settings_ignore_unparseable_values() {
    let settings = LaunchSettings::from_args(&["-max", "lots", "-tries"]).expect("valid settings");
    let config = settings.configuration().expect("configuration present");
    assert_eq!(*config.maximum(), 100);
    assert_eq!(*config.max_tries(), 10);
}

#[test]
fn test_settings_help_variants() {
    for args in [&["-help"][..], &["--help"][..], &["-min", "9", "-help"][..]] {
        let settings = LaunchSettings::from_args(args).expect("valid settings");
        assert!(settings.show_help(), "{args:?} should request help");
        assert!(settings.configuration().is_none());
    }
}

#[test]
fn test_settings_reject_inverted_range() {
    assert!(LaunchSettings::from_args(&["-min", "10", "-max", "5"]).is_err());
}

#[test]
fn test_settings_reject_zero_tries() {
    assert!(LaunchSettings::from_args(&["-tries", "0"]).is_err());
}

#[test]
fn test_run_prints_help_without_playing() {
    let mut output = Vec::new();
    strictly_console::run(
        &["-help"],
        Cursor::new(Vec::new()),
        &mut output,
        StdRandom::seeded(1),
    )
    .expect("help runs");

    let text = String::from_utf8(output).expect("utf8 output");
    assert_eq!(
        text,
        "Usage: RandomNumberGame [options...]\nOptions: -min MIN Minimum Random Number\n \
-max MAX Maximum Random Number\n -tries TRIES Amount of tries to guess\n\n"
    );
}

#[test]
fn test_run_single_value_range_wins() {
    let mut output = Vec::new();
    strictly_console::run(
        &["-min", "1", "-max", "1", "-tries", "1"],
        Cursor::new(b"1\nn\n".to_vec()),
        &mut output,
        StdRandom::seeded(1),
    )
    .expect("session runs");

    let text = String::from_utf8(output).expect("utf8 output");
    assert!(text.contains("You won!"));
    assert!(text.contains("Wins: 1\nLosses: 0\nGames: 1\n"));
}

#[test]
fn test_run_survives_invalid_utf8_input() {
    let mut output = Vec::new();
    let result = strictly_console::run::<&str, _, _, _>(
        &[],
        Cursor::new(b"\xff\xfe\nexit\n".to_vec()),
        &mut output,
        StdRandom::seeded(1),
    );

    assert!(result.is_ok());
    let text = String::from_utf8(output).expect("utf8 output");
    assert!(text.ends_with("Enter a guess. Enter a guess. "));
}
