/// Display colors of well-known languages, as rendered on github.com.
pub const LANGUAGE_COLORS: [(&str, &str); 16] = [
    ("JavaScript", "#f1e05a"),
    ("TypeScript", "#2b7489"),
    ("Python", "#3572A5"),
    ("Java", "#b07219"),
    ("C++", "#f34b7d"),
    ("C#", "#178600"),
    ("PHP", "#4F5D95"),
    ("Ruby", "#701516"),
    ("Go", "#00ADD8"),
    ("Rust", "#dea584"),
    ("Swift", "#ffac45"),
    ("Kotlin", "#F18E33"),
    ("Dart", "#00B4AB"),
    ("HTML", "#e34c26"),
    ("CSS", "#563d7c"),
    ("Shell", "#89e051"),
];

/// Fallback for languages missing from [`LANGUAGE_COLORS`].
pub const DEFAULT_LANGUAGE_COLOR: &str = "#586069";

pub fn language_color(language: &str) -> &'static str {
    LANGUAGE_COLORS
        .iter()
        .find(|(name, _)| *name == language)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_LANGUAGE_COLOR)
}

/// Tests

#[test]
fn known_language_color_test() {
    assert_eq!(language_color("Go"), "#00ADD8");
    assert_eq!(language_color("Rust"), "#dea584");
}

#[test]
fn unknown_language_color_test() {
    assert_eq!(language_color("Brainfuck"), DEFAULT_LANGUAGE_COLOR);
    assert_eq!(language_color("go"), DEFAULT_LANGUAGE_COLOR, "lookup is case sensitive");
}
