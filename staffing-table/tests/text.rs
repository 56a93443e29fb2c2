use staffing_table::Alignment;
use staffing_table::text::{display_width, fit, truncate, wrap};

#[test]
fn test_truncate_short_text_unchanged() {
    assert_eq!(truncate("abc", 5), "abc");
}

#[test]
fn test_truncate_adds_ellipsis() {
    assert_eq!(truncate("abcdef", 4), "abc…");
    assert_eq!(display_width(&truncate("abcdef", 4)), 4);
}

#[test]
fn test_truncate_wide_chars() {
    let cut = truncate("日本語テキスト", 5);
    assert!(display_width(&cut) <= 5);
    assert!(cut.ends_with('…'));
}

#[test]
fn test_fit_alignment() {
    assert_eq!(fit("ab", 4, Alignment::Left), "ab  ");
    assert_eq!(fit("ab", 4, Alignment::Right), "  ab");
    assert_eq!(fit("ab", 5, Alignment::Center), " ab  ");
}

#[test]
fn test_wrap_words() {
    assert_eq!(wrap("one two three", 7), vec!["one two", "three"]);
}

#[test]
fn test_wrap_breaks_long_words() {
    assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
}

#[test]
fn test_wrap_wide_chars_wider_than_line() {
    assert_eq!(wrap("日本", 1), vec!["日", "本"]);
    assert_eq!(wrap("日本語", 3), vec!["日", "本", "語"]);
}

#[test]
fn test_wrap_keeps_line_breaks() {
    assert_eq!(wrap("a\n\nb", 10), vec!["a", "", "b"]);
}

#[test]
fn test_wrap_zero_width() {
    assert!(wrap("text", 0).is_empty());
}
