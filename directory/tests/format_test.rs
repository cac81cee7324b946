use employee_directory::format::{
    display_color, display_color_with, format_salary, full_name, is_name_char, normalize_salary,
    parse_employee_number, sanitize_name, ColorLookup,
};

#[test]
fn known_tokens_map_to_pastels() {
    assert_eq!(display_color("red"), "#ffcccc");
    assert_eq!(display_color("green"), "#ccffcc");
    assert_eq!(display_color("blue"), "#ccccff");
}

#[test]
fn unknown_tokens_pass_through() {
    assert_eq!(display_color("none"), "none");
    assert_eq!(display_color("purple"), "purple");
    assert_eq!(display_color("#123456"), "#123456");
    assert_eq!(display_color(""), "");
}

#[test]
fn lookup_mode_decides_case_handling() {
    assert_eq!(display_color("RED"), "RED");
    assert_eq!(display_color_with("RED", ColorLookup::Exact), "RED");
    assert_eq!(display_color_with("RED", ColorLookup::CaseInsensitive), "#ffcccc");
    assert_eq!(display_color_with("Blue", ColorLookup::CaseInsensitive), "#ccccff");
    assert_eq!(display_color_with("None", ColorLookup::CaseInsensitive), "None");
}

#[test]
fn salary_groups_thousands() {
    assert_eq!(format_salary(""), "");
    assert_eq!(format_salary("1"), "1");
    assert_eq!(format_salary("999"), "999");
    assert_eq!(format_salary("1000"), "1 000");
    assert_eq!(format_salary("65000"), "65 000");
    assert_eq!(format_salary("123456"), "123 456");
    assert_eq!(format_salary("1000000"), "1 000 000");
}

#[test]
fn salary_formats_digit_runs_in_place() {
    assert_eq!(format_salary("1000abc"), "1 000abc");
    assert_eq!(format_salary("abc1000"), "abc1 000");
    assert_eq!(format_salary("abc100"), "abc 100");
    assert_eq!(format_salary("1000.50"), "1 000.50");
    assert_eq!(format_salary("-1000"), "-1 000");
    assert_eq!(format_salary("$ 2500"), "$ 2 500");
}

#[test]
fn salary_keystrokes_drop_non_digits_first() {
    assert_eq!(normalize_salary("1 000 0"), "10 000");
    assert_eq!(normalize_salary("$12,345.67"), "1 234 567");
    assert_eq!(normalize_salary("abc"), "");
}

#[test]
fn names_keep_letters_spaces_hyphens_and_accents() {
    assert_eq!(sanitize_name("John123"), "John");
    assert_eq!(sanitize_name("Mary-Jane O'Neil"), "Mary-Jane ONeil");
    assert_eq!(sanitize_name("Zoë Łukasz"), "Zoë Łukasz");
    assert_eq!(sanitize_name("Ana_María!"), "AnaMaría");
    // Outside U+00C0..=U+024F
    assert_eq!(sanitize_name("Ωmega"), "mega");
}

#[test]
fn employee_number_parses_leading_float() {
    assert_eq!(parse_employee_number(""), 0.0);
    assert_eq!(parse_employee_number("1001"), 1001.0);
    assert_eq!(parse_employee_number("  42"), 42.0);
    assert_eq!(parse_employee_number("12.5"), 12.5);
    assert_eq!(parse_employee_number("12abc"), 12.0);
    assert_eq!(parse_employee_number(".5"), 0.5);
    assert_eq!(parse_employee_number("1e3"), 1000.0);
    assert_eq!(parse_employee_number("7e"), 7.0);
    assert_eq!(parse_employee_number("abc"), 0.0);
    assert_eq!(parse_employee_number("-"), 0.0);
}

#[test]
fn full_name_joins_with_space() {
    assert_eq!(full_name("John", "Doe"), "John Doe");
    assert_eq!(full_name("", ""), " ");
}

#[test]
fn name_chars_match_sanitizer() {
    assert!(is_name_char('a'));
    assert!(is_name_char('-'));
    assert!(is_name_char(' '));
    assert!(is_name_char('\u{00C0}'));
    assert!(is_name_char('\u{024F}'));
    assert!(!is_name_char('\u{0250}'));
    assert!(!is_name_char('\''));
    assert!(!is_name_char('7'));
}
