/// How a profile colour token is matched against the pastel palette.
///
/// The table and the form historically disagree here: rows match
/// case-insensitively, the Save button matches exactly. Callers pick one
/// explicitly until the two are reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorLookup {
    Exact,
    CaseInsensitive,
}

const PALETTE: [(&str, &str); 3] = [
    ("red", "#ffcccc"),
    ("green", "#ccffcc"),
    ("blue", "#ccccff"),
];

/// Exact-match colour lookup. Unknown tokens (including `none`) come back
/// unchanged.
pub fn display_color(token: &str) -> String {
    display_color_with(token, ColorLookup::Exact)
}

pub fn display_color_with(token: &str, lookup: ColorLookup) -> String {
    PALETTE
        .iter()
        .find(|(key, _)| match lookup {
            ColorLookup::Exact => *key == token,
            ColorLookup::CaseInsensitive => key.eq_ignore_ascii_case(token),
        })
        .map(|(_, hex)| (*hex).to_string())
        .unwrap_or_else(|| token.to_string())
}

/// Groups every digit run into threes from the right, separated by a space.
///
/// A space is only inserted where the preceding character is an ASCII word
/// character, so `"1000abc"` becomes `"1 000abc"` and letters are passed
/// through rather than rejected.
pub fn format_salary(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let mut out = String::with_capacity(value.len() + value.len() / 3);

    let mut i = 0;
    while i < chars.len() {
        if !chars[i].is_ascii_digit() {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        let start = i;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
        let run = &chars[start..i];

        for (offset, digit) in run.iter().enumerate() {
            let remaining = run.len() - offset;
            let pos = start + offset;
            if remaining % 3 == 0 && pos > 0 && is_word_char(chars[pos - 1]) {
                out.push(' ');
            }
            out.push(*digit);
        }
    }

    out
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

pub fn strip_non_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Keystroke normalization for the salary field.
pub fn normalize_salary(value: &str) -> String {
    format_salary(&strip_non_digits(value))
}

/// Keeps ASCII letters, whitespace, hyphens and the accented Latin range
/// U+00C0..=U+024F.
pub fn sanitize_name(value: &str) -> String {
    value.chars().filter(|c| is_name_char(*c)).collect()
}

pub fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c.is_whitespace() || c == '-' || ('\u{00C0}'..='\u{024F}').contains(&c)
}

/// Parses the leading float of `value`, ignoring anything after it.
/// Empty or non-numeric input yields 0.
pub fn parse_employee_number(value: &str) -> f64 {
    let trimmed = value.trim_start();
    let prefix = &trimmed[..float_prefix_len(trimmed)];
    prefix.parse::<f64>().ok().filter(|n| n.is_finite()).unwrap_or(0.0)
}

/// Byte length of the longest `[+-]digits[.digits][e[+-]digits]` prefix.
fn float_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }
    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if digits > 0 || j > frac_start {
            digits += j - frac_start;
            i = j;
        }
    }

    if digits == 0 {
        return 0;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}

pub fn full_name(first: &str, last: &str) -> String {
    format!("{} {}", first, last)
}
