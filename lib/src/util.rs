use std::cmp::Ordering;

pub fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

pub fn is_letter(s: &str) -> Option<char> {
    let mut it = s.chars();
    match (it.next(), it.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c),
        _ => None,
    }
}

/// Strips leading zeros, leaving a single `0` for an all-zero run.
pub fn strip_zeros(s: &str) -> &str {
    let r = s.trim_start_matches('0');
    if r.is_empty() && !s.is_empty() {
        &s[s.len() - 1..]
    } else {
        r
    }
}

/// Numeric comparison of two digit runs of any length.
pub fn cmp_digits(a: &str, b: &str) -> Ordering {
    let a = strip_zeros(a);
    let b = strip_zeros(b);
    a.len().cmp(&b.len())
        .then_with(|| a.cmp(b))
}

pub fn fold(s: &str) -> impl Iterator<Item=char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

pub fn cmp_folded(a: &str, b: &str) -> Ordering {
    fold(a).cmp(fold(b))
}
