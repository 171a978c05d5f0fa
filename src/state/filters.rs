//! Filter choices offered by the job list.

/// Sentinel meaning "no filter"; stored as an empty string.
pub const FILTER_ALL: &str = "ALL";

/// Status choices, in the order the filter cycles through them.
pub const STATUS_FILTER_OPTIONS: [&str; 7] = [
    FILTER_ALL,
    "WISHLIST",
    "APPLIED",
    "INTERVIEW",
    "ACTIVE",
    "ALPHA",
    "POTENTIAL",
];

/// Priority choices, in cycle order.
pub const PRIORITY_FILTER_OPTIONS: [&str; 4] = [FILTER_ALL, "HIGH", "MEDIUM", "LOW"];

/// Normalize a selected option into the stored filter value.
pub fn normalize_filter(value: &str) -> String {
    if value == FILTER_ALL {
        String::new()
    } else {
        value.to_string()
    }
}

/// Label shown for a stored filter value.
pub fn filter_label(value: &str) -> &str {
    if value.is_empty() {
        FILTER_ALL
    } else {
        value
    }
}

/// The option after (or before, when `forward` is false) `current`.
///
/// A value that is not among `options` restarts the cycle at the first
/// (or last) option.
pub fn cycle_option<'a>(options: &[&'a str], current: &str, forward: bool) -> &'a str {
    if options.is_empty() {
        return FILTER_ALL;
    }
    let current = filter_label(current);
    let len = options.len();
    match options.iter().position(|o| *o == current) {
        Some(i) if forward => options[(i + 1) % len],
        Some(i) => options[(i + len - 1) % len],
        None if forward => options[0],
        None => options[len - 1],
    }
}
