//! Validation of raw prompt answers before they reach the catalog.

/// A publication year: an integer in `0..=current_year`.
pub(super) fn parse_year(input: &str, current_year: i32) -> Option<i32> {
    let year: i32 = input.trim().parse().ok()?;
    (0..=current_year).contains(&year).then_some(year)
}

/// `yes`/`y` or `no`/`n`, any case.
pub(super) fn parse_read_status(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "yes" | "y" => Some(true),
        "no" | "n" => Some(false),
        _ => None,
    }
}
