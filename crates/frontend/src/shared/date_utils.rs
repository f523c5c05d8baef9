/// Utilities for the year pickers
use chrono::{Datelike, Local};

/// Calendar year shown before `/api/available-years` has answered
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Options for a year `<select>`, newest first.
///
/// `selected` is always present so the select never shows a blank value.
pub fn year_options(years: &[i32], selected: i32) -> Vec<i32> {
    let mut options = years.to_vec();
    if !options.contains(&selected) {
        options.push(selected);
    }
    options.sort_unstable_by(|a, b| b.cmp(a));
    options.dedup();
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_options() {
        assert_eq!(year_options(&[2023, 2025, 2024], 2025), vec![2025, 2024, 2023]);
        assert_eq!(year_options(&[], 2026), vec![2026]);
        assert_eq!(year_options(&[2024, 2024], 2026), vec![2026, 2024]);
    }
}
