//! Sales channels and their display order

/// Display order for channel cards, charts and tables
pub const CHANNEL_ORDER: [&str; 3] = ["Industry", "Retail", "Project"];

/// Debt tables carry a fourth catch-all bucket
pub const DEBT_CHANNEL_ORDER: [&str; 4] = ["Industry", "Retail", "Project", "Others"];

/// Position of `channel` in `order`; channels outside the list rank after it.
pub fn channel_rank(order: &[&str], channel: &str) -> usize {
    order
        .iter()
        .position(|c| *c == channel)
        .unwrap_or(order.len())
}

/// Stable sort by canonical channel order.
///
/// Unknown channels keep their relative order and go last.
pub fn sort_by_channel<T, F>(rows: &mut [T], order: &[&str], channel_of: F)
where
    F: Fn(&T) -> &str,
{
    rows.sort_by_key(|row| channel_rank(order, channel_of(row)));
}

/// Badge tone used for a channel label
pub fn channel_tone(channel: &str) -> &'static str {
    match channel {
        "Industry" => "info",
        "Retail" => "success",
        "Project" => "accent",
        _ => "neutral",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        let mut rows = vec!["Project", "Industry", "Retail"];
        sort_by_channel(&mut rows, &CHANNEL_ORDER, |c| *c);
        assert_eq!(rows, vec!["Industry", "Retail", "Project"]);
    }

    #[test]
    fn test_unknown_channels_go_last_in_arrival_order() {
        let mut rows = vec!["Export", "Project", "Online", "Industry"];
        sort_by_channel(&mut rows, &CHANNEL_ORDER, |c| *c);
        assert_eq!(rows, vec!["Industry", "Project", "Export", "Online"]);
    }

    #[test]
    fn test_others_bucket_in_debt_order() {
        let mut rows = vec!["Others", "Retail", "Industry"];
        sort_by_channel(&mut rows, &DEBT_CHANNEL_ORDER, |c| *c);
        assert_eq!(rows, vec!["Industry", "Retail", "Others"]);
        assert_eq!(channel_rank(&CHANNEL_ORDER, "Others"), 3);
    }
}
