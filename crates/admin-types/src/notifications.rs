/// Largest count a notification badge spells out.
pub const NOTIFICATION_BADGE_MAX: u32 = 99;

/// Text for a notification badge. Nothing for zero, `99+` past the cap.
pub fn badge_content(count: u32, max: u32) -> Option<String> {
    match count {
        0 => None,
        n if n > max => Some(format!("{max}+")),
        n => Some(n.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn zero_hides_the_badge() {
        assert_eq!(badge_content(0, NOTIFICATION_BADGE_MAX), None);
    }

    #[test]
    fn counts_are_capped() {
        assert_eq!(badge_content(7, NOTIFICATION_BADGE_MAX).as_deref(), Some("7"));
        assert_eq!(badge_content(99, NOTIFICATION_BADGE_MAX).as_deref(), Some("99"));
        assert_eq!(badge_content(100, NOTIFICATION_BADGE_MAX).as_deref(), Some("99+"));
        assert_eq!(badge_content(12, 9).as_deref(), Some("9+"));
    }
}
