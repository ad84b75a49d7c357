/// Navigation drawer state shared by an app shell's navbar and drawer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawerState {
    /// Overlay drawer on narrow screens.
    pub mobile_open: bool,
    /// Icon-only rail on wide screens.
    pub collapsed: bool,
}

impl DrawerState {
    pub fn toggle_mobile(&mut self) {
        self.mobile_open = !self.mobile_open;
    }

    /// Picking a destination or tapping the backdrop dismisses the overlay.
    pub fn close_mobile(&mut self) {
        if self.mobile_open {
            tracing::debug!("mobile drawer closed");
        }
        self.mobile_open = false;
    }

    pub fn toggle_collapsed(&mut self) {
        self.collapsed = !self.collapsed;
    }
}

/// Up to two uppercase initials for an avatar fallback.
pub fn account_initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}
