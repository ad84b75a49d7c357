/// Element that should take focus after a popover transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    StartInput,
}

/// Open/closed state of an anchored popover.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PopoverState {
    #[default]
    Closed,
    Open,
}

impl PopoverState {
    pub fn is_open(&self) -> bool {
        matches!(self, PopoverState::Open)
    }

    /// Field click. Always asks for the start input to be focused, even when
    /// already open.
    pub fn open(&mut self) -> FocusTarget {
        *self = PopoverState::Open;
        FocusTarget::StartInput
    }

    /// Outside click or explicit close. Returns whether anything changed.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        *self = PopoverState::Closed;
        was_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_requests_start_input_focus() {
        let mut state = PopoverState::default();
        assert!(!state.is_open());
        assert_eq!(state.open(), FocusTarget::StartInput);
        assert!(state.is_open());
        assert_eq!(state.open(), FocusTarget::StartInput);
    }

    #[test]
    fn close_reports_transition() {
        let mut state = PopoverState::Open;
        assert!(state.close());
        assert!(!state.close());
        assert_eq!(state, PopoverState::Closed);
    }
}
