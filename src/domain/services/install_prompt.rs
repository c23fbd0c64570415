use serde::{Deserialize, Serialize};

const MIN_VISITS: u32 = 2;

/// Visit and dismissal bookkeeping for the home-screen install prompt.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallPromptState {
    pub visit_count: u32,
    pub dismissed: bool,
}

impl InstallPromptState {
    pub fn record_visit(&mut self) -> u32 {
        self.visit_count = self.visit_count.saturating_add(1);
        self.visit_count
    }

    /// The prompt is offered from the second visit on, unless dismissed, already installed
    /// (running standalone), or the browser has not offered an install event.
    pub fn should_show(&self, standalone: bool, prompt_available: bool) -> bool {
        self.visit_count >= MIN_VISITS && !self.dismissed && !standalone && prompt_available
    }

    pub fn dismiss(&mut self) {
        self.dismissed = true;
    }

    pub fn record_outcome(&mut self, accepted: bool) -> bool {
        if accepted {
            self.dismissed = true;
        }
        accepted
    }

    pub fn reset(&mut self) {
        *self = InstallPromptState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_visit_never_prompts() {
        let mut state = InstallPromptState::default();
        assert_eq!(state.record_visit(), 1);
        assert!(!state.should_show(false, true));
        assert_eq!(state.record_visit(), 2);
        assert!(state.should_show(false, true));
    }

    #[test]
    fn test_blocking_conditions() {
        let state = InstallPromptState { visit_count: 5, dismissed: false };
        assert!(!state.should_show(true, true));
        assert!(!state.should_show(false, false));

        let dismissed = InstallPromptState { visit_count: 5, dismissed: true };
        assert!(!dismissed.should_show(false, true));
    }

    #[test]
    fn test_outcome_handling() {
        let mut state = InstallPromptState { visit_count: 3, dismissed: false };
        assert!(!state.record_outcome(false));
        assert!(state.should_show(false, true));
        assert!(state.record_outcome(true));
        assert!(!state.should_show(false, true));

        state.reset();
        assert_eq!(state, InstallPromptState::default());
    }
}
