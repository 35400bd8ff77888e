use crate::config::HubConfig;
use crate::routes::{inbox_url, Route, View};

/// What a click inside the video-recommendation modal landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalTarget {
    CloseControl,
    /// The modal element itself, i.e. the dimmed area around the dialog.
    Backdrop,
    UserPrompt,
    Assignments,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModalOutcome {
    pub navigate: Option<Route>,
    pub hide: bool,
}

#[derive(Debug, Default)]
pub struct ModalState {
    visible: bool,
}

impl ModalState {
    pub fn open(&mut self) {
        self.visible = true;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn handle(&mut self, target: ModalTarget) -> ModalOutcome {
        if !self.visible {
            return ModalOutcome::default();
        }
        let outcome = match target {
            ModalTarget::CloseControl | ModalTarget::Backdrop => ModalOutcome {
                navigate: None,
                hide: true,
            },
            ModalTarget::UserPrompt => ModalOutcome {
                navigate: Some(Route::VideoPrompt),
                hide: true,
            },
            ModalTarget::Assignments => ModalOutcome {
                navigate: Some(Route::SelectAssignmentForVideos),
                hide: true,
            },
            ModalTarget::Content => ModalOutcome::default(),
        };
        if outcome.hide {
            self.visible = false;
        }
        outcome
    }
}

/// Periodic reload of the inbox so new mail shows up without user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InboxRefresh {
    pub interval_ms: u32,
}

impl InboxRefresh {
    /// Only the inbox view refreshes itself.
    pub fn for_view(view: View, config: &HubConfig) -> Option<Self> {
        match view {
            View::Inbox => Some(Self {
                interval_ms: config.inbox_refresh_ms,
            }),
            _ => None,
        }
    }

    /// URL to reload on this tick, or `None` to skip it when no sender is
    /// selected.
    pub fn tick(&self, sender: Option<&str>) -> Option<String> {
        match sender {
            Some(s) if !s.is_empty() => Some(inbox_url(s)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_and_backdrop_only_hide() {
        for target in [ModalTarget::CloseControl, ModalTarget::Backdrop] {
            let mut modal = ModalState::default();
            modal.open();
            let outcome = modal.handle(target);
            assert_eq!(outcome, ModalOutcome { navigate: None, hide: true });
            assert!(!modal.is_visible());
        }
    }

    #[test]
    fn options_navigate_and_hide() {
        let mut modal = ModalState::default();
        modal.open();
        assert_eq!(
            modal.handle(ModalTarget::UserPrompt).navigate.map(Route::path),
            Some("/video-prompt")
        );
        assert!(!modal.is_visible());

        modal.open();
        assert_eq!(
            modal.handle(ModalTarget::Assignments).navigate.map(Route::path),
            Some("/select-assignment-for-videos")
        );
        assert!(!modal.is_visible());
    }

    #[test]
    fn clicks_inside_dialog_keep_it_open() {
        let mut modal = ModalState::default();
        modal.open();
        assert_eq!(modal.handle(ModalTarget::Content), ModalOutcome::default());
        assert!(modal.is_visible());
    }

    #[test]
    fn hidden_modal_ignores_clicks() {
        let mut modal = ModalState::default();
        assert_eq!(modal.handle(ModalTarget::UserPrompt), ModalOutcome::default());
    }

    #[test]
    fn repeated_opens_do_not_stack() {
        let mut modal = ModalState::default();
        modal.open();
        modal.open();
        modal.handle(ModalTarget::CloseControl);
        assert!(!modal.is_visible());
    }

    #[test]
    fn refresh_is_scoped_to_inbox() {
        let config = HubConfig::default();
        assert_eq!(
            InboxRefresh::for_view(View::Inbox, &config),
            Some(InboxRefresh { interval_ms: 300_000 })
        );
        assert_eq!(InboxRefresh::for_view(View::Assignments, &config), None);
        assert_eq!(InboxRefresh::for_view(View::Other, &config), None);
    }

    #[test]
    fn refresh_tick_needs_a_sender() {
        let refresh = InboxRefresh { interval_ms: 1 };
        assert_eq!(refresh.tick(None), None);
        assert_eq!(refresh.tick(Some("")), None);
        assert_eq!(
            refresh.tick(Some("a b")).as_deref(),
            Some("/check-inbox?sender=a%20b")
        );
    }
}
