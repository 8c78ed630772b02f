//! Static navigation entries and tap feedback for mobile links.

use crate::shared::timer::{Scheduler, TimerHandle};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationLink {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavSection {
    pub title: &'static str,
    pub links: &'static [NavigationLink],
}

pub const SECTIONS: &[NavSection] = &[
    NavSection {
        title: "Main",
        links: &[
            NavigationLink { path: "/", label: "Home", icon: "home" },
            NavigationLink { path: "/dashboard", label: "Dashboard", icon: "dashboard" },
        ],
    },
    NavSection {
        title: "Account",
        links: &[
            NavigationLink { path: "/settings", label: "Settings", icon: "settings" },
        ],
    },
];

/// Whether `link_path` should be highlighted for `current_path`.
///
/// The root link only matches the root itself; other links also match their
/// sub-routes.
pub fn is_active(link_path: &str, current_path: &str) -> bool {
    if link_path == "/" {
        return current_path == "/";
    }
    current_path == link_path
        || current_path
            .strip_prefix(link_path)
            .is_some_and(|rest| rest.starts_with('/'))
}

pub type MarkTapped = Rc<dyn Fn(Option<&'static str>)>;

/// Short pressed state for links tapped on touch screens.
pub struct TapFeedback {
    scheduler: Rc<dyn Scheduler>,
    revert_after: Duration,
    pending: RefCell<Option<TimerHandle>>,
}

impl TapFeedback {
    pub fn new(scheduler: Rc<dyn Scheduler>, revert_after: Duration) -> Self {
        Self {
            scheduler,
            revert_after,
            pending: RefCell::new(None),
        }
    }

    /// Marks `path` as tapped and clears the mark after the revert delay.
    /// Desktop clicks get no feedback.
    pub fn tap(&self, path: &'static str, is_mobile: bool, mark: MarkTapped) -> bool {
        if !is_mobile {
            return false;
        }
        mark(Some(path));
        let handle = self
            .scheduler
            .schedule(self.revert_after, Box::new(move || mark(None)));
        self.pending.replace(Some(handle));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::timer::ManualScheduler;

    #[test]
    fn test_root_link_matches_exactly() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/dashboard"));
    }

    #[test]
    fn test_nested_routes_match_parent() {
        assert!(is_active("/settings", "/settings"));
        assert!(is_active("/settings", "/settings/profile"));
        assert!(!is_active("/settings", "/settingsx"));
        assert!(!is_active("/dashboard", "/"));
    }

    #[test]
    fn test_sections_have_unique_paths() {
        let mut paths: Vec<_> = SECTIONS
            .iter()
            .flat_map(|section| section.links.iter().map(|link| link.path))
            .collect();
        let total = paths.len();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), total);
    }

    fn recorder() -> (Rc<RefCell<Vec<Option<&'static str>>>>, MarkTapped) {
        let marks = Rc::new(RefCell::new(Vec::new()));
        let sink = marks.clone();
        (marks, Rc::new(move |mark: Option<&'static str>| sink.borrow_mut().push(mark)))
    }

    #[test]
    fn test_mobile_tap_reverts_after_delay() {
        let scheduler = ManualScheduler::default();
        let feedback = TapFeedback::new(Rc::new(scheduler.clone()), Duration::from_millis(150));
        let (marks, mark) = recorder();

        assert!(feedback.tap("/dashboard", true, mark));
        assert_eq!(*marks.borrow(), vec![Some("/dashboard")]);

        scheduler.advance_ms(149);
        assert_eq!(marks.borrow().len(), 1);
        scheduler.advance_ms(1);
        assert_eq!(*marks.borrow(), vec![Some("/dashboard"), None]);
    }

    #[test]
    fn test_desktop_click_has_no_feedback() {
        let scheduler = ManualScheduler::default();
        let feedback = TapFeedback::new(Rc::new(scheduler.clone()), Duration::from_millis(150));
        let (marks, mark) = recorder();

        assert!(!feedback.tap("/", false, mark));
        assert!(marks.borrow().is_empty());
        assert_eq!(scheduler.pending(), 0);
    }
}
