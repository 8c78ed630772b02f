//! Open/close triggers of the sidebar.
//!
//! Four independent triggers can ask for the sidebar to open or close. None
//! of them stores the open flag: they decide whether and when to dispatch a
//! [`SidebarAction`] to the single owner.

use crate::config::ShellTimings;
use crate::layout::state::SidebarAction;
use crate::shared::timer::{Scheduler, TimerHandle};
use std::cell::RefCell;
use std::rc::Rc;

pub type Dispatch = Rc<dyn Fn(SidebarAction)>;

/// The parts of a DOM event the triggers look at.
pub trait TriggerEvent {
    fn stop_propagation(&self);
    fn prevent_default(&self);
    /// Whether the event was dispatched on the element the handler is
    /// attached to rather than bubbled up from a descendant.
    fn targets_self(&self) -> bool;
}

impl TriggerEvent for web_sys::Event {
    fn stop_propagation(&self) {
        web_sys::Event::stop_propagation(self);
    }

    fn prevent_default(&self) {
        web_sys::Event::prevent_default(self);
    }

    fn targets_self(&self) -> bool {
        match (self.target(), self.current_target()) {
            (Some(target), Some(current)) => target == current,
            _ => false,
        }
    }
}

pub struct ToggleMachine {
    dispatch: Dispatch,
    scheduler: Rc<dyn Scheduler>,
    timings: ShellTimings,
    pending_hamburger: RefCell<Option<TimerHandle>>,
    pending_overlay: RefCell<Option<TimerHandle>>,
}

impl ToggleMachine {
    pub fn new(dispatch: Dispatch, scheduler: Rc<dyn Scheduler>, timings: ShellTimings) -> Self {
        Self {
            dispatch,
            scheduler,
            timings,
            pending_hamburger: RefCell::new(None),
            pending_overlay: RefCell::new(None),
        }
    }

    fn schedule(&self, slot: &RefCell<Option<TimerHandle>>, delay: std::time::Duration, action: SidebarAction) {
        let dispatch = self.dispatch.clone();
        let handle = self
            .scheduler
            .schedule(delay, Box::new(move || dispatch(action)));
        // Replacing the slot drops, and so cancels, a still pending request.
        slot.replace(Some(handle));
    }

    /// Mobile hamburger button. The toggle is issued after the debounce so
    /// the originating touch/click finishes dispatching first; a repeated
    /// press inside the window collapses into one toggle.
    pub fn hamburger_pressed(&self, event: &dyn TriggerEvent) {
        event.stop_propagation();
        event.prevent_default();
        log::debug!("hamburger pressed");
        self.schedule(
            &self.pending_hamburger,
            self.timings.hamburger_debounce,
            SidebarAction::Toggle,
        );
    }

    /// Desktop collapse/expand label.
    pub fn collapse_clicked(&self) {
        log::debug!("collapse label clicked");
        (self.dispatch)(SidebarAction::Toggle);
    }

    /// Backdrop behind the open mobile menu. Clicks bubbling from children
    /// are ignored. Returns whether a close was scheduled.
    pub fn overlay_clicked(&self, event: &dyn TriggerEvent, is_mobile: bool, is_open: bool) -> bool {
        if !event.targets_self() || !(is_mobile && is_open) {
            return false;
        }
        log::debug!("overlay clicked: closing");
        self.schedule(
            &self.pending_overlay,
            self.timings.overlay_close_delay,
            SidebarAction::Close,
        );
        true
    }

    /// Navigation happened. Closes the mobile menu immediately.
    pub fn route_changed(&self, is_mobile: bool, is_open: bool) -> bool {
        if !(is_mobile && is_open) {
            return false;
        }
        log::debug!("route changed: closing mobile menu");
        (self.dispatch)(SidebarAction::Close);
        true
    }
}

/// Detects changes of the current route path.
pub struct RouteWatcher {
    last: RefCell<String>,
}

impl RouteWatcher {
    pub fn new(initial: String) -> Self {
        Self {
            last: RefCell::new(initial),
        }
    }

    pub fn path_changed(&self, path: &str) -> bool {
        if *self.last.borrow() == path {
            return false;
        }
        *self.last.borrow_mut() = path.to_string();
        true
    }
}

#[cfg(test)]
pub(crate) use fake_event::FakeEvent;


#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::state::SidebarState;
    use crate::shared::timer::ManualScheduler;

    struct Harness {
        scheduler: ManualScheduler,
        requests: Rc<RefCell<Vec<SidebarAction>>>,
        machine: ToggleMachine,
    }

    fn harness() -> Harness {
        let scheduler = ManualScheduler::default();
        let requests: Rc<RefCell<Vec<SidebarAction>>> = Rc::new(RefCell::new(Vec::new()));
        let log = requests.clone();
        let machine = ToggleMachine::new(
            Rc::new(move |action: SidebarAction| log.borrow_mut().push(action)),
            Rc::new(scheduler.clone()),
            ShellTimings::default(),
        );
        Harness {
            scheduler,
            requests,
            machine,
        }
    }

    #[test]
    fn test_hamburger_toggles_after_debounce() {
        let h = harness();
        let event = FakeEvent::on_self();

        h.machine.hamburger_pressed(&event);
        assert!(event.propagation_stopped.get());
        assert!(event.default_prevented.get());
        assert!(h.requests.borrow().is_empty());

        h.scheduler.advance_ms(10);
        assert_eq!(*h.requests.borrow(), vec![SidebarAction::Toggle]);
    }

    #[test]
    fn test_duplicate_hamburger_press_collapses() {
        let h = harness();
        h.machine.hamburger_pressed(&FakeEvent::on_self());
        h.scheduler.advance_ms(3);
        h.machine.hamburger_pressed(&FakeEvent::on_self());

        h.scheduler.advance_ms(100);
        assert_eq!(*h.requests.borrow(), vec![SidebarAction::Toggle]);
    }

    #[test]
    fn test_collapse_label_toggles_immediately() {
        let h = harness();
        h.machine.collapse_clicked();
        h.machine.collapse_clicked();
        assert_eq!(
            *h.requests.borrow(),
            vec![SidebarAction::Toggle, SidebarAction::Toggle]
        );
    }

    #[test]
    fn test_overlay_ignores_bubbled_clicks() {
        let h = harness();
        for is_mobile in [false, true] {
            for is_open in [false, true] {
                assert!(!h.machine.overlay_clicked(&FakeEvent::bubbled(), is_mobile, is_open));
            }
        }
        h.scheduler.advance_ms(1_000);
        assert!(h.requests.borrow().is_empty());
    }

    #[test]
    fn test_overlay_requires_open_mobile() {
        let h = harness();
        assert!(!h.machine.overlay_clicked(&FakeEvent::on_self(), false, true));
        assert!(!h.machine.overlay_clicked(&FakeEvent::on_self(), true, false));
        h.scheduler.advance_ms(1_000);
        assert!(h.requests.borrow().is_empty());
    }

    #[test]
    fn test_overlay_closes_once_after_delay() {
        let h = harness();
        assert!(h.machine.overlay_clicked(&FakeEvent::on_self(), true, true));

        h.scheduler.advance_ms(49);
        assert!(h.requests.borrow().is_empty());
        h.scheduler.advance_ms(1);
        assert_eq!(*h.requests.borrow(), vec![SidebarAction::Close]);

        h.scheduler.advance_ms(1_000);
        assert_eq!(h.requests.borrow().len(), 1);
    }

    #[test]
    fn test_route_change_closes_without_delay() {
        let h = harness();
        assert!(h.machine.route_changed(true, true));
        assert_eq!(*h.requests.borrow(), vec![SidebarAction::Close]);
        assert_eq!(h.scheduler.pending(), 0);
    }

    #[test]
    fn test_route_change_ignored_on_desktop_or_closed() {
        let h = harness();
        assert!(!h.machine.route_changed(false, true));
        assert!(!h.machine.route_changed(true, false));
        assert!(h.requests.borrow().is_empty());
    }

    #[test]
    fn test_teardown_cancels_pending_requests() {
        let h = harness();
        h.machine.hamburger_pressed(&FakeEvent::on_self());
        h.machine.overlay_clicked(&FakeEvent::on_self(), true, true);
        assert_eq!(h.scheduler.pending(), 2);

        drop(h.machine);
        h.scheduler.advance_ms(1_000);
        assert!(h.requests.borrow().is_empty());
        assert_eq!(h.scheduler.pending(), 0);
    }

    #[test]
    fn test_triggers_share_one_owner() {
        let scheduler = ManualScheduler::default();
        let store = Rc::new(RefCell::new(SidebarState::for_viewport(400.0)));
        let owner = store.clone();
        let machine = ToggleMachine::new(
            Rc::new(move |action: SidebarAction| owner.borrow_mut().reduce(action)),
            Rc::new(scheduler.clone()),
            ShellTimings::default(),
        );

        machine.hamburger_pressed(&FakeEvent::on_self());
        scheduler.advance_ms(10);
        assert!(store.borrow().is_open);

        let (is_mobile, is_open) = (store.borrow().is_mobile, store.borrow().is_open);
        machine.overlay_clicked(&FakeEvent::on_self(), is_mobile, is_open);
        scheduler.advance_ms(50);
        assert!(!store.borrow().is_open);
    }

    #[test]
    fn test_route_watcher() {
        let watcher = RouteWatcher::new("/".to_string());
        assert!(!watcher.path_changed("/"));
        assert!(watcher.path_changed("/dashboard"));
        assert!(!watcher.path_changed("/dashboard"));
        assert!(watcher.path_changed("/"));
    }
}
