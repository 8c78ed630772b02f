//! App-wide sidebar owner shared by the sidebar and the top bar.

use crate::config::ShellTimings;
use crate::layout::left::toggle::ToggleMachine;
use crate::layout::responsive::viewport_width;
use crate::layout::state::{SidebarAction, SidebarState, SidebarStore};
use crate::shared::timer::{GlooScheduler, Scheduler};
use leptos::prelude::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct ShellContext {
    pub sidebar: RwSignal<SidebarState>,
    pub timings: ShellTimings,
    triggers: StoredValue<ToggleMachine, LocalStorage>,
    scheduler: StoredValue<Rc<dyn Scheduler>, LocalStorage>,
}

impl ShellContext {
    pub fn new(timings: ShellTimings) -> Self {
        let sidebar = RwSignal::new(SidebarState::for_viewport(viewport_width()));
        let scheduler: Rc<dyn Scheduler> = Rc::new(GlooScheduler);
        let triggers = ToggleMachine::new(
            Rc::new(move |action: SidebarAction| sidebar.dispatch(action)),
            scheduler.clone(),
            timings,
        );
        Self {
            sidebar,
            timings,
            triggers: StoredValue::new_local(triggers),
            scheduler: StoredValue::new_local(scheduler),
        }
    }

    /// Runs `f` against the trigger state machine.
    pub fn with_triggers<T>(&self, f: impl FnOnce(&ToggleMachine) -> T) -> T {
        self.triggers.with_value(f)
    }

    pub fn scheduler(&self) -> Rc<dyn Scheduler> {
        self.scheduler.get_value()
    }

    pub fn is_open(&self) -> bool {
        self.sidebar.with(|s| s.is_open)
    }

    pub fn is_mobile(&self) -> bool {
        self.sidebar.with(|s| s.is_mobile)
    }
}

pub fn use_shell() -> ShellContext {
    use_context::<ShellContext>().expect("ShellContext not found")
}
