//! Router collaborator used by the shell's session actions.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;
use std::rc::Rc;

pub trait Navigator {
    fn navigate(&self, path: &str);
    fn current_path(&self) -> String;
}

/// `leptos_router` backed navigator. Must be created inside `<Router>`.
pub struct RouterNavigator {
    navigate: Rc<dyn Fn(&str)>,
    pathname: Memo<String>,
}

impl Navigator for RouterNavigator {
    fn navigate(&self, path: &str) {
        log::debug!("navigate: {}", path);
        (self.navigate)(path);
    }

    fn current_path(&self) -> String {
        self.pathname.get_untracked()
    }
}

pub fn use_navigator() -> Rc<dyn Navigator> {
    let navigate = use_navigate();
    let location = use_location();
    Rc::new(RouterNavigator {
        navigate: Rc::new(move |path: &str| navigate(path, NavigateOptions::default())),
        pathname: location.pathname,
    })
}

#[cfg(test)]
pub(crate) use recording::RecordingNavigator;

#[cfg(test)]
mod recording {
    use super::Navigator;
    use std::cell::RefCell;

    #[derive(Default)]
    pub(crate) struct RecordingNavigator {
        pub path: RefCell<String>,
        pub requests: RefCell<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, path: &str) {
            self.requests.borrow_mut().push(path.to_string());
            *self.path.borrow_mut() = path.to_string();
        }

        fn current_path(&self) -> String {
            self.path.borrow().clone()
        }
    }
}
