pub mod api_utils;
pub mod document;
pub mod icons;
pub mod snackbar;
pub mod theme;
pub mod timer;
