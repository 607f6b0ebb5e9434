//! Interaction state for the page, kept free of DOM types so it can be
//! exercised without a browser.

pub mod carousel;
pub mod reveal;
pub mod scroll_progress;
pub mod tilt;
