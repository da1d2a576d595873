//! Page behaviours that react to scrolling, clicks and form submission.

mod fade_in;
mod form_submit;
mod scroll_progress;
mod smooth_scroll;

pub use fade_in::use_fade_in;
pub use form_submit::use_form_submit;
pub use scroll_progress::use_scroll_progress;
pub use smooth_scroll::use_smooth_scroll;
