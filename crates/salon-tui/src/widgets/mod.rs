//! Custom widget components

mod footer;
mod form_dialog;
pub mod modal_overlay;
mod navbar;
pub mod pages;
mod toasts;

pub use footer::Footer;
pub use form_dialog::FormDialog;
pub use navbar::Navbar;
pub use toasts::Toasts;
