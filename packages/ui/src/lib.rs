//! This crate contains the shared navigation buttons for client-rendered pages.

mod navbar;
pub use navbar::Navbar;

mod buttons;
pub use buttons::{AboutMeButton, LoginButton, LogoutButton};
