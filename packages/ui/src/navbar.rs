use dioxus::prelude::*;

use crate::{AboutMeButton, LoginButton, LogoutButton};

/// Account buttons for the current visitor.
///
/// Signed-in users (`user_pk` set) get "about me" and logout, everyone else
/// gets login.
#[component]
pub fn Navbar(user_pk: Option<String>, children: Element) -> Element {
    let buttons = match user_pk {
        Some(pk) => rsx! {
            AboutMeButton { pk }
            LogoutButton {}
        },
        None => rsx! {
            LoginButton {}
        },
    };

    rsx! {
        div {
            class: "navbar",
            {children}
            {buttons}
        }
    }
}
