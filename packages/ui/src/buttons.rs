//! Buttons that leave the page for the account routes.
//!
//! They render with the same ids and `data-pk` attribute the server-rendered
//! pages use, and navigate to the same targets the `nav` binder computes.

use dioxus::prelude::*;
use nav::{Binding, RedirectTarget};

fn navigate(target: RedirectTarget) {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        use nav::Navigator;
        tracing::info!(%target, "navigating");
        nav::web::WebNavigator.navigate(&target);
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        tracing::warn!(%target, "full-page navigation is only available in the browser");
    }
}

/// Button leading to the profile page of record `pk`.
#[component]
pub fn AboutMeButton(
    pk: String,
    #[props(default = "About me".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let binding = Binding::about_me();
    let id = binding.element_id.clone();
    let key = pk.clone();

    let onclick = move |_| navigate(binding.target_with_key(Some(&key)));

    rsx! {
        button {
            id: "{id}",
            class: "{class}",
            "data-pk": "{pk}",
            onclick: onclick,
            "{label}"
        }
    }
}

/// Button to log in.
#[component]
pub fn LoginButton(
    #[props(default = "Login".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let binding = Binding::login();
    let id = binding.element_id.clone();

    let onclick = move |_| navigate(binding.target_with_key(None));

    rsx! {
        button {
            id: "{id}",
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let binding = Binding::logout();
    let id = binding.element_id.clone();

    let onclick = move |_| navigate(binding.target_with_key(None));

    rsx! {
        button {
            id: "{id}",
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
