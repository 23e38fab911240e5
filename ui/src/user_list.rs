//! Client-side list of the users collection.

use api::models::User;
use dioxus::prelude::*;

const USERS_CSS: Asset = asset!("/assets/users.css");

/// Fetches the users collection on mount and renders it as a plain list.
#[component]
pub fn UserList() -> Element {
    let mut users = use_signal(Vec::<User>::new);

    // Fetch on mount
    let _loader = use_resource(move || async move {
        match api::get_users().await {
            Ok(list) => users.set(list),
            Err(err) => tracing::error!("Failed to load users: {}", err),
        }
    });

    rsx! {
        document::Stylesheet { href: USERS_CSS }

        div {
            class: "user-list",
            h1 { "User List" }
            ul {
                for user in users() {
                    li {
                        key: "{user.id}",
                        span { class: "user-name", "{user.name}" }
                        span { class: "user-phrase", "{user.even}" }
                        span { class: "user-phrase", "{user.odd}" }
                    }
                }
            }
        }
    }
}
