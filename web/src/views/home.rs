use dioxus::prelude::*;
use ui::UserList;

#[component]
pub fn Home() -> Element {
    rsx! {
        UserList {}
    }
}
