use dioxus::prelude::*;
use crate::Route;

#[component]
pub fn HomeComponent() -> Element {
    let app_state = use_context::<crate::components::AppState>();
    let viewer = app_state.logged_in_user_id.read().clone();
    let mut page_title = app_state.page_title;

    use_effect(move || page_title.set("Photo Share".to_string()));

    rsx! {
        div { class: "page-container animate-fade-in", id: "home-page",
            h1 { "Welcome to Photo Share!" }
            if let Some(id) = viewer {
                Link {
                    to: Route::UserPhotosComponent { user_id: id },
                    class: "button-link",
                    "Go to your photos"
                }
            } else {
                p { class: "hint", "Set PHOTO_LOGGED_IN_USER_ID to browse as a user." }
            }
        }
    }
}
