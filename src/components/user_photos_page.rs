use dioxus::prelude::*;
use dioxus::dioxus_core::use_drop;
use tokio::sync::mpsc::UnboundedSender;

use crate::backend::model::{Comment, Photo};
use crate::backend::AppCmd;
use crate::components::common::{format_timestamp, EmptyState};
use crate::components::user_photos_state::{CommentDialog, PhotosAction};
use crate::components::AppState;
use crate::config::AppConfig;
use crate::Route;

#[component]
pub fn UserPhotosComponent(user_id: String) -> Element {
    let app_state = use_context::<AppState>();
    let cmd_tx = use_context::<UnboundedSender<AppCmd>>();
    let mut page_title = app_state.page_title;

    let load_tx = cmd_tx.clone();
    use_effect(use_reactive((&user_id,), move |(user_id,)| {
        app_state.dispatch(&load_tx, PhotosAction::ShowUser { user_id });
    }));

    let leave_tx = cmd_tx.clone();
    use_drop(move || app_state.dispatch(&leave_tx, PhotosAction::LeavePage));

    use_effect(move || {
        let label = app_state.user_photos.read().top_bar_label();
        page_title.set(label.unwrap_or_else(|| "User Photos".to_string()));
    });

    let view = app_state.user_photos.read();
    let bio = view.bio().map(str::to_string);
    let dialog_open = matches!(view.dialog, CommentDialog::Open { .. });
    let draft = view.draft.clone();
    let submitting = view.submitting_comment;

    let page = rsx! {
        div { class: "page-container animate-fade-in",
            Link {
                to: Route::UserDetailComponent { user_id: user_id.clone() },
                class: "button-link",
                "User Details"
            }

            h2 { class: "page-heading", "User Photos" }

            if view.photos.is_empty() {
                EmptyState { icon: "📷".to_string(), title: "No photos yet".to_string() }
            }

            div { class: "photo-list",
                for photo in view.photos.iter() {
                    PhotoCard { key: "{photo.id}", photo: photo.clone() }
                }
            }

            if let Some(bio) = bio {
                div { class: "user-bio",
                    span { class: "caption", "Comment" }
                    p { "{bio}" }
                }
            }

            if dialog_open {
                AddCommentDialog { draft: draft, submitting: submitting }
            }
        }
    };
    page
}

#[component]
fn PhotoCard(photo: Photo) -> Element {
    let app_state = use_context::<AppState>();
    let cmd_tx = use_context::<UnboundedSender<AppCmd>>();
    let config = use_context::<AppConfig>();

    let view = app_state.user_photos.read();
    let glyph = view.like_glyph(&photo);
    let can_delete = view.can_delete_photo(&photo);
    let comments: Vec<(Comment, bool)> = photo
        .comments
        .iter()
        .map(|c| (c.clone(), view.can_delete_comment(c)))
        .collect();
    drop(view);

    let image_url = config.image_url(&photo.file_name);
    let posted = photo.date_time.as_deref().map(format_timestamp);
    let on_like = {
        let cmd_tx = cmd_tx.clone();
        let photo_id = photo.id.clone();
        move |_| app_state.dispatch(&cmd_tx, PhotosAction::ToggleLike { photo_id: photo_id.clone() })
    };
    let on_delete = {
        let cmd_tx = cmd_tx.clone();
        let photo_id = photo.id.clone();
        move |_| app_state.dispatch(&cmd_tx, PhotosAction::DeletePhoto { photo_id: photo_id.clone() })
    };
    let on_add_comment = {
        let cmd_tx = cmd_tx.clone();
        let photo_id = photo.id.clone();
        move |_| {
            app_state.dispatch(&cmd_tx, PhotosAction::OpenCommentDialog { photo_id: photo_id.clone() })
        }
    };

    rsx! {
        div { class: "photo-card",
            img { class: "photo-image", src: "{image_url}", alt: "User's pic is not available" }
            if let Some(posted) = posted {
                p { class: "caption", "{posted}" }
            }

            div { class: "like-row",
                button { class: glyph.class(), onclick: on_like, "{glyph.symbol()}" }
                span { "{photo.num_likes} Likes" }
            }

            if can_delete {
                button { class: "btn btn-danger", onclick: on_delete, "Delete Photo" }
            }

            if !comments.is_empty() {
                div { class: "comment-list",
                    p { class: "comment-list-title", "Comments:" }
                    for (comment, deletable) in comments {
                        CommentRow { key: "{comment.id}", comment: comment.clone(), deletable: deletable }
                    }
                }
            }

            button { class: "btn", onclick: on_add_comment, "Add Comment" }
        }
    }
}

#[component]
fn CommentRow(comment: Comment, deletable: bool) -> Element {
    let app_state = use_context::<AppState>();
    let cmd_tx = use_context::<UnboundedSender<AppCmd>>();

    let posted = format_timestamp(&comment.date_time);
    let author = comment.user.display_name();
    let on_delete = {
        let comment_id = comment.id.clone();
        move |_| {
            app_state.dispatch(&cmd_tx, PhotosAction::DeleteComment { comment_id: comment_id.clone() })
        }
    };

    rsx! {
        div { class: "comment",
            p { "{comment.comment}" }
            p {
                b { "Commented ON: " }
                "{posted}"
            }
            p {
                b { "Commented BY: " }
                Link { to: Route::UserDetailComponent { user_id: comment.user.id.clone() }, "{author}" }
            }
            if deletable {
                button { class: "btn btn-danger", onclick: on_delete, "Delete Comment" }
            }
        }
    }
}

#[component]
fn AddCommentDialog(draft: String, submitting: bool) -> Element {
    let app_state = use_context::<AppState>();
    let cmd_tx = use_context::<UnboundedSender<AppCmd>>();

    let on_input = {
        let cmd_tx = cmd_tx.clone();
        move |e: FormEvent| app_state.dispatch(&cmd_tx, PhotosAction::EditDraft { text: e.value() })
    };
    let on_cancel = {
        let cmd_tx = cmd_tx.clone();
        move |_| app_state.dispatch(&cmd_tx, PhotosAction::CancelComment)
    };
    let on_submit = move |_| app_state.dispatch(&cmd_tx, PhotosAction::SubmitComment);

    rsx! {
        div { class: "dialog-backdrop",
            div { class: "dialog",
                h3 { class: "dialog-title", "Add Comment" }
                p { class: "dialog-text", "Enter a new comment for the photo." }
                textarea {
                    id: "comment",
                    class: "dialog-input",
                    rows: "4",
                    autofocus: true,
                    placeholder: "Comment",
                    value: "{draft}",
                    oninput: on_input,
                }
                div { class: "dialog-actions",
                    button { class: "btn", onclick: on_cancel, "Cancel" }
                    button { class: "btn btn-primary", disabled: submitting, onclick: on_submit, "Add" }
                }
            }
        }
    }
}
