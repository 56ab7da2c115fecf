pub mod common;
pub mod home_page;
pub mod nav_bar;
pub mod user_detail_page;
pub mod user_photos_page;
pub mod user_photos_state;

use dioxus::prelude::*;
use tokio::sync::mpsc::UnboundedSender;

use crate::backend::model::User;
use crate::backend::{AppCmd, AppEvent};
use user_photos_state::{PhotosAction, UserPhotosState};

#[derive(Clone, Copy)]
pub struct AppState {
    pub user_photos: Signal<UserPhotosState>,
    pub viewed_user: Signal<Option<User>>,
    pub logged_in_user_id: Signal<Option<String>>,
    pub page_title: Signal<String>,
}

impl AppState {
    pub fn new(logged_in_user_id: Option<String>) -> Self {
        let viewer = logged_in_user_id.clone();
        Self {
            user_photos: use_signal(move || UserPhotosState::new(viewer)),
            viewed_user: use_signal(|| None),
            logged_in_user_id: use_signal(move || logged_in_user_id),
            page_title: use_signal(|| "Photo Share".to_string()),
        }
    }

    /// Reduces a page action and forwards the resulting commands to the backend.
    pub fn dispatch(&self, cmd_tx: &UnboundedSender<AppCmd>, action: PhotosAction) {
        let mut user_photos = self.user_photos;
        let cmds = user_photos.write().update(action);
        send_all(cmd_tx, cmds);
    }

    pub fn handle_event(&self, cmd_tx: &UnboundedSender<AppCmd>, event: AppEvent) {
        match event {
            AppEvent::UserFetched(user) => {
                let mut viewed_user = self.viewed_user;
                viewed_user.set(Some(user));
            }
            AppEvent::UserFetchFailed { user_id, error } => {
                tracing::warn!(%user_id, %error, "user details unavailable");
            }
            event => {
                let mut user_photos = self.user_photos;
                let cmds = user_photos.write().apply(event);
                send_all(cmd_tx, cmds);
            }
        }
    }
}

fn send_all(cmd_tx: &UnboundedSender<AppCmd>, cmds: Vec<AppCmd>) {
    for cmd in cmds {
        if let Err(e) = cmd_tx.send(cmd) {
            tracing::error!("Failed to send command to backend: {:?}", e);
        }
    }
}
