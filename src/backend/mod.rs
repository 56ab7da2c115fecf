pub mod api;
pub mod model;

use api::ApiClient;
use model::{Photo, User};
use tokio::sync::mpsc;

use crate::config::AppConfig;

#[derive(Debug, Clone, PartialEq)]
pub enum AppCmd {
    LoadUserPhotos {
        generation: u64,
        user_id: String,
        logged_in_user_id: Option<String>,
    },
    ToggleLike { photo_id: String },
    AddComment { photo_id: String, comment: String },
    DeleteComment { comment_id: String },
    DeletePhoto { photo_id: String },
    FetchUser { user_id: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    UserPhotosLoaded {
        generation: u64,
        photos: Vec<Photo>,
        user: User,
    },
    UserPhotosFailed { generation: u64, error: String },
    LikeToggled { photo_id: String },
    LikeFailed { photo_id: String, error: String },
    CommentAdded { photo_id: String },
    CommentFailed { photo_id: String, error: String },
    CommentDeleted { comment_id: String },
    PhotoDeleted { photo_id: String },
    DeleteFailed { id: String, error: String },
    UserFetched(User),
    UserFetchFailed { user_id: String, error: String },
}

/// Runs API requests on behalf of the UI, one command at a time.
pub struct Backend {
    api: ApiClient,
    cmd_rx: mpsc::UnboundedReceiver<AppCmd>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl Backend {
    pub fn new(
        api: ApiClient,
        cmd_rx: mpsc::UnboundedReceiver<AppCmd>,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        Self { api, cmd_rx, event_tx }
    }

    pub async fn run(&mut self) {
        while let Some(cmd) = self.cmd_rx.recv().await {
            let event = self.handle_command(cmd).await;
            if self.event_tx.send(event).is_err() {
                tracing::warn!("event receiver dropped, stopping backend");
                break;
            }
        }
        tracing::info!("backend stopped");
    }

    async fn handle_command(&self, cmd: AppCmd) -> AppEvent {
        match cmd {
            AppCmd::LoadUserPhotos { generation, user_id, logged_in_user_id } => {
                match self.load_user_photos(&user_id, logged_in_user_id.as_deref()).await {
                    Ok((photos, user)) => {
                        tracing::debug!(%user_id, generation, count = photos.len(), "loaded photos");
                        AppEvent::UserPhotosLoaded { generation, photos, user }
                    }
                    Err(e) => {
                        tracing::error!(%user_id, "Error fetching user data: {}", e);
                        AppEvent::UserPhotosFailed { generation, error: e.to_string() }
                    }
                }
            }
            AppCmd::ToggleLike { photo_id } => match self.api.like_photo(&photo_id).await {
                Ok(ack) => {
                    tracing::debug!(%photo_id, message = ?ack.message, "like toggled");
                    AppEvent::LikeToggled { photo_id }
                }
                Err(e) => {
                    tracing::error!(%photo_id, "Error liking/unliking photo: {}", e);
                    AppEvent::LikeFailed { photo_id, error: e.to_string() }
                }
            },
            AppCmd::AddComment { photo_id, comment } => {
                match self.api.add_comment(&photo_id, &comment).await {
                    Ok(ack) => {
                        tracing::info!(%photo_id, message = ?ack.message, "comment added");
                        AppEvent::CommentAdded { photo_id }
                    }
                    Err(e) => {
                        tracing::error!(%photo_id, "Error adding comment: {}", e);
                        AppEvent::CommentFailed { photo_id, error: e.to_string() }
                    }
                }
            }
            AppCmd::DeleteComment { comment_id } => {
                match self.api.delete_comment(&comment_id).await {
                    Ok(ack) => {
                        tracing::info!(%comment_id, message = ?ack.message, "comment deleted");
                        AppEvent::CommentDeleted { comment_id }
                    }
                    Err(e) => {
                        tracing::error!(%comment_id, "Unable to delete comment: {}", e);
                        AppEvent::DeleteFailed { id: comment_id, error: e.to_string() }
                    }
                }
            }
            AppCmd::DeletePhoto { photo_id } => match self.api.delete_photo(&photo_id).await {
                Ok(ack) => {
                    tracing::info!(%photo_id, message = ?ack.message, "photo deleted");
                    AppEvent::PhotoDeleted { photo_id }
                }
                Err(e) => {
                    tracing::error!(%photo_id, "Unable to delete photo: {}", e);
                    AppEvent::DeleteFailed { id: photo_id, error: e.to_string() }
                }
            },
            AppCmd::FetchUser { user_id } => match self.api.user(&user_id).await {
                Ok(user) => AppEvent::UserFetched(user),
                Err(e) => {
                    tracing::error!(%user_id, "Error fetching user: {}", e);
                    AppEvent::UserFetchFailed { user_id, error: e.to_string() }
                }
            },
        }
    }

    // Photos first, then the profile; both must succeed.
    async fn load_user_photos(
        &self,
        user_id: &str,
        logged_in_user_id: Option<&str>,
    ) -> Result<(Vec<Photo>, User), api::ApiError> {
        let photos = self.api.photos_of_user(user_id, logged_in_user_id).await?;
        let user = self.api.user(user_id).await?;
        Ok((photos, user))
    }
}

pub async fn start_backend(
    config: AppConfig,
    cmd_rx: mpsc::UnboundedReceiver<AppCmd>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
) {
    tracing::info!(base_url = %config.api_base_url, "starting photo API backend");
    let mut backend = Backend::new(ApiClient::new(&config), cmd_rx, event_tx);
    backend.run().await
}
