use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::backend::model::{Comment, Photo, User};
use crate::backend::{AppCmd, AppEvent};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state")]
pub enum CommentDialog {
    Closed,
    Open { photo_id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeGlyph {
    Liked,
    NotLiked,
}

impl LikeGlyph {
    pub fn symbol(self) -> &'static str {
        match self {
            LikeGlyph::Liked => "♥",
            LikeGlyph::NotLiked => "♡",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            LikeGlyph::Liked => "like-toggle liked",
            LikeGlyph::NotLiked => "like-toggle",
        }
    }
}

/// Intents raised by the photos page.
#[derive(Debug, Clone, PartialEq)]
pub enum PhotosAction {
    ShowUser { user_id: String },
    LeavePage,
    ToggleLike { photo_id: String },
    OpenCommentDialog { photo_id: String },
    EditDraft { text: String },
    CancelComment,
    SubmitComment,
    DeleteComment { comment_id: String },
    DeletePhoto { photo_id: String },
}

/// View-model behind the user photos page.
///
/// UI actions go through [`UserPhotosState::update`] and backend results
/// through [`UserPhotosState::apply`]; both return the commands to send next.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPhotosState {
    pub photos: Vec<Photo>,
    pub user: Option<User>,
    pub comment: Option<String>,
    pub logged_in_user_id: Option<String>,
    pub subject_user_id: Option<String>,
    pub draft: String,
    pub dialog: CommentDialog,
    pub submitting_comment: bool,
    /// Latest load issued; results from older loads are dropped.
    pub generation: u64,
    /// Photo id -> generation current when its toggle was issued.
    pub pending_likes: BTreeMap<String, u64>,
}

impl UserPhotosState {
    pub fn new(logged_in_user_id: Option<String>) -> Self {
        Self {
            photos: Vec::new(),
            user: None,
            comment: None,
            logged_in_user_id,
            subject_user_id: None,
            draft: String::new(),
            dialog: CommentDialog::Closed,
            submitting_comment: false,
            generation: 0,
            pending_likes: BTreeMap::new(),
        }
    }

    pub fn update(&mut self, action: PhotosAction) -> Vec<AppCmd> {
        match action {
            PhotosAction::ShowUser { user_id } => {
                self.subject_user_id = Some(user_id);
                self.reload()
            }
            PhotosAction::LeavePage => {
                self.close_dialog();
                vec![]
            }
            PhotosAction::ToggleLike { photo_id } => self.toggle_like(photo_id),
            PhotosAction::OpenCommentDialog { photo_id } => {
                if self.dialog == CommentDialog::Closed {
                    self.dialog = CommentDialog::Open { photo_id };
                }
                vec![]
            }
            PhotosAction::EditDraft { text } => {
                self.draft = text;
                vec![]
            }
            PhotosAction::CancelComment => {
                self.close_dialog();
                vec![]
            }
            PhotosAction::SubmitComment => {
                let CommentDialog::Open { photo_id } = &self.dialog else {
                    return vec![];
                };
                if self.submitting_comment {
                    tracing::debug!("comment submission already in flight");
                    return vec![];
                }
                self.submitting_comment = true;
                vec![AppCmd::AddComment { photo_id: photo_id.clone(), comment: self.draft.clone() }]
            }
            PhotosAction::DeleteComment { comment_id } => {
                let owned = self
                    .photos
                    .iter()
                    .flat_map(|p| p.comments.iter())
                    .any(|c| c.id == comment_id && self.can_delete_comment(c));
                if !owned {
                    tracing::warn!(%comment_id, "refusing to delete a comment the viewer did not write");
                    return vec![];
                }
                vec![AppCmd::DeleteComment { comment_id }]
            }
            PhotosAction::DeletePhoto { photo_id } => {
                let owned = self
                    .photos
                    .iter()
                    .any(|p| p.id == photo_id && self.can_delete_photo(p));
                if !owned {
                    tracing::warn!(%photo_id, "refusing to delete a photo the viewer does not own");
                    return vec![];
                }
                vec![AppCmd::DeletePhoto { photo_id }]
            }
        }
    }

    pub fn apply(&mut self, event: AppEvent) -> Vec<AppCmd> {
        match event {
            AppEvent::UserPhotosLoaded { generation, photos, user } => {
                if generation != self.generation {
                    tracing::debug!(generation, latest = self.generation, "dropping stale photo load");
                    return vec![];
                }
                self.photos = photos;
                // Toggles issued after this load went out are not reflected in it yet.
                if let Some(viewer) = self.logged_in_user_id.clone() {
                    for (photo_id, issued_at) in &self.pending_likes {
                        if *issued_at >= generation {
                            if let Some(photo) = self.photos.iter_mut().find(|p| &p.id == photo_id) {
                                photo.toggle_like(&viewer);
                            }
                        }
                    }
                }
                self.comment = user.comment.clone();
                self.user = Some(user);
                vec![]
            }
            AppEvent::UserPhotosFailed { generation, error } => {
                tracing::warn!(generation, %error, "photo load failed, keeping current data");
                vec![]
            }
            AppEvent::LikeToggled { photo_id } => {
                self.pending_likes.remove(&photo_id);
                vec![]
            }
            AppEvent::LikeFailed { photo_id, error } => {
                if self.pending_likes.remove(&photo_id).is_some() {
                    tracing::warn!(%photo_id, %error, "rolling back like toggle");
                    self.flip_like(&photo_id);
                }
                vec![]
            }
            AppEvent::CommentAdded { .. } => {
                self.submitting_comment = false;
                self.close_dialog();
                self.reload()
            }
            AppEvent::CommentFailed { error, .. } => {
                self.submitting_comment = false;
                tracing::warn!(%error, "comment not added, dialog stays open");
                vec![]
            }
            AppEvent::CommentDeleted { .. } | AppEvent::PhotoDeleted { .. } => self.reload(),
            AppEvent::DeleteFailed { id, error } => {
                tracing::warn!(%id, %error, "delete failed");
                vec![]
            }
            AppEvent::UserFetched(_) | AppEvent::UserFetchFailed { .. } => vec![],
        }
    }

    fn reload(&mut self) -> Vec<AppCmd> {
        let Some(user_id) = self.subject_user_id.clone() else {
            return vec![];
        };
        self.generation += 1;
        vec![AppCmd::LoadUserPhotos {
            generation: self.generation,
            user_id,
            logged_in_user_id: self.logged_in_user_id.clone(),
        }]
    }

    fn toggle_like(&mut self, photo_id: String) -> Vec<AppCmd> {
        if self.logged_in_user_id.is_none() {
            tracing::warn!(%photo_id, "cannot like without a logged in user");
            return vec![];
        }
        if self.pending_likes.contains_key(&photo_id) {
            tracing::debug!(%photo_id, "like toggle already in flight");
            return vec![];
        }
        if !self.flip_like(&photo_id) {
            return vec![];
        }
        self.pending_likes.insert(photo_id.clone(), self.generation);
        vec![AppCmd::ToggleLike { photo_id }]
    }

    fn flip_like(&mut self, photo_id: &str) -> bool {
        let Some(viewer) = self.logged_in_user_id.as_deref() else {
            return false;
        };
        match self.photos.iter_mut().find(|p| p.id == photo_id) {
            Some(photo) => {
                photo.toggle_like(viewer);
                true
            }
            None => false,
        }
    }

    fn close_dialog(&mut self) {
        self.dialog = CommentDialog::Closed;
        self.draft.clear();
    }

    fn is_viewer(&self, user_id: &str) -> bool {
        self.logged_in_user_id.as_deref() == Some(user_id)
    }

    pub fn like_glyph(&self, photo: &Photo) -> LikeGlyph {
        match self.logged_in_user_id.as_deref() {
            Some(viewer) if photo.is_liked_by(viewer) => LikeGlyph::Liked,
            _ => LikeGlyph::NotLiked,
        }
    }

    pub fn can_delete_photo(&self, photo: &Photo) -> bool {
        self.is_viewer(&photo.user_id)
    }

    pub fn can_delete_comment(&self, comment: &Comment) -> bool {
        self.is_viewer(comment.author_id())
    }

    /// Bio shown under the photo list, only once the user is known.
    pub fn bio(&self) -> Option<&str> {
        self.user.as_ref()?;
        self.comment.as_deref().filter(|c| !c.is_empty())
    }

    /// Only labels the user whose photos were asked for, not a previous subject.
    pub fn top_bar_label(&self) -> Option<String> {
        self.user
            .as_ref()
            .filter(|u| self.subject_user_id.as_deref() == Some(u.id.as_str()))
            .map(|u| format!("Photos of: {}", u.display_name()))
    }
}
