use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Photo {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub file_name: String,
    #[serde(default)]
    pub date_time: Option<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub likes: Vec<Like>,
    #[serde(default)]
    pub num_likes: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Like {
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: String,
    pub comment: String,
    pub date_time: String,
    #[serde(default)]
    pub user_id: String,
    pub user: CommentAuthor,
}

/// Denormalized author attached to each comment by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommentAuthor {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Body of the acknowledgement the API sends back for mutations.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}

impl Photo {
    pub fn is_liked_by(&self, user_id: &str) -> bool {
        self.likes.iter().any(|like| like.user_id == user_id)
    }

    /// Flips `user_id`'s membership in the like set, keeping the count in step.
    pub fn toggle_like(&mut self, user_id: &str) {
        if self.is_liked_by(user_id) {
            self.likes.retain(|like| like.user_id != user_id);
            self.num_likes = self.num_likes.saturating_sub(1);
        } else {
            self.likes.push(Like { user_id: user_id.to_string() });
            self.num_likes += 1;
        }
    }
}

impl Comment {
    pub fn author_id(&self) -> &str {
        if self.user_id.is_empty() {
            &self.user.id
        } else {
            &self.user_id
        }
    }
}

impl CommentAuthor {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl User {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
