use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A rental listing. Records are read-only once loaded into a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub id: String,
    pub title: String,
    pub location: String,
    pub description: String,
    /// Monthly rent.
    pub price: u64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    /// Square footage.
    pub area: u32,
    #[serde(rename = "type")]
    pub property_type: String,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
}

impl PropertyRecord {
    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities.iter().any(|a| a == amenity)
    }

    /// The cover image shown in listings.
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Favorite property ids, kept in the order they were added.
///
/// Equality and serialization only see the ids. Removing an id and adding it
/// straight back restores its old position, so a double toggle is a no-op.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet {
    ids: Vec<String>,
    #[serde(skip)]
    last_removed: Option<(String, usize)>,
}

impl PartialEq for FavoriteSet {
    fn eq(&self, other: &Self) -> bool {
        self.ids == other.ids
    }
}

impl Eq for FavoriteSet {}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from stored ids, dropping duplicates but keeping first-seen order.
    pub fn from_ids<I: IntoIterator<Item = String>>(ids: I) -> Self {
        let mut set = Self::new();
        for id in ids {
            if !set.contains(&id) {
                set.ids.push(id);
            }
        }
        set
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|f| f == id)
    }

    /// Removes `id` if present, otherwise adds it. Returns the new membership.
    ///
    /// A re-add of the id removed by the previous toggle goes back to its old
    /// slot; any other id is appended.
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(pos) = self.ids.iter().position(|f| f == id) {
            self.ids.remove(pos);
            self.last_removed = Some((id.to_string(), pos));
            return false;
        }
        let pos = match self.last_removed.take() {
            Some((removed, pos)) if removed == id => pos.min(self.ids.len()),
            _ => self.ids.len(),
        };
        self.ids.insert(pos, id.to_string());
        true
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Login or registration input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// The public view of an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: Uuid,
    pub email: String,
}

/// The persisted form of an account. Never handed out past the auth command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredUser {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub salt: String,
    pub iterations: u32,
    pub created_at: DateTime<Utc>,
}

impl StoredUser {
    pub fn record(&self) -> UserRecord {
        UserRecord {
            id: self.id,
            email: self.email.clone(),
        }
    }
}
