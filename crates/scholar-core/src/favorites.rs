//! Bookmarked paper ids.

use serde::{Deserialize, Serialize};

/// Insertion-ordered set of favorited paper ids.
///
/// Ids are not checked against a catalog; stale ids are tolerated and simply
/// never match a paper.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet {
    ids: Vec<String>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new set with `id` added if absent or removed if present.
    pub fn toggle(&self, id: &str) -> Self {
        if self.contains(id) {
            Self {
                ids: self.ids.iter().filter(|existing| *existing != id).cloned().collect(),
            }
        } else {
            let mut ids = self.ids.clone();
            ids.push(id.to_string());
            Self { ids }
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    /// Ids in the order they were favorited.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

// Set equality: order of insertion is not significant.
impl PartialEq for FavoriteSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|id| other.contains(id))
    }
}

impl Eq for FavoriteSet {}

impl<S: Into<String>> FromIterator<S> for FavoriteSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::new(), |mut set, id| {
                let id = id.into();
                if !set.contains(&id) {
                    set.ids.push(id);
                }
                set
            })
    }
}

/// Toggle a single id in a favorites set.
pub fn toggle_favorite(favorites: &FavoriteSet, id: &str) -> FavoriteSet {
    favorites.toggle(id)
}
