use bytes::Bytes;
use serde::Serialize;

use crate::error::ValidationFailure;

pub const MIN_RATING: i64 = 0;
pub const MAX_RATING: i64 = 5;

/// A validated meal entry. Only obtainable through [`Meal::try_new`] or
/// `Meal::try_from(MealDraft)`, so every instance satisfies the name and
/// rating constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meal {
    name: String,
    photo: Option<Bytes>,
    rating: u8,
}

/// Raw field values as collected from a form or a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealDraft {
    pub name: String,
    pub photo: Option<Bytes>,
    pub rating: i64,
}

impl Meal {
    /// Returns `None` when `name` is empty or `rating` is outside `0..=5`.
    /// The name is not trimmed.
    pub fn try_new(name: impl Into<String>, photo: Option<Bytes>, rating: i64) -> Option<Self> {
        let name = name.into();
        if name.is_empty() {
            return None;
        }
        let rating = rating_in_range(rating)?;
        Some(Self {
            name,
            photo,
            rating,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn photo(&self) -> Option<&Bytes> {
        self.photo.as_ref()
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn into_draft(self) -> MealDraft {
        MealDraft {
            name: self.name,
            photo: self.photo,
            rating: i64::from(self.rating),
        }
    }
}

impl TryFrom<MealDraft> for Meal {
    type Error = ValidationFailure;

    fn try_from(draft: MealDraft) -> Result<Self, Self::Error> {
        Meal::try_new(draft.name, draft.photo, draft.rating).ok_or(ValidationFailure)
    }
}

fn rating_in_range(rating: i64) -> Option<u8> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        u8::try_from(rating).ok()
    } else {
        None
    }
}
