use serde::{Deserialize, Serialize};

use crate::error::ValidationFailure;
use crate::meals::model::{MealDraft, MAX_RATING, MIN_RATING};

#[derive(Debug, Deserialize)]
pub struct CreateMealRequest {
    pub name: String,
    #[serde(default)]
    pub photo: Option<serde_bytes::ByteBuf>,
    /// Any JSON number; values that are not an `i64` fail validation.
    pub rating: serde_json::Number,
}

impl TryFrom<CreateMealRequest> for MealDraft {
    type Error = ValidationFailure;

    fn try_from(r: CreateMealRequest) -> Result<Self, Self::Error> {
        let rating = r.rating.as_i64().ok_or(ValidationFailure)?;
        Ok(Self {
            name: r.name,
            photo: r.photo.map(|buf| buf.into_vec().into()),
            rating,
        })
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RatingScale {
    pub min: i64,
    pub max: i64,
}

impl Default for RatingScale {
    fn default() -> Self {
        Self {
            min: MIN_RATING,
            max: MAX_RATING,
        }
    }
}

#[cfg(test)]
mod dto_tests {
    use super::*;

    fn request(json: &str) -> CreateMealRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn integer_rating_reaches_the_draft() {
        let draft = MealDraft::try_from(request(r#"{"name":"Zero","rating":-1}"#)).unwrap();
        assert_eq!(draft.rating, -1);
        assert_eq!(draft.photo, None);
    }

    #[test]
    fn rating_outside_i64_is_a_validation_failure() {
        for json in [
            r#"{"name":"Big","rating":99999999999999999999}"#,
            r#"{"name":"Big","rating":18446744073709551615}"#,
            r#"{"name":"Half","rating":2.5}"#,
        ] {
            assert_eq!(MealDraft::try_from(request(json)), Err(ValidationFailure), "{json}");
        }
    }
}
