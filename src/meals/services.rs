use tracing::debug;

use crate::error::ValidationFailure;
use crate::meals::model::{Meal, MealDraft};

/// Runs a draft through the meal gate.
pub fn create_meal(draft: MealDraft) -> Result<Meal, ValidationFailure> {
    let has_photo = draft.photo.is_some();
    let meal = Meal::try_from(draft)?;
    debug!(name = %meal.name(), rating = meal.rating(), has_photo, "meal created");
    Ok(meal)
}
