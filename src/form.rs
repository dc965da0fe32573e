//! Headless meal editing session.
//!
//! `MealForm` holds the raw field values a UI collects and keeps the derived
//! state (save button, title) in sync with them. Any UI layer drives it through
//! the methods below and observes changes through [`FormEvent`] callbacks.

use bytes::Bytes;
use tracing::debug;

use crate::meals::{Meal, MealDraft, MIN_RATING};

/// How the form was shown, which decides how `cancel` leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// Presented modally to add a new meal.
    Modal,
    /// Pushed onto a navigation stack to edit an existing meal.
    Pushed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismissal {
    Dismiss,
    Pop,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    NameChanged(String),
    SaveEnabledChanged(bool),
    TitleChanged(Option<String>),
    PhotoPickerRequested,
    PhotoChanged,
    RatingChanged(i64),
    Saved(Meal),
    SaveRejected,
    Cancelled(Dismissal),
}

type Listener = Box<dyn FnMut(&FormEvent) + Send>;

pub struct MealForm {
    name_text: String,
    photo: Option<Bytes>,
    rating: i64,
    title: Option<String>,
    save_enabled: bool,
    name_editing: bool,
    presentation: Presentation,
    meal: Option<Meal>,
    listeners: Vec<Listener>,
}

impl MealForm {
    pub fn adding() -> Self {
        Self::from_draft(MealDraft::default(), None, Presentation::Modal, None)
    }

    pub fn editing(meal: Meal) -> Self {
        let title = Some(meal.name().to_string());
        Self::from_draft(
            meal.clone().into_draft(),
            title,
            Presentation::Pushed,
            Some(meal),
        )
    }

    fn from_draft(
        draft: MealDraft,
        title: Option<String>,
        presentation: Presentation,
        meal: Option<Meal>,
    ) -> Self {
        let save_enabled = !draft.name.is_empty();
        Self {
            name_text: draft.name,
            photo: draft.photo,
            rating: draft.rating,
            title,
            save_enabled,
            name_editing: false,
            presentation,
            meal,
            listeners: Vec::new(),
        }
    }

    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&FormEvent) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn name_text(&self) -> &str {
        &self.name_text
    }

    pub fn photo(&self) -> Option<&Bytes> {
        self.photo.as_ref()
    }

    pub fn rating(&self) -> i64 {
        self.rating
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn is_save_enabled(&self) -> bool {
        self.save_enabled
    }

    pub fn is_name_editing(&self) -> bool {
        self.name_editing
    }

    pub fn presentation(&self) -> Presentation {
        self.presentation
    }

    /// The meal produced by the last successful save, or the one being edited.
    pub fn meal(&self) -> Option<&Meal> {
        self.meal.as_ref()
    }

    pub fn begin_name_editing(&mut self) {
        self.name_editing = true;
        self.set_save_enabled(false);
    }

    pub fn set_name_text(&mut self, text: impl Into<String>) {
        self.name_text = text.into();
        self.emit(FormEvent::NameChanged(self.name_text.clone()));
    }

    pub fn end_name_editing(&mut self) {
        self.name_editing = false;
        self.refresh_save_enabled();
        self.title = Some(self.name_text.clone());
        self.emit(FormEvent::TitleChanged(self.title.clone()));
    }

    /// Return key on the name field.
    pub fn submit_name(&mut self) {
        self.end_name_editing();
    }

    /// Tapping the photo: finishes any name edit, then asks the UI for a picker.
    pub fn select_photo(&mut self) {
        if self.name_editing {
            self.end_name_editing();
        }
        self.emit(FormEvent::PhotoPickerRequested);
    }

    pub fn pick_photo(&mut self, photo: Bytes) {
        self.photo = Some(photo);
        self.emit(FormEvent::PhotoChanged);
    }

    pub fn cancel_photo_pick(&mut self) {
        debug!("photo pick cancelled");
    }

    pub fn set_rating(&mut self, rating: i64) {
        self.rating = rating;
        self.emit(FormEvent::RatingChanged(rating));
    }

    /// Clears the rating control back to "not rated".
    pub fn clear_rating(&mut self) {
        self.set_rating(MIN_RATING);
    }

    pub fn draft(&self) -> MealDraft {
        MealDraft {
            name: self.name_text.clone(),
            photo: self.photo.clone(),
            rating: self.rating,
        }
    }

    pub fn save(&mut self) -> Option<Meal> {
        let d = self.draft();
        match Meal::try_new(d.name, d.photo, d.rating) {
            Some(meal) => {
                self.meal = Some(meal.clone());
                self.emit(FormEvent::Saved(meal.clone()));
                Some(meal)
            }
            None => {
                self.emit(FormEvent::SaveRejected);
                None
            }
        }
    }

    pub fn cancel(&mut self) -> Dismissal {
        debug!("the save button was not pressed, cancelling");
        let dismissal = match self.presentation {
            Presentation::Modal => Dismissal::Dismiss,
            Presentation::Pushed => Dismissal::Pop,
        };
        self.emit(FormEvent::Cancelled(dismissal));
        dismissal
    }

    fn refresh_save_enabled(&mut self) {
        let enabled = !self.name_text.is_empty();
        self.set_save_enabled(enabled);
    }

    fn set_save_enabled(&mut self, enabled: bool) {
        if self.save_enabled != enabled {
            self.save_enabled = enabled;
            self.emit(FormEvent::SaveEnabledChanged(enabled));
        }
    }

    fn emit(&mut self, event: FormEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
    }
}

impl Default for MealForm {
    fn default() -> Self {
        Self::adding()
    }
}
