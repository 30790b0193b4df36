#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// State backing the login form's two text fields.
///
/// Both fields always hold a defined string value. They start empty and
/// each input event replaces the corresponding field wholesale, so the
/// state mirrors exactly what the inputs display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub username: String,
    pub password: String,
}

impl FormState {
    /// Coarse form lifecycle phase.
    ///
    /// `Empty` until either field has content; clearing both fields
    /// returns the form to `Empty`.
    pub fn phase(&self) -> FormPhase {
        if self.username.is_empty() && self.password.is_empty() {
            FormPhase::Empty
        } else {
            FormPhase::Filled
        }
    }

    /// Snapshot both fields into a submission payload.
    pub fn credentials(&self) -> Credentials {
        Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}

/// The two observable form states.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Empty,
    Filled,
}

/// Credentials captured from the form, handed to the submit handler.
///
/// Carried verbatim: no trimming, casing, or validation is applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}
