//! Form state shared by every input form.
//!
//! A `FormController` owns the draft being edited and decides which validation
//! messages are shown. Submission is gated on the draft validating; a valid
//! submit hands the typed record to the caller exactly once and clears the form.

use crate::validation::FieldErrors;

/// A statically typed form record paired with its validation schema
pub trait FormDraft: Clone + Default + PartialEq {
    /// Typed record produced by a successful validation
    type Output;

    /// Field names in display order
    const FIELDS: &'static [&'static str];

    fn field(&self, name: &str) -> Option<&str>;

    fn field_mut(&mut self, name: &str) -> Option<&mut String>;

    fn validate(&self) -> Result<Self::Output, FieldErrors>;
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The callback ran and the form was cleared
    Submitted,
    /// Validation failed; the callback did not run and the draft is unchanged
    Blocked(FieldErrors),
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormController<D: FormDraft> {
    draft: D,
    touched: Vec<&'static str>,
    submit_attempted: bool,
}

impl<D: FormDraft> Default for FormController<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: FormDraft> FormController<D> {
    pub fn new() -> Self {
        Self {
            draft: D::default(),
            touched: Vec::new(),
            submit_attempted: false,
        }
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    /// Current text of a field, empty for unknown names
    pub fn value(&self, field: &str) -> &str {
        self.draft.field(field).unwrap_or("")
    }

    /// Update one field from user input.
    ///
    /// Returns false and leaves the draft untouched when the field is unknown.
    pub fn set_field(&mut self, field: &str, value: impl Into<String>) -> bool {
        let Some(name) = D::FIELDS.iter().copied().find(|name| *name == field) else {
            return false;
        };
        let Some(slot) = self.draft.field_mut(name) else {
            return false;
        };

        *slot = value.into();
        if !self.touched.contains(&name) {
            self.touched.push(name);
        }
        true
    }

    pub fn is_touched(&self, field: &str) -> bool {
        self.touched.iter().any(|name| *name == field)
    }

    /// Whether the submit control should be enabled
    pub fn is_valid(&self) -> bool {
        self.draft.validate().is_ok()
    }

    /// Every current validation failure, shown or not
    pub fn errors(&self) -> FieldErrors {
        self.draft.validate().err().unwrap_or_default()
    }

    /// Failures to display: touched fields only, or all of them after a
    /// blocked submit
    pub fn visible_errors(&self) -> FieldErrors {
        let errors = self.errors();
        if self.submit_attempted {
            errors
        } else {
            errors.retain_fields(|field| self.is_touched(field))
        }
    }

    pub fn visible_error(&self, field: &str) -> Option<String> {
        self.visible_errors().get(field).map(str::to_string)
    }

    /// Validate and, when valid, pass the typed record to `on_submit` then
    /// clear every field
    pub fn submit<F>(&mut self, on_submit: F) -> SubmitOutcome
    where
        F: FnOnce(D::Output),
    {
        match self.draft.validate() {
            Ok(output) => {
                on_submit(output);
                self.reset();
                SubmitOutcome::Submitted
            }
            Err(errors) => {
                self.submit_attempted = true;
                SubmitOutcome::Blocked(errors)
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
