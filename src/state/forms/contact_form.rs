//! Contact form state

use super::field::{FieldKind, FormField};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Immutable copy of the four values, taken when the form is submitted
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// The contact form: four required text fields followed by the submit button
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub subject: FormField,
    pub message: FormField,
    pub active_field_index: usize,
}

impl ContactForm {
    /// Index of the submit button in focus order
    pub const SUBMIT_INDEX: usize = 4;

    pub fn new() -> Self {
        Self {
            name: FormField::new(FieldKind::Name),
            email: FormField::new(FieldKind::Email),
            subject: FormField::new(FieldKind::Subject),
            message: FormField::new(FieldKind::Message),
            active_field_index: 0,
        }
    }

    pub fn field(&self, kind: FieldKind) -> &FormField {
        match kind {
            FieldKind::Name => &self.name,
            FieldKind::Email => &self.email,
            FieldKind::Subject => &self.subject,
            FieldKind::Message => &self.message,
        }
    }

    fn field_mut(&mut self, kind: FieldKind) -> &mut FormField {
        match kind {
            FieldKind::Name => &mut self.name,
            FieldKind::Email => &mut self.email,
            FieldKind::Subject => &mut self.subject,
            FieldKind::Message => &mut self.message,
        }
    }

    pub fn value(&self, kind: FieldKind) -> &str {
        self.field(kind).as_text()
    }

    /// Replace the value of exactly one field
    pub fn set_field(&mut self, kind: FieldKind, value: impl Into<String>) {
        self.field_mut(kind).set_text(value.into());
    }

    pub fn push_char(&mut self, kind: FieldKind, c: char) {
        self.field_mut(kind).push_char(c);
    }

    pub fn pop_char(&mut self, kind: FieldKind) {
        self.field_mut(kind).pop_char();
    }

    /// True when every field holds a non-empty string
    pub fn is_ready(&self) -> bool {
        FieldKind::ALL.iter().all(|&kind| !self.field(kind).is_empty())
    }

    pub fn snapshot(&self) -> ContactSubmission {
        ContactSubmission {
            name: self.value(FieldKind::Name).to_string(),
            email: self.value(FieldKind::Email).to_string(),
            subject: self.value(FieldKind::Subject).to_string(),
            message: self.value(FieldKind::Message).to_string(),
        }
    }

    /// Empty all four fields; focus is left where it is
    pub fn clear(&mut self) {
        for kind in FieldKind::ALL {
            self.field_mut(kind).clear();
        }
    }

    /// The field that currently has focus, `None` on the submit button
    pub fn active_kind(&self) -> Option<FieldKind> {
        FieldKind::ALL.get(self.active_field_index).copied()
    }

    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == Self::SUBMIT_INDEX
    }

    /// Route a typed character to the focused field
    pub fn input_char(&mut self, c: char) {
        if let Some(kind) = self.active_kind() {
            self.push_char(kind, c);
        }
    }

    /// Append pasted text to the focused field; single-line fields drop line breaks
    pub fn paste(&mut self, text: &str) {
        let Some(kind) = self.active_kind() else {
            return;
        };
        let field = self.field(kind);
        let mut value = field.as_text().to_string();
        if field.is_multiline {
            value.push_str(&text.replace("\r\n", "\n"));
        } else {
            value.extend(text.chars().filter(|c| !matches!(c, '\r' | '\n')));
        }
        self.set_field(kind, value);
    }

    /// Names of the fields still empty
    pub fn missing_fields(&self) -> Vec<&'static str> {
        FieldKind::ALL
            .iter()
            .filter(|&&kind| self.field(kind).is_empty())
            .map(FieldKind::name)
            .collect()
    }

    pub fn backspace(&mut self) {
        if let Some(kind) = self.active_kind() {
            self.pop_char(kind);
        }
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.get_field(self.active_field_index)
            .is_some_and(|f| f.is_multiline)
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        5 // name, email, subject, message, submit
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::SUBMIT_INDEX);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        // The submit button has no FormField
        FieldKind::ALL.get(index).map(|&kind| self.field(kind))
    }
}
