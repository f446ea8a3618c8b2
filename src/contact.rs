//! Contact request form. Submissions are only echoed locally.

use crate::input::TextInput;
use crate::toast::{Toast, ToastSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactField {
    #[default]
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn all() -> Vec<ContactField> {
        vec![ContactField::Name, ContactField::Email, ContactField::Message]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Имя",
            ContactField::Email => "Email",
            ContactField::Message => "Сообщение",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ContactField::Name => "Введите ваше имя",
            ContactField::Email => "your@email.com",
            ContactField::Message => "Расскажите о вашем проекте...",
        }
    }

    pub fn next(&self) -> ContactField {
        match self {
            ContactField::Name => ContactField::Email,
            ContactField::Email => ContactField::Message,
            ContactField::Message => ContactField::Name,
        }
    }

    pub fn prev(&self) -> ContactField {
        match self {
            ContactField::Name => ContactField::Message,
            ContactField::Email => ContactField::Name,
            ContactField::Message => ContactField::Email,
        }
    }
}

#[derive(Debug, Default)]
pub struct ContactForm {
    pub name: TextInput,
    pub email: TextInput,
    pub message: TextInput,
    pub focus: ContactField,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: ContactField) -> &TextInput {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn focused_mut(&mut self) -> &mut TextInput {
        match self.focus {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    /// First problem that blocks submission, if any
    pub fn validate(&self) -> Option<&'static str> {
        if ContactField::all().iter().any(|f| self.field(*f).is_blank()) {
            return Some("Заполните все поля формы");
        }
        let email = self.email.as_str().trim();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => None,
            _ => Some("Введите корректный email"),
        }
    }

    /// Echo the request back to the user and clear the form.
    ///
    /// Returns `false` and keeps the input when validation fails.
    pub fn submit(&mut self, toasts: &mut impl ToastSink) -> bool {
        if let Some(problem) = self.validate() {
            toasts.push(Toast::destructive("Ошибка", problem));
            return false;
        }

        tracing::info!("contact request submitted");
        toasts.push(Toast::new(
            "Заявка отправлена!",
            "Мы свяжемся с вами в ближайшее время.",
        ));
        *self = Self::new();
        true
    }
}
