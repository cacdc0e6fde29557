//! Alert boxes for displaying error messages to users.

use maud::{Markup, html};

/// An error message shown to the user in a dismissible box.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub message: String,
    pub details: String,
}

impl Alert {
    /// Create a new error alert.
    pub fn error(message: &str, details: &str) -> Self {
        Self {
            message: message.to_owned(),
            details: details.to_owned(),
        }
    }

    pub fn into_markup(self) -> Markup {
        html! {
            div
                role="alert"
                class="p-4 mb-4 w-full border rounded-lg text-red-800 border-red-300 \
                    bg-red-50 dark:bg-gray-800 dark:text-red-400 dark:border-red-800"
            {
                div class="flex items-center justify-between"
                {
                    h3 class="text-lg font-medium" { (self.message) }

                    button
                        type="button"
                        aria-label="Fechar"
                        onclick="this.closest('[role=alert]').remove()"
                        class="ms-2 bg-transparent border-none cursor-pointer"
                    {
                        "×"
                    }
                }

                @if !self.details.is_empty() {
                    p class="mt-2 text-sm" { (self.details) }
                }
            }
        }
    }
}
