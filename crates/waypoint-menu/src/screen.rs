//! Screens sent to the player.
//!
//! A [`Screen`] is a value object: the menu builds a fresh one for every
//! render and never touches it after handing it to the transport. How it is
//! drawn and encoded on the wire is the transport's business.

use waypoint_core::Icon;

/// One form shown to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    /// Form title.
    pub title: String,
    /// Text shown above the buttons. `None` if the form has no body.
    pub body: Option<String>,
    /// Layout and interactive elements.
    pub kind: ScreenKind,
}

/// Form layouts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenKind {
    /// List of buttons; answered with [`crate::Outcome::Selected`].
    Simple {
        /// Buttons in display order.
        buttons: Vec<Button>,
    },
    /// Input form; answered with [`crate::Outcome::Submitted`].
    Custom {
        /// Fields in display order.
        fields: Vec<FormField>,
    },
    /// Two-button dialog; `Selected(0)` is confirm, `Selected(1)` is cancel.
    Modal {
        /// First button label.
        confirm: String,
        /// Second button label.
        cancel: String,
    },
}

/// A button on a simple form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    /// Button text.
    pub label: String,
    /// Image next to the text. `None` for text-only buttons.
    pub icon: Option<Icon>,
}

/// A field on a custom form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormField {
    /// Read-only text.
    Label {
        /// Text to display.
        text: String,
    },
    /// Single-line text input.
    Input {
        /// Caption above the input.
        label: String,
        /// Greyed-out hint shown while empty.
        placeholder: String,
        /// Prefilled value.
        default: String,
    },
    /// On/off switch.
    Toggle {
        /// Caption next to the switch.
        label: String,
        /// Initial position.
        default: bool,
    },
}

impl Screen {
    /// Simple form with no buttons yet.
    pub fn simple(title: impl Into<String>) -> Self {
        Self { title: title.into(), body: None, kind: ScreenKind::Simple { buttons: Vec::new() } }
    }

    /// Custom form with no fields yet.
    pub fn custom(title: impl Into<String>) -> Self {
        Self { title: title.into(), body: None, kind: ScreenKind::Custom { fields: Vec::new() } }
    }

    /// Two-button confirmation dialog.
    pub fn modal(
        title: impl Into<String>,
        body: impl Into<String>,
        confirm: impl Into<String>,
        cancel: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: Some(body.into()),
            kind: ScreenKind::Modal { confirm: confirm.into(), cancel: cancel.into() },
        }
    }

    /// Set the body text.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Append a button. Ignored unless this is a simple form.
    #[must_use]
    pub fn button(mut self, label: impl Into<String>, icon: Option<Icon>) -> Self {
        if let ScreenKind::Simple { buttons } = &mut self.kind {
            buttons.push(Button { label: label.into(), icon });
        }
        self
    }

    /// Append a field. Ignored unless this is a custom form.
    #[must_use]
    pub fn field(mut self, field: FormField) -> Self {
        if let ScreenKind::Custom { fields } = &mut self.kind {
            fields.push(field);
        }
        self
    }

    /// Number of selectable options (buttons, or 2 for a modal, 0 for a form).
    pub fn option_count(&self) -> usize {
        match &self.kind {
            ScreenKind::Simple { buttons } => buttons.len(),
            ScreenKind::Modal { .. } => 2,
            ScreenKind::Custom { .. } => 0,
        }
    }

    /// Button labels in order. Empty unless this is a simple form.
    pub fn button_labels(&self) -> Vec<&str> {
        match &self.kind {
            ScreenKind::Simple { buttons } => buttons.iter().map(|b| b.label.as_str()).collect(),
            _ => Vec::new(),
        }
    }

    /// Fields in order. Empty unless this is a custom form.
    pub fn fields(&self) -> &[FormField] {
        match &self.kind {
            ScreenKind::Custom { fields } => fields,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_only_adds_matching_elements() {
        let screen = Screen::simple("Menu")
            .button("A", None)
            .field(FormField::Label { text: "ignored".into() })
            .button("B", Some(Icon::Path("textures/b".into())));

        assert_eq!(screen.option_count(), 2);
        assert_eq!(screen.button_labels(), ["A", "B"]);
        assert!(screen.fields().is_empty());
    }

    #[test]
    fn modal_has_two_options() {
        let screen = Screen::modal("Delete", "Sure?", "Yes", "No");

        assert_eq!(screen.option_count(), 2);
        assert_eq!(screen.body.as_deref(), Some("Sure?"));
    }
}
