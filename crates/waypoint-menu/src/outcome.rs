//! Player responses to screens.

/// The single response that follows each [`crate::Screen`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A button was pressed (0-based, in display order).
    Selected(usize),
    /// A custom form was submitted, one value per field in field order.
    Submitted(Vec<FieldValue>),
    /// The player dismissed the form.
    Closed,
    /// The response could not be decoded.
    Invalid,
}

/// Value of one submitted custom form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Text from an input field.
    Text(String),
    /// Position of a toggle.
    Toggle(bool),
    /// Placeholder for a read-only label.
    Empty,
}
