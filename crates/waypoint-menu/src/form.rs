//! The add/edit/direct-connect server form.

use waypoint_core::ServerEntry;

use crate::FieldValue;

/// Sample host prefilled on blank forms.
pub const SAMPLE_ADDRESS: &str = "play.cubecraft.net";

/// Port prefilled on blank forms.
pub const SAMPLE_PORT: u16 = 25565;

/// What a submitted server form is for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FormPurpose {
    /// Append a new custom server.
    Add,
    /// Replace `original`, which was at `index` when the form was rendered.
    Edit { original: ServerEntry, index: Option<usize> },
    /// Connect without persisting.
    DirectConnect,
}

/// Raw values of a server form, as typed by the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ServerForm {
    pub address: String,
    pub port: String,
    pub online_mode: bool,
    pub bedrock: bool,
}

impl ServerForm {
    /// Values for a form that has never been filled in.
    pub fn blank() -> Self {
        Self {
            address: SAMPLE_ADDRESS.to_string(),
            port: SAMPLE_PORT.to_string(),
            online_mode: true,
            bedrock: false,
        }
    }

    /// Values of an existing entry.
    pub fn from_entry(entry: &ServerEntry) -> Self {
        Self {
            address: entry.address().to_string(),
            port: entry.port().to_string(),
            online_mode: entry.online_mode(),
            bedrock: entry.bedrock(),
        }
    }

    /// Read a submission, skipping `leading_labels` label values.
    ///
    /// Returns `None` if the values do not have the shape of this form.
    pub fn from_submission(values: &[FieldValue], leading_labels: usize) -> Option<Self> {
        match values.get(leading_labels..)? {
            [
                FieldValue::Text(address),
                FieldValue::Text(port),
                FieldValue::Toggle(online_mode),
                FieldValue::Toggle(bedrock),
            ] => Some(Self {
                address: address.trim().to_string(),
                port: port.trim().to_string(),
                online_mode: *online_mode,
                bedrock: *bedrock,
            }),
            _ => None,
        }
    }

    /// Build a custom entry. On failure, returns the port text that did not parse.
    pub fn to_entry(&self) -> Result<ServerEntry, String> {
        let port = self.port.parse::<u16>().map_err(|_| self.port.clone())?;
        Ok(ServerEntry::custom(self.address.clone(), port, self.online_mode, self.bedrock))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn submission(port: &str) -> Vec<FieldValue> {
        vec![
            FieldValue::Text(" mc.example.net ".into()),
            FieldValue::Text(port.into()),
            FieldValue::Toggle(false),
            FieldValue::Toggle(true),
        ]
    }

    #[test]
    fn parses_and_trims_submission() {
        let form = ServerForm::from_submission(&submission("19132"), 0).unwrap();
        let entry = form.to_entry().unwrap();

        assert_eq!(entry.address(), "mc.example.net");
        assert_eq!(entry.port(), 19132);
        assert!(!entry.online_mode());
        assert!(entry.bedrock());
    }

    #[test]
    fn skips_leading_labels() {
        let mut values = vec![FieldValue::Empty];
        values.extend(submission("25565"));

        assert!(ServerForm::from_submission(&values, 1).is_some());
        assert!(ServerForm::from_submission(&values, 0).is_none());
    }

    #[test]
    fn rejects_wrong_shape() {
        let values = vec![FieldValue::Text("a".into()), FieldValue::Toggle(true)];

        assert!(ServerForm::from_submission(&values, 0).is_none());
        assert!(ServerForm::from_submission(&values, 5).is_none());
    }

    #[test]
    fn invalid_port_returns_rejected_text() {
        for port in ["", "abc", "65536", "-1"] {
            let form = ServerForm::from_submission(&submission(port), 0).unwrap();
            assert_eq!(form.to_entry(), Err(port.to_string()));
        }
    }
}
