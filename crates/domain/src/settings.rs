//! Settings — the four detection tunables owned by the backend.
//!
//! The dashboard never validates or coerces them: values arrive as JSON
//! numbers, live in input fields as strings, and go back as form-encoded
//! strings exactly as typed.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;

/// One of the four tunables, with its wire key and input element id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingField {
    EdgeDetectionSeconds,
    DebounceSeconds,
    TriggerDelay,
    TriggerThreshold,
}

impl SettingField {
    /// All fields in wire order.
    pub const ALL: [Self; 4] = [
        Self::EdgeDetectionSeconds,
        Self::DebounceSeconds,
        Self::TriggerDelay,
        Self::TriggerThreshold,
    ];

    /// Key used in the JSON object and in the form body.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::EdgeDetectionSeconds => "EdgeDetectionSeconds",
            Self::DebounceSeconds => "DebounceSeconds",
            Self::TriggerDelay => "TriggerDelay",
            Self::TriggerThreshold => "TriggerThreshold",
        }
    }

    /// Id of the input element holding this field on the dashboard page.
    #[must_use]
    pub fn input_id(self) -> &'static str {
        match self {
            Self::EdgeDetectionSeconds => "inputEdgeDetectionSeconds",
            Self::DebounceSeconds => "inputDebounceSeconds",
            Self::TriggerDelay => "inputTriggerDelay",
            Self::TriggerThreshold => "inputTriggerThreshold",
        }
    }

    /// Short label shown next to the input.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::EdgeDetectionSeconds => "Edge detection (s)",
            Self::DebounceSeconds => "Debounce (s)",
            Self::TriggerDelay => "Trigger delay (s)",
            Self::TriggerThreshold => "Trigger threshold",
        }
    }
}

impl std::fmt::Display for SettingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Settings as served by `GET settings`.
///
/// Values are kept as raw JSON so one odd value never hides the others.
/// A key missing from the response leaves the corresponding field empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Settings {
    #[serde(default)]
    pub edge_detection_seconds: Option<Value>,
    #[serde(default)]
    pub debounce_seconds: Option<Value>,
    #[serde(default)]
    pub trigger_delay: Option<Value>,
    #[serde(default)]
    pub trigger_threshold: Option<Value>,
}

impl Settings {
    #[must_use]
    pub fn get(&self, field: SettingField) -> Option<&Value> {
        match field {
            SettingField::EdgeDetectionSeconds => self.edge_detection_seconds.as_ref(),
            SettingField::DebounceSeconds => self.debounce_seconds.as_ref(),
            SettingField::TriggerDelay => self.trigger_delay.as_ref(),
            SettingField::TriggerThreshold => self.trigger_threshold.as_ref(),
        }
    }
}

/// The settings form: the four input values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsForm {
    pub edge_detection_seconds: String,
    pub debounce_seconds: String,
    pub trigger_delay: String,
    pub trigger_threshold: String,
}

impl SettingsForm {
    #[must_use]
    pub fn get(&self, field: SettingField) -> &str {
        match field {
            SettingField::EdgeDetectionSeconds => &self.edge_detection_seconds,
            SettingField::DebounceSeconds => &self.debounce_seconds,
            SettingField::TriggerDelay => &self.trigger_delay,
            SettingField::TriggerThreshold => &self.trigger_threshold,
        }
    }

    pub fn set(&mut self, field: SettingField, value: impl Into<String>) {
        let slot = match field {
            SettingField::EdgeDetectionSeconds => &mut self.edge_detection_seconds,
            SettingField::DebounceSeconds => &mut self.debounce_seconds,
            SettingField::TriggerDelay => &mut self.trigger_delay,
            SettingField::TriggerThreshold => &mut self.trigger_threshold,
        };
        *slot = value.into();
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, field: SettingField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// `(key, value)` pairs in wire order.
    #[must_use]
    pub fn pairs(&self) -> [(&'static str, &str); 4] {
        SettingField::ALL.map(|field| (field.key(), self.get(field)))
    }

    /// Encode as an `application/x-www-form-urlencoded` body.
    #[must_use]
    pub fn to_form_body(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs())
            .finish()
    }

    /// Decode a form body carrying all four keys.
    ///
    /// Unknown keys are ignored; a repeated key keeps its last value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingSettingsField`] when a key is absent.
    pub fn from_form_body(body: &str) -> Result<Self, ValidationError> {
        let mut form = Self::default();
        let mut seen = [false; 4];
        for (key, value) in url::form_urlencoded::parse(body.as_bytes()) {
            if let Some(pos) = SettingField::ALL.iter().position(|f| f.key() == key) {
                form.set(SettingField::ALL[pos], value.into_owned());
                seen[pos] = true;
            }
        }
        if let Some(pos) = seen.iter().position(|s| !s) {
            return Err(ValidationError::MissingSettingsField(
                SettingField::ALL[pos].key(),
            ));
        }
        Ok(form)
    }
}

impl From<&Settings> for SettingsForm {
    fn from(settings: &Settings) -> Self {
        let mut form = Self::default();
        for field in SettingField::ALL {
            if let Some(value) = settings.get(field).and_then(input_text) {
                form.set(field, value);
            }
        }
        form
    }
}

/// Text an input shows for a JSON value.
///
/// Numbers print the shortest way (`5.0` shows as `5`), strings verbatim.
/// `null`, arrays and objects leave the input empty.
fn input_text(value: &Value) -> Option<String> {
    match value {
        Value::Number(number) => Some(match (number.as_i64(), number.as_u64(), number.as_f64()) {
            (Some(int), _, _) => int.to_string(),
            (None, Some(uint), _) => uint.to_string(),
            (None, None, Some(float)) => float.to_string(),
            (None, None, None) => number.to_string(),
        }),
        Value::String(text) => Some(text.clone()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
