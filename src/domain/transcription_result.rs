use serde_json::Value;

const PRIMARY_ALTERNATIVE: &str = "/results/channels/0/alternatives/0";
const TRANSCRIPT: &str = "/results/channels/0/alternatives/0/transcript";
const DETECTED_LANGUAGE: &str = "/results/channels/0/detected_language";

pub const TRANSLATED_TRANSCRIPT_FIELD: &str = "translated_transcript";

/// Vendor response kept verbatim. Only the Deepgram channel layout is ever inspected.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptionResult(Value);

impl TranscriptionResult {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    pub fn transcript(&self) -> Option<&str> {
        self.0.pointer(TRANSCRIPT).and_then(Value::as_str)
    }

    pub fn detected_language(&self) -> Option<&str> {
        self.0.pointer(DETECTED_LANGUAGE).and_then(Value::as_str)
    }

    pub fn translated_transcript(&self) -> Option<&str> {
        self.0
            .pointer(PRIMARY_ALTERNATIVE)
            .and_then(|alt| alt.get(TRANSLATED_TRANSCRIPT_FIELD))
            .and_then(Value::as_str)
    }

    /// Returns false when the primary alternative is missing or not an object.
    pub fn attach_translation(&mut self, translated: impl Into<String>) -> bool {
        match self
            .0
            .pointer_mut(PRIMARY_ALTERNATIVE)
            .and_then(Value::as_object_mut)
        {
            Some(alternative) => {
                alternative.insert(
                    TRANSLATED_TRANSCRIPT_FIELD.to_string(),
                    Value::String(translated.into()),
                );
                true
            }
            None => false,
        }
    }
}

impl From<Value> for TranscriptionResult {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Compares primary language subtags, so `en-US` matches `en`.
pub fn is_same_language(detected: &str, target: &str) -> bool {
    fn primary(tag: &str) -> String {
        tag.split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase()
    }
    primary(detected) == primary(target)
}
