//! Wire types for the website generator service
//!
//! The service asks a language model for a website outline, so apart from
//! the envelope nothing about the payload is guaranteed. Every field of
//! [`GenerationResult`] is optional and parsed leniently: a field with an
//! unexpected JSON type is treated as absent instead of failing the whole
//! response.

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of the outbound call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub description: String,
}

impl GenerationRequest {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Envelope returned by the service
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerationResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub success: Option<bool>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub data: Option<GenerationResult>,
    #[serde(default, deserialize_with = "lenient")]
    pub error: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub subtitle: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub cta: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default, deserialize_with = "lenient")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub phone: Option<String>,
}

/// Generated website outline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub hero: Option<Hero>,
    /// Only the number of entries is ever used
    #[serde(default, deserialize_with = "lenient")]
    pub features: Option<Vec<Value>>,
    /// Only presence is ever used, see [`GenerationResult::has_about`]
    #[serde(default)]
    pub about: Option<Value>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub contact: Option<ContactInfo>,
}

impl GenerationResult {
    pub fn hero_title(&self) -> Option<&str> {
        self.hero.as_ref().and_then(|h| h.title.as_deref())
    }

    pub fn feature_count(&self) -> Option<usize> {
        self.features.as_ref().map(Vec::len)
    }

    /// `about` counts as present when it is truthy: null, false, 0 and ""
    /// do not count
    pub fn has_about(&self) -> bool {
        self.about.as_ref().is_some_and(is_truthy)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Deserialize an optional field, mapping a value of the wrong shape to `None`
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// Like [`lenient`], but only a JSON object is accepted.
///
/// serde reads a derived struct from a sequence too, positionally, which
/// would turn `["T", "D"]` into a title and a description.
fn lenient_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .filter(Value::is_object)
        .and_then(|v| serde_json::from_value(v).ok()))
}
