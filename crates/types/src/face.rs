use crate::source::{OneOrMany, SourceEntry};
use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt;

/// The `font-display` descriptor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontDisplay {
    Auto,
    Block,
    #[default]
    Swap,
    Fallback,
    Optional,
}

impl FontDisplay {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontDisplay::Auto => "auto",
            FontDisplay::Block => "block",
            FontDisplay::Swap => "swap",
            FontDisplay::Fallback => "fallback",
            FontDisplay::Optional => "optional",
        }
    }
}

impl fmt::Display for FontDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single resolved font face, ready to be rendered as one `@font-face` block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct FontFaceData {
    /// Sources in browser preference order.
    pub src: OneOrMany<SourceEntry>,
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<FontDisplay>,
    #[serde(
        default,
        deserialize_with = "string_or_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub unicode_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_settings: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variation_settings: Option<String>,
}

impl FontFaceData {
    pub fn new(src: impl Into<OneOrMany<SourceEntry>>) -> Self {
        Self {
            src: src.into(),
            weight: None,
            style: None,
            display: None,
            unicode_range: None,
            feature_settings: None,
            variation_settings: None,
        }
    }

    pub fn with_weight(mut self, weight: impl ToString) -> Self {
        self.weight = Some(weight.to_string());
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn with_display(mut self, display: FontDisplay) -> Self {
        self.display = Some(display);
        self
    }

    pub fn with_unicode_range(mut self, range: impl Into<String>) -> Self {
        self.unicode_range = Some(range.into());
        self
    }

    pub fn with_feature_settings(mut self, settings: impl Into<String>) -> Self {
        self.feature_settings = Some(settings.into());
        self
    }

    pub fn with_variation_settings(mut self, settings: impl Into<String>) -> Self {
        self.variation_settings = Some(settings.into());
        self
    }
}

/// What a resolver hands back for one family: one face or several.
pub type FontFaces = OneOrMany<FontFaceData>;

impl From<FontFaceData> for FontFaces {
    fn from(value: FontFaceData) -> Self {
        OneOrMany::One(value)
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum WeightDef {
        Str(String),
        Num(f64),
    }

    Ok(match Option::<WeightDef>::deserialize(deserializer)? {
        None => None,
        Some(WeightDef::Str(s)) => Some(s),
        // A zero weight counts as unset.
        Some(WeightDef::Num(n)) if n == 0.0 => None,
        Some(WeightDef::Num(n)) => Some(n.to_string()),
    })
}

fn string_or_list<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RangeDef {
        One(String),
        Many(Vec<String>),
    }

    match Option::<RangeDef>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RangeDef::One(s)) => Ok(Some(s)),
        Some(RangeDef::Many(list)) if list.is_empty() => {
            Err(de::Error::custom("unicodeRange list must not be empty"))
        }
        Some(RangeDef::Many(list)) => Ok(Some(list.join(", "))),
    }
}
