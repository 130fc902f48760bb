use nutype::nutype;
use serde::{Deserialize, Serialize};

use crate::{
    brand::BrandId,
    macros::{id, nutype_string},
    AuditInfo,
};

id!(TemplateId);

/// A reusable message body with `{{placeholder}}` tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: TemplateId,
    #[serde(flatten)]
    pub body: TemplateBody,
    #[serde(flatten)]
    pub audit: AuditInfo,
}

/// The editable part of a template, as submitted by the template form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateBody {
    pub brand_id: BrandId,
    pub name: TemplateName,
    #[serde(default)]
    pub content: TemplateContent,
    /// Placeholder tokens found in `content`, braces included.
    #[serde(default)]
    pub params: Vec<String>,
}

nutype_string!(TemplateName(validate(len_char_min = 2, len_char_max = 50)));

#[nutype(
    validate(len_char_max = 200),
    derive(Debug, Clone, PartialEq, Eq, Deref, TryFrom, Default, Serialize, Deserialize),
    default = ""
)]
pub struct TemplateContent(String);

/// Returns the name inside a `{{name}}` placeholder token.
pub fn placeholder_name(token: &str) -> Option<&str> {
    token.strip_prefix("{{")?.strip_suffix("}}")
}
