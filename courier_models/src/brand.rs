use std::{fmt, str::FromStr};

use nutype::nutype;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    macros::{id, nutype_string},
    AuditInfo,
};

id!(BrandId);

/// A sender identity bound to one messaging channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub id: BrandId,
    #[serde(flatten)]
    pub body: BrandBody,
    #[serde(flatten)]
    pub audit: AuditInfo,
}

/// The editable part of a brand, as submitted by the brand form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandBody {
    pub name: BrandName,
    #[serde(default)]
    pub description: BrandDescription,
    pub channel: Channel,
}

nutype_string!(BrandName(validate(len_char_min = 2, len_char_max = 50)));

#[nutype(
    sanitize(trim),
    validate(len_char_max = 200),
    derive(Debug, Clone, PartialEq, Eq, Deref, TryFrom, Default, Serialize, Deserialize),
    default = ""
)]
pub struct BrandDescription(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Sms,
    Zns,
    Email,
}

impl Channel {
    pub const ALL: [Self; 3] = [Self::Sms, Self::Zns, Self::Email];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sms => "sms",
            Self::Zns => "zns",
            Self::Email => "email",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid channel `{0}`, expected one of sms, zns, email.")]
pub struct InvalidChannelError(pub String);

impl FromStr for Channel {
    type Err = InvalidChannelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|channel| channel.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| InvalidChannelError(s.into()))
    }
}
