use std::{collections::BTreeMap, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{
    macros::{id, nutype_string},
    template::TemplateId,
};

pub static PHONE_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0[0-9]{9,10}$|^\+84[0-9]{9,10}$").unwrap());

nutype_string!(PhoneNumber(validate(regex = PHONE_NUMBER_REGEX)));

id!(ReceiverRowId);

/// One editable recipient row of the manual sending form.
///
/// `list_param` is keyed by placeholder token (`{{name}}`) and holds whatever
/// the operator typed so far, so nothing here is validated yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiverRow {
    pub id: ReceiverRowId,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub list_param: BTreeMap<String, String>,
}

/// A single recipient of a dispatched message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub phone_number: PhoneNumber,
    pub list_param: BTreeMap<String, String>,
}

/// The payload of a manual message dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub template_id: TemplateId,
    pub destinations: Vec<Destination>,
}
