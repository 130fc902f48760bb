use std::{collections::BTreeMap, sync::LazyLock};

use courier_core_template_contracts::TemplateService;
use courier_models::{
    brand::BrandId,
    template::{TemplateBody, TemplateContent, TemplateName},
};
use courier_utils::trace_instrument;
use regex::{Captures, Regex};

/// Matches `{{name}}` placeholders. Names are taken lazily, so adjacent
/// placeholders never merge, and cannot span lines.
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(.*?)\}\}").unwrap());

#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateServiceImpl;

impl TemplateService for TemplateServiceImpl {
    #[trace_instrument(skip(self))]
    fn extract_params(&self, content: &str) -> Vec<String> {
        PLACEHOLDER_REGEX
            .find_iter(content)
            .map(|m| m.as_str().to_owned())
            .collect()
    }

    #[trace_instrument(skip(self))]
    fn preview(&self, content: &str, params: &BTreeMap<String, String>) -> String {
        PLACEHOLDER_REGEX
            .replace_all(content, |caps: &Captures| {
                params
                    .get(&caps[1])
                    .filter(|value| !value.is_empty())
                    .cloned()
                    .unwrap_or_else(|| caps[0].to_owned())
            })
            .into_owned()
    }

    #[trace_instrument(skip(self))]
    fn sync_params(&self, current: &[String], content: &str) -> Vec<String> {
        if content.is_empty() {
            return current.to_vec();
        }
        self.extract_params(content)
    }

    #[trace_instrument(skip(self))]
    fn build_body(
        &self,
        brand_id: BrandId,
        name: TemplateName,
        content: TemplateContent,
    ) -> TemplateBody {
        let params = self.extract_params(&content);
        TemplateBody {
            brand_id,
            name,
            content,
            params,
        }
    }
}
