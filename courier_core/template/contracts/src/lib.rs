use std::collections::BTreeMap;

use courier_models::{
    brand::BrandId,
    template::{TemplateBody, TemplateContent, TemplateName},
};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateService: Send + Sync + 'static {
    /// Return every `{{placeholder}}` token in `content`, braces included,
    /// in order of appearance. Repeated placeholders are kept.
    fn extract_params(&self, content: &str) -> Vec<String>;

    /// Replace each placeholder whose name has a non-empty sample value in
    /// `params`. Other placeholders are left untouched.
    fn preview(&self, content: &str, params: &BTreeMap<String, String>) -> String;

    /// Return the parameter list of a template form after its content
    /// changed to `content`.
    fn sync_params(&self, current: &[String], content: &str) -> Vec<String>;

    /// Assemble a template form submission.
    fn build_body(
        &self,
        brand_id: BrandId,
        name: TemplateName,
        content: TemplateContent,
    ) -> TemplateBody;
}

#[cfg(feature = "mock")]
impl MockTemplateService {
    pub fn with_preview(
        mut self,
        content: String,
        params: BTreeMap<String, String>,
        result: String,
    ) -> Self {
        self.expect_preview()
            .once()
            .withf(move |x, y| x == content && *y == params)
            .return_once(|_, _| result);
        self
    }
}
