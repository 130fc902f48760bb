use std::sync::LazyLock;

use courier_models::template::{Template, TemplateBody};
use uuid::uuid;

use crate::{audit, brand::ACME_SMS};

pub static ALL_TEMPLATES: LazyLock<Vec<&Template>> = LazyLock::new(|| vec![&OTP, &NOTICE]);

pub static OTP: LazyLock<Template> = LazyLock::new(|| Template {
    id: uuid!("c4a9e3f1-2b7d-4c58-a1e6-9f0d3b8c7e25").into(),
    body: TemplateBody {
        brand_id: ACME_SMS.id,
        name: "OTP".try_into().unwrap(),
        content: "Hello {{name}}, your code is {{code}}".try_into().unwrap(),
        params: vec!["{{name}}".into(), "{{code}}".into()],
    },
    audit: audit("admin"),
});

/// A template without placeholders.
pub static NOTICE: LazyLock<Template> = LazyLock::new(|| Template {
    id: uuid!("7d1e5b28-4c9a-4f03-b6e2-3a8f0c1d9b47").into(),
    body: TemplateBody {
        brand_id: ACME_SMS.id,
        name: "Maintenance notice".try_into().unwrap(),
        content: "Our service is down for maintenance tonight."
            .try_into()
            .unwrap(),
        params: vec![],
    },
    audit: audit("admin"),
});
