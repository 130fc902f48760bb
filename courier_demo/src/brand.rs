use std::sync::LazyLock;

use courier_models::brand::{Brand, BrandBody, Channel};
use uuid::uuid;

use crate::audit;

pub static ACME_SMS: LazyLock<Brand> = LazyLock::new(|| Brand {
    id: uuid!("0b7f4a52-6f43-4b0e-9a53-2d7c1f0e8a11").into(),
    body: BrandBody {
        name: "ACME".try_into().unwrap(),
        description: "Transactional SMS sender".try_into().unwrap(),
        channel: Channel::Sms,
    },
    audit: audit("admin"),
});

pub static ACME_ZNS: LazyLock<Brand> = LazyLock::new(|| Brand {
    id: uuid!("5e2d8c07-93b1-4f6e-8d0a-7c4b2e9f1d36").into(),
    body: BrandBody {
        name: "ACME Official".try_into().unwrap(),
        description: Default::default(),
        channel: Channel::Zns,
    },
    audit: audit("admin"),
});
