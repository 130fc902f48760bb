use std::fmt;

use nutype::nutype;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[nutype(
    validate(greater = 0),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Deref,
        TryFrom,
        Display,
        Default,
        Serialize,
        Deserialize
    ),
    default = PageSize::DEFAULT
)]
pub struct PageSize(u64);

impl PageSize {
    pub const DEFAULT: u64 = 50;
}

/// Compute the number of pages needed to show `total_items`.
pub fn total_pages(total_items: u64, page_size: PageSize) -> u64 {
    total_items.div_ceil(*page_size)
}

/// Everything the navigation generator needs to lay out a pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NavigationRequest {
    pub total_items: u64,
    pub page_size: PageSize,
    /// One-based. Not checked against the page count.
    pub current_page: u64,
    /// Number of numbered siblings shown on each side of the current page.
    /// `0` disables collapsing, except for controls too long to list in full.
    pub limit: u64,
}

impl NavigationRequest {
    pub const DEFAULT_LIMIT: u64 = 1;

    pub fn new(total_items: u64, page_size: PageSize, current_page: u64) -> Self {
        Self {
            total_items,
            page_size,
            current_page,
            limit: Self::DEFAULT_LIMIT,
        }
    }

    pub fn with_limit(self, limit: u64) -> Self {
        Self { limit, ..self }
    }

    pub fn total_pages(&self) -> u64 {
        total_pages(self.total_items, self.page_size)
    }
}

/// One renderable unit of a pagination control.
///
/// The wrapped value is always the page the option navigates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "RawNavigationOption", try_from = "RawNavigationOption")]
pub enum NavigationOption {
    PreviousPage(u64),
    NextPage(u64),
    /// A collapsed run of pages; jumps to the given page.
    Ellipsis(u64),
    Number(u64),
}

impl NavigationOption {
    pub fn new(symbol: Symbol, value: u64) -> Self {
        match symbol {
            Symbol::PreviousPage => Self::PreviousPage(value),
            Symbol::NextPage => Self::NextPage(value),
            Symbol::Ellipsis => Self::Ellipsis(value),
            Symbol::Number => Self::Number(value),
        }
    }

    pub fn symbol(&self) -> Symbol {
        match self {
            Self::PreviousPage(_) => Symbol::PreviousPage,
            Self::NextPage(_) => Symbol::NextPage,
            Self::Ellipsis(_) => Symbol::Ellipsis,
            Self::Number(_) => Symbol::Number,
        }
    }

    pub fn kind(&self) -> OptionKind {
        match self {
            Self::Number(_) => OptionKind::Number,
            Self::PreviousPage(_) | Self::NextPage(_) | Self::Ellipsis(_) => OptionKind::Symbol,
        }
    }

    pub fn value(&self) -> u64 {
        match *self {
            Self::PreviousPage(page)
            | Self::NextPage(page)
            | Self::Ellipsis(page)
            | Self::Number(page) => page,
        }
    }

    /// Whether this option is one of the previous/next buttons framing the
    /// page list.
    pub fn is_step(&self) -> bool {
        matches!(self, Self::PreviousPage(_) | Self::NextPage(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Symbol {
    PreviousPage,
    NextPage,
    Ellipsis,
    Number,
}

impl Symbol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PreviousPage => "PREVIOUS_PAGE",
            Self::NextPage => "NEXT_PAGE",
            Self::Ellipsis => "ELLIPSIS",
            Self::Number => "NUMBER",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    Number,
    Symbol,
}

impl OptionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Symbol => "symbol",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize)]
struct RawNavigationOption {
    #[serde(rename = "type")]
    kind: OptionKind,
    symbol: Symbol,
    value: u64,
}

impl From<NavigationOption> for RawNavigationOption {
    fn from(option: NavigationOption) -> Self {
        Self {
            kind: option.kind(),
            symbol: option.symbol(),
            value: option.value(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("A navigation option of type `{kind}` cannot carry the symbol `{symbol}`.")]
pub struct NavigationOptionKindMismatch {
    pub kind: OptionKind,
    pub symbol: Symbol,
}

impl TryFrom<RawNavigationOption> for NavigationOption {
    type Error = NavigationOptionKindMismatch;

    fn try_from(raw: RawNavigationOption) -> Result<Self, Self::Error> {
        let option = Self::new(raw.symbol, raw.value);
        if option.kind() != raw.kind {
            return Err(NavigationOptionKindMismatch {
                kind: raw.kind,
                symbol: raw.symbol,
            });
        }
        Ok(option)
    }
}

/// The "first - last of total" summary shown next to a pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRange {
    pub first: u64,
    pub last: u64,
    pub total: u64,
}

impl fmt::Display for PageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} of {} results",
            self.first, self.last, self.total
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn page_size_default() {
        assert_eq!(*PageSize::default(), 50);
    }

    #[test]
    fn page_size_rejects_zero() {
        assert!(PageSize::try_new(0).is_err());
        assert!(serde_json::from_value::<PageSize>(json!(0)).is_err());
        assert_eq!(*PageSize::try_new(1).unwrap(), 1);
    }

    #[test]
    fn total_pages_rounds_up() {
        let page_size = PageSize::try_new(50).unwrap();
        for (total_items, expected) in [(0, 0), (1, 1), (50, 1), (51, 2), (100, 2), (500, 10)] {
            assert_eq!(total_pages(total_items, page_size), expected);
        }
    }

    #[test]
    fn request_defaults_to_one_sibling() {
        let request = NavigationRequest::new(500, PageSize::default(), 3);
        assert_eq!(request.limit, 1);
        assert_eq!(request.with_limit(2).limit, 2);
        assert_eq!(request.total_pages(), 10);
    }

    #[test]
    fn option_wire_format() {
        let options = [
            NavigationOption::PreviousPage(1),
            NavigationOption::Number(1),
            NavigationOption::Ellipsis(6),
            NavigationOption::NextPage(2),
        ];

        let value = serde_json::to_value(options).unwrap();

        assert_eq!(
            value,
            json!([
                {"type": "symbol", "symbol": "PREVIOUS_PAGE", "value": 1},
                {"type": "number", "symbol": "NUMBER", "value": 1},
                {"type": "symbol", "symbol": "ELLIPSIS", "value": 6},
                {"type": "symbol", "symbol": "NEXT_PAGE", "value": 2},
            ])
        );
        assert_eq!(
            serde_json::from_value::<Vec<NavigationOption>>(value).unwrap(),
            options
        );
    }

    #[test]
    fn option_rejects_kind_mismatch() {
        let result = serde_json::from_value::<NavigationOption>(
            json!({"type": "number", "symbol": "ELLIPSIS", "value": 4}),
        );

        let err = result.unwrap_err().to_string();
        assert!(err.contains("cannot carry the symbol `ELLIPSIS`"), "{err}");
    }

    #[test]
    fn page_range_display() {
        let range = PageRange {
            first: 51,
            last: 100,
            total: 500,
        };
        assert_eq!(range.to_string(), "51 - 100 of 500 results");
    }
}
