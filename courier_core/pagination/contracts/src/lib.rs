use courier_models::pagination::{NavigationOption, NavigationRequest, PageRange, PageSize};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait PaginationService: Send + Sync + 'static {
    /// Lay out the options of a numeric pagination control.
    ///
    /// The result always starts with a previous-page option and ends with a
    /// next-page option. Long page ranges are collapsed with ellipses.
    fn navigation_options(&self, request: NavigationRequest) -> Vec<NavigationOption>;

    /// Describe which items are visible on the current page.
    fn page_range(&self, total_items: u64, page_size: PageSize, current_page: u64) -> PageRange;
}

#[cfg(feature = "mock")]
impl MockPaginationService {
    pub fn with_navigation_options(
        mut self,
        request: NavigationRequest,
        result: Vec<NavigationOption>,
    ) -> Self {
        self.expect_navigation_options()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(|_| result);
        self
    }

    pub fn with_page_range(
        mut self,
        total_items: u64,
        page_size: PageSize,
        current_page: u64,
        result: PageRange,
    ) -> Self {
        self.expect_page_range()
            .once()
            .with(
                mockall::predicate::eq(total_items),
                mockall::predicate::eq(page_size),
                mockall::predicate::eq(current_page),
            )
            .return_once(move |_, _, _| result);
        self
    }
}
