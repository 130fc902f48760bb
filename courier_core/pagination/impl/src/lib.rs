use courier_core_pagination_contracts::PaginationService;
use courier_models::pagination::{
    total_pages, NavigationOption, NavigationRequest, PageRange, PageSize,
};
use courier_utils::trace_instrument;

#[cfg(test)]
mod tests;

/// Pages always shown in the middle of a collapsed control besides the
/// current page's siblings.
const MAXIMUM_UNLIMITED_PAGES: u64 = 3;
/// The first and the last page.
const BOUNDARY_PAGES: u64 = 2;
/// Largest sibling count honored. Controls with more than
/// `limit_threshold(MAXIMUM_LIMIT)` pages are always collapsed, so the
/// window never grows past a few hundred entries.
const MAXIMUM_LIMIT: u64 = 500;

#[derive(Debug, Clone, Copy, Default)]
pub struct PaginationServiceImpl;

impl PaginationService for PaginationServiceImpl {
    #[trace_instrument(skip(self))]
    fn navigation_options(&self, request: NavigationRequest) -> Vec<NavigationOption> {
        let total_pages = request.total_pages();

        let window = match collapse_limit(request.limit, total_pages) {
            Some(limit) => limited_window(total_pages, request.current_page, limit),
            None => unlimited_window(total_pages),
        };

        with_steps(window, request.current_page, total_pages)
    }

    #[trace_instrument(skip(self))]
    fn page_range(&self, total_items: u64, page_size: PageSize, current_page: u64) -> PageRange {
        let page_size = *page_size;
        let last = page_size.saturating_mul(current_page).min(total_items);
        // Pages past the end collapse onto the last item instead of
        // reporting a backwards range.
        let first = if total_items > 0 {
            page_size
                .saturating_mul(current_page.saturating_sub(1))
                .saturating_add(1)
                .min(last)
        } else {
            0
        };

        PageRange {
            first,
            last,
            total: total_items,
        }
    }
}

/// Page counts above this threshold are collapsed.
fn limit_threshold(limit: u64) -> u64 {
    limit
        .saturating_mul(2)
        .saturating_add(MAXIMUM_UNLIMITED_PAGES + BOUNDARY_PAGES)
}

/// Returns the sibling count of a collapsed control, or `None` if every
/// page is listed.
///
/// A zero limit only lists every page while that stays within the bound of
/// `MAXIMUM_LIMIT`. Longer controls fall back to the default limit.
fn collapse_limit(limit: u64, total_pages: u64) -> Option<u64> {
    let limit = match limit {
        0 if total_pages > limit_threshold(MAXIMUM_LIMIT) => NavigationRequest::DEFAULT_LIMIT,
        0 => return None,
        limit => limit.min(MAXIMUM_LIMIT),
    };
    (total_pages > limit_threshold(limit)).then_some(limit)
}

fn unlimited_window(total_pages: u64) -> Vec<NavigationOption> {
    (1..=total_pages).map(NavigationOption::Number).collect()
}

/// Lays out a collapsed window. Every regime yields `first_boundary + 2`
/// entries in ascending page order.
///
/// Requires `total_pages > limit_threshold(limit)`.
fn limited_window(total_pages: u64, current_page: u64, limit: u64) -> Vec<NavigationOption> {
    let boundary_size = limit * 2 + 2;
    let first_boundary = 1 + boundary_size;
    let last_boundary = total_pages - boundary_size;

    let mut window = Vec::new();

    if current_page <= first_boundary - limit {
        window.extend((1..=first_boundary).map(NavigationOption::Number));
        window.push(NavigationOption::Ellipsis(first_boundary + 1));
        window.push(NavigationOption::Number(total_pages));
    } else if current_page >= last_boundary + limit {
        window.push(NavigationOption::Number(1));
        window.push(NavigationOption::Ellipsis(last_boundary - 1));
        window.extend((last_boundary..=total_pages).map(NavigationOption::Number));
    } else {
        let start = current_page - limit;
        let end = current_page + limit;
        window.push(NavigationOption::Number(1));
        window.push(NavigationOption::Ellipsis(start - 1));
        window.extend((start..=end).map(NavigationOption::Number));
        window.push(NavigationOption::Ellipsis(end + 1));
        window.push(NavigationOption::Number(total_pages));
    }

    window
}

fn with_steps(
    window: Vec<NavigationOption>,
    current_page: u64,
    total_pages: u64,
) -> Vec<NavigationOption> {
    let previous = if current_page <= 1 {
        1
    } else {
        current_page - 1
    };
    let next = if current_page >= total_pages {
        total_pages
    } else {
        current_page + 1
    };

    std::iter::once(NavigationOption::PreviousPage(previous))
        .chain(window)
        .chain(std::iter::once(NavigationOption::NextPage(next)))
        .collect()
}
