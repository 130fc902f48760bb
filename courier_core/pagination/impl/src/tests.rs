use courier_core_pagination_contracts::PaginationService;
use courier_models::pagination::{
    NavigationOption::{
        self, Ellipsis as E, NextPage as Next, Number as N, PreviousPage as Prev,
    },
    NavigationRequest, PageRange, PageSize,
};
use pretty_assertions::assert_eq;

use crate::PaginationServiceImpl;

fn options(total_items: u64, page_size: u64, current_page: u64, limit: u64) -> Vec<NavigationOption> {
    let page_size = PageSize::try_new(page_size).unwrap();
    let request = NavigationRequest::new(total_items, page_size, current_page).with_limit(limit);
    PaginationServiceImpl.navigation_options(request)
}

fn window(options: &[NavigationOption]) -> &[NavigationOption] {
    &options[1..options.len() - 1]
}

#[test]
fn two_pages() {
    assert_eq!(options(100, 50, 1, 1), [Prev(1), N(1), N(2), Next(2)]);
}

#[test]
fn no_items() {
    assert_eq!(options(0, 50, 1, 1), [Prev(1), Next(0)]);
}

#[test]
fn default_limit_is_one() {
    let request = NavigationRequest::new(500, PageSize::try_new(50).unwrap(), 1);

    let result = PaginationServiceImpl.navigation_options(request);

    assert_eq!(result, options(500, 50, 1, 1));
}

#[test]
fn near_start() {
    let expected = [N(1), N(2), N(3), N(4), N(5), E(6), N(10)];
    for (current_page, previous, next) in [(1, 1, 2), (2, 1, 3), (4, 3, 5)] {
        let result = options(500, 50, current_page, 1);
        assert_eq!(result.first(), Some(&Prev(previous)));
        assert_eq!(window(&result), expected);
        assert_eq!(result.last(), Some(&Next(next)));
    }
}

#[test]
fn middle() {
    assert_eq!(
        options(500, 50, 5, 1),
        [Prev(4), N(1), E(3), N(4), N(5), N(6), E(7), N(10), Next(6)]
    );
    assert_eq!(
        options(500, 50, 6, 1),
        [Prev(5), N(1), E(4), N(5), N(6), N(7), E(8), N(10), Next(7)]
    );
}

#[test]
fn near_end() {
    let expected = [N(1), E(5), N(6), N(7), N(8), N(9), N(10)];
    for (current_page, previous, next) in [(7, 6, 8), (9, 8, 10), (10, 9, 10)] {
        let result = options(500, 50, current_page, 1);
        assert_eq!(result.first(), Some(&Prev(previous)));
        assert_eq!(window(&result), expected);
        assert_eq!(result.last(), Some(&Next(next)));
    }
}

#[test]
fn collapse_threshold() {
    // 7 pages fit without collapsing when showing one sibling.
    assert_eq!(
        options(350, 50, 1, 1),
        [Prev(1), N(1), N(2), N(3), N(4), N(5), N(6), N(7), Next(2)]
    );
    assert_eq!(
        options(351, 50, 1, 1),
        [Prev(1), N(1), N(2), N(3), N(4), N(5), E(6), N(8), Next(2)]
    );
}

#[test]
fn wider_limit() {
    assert_eq!(
        window(&options(20, 1, 5, 2)),
        [N(1), N(2), N(3), N(4), N(5), N(6), N(7), E(8), N(20)]
    );
    assert_eq!(
        options(20, 1, 10, 2),
        [Prev(9), N(1), E(7), N(8), N(9), N(10), N(11), N(12), E(13), N(20), Next(11)]
    );
    assert_eq!(
        window(&options(20, 1, 16, 2)),
        [N(1), E(13), N(14), N(15), N(16), N(17), N(18), N(19), N(20)]
    );
}

#[test]
fn zero_limit_never_collapses() {
    let result = options(100, 1, 50, 0);

    let expected = (1..=100).map(N).collect::<Vec<_>>();
    assert_eq!(window(&result), expected);
    assert_eq!(result.first(), Some(&Prev(49)));
    assert_eq!(result.last(), Some(&Next(51)));
}

#[test]
fn zero_limit_collapses_huge_controls() {
    // Arrange
    let total_pages = 1006;

    // Act
    let listed = options(total_pages - 1, 1, 3, 0);
    let collapsed = options(total_pages, 1, 3, 0);

    // Assert
    assert_eq!(window(&listed).len(), 1005);
    assert_eq!(collapsed, options(total_pages, 1, 3, 1));
}

#[test]
fn huge_limit_is_bounded() {
    // Arrange
    let total_pages = 10_000;

    // Act
    let result = options(total_pages, 1, 5_000, u64::MAX / 2);

    // Assert
    assert_eq!(result, options(total_pages, 1, 5_000, 500));
    assert_eq!(window(&result).len(), 1005);
    assert_eq!(window(&result)[1], E(4_499));
    assert_eq!(window(&options(20, 1, 5, u64::MAX)).len(), 20);
}

#[test]
fn largest_page_count() {
    for limit in [0, 1, u64::MAX / 2, u64::MAX] {
        // Act
        let result = options(u64::MAX, 1, 1, limit);

        // Assert
        assert_eq!(result.first(), Some(&Prev(1)), "limit={limit}");
        assert_eq!(result.last(), Some(&Next(2)), "limit={limit}");
        assert_eq!(window(&result).last(), Some(&N(u64::MAX)), "limit={limit}");
        assert!(result.len() <= 1007, "limit={limit}");
    }

    let result = options(u64::MAX, 1, u64::MAX, 0);
    assert_eq!(
        result,
        [
            Prev(u64::MAX - 1),
            N(1),
            E(u64::MAX - 5),
            N(u64::MAX - 4),
            N(u64::MAX - 3),
            N(u64::MAX - 2),
            N(u64::MAX - 1),
            N(u64::MAX),
            Next(u64::MAX),
        ]
    );
}

#[test]
fn current_page_past_the_end() {
    assert_eq!(options(100, 50, 5, 1), [Prev(4), N(1), N(2), Next(2)]);
    assert_eq!(options(0, 50, 0, 1), [Prev(1), Next(0)]);
}

#[test]
fn idempotent() {
    assert_eq!(options(1234, 10, 42, 2), options(1234, 10, 42, 2));
}

#[test]
fn window_invariants() {
    for total_pages in 1..=40 {
        for limit in 0..=3 {
            for current_page in 1..=total_pages {
                let result = options(total_pages, 1, current_page, limit);
                let context = format!("pages={total_pages} limit={limit} page={current_page}");

                assert_eq!(
                    result.first(),
                    Some(&Prev(current_page.saturating_sub(1).max(1))),
                    "{context}"
                );
                assert_eq!(
                    result.last(),
                    Some(&Next((current_page + 1).min(total_pages))),
                    "{context}"
                );

                let window = window(&result);
                assert!(
                    window.windows(2).all(|w| w[0].value() < w[1].value()),
                    "{context}: {window:?}"
                );
                assert!(window.contains(&N(current_page)), "{context}: {window:?}");

                let collapsed = limit > 0 && total_pages > limit * 2 + 5;
                if collapsed {
                    assert_eq!(window.len() as u64, limit * 2 + 5, "{context}");
                    assert_eq!(window.first(), Some(&N(1)), "{context}");
                    assert_eq!(window.last(), Some(&N(total_pages)), "{context}");
                    assert!(!window.iter().any(|o| o.is_step()), "{context}");
                } else {
                    let expected = (1..=total_pages).map(N).collect::<Vec<_>>();
                    assert_eq!(window, expected, "{context}");
                }
            }
        }
    }
}

#[test]
fn page_range() {
    let page_size = PageSize::try_new(50).unwrap();
    for (total_items, current_page, expected) in [
        (500, 1, (1, 50)),
        (500, 2, (51, 100)),
        (120, 3, (101, 120)),
        (0, 1, (0, 0)),
        (100, 5, (100, 100)),
    ] {
        let result = PaginationServiceImpl.page_range(total_items, page_size, current_page);
        assert_eq!(
            result,
            PageRange {
                first: expected.0,
                last: expected.1,
                total: total_items,
            }
        );
    }
}
