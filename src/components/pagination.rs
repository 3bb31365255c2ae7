//! Pagination Component
//!
//! Numbered page buttons with prev/next, shown only when needed.

use leptos::prelude::*;

/// Page size shared by the admin list views
pub const ITEMS_PER_PAGE: usize = 10;

/// Number of pages needed for `total` filtered rows
pub fn total_pages(total: usize) -> usize {
    total.div_ceil(ITEMS_PER_PAGE)
}

/// Slice of `items` shown on a 1-based page
pub fn paginate<T: Clone>(items: &[T], page: usize) -> Vec<T> {
    items
        .iter()
        .skip(page.saturating_sub(1) * ITEMS_PER_PAGE)
        .take(ITEMS_PER_PAGE)
        .cloned()
        .collect()
}

#[component]
pub fn Pagination(
    page: ReadSignal<usize>,
    set_page: WriteSignal<usize>,
    total_pages: Signal<usize>,
) -> impl IntoView {
    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <div class="pagination">
                <button
                    class="page-btn"
                    disabled=move || page.get() <= 1
                    on:click=move |_| set_page.update(|p| *p = p.saturating_sub(1).max(1))
                >
                    "‹"
                </button>
                <For
                    each=move || 1..=total_pages.get()
                    key=|n| *n
                    children=move |n| {
                        let is_active = move || page.get() == n;
                        view! {
                            <button
                                class=move || if is_active() { "page-btn active" } else { "page-btn" }
                                on:click=move |_| set_page.set(n)
                            >
                                {n}
                            </button>
                        }
                    }
                />
                <button
                    class="page-btn"
                    disabled=move || page.get() >= total_pages.get()
                    on:click=move |_| set_page.update(|p| *p += 1)
                >
                    "›"
                </button>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(10), 1);
        assert_eq!(total_pages(11), 2);
        assert_eq!(total_pages(25), 3);
    }

    #[test]
    fn test_paginate_slices_by_page() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(paginate(&items, 1).len(), 10);
        assert_eq!(paginate(&items, 3), vec![21, 22, 23, 24, 25]);
        assert!(paginate(&items, 4).is_empty());
    }
}
