//! Leptos Pager Utilities
//!
//! Page arithmetic plus a windowed Previous / 1 … 8 9 10 11 12 … 20 / Next control.
//! All page numbers are 1-based.

use std::ops::Range;

use leptos::prelude::*;

/// One slot in the rendered page strip
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageControl {
    /// Clickable page number
    Page(usize),
    /// Gap marker between non-adjacent pages
    Ellipsis,
}

/// Number of pages needed for `item_count` items, `ceil(item_count / page_size)`.
pub fn total_pages(item_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    item_count.div_ceil(page_size)
}

/// True when `page` lies in `[1, total]`.
pub fn is_valid_page(page: usize, total: usize) -> bool {
    page >= 1 && page <= total
}

/// Whether a Previous control should be enabled on `current`
pub fn has_previous(current: usize) -> bool {
    current > 1
}

/// Whether a Next control should be enabled on `current` of `total`
pub fn has_next(current: usize, total: usize) -> bool {
    current < total
}

/// Index range `[(page-1)*page_size, min(page*page_size, item_count))`.
///
/// Always a valid slice range for a slice of `item_count` elements; pages past
/// the end (or page 0) give an empty range.
pub fn page_bounds(page: usize, page_size: usize, item_count: usize) -> Range<usize> {
    if page == 0 {
        return 0..0;
    }
    let start = (page - 1).saturating_mul(page_size).min(item_count);
    let end = page.saturating_mul(page_size).min(item_count);
    start..end
}

/// Build the visible page strip.
///
/// With `total <= max_visible` every page is shown. Otherwise page 1, the
/// `siblings` pages on each side of `current`, and the last page are shown,
/// with an ellipsis wherever pages are skipped.
pub fn page_controls(current: usize, total: usize, max_visible: usize, siblings: usize) -> Vec<PageControl> {
    if total <= max_visible {
        return (1..=total).map(PageControl::Page).collect();
    }

    let current = current.clamp(1, total);
    let start = current.saturating_sub(siblings).max(1);
    let end = (current + siblings).min(total);

    let mut controls = Vec::with_capacity(end - start + 5);
    if start > 1 {
        controls.push(PageControl::Page(1));
        if start > 2 {
            controls.push(PageControl::Ellipsis);
        }
    }
    controls.extend((start..=end).map(PageControl::Page));
    if end < total {
        if end < total - 1 {
            controls.push(PageControl::Ellipsis);
        }
        controls.push(PageControl::Page(total));
    }
    controls
}

/// Previous / page numbers / Next control.
///
/// Hidden while there is at most one page. `on_change` only ever receives
/// pages inside `[1, total_pages]`; the edge buttons are disabled instead of
/// emitting an out-of-range page.
#[component]
pub fn Pager(
    #[prop(into)] current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] on_change: Callback<usize>,
    #[prop(default = 10)] max_visible: usize,
    #[prop(default = 2)] siblings: usize,
) -> impl IntoView {
    let emit = move |page: usize| {
        if is_valid_page(page, total_pages.get_untracked()) {
            on_change.run(page);
        }
    };

    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <nav class="pager">
                <button
                    class="pager-btn prev"
                    disabled=move || !has_previous(current_page.get())
                    on:click=move |_| emit(current_page.get_untracked().saturating_sub(1))
                >
                    "Previous"
                </button>

                {move || {
                    page_controls(current_page.get(), total_pages.get(), max_visible, siblings)
                        .into_iter()
                        .map(|control| match control {
                            PageControl::Page(page) => view! {
                                <button
                                    class=move || if current_page.get() == page { "pager-btn page active" } else { "pager-btn page" }
                                    on:click=move |_| emit(page)
                                >
                                    {page}
                                </button>
                            }.into_any(),
                            PageControl::Ellipsis => view! {
                                <span class="pager-ellipsis">"..."</span>
                            }.into_any(),
                        })
                        .collect_view()
                }}

                <button
                    class="pager-btn next"
                    disabled=move || !has_next(current_page.get(), total_pages.get())
                    on:click=move |_| emit(current_page.get_untracked() + 1)
                >
                    "Next"
                </button>
            </nav>
        </Show>
    }
}
