use crate::dtos::offer::{OffersPage, Pagination};

pub fn paginate<T>(items: Vec<T>, page: usize, limit: usize) -> OffersPage<T> {
    let page = page.max(1);
    let limit = limit.max(1);
    let total_items = items.len();
    let start_index = (page - 1).saturating_mul(limit);
    let end_index = page.saturating_mul(limit);

    let data: Vec<T> = items.into_iter()
        .skip(start_index)
        .take(end_index - start_index)
        .collect();

    OffersPage {
        data,
        pagination: Pagination {
            current_page: page,
            total_pages: total_items.div_ceil(limit),
            total_items,
            items_per_page: limit,
            has_next: end_index < total_items,
            has_prev: start_index > 0,
        },
    }
}
