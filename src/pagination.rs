pub const QUESTIONS_PER_PAGE: usize = 10;

/// Slice out a 1-based page. Out-of-range pages come back empty, callers
/// decide whether that is a 404.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size)
}
