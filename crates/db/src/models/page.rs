//! One page of a listing plus the size of the full filtered set.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    /// Matching rows across all pages; 0 when the page is empty.
    pub total_count: i32,
}

impl<T> ListPage<T> {
    /// Split rows carrying a `COUNT(*) OVER()` column into items and total.
    pub(crate) fn from_counted<R>(rows: Vec<R>, split: impl Fn(R) -> (T, i32)) -> Self {
        let mut total_count = 0;
        let items = rows
            .into_iter()
            .map(|row| {
                let (item, total) = split(row);
                total_count = total;
                item
            })
            .collect();
        Self { items, total_count }
    }
}
