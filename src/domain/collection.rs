//! Derived views over a loaded note collection

use crate::domain::{Category, Note};

/// Number of notes filed under one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: &'static Category,
    pub count: usize,
}

/// Count notes per catalog category. Every category is reported, including
/// those with no notes. Notes pointing at ids outside the catalog are not
/// counted anywhere.
pub fn count_by_category(notes: &[Note]) -> Vec<CategoryCount> {
    Category::all()
        .iter()
        .map(|category| CategoryCount {
            category,
            count: notes
                .iter()
                .filter(|n| n.category_id == category.id)
                .count(),
        })
        .collect()
}

/// Notes of one category in collection order
pub fn in_category(notes: &[Note], category_id: &str) -> Vec<Note> {
    notes
        .iter()
        .filter(|n| n.category_id == category_id)
        .cloned()
        .collect()
}

/// Up to `limit` notes of one category, newest `created_at` first.
/// Equal timestamps keep their collection order.
pub fn latest_for_category(notes: &[Note], category_id: &str, limit: usize) -> Vec<Note> {
    let mut matching = in_category(notes, category_id);
    matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    matching.truncate(limit);
    matching
}
