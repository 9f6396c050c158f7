//! Output formatting utilities

use crate::application::CategorySummary;
use crate::domain::{Category, Note};
use crate::infrastructure::CollectionStatus;

const PREVIEW_LEN: usize = 40;

fn preview(text: &str) -> String {
    let line = text.lines().next().unwrap_or_default();
    if line.chars().count() > PREVIEW_LEN {
        let cut: String = line.chars().take(PREVIEW_LEN - 1).collect();
        format!("{}…", cut)
    } else {
        line.to_string()
    }
}

/// Format a list of notes for display
pub fn format_note_list(notes: &[Note]) -> String {
    if notes.is_empty() {
        return "No notes found".to_string();
    }

    let mut output = String::new();
    for note in notes {
        output.push_str(&format!(
            "{}  {}  [{}]  {}\n",
            note.id,
            note.updated_at.format("%d-%m-%Y %H:%M"),
            note.category_id,
            preview(note.display_title())
        ));
    }
    output
}

/// Format one note with all of its fields
pub fn format_note_detail(note: &Note) -> String {
    let category = Category::find(&note.category_id)
        .map(|c| c.name)
        .unwrap_or(note.category_id.as_str());

    let mut output = String::new();
    if !note.title.is_empty() {
        output.push_str(&format!("# {}\n\n", note.title));
    }
    output.push_str(&format!("{}\n\n", note.content));
    output.push_str(&format!("id:       {}\n", note.id));
    output.push_str(&format!("category: {}\n", category));
    output.push_str(&format!("created:  {}\n", note.created_at.to_rfc3339()));
    output.push_str(&format!("updated:  {}\n", note.updated_at.to_rfc3339()));
    output
}

/// Format the per-category summary
pub fn format_summary(summary: &[CategorySummary]) -> String {
    let total: usize = summary.iter().map(|s| s.count).sum();

    let mut output = format!("{} notes\n", total);
    for entry in summary {
        output.push_str(&format!(
            "\n{} ({})\n",
            entry.category.name, entry.count
        ));
        for note in &entry.recent {
            output.push_str(&format!(
                "  {}  {}\n",
                note.created_at.format("%d-%m-%Y"),
                preview(note.display_title())
            ));
        }
    }
    output
}

/// Format the category catalog
pub fn format_categories() -> String {
    let mut output = String::new();
    for category in Category::all() {
        output.push_str(&format!(
            "{:<12}{:<14}{}\n",
            category.id, category.name, category.color
        ));
    }
    output
}

pub fn format_status(status: &CollectionStatus) -> String {
    match status {
        CollectionStatus::Missing => "No notes saved".to_string(),
        CollectionStatus::Loaded(n) => format!("{} notes stored", n),
        CollectionStatus::Unreadable(reason) => format!(
            "Stored notes could not be read: {}\n\
            Notes will appear empty until the file is repaired or cleared.",
            reason
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn note(title: &str, content: &str) -> Note {
        let at = Utc.with_ymd_and_hms(2025, 1, 17, 9, 30, 0).unwrap();
        Note {
            id: "abc".to_string(),
            title: title.to_string(),
            content: content.to_string(),
            category_id: "life".to_string(),
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_note_list(&[]), "No notes found");
    }

    #[test]
    fn test_format_note_list() {
        let output = format_note_list(&[note("", "Buy milk")]);
        assert_eq!(output, "abc  17-01-2025 09:30  [life]  Buy milk\n");
    }

    #[test]
    fn test_list_prefers_title() {
        let output = format_note_list(&[note("Shopping", "Buy milk")]);
        assert!(output.contains("Shopping"));
        assert!(!output.contains("Buy milk"));
    }

    #[test]
    fn test_long_content_is_shortened() {
        let output = format_note_list(&[note("", &"x".repeat(100))]);
        assert!(output.contains(&format!("{}…", "x".repeat(39))));
        assert!(!output.contains(&"x".repeat(41)));
    }

    #[test]
    fn test_note_detail_uses_category_name() {
        let output = format_note_detail(&note("Shopping", "Buy milk"));
        assert!(output.starts_with("# Shopping\n"));
        assert!(output.contains("category: Life"));
        assert!(output.contains("created:  2025-01-17T09:30:00+00:00"));
    }

    #[test]
    fn test_categories_listed() {
        let output = format_categories();
        assert_eq!(output.lines().count(), 3);
        assert!(output.contains("work-study"));
        assert!(output.contains("#50C878"));
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(format_status(&CollectionStatus::Missing), "No notes saved");
        assert_eq!(format_status(&CollectionStatus::Loaded(2)), "2 notes stored");
        assert!(format_status(&CollectionStatus::Unreadable("bad".into())).contains("bad"));
    }
}
