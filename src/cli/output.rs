//! Output formatting utilities

use crate::domain::{Day, Entry};

/// Format extracted days for display
pub fn format_log(days: &[Day]) -> String {
    if days.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for day in days {
        output.push_str(&format!("{}\n", day.date.format("%Y-%m-%d")));
        for entry in &day.entries {
            output.push_str(&format_entry(entry));
        }
    }
    output
}

fn format_entry(entry: &Entry) -> String {
    let tags: Vec<String> = entry.tags.iter().map(|t| t.to_string()).collect();
    format!(
        "  {}-{}  {}\n",
        entry.start.format("%H:%M"),
        entry.end.format("%H:%M"),
        tags.join(", ")
    )
}
