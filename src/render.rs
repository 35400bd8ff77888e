//! HTML fragments the page script inserts into the DOM.
//!
//! Backend text is escaped before it lands in markup. Assignment
//! descriptions are the exception: Canvas stores them as rich-text HTML and
//! they are shown as such.

use crate::format::format_date;
use crate::models::{Assignment, AssignmentDetails};

pub const POPUP_CLASS: &str = "assignment-popup";
pub const POPUP_CLOSE_CLASS: &str = "popup-close";
pub const PICKER_CLASS: &str = "assignment-dialog";
pub const PICKER_ITEM_CLASS: &str = "assignment-item";
pub const NO_DESCRIPTION: &str = "No description available";

pub const CALENDAR_CELL_HOVER: &str = "rgba(65, 105, 225, 0.5)";
pub const CALENDAR_CELL_REST: &str = "rgba(65, 105, 225, 0.3)";

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Only plain web links are rendered; anything else (`javascript:`, `data:`)
/// is dropped.
fn is_web_link(url: &str) -> bool {
    let lower = url.trim_start().to_ascii_lowercase();
    lower.starts_with("https://") || lower.starts_with("http://")
}

fn assignment_card(assignment: &Assignment) -> String {
    format!(
        r#"<div class="assignment-card"><h3>{}</h3><p>{}</p><p>Due: {}</p></div>"#,
        escape_html(&assignment.name),
        escape_html(&assignment.course_name),
        escape_html(assignment.due_label()),
    )
}

/// Contents of `.assignments-container`: one card per assignment, in order.
pub fn assignment_cards_html(assignments: &[Assignment]) -> String {
    assignments.iter().map(assignment_card).collect()
}

/// Inner markup of the assignment detail popup.
pub fn detail_card_html(details: &AssignmentDetails) -> String {
    let due = details.due().map(format_date).unwrap_or_else(|| format_date(""));
    let points = details
        .points_possible
        .as_ref()
        .map(|p| p.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    let description = match details.description.as_deref() {
        Some(d) if !d.trim().is_empty() => d.to_string(),
        _ => NO_DESCRIPTION.to_string(),
    };
    let link = details
        .html_url
        .as_deref()
        .filter(|url| is_web_link(url))
        .map(|url| {
            format!(
                r#"<a class="popup-link" href="{}" target="_blank" rel="noopener noreferrer">View in Canvas</a>"#,
                escape_html(url)
            )
        })
        .unwrap_or_default();

    format!(
        concat!(
            r#"<div class="popup-content">"#,
            r#"<span class="{close}">&times;</span>"#,
            r#"<h3>{name}</h3>"#,
            r#"<p><strong>Course:</strong> {course}</p>"#,
            r#"<p><strong>Due:</strong> {due}</p>"#,
            r#"<p><strong>Points:</strong> {points}</p>"#,
            r#"<div class="popup-description">{description}</div>"#,
            "{link}",
            "</div>"
        ),
        close = POPUP_CLOSE_CLASS,
        name = escape_html(&details.name),
        course = escape_html(&details.course_name),
        due = escape_html(&due),
        points = escape_html(&points),
        description = description,
        link = link,
    )
}

/// Inner markup of the assignment picker dialog. Items carry `data-index`
/// pointing back into `assignments`.
pub fn assignment_picker_html(assignments: &[Assignment]) -> String {
    let items: String = assignments
        .iter()
        .enumerate()
        .map(|(index, assignment)| {
            format!(
                r#"<div class="{class}" data-index="{index}"><h4>{name}</h4><p>Course: {course}</p><p>Due: {due}</p></div>"#,
                class = PICKER_ITEM_CLASS,
                index = index,
                name = escape_html(&assignment.name),
                course = escape_html(&assignment.course_name),
                due = escape_html(assignment.due_label()),
            )
        })
        .collect();
    format!("<div><h3>Select an Assignment</h3>{}</div>", items)
}
