use crate::models::Id;

/// Pages the hub navigates to with a full page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    CheckInbox,
    CheckGrades,
    LectureSummary,
    HomeworkHelp,
    SummarizeText,
    TodoList,
    GraphingCalculator,
    VideoPrompt,
    SelectAssignmentForVideos,
    Assignments,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::CheckInbox => "/check-inbox",
            Route::CheckGrades => "/check-grades",
            Route::LectureSummary => "/create-lecture-summary",
            Route::HomeworkHelp => "/get-hw-help",
            Route::SummarizeText => "/summarize-text",
            Route::TodoList => "/todo-list",
            Route::GraphingCalculator => "/graphing-calculator",
            Route::VideoPrompt => "/video-prompt",
            Route::SelectAssignmentForVideos => "/select-assignment-for-videos",
            Route::Assignments => "/assignments",
        }
    }
}

/// Buttons that always lead to the same page, keyed by element id.
pub const NAV_BUTTONS: &[(&str, Route)] = &[
    ("check-inbox", Route::CheckInbox),
    ("check-grades", Route::CheckGrades),
    ("lecture-summary", Route::LectureSummary),
    ("homework-help", Route::HomeworkHelp),
    ("summarize-text", Route::SummarizeText),
    ("todo-list", Route::TodoList),
    ("graphing-calculator", Route::GraphingCalculator),
];

pub fn route_for_button(element_id: &str) -> Option<Route> {
    NAV_BUTTONS
        .iter()
        .find(|(id, _)| *id == element_id)
        .map(|(_, route)| *route)
}

pub fn inbox_url(sender: &str) -> String {
    format!("{}?sender={}", Route::CheckInbox.path(), urlencoding::encode(sender))
}

pub fn course_url(course_id: &str) -> String {
    format!("/course/{}", urlencoding::encode(course_id))
}

pub fn assignment_details_path(course_id: &Id, assignment_id: &Id) -> String {
    format!(
        "/api/assignment-details/{}/{}",
        urlencoding::encode(&course_id.to_string()),
        urlencoding::encode(&assignment_id.to_string())
    )
}

pub fn calendar_path(year: i32, month: u32) -> String {
    format!("/api/calendar?year={}&month={}", year, month)
}

pub const ASSIGNMENTS_API: &str = "/api/get-assignments";

/// The logical page a script instance is running on. Background work such as
/// the inbox refresh or the lazy assignment load is tied to a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Inbox,
    Assignments,
    Other,
}

impl View {
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        if trimmed == Route::CheckInbox.path() {
            View::Inbox
        } else if trimmed == Route::Assignments.path() {
            View::Assignments
        } else {
            View::Other
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_nav_button_has_its_documented_path() {
        let expected = [
            ("check-inbox", "/check-inbox"),
            ("check-grades", "/check-grades"),
            ("lecture-summary", "/create-lecture-summary"),
            ("homework-help", "/get-hw-help"),
            ("summarize-text", "/summarize-text"),
            ("todo-list", "/todo-list"),
            ("graphing-calculator", "/graphing-calculator"),
        ];
        for (id, path) in expected {
            assert_eq!(route_for_button(id).map(Route::path), Some(path), "{}", id);
        }
        assert_eq!(NAV_BUTTONS.len(), expected.len());
    }

    #[test]
    fn unknown_button_has_no_route() {
        assert_eq!(route_for_button("recommend-videos"), None);
        assert_eq!(route_for_button(""), None);
    }

    #[test]
    fn sender_is_percent_encoded() {
        assert_eq!(inbox_url("prof@uni.edu"), "/check-inbox?sender=prof%40uni.edu");
        assert_eq!(
            inbox_url("Tom & Jerry/TA office"),
            "/check-inbox?sender=Tom%20%26%20Jerry%2FTA%20office"
        );
        assert_eq!(inbox_url(""), "/check-inbox?sender=");
    }

    #[test]
    fn api_paths() {
        assert_eq!(course_url("42"), "/course/42");
        assert_eq!(
            assignment_details_path(&Id::Number(7), &Id::from("991")),
            "/api/assignment-details/7/991"
        );
        assert_eq!(calendar_path(2024, 4), "/api/calendar?year=2024&month=4");
    }

    #[test]
    fn view_follows_path() {
        assert_eq!(View::from_path("/check-inbox"), View::Inbox);
        assert_eq!(View::from_path("/check-inbox/"), View::Inbox);
        assert_eq!(View::from_path("/assignments"), View::Assignments);
        assert_eq!(View::from_path("/dashboard"), View::Other);
        assert_eq!(View::from_path("/"), View::Other);
    }
}
