use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Course and assignment identifiers arrive as JSON numbers from Canvas and
/// as strings when read back out of `data-*` attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Number(i64),
    Text(String),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Number(n) => write!(f, "{}", n),
            Id::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        match value.parse::<i64>() {
            Ok(n) => Id::Number(n),
            Err(_) => Id::Text(value.to_string()),
        }
    }
}

/// The backend sends a number, or the string "N/A" when Canvas has none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Points {
    Number(f64),
    Text(String),
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Points::Number(n) if n.fract() == 0.0 => write!(f, "{:.0}", n),
            Points::Number(n) => write!(f, "{}", n),
            Points::Text(s) => f.write_str(s),
        }
    }
}

/// Canvas sends `null` for names it does not have; read those as empty.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub course_name: String,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub due_at: Option<String>,
    #[serde(default)]
    pub points_possible: Option<Points>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub course_id: Option<Id>,
    #[serde(default, alias = "id")]
    pub assignment_id: Option<Id>,
}

impl Assignment {
    /// Due date as the list endpoint reports it, falling back to the raw
    /// timestamp.
    pub fn due_label(&self) -> &str {
        self.due_date
            .as_deref()
            .or(self.due_at.as_deref())
            .unwrap_or("No due date")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentDetails {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub course_name: String,
    #[serde(default)]
    pub due_at: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub points_possible: Option<Points>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
}

impl AssignmentDetails {
    pub fn due(&self) -> Option<&str> {
        self.due_at.as_deref().or(self.due_date.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_payload_parses_with_missing_fields() {
        let json = r#"[{"name":"A","course_name":"C1","due_date":"2024-01-01"},
                       {"name":"B","course_name":"C2","due_date":"2024-02-02","id":77}]"#;
        let parsed: Vec<Assignment> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].due_label(), "2024-01-01");
        assert_eq!(parsed[1].assignment_id, Some(Id::Number(77)));
        assert!(parsed[0].description.is_none());
    }

    #[test]
    fn details_accept_due_date_and_text_points() {
        let json = r#"{"name":"Essay","course_name":"History","due_date":"2024-04-05T00:00:00Z",
                       "points_possible":"N/A","description":null}"#;
        let details: AssignmentDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.due(), Some("2024-04-05T00:00:00Z"));
        assert_eq!(details.points_possible.unwrap().to_string(), "N/A");
    }

    #[test]
    fn null_names_do_not_drop_the_list() {
        let json = r#"[{"name":"A","course_name":null,"due_date":"2024-01-01"},
                       {"name":null,"course_name":"C2","due_date":"2024-02-02"}]"#;
        let parsed: Vec<Assignment> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].name, "A");
        assert_eq!(parsed[0].course_name, "");
        assert_eq!(parsed[1].name, "");
        assert_eq!(parsed[1].course_name, "C2");

        let details: AssignmentDetails =
            serde_json::from_str(r#"{"name":"Essay","course_name":null}"#).unwrap();
        assert_eq!(details.course_name, "");
    }

    #[test]
    fn points_display_drops_trailing_zero() {
        assert_eq!(Points::Number(10.0).to_string(), "10");
        assert_eq!(Points::Number(7.5).to_string(), "7.5");
        assert_eq!(Points::Number(1e20).to_string(), "100000000000000000000");
    }

    #[test]
    fn id_from_attribute_prefers_numbers() {
        assert_eq!(Id::from("123"), Id::Number(123));
        assert_eq!(Id::from("abc"), Id::Text("abc".into()));
        assert_eq!(Id::from("123").to_string(), "123");
    }
}
