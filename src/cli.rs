use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about = "Student Hub backend client", long_about = None)]
pub struct Cli {
    /// Hub backend to talk to (overrides STUDENT_HUB_BASE_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every assignment the hub knows about
    Assignments,
    /// Show the detail card of one assignment
    Details {
        #[arg(value_name = "COURSE_ID")]
        course_id: String,
        #[arg(value_name = "ASSIGNMENT_ID")]
        assignment_id: String,
    },
    /// Print the calendar payload for a month
    Calendar {
        #[arg(value_name = "YEAR")]
        year: i32,
        #[arg(value_name = "MONTH", value_parser = clap::value_parser!(u32).range(1..=12))]
        month: u32,
    },
    /// Print the page a dashboard button leads to
    Route {
        #[arg(value_name = "ELEMENT_ID")]
        element_id: String,
    },
    /// Print the inbox URL for a sender filter
    InboxUrl {
        #[arg(value_name = "SENDER")]
        sender: String,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_name = "SHELL")]
        shell: String,
    },
}
