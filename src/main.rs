#[cfg(not(target_arch = "wasm32"))]
mod cli;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

// The browser build only uses the library.
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use anyhow::Result;
    use clap::{CommandFactory, Parser};
    use student_hub::format::{format_date, format_due_time};
    use student_hub::render::NO_DESCRIPTION;
    use student_hub::routes::{inbox_url, route_for_button, NAV_BUTTONS};
    use student_hub::{HubClient, HubConfig, Id};

    use crate::cli::{Cli, Commands};

    pub fn run() -> Result<()> {
        let cli = Cli::parse();
        let config = match cli.base_url {
            Some(url) => HubConfig::with_base_url(url),
            None => HubConfig::from_env(),
        };

        match cli.command {
            Commands::Assignments => {
                let client = HubClient::new(config);
                let assignments = block_on(client.assignments())?;
                if assignments.is_empty() {
                    println!("No assignments.");
                }
                for assignment in assignments {
                    println!(
                        "{:<40} {:<30} {}",
                        assignment.name,
                        assignment.course_name,
                        format_date(assignment.due_label())
                    );
                }
            }
            Commands::Details {
                course_id,
                assignment_id,
            } => {
                let client = HubClient::new(config);
                let details = block_on(client.assignment_details(
                    &Id::from(course_id.as_str()),
                    &Id::from(assignment_id.as_str()),
                ))?;
                println!("{}", details.name);
                println!("  Course: {}", details.course_name);
                println!("  Due:    {}", format_due_time(details.due().unwrap_or("")));
                match &details.points_possible {
                    Some(points) => println!("  Points: {}", points),
                    None => println!("  Points: N/A"),
                }
                println!();
                println!(
                    "{}",
                    details
                        .description
                        .as_deref()
                        .filter(|d| !d.trim().is_empty())
                        .unwrap_or(NO_DESCRIPTION)
                );
                if let Some(url) = &details.html_url {
                    println!();
                    println!("View in Canvas: {}", url);
                }
            }
            Commands::Calendar { year, month } => {
                let client = HubClient::new(config);
                let data = block_on(client.calendar(year, month))?;
                println!("{}", serde_json::to_string_pretty(&data)?);
            }
            Commands::Route { element_id } => match route_for_button(&element_id) {
                Some(route) => println!("{}", route.path()),
                None => {
                    println!("Error: no button with id '{}'. Known ids:", element_id);
                    for (id, route) in NAV_BUTTONS {
                        println!("  {:<20} {}", id, route.path());
                    }
                }
            },
            Commands::InboxUrl { sender } => {
                println!("{}", inbox_url(&sender));
            }
            Commands::Completions { shell } => {
                use clap_complete::{generate, Shell};
                let shell = shell.to_lowercase();
                let shell_enum = match shell.as_str() {
                    "bash" => Shell::Bash,
                    "zsh" => Shell::Zsh,
                    "fish" => Shell::Fish,
                    "elvish" => Shell::Elvish,
                    "powershell" => Shell::PowerShell,
                    _ => {
                        println!("Unsupported shell: {}", shell);
                        return Ok(());
                    }
                };
                let mut cmd = Cli::command();
                generate(shell_enum, &mut cmd, "student-hub", &mut std::io::stdout());
            }
        }

        Ok(())
    }

    fn block_on<T>(future: impl std::future::Future<Output = Result<T>>) -> Result<T> {
        let rt = tokio::runtime::Runtime::new()?;
        rt.block_on(future)
    }
}
