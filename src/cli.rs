//! Command line arguments.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "rmine", version, about = "Work with a Redmine server from the terminal")]
#[command(after_help = "ENVIRONMENT VARIABLES:\n  RMINE_ENV  profile to use when -p is not given; \
    with RMINE_ENV=mine the settings are read from 'settings.mine.json'")]
pub struct Cli {
    /// Profile name, selects settings.<PROFILE>.json
    #[arg(short, long, global = true, value_name = "PROFILE")]
    pub profile: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Work with issues
    #[command(subcommand, visible_alias = "i")]
    Issue(IssueAction),

    /// Work with projects
    #[command(subcommand, visible_alias = "p")]
    Project(ProjectAction),

    /// Inspect project memberships
    #[command(subcommand, visible_alias = "m")]
    Membership(MembershipAction),

    /// Inspect users
    #[command(subcommand, visible_alias = "u")]
    User(UserAction),

    /// Read news of the configured project
    #[command(subcommand, visible_alias = "n")]
    News(NewsAction),

    /// Inspect versions
    #[command(subcommand, visible_alias = "v")]
    Version(VersionAction),

    /// Read and edit wiki pages of the configured project
    #[command(subcommand, visible_alias = "w")]
    Wiki(WikiAction),

    /// Manage settings files
    #[command(subcommand, visible_alias = "c")]
    Config(ConfigAction),
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum IssueAction {
    /// Create an issue with the text editor
    #[command(visible_alias = "a")]
    Add,
    /// Create an issue from the given arguments
    #[command(visible_alias = "c")]
    Create { subject: String, description: String },
    /// Edit subject and description of an issue
    #[command(visible_alias = "u")]
    Update { id: u32 },
    #[command(visible_alias = "s")]
    Show { id: u32 },
    #[command(visible_alias = "d")]
    Delete { id: u32 },
    /// Set the issue to the first closed status
    #[command(visible_alias = "x")]
    Close { id: u32 },
    /// Add notes to an issue with the text editor
    #[command(visible_alias = "n")]
    Notes { id: u32 },
    /// List open issues
    #[command(visible_alias = "l")]
    List,
    /// List issues of the configured project
    #[command(visible_alias = "p")]
    Project,
    /// List issues assigned to me
    #[command(visible_alias = "m")]
    Mine,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ProjectAction {
    /// Create a project with the text editor
    #[command(visible_alias = "a")]
    Add,
    /// Create a project from the given arguments
    #[command(visible_alias = "c")]
    Create {
        name: String,
        identifier: String,
        description: Option<String>,
    },
    #[command(visible_alias = "u")]
    Update { id: u32 },
    #[command(visible_alias = "s")]
    Show { id: u32 },
    #[command(visible_alias = "d")]
    Delete { id: u32 },
    #[command(visible_alias = "l")]
    List,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum MembershipAction {
    #[command(visible_alias = "s")]
    Show { id: u32 },
    /// List memberships of a project
    #[command(visible_alias = "l")]
    List { project_id: u32 },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum UserAction {
    #[command(visible_alias = "s")]
    Show { id: u32 },
    #[command(visible_alias = "l")]
    List,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum NewsAction {
    #[command(visible_alias = "s")]
    Show { id: u32 },
    #[command(visible_alias = "l")]
    List,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum VersionAction {
    #[command(visible_alias = "s")]
    Show { id: u32 },
    /// List versions of a project, the configured one by default
    #[command(visible_alias = "l")]
    List { project_id: Option<u32> },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum WikiAction {
    #[command(visible_alias = "s")]
    Show { title: String },
    #[command(visible_alias = "l")]
    List,
    /// Edit a wiki page, creating it if it does not exist
    #[command(visible_alias = "e")]
    Edit { title: String },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigAction {
    /// Write a settings file
    #[command(visible_alias = "i")]
    Init {
        endpoint: String,
        apikey: String,
        project: u32,
    },
    /// Open the settings file in the text editor
    #[command(visible_alias = "e")]
    Edit,
    /// List settings files
    #[command(visible_alias = "l")]
    List,
    /// Print the settings file
    #[command(visible_alias = "s")]
    Show,
}
