use clap::{Args, Subcommand};

/// Project commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProjectCommands {
    /// List published projects.
    List(ProjectListArgs),
    /// Get a project by slug.
    Get { slug: String },
    /// Related projects for a project id.
    Related { id: String },
    /// Featured projects.
    Featured,
    /// Distinct project categories.
    Categories,
}

#[derive(Clone, Debug, Args)]
pub struct ProjectListArgs {
    /// Exact category (e.g. Film, Photography).
    #[arg(long)]
    pub category: Option<String>,
    /// Case-insensitive search over title and overview.
    #[arg(long)]
    pub search: Option<String>,
    /// newest, oldest, or title
    #[arg(long)]
    pub sort: Option<String>,
    #[arg(long)]
    pub page: Option<usize>,
    #[arg(long)]
    pub page_size: Option<usize>,
}
