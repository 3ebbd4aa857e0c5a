use clap::{Args, Subcommand};

use crate::cli::subcommands::{AdminCommands, ArticleCommands, AuthCommands, ProjectCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Portfolio projects.
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
    /// Knowledge hub articles.
    Article {
        #[command(subcommand)]
        action: ArticleCommands,
    },
    /// Demo authentication.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Subscribe an email to the newsletter.
    Subscribe(SubscribeArgs),
    /// Send a contact message.
    Contact(ContactArgs),
    /// List subscription tiers.
    Tiers,
    /// Admin dashboard (admin role required).
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },
}

/// Arguments for `freebird subscribe`.
#[derive(Clone, Debug, Args)]
pub struct SubscribeArgs {
    pub email: String,
}

/// Arguments for `freebird contact`.
#[derive(Clone, Debug, Args)]
pub struct ContactArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub subject: String,
    #[arg(long)]
    pub message: String,
}
