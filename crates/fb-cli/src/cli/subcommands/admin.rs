use clap::Subcommand;

/// Admin commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AdminCommands {
    /// Site counters.
    Stats,
    /// All user accounts.
    Users,
    /// Contact messages, oldest first.
    Messages {
        /// Only unread messages.
        #[arg(long)]
        unread: bool,
    },
    /// Mark a message as read.
    Read { id: String },
    /// Override a user's subscription tier.
    SetTier { user_id: String, tier: String },
    /// Delete a project for this run.
    DeleteProject { id: String },
    /// Delete an article for this run.
    DeleteArticle { id: String },
    /// Newsletter subscribers.
    Subscribers,
}
