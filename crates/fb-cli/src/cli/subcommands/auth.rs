use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in with a demo account.
    Login(AuthLoginArgs),
    /// Create an account and log in.
    Register(AuthRegisterArgs),
    /// Clear the stored session.
    Logout,
    /// Show current auth status.
    Status,
    /// Update the signed-in profile.
    Update(AuthUpdateArgs),
    /// Upgrade the signed-in account to a subscription tier.
    Upgrade { tier: String },
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
}

#[derive(Clone, Debug, Args)]
pub struct AuthRegisterArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub avatar: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct AuthUpdateArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub avatar: Option<String>,
    #[arg(long)]
    pub password: Option<String>,
}
