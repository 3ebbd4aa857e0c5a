mod admin;
mod article;
mod auth;
mod project;

pub use admin::AdminCommands;
pub use article::{ArticleCommands, ArticleListArgs};
pub use auth::{AuthCommands, AuthLoginArgs, AuthRegisterArgs, AuthUpdateArgs};
pub use project::{ProjectCommands, ProjectListArgs};
