use clap::{Args, Subcommand};

/// Article commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ArticleCommands {
    /// List published articles.
    List(ArticleListArgs),
    /// Read an article by slug. Premium bodies need a paid tier.
    Get { slug: String },
    /// Most recent articles.
    Recent {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// The featured article.
    Featured,
    /// Distinct article tags.
    Tags,
    /// Article counts per category.
    Counts,
}

#[derive(Clone, Debug, Args)]
pub struct ArticleListArgs {
    /// article, tutorial, tip, or all
    #[arg(long)]
    pub category: Option<String>,
    /// Case-insensitive search over title and excerpt.
    #[arg(long)]
    pub search: Option<String>,
    /// Exact tag.
    #[arg(long)]
    pub tag: Option<String>,
    #[arg(long)]
    pub page: Option<usize>,
    #[arg(long)]
    pub page_size: Option<usize>,
}
