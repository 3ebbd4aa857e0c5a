use fb_core::enums::ProjectSort;
use fb_db::ProjectFilter;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectListArgs;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub fn run(args: &ProjectListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let filter = build_filter(args)?;
    output(&ctx.content.list_projects(&filter), flags.format)
}

fn build_filter(args: &ProjectListArgs) -> anyhow::Result<ProjectFilter> {
    let sort = args
        .sort
        .as_deref()
        .map(|raw| parse_enum::<ProjectSort>(raw, "sort"))
        .transpose()?
        .unwrap_or_default();

    Ok(ProjectFilter {
        category: args.category.clone(),
        search: args.search.clone(),
        sort,
        page: args.page.unwrap_or(1),
        page_size: args.page_size.unwrap_or(0),
    })
}

#[cfg(test)]
mod tests {
    use fb_core::enums::ProjectSort;
    use pretty_assertions::assert_eq;

    use super::build_filter;
    use crate::cli::subcommands::ProjectListArgs;

    fn args() -> ProjectListArgs {
        ProjectListArgs {
            category: None,
            search: None,
            sort: None,
            page: None,
            page_size: None,
        }
    }

    #[test]
    fn defaults_to_first_page_newest_first() {
        let filter = build_filter(&args()).expect("filter should build");
        assert_eq!(filter.sort, ProjectSort::Newest);
        assert_eq!(filter.page, 1);
        assert_eq!(filter.page_size, 0);
    }

    #[test]
    fn rejects_unknown_sort() {
        let err = build_filter(&ProjectListArgs {
            sort: Some("popular".into()),
            ..args()
        })
        .expect_err("sort should fail");
        assert!(err.to_string().contains("invalid sort 'popular'"));
    }
}
