use anyhow::Context;
use clap::Args;
use courier_config::Config;
use courier_core_pagination_contracts::PaginationService;
use courier_core_pagination_impl::PaginationServiceImpl;
use courier_models::pagination::{NavigationOption, NavigationRequest, PageSize};
use tracing::warn;

#[derive(Debug, Args)]
pub struct PaginateCommand {
    /// Total number of items in the list
    total_items: u64,
    /// Number of items per page [default: pagination.default_page_size]
    #[arg(short = 's', long)]
    page_size: Option<u64>,
    /// The current page, starting at 1
    #[arg(short, long, default_value = "1")]
    page: u64,
    /// Pages shown on each side of the current page [default: pagination.sibling_limit]
    #[arg(short, long)]
    limit: Option<u64>,
    /// Print the navigation options as JSON
    #[arg(long)]
    json: bool,
}

impl PaginateCommand {
    pub fn invoke(self, config: &Config) -> anyhow::Result<()> {
        let page_size = match self.page_size {
            Some(page_size) => PageSize::try_new(page_size).context("Invalid page size")?,
            None => config.pagination.default_page_size,
        };
        if !config.pagination.page_size_options.contains(&page_size) {
            warn!(%page_size, "page size is not one of the configured options");
        }

        let request = NavigationRequest::new(self.total_items, page_size, self.page)
            .with_limit(self.limit.unwrap_or(config.pagination.sibling_limit));

        println!("{}", paginate(&PaginationServiceImpl, request, self.json)?);

        Ok(())
    }
}

fn paginate(
    pagination: &impl PaginationService,
    request: NavigationRequest,
    json: bool,
) -> anyhow::Result<String> {
    let options = pagination.navigation_options(request);
    if json {
        return serde_json::to_string_pretty(&options).context("Failed to serialize options");
    }

    let range = pagination.page_range(request.total_items, request.page_size, request.current_page);
    Ok(format!("{}\n{range}", render(&options, request.current_page)))
}

fn render(options: &[NavigationOption], current_page: u64) -> String {
    options
        .iter()
        .map(|option| match *option {
            NavigationOption::PreviousPage(_) => "‹".to_owned(),
            NavigationOption::NextPage(_) => "›".to_owned(),
            NavigationOption::Ellipsis(_) => "…".to_owned(),
            NavigationOption::Number(page) if page == current_page => format!("[{page}]"),
            NavigationOption::Number(page) => page.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
