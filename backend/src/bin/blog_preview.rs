//! Preview one blog page from the command line.
//!
//! The binary loads `BLOG_*` settings, activates a single page view against
//! the configured PostgREST store, waits for it to settle, and prints the
//! resulting page state. Logs go to stderr as JSON, filtered by `RUST_LOG`.

use std::ffi::OsString;
use std::sync::Arc;

use blog_backend::BlogSettings;
use blog_backend::domain::{
    CategoryHeader, ContentRepositoryService, LocalizedPathResolver, PageActivation, PageContent,
    PageLifecycleController, PagePresenter, PageQuery, PageState, PostCard, SupportedLocale,
};
use blog_backend::outbound::postgrest::PostgrestContentStore;
use clap::{Parser, Subcommand};
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tokio::runtime::Builder;
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug, Parser)]
#[command(name = "blog-preview", about = "Render one blog page as text")]
struct Cli {
    /// Locale to render in; defaults to the configured default locale.
    #[arg(long)]
    locale: Option<String>,
    #[command(subcommand)]
    page: PageCommand,
}

#[derive(Debug, Subcommand)]
enum PageCommand {
    /// The blog index.
    Posts,
    /// Posts of one category.
    Topic { slug: String },
    /// A single post.
    Post { slug: String },
}

impl From<PageCommand> for PageQuery {
    fn from(command: PageCommand) -> Self {
        match command {
            PageCommand::Posts => Self::AllPosts,
            PageCommand::Topic { slug } => Self::Category { slug },
            PageCommand::Post { slug } => Self::Post { slug },
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();
    let settings = BlogSettings::load_from_iter([OsString::from("blog-preview")])
        .map_err(|error| eyre!("failed to load blog settings: {error}"))?;
    let state = preview(&settings, cli)?;
    println!("{}", render(&state));
    exit_status(&state)
}

/// Fail the process for an `Error` page; the cause goes to the log only.
fn exit_status(state: &PageState) -> Result<()> {
    match state {
        PageState::Error(page_error) => {
            error!(cause = page_error.cause(), "page failed to load");
            Err(eyre!("{page_error}"))
        }
        _ => Ok(()),
    }
}

fn preview(settings: &BlogSettings, cli: Cli) -> Result<PageState> {
    let base = settings
        .content_url()
        .wrap_err("content store is not configured")?;
    let mut store = PostgrestContentStore::new(base, settings.request_timeout())
        .wrap_err("failed to build content store client")?;
    if let Some(key) = settings.content_api_key() {
        store = store.with_api_key(key);
    }

    let default_locale = settings.default_locale();
    let locale = cli
        .locale
        .as_deref()
        .map_or(default_locale, |raw| SupportedLocale::negotiate(raw).code())
        .to_owned();
    let presenter = PagePresenter::new(LocalizedPathResolver::new(default_locale));
    let repository = ContentRepositoryService::new(Arc::new(store));

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("failed to build preview runtime")?;
    let state = runtime.block_on(async move {
        let controller = PageLifecycleController::new(Arc::new(repository), presenter);
        controller
            .activate(PageActivation::new(cli.page.into(), locale))
            .finished()
            .await;
        controller.state()
    });
    Ok(state)
}

fn render(state: &PageState) -> String {
    match state {
        PageState::Idle | PageState::Loading => "page did not settle".to_owned(),
        PageState::Empty(None) => "nothing published here yet".to_owned(),
        PageState::Empty(Some(category)) => {
            format!("{}\n\nno posts in this topic yet", render_header(category))
        }
        PageState::NotFound => "page not found".to_owned(),
        PageState::Error(error) => error.to_string(),
        PageState::Success(PageContent::PostList { posts }) => render_cards(posts),
        PageState::Success(PageContent::CategoryListing { category, posts }) => {
            format!("{}\n\n{}", render_header(category), render_cards(posts))
        }
        PageState::Success(PageContent::Post(detail)) => {
            let mut lines = vec![
                detail.title.clone(),
                format!("{} · {} min", detail.published_on, detail.reading_minutes),
            ];
            if let Some(badge) = &detail.category {
                lines.push(format!("{} {}  {}", badge.glyph, badge.slug, badge.link));
            }
            if let Some(cover) = &detail.cover_image {
                let caption = detail.image_caption.as_deref().unwrap_or_default();
                lines.push(format!("[{cover}] {caption}"));
            }
            lines.push(String::new());
            lines.push(detail.content.clone());
            lines.push(String::new());
            lines.push(format!("<- {}", detail.blog_link));
            lines.join("\n")
        }
    }
}

fn render_header(category: &CategoryHeader) -> String {
    format!(
        "{} {} ({} posts)  {}\n<- {}",
        category.icon.glyph(),
        category.slug,
        category.post_count,
        category.link,
        category.blog_link
    )
}

fn render_cards(posts: &[PostCard]) -> String {
    posts
        .iter()
        .map(|card| {
            let badge = card
                .category
                .as_ref()
                .map(|badge| format!("{} {} · ", badge.glyph, badge.slug))
                .unwrap_or_default();
            format!(
                "{}  {}\n  {badge}{} · {} min\n  {}\n",
                card.title, card.link, card.published_on, card.reading_minutes, card.excerpt
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_backend::domain::{CategoryIcon, PageError};
    use rstest::rstest;

    #[rstest]
    #[case(&["blog-preview", "posts"], PageQuery::AllPosts, None)]
    #[case(
        &["blog-preview", "--locale", "en-US", "topic", "rust"],
        PageQuery::Category { slug: "rust".to_owned() },
        Some("en-US")
    )]
    #[case(
        &["blog-preview", "post", "hello"],
        PageQuery::Post { slug: "hello".to_owned() },
        None
    )]
    fn parses_page_commands(
        #[case] args: &[&str],
        #[case] expected: PageQuery,
        #[case] locale: Option<&str>,
    ) {
        let cli = Cli::try_parse_from(args).expect("arguments parse");
        assert_eq!(cli.locale.as_deref(), locale);
        assert_eq!(PageQuery::from(cli.page), expected);
    }

    #[test]
    fn missing_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["blog-preview"]).is_err());
    }

    #[rstest]
    #[case(PageState::Empty(None), "nothing published here yet")]
    #[case(PageState::NotFound, "page not found")]
    #[case(
        PageState::Error(PageError::new("connection refused")),
        "content could not be loaded, please try again later"
    )]
    fn renders_terminal_states_without_content(#[case] state: PageState, #[case] text: &str) {
        assert_eq!(render(&state), text);
    }

    #[test]
    fn error_output_never_shows_the_cause() {
        let state = PageState::Error(PageError::new("connection refused by 10.0.0.7"));
        assert!(!render(&state).contains("10.0.0.7"));

        let report = exit_status(&state).expect_err("error pages fail the process");
        assert_eq!(
            format!("{report:#}"),
            "content could not be loaded, please try again later"
        );
    }

    #[rstest]
    #[case(PageState::NotFound)]
    #[case(PageState::Empty(None))]
    fn settled_pages_other_than_errors_exit_cleanly(#[case] state: PageState) {
        assert!(exit_status(&state).is_ok());
    }

    #[test]
    fn empty_category_still_renders_its_heading() {
        let header = CategoryHeader {
            slug: "quiet".to_owned(),
            icon: CategoryIcon::Code,
            post_count: 0,
            link: "/blog/topic/quiet".to_owned(),
            blog_link: "/blog".to_owned(),
        };

        let text = render(&PageState::Empty(Some(header)));

        assert!(text.contains("quiet (0 posts)  /blog/topic/quiet"));
        assert!(text.contains("<- /blog"));
        assert!(text.ends_with("no posts in this topic yet"));
    }
}
