//! Page lifecycle controller.
//!
//! Each page view owns one controller. Activating it with a query moves the
//! page to `Loading`, issues exactly one repository call on a spawned task,
//! and settles in a terminal state once that call resolves:
//!
//! ```text
//! Idle -> Loading -> { Success, Empty, NotFound, Error }
//! ```
//!
//! Re-activation and teardown bump a generation counter. A task publishes
//! its result only while its generation is still current, so a slow response
//! for a previous route can never overwrite the page the reader is looking at.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::domain::ports::{ContentRepository, ContentRepositoryError};
use crate::domain::{BLOG_INDEX_PATH, LocaleCode, category_path, post_path};

mod views;

pub use views::{CategoryBadge, CategoryHeader, PagePresenter, PostCard, PostDetail};

/// Which page to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageQuery {
    /// The blog index.
    AllPosts,
    /// Posts of one category.
    Category {
        /// Category slug from the route.
        slug: String,
    },
    /// One post.
    Post {
        /// Post slug from the route.
        slug: String,
    },
}

impl PageQuery {
    /// Canonical, locale-free route of the page.
    ///
    /// # Examples
    /// ```
    /// use blog_backend::domain::PageQuery;
    ///
    /// let query = PageQuery::Category { slug: "rust".to_owned() };
    /// assert_eq!(query.canonical_path(), "blog/topic/rust");
    /// ```
    pub fn canonical_path(&self) -> String {
        match self {
            Self::AllPosts => BLOG_INDEX_PATH.to_owned(),
            Self::Category { slug } => category_path(slug),
            Self::Post { slug } => post_path(slug),
        }
    }
}

/// Query plus the locale the page is rendered in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageActivation {
    /// Page to load.
    pub query: PageQuery,
    /// Locale used for dates and links.
    pub locale: LocaleCode,
}

impl PageActivation {
    /// Build an activation for `query` in `locale`.
    pub fn new(query: PageQuery, locale: impl Into<LocaleCode>) -> Self {
        Self {
            query,
            locale: locale.into(),
        }
    }
}

/// Loaded content, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageContent {
    /// Blog index.
    PostList {
        /// Newest first.
        posts: Vec<PostCard>,
    },
    /// Category page.
    CategoryListing {
        /// Heading of the page.
        category: CategoryHeader,
        /// Newest first.
        posts: Vec<PostCard>,
    },
    /// Single post page.
    Post(PostDetail),
}

impl PageContent {
    /// True when a listing has nothing to show.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::PostList { posts } | Self::CategoryListing { posts, .. } => posts.is_empty(),
            Self::Post(_) => false,
        }
    }
}

impl From<PageContent> for PageState {
    /// Settle loaded content; listings without posts become `Empty`.
    fn from(content: PageContent) -> Self {
        match content {
            PageContent::PostList { posts } if posts.is_empty() => Self::Empty(None),
            PageContent::CategoryListing { category, posts } if posts.is_empty() => {
                Self::Empty(Some(category))
            }
            content => Self::Success(content),
        }
    }
}

/// Failure shown to the reader.
///
/// `Display` stays generic; the underlying cause is kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("content could not be loaded, please try again later")]
pub struct PageError {
    cause: String,
}

impl PageError {
    /// Wrap a diagnostic cause.
    pub fn new(cause: impl Into<String>) -> Self {
        Self {
            cause: cause.into(),
        }
    }

    /// Diagnostic cause, not meant for readers.
    pub fn cause(&self) -> &str {
        &self.cause
    }
}

/// Observable state of one page view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PageState {
    /// Not activated, or torn down.
    #[default]
    Idle,
    /// A repository call is in flight.
    Loading,
    /// Content loaded.
    Success(PageContent),
    /// A listing loaded with no posts.
    ///
    /// Category pages keep their heading so the page still shows the topic,
    /// its zero count and the way back to the blog index.
    Empty(Option<CategoryHeader>),
    /// The requested slug does not exist.
    NotFound,
    /// The repository failed.
    Error(PageError),
}

impl PageState {
    /// True once an activation has settled.
    pub const fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Success(_) | Self::Empty(_) | Self::NotFound | Self::Error(_)
        )
    }
}

/// Whether an activation's result reached the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationOutcome {
    /// The result became the page state.
    Applied,
    /// The activation was superseded or torn down first.
    Discarded,
}

struct Shared {
    generation: AtomicU64,
    state: watch::Sender<PageState>,
}

impl Shared {
    fn current(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Invalidate in-flight work and publish `state`; returns the new
    /// generation.
    fn advance(&self, state: PageState) -> u64 {
        let mut generation = 0;
        self.state.send_modify(|current| {
            generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *current = state;
        });
        generation
    }

    /// Publish `state` only if `generation` is still current.
    fn apply(&self, generation: u64, state: PageState) -> ActivationOutcome {
        // Checked under the channel lock so `advance` cannot interleave.
        let applied = self.state.send_if_modified(|current| {
            if self.current() != generation {
                return false;
            }
            *current = state;
            true
        });
        if applied {
            ActivationOutcome::Applied
        } else {
            ActivationOutcome::Discarded
        }
    }
}

/// Handle to one activation.
pub struct ActivationHandle {
    generation: u64,
    shared: Arc<Shared>,
    task: JoinHandle<ActivationOutcome>,
}

impl ActivationHandle {
    /// Generation assigned to this activation.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// True while no newer activation or teardown has happened.
    pub fn is_current(&self) -> bool {
        self.shared.current() == self.generation
    }

    /// Wait for the repository call and report whether its result was used.
    pub async fn finished(self) -> ActivationOutcome {
        match self.task.await {
            Ok(outcome) => outcome,
            Err(join_error) => {
                error!(
                    generation = self.generation,
                    error = %join_error,
                    "page activation task failed"
                );
                self.shared.apply(
                    self.generation,
                    PageState::Error(PageError::new(join_error.to_string())),
                )
            }
        }
    }
}

/// Drives one page view through its lifecycle.
pub struct PageLifecycleController {
    repository: Arc<dyn ContentRepository>,
    presenter: Arc<PagePresenter>,
    shared: Arc<Shared>,
}

impl PageLifecycleController {
    /// Create an idle controller.
    pub fn new(repository: Arc<dyn ContentRepository>, presenter: PagePresenter) -> Self {
        let (state, _) = watch::channel(PageState::Idle);
        Self {
            repository,
            presenter: Arc::new(presenter),
            shared: Arc::new(Shared {
                generation: AtomicU64::new(0),
                state,
            }),
        }
    }

    /// Start loading a page, superseding any activation still in flight.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn activate(&self, activation: PageActivation) -> ActivationHandle {
        let generation = self.shared.advance(PageState::Loading);
        debug!(
            generation,
            path = %activation.query.canonical_path(),
            locale = %activation.locale,
            "activating page"
        );

        let repository = Arc::clone(&self.repository);
        let presenter = Arc::clone(&self.presenter);
        let shared = Arc::clone(&self.shared);
        let task = tokio::spawn(async move {
            let state = load(repository.as_ref(), &presenter, &activation).await;
            let outcome = shared.apply(generation, state);
            if outcome == ActivationOutcome::Discarded {
                debug!(generation, "discarding stale page result");
            }
            outcome
        });

        ActivationHandle {
            generation,
            shared: Arc::clone(&self.shared),
            task,
        }
    }

    /// Invalidate any in-flight activation and return to `Idle`.
    pub fn teardown(&self) {
        let generation = self.shared.advance(PageState::Idle);
        debug!(generation, "page torn down");
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> PageState {
        self.shared.state.borrow().clone()
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<PageState> {
        self.shared.state.subscribe()
    }
}

impl Drop for PageLifecycleController {
    fn drop(&mut self) {
        self.shared.generation.fetch_add(1, Ordering::SeqCst);
    }
}

async fn load(
    repository: &dyn ContentRepository,
    presenter: &PagePresenter,
    activation: &PageActivation,
) -> PageState {
    let locale = activation.locale.as_str();
    let result = match &activation.query {
        PageQuery::AllPosts => repository.list_posts().await.map(|posts| {
            PageContent::PostList {
                posts: presenter.post_cards(&posts, locale),
            }
        }),
        PageQuery::Category { slug } => {
            repository.get_category_listing(slug).await.map(|listing| {
                let (category, posts) = presenter.category_listing(&listing, locale);
                PageContent::CategoryListing { category, posts }
            })
        }
        PageQuery::Post { slug } => repository
            .get_post_by_slug(slug)
            .await
            .map(|post| PageContent::Post(presenter.post_detail(&post, locale))),
    };

    match result {
        Ok(content) => content.into(),
        Err(ContentRepositoryError::NotFound { entity, slug }) => {
            debug!(%entity, slug = %slug, "page content not found");
            PageState::NotFound
        }
        Err(error) => {
            error!(
                error = %error,
                path = %activation.query.canonical_path(),
                locale,
                "failed to load page content"
            );
            PageState::Error(PageError::new(error.to_string()))
        }
    }
}
