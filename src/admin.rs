//! The admin page, bound to the API entrypoint once the admin
//! interface has been loaded.

use std::fmt;
use std::future::Future;

use crate::entrypoint::{resolve_entrypoint, EntrypointConfig, ExecutionContext};
use crate::{error::Error, Result};

/// Title of the admin page.
pub const ADMIN_TITLE: &str = "API Platform Admin";

/// What the admin page shows.
#[derive(Debug)]
pub enum AdminView<P> {
    /// The admin interface is being loaded.
    Loading,
    /// The loaded admin interface.
    Ready(P),
    /// The admin interface couldn't be loaded.
    Failed(Error),
}

impl<P> AdminView<P> {
    /// Returns true while the page is loading.
    pub fn is_loading(&self) -> bool {
        matches!(self, AdminView::Loading)
    }
}

impl<P: fmt::Display> fmt::Display for AdminView<P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AdminView::Loading => write!(f, "Loading..."),
            AdminView::Ready(panel) => write!(f, "{}", panel),
            AdminView::Failed(e) => write!(f, "{}", e),
        }
    }
}

/// The admin page.
///
/// The admin interface is loaded once, on the first mount. Later mounts
/// leave the page as it is.
pub struct AdminPage<P> {
    view: AdminView<P>,
    mounted: bool,
}

impl<P> AdminPage<P> {
    /// Creates a page showing the loading placeholder.
    pub fn new() -> Self {
        AdminPage {
            view: AdminView::Loading,
            mounted: false,
        }
    }

    /// Returns the title of the page.
    #[inline]
    pub fn title(&self) -> &'static str {
        ADMIN_TITLE
    }

    /// Returns what the page shows.
    #[inline]
    pub fn view(&self) -> &AdminView<P> {
        &self.view
    }

    /// Performs the conversion into what the page shows.
    pub fn into_view(self) -> AdminView<P> {
        self.view
    }

    /// Resolves the entrypoint and loads the admin interface bound to it.
    ///
    /// The `loader` gets the entrypoint and is awaited once. A failure
    /// is kept in the view as `AdminView::Failed`.
    pub async fn mount<F, Fut>(
        &mut self,
        context: &ExecutionContext,
        config: &EntrypointConfig,
        loader: F,
    ) -> &AdminView<P>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<P>>,
    {
        if self.mounted {
            debug!("admin page is already mounted");
            return &self.view;
        }
        self.mounted = true;

        let entrypoint = resolve_entrypoint(context, config);
        debug!("loading admin for {}", entrypoint);

        self.view = match loader(entrypoint).await {
            Ok(panel) => {
                info!("admin loaded");
                AdminView::Ready(panel)
            }
            Err(e) => {
                error!("admin loading failed: {}", e);
                match e {
                    Error::AdminLoadError(_) => AdminView::Failed(e),
                    other => AdminView::Failed(Error::AdminLoadError(other.to_string())),
                }
            }
        };

        &self.view
    }
}

impl<P> Default for AdminPage<P> {
    fn default() -> Self {
        AdminPage::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{AdminPage, AdminView};
    use crate::entrypoint::{EntrypointConfig, ExecutionContext};
    use crate::error::Error;

    #[tokio::test]
    async fn mount_test() {
        let mut page = AdminPage::<String>::new();
        assert!(page.view().is_loading());
        assert_eq!(page.title(), "API Platform Admin");

        let context = ExecutionContext::browser("https://example.com/admin").unwrap();
        page.mount(&context, &EntrypointConfig::default(), |entrypoint| async move {
            Ok(format!("HydraAdmin {}", entrypoint))
        })
        .await;

        match page.view() {
            AdminView::Ready(panel) => assert_eq!(panel, "HydraAdmin https://example.com/api"),
            v => panic!("unexpected view: {:?}", v),
        }
    }

    #[tokio::test]
    async fn mount_failed_test() {
        let mut page = AdminPage::<String>::new();

        page.mount(&ExecutionContext::Server, &EntrypointConfig::default(), |_| async {
            Err(Error::InvalidLocation("/api".to_string()))
        })
        .await;

        match page.view() {
            AdminView::Failed(Error::AdminLoadError(_)) => {}
            v => panic!("unexpected view: {:?}", v),
        }
        assert_eq!(page.view().to_string(), "failed to load the admin interface");
    }

    #[tokio::test]
    async fn mount_once_test() {
        let mut page = AdminPage::<u32>::new();
        let config = EntrypointConfig::new("https://example.com");

        page.mount(&ExecutionContext::Server, &config, |_| async { Ok(1) })
            .await;
        page.mount(&ExecutionContext::Server, &config, |_| async { Ok(2) })
            .await;

        match page.into_view() {
            AdminView::Ready(n) => assert_eq!(n, 1),
            v => panic!("unexpected view: {:?}", v),
        }
    }
}
