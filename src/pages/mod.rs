//! Page views served by the router.
//!
//! Each navigable path resolves to one [`Page`] implementation. A page
//! loads its data through the shared [`PaperApi`] client and renders a
//! terminal text view; it never swallows a failed fetch.

mod home;
mod paper_detail;
mod papers;
mod stats;

pub use home::HomePage;
pub use paper_detail::PaperDetailPage;
pub use papers::PapersPage;
pub use stats::StatsPage;

use std::collections::HashMap;

use async_trait::async_trait;

use crate::api::{ApiError, PaperApi};

/// Everything a page needs to render: the shared client and the
/// parameters bound by the matched route.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub api: PaperApi,
    pub params: HashMap<String, String>,
}

impl PageContext {
    /// Context for a parameterless route
    pub fn new(api: PaperApi) -> Self {
        Self {
            api,
            params: HashMap::new(),
        }
    }

    /// Context carrying route parameters
    pub fn with_params(api: PaperApi, params: HashMap<String, String>) -> Self {
        Self { api, params }
    }

    /// Look up a route parameter by name
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// A page-level view behind a route.
#[async_trait]
pub trait Page: Send + Sync {
    /// Route name this page serves (e.g. "papers")
    fn name(&self) -> &str;

    /// Heading shown above the rendered view
    fn title(&self) -> &str;

    /// Fetch the page's data and render it as terminal text
    async fn render(&self, ctx: &PageContext) -> Result<String, ApiError>;
}
