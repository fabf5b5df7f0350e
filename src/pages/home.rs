//! Landing page: store overview plus the most recent papers.

use async_trait::async_trait;

use super::{Page, PageContext};
use crate::api::ApiError;
use crate::models::ListQuery;
use crate::ui;

/// Number of recent papers shown on the landing page
const RECENT_LIMIT: usize = 5;

#[derive(Debug, Default)]
pub struct HomePage;

impl HomePage {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Page for HomePage {
    fn name(&self) -> &str {
        "home"
    }

    fn title(&self) -> &str {
        "Paper Shelf"
    }

    async fn render(&self, ctx: &PageContext) -> Result<String, ApiError> {
        let stats = ctx.api.stats().await?;
        let recent = ctx
            .api
            .list(&ListQuery::new().limit(RECENT_LIMIT))
            .await?;

        let mut out = String::new();
        out.push_str(&format!(
            "{} papers stored ({:.2} MB)\n\n",
            stats.total_papers, stats.db_size_mb
        ));
        out.push_str(&ui::section("Recent papers"));
        out.push('\n');
        out.push_str(&ui::papers_table(&recent.papers));
        out.push('\n');

        Ok(out)
    }
}
