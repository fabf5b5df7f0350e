//! Store statistics page.

use async_trait::async_trait;

use super::{Page, PageContext};
use crate::api::ApiError;
use crate::ui;

#[derive(Debug, Default)]
pub struct StatsPage;

impl StatsPage {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Page for StatsPage {
    fn name(&self) -> &str {
        "stats"
    }

    fn title(&self) -> &str {
        "Statistics"
    }

    async fn render(&self, ctx: &PageContext) -> Result<String, ApiError> {
        let stats = ctx.api.stats().await?;
        Ok(ui::stats_view(&stats))
    }
}
