//! Single paper detail page.

use async_trait::async_trait;

use super::{Page, PageContext};
use crate::api::ApiError;
use crate::ui;

#[derive(Debug, Default)]
pub struct PaperDetailPage;

impl PaperDetailPage {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Page for PaperDetailPage {
    fn name(&self) -> &str {
        "paper-detail"
    }

    fn title(&self) -> &str {
        "Paper"
    }

    async fn render(&self, ctx: &PageContext) -> Result<String, ApiError> {
        let unique_key = ctx
            .param("id")
            .ok_or_else(|| ApiError::NotFound("route carried no paper id".to_string()))?;

        let paper = ctx.api.get(unique_key).await?;
        Ok(ui::paper_detail(&paper))
    }
}
