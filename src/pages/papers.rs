//! Paper listing page.

use async_trait::async_trait;

use super::{Page, PageContext};
use crate::api::ApiError;
use crate::models::ListQuery;
use crate::ui;

#[derive(Debug, Default)]
pub struct PapersPage;

impl PapersPage {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Page for PapersPage {
    fn name(&self) -> &str {
        "papers"
    }

    fn title(&self) -> &str {
        "Papers"
    }

    async fn render(&self, ctx: &PageContext) -> Result<String, ApiError> {
        let response = ctx.api.list(&ListQuery::new()).await?;

        let mut out = String::new();
        out.push_str(&ui::papers_table(&response.papers));
        out.push_str(&format!(
            "\nShowing {} of {} papers (offset {})\n",
            response.papers.len(),
            response.total,
            response.offset
        ));

        Ok(out)
    }
}
