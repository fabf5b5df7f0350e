//! Paper model matching the wire format of the paper service.

use serde::{Deserialize, Serialize};

/// A stored paper version as the server serializes it.
///
/// The client never creates or mutates papers on its own; instances either
/// come back from the server or are read from a batch-save input file. All
/// fields are transported as-is; in particular `published`/`updated` stay
/// the server's timestamp strings and are not parsed locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paper {
    /// arXiv identifier without the version suffix (e.g. "2401.12345")
    pub arxiv_id: String,

    /// Version tag (e.g. "v1")
    #[serde(default = "default_version")]
    pub version: String,

    /// Server-assigned key distinguishing a paper version
    /// (`arxiv_id` + `version`). Absent in batch-save input files.
    #[serde(default)]
    pub unique_key: String,

    /// Paper title
    pub title: String,

    /// Authors in publication order
    pub authors: Vec<String>,

    /// Abstract text
    #[serde(default)]
    pub r#abstract: String,

    /// arXiv categories (e.g. "cs.LG")
    pub categories: Vec<String>,

    /// Publication timestamp as sent by the server
    #[serde(default)]
    pub published: Option<String>,

    /// Last-update timestamp as sent by the server
    #[serde(default)]
    pub updated: Option<String>,

    /// Direct PDF URL
    #[serde(default)]
    pub pdf_url: String,

    /// Abstract page URL
    #[serde(default)]
    pub source_url: String,

    /// Derived keywords, when the server has computed them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,

    /// Derived summary, when the server has computed one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

fn default_version() -> String {
    "v1".to_string()
}

impl Paper {
    /// Returns the key identifying this paper version, falling back to
    /// `arxiv_id + version` when the server-assigned key is absent
    /// (batch-save input files omit it).
    pub fn key(&self) -> String {
        if self.unique_key.is_empty() {
            format!("{}{}", self.arxiv_id, self.version)
        } else {
            self.unique_key.clone()
        }
    }

    /// Returns the authors as a single comma-separated line
    pub fn author_line(&self) -> String {
        self.authors.join(", ")
    }

    /// Returns the categories as a single space-separated line
    pub fn category_line(&self) -> String {
        self.categories.join(" ")
    }

    /// Check if the server has attached derived fields (keywords or summary)
    pub fn has_derived_fields(&self) -> bool {
        self.keywords.is_some() || self.summary.is_some()
    }
}

/// Builder for constructing Paper objects (batch-save inputs, tests)
#[derive(Debug, Clone)]
pub struct PaperBuilder {
    paper: Paper,
}

impl PaperBuilder {
    /// Create a new builder with the required fields
    pub fn new(
        arxiv_id: impl Into<String>,
        version: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        let arxiv_id = arxiv_id.into();
        let version = version.into();
        let unique_key = format!("{}{}", arxiv_id, version);
        Self {
            paper: Paper {
                arxiv_id,
                version,
                unique_key,
                title: title.into(),
                authors: Vec::new(),
                r#abstract: String::new(),
                categories: Vec::new(),
                published: None,
                updated: None,
                pdf_url: String::new(),
                source_url: String::new(),
                keywords: None,
                summary: None,
            },
        }
    }

    /// Set authors
    pub fn authors(mut self, authors: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.paper.authors = authors.into_iter().map(Into::into).collect();
        self
    }

    /// Set abstract
    pub fn abstract_text(mut self, abstract_text: impl Into<String>) -> Self {
        self.paper.r#abstract = abstract_text.into();
        self
    }

    /// Set categories
    pub fn categories(mut self, categories: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.paper.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Set publication timestamp
    pub fn published(mut self, published: impl Into<String>) -> Self {
        self.paper.published = Some(published.into());
        self
    }

    /// Set last-update timestamp
    pub fn updated(mut self, updated: impl Into<String>) -> Self {
        self.paper.updated = Some(updated.into());
        self
    }

    /// Set PDF URL
    pub fn pdf_url(mut self, url: impl Into<String>) -> Self {
        self.paper.pdf_url = url.into();
        self
    }

    /// Set abstract page URL
    pub fn source_url(mut self, url: impl Into<String>) -> Self {
        self.paper.source_url = url.into();
        self
    }

    /// Set derived keywords
    pub fn keywords(mut self, keywords: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.paper.keywords = Some(keywords.into_iter().map(Into::into).collect());
        self
    }

    /// Set derived summary
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.paper.summary = Some(summary.into());
        self
    }

    /// Build the Paper
    pub fn build(self) -> Paper {
        self.paper
    }
}
