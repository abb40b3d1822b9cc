// src/wiki.rs

// Page access. The wiki serves rendered article HTML inside a JSON
// envelope; fetching sits behind the PageSource trait so everything
// downstream can run against canned markup.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::Deserialize;

use crate::core::net;
use crate::error::{Result, StatsError};
use crate::params::{API_PREFIX, CHAMPIONS_ARTICLE_ID, HOST, ITEMS_ARTICLE_ID};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArticlePage {
    Champions,
    Items,
}

impl ArticlePage {
    pub fn article_id(self) -> u32 {
        match self {
            ArticlePage::Champions => CHAMPIONS_ARTICLE_ID,
            ArticlePage::Items => ITEMS_ARTICLE_ID,
        }
    }

    pub fn url(self) -> String {
        format!("http://{}{}{}", HOST, API_PREFIX, self.article_id())
    }
}

/// Where page markup comes from. Production fetches over the wire;
/// tests substitute fixtures.
pub trait PageSource {
    fn markup(&self, page: ArticlePage) -> Result<String>;
}

// Article endpoint envelope; `content` holds the page HTML. Other
// envelope fields are irrelevant here.
#[derive(Deserialize)]
struct ArticleEnvelope {
    content: String,
}

/// Live fetch through the article-as-JSON API.
pub struct WikiSource;

impl PageSource for WikiSource {
    fn markup(&self, page: ArticlePage) -> Result<String> {
        let body = net::http_get(&page.article_id().to_string())?;
        let envelope: ArticleEnvelope =
            serde_json::from_str(&body).map_err(|e| StatsError::Fetch {
                url: page.url(),
                reason: format!("bad article envelope: {e}"),
            })?;
        logf!("wiki: fetched {:?}, {} bytes of markup", page, envelope.content.len());
        Ok(envelope.content)
    }
}

/// Memoizes page markup for the life of the process. Strictly
/// optional; nothing downstream assumes it is there.
pub struct CachedSource<S: PageSource> {
    inner: S,
    pages: RefCell<HashMap<ArticlePage, String>>,
}

impl<S: PageSource> CachedSource<S> {
    pub fn new(inner: S) -> Self {
        Self { inner, pages: RefCell::new(HashMap::new()) }
    }
}

impl<S: PageSource> PageSource for CachedSource<S> {
    fn markup(&self, page: ArticlePage) -> Result<String> {
        if let Some(doc) = self.pages.borrow().get(&page) {
            return Ok(doc.clone());
        }
        let doc = self.inner.markup(page)?;
        self.pages.borrow_mut().insert(page, doc.clone());
        Ok(doc)
    }
}
