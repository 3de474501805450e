//! Catalog snapshot

use shared::models::{Article, Category, DiningTable};

/// Tables, categories and articles as last fetched from the server
///
/// Stock counts go stale as other terminals sell; refresh after each save.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub tables: Vec<DiningTable>,
    pub categories: Vec<Category>,
    pub articles: Vec<Article>,
}

impl Catalog {
    pub fn new(
        tables: Vec<DiningTable>,
        categories: Vec<Category>,
        articles: Vec<Article>,
    ) -> Self {
        Self {
            tables,
            categories,
            articles,
        }
    }

    pub fn article(&self, id: i64) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }

    /// Table an empty session starts on
    pub fn first_table(&self) -> Option<&DiningTable> {
        self.tables.first()
    }

    /// Menu of one category, in server order
    pub fn articles_in_category(&self, category_id: i64) -> impl Iterator<Item = &Article> {
        self.articles
            .iter()
            .filter(move |a| a.category_id == Some(category_id))
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty() && self.categories.is_empty() && self.articles.is_empty()
    }
}
