use std::sync::Arc;

use gatherly_shared::models::Category;
use tokio::sync::OnceCell;

use crate::query::{form_url_query, remove_keys_from_query};
use crate::repository::CategoryRepository;

/// Sentinel option that clears the category filter.
pub const ALL_CATEGORIES: &str = "All";

const CATEGORY_KEY: &str = "category";

/// The category filter widget: loads the category list once per instance
/// and rewrites the page query string when a selection is made.
///
/// Starts in a loading state. The first call that needs the list resolves
/// it exactly once; a failed fetch transitions to ready with an empty list,
/// leaving only the permanent "All" option.
pub struct CategoryFilter {
    categories: OnceCell<Vec<Category>>,
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryFilter {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self {
            categories: OnceCell::new(),
            repo,
        }
    }

    /// Ready-state category list, fetching on first use.
    pub async fn categories(&self) -> &[Category] {
        self.categories
            .get_or_init(|| async {
                match self.repo.list_categories().await {
                    Ok(categories) => categories,
                    Err(err) => {
                        tracing::warn!(error = %err, "category fetch failed");
                        Vec::new()
                    }
                }
            })
            .await
    }

    /// True until the one-shot fetch has completed.
    pub fn is_loading(&self) -> bool {
        self.categories.get().is_none()
    }

    /// New query string for a selection; "All" clears the filter key.
    pub fn select(&self, current_query: &str, choice: &str) -> String {
        if !choice.is_empty() && choice != ALL_CATEGORIES {
            form_url_query(current_query, CATEGORY_KEY, choice)
        } else {
            remove_keys_from_query(current_query, &[CATEGORY_KEY])
        }
    }
}
