use contracts::domain::a001_category::{CategoryListData, CategoryTree};
use contracts::shared::PageQuery;

use crate::shared::api_utils::with_query;
use crate::shared::http;

/// Whole tree fits one page
pub const TREE_PAGE_LIMIT: usize = 50;

pub async fn fetch_tree() -> Result<CategoryTree, String> {
    let path = with_query("/category", &PageQuery::new(1, TREE_PAGE_LIMIT));
    http::get_json::<CategoryListData>(&path)
        .await
        .map(|data| CategoryTree::new(data.categories))
        .map_err(|e| e.message_or("Failed to fetch categories"))
}
