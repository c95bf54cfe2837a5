pub mod aggregate;
pub mod filter;
pub mod selector;

pub use aggregate::{
    CategoryListData, CategoryNode, CategoryTree, ChainNames, ChildCategoryNode, SubCategoryNode,
};
pub use filter::{CategoryFilter, FilterableItem, ALL};
pub use selector::{main_options, CategoryOption, CategorySelector, Selection};
