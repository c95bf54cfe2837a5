//! In-memory storage of the mock API

use contracts::domain::a001_category::{CategoryNode, CategoryTree};
use contracts::domain::a002_product::Product;
use contracts::domain::a003_order::RawOrder;
use contracts::domain::a004_customer::Customer;
use contracts::domain::a005_coupon::Coupon;
use contracts::domain::a007_subscription::SubscriptionPlan;
use contracts::shared::{PageQuery, Pagination};
use contracts::system::auth::{UserRecord, VendorRecord};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Login account: public user record plus credentials
#[derive(Debug, Clone)]
pub struct Account {
    pub user: UserRecord,
    pub vendor: Option<VendorRecord>,
    pub password: String,
}

/// Uploaded image bytes
#[derive(Debug, Clone)]
pub struct Upload {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Default)]
pub struct Store {
    pub accounts: Vec<Account>,
    /// access token -> user id
    pub sessions: HashMap<String, String>,
    /// email -> pending OTP
    pub otps: HashMap<String, String>,
    /// emails that passed OTP verification and may reset the password
    pub verified: HashSet<String>,
    pub categories: Vec<CategoryNode>,
    pub products: Vec<Product>,
    pub orders: Vec<RawOrder>,
    pub customers: Vec<Customer>,
    pub coupons: Vec<Coupon>,
    pub plans: Vec<SubscriptionPlan>,
    /// file name -> bytes, served under `/uploads/:name`
    pub uploads: HashMap<String, Upload>,
}

impl Store {
    pub fn category_tree(&self) -> CategoryTree {
        CategoryTree::new(self.categories.clone())
    }

    pub fn account_by_email(&self, email: &str) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|a| a.user.email.eq_ignore_ascii_case(email.trim()))
    }

    pub fn account_by_email_mut(&mut self, email: &str) -> Option<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|a| a.user.email.eq_ignore_ascii_case(email.trim()))
    }

    pub fn account_by_token_mut(&mut self, token: &str) -> Option<&mut Account> {
        let user_id = self.sessions.get(token)?.clone();
        self.accounts.iter_mut().find(|a| a.user.id == user_id)
    }

    pub fn product_index(&self, id: &str) -> Option<usize> {
        self.products.iter().position(|p| p.id == id)
    }
}

#[derive(Clone, Default)]
pub struct AppState {
    pub store: Arc<RwLock<Store>>,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

/// One page of `items` (1-based page)
pub fn page_of<T: Clone>(items: &[T], query: PageQuery) -> (Vec<T>, Pagination) {
    let query = PageQuery::new(query.page.max(1), query.limit.max(1));
    let page: Vec<T> = items
        .iter()
        .skip(query.offset())
        .take(query.limit)
        .cloned()
        .collect();
    (page, Pagination::new(query.page, query.limit, items.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_are_one_based() {
        let items: Vec<u32> = (1..=25).collect();
        let (page, p) = page_of(&items, PageQuery::new(3, 10));
        assert_eq!(page, vec![21, 22, 23, 24, 25]);
        assert_eq!(p.total_pages, 3);
        assert_eq!(p.total, 25);

        let (page, p) = page_of(&items, PageQuery::new(0, 0));
        assert_eq!(page, vec![1]);
        assert_eq!(p.page, 1);

        let (page, _) = page_of(&items, PageQuery::new(9, 10));
        assert!(page.is_empty());
    }
}
