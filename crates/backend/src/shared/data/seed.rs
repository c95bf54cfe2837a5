//! Demo data for local development

use super::store::{Account, Store};
use contracts::domain::a001_category::{CategoryNode, ChildCategoryNode, SubCategoryNode};
use contracts::domain::a002_product::{DocRef, GeneralGoods, Product};
use contracts::domain::a003_order::{OrderBuyer, OrderProductDetails, RawOrder};
use contracts::domain::a004_customer::Customer;
use contracts::domain::a005_coupon::{Coupon, DiscountType};
use contracts::domain::a007_subscription::{SubscriptionPlan, UsageLimits};
use contracts::system::auth::{UserRecord, VendorRecord};

pub const DEMO_EMAIL: &str = "vendor@example.com";
pub const DEMO_PASSWORD: &str = "secret1";
pub const DEMO_STORE_ID: &str = "store-1";

fn child(id: &str, name: &str) -> ChildCategoryNode {
    ChildCategoryNode {
        id: id.into(),
        name: name.into(),
        thumbnail: None,
    }
}

fn sub(id: &str, name: &str, children: Vec<ChildCategoryNode>) -> SubCategoryNode {
    SubCategoryNode {
        id: id.into(),
        name: name.into(),
        thumbnail: None,
        child_categories: children,
    }
}

fn main_category(id: &str, name: &str, subs: Vec<SubCategoryNode>) -> CategoryNode {
    CategoryNode {
        id: id.into(),
        name: name.into(),
        image: None,
        sub_categories: subs,
        product_count: 0,
    }
}

/// Main category names match the product type labels
pub fn categories() -> Vec<CategoryNode> {
    vec![
        main_category(
            "cat-goods",
            "General Goods",
            vec![
                sub(
                    "sub-electronics",
                    "Electronics",
                    vec![child("child-phones", "Phones"), child("child-laptops", "Laptops")],
                ),
                sub(
                    "sub-kitchen",
                    "Home & Kitchen",
                    vec![child("child-cutlery", "Cutlery"), child("child-cookware", "Cookware")],
                ),
            ],
        ),
        main_category(
            "cat-vehicles",
            "Vehicles",
            vec![
                sub("sub-cars", "Cars", vec![child("child-sedan", "Sedan"), child("child-suv", "SUV")]),
                sub("sub-bikes", "Motorbikes", vec![child("child-scooters", "Scooters")]),
            ],
        ),
        main_category(
            "cat-services",
            "Services",
            vec![sub(
                "sub-repairs",
                "Repairs",
                vec![child("child-phone-repair", "Phone repair"), child("child-car-repair", "Car repair")],
            )],
        ),
    ]
}

fn populated(id: &str, name: &str) -> Option<DocRef> {
    Some(DocRef::Populated {
        id: id.into(),
        name: Some(name.into()),
    })
}

fn products() -> Vec<Product> {
    vec![
        Product {
            id: "prod-1".into(),
            title: "Pixel 9".into(),
            description: Some("Unlocked, 128 GB".into()),
            main_category: "general goods".into(),
            category: populated("cat-goods", "General Goods"),
            sub_category: populated("sub-electronics", "Electronics"),
            child_category: populated("child-phones", "Phones"),
            price: Some("499".into()),
            discount_price: Some("449".into()),
            tags: vec!["android".into(), "5g".into()],
            general_goods: Some(GeneralGoods {
                stock_quantity: Some("12".into()),
                brand: Some("Google".into()),
                color: vec!["black".into()],
                ..GeneralGoods::default()
            }),
            store: Some(DocRef::Id(DEMO_STORE_ID.into())),
            status: Some("approved".into()),
            is_active: Some(true),
            created_at: Some("2024-05-01T10:00:00.000Z".into()),
            ..Product::default()
        },
        Product {
            id: "prod-2".into(),
            title: "City scooter".into(),
            main_category: "vehicles".into(),
            category: populated("cat-vehicles", "Vehicles"),
            sub_category: populated("sub-bikes", "Motorbikes"),
            child_category: populated("child-scooters", "Scooters"),
            price: Some("1800".into()),
            vehicle_condition: Some("used".into()),
            fuel_type: Some("petrol".into()),
            cc: Some("125".into()),
            store: Some(DocRef::Id(DEMO_STORE_ID.into())),
            status: Some("pending".into()),
            is_active: Some(true),
            created_at: Some("2024-06-12T08:30:00.000Z".into()),
            ..Product::default()
        },
    ]
}

fn order(id: &str, title: Option<&str>, buyer: &str, amount: f64, status: &str, created_at: &str) -> RawOrder {
    RawOrder {
        id: id.into(),
        product_details: Some(OrderProductDetails {
            title: title.map(str::to_string),
        }),
        buyer: Some(OrderBuyer {
            name: Some(buyer.into()),
            email: None,
        }),
        amount,
        order_status: status.into(),
        created_at: Some(created_at.into()),
    }
}

fn orders() -> Vec<RawOrder> {
    vec![
        order("ord-1", Some("Pixel 9"), "Ann Lee", 449.0, "pending", "2024-06-01T09:00:00.000Z"),
        order("ord-2", Some("Pixel 9"), "Bob Stone", 449.0, "completed", "2024-06-03T15:20:00.000Z"),
        order("ord-3", None, "Carla Diaz", 1800.0, "accepted", "2024-06-20T11:45:00.000Z"),
    ]
}

fn customers() -> Vec<Customer> {
    vec![
        Customer {
            id: "cus-1".into(),
            name: "Ann Lee".into(),
            email: "ann@example.com".into(),
            address: "12 Harbour St".into(),
            total_orders: 1,
            money_spent: 449.0,
            last_order_date: Some("2024-06-01T09:00:00.000Z".into()),
            store_name: "Demo Store".into(),
            store_address: "1 Market Sq".into(),
        },
        Customer {
            id: "cus-2".into(),
            name: "Bob Stone".into(),
            email: "bob@example.com".into(),
            address: "5 Hill Rd".into(),
            total_orders: 1,
            money_spent: 449.0,
            last_order_date: Some("2024-06-03T15:20:00.000Z".into()),
            store_name: "Demo Store".into(),
            store_address: "1 Market Sq".into(),
        },
    ]
}

fn coupons() -> Vec<Coupon> {
    vec![Coupon {
        id: "cpn-1".into(),
        code: "WELCOME10".into(),
        discount_type: DiscountType::Percentage,
        discount_value: 10.0,
        expiry_date: "2030-12-31T00:00:00.000Z".into(),
        usage_limit: 100,
        used_count: 4,
        active: true,
    }]
}

fn plan(id: &str, name: &str, price: f64, cycle: &str, features: &[&str]) -> SubscriptionPlan {
    SubscriptionPlan {
        id: id.into(),
        name: name.into(),
        description: format!("{name} plan for growing stores"),
        price,
        currency: "USD".into(),
        billing_cycle: cycle.into(),
        is_active: true,
        features: features.iter().map(|f| f.to_string()).collect(),
        ..SubscriptionPlan::default()
    }
}

fn plans() -> Vec<SubscriptionPlan> {
    vec![
        SubscriptionPlan {
            trial_period_days: Some(14),
            usage_limits: Some(UsageLimits {
                max_products: Some(50),
                max_stores: Some(1),
                max_users: Some(1),
            }),
            ..plan("plan-starter", "Starter", 0.0, "N/A", &["Product listings", "Order management"])
        },
        SubscriptionPlan {
            usage_limits: Some(UsageLimits {
                max_products: Some(500),
                max_stores: Some(3),
                max_users: None,
            }),
            ..plan("plan-pro", "Pro", 29.0, "monthly", &["Coupons", "Customer insights"])
        },
        SubscriptionPlan {
            custom_duration_days: Some(90),
            is_active: false,
            ..plan("plan-season", "Seasonal", 69.0, "custom", &["Everything in Pro"])
        },
    ]
}

fn demo_account() -> Account {
    Account {
        user: UserRecord {
            id: "user-1".into(),
            name: "Demo Vendor".into(),
            email: DEMO_EMAIL.into(),
            role: Some("vendor".into()),
            profile_image: None,
            store_id: None,
        },
        vendor: Some(VendorRecord {
            id: "vendor-1".into(),
            store_id: Some(DEMO_STORE_ID.into()),
            store: None,
        }),
        password: DEMO_PASSWORD.into(),
    }
}

/// Store with the demo account only, or with the full demo data set
pub fn build_store(with_demo_data: bool) -> Store {
    let mut store = Store {
        accounts: vec![demo_account()],
        ..Store::default()
    };
    if with_demo_data {
        store.categories = categories();
        store.products = products();
        store.orders = orders();
        store.customers = customers();
        store.coupons = coupons();
        store.plans = plans();
    }
    store
}
