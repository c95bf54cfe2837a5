pub mod aggregate;
pub mod draft;
pub mod tags;

pub use aggregate::{DocRef, GeneralGoods, Product, ProductListData, ProductListQuery, ProductType};
pub use draft::{fields, FormMode, GeneralGoodsFields, ProductDraft, ServiceFields, VehicleFields};
pub use tags::TagSet;
