pub mod aggregate;

pub use aggregate::{
    OrderBuyer, OrderFilter, OrderListData, OrderProductDetails, OrderRow, RawOrder, StatusTone,
    UpdateOrderStatusRequest, NOT_AVAILABLE, ORDER_STATUSES,
};
