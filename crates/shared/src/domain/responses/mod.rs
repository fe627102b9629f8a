mod api;
mod balance;
mod order;
mod pagination;
mod payment;
mod withdraw;

pub use self::api::{ApiResponse, ApiResponsePagination};
pub use self::balance::BalanceSnapshotResponse;
pub use self::order::{
    LineItemResponse, OrderResponse, OrderSource, OrderStatus, OrderSummaryResponse, PaymentStatus,
};
pub use self::pagination::Pagination;
pub use self::payment::{
    PaymentSummaryResponse, TransactionResponse, TransactionStatus, TransactionType,
};
pub use self::withdraw::{TicketStatus, WithdrawTicketResponse};
