pub mod balance;
pub mod order;
pub mod payment;
pub mod refine;
pub mod withdraw;

pub use self::order::OrderQueryService;
pub use self::payment::PaymentQueryService;
pub use self::withdraw::WithdrawCommandService;
