pub mod client;
pub mod service;

pub use self::client::{DynWithdrawalClient, WithdrawalClientTrait};
pub use self::service::{DynWithdrawCommandService, WithdrawCommandServiceTrait};
