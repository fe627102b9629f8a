pub mod order;
pub mod payment;
pub mod scope;
pub mod withdraw;
