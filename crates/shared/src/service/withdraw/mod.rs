mod command;

pub use self::command::WithdrawCommandService;
