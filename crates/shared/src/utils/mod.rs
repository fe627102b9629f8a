mod logs;
mod parse_datetime;
mod shutdown;

pub use self::logs::Logger;
pub use self::parse_datetime::parse_datetime;
pub use self::shutdown::shutdown_signal;
