mod query;

pub(crate) use self::query::parse_filter;
pub use self::query::OrderQueryService;
