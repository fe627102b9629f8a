use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateWithdrawRequest {
    /// Requested amount. The balance invariant is enforced by the
    /// withdrawal coordinator, not here.
    #[validate(range(exclusive_min = 0.0, message = "amount must be greater than zero"))]
    pub amount: f64,
}
