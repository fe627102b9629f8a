use crate::{
    abstract_trait::withdraw::{DynWithdrawalClient, WithdrawCommandServiceTrait},
    domain::{
        requests::{scope::DashboardScope, withdraw::CreateWithdrawRequest},
        responses::{ApiResponse, BalanceSnapshotResponse, TicketStatus, WithdrawTicketResponse},
    },
    errors::{ServiceError, WithdrawValidationError},
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info, warn};

/// Gates withdrawal requests against the caller-supplied balance snapshot
/// before handing them to the withdrawal collaborator. Accepted tickets are
/// fire-and-forget; the collaborator owns their resolution and the core
/// never deducts the amount locally.
pub struct WithdrawCommandService {
    client: DynWithdrawalClient,
}

impl WithdrawCommandService {
    pub fn new(client: DynWithdrawalClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl WithdrawCommandServiceTrait for WithdrawCommandService {
    async fn request(
        &self,
        scope: DashboardScope,
        req: &CreateWithdrawRequest,
        snapshot: &BalanceSnapshotResponse,
    ) -> Result<ApiResponse<WithdrawTicketResponse>, ServiceError> {
        info!(
            "🔍 Withdrawal requested | scope: {scope}, amount: {}, available: {}",
            req.amount, snapshot.available_balance
        );

        if req.amount <= 0.0 {
            warn!(
                "⚠️ Rejecting withdrawal for scope {scope}: non-positive amount {}",
                req.amount
            );
            return Err(WithdrawValidationError::NonPositiveAmount.into());
        }

        if req.amount > snapshot.available_balance {
            warn!(
                "⚠️ Rejecting withdrawal for scope {scope}: requested {} exceeds available {}",
                req.amount, snapshot.available_balance
            );
            return Err(WithdrawValidationError::InsufficientBalance {
                requested: req.amount,
                available: snapshot.available_balance,
            }
            .into());
        }

        let record = self.client.submit(req.amount).await.map_err(|e| {
            error!("❌ Withdrawal submission failed for scope {scope}: {e}");
            ServiceError::Fetch(e)
        })?;

        let status = record.status.parse::<TicketStatus>().map_err(|e| {
            error!("❌ Withdrawal ticket normalization failed for scope {scope}: {e}");
            ServiceError::Normalization(e)
        })?;

        info!(
            "✅ Withdrawal ticket {} accepted for scope {scope}, status: {status:?}",
            record.id
        );

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Withdrawal request submitted successfully".to_string(),
            data: WithdrawTicketResponse {
                id: record.id,
                amount: req.amount,
                status,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::withdraw::WithdrawalClientTrait, errors::FetchError,
        model::WithdrawTicketRecord,
    };
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    struct RecordingClient {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl WithdrawalClientTrait for RecordingClient {
        async fn submit(&self, _amount: f64) -> Result<WithdrawTicketRecord, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(WithdrawTicketRecord {
                id: "wd_001".to_string(),
                status: "pending".to_string(),
            })
        }
    }

    fn snapshot(available: f64) -> BalanceSnapshotResponse {
        BalanceSnapshotResponse {
            total_earnings: available,
            this_month_earnings: 0.0,
            pending_withdrawals: 0.0,
            available_balance: available,
        }
    }

    fn harness() -> (WithdrawCommandService, Arc<RecordingClient>) {
        let client = Arc::new(RecordingClient {
            calls: AtomicUsize::new(0),
        });
        (WithdrawCommandService::new(client.clone()), client)
    }

    #[tokio::test]
    async fn accepted_request_yields_a_pending_ticket() {
        let (service, _client) = harness();

        let response = service
            .request(
                DashboardScope::Merchant,
                &CreateWithdrawRequest { amount: 1200.0 },
                &snapshot(1500.0),
            )
            .await
            .unwrap();

        assert_eq!(response.data.id, "wd_001");
        assert_eq!(response.data.amount, 1200.0);
        assert_eq!(response.data.status, TicketStatus::Pending);
    }

    #[tokio::test]
    async fn overdraw_is_rejected_without_touching_the_collaborator() {
        let (service, client) = harness();

        let err = service
            .request(
                DashboardScope::Merchant,
                &CreateWithdrawRequest { amount: 2000.0 },
                &snapshot(1500.0),
            )
            .await
            .unwrap_err();

        match err {
            ServiceError::Withdrawal(WithdrawValidationError::InsufficientBalance {
                requested,
                available,
            }) => {
                assert_eq!(requested, 2000.0);
                assert_eq!(available, 1500.0);
            }
            other => panic!("expected insufficient_balance, got {other:?}"),
        }
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn zero_and_negative_amounts_are_rejected() {
        let (service, client) = harness();

        for amount in [0.0, -50.0] {
            let err = service
                .request(
                    DashboardScope::FashionCreator,
                    &CreateWithdrawRequest { amount },
                    &snapshot(1500.0),
                )
                .await
                .unwrap_err();
            assert!(matches!(
                err,
                ServiceError::Withdrawal(WithdrawValidationError::NonPositiveAmount)
            ));
        }
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn exact_balance_withdrawal_is_allowed() {
        let (service, client) = harness();

        let response = service
            .request(
                DashboardScope::Merchant,
                &CreateWithdrawRequest { amount: 1500.0 },
                &snapshot(1500.0),
            )
            .await
            .unwrap();

        assert_eq!(response.data.amount, 1500.0);
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
    }

    struct UnknownStatusClient;

    #[async_trait]
    impl WithdrawalClientTrait for UnknownStatusClient {
        async fn submit(&self, _amount: f64) -> Result<WithdrawTicketRecord, FetchError> {
            Ok(WithdrawTicketRecord {
                id: "wd_002".to_string(),
                status: "queued".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn unknown_ticket_status_is_a_normalization_error() {
        let service = WithdrawCommandService::new(Arc::new(UnknownStatusClient));

        let err = service
            .request(
                DashboardScope::Merchant,
                &CreateWithdrawRequest { amount: 100.0 },
                &snapshot(1500.0),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Normalization(_)));
    }
}
