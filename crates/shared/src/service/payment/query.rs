use crate::{
    abstract_trait::payment::{DynPaymentGatewayClient, PaymentQueryServiceTrait},
    domain::{
        requests::{
            payment::{FindAllPayments, PaymentProviderQuery},
            scope::DashboardScope,
        },
        responses::{
            ApiResponse, ApiResponsePagination, BalanceSnapshotResponse, Pagination,
            PaymentSummaryResponse, TransactionResponse, TransactionStatus,
        },
    },
    errors::{NormalizationError, ServiceError},
    service::{balance::compute_balance, order::parse_filter, refine::refine},
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info};

/// Pulls transaction pages from the payment gateway and normalizes them.
/// The gateway-wide summary travels through untouched; page-scoped
/// aggregates come from `service::balance`, never from that summary.
pub struct PaymentQueryService {
    client: DynPaymentGatewayClient,
}

impl PaymentQueryService {
    pub fn new(client: DynPaymentGatewayClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PaymentQueryServiceTrait for PaymentQueryService {
    async fn find_all(
        &self,
        scope: DashboardScope,
        req: &FindAllPayments,
    ) -> Result<
        ApiResponsePagination<Vec<TransactionResponse>, PaymentSummaryResponse>,
        ServiceError,
    > {
        let page = if req.page > 0 { req.page } else { 1 };
        let limit = if req.limit > 0 { req.limit } else { 10 };

        let status = parse_filter::<TransactionStatus>(req.status.as_deref())?;

        info!(
            "🔍 Fetching payments | scope: {scope}, page: {page}, limit: {limit}, status: {:?}",
            req.status
        );

        let query = PaymentProviderQuery {
            page,
            limit,
            status,
        };

        let envelope = self.client.fetch_payments(&query).await.map_err(|e| {
            error!("❌ Failed to fetch payments for scope {scope}: {e}");
            ServiceError::Fetch(e)
        })?;

        let transactions: Vec<TransactionResponse> = envelope
            .data
            .into_iter()
            .map(TransactionResponse::try_from)
            .collect::<Result<_, NormalizationError>>()
            .map_err(|e| {
                error!("❌ Transaction normalization failed for scope {scope}: {e}");
                ServiceError::Normalization(e)
            })?;

        let pagination = match &envelope.pagination {
            Some(meta) => Pagination::new(meta.page, meta.limit, meta.total),
            None => Pagination::new(page, limit, transactions.len() as i64),
        };

        let summary = envelope
            .summary
            .map(PaymentSummaryResponse::from)
            .unwrap_or_default();

        let data = match req.search.as_deref() {
            Some(query) if !query.trim().is_empty() => refine(&transactions, query),
            _ => transactions,
        };

        info!("✅ Returning {} transactions for scope {scope}", data.len());

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Transactions retrieved successfully".to_string(),
            data,
            pagination,
            summary,
        })
    }

    async fn balance(
        &self,
        scope: DashboardScope,
        req: &FindAllPayments,
    ) -> Result<ApiResponse<BalanceSnapshotResponse>, ServiceError> {
        let page = self.find_all(scope, req).await?;
        let snapshot = compute_balance(&page.data, Utc::now());

        info!(
            "💰 Balance snapshot for scope {scope}: earnings {}, available {}",
            snapshot.total_earnings, snapshot.available_balance
        );

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Balance derived from the current transactions page".to_string(),
            data: snapshot,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::payment::PaymentGatewayClientTrait,
        errors::FetchError,
        model::{PageMeta, PaymentEnvelope, PaymentSummaryMeta, TransactionRecord},
    };
    use std::sync::Arc;

    struct FakeGatewayClient {
        transactions: Vec<TransactionRecord>,
        summary: PaymentSummaryMeta,
    }

    #[async_trait]
    impl PaymentGatewayClientTrait for FakeGatewayClient {
        async fn fetch_payments(
            &self,
            query: &PaymentProviderQuery,
        ) -> Result<PaymentEnvelope, FetchError> {
            let data: Vec<TransactionRecord> = self
                .transactions
                .iter()
                .filter(|tx| match query.status {
                    Some(status) => tx.status == status.as_str(),
                    None => true,
                })
                .cloned()
                .collect();
            let total = data.len() as i64;

            Ok(PaymentEnvelope {
                success: true,
                data,
                pagination: Some(PageMeta {
                    page: query.page,
                    limit: query.limit,
                    total,
                }),
                summary: Some(self.summary.clone()),
                error: None,
            })
        }
    }

    struct FailingGateway;

    #[async_trait]
    impl PaymentGatewayClientTrait for FailingGateway {
        async fn fetch_payments(
            &self,
            _query: &PaymentProviderQuery,
        ) -> Result<PaymentEnvelope, FetchError> {
            Err(FetchError::Provider("gateway unavailable".to_string()))
        }
    }

    fn record(id: &str, kind: &str, status: &str, amount: f64, date: &str) -> TransactionRecord {
        TransactionRecord {
            id: id.to_string(),
            kind: kind.to_string(),
            status: status.to_string(),
            amount,
            date: date.to_string(),
            description: Some(format!("Payment for Order {id}")),
            reference: Some(id.to_string()),
            payment_method: Some("Razorpay".to_string()),
        }
    }

    fn summary() -> PaymentSummaryMeta {
        PaymentSummaryMeta {
            total_payments: 120,
            total_amount: 98000.0,
            completed_payments: 100,
            pending_payments: 15,
            failed_payments: 5,
            completed_amount: 91000.0,
        }
    }

    fn service(transactions: Vec<TransactionRecord>) -> PaymentQueryService {
        PaymentQueryService::new(Arc::new(FakeGatewayClient {
            transactions,
            summary: summary(),
        }))
    }

    #[tokio::test]
    async fn gateway_summary_passes_through_untouched() {
        let service = service(vec![record(
            "pay_1",
            "sale",
            "completed",
            1000.0,
            "2024-02-10T09:00:00Z",
        )]);

        let response = service
            .find_all(DashboardScope::Merchant, &FindAllPayments::default())
            .await
            .unwrap();

        // Whole-gateway numbers, not recomputed from the single-row page.
        assert_eq!(response.summary.total_payments, 120);
        assert_eq!(response.summary.completed_amount, 91000.0);
    }

    #[tokio::test]
    async fn status_filter_is_pushed_to_the_gateway() {
        let service = service(vec![
            record("pay_1", "sale", "completed", 1000.0, "2024-02-10T09:00:00Z"),
            record("pay_2", "sale", "pending", 500.0, "2024-02-11T09:00:00Z"),
        ]);

        let response = service
            .find_all(
                DashboardScope::Merchant,
                &FindAllPayments {
                    status: Some("pending".to_string()),
                    ..FindAllPayments::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].status, TransactionStatus::Pending);
    }

    #[tokio::test]
    async fn balance_is_derived_from_the_fetched_page() {
        let service = service(vec![
            record("pay_1", "sale", "completed", 1000.0, "2024-02-10T09:00:00Z"),
            record("pay_2", "sale", "completed", 500.0, "2024-01-20T09:00:00Z"),
            record("pay_3", "sale", "failed", 900.0, "2024-02-10T09:00:00Z"),
        ]);

        let response = service
            .balance(DashboardScope::Merchant, &FindAllPayments::default())
            .await
            .unwrap();

        assert_eq!(response.data.total_earnings, 1500.0);
        assert_eq!(response.data.pending_withdrawals, 0.0);
        assert_eq!(response.data.available_balance, 1500.0);
    }

    #[tokio::test]
    async fn failed_fetch_leaves_the_previous_page_untouched() {
        let healthy = service(vec![record(
            "pay_1",
            "sale",
            "completed",
            1000.0,
            "2024-02-10T09:00:00Z",
        )]);

        let displayed = healthy
            .find_all(DashboardScope::Merchant, &FindAllPayments::default())
            .await
            .unwrap();
        let before = displayed.clone();

        let failing = PaymentQueryService::new(Arc::new(FailingGateway));
        let err = failing
            .find_all(DashboardScope::Merchant, &FindAllPayments::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Fetch(_)));
        // The error is a value; nothing was applied to the caller's state.
        assert_eq!(displayed, before);
    }

    #[tokio::test]
    async fn transaction_search_matches_reference_and_description() {
        let service = service(vec![
            record("pay_1", "sale", "completed", 1000.0, "2024-02-10T09:00:00Z"),
            record("pay_2", "sale", "completed", 500.0, "2024-02-11T09:00:00Z"),
        ]);

        let response = service
            .find_all(
                DashboardScope::Merchant,
                &FindAllPayments {
                    search: Some("pay_2".to_string()),
                    ..FindAllPayments::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].id, "pay_2");
    }
}
