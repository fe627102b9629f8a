use crate::domain::responses::{
    BalanceSnapshotResponse, TransactionResponse, TransactionStatus, TransactionType,
};
use chrono::{DateTime, Datelike, TimeZone, Utc};

/// Derives the balance aggregates from one page of normalized transactions.
///
/// Pure and page-scoped: no I/O, no running total across pages. Pending
/// withdrawals are summed from the supplied page only; with no withdrawal
/// ledger wired in upstream, the input usually contains none and the figure
/// stays at zero. The available balance is deliberately not reduced by
/// tickets still awaiting resolution.
pub fn compute_balance(
    transactions: &[TransactionResponse],
    now: DateTime<Utc>,
) -> BalanceSnapshotResponse {
    let month_start = first_instant_of_month(now);

    let mut total_earnings = 0.0;
    let mut this_month_earnings = 0.0;
    let mut pending_withdrawals = 0.0;

    for tx in transactions {
        match (tx.kind, tx.status) {
            (TransactionType::Sale, TransactionStatus::Completed) => {
                total_earnings += tx.amount;
                if tx.date >= month_start {
                    this_month_earnings += tx.amount;
                }
            }
            (TransactionType::Withdrawal, TransactionStatus::Pending) => {
                pending_withdrawals += tx.amount;
            }
            _ => {}
        }
    }

    BalanceSnapshotResponse {
        total_earnings,
        this_month_earnings,
        pending_withdrawals,
        available_balance: total_earnings - pending_withdrawals,
    }
}

fn first_instant_of_month(now: DateTime<Utc>) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(now.year(), now.month(), 1, 0, 0, 0)
        .single()
        .unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(
        id: &str,
        kind: TransactionType,
        status: TransactionStatus,
        amount: f64,
        date: &str,
    ) -> TransactionResponse {
        TransactionResponse {
            id: id.to_string(),
            kind,
            status,
            amount,
            date: DateTime::parse_from_rfc3339(date)
                .unwrap()
                .with_timezone(&Utc),
            description: None,
            reference: None,
            payment_method: None,
        }
    }

    #[test]
    fn splits_earnings_across_the_month_boundary() {
        let now = DateTime::parse_from_rfc3339("2024-02-10T09:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let transactions = vec![
            tx(
                "pay_1",
                TransactionType::Sale,
                TransactionStatus::Completed,
                1000.0,
                "2024-02-10T09:00:00Z",
            ),
            tx(
                "pay_2",
                TransactionType::Sale,
                TransactionStatus::Completed,
                500.0,
                "2024-01-20T09:00:00Z",
            ),
        ];

        let snapshot = compute_balance(&transactions, now);

        assert_eq!(snapshot.total_earnings, 1500.0);
        assert_eq!(snapshot.this_month_earnings, 1000.0);
        assert_eq!(snapshot.pending_withdrawals, 0.0);
        assert_eq!(snapshot.available_balance, 1500.0);
    }

    #[test]
    fn only_completed_sales_count_as_earnings() {
        let now = Utc::now();
        let transactions = vec![
            tx(
                "pay_1",
                TransactionType::Sale,
                TransactionStatus::Pending,
                700.0,
                "2024-02-10T09:00:00Z",
            ),
            tx(
                "pay_2",
                TransactionType::Sale,
                TransactionStatus::Failed,
                300.0,
                "2024-02-10T09:00:00Z",
            ),
            tx(
                "pay_3",
                TransactionType::Refund,
                TransactionStatus::Completed,
                200.0,
                "2024-02-10T09:00:00Z",
            ),
        ];

        let snapshot = compute_balance(&transactions, now);

        assert_eq!(snapshot.total_earnings, 0.0);
        assert_eq!(snapshot.available_balance, 0.0);
    }

    #[test]
    fn pending_withdrawals_reduce_available_balance() {
        let now = DateTime::parse_from_rfc3339("2024-02-10T09:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let transactions = vec![
            tx(
                "pay_1",
                TransactionType::Sale,
                TransactionStatus::Completed,
                2000.0,
                "2024-02-01T09:00:00Z",
            ),
            tx(
                "wd_1",
                TransactionType::Withdrawal,
                TransactionStatus::Pending,
                600.0,
                "2024-02-05T09:00:00Z",
            ),
        ];

        let snapshot = compute_balance(&transactions, now);

        assert_eq!(snapshot.pending_withdrawals, 600.0);
        assert_eq!(snapshot.available_balance, 1400.0);
    }

    #[test]
    fn empty_page_yields_zeroes() {
        let snapshot = compute_balance(&[], Utc::now());
        assert_eq!(snapshot.total_earnings, 0.0);
        assert_eq!(snapshot.this_month_earnings, 0.0);
        assert_eq!(snapshot.pending_withdrawals, 0.0);
        assert_eq!(snapshot.available_balance, 0.0);
    }
}
