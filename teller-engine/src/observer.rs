//! Tracing-backed observation sink.
//!
//! The default realization of the account observation port: each operation
//! record becomes one structured tracing event.

use teller_domain::{AccountObserver, OperationKind, OperationRecord};
use tracing::{info, warn};

/// Observer that emits one tracing event per operation record.
///
/// Accepted operations log at `info`; refused withdrawals log at `warn`
/// with the overdraft floor that refused them.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl AccountObserver for TracingObserver {
    fn on_operation(&mut self, record: OperationRecord) {
        let operation = match record.kind {
            OperationKind::Deposit => "deposit",
            OperationKind::Withdraw => "withdraw",
        };
        if record.succeeded {
            info!(
                account_id = %record.account_id,
                operation,
                amount = %record.amount,
                balance = record.resulting_balance,
                "Operation accepted"
            );
        } else {
            warn!(
                account_id = %record.account_id,
                operation,
                amount = %record.amount,
                balance = record.resulting_balance,
                overdraft_floor = %record.overdraft_floor,
                "Operation refused"
            );
        }
    }
}
