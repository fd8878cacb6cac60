//! Overdue fines and the loan return transition.

use chrono::NaiveDate;

use crate::models::LoanStatus;

/// Currency units charged per whole day past the due date.
pub const RATE_PER_DAY: i64 = 3;

/// Advisory attached to every new loan.
pub const FINE_NOTICE: &str =
    "Atenção! Será cobrada uma taxa de R$ 3,00 por dia após o prazo de devolução.";

/// Whole days between `due` and `today`, never negative.
pub fn days_late(due: NaiveDate, today: NaiveDate) -> i64 {
    (today - due).num_days().max(0)
}

pub fn overdue_fine(due: NaiveDate, today: NaiveDate) -> i64 {
    days_late(due, today).saturating_mul(RATE_PER_DAY)
}

/// Result of asking to return a loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// The loan was pending and must now be written as returned with `fine`.
    Settled { fine: i64 },
    /// The loan had already been returned; `fine` is the recorded amount.
    AlreadyReturned { fine: i64 },
}

impl Settlement {
    pub const fn fine(self) -> i64 {
        match self {
            Self::Settled { fine } | Self::AlreadyReturned { fine } => fine,
        }
    }
}

/// Decide the outcome of returning a loan in `status` on `today`.
///
/// A returned loan keeps its recorded fine no matter when it is asked again.
pub fn settle(status: LoanStatus, recorded_fine: i64, due: NaiveDate, today: NaiveDate) -> Settlement {
    match status {
        LoanStatus::Pending => Settlement::Settled {
            fine: overdue_fine(due, today),
        },
        LoanStatus::Returned => Settlement::AlreadyReturned {
            fine: recorded_fine,
        },
    }
}
