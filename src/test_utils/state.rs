use std::sync::{Arc, Mutex};

use crate::{
    record::{RawAmount, RawRecord, Statement, UnknownMerchant},
    state::{ServiceState, StatementState},
    test_utils::StubStatementService,
};

fn raw_record(
    description: &str,
    amount: f64,
    date: &str,
    kind: &str,
    category: &str,
) -> RawRecord {
    RawRecord {
        description: Some(description.to_owned()),
        amount: Some(RawAmount::Number(amount)),
        date: Some(date.to_owned()),
        kind: Some(kind.to_owned()),
        category: Some(category.to_owned()),
    }
}

/// A small statement covering credits, several categories, several months,
/// and the "Other" sentinel.
pub(crate) fn sample_transactions() -> Vec<RawRecord> {
    vec![
        raw_record("SALARY JAN", 50000.0, "2024-01-01", "CREDIT", "Salary"),
        raw_record("SWIGGY BANGALORE", -450.5, "2024-01-05", "DEBIT", "Food"),
        raw_record("UBER TRIP", -250.0, "2024-02-10", "DEBIT", "Travel"),
        raw_record("ACME STORE", -120.0, "2024-02-12", "DEBIT", "Other"),
    ]
}

fn statement_with_transactions() -> Statement {
    Statement {
        transactions: sample_transactions(),
        unknowns: vec![],
        categories: vec!["Food".to_owned(), "Travel".to_owned(), "Shopping".to_owned()],
    }
}

fn statement_with_unknowns() -> Statement {
    Statement {
        unknowns: vec![
            UnknownMerchant {
                name: "ACME STORE".to_owned(),
                amount: Some(RawAmount::Number(-120.0)),
            },
            UnknownMerchant {
                name: "CORNER DAIRY".to_owned(),
                amount: Some(RawAmount::Number(-35.0)),
            },
        ],
        ..statement_with_transactions()
    }
}

pub(crate) fn statement_state_with_transactions() -> StatementState {
    StatementState {
        statement: Arc::new(Mutex::new(statement_with_transactions())),
    }
}

pub(crate) fn statement_state_with_unknowns() -> StatementState {
    StatementState {
        statement: Arc::new(Mutex::new(statement_with_unknowns())),
    }
}

pub(crate) fn service_state_with_transactions(
    service: StubStatementService,
) -> ServiceState<StubStatementService> {
    ServiceState {
        statement: Arc::new(Mutex::new(statement_with_transactions())),
        service,
    }
}

pub(crate) fn service_state_with_unknowns(
    service: StubStatementService,
) -> ServiceState<StubStatementService> {
    ServiceState {
        statement: Arc::new(Mutex::new(statement_with_unknowns())),
        service,
    }
}
