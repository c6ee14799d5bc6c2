//! Implements the structs that hold the state of the server.
//!
//! The only shared state is the most recently uploaded statement and the
//! client for the external statement service. There is no database; a new
//! upload simply replaces the statement wholesale.

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;

use crate::{record::Statement, service::StatementService};

/// The state of the server.
#[derive(Debug, Clone)]
pub struct AppState<S>
where
    S: StatementService,
{
    /// The most recently uploaded statement, shared across handlers.
    pub statement: Arc<Mutex<Statement>>,
    /// The client for the external statement service.
    pub service: S,
}

impl<S> AppState<S>
where
    S: StatementService,
{
    /// Create a new [AppState] with an empty statement.
    pub fn new(service: S) -> Self {
        Self {
            statement: Arc::new(Mutex::new(Statement::default())),
            service,
        }
    }
}

/// The state needed for rendering the dashboard and review pages.
#[derive(Debug, Clone)]
pub struct StatementState {
    /// The most recently uploaded statement.
    pub statement: Arc<Mutex<Statement>>,
}

impl<S> FromRef<AppState<S>> for StatementState
where
    S: StatementService,
{
    fn from_ref(state: &AppState<S>) -> Self {
        Self {
            statement: state.statement.clone(),
        }
    }
}

/// The state needed for handlers that call the statement service and update
/// the stored statement: upload, mapping, and export.
#[derive(Debug, Clone)]
pub struct ServiceState<S>
where
    S: StatementService,
{
    /// The most recently uploaded statement.
    pub statement: Arc<Mutex<Statement>>,
    /// The client for the external statement service.
    pub service: S,
}

impl<S> FromRef<AppState<S>> for ServiceState<S>
where
    S: StatementService,
{
    fn from_ref(state: &AppState<S>) -> Self {
        Self {
            statement: state.statement.clone(),
            service: state.service.clone(),
        }
    }
}
