//! HTTP API module for the Time-Bank Engine.
//!
//! This module provides the REST API endpoints for resolving expected hours,
//! summarizing work balances, and toggling the clock.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    BalanceRequest, ClockRequest, EmployeeRequest, ExpectedRequest, HolidayRequest, PunchRequest,
    TeamBalanceRequest,
};
pub use response::{ApiError, BalanceResponse, ClockResponse, TeamBalanceResponse};
pub use state::AppState;
