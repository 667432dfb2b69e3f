//! Async client for the RH management REST API.
//!
//! # Overview
//! `ApiClient` turns `(endpoint, options)` into an `HttpRequest`, hands it to
//! a [`Transport`], and normalizes whatever comes back into an [`ApiResult`].
//! Entity services (`client.employees()`, `client.leaves()`, ...) are thin
//! typed wrappers that pick the path and verb.
//!
//! # Design
//! - Request building and response normalization are pure functions; only
//!   the `Transport` touches the network, so tests script it in memory.
//! - Nothing is thrown past the client. Every call resolves to an
//!   `ApiResult` carrying a status, including network failures (500).
//! - The bearer token lives in a shared [`Session`]. A 401 clears it and
//!   notifies the [`LoginRedirect`] handler.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod result;
pub mod services;
pub mod session;
pub mod transport;
pub mod types;

#[cfg(test)]
mod testing;

pub use client::{normalize_response, ApiClient, LogRedirect, LoginRedirect, RequestOptions};
pub use config::ClientConfig;
pub use error::{ApiError, ConfigError, ErrorKind, TransportError};
pub use http::{FilePart, HttpMethod, HttpRequest, HttpResponse, MultipartForm, RequestBody};
pub use result::ApiResult;
pub use services::{
    AbsenceFormOptions, AbsenceService, AbsenceTypeService, ActivityLogService,
    AssignmentService, DocumentService, EmployeeService, LeaveService, PastoralLetterService,
    StatsPart, StatsReport, TrainingService, UserService,
};
pub use session::Session;
pub use transport::{ReqwestTransport, Transport};
