//! HTTP client for the salary-prediction and model-metrics endpoints.
//!
//! Two contracts live behind one configured base address: `POST
//! /predict` takes the full field-keyed form snapshot and answers with
//! a scalar `predicted_salary`, and `GET /metrics` answers with the
//! aggregate model-quality payload. Both calls map every failure mode
//! to a [`ServiceError`] so callers can branch on the taxonomy instead
//! of inspecting transport internals.

mod client;
mod error;

#[doc(inline)]
pub use client::*;
#[doc(inline)]
pub use error::*;
