//! Schema definitions for the WageWizard prediction pipeline.
//!
//! This crate contains the data structures that cross the pipeline's
//! boundaries: the feature schema registry describing every employee
//! attribute the model accepts, the request/response payloads exchanged
//! with the prediction service, and the aggregate model-quality metrics
//! consumed by the chart derivations.
//!
//! Keeping the schemas in one crate guarantees a single authoritative
//! definition of what "valid" means — the form layer, the HTTP clients,
//! and the chart derivations all consume these types rather than
//! re-declaring field names or domains locally.

mod features;
mod metrics;
mod prediction;

#[doc(inline)]
pub use features::*;
#[doc(inline)]
pub use metrics::*;
#[doc(inline)]
pub use prediction::*;
