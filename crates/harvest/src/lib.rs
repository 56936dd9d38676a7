//! Harvest: SurveyMonkey survey retrieval through an R runtime bridge.
//!
//! The heavy lifting (OAuth, pagination, rate limiting, response
//! parsing) lives in the R `surveymonkey` package; this crate drives it
//! through a narrow subprocess bridge and marshals the resulting tabular
//! data into host-native tables.
//!
//! # Core Principles
//!
//! - **Canonical absence**: every R missing sentinel (`NA_integer_`,
//!   `NA_real_`, `NA_character_`, logical `NA`, factor NA) becomes the
//!   single host [`Value::Missing`] marker, decided by R's own
//!   per-type predicates; the literal text `"NA"` stays data.
//! - **No silent coercion**: a cell that cannot be represented fails the
//!   whole call with its column and row; there is no partial output.
//! - **Bridge behind a trait**: the marshaler and client depend only on
//!   [`RBridge`], so everything is testable with no R installed.
//!
//! # Example
//!
//! ```no_run
//! use harvest::{Harvest, HarvestConfig};
//!
//! let config = HarvestConfig {
//!     oauth_token: Some("token".to_string()),
//!     ..Default::default()
//! };
//! let client = Harvest::with_config(config);
//!
//! for survey in client.filter_surveys("Satisfaction").unwrap() {
//!     let table = client.download(survey.id as u64).unwrap();
//!     println!("{}: {} rows", survey.title, table.nrow());
//! }
//! ```

pub mod bridge;
pub mod error;
pub mod foreign;
pub mod host;
pub mod marshal;
pub mod survey;

mod client;

pub use bridge::{MockBridge, RBridge, RscriptBridge};
pub use client::{Harvest, HarvestConfig};
pub use error::{HarvestError, Result};
pub use foreign::{RCell, RColumn, RFrame, RType};
pub use host::{Column, DataType, Table, Value};
pub use marshal::marshal;
pub use survey::{filter_by_title, SurveyDescriptor};
