//! Env template reconciliation library.
//!
//! This library keeps a committed env template (such as `.env.example`) in step
//! with a local `.env` file. It finds keys the template is missing and appends
//! them with empty values, optionally carrying over the comment block written
//! above each key. Secret values never leave the source file.
//!
//! # Features
//!
//! - **Zero-copy parsing**: Keys and comments borrow from the input text
//! - **Comment preservation**: Comment blocks directly above a key travel with it
//! - **Injected confirmation**: Interactive runs ask through the [`prompt::Confirm`] trait
//! - **Optional tracing**: Detailed logging when the `tracing` feature is enabled
//!
//! # Example
//!
//! ```rust
//! use env_template_sync::parse::KeyTable;
//! use env_template_sync::sync::{reconcile, Reconciliation};
//!
//! let source = KeyTable::parse("# secret\nAPI_KEY=xyz\nPORT=3000", false);
//! let template = KeyTable::parse("PORT=", true);
//!
//! match reconcile(&source, &template, "PORT=", true) {
//!     Reconciliation::Updated { template, .. } => {
//!         assert_eq!(template, "PORT=\n\n# secret\nAPI_KEY=\"\"\n");
//!     }
//!     Reconciliation::InSync => unreachable!(),
//! }
//! ```

pub mod parse;
pub mod prompt;
pub mod sync;
