//! `livechart` is a client for the IAEA Live Chart of Nuclides API
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of workspace crates.
#[doc(inline)]
pub use livechart_client as client;

#[cfg(feature = "ml")]
#[cfg_attr(docsrs, doc(cfg(feature = "ml")))]
#[doc(inline)]
pub use livechart_ml as ml;
