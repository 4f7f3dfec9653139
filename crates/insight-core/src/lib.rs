//! # insight-core
//!
//! Framework-free logic behind the InsightEngine landing site.
//!
//! ## Flow
//!
//! ```text
//! ┌──────────────┐  keystrokes  ┌──────────────┐  submit()  ┌────────────────────────┐
//! │  URL field   │─────────────▶│  Submission  │───────────▶│  NavigationTarget      │
//! └──────────────┘              │ Idle→Submit. │            │  /analyze?url=<enc>    │
//!                               └──────────────┘            └────────────────────────┘
//! ```
//!
//! The frontend and the server both drive the same [`Submission`], so the
//! hand-off to `/analyze` is encoded identically with or without JavaScript.

pub mod content;
pub mod error;
pub mod metadata;
pub mod navigation;
pub mod style;
pub mod submission;

pub use error::{Result, SubmitError};
pub use metadata::{OpenGraph, SITE, SiteMetadata};
pub use navigation::{ANALYZE_PATH, NavigationTarget, URL_PARAM};
pub use style::Role;
pub use submission::{Phase, Submission, is_form_whitespace};
