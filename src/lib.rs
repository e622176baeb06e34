//! Deep-link navigation and scroll sync for long catalog pages.
//!
//! The [`NavigationController`] owns the page's [`NavigationState`] (active
//! section, sort, keyword, filters), mirrors it into the URL fragment and
//! turns user actions, scroll positions and back/forward traversal into state
//! changes and scroll requests. Hosts feed it platform events with explicit
//! timestamps and drain [`ScrollRequest`]s after each call.

pub mod bindings;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod layout;
pub mod registry;
pub mod scheduler;
pub mod state;
pub mod tracker;
pub mod url;

pub use config::Config;
pub use controller::{ControllerOptions, ListenerId, NavigationController, ScrollBehavior, ScrollRequest};
pub use error::ConfigError;
pub use registry::{SectionDescriptor, SectionRegistry};
pub use state::{CurrentSection, FilterSelections, NavigationState, SearchKeyword, SectionId, SortOrder};
pub use tracker::ScrollSample;
pub use url::{FilterParam, FragmentCodec, HistoryBackend, SessionHistory, Traversal};
