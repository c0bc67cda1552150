//! Palette selector
//!
//! Pure selection logic behind the command palette:
//! - `candidate`: the three kinds of selectable items
//! - `catalog`: static navigation and command tables
//! - `selector`: query filtering and the fixed merge order
//! - `cursor`: cyclic cursor arithmetic
//! - `effects`: what activating a candidate does
//!
//! Nothing in here touches application state; the reducer and middleware
//! feed it the current query and entity collection.

pub mod candidate;
pub mod catalog;
pub mod cursor;
pub mod effects;
pub mod selector;

pub use candidate::{Candidate, CommandAction, CommandEntry, EntityRecord, Icon, NavigationTarget};
pub use catalog::{command_entries, navigation_targets};
pub use effects::{effects_for, Effect, Severity, ENTITY_LIST_PATH};
pub use selector::{filter_and_merge, ENTITY_MATCH_LIMIT};
