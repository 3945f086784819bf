//! Client-side data-view engine.
//!
//! One generic pipeline (store, filter, summary, pagination, controller) instantiated
//! once per record type. The per-type knowledge lives in the [`Record`] and
//! [`Category`] implementations in `crate::models`.

mod aggregate;
mod controller;
mod filter;
mod handle;
mod paginate;
mod store;

pub use aggregate::*;
pub use controller::*;
pub use filter::*;
pub use handle::*;
pub use paginate::*;
pub use store::*;

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Record identifiers are unique within a collection and never reassigned.
pub type RecordId = u64;

/// A category selector: the "all" sentinel plus a closed set of status buckets.
///
/// `Default` must be the "all" sentinel.
pub trait Category:
    Copy + Eq + Default + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// The non-sentinel selectors. Every record falls under exactly one of them.
    const PARTITION: &'static [Self];

    /// Wire name of the selector, also used as the summary key.
    fn as_str(self) -> &'static str;

    fn is_all(self) -> bool {
        self == Self::default()
    }
}

/// A domain entity managed by a view.
pub trait Record: Clone + Debug + Serialize + Send + Sync + 'static {
    type Category: Category;
    /// In-place field changes the console may request for this record type.
    ///
    /// Mutations set fields, so the latest one deferred for a record supersedes
    /// any earlier one.
    type Mutation: Clone + Debug + Send + Sync + 'static;

    /// Human label used in log lines and error messages.
    const KIND: &'static str;

    fn id(&self) -> RecordId;

    /// Whether this record belongs to a non-sentinel `category`.
    fn in_category(&self, category: Self::Category) -> bool;

    /// Text fields searched by the free-text query, in match order.
    fn search_fields(&self) -> Vec<&str>;

    fn apply(&mut self, mutation: &Self::Mutation);
}
