//! View controller: owns the collection, the query and the derived page.
//!
//! Every accepted input is followed by a full, synchronous re-derivation
//! (filter, summary, page), so a snapshot never shows a half-updated list.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{
    filter_records, last_page, paginate, summarize, Record, RecordId, RecordStore, Summary,
};
use crate::errors::AppError;

/// Lifecycle of a view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum ViewStatus {
    /// Nothing loaded yet
    Idle,
    /// A load is in flight; the previous view (if any) stays on screen
    Loading,
    Ready,
    /// The last load failed; `reload` retries
    Failed { message: String },
}

/// Category, search text and pagination as chosen in the console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewQuery<C> {
    pub category: C,
    pub search: String,
    pub page: usize,
    pub page_size: usize,
}

impl<C: Default> ViewQuery<C> {
    pub fn new(page_size: usize) -> Self {
        Self {
            category: C::default(),
            search: String::new(),
            page: 0,
            page_size,
        }
    }
}

/// A single user input to the view.
#[derive(Debug, Clone)]
pub enum ViewInput<R: Record> {
    Category(R::Category),
    Search(String),
    Page(usize),
    PageSize(usize),
    Mutate { id: RecordId, mutation: R::Mutation },
}

impl<R: Record> ViewInput<R> {
    pub fn validate(&self) -> Result<(), AppError> {
        match self {
            ViewInput::PageSize(0) => Err(AppError::Validation(
                "Page size must be greater than zero".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

/// Upper bound on distinct records with a deferred mutation.
pub const MAX_PENDING_MUTATIONS: usize = 256;

/// Identifies one load; only the most recent ticket may complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Rendered state handed to the console.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSnapshot<R: Record> {
    pub status: ViewStatus,
    pub revision: u64,
    pub loaded_at: Option<DateTime<Utc>>,
    pub query: ViewQuery<R::Category>,
    pub summary: Summary,
    pub total_filtered: usize,
    pub page_count: usize,
    pub items: Vec<R>,
    /// Deferred mutations, plus one if the pending query differs from `query`
    pub queued_inputs: usize,
}

/// Output of the last derivation.
#[derive(Debug, Clone)]
struct DerivedView<R: Record> {
    query: ViewQuery<R::Category>,
    summary: Summary,
    total_filtered: usize,
    page_count: usize,
    items: Vec<R>,
}

pub struct ViewController<R: Record> {
    store: RecordStore<R>,
    query: ViewQuery<R::Category>,
    status: ViewStatus,
    pending_mutations: Vec<(RecordId, R::Mutation)>,
    load_seq: u64,
    revision: u64,
    loaded_at: Option<DateTime<Utc>>,
    derived: DerivedView<R>,
}

impl<R: Record> ViewController<R> {
    pub fn new(page_size: usize) -> Self {
        let query = ViewQuery::new(page_size);
        Self {
            store: RecordStore::new(),
            derived: DerivedView {
                query: query.clone(),
                summary: Summary::default(),
                total_filtered: 0,
                page_count: 0,
                items: Vec::new(),
            },
            query,
            status: ViewStatus::Idle,
            pending_mutations: Vec::new(),
            load_seq: 0,
            revision: 0,
            loaded_at: None,
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn get(&self, id: RecordId) -> Option<&R> {
        self.store.get(id)
    }

    /// Enter `Loading` and hand out the ticket the completion must present.
    ///
    /// Calling this again while a load is in flight supersedes the earlier one.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.load_seq += 1;
        self.status = ViewStatus::Loading;
        tracing::info!("Loading {} collection (load #{})", R::KIND, self.load_seq);
        LoadTicket(self.load_seq)
    }

    /// Complete the load identified by `ticket`.
    ///
    /// Returns `false` when the ticket was superseded and the result dropped.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Vec<R>, AppError>) -> bool {
        if ticket.0 != self.load_seq {
            tracing::debug!(
                "Discarding stale {} load #{} (current #{})",
                R::KIND,
                ticket.0,
                self.load_seq
            );
            return false;
        }

        match result {
            Ok(records) => {
                self.store.replace(records);
                tracing::info!("Loaded {} {} records", self.store.len(), R::KIND);
                self.loaded_at = Some(Utc::now());
                self.status = ViewStatus::Ready;

                let pending = std::mem::take(&mut self.pending_mutations);
                if !pending.is_empty() {
                    tracing::debug!("Replaying {} deferred {} mutations", pending.len(), R::KIND);
                }
                for (id, mutation) in pending {
                    self.store.apply(id, &mutation);
                }
                self.derive();
            }
            Err(e) => {
                tracing::warn!("Loading {} records failed: {}", R::KIND, e);
                self.status = ViewStatus::Failed {
                    message: e.message(),
                };
            }
        }
        true
    }

    /// Accept a single user input. See [`ViewController::apply_all`].
    pub fn apply(&mut self, input: ViewInput<R>) -> Result<(), AppError> {
        self.apply_all(vec![input])
    }

    /// Accept a batch of inputs, all or nothing.
    ///
    /// In `Ready` the batch takes effect immediately and is derived once. In any
    /// other state query inputs fold into the pending query and mutations are
    /// deferred until the next load completes; the current view stays as is.
    pub fn apply_all(&mut self, inputs: Vec<ViewInput<R>>) -> Result<(), AppError> {
        for input in &inputs {
            input.validate()?;
        }

        let ready = self.status == ViewStatus::Ready;
        if !ready {
            self.check_pending_capacity(&inputs)?;
            tracing::debug!("Deferring {:?} while {} view is {:?}", inputs, R::KIND, self.status);
        }

        for input in inputs {
            self.apply_input(input, ready);
        }
        if ready {
            self.derive();
        }
        Ok(())
    }

    pub fn snapshot(&self) -> ViewSnapshot<R> {
        ViewSnapshot {
            status: self.status.clone(),
            revision: self.revision,
            loaded_at: self.loaded_at,
            query: self.derived.query.clone(),
            summary: self.derived.summary.clone(),
            total_filtered: self.derived.total_filtered,
            page_count: self.derived.page_count,
            items: self.derived.items.clone(),
            queued_inputs: self.pending_mutations.len()
                + usize::from(self.query != self.derived.query),
        }
    }

    fn check_pending_capacity(&self, inputs: &[ViewInput<R>]) -> Result<(), AppError> {
        let new_ids: BTreeSet<RecordId> = inputs
            .iter()
            .filter_map(|input| match input {
                ViewInput::Mutate { id, .. } => Some(*id),
                _ => None,
            })
            .filter(|id| !self.pending_mutations.iter().any(|(pending, _)| pending == id))
            .collect();

        if self.pending_mutations.len() + new_ids.len() > MAX_PENDING_MUTATIONS {
            return Err(AppError::Validation(format!(
                "Too many pending {} changes while the view is not ready",
                R::KIND
            )));
        }
        Ok(())
    }

    fn apply_input(&mut self, input: ViewInput<R>, ready: bool) {
        match input {
            ViewInput::Category(category) => {
                if category != self.query.category {
                    self.query.category = category;
                    self.query.page = 0;
                }
            }
            ViewInput::Search(search) => {
                if search != self.query.search {
                    self.query.search = search;
                    self.query.page = 0;
                }
            }
            ViewInput::Page(page) => self.query.page = page,
            ViewInput::PageSize(page_size) => {
                self.query.page_size = page_size;
                self.query.page = 0;
            }
            ViewInput::Mutate { id, mutation } if ready => {
                self.store.apply(id, &mutation);
            }
            ViewInput::Mutate { id, mutation } => {
                self.pending_mutations.retain(|(pending, _)| *pending != id);
                self.pending_mutations.push((id, mutation));
            }
        }
    }

    fn derive(&mut self) {
        let records = self.store.records();
        let filtered = filter_records(records, self.query.category, &self.query.search);

        self.query.page = self
            .query
            .page
            .min(last_page(filtered.len(), self.query.page_size));
        let (page, bounds) = paginate(&filtered, self.query.page, self.query.page_size);

        self.derived = DerivedView {
            query: self.query.clone(),
            summary: summarize(records),
            total_filtered: bounds.total,
            page_count: bounds.page_count,
            items: page.iter().map(|r| (*r).clone()).collect(),
        };
        self.revision += 1;
    }
}
