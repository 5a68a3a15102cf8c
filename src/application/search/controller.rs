// SPDX-License-Identifier: MPL-2.0
//! Search and pagination state machine.
//!
//! The [`Controller`] owns every piece of search state (query, accumulated
//! results, next page, server total, selected image) and moves between the
//! [`Phase`]s in response to [`Event`]s. It never performs I/O: each call to
//! [`Controller::handle`] returns the [`Effect`]s the caller must carry out,
//! such as issuing a fetch or showing a notification.
//!
//! Every issued fetch is tagged with a [`FetchTicket`]. A completion whose
//! ticket no longer matches the in-flight one (because a new query was
//! submitted meanwhile) is dropped without touching the state.

use crate::domain::search::{ImageResult, Page, SearchPage, SearchQuery, TotalCount};
use crate::error::SearchRequestError;

/// Primary state of the search cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No query submitted yet.
    #[default]
    Idle,
    /// A page request is in flight.
    Fetching,
    /// Results are displayed and more pages exist.
    Ready,
    /// Every matching result is displayed.
    Exhausted,
    /// The last fetch failed; earlier results stay visible.
    Error,
}

/// Identifies one issued fetch: the query generation and the page it targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket {
    generation: u64,
    page: Page,
}

impl FetchTicket {
    /// Page this fetch was issued for.
    #[must_use]
    pub fn page(self) -> Page {
        self.page
    }
}

/// A fetch the caller must perform, reporting back with [`Event::FetchCompleted`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub ticket: FetchTicket,
    pub query: SearchQuery,
    pub page: Page,
}

/// Inputs to the state machine.
#[derive(Debug, Clone)]
pub enum Event {
    /// Raw text submitted from the search input.
    Submit(String),
    /// The load-more control was activated.
    LoadMore,
    /// A fetch finished.
    FetchCompleted {
        ticket: FetchTicket,
        outcome: Result<SearchPage, SearchRequestError>,
    },
    /// A gallery item was activated.
    SelectImage(ImageResult),
    /// The preview overlay was dismissed.
    DismissOverlay,
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue a request for one page.
    Fetch(FetchRequest),
    /// The result set was emptied for a new query.
    ResultsCleared,
    /// Results were appended to the result set, in order.
    ResultsAppended(Vec<ImageResult>),
    /// First page of a query arrived; tell the user how many matches exist.
    Announce(TotalCount),
    /// A fetch failed.
    ReportError(SearchRequestError),
    /// An image was selected for full-size display.
    ShowPreview(ImageResult),
}

/// Owner of all search state.
#[derive(Debug, Clone, Default)]
pub struct Controller {
    phase: Phase,
    query: Option<SearchQuery>,
    results: Vec<ImageResult>,
    /// Next page to fetch.
    page: Page,
    total: TotalCount,
    selected: Option<ImageResult>,
    generation: u64,
    in_flight: Option<FetchTicket>,
}

impl Controller {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one event and returns the effects to perform, in order.
    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::Submit(raw) => self.submit(&raw),
            Event::LoadMore => self.load_more(),
            Event::FetchCompleted { ticket, outcome } => self.complete(ticket, outcome),
            Event::SelectImage(image) => {
                self.selected = Some(image.clone());
                vec![Effect::ShowPreview(image)]
            }
            Event::DismissOverlay => {
                self.selected = None;
                Vec::new()
            }
        }
    }

    fn submit(&mut self, raw: &str) -> Vec<Effect> {
        let Some(query) = SearchQuery::parse(raw) else {
            return Vec::new();
        };

        if let Some(pending) = self.in_flight {
            tracing::debug!(page = pending.page.value(), "pending fetch superseded by new query");
        }

        self.results.clear();
        self.page = Page::FIRST;
        self.total = TotalCount::default();
        self.generation = self.generation.wrapping_add(1);
        self.query = Some(query.clone());

        vec![Effect::ResultsCleared, Effect::Fetch(self.start_fetch(query))]
    }

    fn load_more(&mut self) -> Vec<Effect> {
        if !self.load_more_visible() {
            return Vec::new();
        }
        let Some(query) = self.query.clone() else {
            return Vec::new();
        };
        vec![Effect::Fetch(self.start_fetch(query))]
    }

    fn start_fetch(&mut self, query: SearchQuery) -> FetchRequest {
        let ticket = FetchTicket {
            generation: self.generation,
            page: self.page,
        };
        self.in_flight = Some(ticket);
        self.phase = Phase::Fetching;
        FetchRequest {
            ticket,
            query,
            page: self.page,
        }
    }

    fn complete(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<SearchPage, SearchRequestError>,
    ) -> Vec<Effect> {
        if self.in_flight != Some(ticket) {
            tracing::debug!(page = ticket.page.value(), "discarding stale search response");
            return Vec::new();
        }
        self.in_flight = None;

        let page = match outcome {
            Ok(page) => page,
            Err(err) => {
                self.phase = Phase::Error;
                return vec![Effect::ReportError(err)];
            }
        };

        let received = page.results.len();
        let reported = page.total;
        self.results.extend(page.results.iter().cloned());
        self.total = reported;
        if received == 0 && !self.total.is_covered_by(self.results.len()) {
            // An empty page means the server has nothing further to give.
            self.total = TotalCount::new(self.results.len() as u64);
        }
        self.page = self.page.next();
        self.phase = if self.total.is_covered_by(self.results.len()) {
            Phase::Exhausted
        } else {
            Phase::Ready
        };

        let mut effects = Vec::with_capacity(2);
        if received > 0 {
            effects.push(Effect::ResultsAppended(page.results));
        }
        if ticket.page.is_first() {
            // Announce what the server reported, not the clamped total.
            effects.push(Effect::Announce(reported));
        }
        effects
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn query(&self) -> Option<&SearchQuery> {
        self.query.as_ref()
    }

    #[must_use]
    pub fn results(&self) -> &[ImageResult] {
        &self.results
    }

    /// Next page that will be fetched.
    #[must_use]
    pub fn page(&self) -> Page {
        self.page
    }

    #[must_use]
    pub fn total(&self) -> TotalCount {
        self.total
    }

    #[must_use]
    pub fn selected(&self) -> Option<&ImageResult> {
        self.selected.as_ref()
    }

    /// Whether a fetch is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Ticket of the fetch currently in flight.
    #[must_use]
    pub fn in_flight(&self) -> Option<FetchTicket> {
        self.in_flight
    }

    /// Whether the load-more control should be offered.
    #[must_use]
    pub fn load_more_visible(&self) -> bool {
        !self.is_loading()
            && !self.results.is_empty()
            && !self.total.is_covered_by(self.results.len())
    }

    /// Whether the preview overlay is shown.
    #[must_use]
    pub fn overlay_visible(&self) -> bool {
        self.selected.is_some()
    }
}
