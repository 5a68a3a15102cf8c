// SPDX-License-Identifier: MPL-2.0
//! Search use case: query submission, pagination and image selection.

mod controller;

pub use controller::{Controller, Effect, Event, FetchRequest, FetchTicket, Phase};
