// SPDX-License-Identifier: MPL-2.0
//! Downloaded image storage.

pub mod store;

pub use store::{ImageKind, ImageSlot, ImageStore};
