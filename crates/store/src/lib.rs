//! In-memory persistence for Formpulse.
//!
//! Mirrors the repository layout a database-backed implementation would
//! use: DTOs under `models`, operations under `repositories`. Surveys
//! and responses live in `tokio::sync::RwLock`-guarded collections;
//! every read hands out a clone and every write replaces the stored
//! value wholesale, so callers never observe partial mutations.

pub mod models;
pub mod repositories;
pub mod seed;

use std::collections::HashMap;

use tokio::sync::RwLock;

use formpulse_core::response::Response;
use formpulse_core::survey::Survey;
use formpulse_core::types::EntityId;

/// The shared in-memory store. Wrap in an `Arc` to share.
#[derive(Debug, Default)]
pub struct Store {
    pub(crate) surveys: RwLock<HashMap<EntityId, Survey>>,
    pub(crate) responses: RwLock<Vec<Response>>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}
