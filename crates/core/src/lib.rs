//! Domain types and pure logic for the Formpulse survey platform.
//!
//! This crate has no I/O and no async: surveys, questions, responses,
//! the response aggregator, and the survey-taking flow are plain values
//! and functions. Persistence lives in `formpulse-store` and the HTTP
//! surface in `formpulse-api`.

pub mod aggregate;
pub mod error;
pub mod response;
pub mod survey;
pub mod taker;
pub mod types;
