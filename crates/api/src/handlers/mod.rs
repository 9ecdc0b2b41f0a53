pub mod questions;
pub mod responses;
pub mod results;
pub mod surveys;
pub mod take;
