pub mod challenge;
pub mod holding;
pub mod insight;
pub mod instrument;
pub mod personality;
pub mod quiz;
pub mod transaction;
