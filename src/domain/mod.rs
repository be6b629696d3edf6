pub mod entities;
pub mod matching;
pub mod reconcile;
