//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`form`, `summary`, `chat`, `copy`) so each
//! component depends on a small focused model. Every model is a plain value
//! with pure transition methods; components hold them in `RwSignal`s and
//! apply async results through those methods.

pub mod chat;
pub mod copy;
pub mod form;
pub mod summary;
