//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`chat`, `store`) and provided as `RwSignal`
//! contexts so components depend on small focused models. The models
//! themselves come from `chatcore`; these modules only add the draft input
//! and the glue that issues requests.

pub mod chat;
pub mod store;
