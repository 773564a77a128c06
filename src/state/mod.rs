//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is kept in plain structs with pure transition methods so the
//! lifecycle logic stays testable without a reactive runtime; the session
//! manager shares them with components as `RwSignal` values via context.

pub mod session;
