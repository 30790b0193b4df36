//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is kept in plain structs so the form's contract can be tested
//! natively; components hold them inside `RwSignal`s.

pub mod form;
