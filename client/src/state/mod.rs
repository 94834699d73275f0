//! Client-side state models.
//!
//! DESIGN
//! ======
//! State is plain data with mutation methods; pages wrap it in `RwSignal`s.
//! Nothing here touches the network or the DOM, so it is all unit-tested
//! natively. The banner timer takes its sleep future as a parameter for the
//! same reason.

pub mod banner;
pub mod list;
pub mod messages;
