//! Progressive reveal module
//!
//! Exposes response text character by character and swaps in highlighted
//! markup once a segment is fully visible.
//!
//! ## Architecture
//!
//! ```text
//! Idle → Revealing(i) → SegmentComplete(i) → Revealing(i + 1) … → Done
//!          └──────────── cancel ───────────→ Cancelled(i)
//! ```

mod cadence;
mod controller;
mod driver;
mod session;

pub use cadence::{Cadence, RevealConfig};
pub use controller::RevealController;
pub use driver::drive;
pub use session::{CancelHandle, RevealEvent, RevealSession, RevealState};
