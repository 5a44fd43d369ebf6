//! Render/sync collaborator.
//!
//! The rules never touch a UI toolkit. Everything visible goes through a
//! [`RenderSink`]:
//! - Per-card sync and full grid rebuilds
//! - HUD counters and the best-record panel
//! - The peek button and the finish notification
//! - The celebration burst
//!
//! [`RecordingSink`] keeps every call in order, which is all a headless host
//! or a test needs.

mod format;
mod recording;
mod sink;

pub use format::format_clock;
pub use recording::{RecordingSink, RenderCall};
pub use sink::{FinishReport, Hud, PeekButton, RenderSink};
