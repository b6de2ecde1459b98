/// Queue of alerts shown one at a time.
pub mod alert_queue;
pub mod expandable_text;
pub mod progress_ticker;

pub use alert_queue::AlertQueue;
pub use expandable_text::{DEFAULT_MAX_LINES, ExpandableText};
pub use progress_ticker::{ProgressTicker, PROGRESS_CEILING, PROGRESS_COMPLETE};
