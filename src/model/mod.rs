mod alert;
mod feed;
mod store;
mod trigger;

pub use alert::{AlertError, AlertRecord, Severity};
pub use feed::{AlertFeedView, DEFAULT_FEED_LIMIT, FeedRow, Treatment};
pub use store::AlertStore;
pub use trigger::{Clock, FixedClock, SURGE_MESSAGE, SimulationTrigger, SystemClock};
