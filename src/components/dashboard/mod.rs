//! Dashboard widgets: status summary cards, the workstream table and the
//! sentiment trend panel.

mod sentiment_chart;
mod status_card;
mod workstream_table;

pub use sentiment_chart::SentimentChart;
pub use status_card::StatusCard;
pub use workstream_table::{WorkstreamStatusTable, status_badge_class};
