pub mod selection;
pub mod time;
pub mod tls;

pub use selection::{Commodity, HistoryParams, Interval, Period, Timeframe, resolve_ticker};
