mod candle;
mod symbol;

pub use candle::{CandlePoint, FormattedSeries, VolumeColor, VolumePoint};
pub use symbol::SymbolRecord;
