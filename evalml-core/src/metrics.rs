mod accuracy;
mod classification_report;
mod confusion;
mod metric;
mod metric_registry;
mod weighted_f1;

pub use accuracy::*;
pub use classification_report::*;
pub use confusion::*;
pub use metric::*;
pub use metric_registry::*;
pub use weighted_f1::*;
