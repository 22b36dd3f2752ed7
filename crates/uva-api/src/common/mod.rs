pub mod telemetry;

pub use uva_api_common::Colors;
pub use uva_api_common::color_init;
