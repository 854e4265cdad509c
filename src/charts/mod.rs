pub mod bar;
pub mod doughnut;
pub mod line;
pub mod model;
pub mod overlay;
pub mod radar;

pub use bar::BarChart;
pub use doughnut::DoughnutChart;
pub use line::LineChart;
pub use model::{ChartConfig, ChartDataset, DatasetSeries, InteractionConfig, Scale};
pub use radar::RadarChart;
