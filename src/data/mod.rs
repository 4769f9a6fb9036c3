/// Data layer: numeric rows, parsing, and file loading.
///
/// Architecture:
/// ```text
///   data.csv / scalings.csv / xbar.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  read file, skip blank lines
///   └──────────┘
///        │  one line at a time
///        ▼
///   ┌──────────┐
///   │  parser   │  comma or whitespace → Vec<f64>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Matrix   │  Vec<NumericRow>, possibly ragged
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod parser;
