//! Contingency table construction.
//!
//! Converts two positionally paired sequences (true labels and predicted
//! categories) into a G×P count matrix plus the value-to-index maps needed
//! to label its rows and columns.

pub mod builder;
pub mod index;
pub mod table;

pub use builder::{
    build_contingency, build_contingency_ordered, build_contingency_sorted,
    build_contingency_weighted,
};
pub use index::CategoryIndex;
pub use table::ContingencyTable;
pub(crate) use table::validate_cells;
