pub mod command_line_args;
pub mod error;
pub mod fptree;
pub mod header;
pub mod item;
pub mod itemizer;
pub mod mining;
pub mod transaction_reader;

pub use error::{Error, Result};
pub use fptree::FPTree;
pub use header::HeaderTable;
pub use item::Item;
pub use itemizer::Itemizer;
pub use mining::frequent_itemsets;
pub use transaction_reader::TransactionReader;
