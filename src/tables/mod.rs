mod input;
mod output;
mod table_error;

pub use input::read_url_column;
pub use output::{column_order, write_records};
pub use table_error::TableError;
