mod common;
pub use self::common::{FileType, Query, QueryCommon};

mod registers;
pub use self::registers::{OrderBy, RegistersQuery};

mod tiv;
pub use self::tiv::{Direction, SummarizeBy, TivQuery};
