mod tiv;
mod transfer;

pub use self::tiv::{TivRow, TivTable};
pub use self::transfer::{ArmsCategory, TransferRecord};
