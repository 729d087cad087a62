pub mod batch;
pub mod format;
pub mod mgrs_cell;
pub mod record;
pub mod utm_cell;

pub use batch::ToMgrs;
pub use format::{MgrsFormat, Separator};
pub use mgrs_cell::MgrsCell;
pub use record::{MgrsRecord, UtmRecord};
pub use utm_cell::UtmCell;
