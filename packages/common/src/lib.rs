pub mod error;
pub mod id;
pub mod notice;

pub use error::CommonError;
pub use id::new_item_id;
pub use notice::{Notice, NoticeLevel};
