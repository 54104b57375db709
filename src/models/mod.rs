//! 传输记录
//!
//! 在服务层与接口层之间搬运数据的纯数据结构，不含业务逻辑。

pub mod classes;
pub mod common;
pub(crate) mod record;
pub mod rooms;

pub use classes::{ClassRecord, ClassRoomsResponse};
pub use common::OffsetTimestamp;
pub use rooms::RoomRecord;
