pub mod entities;
pub mod responses;

pub use entities::ClassRecord;
pub use responses::ClassRoomsResponse;
