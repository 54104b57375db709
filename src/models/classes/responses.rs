use super::entities::ClassRecord;
use crate::models::rooms::RoomRecord;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 班级及其教室列表
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "class.ts")]
pub struct ClassRoomsResponse {
    pub class_info: ClassRecord,
    pub rooms: Vec<RoomRecord>,
}

impl ClassRoomsResponse {
    pub fn new(class_info: ClassRecord, rooms: Vec<RoomRecord>) -> Self {
        Self { class_info, rooms }
    }
}
