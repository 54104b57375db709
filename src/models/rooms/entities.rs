use crate::models::common::OffsetTimestamp;
use crate::models::record::define_record;

define_record! {
    /// 教室（房间）记录，`class_id` 指向所属班级
    RoomRecord, ts = "room.ts" {
        copy room_id: i32 => "roomId",
        deref room_name: String => "roomName",
        copy class_id: i32 => "classId",
        copy active: bool => "active",
        copy created_at: OffsetTimestamp => "createdAt",
    }
}
