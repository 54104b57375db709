use crate::models::common::OffsetTimestamp;
use crate::models::record::define_record;

define_record! {
    /// 班级记录
    ///
    /// 三个字段都可以独立地处于未设置状态，`ClassRecord::default()` 即为全部未设置。
    /// 编号由外部系统分配，本类型不做任何取值校验。
    ClassRecord, ts = "class.ts" {
        copy class_id: i32 => "classId",
        deref class_name: String => "className",
        copy created_at: OffsetTimestamp => "createdAt",
    }
}
