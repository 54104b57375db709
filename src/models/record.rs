//! 记录类型定义宏
//!
//! 所有传输记录共用同一套生成规则：
//! - 每个字段都是 `Option<T>`，未设置与零值/空串区分开
//! - `Default` 即无参构造，所有字段未设置
//! - `new(..)` 全参构造
//! - 每个字段一个读取方法与一个 `set_` 写入方法，写入不做任何校验
//! - 结构相等与哈希、TypeScript 类型导出
//! - JSON 字段名与 `Display` 中的标签都取自 `=> "jsonName"`
//! - `Display` 输出 `Type(jsonName=value, ...)`，未设置的字段输出 `null`
//!
//! 字段前的标记决定读取方法的返回形式：`copy` 按值返回 `Option<T>`，
//! `deref` 返回 `Option<&T::Target>`（例如 `String` 返回 `Option<&str>`）。

macro_rules! define_record {
    (
        $(#[$meta:meta])*
        $name:ident, ts = $ts_file:tt {
            $( $kind:ident $field:ident : $ty:ty => $json:tt ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Default,
            PartialEq,
            Eq,
            Hash,
            serde::Serialize,
            serde::Deserialize,
            ts_rs::TS,
        )]
        #[ts(export, export_to = $ts_file)]
        pub struct $name {
            $(
                #[serde(rename = $json)]
                $field: Option<$ty>,
            )*
        }

        impl $name {
            #[allow(clippy::too_many_arguments)]
            pub fn new($( $field: Option<$ty> ),*) -> Self {
                Self { $( $field ),* }
            }

            $( $crate::models::record::define_record!(@accessors $kind $field : $ty); )*
        }

        impl std::fmt::Display for $name {
            #[allow(unused_assignments)]
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(concat!(stringify!($name), "("))?;
                let mut first = true;
                $(
                    if !first {
                        f.write_str(", ")?;
                    }
                    first = false;
                    f.write_str(concat!($json, "="))?;
                    match &self.$field {
                        Some(value) => write!(f, "{value}")?,
                        None => f.write_str("null")?,
                    }
                )*
                f.write_str(")")
            }
        }
    };

    (@accessors copy $field:ident : $ty:ty) => {
        pub fn $field(&self) -> Option<$ty> {
            self.$field
        }

        paste::paste! {
            pub fn [<set_ $field>](&mut self, value: impl Into<Option<$ty>>) {
                self.$field = value.into();
            }
        }
    };

    (@accessors deref $field:ident : $ty:ty) => {
        pub fn $field(&self) -> Option<&<$ty as std::ops::Deref>::Target> {
            self.$field.as_deref()
        }

        paste::paste! {
            pub fn [<set_ $field>](&mut self, value: impl Into<Option<$ty>>) {
                self.$field = value.into();
            }
        }
    };
}

pub(crate) use define_record;
