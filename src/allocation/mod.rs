//! 课程工作量拆分
//!
//! - `ledger`: 容量账本（纯逻辑）
//! - `editor`: 基于账本的编辑会话，负责草稿、可选教师和提交

pub mod editor;
pub mod ledger;

pub use editor::{
    AllocationEditor, CourseSnapshot, Draft, RequestSink, SubmitError, TeacherOption,
};
pub use ledger::{
    AllocationRow, CapacityLedger, CourseTotals, Dimension, ExtraAllocation, LedgerError,
    validate_batch,
};
