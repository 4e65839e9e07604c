//! 分配编辑器
//!
//! 在容量账本之上维护一次“调整申请”的编辑会话：草稿行、编辑 / 删除、
//! 可选教师列表，以及把结果交给 [`RequestSink`] 提交。

use async_trait::async_trait;
use std::fmt;

use super::ledger::{AllocationRow, CapacityLedger, CourseTotals, Dimension, LedgerError};
use crate::errors::{CourseLoadError, Result};
use crate::models::course_requests::requests::AllocationEntry;
use crate::models::courses::responses::CourseRow;
use crate::models::teachers::responses::TeacherSummary;

/// 调整申请的接收方（HTTP 客户端或服务端的提交服务）
#[async_trait]
pub trait RequestSink: Send + Sync {
    /// 提交一批分配，返回保存的条数
    async fn submit(&self, course_id: i32, entries: Vec<AllocationEntry>) -> Result<u64>;
}

/// 可选教师
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeacherOption {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl TeacherOption {
    /// 显示名：姓名 → 邮箱 → 编号
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or(&self.id)
    }
}

impl From<TeacherSummary> for TeacherOption {
    fn from(summary: TeacherSummary) -> Self {
        Self {
            id: summary.id,
            name: summary.name,
            email: summary.email,
        }
    }
}

/// 编辑会话需要的课程信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseSnapshot {
    pub course_id: i32,
    pub course_name: String,
    pub teacher_id: Option<String>,
    pub teacher_name: Option<String>,
    pub totals: CourseTotals,
}

impl From<&CourseRow> for CourseSnapshot {
    fn from(row: &CourseRow) -> Self {
        Self {
            course_id: row.course_id,
            course_name: row.course_name.clone(),
            teacher_id: row.teacher_id.clone(),
            teacher_name: row.teacher_name.clone(),
            totals: CourseTotals::from_columns(row.number_student, row.quantity),
        }
    }
}

/// 草稿输入
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub teacher_id: String,
    pub value: u32,
    /// 正在编辑的行；None 表示新增
    pub editing: Option<usize>,
}

/// 提交失败原因
#[derive(Debug, Clone)]
pub enum SubmitError {
    /// 本地校验未通过，没有发出请求
    Ledger(LedgerError),
    /// 接收方拒绝，编辑状态保留以便修改后重试
    Rejected(CourseLoadError),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Ledger(err) => write!(f, "{err}"),
            SubmitError::Rejected(err) => write!(f, "{}", err.message()),
        }
    }
}

impl std::error::Error for SubmitError {}

pub struct AllocationEditor {
    course: CourseSnapshot,
    teachers: Vec<TeacherOption>,
    ledger: CapacityLedger,
    draft: Draft,
    open: bool,
}

impl AllocationEditor {
    pub fn new(course: CourseSnapshot, teachers: Vec<TeacherOption>) -> Self {
        let ledger = CapacityLedger::new(course.totals);
        Self {
            course,
            teachers,
            ledger,
            draft: Draft::default(),
            open: false,
        }
    }

    pub fn course(&self) -> &CourseSnapshot {
        &self.course
    }

    pub fn ledger(&self) -> &CapacityLedger {
        &self.ledger
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn dimension(&self) -> Dimension {
        self.ledger.dimension()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// 打开编辑会话，总是从“按学生数”开始
    pub fn open(&mut self) {
        self.reset(Dimension::Students);
        self.open = true;
    }

    /// 关闭会话，未提交的内容直接丢弃
    pub fn close(&mut self) {
        self.reset(Dimension::Students);
        self.open = false;
    }

    fn reset(&mut self, dimension: Dimension) {
        self.ledger.select_dimension(dimension);
        self.draft = Draft::default();
    }

    pub fn select_dimension(&mut self, dimension: Dimension) {
        self.reset(dimension);
    }

    /// 当前草稿可用的剩余容量（编辑中的行不计入已分配）
    pub fn remaining(&self) -> u32 {
        self.ledger.remaining(self.draft.editing)
    }

    fn find_teacher(&self, teacher_id: &str) -> Option<&TeacherOption> {
        self.teachers.iter().find(|t| t.id == teacher_id)
    }

    fn is_original_teacher(&self, teacher_id: &str) -> bool {
        self.course.teacher_id.as_deref() == Some(teacher_id)
    }

    /// 新增或更新草稿对应的行
    pub fn add_or_update(&mut self, teacher_id: &str, value: u32) -> std::result::Result<(), LedgerError> {
        let teacher_id = teacher_id.trim();
        if teacher_id.is_empty() {
            return Err(LedgerError::MissingTeacher);
        }
        let teacher_name = self
            .find_teacher(teacher_id)
            .map(|t| t.display_name().to_string())
            .ok_or_else(|| LedgerError::UnknownTeacher(teacher_id.to_string()))?;
        if self.is_original_teacher(teacher_id) {
            return Err(LedgerError::DuplicateTeacher(teacher_id.to_string()));
        }

        self.ledger
            .upsert(self.draft.editing, teacher_id, &teacher_name, value)?;
        self.draft = Draft::default();
        Ok(())
    }

    /// 把某一行载入草稿
    pub fn edit(&mut self, index: usize) -> std::result::Result<&Draft, LedgerError> {
        let row = self
            .ledger
            .extras()
            .get(index)
            .ok_or(LedgerError::InvalidIndex(index))?;
        self.draft = Draft {
            teacher_id: row.teacher_id.clone(),
            value: row.get(self.ledger.dimension()),
            editing: Some(index),
        };
        Ok(&self.draft)
    }

    pub fn cancel_edit(&mut self) {
        self.draft = Draft::default();
    }

    pub fn remove(&mut self, index: usize) -> std::result::Result<(), LedgerError> {
        self.ledger.remove(index)?;
        self.draft = Draft::default();
        Ok(())
    }

    /// 草稿可选的教师：排除原任课教师和已分配的教师（正在编辑的那位除外）
    pub fn available_teachers(&self) -> Vec<&TeacherOption> {
        self.teachers
            .iter()
            .filter(|t| !t.id.is_empty())
            .filter(|t| !self.is_original_teacher(&t.id))
            .filter(|t| !self.ledger.contains_teacher(&t.id, self.draft.editing))
            .collect()
    }

    fn base_teacher_name(&self) -> String {
        if let Some(name) = &self.course.teacher_name {
            return name.clone();
        }
        match &self.course.teacher_id {
            Some(id) => self
                .find_teacher(id)
                .map(|t| t.display_name().to_string())
                .unwrap_or_else(|| id.clone()),
            None => "Current teacher".to_string(),
        }
    }

    /// 基础行在前，其后是额外分配行
    pub fn rows(&self) -> Vec<AllocationRow> {
        let (students, quantity) = self.ledger.base_values();
        let base = AllocationRow {
            teacher_id: self
                .course
                .teacher_id
                .clone()
                .unwrap_or_else(|| "unassigned".to_string()),
            teacher_name: self.base_teacher_name(),
            students,
            quantity,
            is_original: true,
        };

        std::iter::once(base)
            .chain(self.ledger.extras().iter().map(|row| AllocationRow {
                teacher_id: row.teacher_id.clone(),
                teacher_name: row.teacher_name.clone(),
                students: row.students,
                quantity: row.quantity,
                is_original: false,
            }))
            .collect()
    }

    /// 表格合计行
    pub fn row_totals(&self) -> (u64, u64) {
        self.rows().iter().fold((0, 0), |(s, q), row| {
            (s + u64::from(row.students), q + u64::from(row.quantity))
        })
    }

    /// 生成提交内容；没有额外分配时拒绝
    pub fn payload(&self) -> std::result::Result<Vec<AllocationEntry>, LedgerError> {
        if self.ledger.is_empty() {
            return Err(LedgerError::NothingToSubmit);
        }
        Ok(self.ledger.entries())
    }

    /// 提交：成功后关闭并重置，失败时保留现有状态
    pub async fn submit<S>(&mut self, sink: &S) -> std::result::Result<u64, SubmitError>
    where
        S: RequestSink + ?Sized,
    {
        let payload = self.payload().map_err(SubmitError::Ledger)?;
        let created = sink
            .submit(self.course.course_id, payload)
            .await
            .map_err(SubmitError::Rejected)?;
        self.close();
        Ok(created)
    }
}
