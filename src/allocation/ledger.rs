//! 容量账本
//!
//! 记录课程两个可拆分总量（学生数、课时量）以及按其中一个维度分出去的额外分配。
//! 同一时刻只拆分一个维度：额外分配行的另一个维度始终等于课程原始值，
//! 原任课教师（基础行）得到当前维度的剩余量 `max(原始值 - 已分配, 0)`。

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::course_requests::requests::AllocationEntry;

/// 当前拆分的维度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    #[default]
    Students,
    Quantity,
}

impl Dimension {
    /// 用于提示文本的单位
    pub fn unit(&self) -> &'static str {
        match self {
            Dimension::Students => "students",
            Dimension::Quantity => "periods",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Students => write!(f, "students"),
            Dimension::Quantity => write!(f, "quantity"),
        }
    }
}

/// 课程原始总量
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CourseTotals {
    pub students: u32,
    pub quantity: u32,
}

impl CourseTotals {
    pub fn new(students: u32, quantity: u32) -> Self {
        Self { students, quantity }
    }

    /// 从数据库可空列构造，空值和负数都按 0 处理
    pub fn from_columns(number_student: Option<i32>, quantity: Option<i32>) -> Self {
        let clamp = |value: Option<i32>| value.map_or(0, |v| u32::try_from(v).unwrap_or(0));
        Self {
            students: clamp(number_student),
            quantity: clamp(quantity),
        }
    }

    pub fn get(&self, dimension: Dimension) -> u32 {
        match dimension {
            Dimension::Students => self.students,
            Dimension::Quantity => self.quantity,
        }
    }
}

/// 分给其他教师的一行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraAllocation {
    pub teacher_id: String,
    pub teacher_name: String,
    pub students: u32,
    pub quantity: u32,
}

impl ExtraAllocation {
    pub fn get(&self, dimension: Dimension) -> u32 {
        match dimension {
            Dimension::Students => self.students,
            Dimension::Quantity => self.quantity,
        }
    }

    /// 转为提交给服务端的分配项
    pub fn to_entry(&self) -> AllocationEntry {
        AllocationEntry {
            teacher_id: self.teacher_id.clone(),
            number_student: to_column(self.students),
            quantity: to_column(self.quantity),
        }
    }
}

// 账本中的值都不超过来自 i32 列的原始总量
fn to_column(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// 展示用的分配行（基础行 + 额外行）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocationRow {
    pub teacher_id: String,
    pub teacher_name: String,
    pub students: u32,
    pub quantity: u32,
    pub is_original: bool,
}

/// 账本操作错误，只用于提示用户，不会改变账本状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    MissingTeacher,
    UnknownTeacher(String),
    DuplicateTeacher(String),
    NonPositiveValue,
    CapacityExhausted(Dimension),
    ExceedsRemaining {
        dimension: Dimension,
        requested: u32,
        remaining: u32,
    },
    InvalidIndex(usize),
    NothingToSubmit,
    BatchExceedsCapacity {
        students: u64,
        quantity: u64,
        totals: CourseTotals,
    },
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerError::MissingTeacher => write!(f, "Please select a teacher to add"),
            LedgerError::UnknownTeacher(id) => write!(f, "Teacher {id} could not be found"),
            LedgerError::DuplicateTeacher(id) => {
                write!(f, "Teacher {id} already has an allocation on this course")
            }
            LedgerError::NonPositiveValue => write!(f, "Please enter a value greater than 0"),
            LedgerError::CapacityExhausted(dimension) => {
                write!(f, "All {} have already been allocated", dimension.unit())
            }
            LedgerError::ExceedsRemaining {
                dimension,
                requested,
                remaining,
            } => write!(
                f,
                "Requested {requested} {} exceeds the remaining {remaining}",
                dimension.unit()
            ),
            LedgerError::InvalidIndex(index) => write!(f, "No allocation row at index {index}"),
            LedgerError::NothingToSubmit => {
                write!(f, "Add at least one teacher before submitting a request")
            }
            LedgerError::BatchExceedsCapacity {
                students,
                quantity,
                totals,
            } => write!(
                f,
                "Requested allocations ({students} students, {quantity} periods) exceed the course totals ({} students, {} periods)",
                totals.students, totals.quantity
            ),
        }
    }
}

impl std::error::Error for LedgerError {}

/// 容量账本
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityLedger {
    totals: CourseTotals,
    dimension: Dimension,
    extras: Vec<ExtraAllocation>,
}

impl CapacityLedger {
    pub fn new(totals: CourseTotals) -> Self {
        Self {
            totals,
            dimension: Dimension::default(),
            extras: Vec::new(),
        }
    }

    pub fn totals(&self) -> CourseTotals {
        self.totals
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn extras(&self) -> &[ExtraAllocation] {
        &self.extras
    }

    pub fn is_empty(&self) -> bool {
        self.extras.is_empty()
    }

    /// 切换维度会清空所有额外分配，两种维度的部分分配不能互相转换
    pub fn select_dimension(&mut self, dimension: Dimension) {
        self.dimension = dimension;
        self.extras.clear();
    }

    /// 当前维度已分配的总量，`excluding` 指定的行不计入
    pub fn allocated(&self, excluding: Option<usize>) -> u64 {
        self.extras
            .iter()
            .enumerate()
            .filter(|(idx, _)| Some(*idx) != excluding)
            .map(|(_, row)| u64::from(row.get(self.dimension)))
            .sum()
    }

    /// 当前维度剩余容量，最小为 0
    pub fn remaining(&self, excluding: Option<usize>) -> u32 {
        let original = u64::from(self.totals.get(self.dimension));
        let left = original.saturating_sub(self.allocated(excluding));
        u32::try_from(left).unwrap_or(u32::MAX)
    }

    /// 是否已有该教师的分配（`excluding` 指定的行除外）
    pub fn contains_teacher(&self, teacher_id: &str, excluding: Option<usize>) -> bool {
        self.extras
            .iter()
            .enumerate()
            .any(|(idx, row)| Some(idx) != excluding && row.teacher_id == teacher_id)
    }

    /// 新增（`index` 为 None）或替换一行
    pub fn upsert(
        &mut self,
        index: Option<usize>,
        teacher_id: &str,
        teacher_name: &str,
        value: u32,
    ) -> Result<(), LedgerError> {
        if let Some(idx) = index
            && idx >= self.extras.len()
        {
            return Err(LedgerError::InvalidIndex(idx));
        }
        if teacher_id.is_empty() {
            return Err(LedgerError::MissingTeacher);
        }
        if self.contains_teacher(teacher_id, index) {
            return Err(LedgerError::DuplicateTeacher(teacher_id.to_string()));
        }

        let remaining = self.remaining(index);
        if remaining == 0 {
            return Err(LedgerError::CapacityExhausted(self.dimension));
        }
        if value == 0 {
            return Err(LedgerError::NonPositiveValue);
        }
        if value > remaining {
            return Err(LedgerError::ExceedsRemaining {
                dimension: self.dimension,
                requested: value,
                remaining,
            });
        }

        let (students, quantity) = match self.dimension {
            Dimension::Students => (value, self.totals.quantity),
            Dimension::Quantity => (self.totals.students, value),
        };
        let row = ExtraAllocation {
            teacher_id: teacher_id.to_string(),
            teacher_name: teacher_name.to_string(),
            students,
            quantity,
        };

        match index {
            Some(idx) => self.extras[idx] = row,
            None => self.extras.push(row),
        }
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<ExtraAllocation, LedgerError> {
        if index >= self.extras.len() {
            return Err(LedgerError::InvalidIndex(index));
        }
        Ok(self.extras.remove(index))
    }

    /// 基础行（原任课教师）的 (学生数, 课时量)
    pub fn base_values(&self) -> (u32, u32) {
        let remaining = self.remaining(None);
        match self.dimension {
            Dimension::Students => (remaining, self.totals.quantity),
            Dimension::Quantity => (self.totals.students, remaining),
        }
    }

    pub fn entries(&self) -> Vec<AllocationEntry> {
        self.extras.iter().map(ExtraAllocation::to_entry).collect()
    }

    /// 分配进度提示
    pub fn summary(&self) -> String {
        format!(
            "Allocated {} / {} {}, {} remaining",
            self.allocated(None),
            self.totals.get(self.dimension),
            self.dimension.unit(),
            self.remaining(None)
        )
    }
}

/// 服务端复核：整批必须是沿单一维度的拆分
///
/// 按学生数拆分时每行课时量等于原始值，学生数合计不超过原始值；
/// 按课时量拆分时反之。这与编辑器生成的内容一致。
pub fn validate_batch(totals: CourseTotals, entries: &[AllocationEntry]) -> Result<(), LedgerError> {
    let clamp = |value: i32| u64::try_from(value).unwrap_or(0);
    let students: u64 = entries.iter().map(|e| clamp(e.number_student)).sum();
    let quantity: u64 = entries.iter().map(|e| clamp(e.quantity)).sum();
    let total_students = u64::from(totals.students);
    let total_quantity = u64::from(totals.quantity);

    let split_by_students = entries
        .iter()
        .all(|e| clamp(e.quantity) == total_quantity)
        && students <= total_students;
    let split_by_quantity = entries
        .iter()
        .all(|e| clamp(e.number_student) == total_students)
        && quantity <= total_quantity;

    if split_by_students || split_by_quantity {
        Ok(())
    } else {
        Err(LedgerError::BatchExceedsCapacity {
            students,
            quantity,
            totals,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger() -> CapacityLedger {
        CapacityLedger::new(CourseTotals::new(60, 30))
    }

    #[test]
    fn test_add_by_students_pins_quantity() {
        let mut ledger = ledger();
        ledger.upsert(None, "T1", "Teacher X", 20).unwrap();

        assert_eq!(ledger.base_values(), (40, 30));
        assert_eq!(ledger.extras()[0].students, 20);
        assert_eq!(ledger.extras()[0].quantity, 30);
    }

    #[test]
    fn test_add_by_quantity_pins_students() {
        let mut ledger = ledger();
        ledger.select_dimension(Dimension::Quantity);
        ledger.upsert(None, "T1", "Teacher X", 12).unwrap();

        assert_eq!(ledger.base_values(), (60, 18));
        assert_eq!(ledger.extras()[0].students, 60);
        assert_eq!(ledger.extras()[0].quantity, 12);
    }

    #[test]
    fn test_exact_remaining_is_accepted() {
        let mut ledger = ledger();
        ledger.upsert(None, "T1", "A", 60).unwrap();
        assert_eq!(ledger.base_values(), (0, 30));
        assert_eq!(
            ledger.upsert(None, "T2", "B", 1),
            Err(LedgerError::CapacityExhausted(Dimension::Students))
        );
    }

    #[test]
    fn test_rejected_add_leaves_state_unchanged() {
        let mut ledger = ledger();
        ledger.upsert(None, "T1", "A", 50).unwrap();
        let before = ledger.clone();

        assert_eq!(
            ledger.upsert(None, "T2", "B", 11),
            Err(LedgerError::ExceedsRemaining {
                dimension: Dimension::Students,
                requested: 11,
                remaining: 10,
            })
        );
        assert_eq!(ledger.upsert(None, "T2", "B", 0), Err(LedgerError::NonPositiveValue));
        assert_eq!(
            ledger.upsert(None, "T1", "A", 5),
            Err(LedgerError::DuplicateTeacher("T1".to_string()))
        );
        assert_eq!(ledger.upsert(None, "", "", 5), Err(LedgerError::MissingTeacher));
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_editing_row_excludes_its_own_value() {
        let mut ledger = ledger();
        ledger.upsert(None, "T1", "A", 40).unwrap();
        ledger.upsert(None, "T2", "B", 20).unwrap();

        assert_eq!(ledger.remaining(None), 0);
        assert_eq!(ledger.remaining(Some(0)), 40);

        // 编辑自己那一行时可以保持或调整数值，也不算重复教师
        ledger.upsert(Some(0), "T1", "A", 40).unwrap();
        ledger.upsert(Some(1), "T2", "B", 5).unwrap();
        assert_eq!(ledger.remaining(Some(0)), 55);
        ledger.upsert(Some(0), "T1", "A", 55).unwrap();
        assert_eq!(ledger.base_values(), (0, 30));
    }

    #[test]
    fn test_switching_dimension_clears_extras() {
        let mut ledger = ledger();
        ledger.upsert(None, "T1", "A", 10).unwrap();
        ledger.select_dimension(Dimension::Quantity);
        assert!(ledger.is_empty());
        assert_eq!(ledger.remaining(None), 30);

        ledger.upsert(None, "T1", "A", 10).unwrap();
        ledger.select_dimension(Dimension::Quantity);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_remaining_is_clamped_at_zero() {
        let mut ledger = CapacityLedger::new(CourseTotals::new(0, 0));
        assert_eq!(ledger.remaining(None), 0);
        assert_eq!(
            ledger.upsert(None, "T1", "A", 1),
            Err(LedgerError::CapacityExhausted(Dimension::Students))
        );
        assert_eq!(ledger.base_values(), (0, 0));
    }

    #[test]
    fn test_remove_and_invalid_index() {
        let mut ledger = ledger();
        ledger.upsert(None, "T1", "A", 10).unwrap();
        assert_eq!(ledger.remove(3), Err(LedgerError::InvalidIndex(3)));
        assert_eq!(
            ledger.upsert(Some(4), "T9", "Z", 1),
            Err(LedgerError::InvalidIndex(4))
        );
        let removed = ledger.remove(0).unwrap();
        assert_eq!(removed.teacher_id, "T1");
        assert_eq!(ledger.remaining(None), 60);
    }

    #[test]
    fn test_students_sum_never_exceeds_total() {
        // 固定种子的操作序列：随机新增 / 编辑 / 删除
        let mut ledger = ledger();
        let mut seed: u64 = 0x5eed;
        let mut next = move |bound: u64| {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (seed >> 33) % bound
        };

        for step in 0..500 {
            let before = ledger.clone();
            let op = next(3);
            let teacher = format!("T{}", next(8));
            let value = next(40) as u32;
            let result = match op {
                0 => ledger.upsert(None, &teacher, &teacher, value),
                1 if !ledger.is_empty() => {
                    let idx = next(ledger.extras().len() as u64) as usize;
                    ledger.upsert(Some(idx), &teacher, &teacher, value)
                }
                _ if !ledger.is_empty() => {
                    let idx = next(ledger.extras().len() as u64) as usize;
                    ledger.remove(idx).map(|_| ())
                }
                _ => Ok(()),
            };

            if result.is_err() {
                assert_eq!(ledger, before, "rejected step {step} mutated the ledger");
            }
            assert!(ledger.allocated(None) <= 60, "step {step} over-allocated");
            assert!(ledger.extras().iter().all(|row| row.quantity == 30));
        }
    }

    #[test]
    fn test_summary_text() {
        let mut ledger = ledger();
        ledger.upsert(None, "T1", "A", 15).unwrap();
        assert_eq!(ledger.summary(), "Allocated 15 / 60 students, 45 remaining");
    }

    #[test]
    fn test_totals_from_columns() {
        assert_eq!(
            CourseTotals::from_columns(Some(60), None),
            CourseTotals::new(60, 0)
        );
        assert_eq!(
            CourseTotals::from_columns(Some(-3), Some(12)),
            CourseTotals::new(0, 12)
        );
    }

    #[test]
    fn test_validate_batch() {
        let totals = CourseTotals::new(60, 30);
        let entry = |students: i32, quantity: i32| AllocationEntry {
            teacher_id: "T1".to_string(),
            number_student: students,
            quantity,
        };

        // 按学生数拆分：每行课时量等于原始值
        assert!(validate_batch(totals, &[entry(20, 30), entry(40, 30)]).is_ok());
        // 按课时量拆分
        assert!(validate_batch(totals, &[entry(60, 10), entry(60, 20)]).is_ok());
        // 两个维度合计都超出
        assert!(validate_batch(totals, &[entry(40, 30), entry(40, 30)]).is_err());
        // 单行超出原始值
        assert!(validate_batch(totals, &[entry(61, 1)]).is_err());
        // 两个维度都没有固定为原始值
        assert!(validate_batch(totals, &[entry(10, 10), entry(10, 10)]).is_err());
        // 混合维度
        assert!(validate_batch(totals, &[entry(20, 30), entry(60, 10)]).is_err());
    }
}
