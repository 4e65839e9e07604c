use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 本科课程看板行（课程 + 科目 / 技能 / 教师名称）
#[derive(Debug, Clone, Serialize, Deserialize, TS, PartialEq)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseRow {
    pub course_id: i32,
    pub course_year: String,
    pub semester_name: String,
    pub register_period: Option<String>,
    pub course_name: String,
    pub subject_name: Option<String>,
    pub skill_name: Option<String>,
    pub number_student: Option<i32>,
    pub num_group: Option<i32>,
    pub unit: Option<i32>,
    pub quantity: Option<i32>,
    pub coef: Option<f64>,
    pub coef_cttt: Option<f64>,
    pub coef_far: Option<f64>,
    pub num_out_hours: Option<i32>,
    pub standard_hours: Option<f64>,
    pub note: Option<String>,
    pub teacher_id: Option<String>,
    pub teacher_name: Option<String>,
}
