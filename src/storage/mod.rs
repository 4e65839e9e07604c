use std::sync::Arc;

use crate::models::{
    course_requests::{entities::CourseRequestRecord, requests::AllocationEntry},
    courses::{entities::Course, responses::CourseRow},
    teachers::{
        entities::{CreateTeacher, Department, Teacher},
        responses::TeacherSummary,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

/// 课程查询范围（由调用者角色决定）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseScope {
    All,
    Department(i32),
    Teacher(String),
    /// 不返回任何行
    Nothing,
}

/// 教师查询范围
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeacherScope {
    All,
    Department(i32),
    Nothing,
}

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 教师管理方法
    // 通过邮箱获取教师（邮箱已规范化为小写）
    async fn get_teacher_by_email(&self, email: &str) -> Result<Option<Teacher>>;
    // 统计教师数量
    async fn count_teachers(&self) -> Result<u64>;
    // 创建教师
    async fn create_teacher(&self, teacher: CreateTeacher) -> Result<Teacher>;
    // 查找该教师担任主任的院系
    async fn find_headed_department(&self, teacher_id: &str) -> Result<Option<Department>>;
    // 列出教师，按姓名排序
    async fn list_teachers(&self, scope: TeacherScope) -> Result<Vec<TeacherSummary>>;
    // 批量获取教师
    async fn get_teachers_by_ids(&self, ids: &[String]) -> Result<Vec<Teacher>>;

    /// 课程方法
    // 本科课程看板（关联科目、技能、教师名称）
    async fn list_undergraduate_courses(&self, scope: CourseScope) -> Result<Vec<CourseRow>>;
    // 通过ID获取课程
    async fn get_course_by_id(&self, course_id: i32) -> Result<Option<Course>>;

    /// 调整申请方法
    // 一次批量插入全部申请，返回插入条数
    async fn create_course_requests(
        &self,
        course_id: i32,
        entries: Vec<AllocationEntry>,
    ) -> Result<u64>;
    // 列出课程的全部申请，按创建时间升序
    async fn list_course_requests(&self, course_id: i32) -> Result<Vec<CourseRequestRecord>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
