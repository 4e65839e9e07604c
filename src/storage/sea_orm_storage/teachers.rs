//! 教师与院系存储操作

use super::SeaOrmStorage;
use crate::entity::departments::{Column as DepartmentColumn, Entity as Departments};
use crate::entity::teachers::{ActiveModel, Column, Entity as Teachers};
use crate::errors::{CourseLoadError, Result};
use crate::models::teachers::{
    entities::{CreateTeacher, Department, Teacher},
    responses::TeacherSummary,
};
use crate::storage::TeacherScope;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 通过邮箱获取教师
    pub async fn get_teacher_by_email_impl(&self, email: &str) -> Result<Option<Teacher>> {
        let result = Teachers::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| CourseLoadError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    /// 统计教师数量
    pub async fn count_teachers_impl(&self) -> Result<u64> {
        let count = Teachers::find()
            .count(&self.db)
            .await
            .map_err(|e| CourseLoadError::database_operation(format!("统计教师数量失败: {e}")))?;

        Ok(count)
    }

    /// 创建教师
    pub async fn create_teacher_impl(&self, req: CreateTeacher) -> Result<Teacher> {
        let model = ActiveModel {
            id: Set(req.id),
            name: Set(req.name),
            email: Set(Some(req.email)),
            password_hash: Set(Some(req.password_hash)),
            department_id: Set(req.department_id),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CourseLoadError::database_operation(format!("创建教师失败: {e}")))?;

        Ok(result.into_teacher())
    }

    /// 查找教师担任主任的院系
    pub async fn find_headed_department_impl(&self, teacher_id: &str) -> Result<Option<Department>> {
        let result = Departments::find()
            .filter(DepartmentColumn::HeadId.eq(teacher_id))
            .order_by_asc(DepartmentColumn::Id)
            .one(&self.db)
            .await
            .map_err(|e| CourseLoadError::database_operation(format!("查询院系失败: {e}")))?;

        Ok(result.map(|m| m.into_department()))
    }

    /// 按范围列出教师
    pub async fn list_teachers_impl(&self, scope: TeacherScope) -> Result<Vec<TeacherSummary>> {
        let mut select = Teachers::find();

        match scope {
            TeacherScope::All => {}
            TeacherScope::Department(department_id) => {
                select = select.filter(Column::DepartmentId.eq(department_id));
            }
            TeacherScope::Nothing => return Ok(Vec::new()),
        }

        let teachers = select
            .order_by_asc(Column::Name)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| CourseLoadError::database_operation(format!("查询教师列表失败: {e}")))?;

        Ok(teachers
            .into_iter()
            .map(|m| TeacherSummary::from(m.into_teacher()))
            .collect())
    }

    /// 批量获取教师
    pub async fn get_teachers_by_ids_impl(&self, ids: &[String]) -> Result<Vec<Teacher>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let teachers = Teachers::find()
            .filter(Column::Id.is_in(ids.iter().cloned()))
            .all(&self.db)
            .await
            .map_err(|e| CourseLoadError::database_operation(format!("批量查询教师失败: {e}")))?;

        Ok(teachers.into_iter().map(|m| m.into_teacher()).collect())
    }
}
