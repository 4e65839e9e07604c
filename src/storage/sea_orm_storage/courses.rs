//! 课程存储操作

use std::collections::{HashMap, HashSet};

use super::SeaOrmStorage;
use crate::entity::courses::{Column, Entity as Courses};
use crate::entity::skills::{Column as SkillColumn, Entity as Skills};
use crate::entity::subjects::{Column as SubjectColumn, Entity as Subjects};
use crate::entity::teachers::{Column as TeacherColumn, Entity as Teachers};
use crate::errors::{CourseLoadError, Result};
use crate::models::courses::{entities::Course, responses::CourseRow};
use crate::storage::CourseScope;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

impl SeaOrmStorage {
    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, course_id: i32) -> Result<Option<Course>> {
        let result = Courses::find_by_id(course_id)
            .one(&self.db)
            .await
            .map_err(|e| CourseLoadError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 本科课程看板
    pub async fn list_undergraduate_courses_impl(
        &self,
        scope: CourseScope,
    ) -> Result<Vec<CourseRow>> {
        let mut select = Courses::find();

        match scope {
            CourseScope::All => {}
            CourseScope::Department(department_id) => {
                select = select.filter(Column::DepartmentId.eq(department_id));
            }
            CourseScope::Teacher(teacher_id) => {
                select = select.filter(Column::TeacherId.eq(teacher_id));
            }
            CourseScope::Nothing => return Ok(Vec::new()),
        }

        let courses = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| CourseLoadError::database_operation(format!("查询课程列表失败: {e}")))?;

        // 收集关联 ID 并去重，再各查一次名称（缺失的关联保持为空）
        let subject_ids: HashSet<i32> = courses.iter().filter_map(|c| c.subject_id).collect();
        let skill_ids: HashSet<i32> = courses.iter().filter_map(|c| c.skill_id).collect();
        let teacher_ids: HashSet<String> =
            courses.iter().filter_map(|c| c.teacher_id.clone()).collect();

        let subject_map: HashMap<i32, String> = if subject_ids.is_empty() {
            HashMap::new()
        } else {
            Subjects::find()
                .filter(SubjectColumn::Id.is_in(subject_ids))
                .all(&self.db)
                .await
                .map_err(|e| CourseLoadError::database_operation(format!("查询科目失败: {e}")))?
                .into_iter()
                .map(|s| (s.id, s.name))
                .collect()
        };

        let skill_map: HashMap<i32, String> = if skill_ids.is_empty() {
            HashMap::new()
        } else {
            Skills::find()
                .filter(SkillColumn::Id.is_in(skill_ids))
                .all(&self.db)
                .await
                .map_err(|e| CourseLoadError::database_operation(format!("查询技能失败: {e}")))?
                .into_iter()
                .map(|s| (s.id, s.name))
                .collect()
        };

        let teacher_map: HashMap<String, String> = if teacher_ids.is_empty() {
            HashMap::new()
        } else {
            Teachers::find()
                .filter(TeacherColumn::Id.is_in(teacher_ids))
                .all(&self.db)
                .await
                .map_err(|e| CourseLoadError::database_operation(format!("查询教师失败: {e}")))?
                .into_iter()
                .map(|t| (t.id, t.name))
                .collect()
        };

        Ok(courses
            .into_iter()
            .map(|course| {
                let subject_name = course.subject_id.and_then(|id| subject_map.get(&id).cloned());
                let skill_name = course.skill_id.and_then(|id| skill_map.get(&id).cloned());
                let teacher_name = course
                    .teacher_id
                    .as_ref()
                    .and_then(|id| teacher_map.get(id).cloned());
                course.into_course_row(subject_name, skill_name, teacher_name)
            })
            .collect())
    }
}
