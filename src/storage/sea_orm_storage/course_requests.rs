//! 课程调整申请存储操作

use std::collections::{HashMap, HashSet};

use super::SeaOrmStorage;
use crate::entity::course_requests::{ActiveModel, Column, Entity as CourseRequests};
use crate::entity::teachers::{Column as TeacherColumn, Entity as Teachers};
use crate::errors::{CourseLoadError, Result};
use crate::models::course_requests::{
    entities::CourseRequestRecord, requests::AllocationEntry,
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 批量创建调整申请（单条 INSERT，全部成功或全部失败）
    pub async fn create_course_requests_impl(
        &self,
        course_id: i32,
        entries: Vec<AllocationEntry>,
    ) -> Result<u64> {
        if entries.is_empty() {
            return Ok(0);
        }

        let now = chrono::Utc::now().timestamp();
        let count = entries.len() as u64;

        let models = entries.into_iter().map(|entry| ActiveModel {
            teacher_id: Set(entry.teacher_id),
            course_id: Set(course_id),
            number_student: Set(entry.number_student),
            quantity: Set(entry.quantity),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        });

        CourseRequests::insert_many(models)
            .exec(&self.db)
            .await
            .map_err(|e| CourseLoadError::database_operation(format!("创建调整申请失败: {e}")))?;

        Ok(count)
    }

    /// 列出课程的调整申请（创建时间升序，同一批次按插入顺序）
    pub async fn list_course_requests_impl(
        &self,
        course_id: i32,
    ) -> Result<Vec<CourseRequestRecord>> {
        let requests = CourseRequests::find()
            .filter(Column::CourseId.eq(course_id))
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| CourseLoadError::database_operation(format!("查询调整申请失败: {e}")))?;

        let teacher_ids: HashSet<String> = requests.iter().map(|r| r.teacher_id.clone()).collect();
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

        Ok(requests
            .into_iter()
            .map(|request| {
                let teacher_name = teacher_map.get(&request.teacher_id).cloned();
                request.into_record(teacher_name)
            })
            .collect())
    }
}
