use std::collections::HashSet;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::{CourseRequestService, authorize_course, error_code};
use crate::allocation::validate_batch;
use crate::config::RequestPolicyConfig;
use crate::errors::{CourseLoadError, Result};
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse,
    auth::Principal,
    course_requests::{
        requests::{AllocationEntry, SubmitCourseRequestsRequest},
        responses::SubmitCourseRequestsResponse,
    },
};
use crate::services::{error_response, unauthorized_response};
use crate::storage::Storage;
use crate::utils::validate::validate_teacher_id;

/// 条目的基本校验：教师编号非空，数值非负
fn validate_entries(entries: &[AllocationEntry]) -> Result<()> {
    if entries.is_empty() {
        return Err(CourseLoadError::validation("No requests provided"));
    }

    for (index, entry) in entries.iter().enumerate() {
        validate_teacher_id(&entry.teacher_id)
            .map_err(|e| CourseLoadError::validation(format!("Request #{}: {e}", index + 1)))?;
        if entry.number_student < 0 || entry.quantity < 0 {
            return Err(CourseLoadError::validation(format!(
                "Request #{}: numberStudent and quantity must not be negative",
                index + 1
            )));
        }
    }
    Ok(())
}

/// 所有引用的教师都必须存在
async fn ensure_teachers_exist(storage: &dyn Storage, entries: &[AllocationEntry]) -> Result<()> {
    let wanted: HashSet<String> = entries
        .iter()
        .map(|entry| entry.teacher_id.trim().to_string())
        .collect();
    let ids: Vec<String> = wanted.iter().cloned().collect();

    let found: HashSet<String> = storage
        .get_teachers_by_ids(&ids)
        .await?
        .into_iter()
        .map(|teacher| teacher.id)
        .collect();

    let mut missing: Vec<&String> = wanted.difference(&found).collect();
    if missing.is_empty() {
        return Ok(());
    }
    missing.sort();
    Err(CourseLoadError::validation(format!(
        "Unknown teacher: {}",
        missing
            .iter()
            .map(|id| id.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    )))
}

/// 提交一批调整申请：授权、校验，然后一次批量写入
pub async fn submit_course_requests(
    storage: &dyn Storage,
    policy: &RequestPolicyConfig,
    principal: &Principal,
    course_id: i32,
    entries: Vec<AllocationEntry>,
) -> Result<u64> {
    let course = authorize_course(storage, principal, course_id).await?;

    let entries: Vec<AllocationEntry> = entries
        .into_iter()
        .map(|entry| AllocationEntry {
            teacher_id: entry.teacher_id.trim().to_string(),
            ..entry
        })
        .collect();

    validate_entries(&entries)?;
    ensure_teachers_exist(storage, &entries).await?;

    if policy.enforce_capacity {
        validate_batch(course.totals(), &entries)
            .map_err(|e| CourseLoadError::validation(e.to_string()))?;
    }

    let created = storage.create_course_requests(course.id, entries).await?;
    info!(
        "Teacher {} submitted {} adjustment request(s) for course {}",
        principal.teacher_id, created, course.id
    );
    Ok(created)
}

pub async fn handle_submit(
    service: &CourseRequestService,
    request: &HttpRequest,
    course_id: i32,
    body: SubmitCourseRequestsRequest,
) -> ActixResult<HttpResponse> {
    let Some(principal) = RequireJWT::extract_principal(request) else {
        return Ok(unauthorized_response());
    };

    let storage = service.get_storage(request);
    match submit_course_requests(
        storage.as_ref(),
        service.get_policy(),
        &principal,
        course_id,
        body.requests,
    )
    .await
    {
        Ok(created) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SubmitCourseRequestsResponse {
                success: true,
                created,
            },
            "Requests submitted",
        ))),
        Err(err) => {
            warn!(
                "Course request submission by {} for course {} rejected: {}",
                principal.teacher_id, course_id, err
            );
            let code = error_code(&err);
            Ok(error_response(err, code))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(teacher_id: &str, number_student: i32, quantity: i32) -> AllocationEntry {
        AllocationEntry {
            teacher_id: teacher_id.to_string(),
            number_student,
            quantity,
        }
    }

    #[test]
    fn test_validate_entries() {
        assert!(validate_entries(&[entry("T1", 20, 30)]).is_ok());
        assert!(validate_entries(&[entry("T1", 0, 0)]).is_ok());
        assert!(matches!(
            validate_entries(&[]),
            Err(CourseLoadError::Validation(_))
        ));
        assert!(validate_entries(&[entry("", 20, 30)]).is_err());
        assert!(validate_entries(&[entry("T1", -1, 30)]).is_err());
        assert!(validate_entries(&[entry("T1", 1, -30)]).is_err());
    }
}
