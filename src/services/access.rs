//! 角色解析与数据范围
//!
//! 角色只在登录时解析一次并写入令牌；之后的每个请求都只依赖令牌中的
//! [`Principal`] 决定能看到哪些行、能管理哪些课程。

use crate::config::AuthConfig;
use crate::errors::{CourseLoadError, Result};
use crate::models::auth::{Principal, Role};
use crate::models::courses::entities::Course;
use crate::storage::{CourseScope, Storage, TeacherScope};

/// 白名单邮箱为管理员，担任院系主任为 head，其余为普通教师
pub fn role_for(auth: &AuthConfig, email: &str, heads_department: bool) -> Role {
    if auth.is_admin_email(email) {
        Role::Admin
    } else if heads_department {
        Role::Head
    } else {
        Role::Teacher
    }
}

pub async fn resolve_role(
    storage: &dyn Storage,
    auth: &AuthConfig,
    teacher_id: &str,
    email: &str,
) -> Result<Role> {
    if auth.is_admin_email(email) {
        return Ok(Role::Admin);
    }
    let headed = storage.find_headed_department(teacher_id).await?;
    Ok(role_for(auth, email, headed.is_some()))
}

pub fn course_scope(principal: &Principal) -> CourseScope {
    match principal.role {
        Role::Admin => CourseScope::All,
        Role::Head => principal
            .department_id
            .map_or(CourseScope::Nothing, CourseScope::Department),
        Role::Teacher => CourseScope::Teacher(principal.teacher_id.clone()),
    }
}

pub fn teacher_scope(principal: &Principal) -> TeacherScope {
    match principal.role {
        Role::Admin => TeacherScope::All,
        Role::Head => principal
            .department_id
            .map_or(TeacherScope::Nothing, TeacherScope::Department),
        Role::Teacher => TeacherScope::Nothing,
    }
}

/// 是否可以提交 / 查看该课程的调整申请
///
/// 角色能力由路由上的 `RequireCapability` 检查，这里只负责院系归属。
pub fn authorize_course_requests(principal: &Principal, course: &Course) -> Result<()> {
    match principal.role {
        Role::Admin => Ok(()),
        Role::Head => match (principal.department_id, course.department_id) {
            (Some(own), Some(course_department)) if own == course_department => Ok(()),
            _ => Err(CourseLoadError::authorization(
                "Course belongs to another department",
            )),
        },
        Role::Teacher => Err(CourseLoadError::authorization("Forbidden")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal(role: Role, department_id: Option<i32>) -> Principal {
        Principal {
            role,
            teacher_id: "T1".to_string(),
            email: "t1@uni.edu".to_string(),
            department_id,
        }
    }

    fn course(department_id: Option<i32>) -> Course {
        Course {
            id: 10,
            course_name: "Compilers".to_string(),
            department_id,
            teacher_id: Some("T0".to_string()),
            number_student: Some(60),
            quantity: Some(30),
        }
    }

    #[test]
    fn test_role_resolution_order() {
        let auth = AuthConfig {
            admin_emails: vec!["dean@uni.edu".to_string()],
        };
        assert_eq!(role_for(&auth, "Dean@Uni.edu", true), Role::Admin);
        assert_eq!(role_for(&auth, "head@uni.edu", true), Role::Head);
        assert_eq!(role_for(&auth, "t@uni.edu", false), Role::Teacher);
    }

    #[test]
    fn test_course_scope_per_role() {
        assert_eq!(course_scope(&principal(Role::Admin, None)), CourseScope::All);
        assert_eq!(
            course_scope(&principal(Role::Head, Some(2))),
            CourseScope::Department(2)
        );
        assert_eq!(course_scope(&principal(Role::Head, None)), CourseScope::Nothing);
        assert_eq!(
            course_scope(&principal(Role::Teacher, Some(2))),
            CourseScope::Teacher("T1".to_string())
        );
    }

    #[test]
    fn test_teacher_scope_per_role() {
        assert_eq!(teacher_scope(&principal(Role::Admin, Some(1))), TeacherScope::All);
        assert_eq!(
            teacher_scope(&principal(Role::Head, Some(1))),
            TeacherScope::Department(1)
        );
        assert_eq!(teacher_scope(&principal(Role::Teacher, Some(1))), TeacherScope::Nothing);
    }

    #[test]
    fn test_course_request_authorization() {
        assert!(authorize_course_requests(&principal(Role::Admin, None), &course(Some(5))).is_ok());
        assert!(authorize_course_requests(&principal(Role::Head, Some(5)), &course(Some(5))).is_ok());

        let foreign = authorize_course_requests(&principal(Role::Head, Some(4)), &course(Some(5)));
        assert!(matches!(foreign, Err(CourseLoadError::Authorization(_))));

        let no_department = authorize_course_requests(&principal(Role::Head, None), &course(None));
        assert!(matches!(no_department, Err(CourseLoadError::Authorization(_))));

        let teacher = authorize_course_requests(&principal(Role::Teacher, Some(5)), &course(Some(5)));
        assert!(matches!(teacher, Err(CourseLoadError::Authorization(_))));
    }
}
