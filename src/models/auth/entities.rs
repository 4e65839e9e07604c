use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 角色（登录时解析，写入 token，在 token 有效期内不再重新查询）
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub enum Role {
    Admin,   // 管理员
    Head,    // 院系主任
    Teacher, // 教师
}

/// 角色可获得的能力
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// 查看课程列表（结果按角色过滤）
    ViewCourses,
    /// 查看教师列表
    ListTeachers,
    /// 提交 / 查看课程调整申请
    ManageCourseRequests,
}

impl Role {
    pub const ADMIN: &'static str = "admin";
    pub const HEAD: &'static str = "head";
    pub const TEACHER: &'static str = "teacher";

    /// 角色的能力集合
    pub fn capabilities(&self) -> &'static [Capability] {
        match self {
            Role::Admin | Role::Head => &[
                Capability::ViewCourses,
                Capability::ListTeachers,
                Capability::ManageCourseRequests,
            ],
            Role::Teacher => &[Capability::ViewCourses],
        }
    }

    pub fn has(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "{}", Role::ADMIN),
            Role::Head => write!(f, "{}", Role::HEAD),
            Role::Teacher => write!(f, "{}", Role::TEACHER),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Role::ADMIN => Ok(Role::Admin),
            Role::HEAD => Ok(Role::Head),
            Role::TEACHER => Ok(Role::Teacher),
            _ => Err(format!("Invalid role: {s}")),
        }
    }
}

/// 当前请求的认证主体，由 RequireJWT 从 token 中解出
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub role: Role,
    pub teacher_id: String,
    pub email: String,
    pub department_id: Option<i32>,
}

impl Principal {
    pub fn can(&self, capability: Capability) -> bool {
        self.role.has(capability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capabilities_per_role() {
        assert!(Role::Admin.has(Capability::ManageCourseRequests));
        assert!(Role::Head.has(Capability::ListTeachers));
        assert!(Role::Teacher.has(Capability::ViewCourses));
        assert!(!Role::Teacher.has(Capability::ListTeachers));
        assert!(!Role::Teacher.has(Capability::ManageCourseRequests));
    }

    #[test]
    fn test_role_round_trips_through_str() {
        for role in [Role::Admin, Role::Head, Role::Teacher] {
            assert_eq!(role.to_string().parse::<Role>(), Ok(role));
        }
        assert!("dean".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Role::Head).unwrap(), "\"head\"");
        let role: Role = serde_json::from_str("\"teacher\"").unwrap();
        assert_eq!(role, Role::Teacher);
    }
}
