//! 集成测试共用：内存存储、测试数据和令牌

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;

use rust_courseload::config::Argon2Config;
use rust_courseload::errors::{CourseLoadError, Result};
use rust_courseload::models::auth::{Principal, Role};
use rust_courseload::models::course_requests::{
    entities::CourseRequestRecord, requests::AllocationEntry,
};
use rust_courseload::models::courses::{entities::Course, responses::CourseRow};
use rust_courseload::models::teachers::{
    entities::{CreateTeacher, Department, Teacher},
    responses::TeacherSummary,
};
use rust_courseload::storage::{CourseScope, Storage, TeacherScope};
use rust_courseload::utils::jwt::JwtUtils;
use rust_courseload::utils::password::hash_password_with;

pub const PASSWORD: &str = "correct-horse";

#[derive(Debug, Clone)]
pub struct StoredRequest {
    pub id: i64,
    pub teacher_id: String,
    pub course_id: i32,
    pub number_student: i32,
    pub quantity: i32,
    pub created_at: i64,
}

#[derive(Default)]
struct State {
    departments: Vec<Department>,
    teachers: Vec<Teacher>,
    courses: Vec<(CourseRow, Option<i32>)>,
    requests: Vec<StoredRequest>,
    next_request_id: i64,
}

/// 内存版 Storage
#[derive(Default)]
pub struct MemoryStorage {
    state: Mutex<State>,
}

impl MemoryStorage {
    pub fn add_department(&self, id: i32, name: &str, head_id: Option<&str>) {
        self.state.lock().unwrap().departments.push(Department {
            id,
            name: name.to_string(),
            head_id: head_id.map(str::to_string),
        });
    }

    pub fn add_teacher(
        &self,
        id: &str,
        name: &str,
        email: Option<&str>,
        password_hash: Option<String>,
        department_id: Option<i32>,
    ) {
        self.state.lock().unwrap().teachers.push(Teacher {
            id: id.to_string(),
            name: name.to_string(),
            email: email.map(str::to_string),
            password_hash,
            department_id,
        });
    }

    pub fn add_course(
        &self,
        id: i32,
        name: &str,
        department_id: Option<i32>,
        teacher_id: Option<&str>,
        number_student: Option<i32>,
        quantity: Option<i32>,
    ) {
        let row = CourseRow {
            course_id: id,
            course_year: "2025-2026".to_string(),
            semester_name: "HK1".to_string(),
            register_period: None,
            course_name: name.to_string(),
            subject_name: None,
            skill_name: None,
            number_student,
            num_group: Some(1),
            unit: None,
            quantity,
            coef: Some(1.0),
            coef_cttt: None,
            coef_far: None,
            num_out_hours: None,
            standard_hours: None,
            note: None,
            teacher_id: teacher_id.map(str::to_string),
            teacher_name: None,
        };
        self.state.lock().unwrap().courses.push((row, department_id));
    }

    /// 直接写入一条申请（用于构造时间顺序）
    pub fn push_request(&self, teacher_id: &str, course_id: i32, students: i32, quantity: i32, created_at: i64) {
        let mut state = self.state.lock().unwrap();
        state.next_request_id += 1;
        let id = state.next_request_id;
        state.requests.push(StoredRequest {
            id,
            teacher_id: teacher_id.to_string(),
            course_id,
            number_student: students,
            quantity,
            created_at,
        });
    }

    pub fn requests(&self) -> Vec<StoredRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    fn teacher_name(state: &State, id: &str) -> Option<String> {
        state
            .teachers
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.name.clone())
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get_teacher_by_email(&self, email: &str) -> Result<Option<Teacher>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .teachers
            .iter()
            .find(|t| t.email.as_deref() == Some(email))
            .cloned())
    }

    async fn count_teachers(&self) -> Result<u64> {
        Ok(self.state.lock().unwrap().teachers.len() as u64)
    }

    async fn create_teacher(&self, teacher: CreateTeacher) -> Result<Teacher> {
        let mut state = self.state.lock().unwrap();
        if state.teachers.iter().any(|t| t.id == teacher.id) {
            return Err(CourseLoadError::database_operation("duplicate teacher"));
        }
        let created = Teacher {
            id: teacher.id,
            name: teacher.name,
            email: Some(teacher.email),
            password_hash: Some(teacher.password_hash),
            department_id: teacher.department_id,
        };
        state.teachers.push(created.clone());
        Ok(created)
    }

    async fn find_headed_department(&self, teacher_id: &str) -> Result<Option<Department>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .departments
            .iter()
            .find(|d| d.head_id.as_deref() == Some(teacher_id))
            .cloned())
    }

    async fn list_teachers(&self, scope: TeacherScope) -> Result<Vec<TeacherSummary>> {
        let state = self.state.lock().unwrap();
        let mut teachers: Vec<Teacher> = state
            .teachers
            .iter()
            .filter(|t| match scope {
                TeacherScope::All => true,
                TeacherScope::Department(id) => t.department_id == Some(id),
                TeacherScope::Nothing => false,
            })
            .cloned()
            .collect();
        teachers.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(teachers.into_iter().map(TeacherSummary::from).collect())
    }

    async fn get_teachers_by_ids(&self, ids: &[String]) -> Result<Vec<Teacher>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .teachers
            .iter()
            .filter(|t| ids.contains(&t.id))
            .cloned()
            .collect())
    }

    async fn list_undergraduate_courses(&self, scope: CourseScope) -> Result<Vec<CourseRow>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .courses
            .iter()
            .filter(|(row, department_id)| match &scope {
                CourseScope::All => true,
                CourseScope::Department(id) => *department_id == Some(*id),
                CourseScope::Teacher(id) => row.teacher_id.as_deref() == Some(id.as_str()),
                CourseScope::Nothing => false,
            })
            .map(|(row, _)| {
                let mut row = row.clone();
                row.teacher_name = row
                    .teacher_id
                    .as_deref()
                    .and_then(|id| Self::teacher_name(&state, id));
                row
            })
            .collect())
    }

    async fn get_course_by_id(&self, course_id: i32) -> Result<Option<Course>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .courses
            .iter()
            .find(|(row, _)| row.course_id == course_id)
            .map(|(row, department_id)| Course {
                id: row.course_id,
                course_name: row.course_name.clone(),
                department_id: *department_id,
                teacher_id: row.teacher_id.clone(),
                number_student: row.number_student,
                quantity: row.quantity,
            }))
    }

    async fn create_course_requests(
        &self,
        course_id: i32,
        entries: Vec<AllocationEntry>,
    ) -> Result<u64> {
        let now = chrono::Utc::now().timestamp();
        let mut state = self.state.lock().unwrap();
        let count = entries.len() as u64;
        for entry in entries {
            state.next_request_id += 1;
            let id = state.next_request_id;
            state.requests.push(StoredRequest {
                id,
                teacher_id: entry.teacher_id,
                course_id,
                number_student: entry.number_student,
                quantity: entry.quantity,
                created_at: now,
            });
        }
        Ok(count)
    }

    async fn list_course_requests(&self, course_id: i32) -> Result<Vec<CourseRequestRecord>> {
        let state = self.state.lock().unwrap();
        let mut requests: Vec<&StoredRequest> = state
            .requests
            .iter()
            .filter(|r| r.course_id == course_id)
            .collect();
        requests.sort_by_key(|r| (r.created_at, r.id));
        Ok(requests
            .into_iter()
            .map(|r| CourseRequestRecord {
                request_id: r.id,
                teacher_id: r.teacher_id.clone(),
                teacher_name: Self::teacher_name(&state, &r.teacher_id),
                number_student: r.number_student,
                quantity: r.quantity,
                created_at: chrono::DateTime::from_timestamp(r.created_at, 0).unwrap(),
            })
            .collect())
    }
}

pub fn password_hash() -> String {
    hash_password_with(
        PASSWORD,
        &Argon2Config {
            memory_cost: 1024,
            time_cost: 1,
            parallelism: 1,
        },
    )
    .unwrap()
}

/// 两个院系，课程 5 属于院系 1（原任课教师 T0），课程 6 属于院系 2
pub fn seeded_storage() -> MemoryStorage {
    let storage = MemoryStorage::default();
    storage.add_department(1, "Computer Science", Some("HEAD1"));
    storage.add_department(2, "Mathematics", Some("HEAD2"));

    storage.add_teacher("T0", "Original Teacher", Some("t0@uni.edu"), Some(password_hash()), Some(1));
    storage.add_teacher("T1", "Teacher X", Some("t1@uni.edu"), Some(password_hash()), Some(1));
    storage.add_teacher("T2", "Teacher Y", None, None, Some(1));
    storage.add_teacher("HEAD1", "Alice Head", Some("head1@uni.edu"), Some(password_hash()), Some(1));
    storage.add_teacher("HEAD2", "Bob Head", Some("head2@uni.edu"), Some(password_hash()), Some(2));
    storage.add_teacher("M1", "Math Teacher", Some("m1@uni.edu"), None, Some(2));

    storage.add_course(5, "Data Structures", Some(1), Some("T0"), Some(60), Some(30));
    storage.add_course(6, "Calculus", Some(2), Some("M1"), Some(40), Some(20));
    storage.add_course(7, "Seminar", Some(1), None, None, None);
    storage
}

pub fn principal(role: Role, teacher_id: &str, department_id: Option<i32>) -> Principal {
    Principal {
        role,
        teacher_id: teacher_id.to_string(),
        email: format!("{}@uni.edu", teacher_id.to_lowercase()),
        department_id,
    }
}

pub fn bearer(role: Role, teacher_id: &str, department_id: Option<i32>) -> (&'static str, String) {
    let token = JwtUtils::generate_access_token(&principal(role, teacher_id, department_id)).unwrap();
    ("Authorization", format!("Bearer {token}"))
}

pub fn admin() -> (&'static str, String) {
    bearer(Role::Admin, "ADMIN", None)
}

pub fn head1() -> (&'static str, String) {
    bearer(Role::Head, "HEAD1", Some(1))
}

pub fn head2() -> (&'static str, String) {
    bearer(Role::Head, "HEAD2", Some(2))
}

pub fn teacher0() -> (&'static str, String) {
    bearer(Role::Teacher, "T0", Some(1))
}

/// 组装与生产一致的应用（登录限流放宽，避免测试之间互相影响）
#[macro_export]
macro_rules! test_app {
    ($storage:expr) => {{
        let storage: std::sync::Arc<dyn rust_courseload::storage::Storage> = $storage;
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(
                    actix_web::web::JsonConfig::default()
                        .error_handler(rust_courseload::utils::json_error_handler),
                )
                .app_data(actix_web::web::Data::new(storage))
                .configure(|cfg| {
                    rust_courseload::routes::configure_auth_routes(
                        cfg,
                        rust_courseload::middlewares::RateLimit::new(1000, 60).with_prefix("login"),
                    )
                })
                .configure(rust_courseload::routes::configure_dashboard_routes)
                .configure(rust_courseload::routes::configure_teachers_routes)
                .configure(rust_courseload::routes::configure_course_requests_routes),
        )
        .await
    }};
}
