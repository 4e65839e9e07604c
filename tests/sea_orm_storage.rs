use sea_orm::{ActiveModelTrait, ActiveValue::Set, Database};

use rust_courseload::entity::{course_requests, courses, departments, skills, subjects, teachers};
use rust_courseload::models::course_requests::requests::AllocationEntry;
use rust_courseload::models::teachers::entities::CreateTeacher;
use rust_courseload::storage::sea_orm_storage::SeaOrmStorage;
use rust_courseload::storage::{CourseScope, Storage, TeacherScope};

async fn open_storage(name: &str) -> SeaOrmStorage {
    let dir = std::env::temp_dir().join(format!("courseload-storage-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(format!("{name}.db"));
    let _ = std::fs::remove_file(&path);

    let db = Database::connect(format!("sqlite://{}?mode=rwc", path.display()))
        .await
        .unwrap();
    let storage = SeaOrmStorage::with_connection(db).await.unwrap();
    seed(&storage).await;
    storage
}

async fn seed(storage: &SeaOrmStorage) {
    let db = storage.connection();

    for (id, name, head) in [(1, "Computer Science", "HEAD1"), (2, "Mathematics", "HEAD2")] {
        departments::ActiveModel {
            id: Set(id),
            name: Set(name.to_string()),
            head_id: Set(Some(head.to_string())),
        }
        .insert(db)
        .await
        .unwrap();
    }

    for (id, name, email, department) in [
        ("T0", "Original Teacher", Some("t0@uni.edu"), 1),
        ("T1", "Teacher X", Some("t1@uni.edu"), 1),
        ("HEAD1", "Alice Head", Some("head1@uni.edu"), 1),
        ("HEAD2", "Bob Head", Some("head2@uni.edu"), 2),
        ("M1", "Math Teacher", None, 2),
    ] {
        teachers::ActiveModel {
            id: Set(id.to_string()),
            name: Set(name.to_string()),
            email: Set(email.map(str::to_string)),
            password_hash: Set(None),
            department_id: Set(Some(department)),
        }
        .insert(db)
        .await
        .unwrap();
    }

    subjects::ActiveModel {
        id: Set(10),
        name: Set("Algorithms".to_string()),
        code: Set(Some("CS201".to_string())),
        department_id: Set(Some(1)),
    }
    .insert(db)
    .await
    .unwrap();

    skills::ActiveModel {
        id: Set(1),
        name: Set("Lecture".to_string()),
    }
    .insert(db)
    .await
    .unwrap();

    for (id, name, department, teacher, subject) in [
        (5, "Data Structures", 1, Some("T0"), Some(10)),
        (6, "Calculus", 2, Some("M1"), None),
        (7, "Seminar", 1, None, None),
    ] {
        courses::ActiveModel {
            id: Set(id),
            course_year: Set("2025-2026".to_string()),
            semester_name: Set("HK1".to_string()),
            course_name: Set(name.to_string()),
            department_id: Set(Some(department)),
            teacher_id: Set(teacher.map(str::to_string)),
            subject_id: Set(subject),
            skill_id: Set(subject.map(|_| 1)),
            number_student: Set(Some(60)),
            quantity: Set(Some(30)),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap();
    }
}

fn entry(teacher_id: &str, number_student: i32, quantity: i32) -> AllocationEntry {
    AllocationEntry {
        teacher_id: teacher_id.to_string(),
        number_student,
        quantity,
    }
}

#[actix_web::test]
async fn test_teacher_queries() {
    let storage = open_storage("teachers").await;

    let teacher = storage
        .get_teacher_by_email("t1@uni.edu")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(teacher.id, "T1");
    assert!(storage.get_teacher_by_email("x@uni.edu").await.unwrap().is_none());

    let headed = storage.find_headed_department("HEAD2").await.unwrap().unwrap();
    assert_eq!(headed.id, 2);
    assert!(storage.find_headed_department("T1").await.unwrap().is_none());

    let names: Vec<String> = storage
        .list_teachers(TeacherScope::Department(1))
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(names, vec!["HEAD1", "T0", "T1"]);
    assert!(storage.list_teachers(TeacherScope::Nothing).await.unwrap().is_empty());

    let found = storage
        .get_teachers_by_ids(&["T1".to_string(), "NOBODY".to_string()])
        .await
        .unwrap();
    assert_eq!(found.len(), 1);

    assert_eq!(storage.count_teachers().await.unwrap(), 5);
    let created = storage
        .create_teacher(CreateTeacher {
            id: "admin".to_string(),
            name: "Administrator".to_string(),
            email: "dean@uni.edu".to_string(),
            password_hash: "hash".to_string(),
            department_id: None,
        })
        .await
        .unwrap();
    assert_eq!(created.email.as_deref(), Some("dean@uni.edu"));
    assert_eq!(storage.count_teachers().await.unwrap(), 6);
}

#[actix_web::test]
async fn test_course_rows_join_names() {
    let storage = open_storage("courses").await;

    let rows = storage
        .list_undergraduate_courses(CourseScope::Department(1))
        .await
        .unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].course_id, 5);
    assert_eq!(rows[0].subject_name.as_deref(), Some("Algorithms"));
    assert_eq!(rows[0].skill_name.as_deref(), Some("Lecture"));
    assert_eq!(rows[0].teacher_name.as_deref(), Some("Original Teacher"));
    assert_eq!(rows[1].course_id, 7);
    assert_eq!(rows[1].teacher_name, None);

    let mine = storage
        .list_undergraduate_courses(CourseScope::Teacher("M1".to_string()))
        .await
        .unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].course_id, 6);

    let course = storage.get_course_by_id(6).await.unwrap().unwrap();
    assert_eq!(course.department_id, Some(2));
    assert!(storage.get_course_by_id(404).await.unwrap().is_none());
}

#[actix_web::test]
async fn test_course_requests_insert_and_list() {
    let storage = open_storage("requests").await;

    let created = storage
        .create_course_requests(5, vec![entry("T1", 20, 30), entry("HEAD1", 60, 10)])
        .await
        .unwrap();
    assert_eq!(created, 2);
    storage
        .create_course_requests(6, vec![entry("M1", 5, 5)])
        .await
        .unwrap();

    let records = storage.list_course_requests(5).await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].teacher_id, "T1");
    assert_eq!(records[0].teacher_name.as_deref(), Some("Teacher X"));
    assert_eq!((records[0].number_student, records[0].quantity), (20, 30));
    assert_eq!(records[1].teacher_id, "HEAD1");
    assert!(records[0].request_id < records[1].request_id);

    assert!(storage.list_course_requests(7).await.unwrap().is_empty());
}

#[actix_web::test]
async fn test_course_requests_ordered_by_creation_time() {
    let storage = open_storage("ordering").await;

    // 编号越大的记录越早提交
    for (id, teacher, created_at) in [(1, "T1", 3_000), (2, "HEAD1", 1_000), (3, "T0", 2_000)] {
        course_requests::ActiveModel {
            id: Set(id),
            teacher_id: Set(teacher.to_string()),
            course_id: Set(5),
            number_student: Set(10),
            quantity: Set(30),
            created_at: Set(created_at),
            updated_at: Set(created_at),
        }
        .insert(storage.connection())
        .await
        .unwrap();
    }

    let records = storage.list_course_requests(5).await.unwrap();
    let ids: Vec<i64> = records.iter().map(|r| r.request_id).collect();
    assert_eq!(ids, vec![2, 3, 1]);
    assert_eq!(records[0].teacher_name.as_deref(), Some("Alice Head"));
    assert_eq!(records[0].created_at.timestamp(), 1_000);
}
