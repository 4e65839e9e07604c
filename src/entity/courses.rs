//! 课程实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub course_year: String,
    pub semester_name: String,
    pub register_period: Option<String>,
    pub subject_id: Option<i32>,
    pub department_id: Option<i32>,
    pub teacher_id: Option<String>,
    pub course_name: String,
    pub number_of_credit: Option<i32>,
    pub number_student: Option<i32>,
    pub num_group: Option<i32>,
    pub skill_id: Option<i32>,
    pub credit: Option<i32>,
    pub unit: Option<i32>,
    pub quantity: Option<i32>,
    pub coef: Option<f64>,
    pub num_out_hours: Option<i32>,
    pub coef_cttt: Option<f64>,
    pub coef_far: Option<f64>,
    pub standard_hours: Option<f64>,
    pub flag: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub note: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::subjects::Entity",
        from = "Column::SubjectId",
        to = "super::subjects::Column::Id"
    )]
    Subject,
    #[sea_orm(
        belongs_to = "super::departments::Entity",
        from = "Column::DepartmentId",
        to = "super::departments::Column::Id"
    )]
    Department,
    #[sea_orm(
        belongs_to = "super::teachers::Entity",
        from = "Column::TeacherId",
        to = "super::teachers::Column::Id"
    )]
    Teacher,
    #[sea_orm(
        belongs_to = "super::skills::Entity",
        from = "Column::SkillId",
        to = "super::skills::Column::Id"
    )]
    Skill,
    #[sea_orm(has_many = "super::course_requests::Entity")]
    CourseRequests,
}

impl Related<super::subjects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl Related<super::departments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::teachers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::skills::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Skill.def()
    }
}

impl Related<super::course_requests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseRequests.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_course(self) -> crate::models::courses::entities::Course {
        crate::models::courses::entities::Course {
            id: self.id,
            course_name: self.course_name,
            department_id: self.department_id,
            teacher_id: self.teacher_id,
            number_student: self.number_student,
            quantity: self.quantity,
        }
    }

    /// 转换为看板行，名称字段由调用方按关联表填充
    pub fn into_course_row(
        self,
        subject_name: Option<String>,
        skill_name: Option<String>,
        teacher_name: Option<String>,
    ) -> crate::models::courses::responses::CourseRow {
        crate::models::courses::responses::CourseRow {
            course_id: self.id,
            course_year: self.course_year,
            semester_name: self.semester_name,
            register_period: self.register_period,
            course_name: self.course_name,
            subject_name,
            skill_name,
            number_student: self.number_student,
            num_group: self.num_group,
            unit: self.unit,
            quantity: self.quantity,
            coef: self.coef,
            coef_cttt: self.coef_cttt,
            coef_far: self.coef_far,
            num_out_hours: self.num_out_hours,
            standard_hours: self.standard_hours,
            note: self.note,
            teacher_id: self.teacher_id,
            teacher_name,
        }
    }
}
