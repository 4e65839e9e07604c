//! 预导入模块，方便使用

pub use super::course_requests::{
    ActiveModel as CourseRequestActiveModel, Entity as CourseRequests, Model as CourseRequestModel,
};
pub use super::courses::{ActiveModel as CourseActiveModel, Entity as Courses, Model as CourseModel};
pub use super::departments::{
    ActiveModel as DepartmentActiveModel, Entity as Departments, Model as DepartmentModel,
};
pub use super::skills::{ActiveModel as SkillActiveModel, Entity as Skills, Model as SkillModel};
pub use super::subjects::{
    ActiveModel as SubjectActiveModel, Entity as Subjects, Model as SubjectModel,
};
pub use super::teachers::{
    ActiveModel as TeacherActiveModel, Entity as Teachers, Model as TeacherModel,
};
