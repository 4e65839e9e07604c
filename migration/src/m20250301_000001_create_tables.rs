use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建院系表（head_id 与教师表互相引用，不加外键约束）
        manager
            .create_table(
                Table::create()
                    .table(Departments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Departments::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Departments::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Departments::HeadId).string_len(50).null())
                    .to_owned(),
            )
            .await?;

        // 创建教师表
        manager
            .create_table(
                Table::create()
                    .table(Teachers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Teachers::Id)
                            .string_len(50)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Teachers::Name).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Teachers::Email)
                            .string_len(255)
                            .null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Teachers::PasswordHash).string().null())
                    .col(ColumnDef::new(Teachers::DepartmentId).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Teachers::Table, Teachers::DepartmentId)
                            .to(Departments::Table, Departments::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建技能（培养类型）表
        manager
            .create_table(
                Table::create()
                    .table(Skills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Skills::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Skills::Name).string_len(100).not_null())
                    .to_owned(),
            )
            .await?;

        // 创建科目表
        manager
            .create_table(
                Table::create()
                    .table(Subjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subjects::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Subjects::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Subjects::Code).string_len(50).null())
                    .col(ColumnDef::new(Subjects::DepartmentId).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Subjects::Table, Subjects::DepartmentId)
                            .to(Departments::Table, Departments::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建课程表
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Courses::CourseYear).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Courses::SemesterName)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Courses::RegisterPeriod)
                            .string_len(100)
                            .null(),
                    )
                    .col(ColumnDef::new(Courses::SubjectId).integer().null())
                    .col(ColumnDef::new(Courses::DepartmentId).integer().null())
                    .col(ColumnDef::new(Courses::TeacherId).string_len(50).null())
                    .col(ColumnDef::new(Courses::CourseName).string_len(255).not_null())
                    .col(ColumnDef::new(Courses::NumberOfCredit).integer().null())
                    .col(ColumnDef::new(Courses::NumberStudent).integer().null())
                    .col(ColumnDef::new(Courses::NumGroup).integer().null())
                    .col(ColumnDef::new(Courses::SkillId).integer().null())
                    .col(ColumnDef::new(Courses::Credit).integer().null())
                    .col(ColumnDef::new(Courses::Unit).integer().null())
                    .col(ColumnDef::new(Courses::Quantity).integer().null())
                    .col(ColumnDef::new(Courses::Coef).double().null())
                    .col(ColumnDef::new(Courses::NumOutHours).integer().null())
                    .col(ColumnDef::new(Courses::CoefCttt).double().null())
                    .col(ColumnDef::new(Courses::CoefFar).double().null())
                    .col(ColumnDef::new(Courses::StandardHours).double().null())
                    .col(ColumnDef::new(Courses::Flag).integer().null())
                    .col(ColumnDef::new(Courses::Note).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Courses::Table, Courses::SubjectId)
                            .to(Subjects::Table, Subjects::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Courses::Table, Courses::DepartmentId)
                            .to(Departments::Table, Departments::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Courses::Table, Courses::TeacherId)
                            .to(Teachers::Table, Teachers::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Courses::Table, Courses::SkillId)
                            .to(Skills::Table, Skills::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建课程调整申请表
        manager
            .create_table(
                Table::create()
                    .table(CourseRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseRequests::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CourseRequests::TeacherId)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(CourseRequests::CourseId).integer().not_null())
                    .col(
                        ColumnDef::new(CourseRequests::NumberStudent)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CourseRequests::Quantity).integer().not_null())
                    .col(
                        ColumnDef::new(CourseRequests::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseRequests::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseRequests::Table, CourseRequests::TeacherId)
                            .to(Teachers::Table, Teachers::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseRequests::Table, CourseRequests::CourseId)
                            .to(Courses::Table, Courses::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_courses_department_id")
                    .table(Courses::Table)
                    .col(Courses::DepartmentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_courses_teacher_id")
                    .table(Courses::Table)
                    .col(Courses::TeacherId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_departments_head_id")
                    .table(Departments::Table)
                    .col(Departments::HeadId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_course_requests_course_created")
                    .table(CourseRequests::Table)
                    .col(CourseRequests::CourseId)
                    .col(CourseRequests::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CourseRequests::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Subjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Skills::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Teachers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Departments::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Departments {
    #[sea_orm(iden = "departments")]
    Table,
    Id,
    Name,
    HeadId,
}

#[derive(DeriveIden)]
enum Teachers {
    #[sea_orm(iden = "teachers")]
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    DepartmentId,
}

#[derive(DeriveIden)]
enum Skills {
    #[sea_orm(iden = "skills")]
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Subjects {
    #[sea_orm(iden = "subjects")]
    Table,
    Id,
    Name,
    Code,
    DepartmentId,
}

#[derive(DeriveIden)]
enum Courses {
    #[sea_orm(iden = "courses")]
    Table,
    Id,
    CourseYear,
    SemesterName,
    RegisterPeriod,
    SubjectId,
    DepartmentId,
    TeacherId,
    CourseName,
    NumberOfCredit,
    NumberStudent,
    NumGroup,
    SkillId,
    Credit,
    Unit,
    Quantity,
    Coef,
    NumOutHours,
    CoefCttt,
    CoefFar,
    StandardHours,
    Flag,
    Note,
}

#[derive(DeriveIden)]
enum CourseRequests {
    #[sea_orm(iden = "course_requests")]
    Table,
    Id,
    TeacherId,
    CourseId,
    NumberStudent,
    Quantity,
    CreatedAt,
    UpdatedAt,
}
