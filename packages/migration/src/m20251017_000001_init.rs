use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Companies {
    Table,
    Id,
    Name,
    Industry,
    Employee,
    City,
    Region,
    Address,
    Email,
    Phone,
    LogoLink,
    FacebookLink,
    WebsiteLink,
    Description,
    SeekingEmployee,
}

#[derive(Iden)]
enum Candidates {
    Table,
    Id,
    Name,
    Surname,
    DateOfBirth,
    City,
    Region,
    Email,
    Phone,
    FacebookLink,
    LinkedinLink,
    Address,
    WorkExperience,
    Education,
    SeekingJob,
    DesiredSalary,
    DesiredIndustry,
}

#[derive(Iden)]
enum Vacancies {
    Table,
    Id,
    CompanyId,
    JobTitle,
    JobDescription,
    Requirements,
    Benefits,
    City,
    Region,
    MinSalary,
    DatePosted,
}

#[derive(Iden)]
enum Applications {
    Table,
    Id,
    CompanyId,
    VacancyId,
    CandidateId,
    CoverLetter,
    DateSubmitted,
}

fn id_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .integer()
        .not_null()
        .primary_key()
        .auto_increment()
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // companies
        manager
            .create_table(
                Table::create()
                    .table(Companies::Table)
                    .if_not_exists()
                    .col(id_col(Companies::Id))
                    .col(ColumnDef::new(Companies::Name).string().not_null())
                    .col(ColumnDef::new(Companies::Industry).string().null())
                    .col(ColumnDef::new(Companies::Employee).integer().null())
                    .col(ColumnDef::new(Companies::City).string().null())
                    .col(ColumnDef::new(Companies::Region).string().null())
                    .col(ColumnDef::new(Companies::Address).string().null())
                    .col(ColumnDef::new(Companies::Email).string().null())
                    .col(ColumnDef::new(Companies::Phone).string().null())
                    .col(ColumnDef::new(Companies::LogoLink).string().null())
                    .col(ColumnDef::new(Companies::FacebookLink).string().null())
                    .col(ColumnDef::new(Companies::WebsiteLink).string().null())
                    .col(ColumnDef::new(Companies::Description).text().null())
                    .col(ColumnDef::new(Companies::SeekingEmployee).boolean().null())
                    .to_owned(),
            )
            .await?;

        // candidates
        manager
            .create_table(
                Table::create()
                    .table(Candidates::Table)
                    .if_not_exists()
                    .col(id_col(Candidates::Id))
                    .col(ColumnDef::new(Candidates::Name).string().not_null())
                    .col(ColumnDef::new(Candidates::Surname).string().null())
                    .col(ColumnDef::new(Candidates::DateOfBirth).date().null())
                    .col(ColumnDef::new(Candidates::City).string().null())
                    .col(ColumnDef::new(Candidates::Region).string().null())
                    .col(ColumnDef::new(Candidates::Email).string().null())
                    .col(ColumnDef::new(Candidates::Phone).string().null())
                    .col(ColumnDef::new(Candidates::FacebookLink).string().null())
                    .col(ColumnDef::new(Candidates::LinkedinLink).string().null())
                    .col(ColumnDef::new(Candidates::Address).string().null())
                    .col(ColumnDef::new(Candidates::WorkExperience).text().null())
                    .col(ColumnDef::new(Candidates::Education).text().null())
                    .col(ColumnDef::new(Candidates::SeekingJob).boolean().null())
                    .col(ColumnDef::new(Candidates::DesiredSalary).integer().null())
                    .col(ColumnDef::new(Candidates::DesiredIndustry).string().null())
                    .to_owned(),
            )
            .await?;

        // vacancies
        manager
            .create_table(
                Table::create()
                    .table(Vacancies::Table)
                    .if_not_exists()
                    .col(id_col(Vacancies::Id))
                    .col(ColumnDef::new(Vacancies::CompanyId).integer().not_null())
                    .col(ColumnDef::new(Vacancies::JobTitle).string().not_null())
                    .col(ColumnDef::new(Vacancies::JobDescription).text().null())
                    .col(ColumnDef::new(Vacancies::Requirements).text().null())
                    .col(ColumnDef::new(Vacancies::Benefits).text().null())
                    .col(ColumnDef::new(Vacancies::City).string().null())
                    .col(ColumnDef::new(Vacancies::Region).string().null())
                    .col(ColumnDef::new(Vacancies::MinSalary).integer().null())
                    .col(
                        ColumnDef::new(Vacancies::DatePosted)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vacancies_company_id")
                            .from(Vacancies::Table, Vacancies::CompanyId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_vacancies_company_id")
                    .table(Vacancies::Table)
                    .col(Vacancies::CompanyId)
                    .to_owned(),
            )
            .await?;

        // applications
        manager
            .create_table(
                Table::create()
                    .table(Applications::Table)
                    .if_not_exists()
                    .col(id_col(Applications::Id))
                    .col(ColumnDef::new(Applications::CompanyId).integer().not_null())
                    .col(ColumnDef::new(Applications::VacancyId).integer().not_null())
                    .col(
                        ColumnDef::new(Applications::CandidateId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Applications::CoverLetter).text().null())
                    .col(
                        ColumnDef::new(Applications::DateSubmitted)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_applications_company_id")
                            .from(Applications::Table, Applications::CompanyId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_applications_vacancy_id")
                            .from(Applications::Table, Applications::VacancyId)
                            .to(Vacancies::Table, Vacancies::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_applications_candidate_id")
                            .from(Applications::Table, Applications::CandidateId)
                            .to(Candidates::Table, Candidates::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // one application per (candidate, vacancy)
        manager
            .create_index(
                Index::create()
                    .name("ux_applications_candidate_vacancy")
                    .table(Applications::Table)
                    .col(Applications::CandidateId)
                    .col(Applications::VacancyId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_applications_vacancy_id")
                    .table(Applications::Table)
                    .col(Applications::VacancyId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop in reverse order + drop index before table
        manager
            .drop_index(
                Index::drop()
                    .name("ix_applications_vacancy_id")
                    .table(Applications::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ux_applications_candidate_vacancy")
                    .table(Applications::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Applications::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ix_vacancies_company_id")
                    .table(Vacancies::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Vacancies::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Candidates::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Companies::Table).to_owned())
            .await?;

        Ok(())
    }
}
