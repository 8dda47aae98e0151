//! Migration: Create the clinic tables and their join tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                master(RoleMaster::Table)
                    .col(ColumnDef::new(RoleMaster::Name).string_len(255).not_null().unique_key())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                master(CategoryMaster::Table)
                    .col(ColumnDef::new(CategoryMaster::Name).string_len(255).not_null().unique_key())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                master(DepartmentMaster::Table)
                    .col(ColumnDef::new(DepartmentMaster::Name).string_len(255).not_null().unique_key())
                    .col(ColumnDef::new(DepartmentMaster::Slug).string().not_null().default(""))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                master(ClientMaster::Table)
                    .col(ColumnDef::new(ClientMaster::Surname).string_len(255).not_null().default(""))
                    .col(ColumnDef::new(ClientMaster::Name).string_len(255).not_null().default(""))
                    .col(ColumnDef::new(ClientMaster::Patronymic).string_len(255).not_null().default(""))
                    .col(ColumnDef::new(ClientMaster::Sex).string().not_null().default(""))
                    .col(ColumnDef::new(ClientMaster::BirthDate).date().null())
                    .col(ColumnDef::new(ClientMaster::Phone).string().not_null().default(""))
                    .col(ColumnDef::new(ClientMaster::Email).string().not_null().default(""))
                    .col(ColumnDef::new(ClientMaster::Info).text().not_null().default(""))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                master(ServiceMaster::Table)
                    .col(ColumnDef::new(ServiceMaster::Name).string_len(255).not_null().unique_key())
                    .col(ColumnDef::new(ServiceMaster::Price).double().not_null().default(0.0))
                    .col(ColumnDef::new(ServiceMaster::CategoryId).integer().null())
                    .foreign_key(&mut references(
                        "fk_service_category",
                        (ServiceMaster::Table, ServiceMaster::CategoryId),
                        CategoryMaster::Table,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                master(UserMaster::Table)
                    .col(ColumnDef::new(UserMaster::Username).string_len(255).not_null().unique_key())
                    .col(ColumnDef::new(UserMaster::Email).string_len(255).null().unique_key())
                    .col(ColumnDef::new(UserMaster::Phone).string_len(255).null().unique_key())
                    .col(ColumnDef::new(UserMaster::Active).boolean().not_null().default(false))
                    .col(ColumnDef::new(UserMaster::Password).string().not_null())
                    .col(ColumnDef::new(UserMaster::Surname).string_len(255).not_null().default(""))
                    .col(ColumnDef::new(UserMaster::Name).string_len(255).not_null().default(""))
                    .col(ColumnDef::new(UserMaster::Patronymic).string_len(255).not_null().default(""))
                    .col(ColumnDef::new(UserMaster::Sex).string().not_null().default(""))
                    .col(ColumnDef::new(UserMaster::BirthDate).date().null())
                    .col(ColumnDef::new(UserMaster::Profession).string().not_null().default(""))
                    .col(ColumnDef::new(UserMaster::Info).text().not_null().default(""))
                    .col(ColumnDef::new(UserMaster::Slug).string().not_null().default(""))
                    .col(ColumnDef::new(UserMaster::RoleId).integer().null())
                    .foreign_key(&mut references(
                        "fk_user_role",
                        (UserMaster::Table, UserMaster::RoleId),
                        RoleMaster::Table,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                master(PetMaster::Table)
                    .col(ColumnDef::new(PetMaster::Name).string_len(255).not_null().default(""))
                    .col(ColumnDef::new(PetMaster::Type).string_len(255).not_null().default(""))
                    .col(ColumnDef::new(PetMaster::Breed).string_len(255).not_null().default(""))
                    .col(ColumnDef::new(PetMaster::Colour).string_len(255).not_null().default(""))
                    .col(ColumnDef::new(PetMaster::Sex).string_len(255).not_null().default(""))
                    .col(ColumnDef::new(PetMaster::ClientId).integer().null())
                    .foreign_key(&mut references(
                        "fk_pet_client",
                        (PetMaster::Table, PetMaster::ClientId),
                        ClientMaster::Table,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                master(VisitMaster::Table)
                    .col(ColumnDef::new(VisitMaster::DateTime).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(VisitMaster::Info).text().not_null().default(""))
                    .col(ColumnDef::new(VisitMaster::ClientId).integer().null())
                    .col(ColumnDef::new(VisitMaster::PetId).integer().null())
                    .col(ColumnDef::new(VisitMaster::DoctorId).integer().null())
                    .col(ColumnDef::new(VisitMaster::ServiceId).integer().null())
                    .col(ColumnDef::new(VisitMaster::LastUpdatedById).integer().null())
                    .foreign_key(&mut references(
                        "fk_visit_client",
                        (VisitMaster::Table, VisitMaster::ClientId),
                        ClientMaster::Table,
                    ))
                    .foreign_key(&mut references(
                        "fk_visit_pet",
                        (VisitMaster::Table, VisitMaster::PetId),
                        PetMaster::Table,
                    ))
                    .foreign_key(&mut references(
                        "fk_visit_doctor",
                        (VisitMaster::Table, VisitMaster::DoctorId),
                        UserMaster::Table,
                    ))
                    .foreign_key(&mut references(
                        "fk_visit_service",
                        (VisitMaster::Table, VisitMaster::ServiceId),
                        ServiceMaster::Table,
                    ))
                    .foreign_key(&mut references(
                        "fk_visit_last_updated_by",
                        (VisitMaster::Table, VisitMaster::LastUpdatedById),
                        UserMaster::Table,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                master(LeadMaster::Table)
                    .col(ColumnDef::new(LeadMaster::Name).string_len(255).not_null().default(""))
                    .col(ColumnDef::new(LeadMaster::Phone).string().not_null().default(""))
                    .col(ColumnDef::new(LeadMaster::Email).string().not_null().default(""))
                    .col(ColumnDef::new(LeadMaster::Comment).text().not_null().default(""))
                    .col(ColumnDef::new(LeadMaster::Type).string().not_null().default(""))
                    .col(ColumnDef::new(LeadMaster::Status).string().not_null().default(""))
                    .col(ColumnDef::new(LeadMaster::DoctorId).integer().null())
                    .col(ColumnDef::new(LeadMaster::LastUpdatedById).integer().null())
                    .foreign_key(&mut references(
                        "fk_lead_doctor",
                        (LeadMaster::Table, LeadMaster::DoctorId),
                        UserMaster::Table,
                    ))
                    .foreign_key(&mut references(
                        "fk_lead_last_updated_by",
                        (LeadMaster::Table, LeadMaster::LastUpdatedById),
                        UserMaster::Table,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(join_table(
                UsersDepartments::Table,
                (UsersDepartments::UserId, UserMaster::Table),
                (UsersDepartments::DepartmentId, DepartmentMaster::Table),
            ))
            .await?;

        manager
            .create_table(join_table(
                UsersServices::Table,
                (UsersServices::UserId, UserMaster::Table),
                (UsersServices::ServiceId, ServiceMaster::Table),
            ))
            .await?;

        manager
            .create_table(join_table(
                DepartmentsServices::Table,
                (DepartmentsServices::DepartmentId, DepartmentMaster::Table),
                (DepartmentsServices::ServiceId, ServiceMaster::Table),
            ))
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Reverse creation order so foreign keys never dangle
        let tables: [DynIden; 12] = [
            DepartmentsServices::Table.into_iden(),
            UsersServices::Table.into_iden(),
            UsersDepartments::Table.into_iden(),
            LeadMaster::Table.into_iden(),
            VisitMaster::Table.into_iden(),
            PetMaster::Table.into_iden(),
            UserMaster::Table.into_iden(),
            ServiceMaster::Table.into_iden(),
            ClientMaster::Table.into_iden(),
            DepartmentMaster::Table.into_iden(),
            CategoryMaster::Table.into_iden(),
            RoleMaster::Table.into_iden(),
        ];

        for table in tables {
            manager
                .drop_table(Table::drop().table(table).if_exists().to_owned())
                .await?;
        }
        Ok(())
    }
}

/// Table with the shared id, timestamp and soft delete columns.
fn master<T: IntoIden + 'static>(table: T) -> TableCreateStatement {
    Table::create()
        .table(table)
        .if_not_exists()
        .col(
            ColumnDef::new(Base::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Base::CreatedAt).timestamp_with_time_zone().not_null())
        .col(ColumnDef::new(Base::UpdatedAt).timestamp_with_time_zone().not_null())
        .col(ColumnDef::new(Base::DeletedAt).timestamp_with_time_zone().null())
        .to_owned()
}

/// Nullable reference: the row survives its target, updates cascade.
fn references<T, C, R>(name: &str, from: (T, C), to: R) -> ForeignKeyCreateStatement
where
    T: IntoIden + 'static,
    C: IntoIden + 'static,
    R: IntoIden + 'static,
{
    ForeignKey::create()
        .name(name)
        .from(from.0, from.1)
        .to(to, Base::Id)
        .on_delete(ForeignKeyAction::SetNull)
        .on_update(ForeignKeyAction::Cascade)
        .to_owned()
}

fn join_table<T, L, LT, R, RT>(table: T, left: (L, LT), right: (R, RT)) -> TableCreateStatement
where
    T: IntoIden + Clone + 'static,
    L: IntoIden + Clone + 'static,
    LT: IntoIden + 'static,
    R: IntoIden + Clone + 'static,
    RT: IntoIden + 'static,
{
    Table::create()
        .table(table.clone())
        .if_not_exists()
        .col(ColumnDef::new(left.0.clone()).integer().not_null())
        .col(ColumnDef::new(right.0.clone()).integer().not_null())
        .primary_key(Index::create().col(left.0.clone()).col(right.0.clone()))
        .foreign_key(
            ForeignKey::create()
                .from(table.clone(), left.0)
                .to(left.1, Base::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .from(table, right.0)
                .to(right.1, Base::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

#[derive(Iden)]
enum Base {
    Id,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(Iden)]
enum RoleMaster {
    Table,
    Name,
}

#[derive(Iden)]
enum CategoryMaster {
    Table,
    Name,
}

#[derive(Iden)]
enum DepartmentMaster {
    Table,
    Name,
    Slug,
}

#[derive(Iden)]
enum ClientMaster {
    Table,
    Surname,
    Name,
    Patronymic,
    Sex,
    BirthDate,
    Phone,
    Email,
    Info,
}

#[derive(Iden)]
enum ServiceMaster {
    Table,
    Name,
    Price,
    CategoryId,
}

#[derive(Iden)]
enum UserMaster {
    Table,
    Username,
    Email,
    Phone,
    Active,
    Password,
    Surname,
    Name,
    Patronymic,
    Sex,
    BirthDate,
    Profession,
    Info,
    Slug,
    RoleId,
}

#[derive(Iden)]
enum PetMaster {
    Table,
    Name,
    Type,
    Breed,
    Colour,
    Sex,
    ClientId,
}

#[derive(Iden)]
enum VisitMaster {
    Table,
    DateTime,
    Info,
    ClientId,
    PetId,
    DoctorId,
    ServiceId,
    LastUpdatedById,
}

#[derive(Iden)]
enum LeadMaster {
    Table,
    Name,
    Phone,
    Email,
    Comment,
    Type,
    Status,
    DoctorId,
    LastUpdatedById,
}

#[derive(Iden, Clone)]
enum UsersDepartments {
    Table,
    UserId,
    DepartmentId,
}

#[derive(Iden, Clone)]
enum UsersServices {
    Table,
    UserId,
    ServiceId,
}

#[derive(Iden, Clone)]
enum DepartmentsServices {
    Table,
    DepartmentId,
    ServiceId,
}
