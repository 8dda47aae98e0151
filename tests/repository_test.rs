//! Repository and service tests against an in-memory SQLite database.
//!
//! Every test gets a fresh schema with seeded master data.

use std::sync::Arc;

use chrono::{NaiveDate, TimeZone, Utc};
use tokio_test::{assert_err, assert_ok};

use vet_clinic::config::DatabaseConfig;
use vet_clinic::domain::{
    CategoryInput, ClientInput, DepartmentInput, LeadInput, NewUser, PetInput, RoleInput,
    ServiceInput, UpdatePassword, UpdateUser, VisitInput,
};
use vet_clinic::errors::AppError;
use vet_clinic::infra::seed::SEED_PASSWORD;
use vet_clinic::infra::{seed_master_data, Database, Persistence, UnitOfWork};
use vet_clinic::services::{AuthService, Authenticator, LeadService, LeadManager};

async fn seeded() -> Arc<Persistence> {
    let db = Database::connect(&DatabaseConfig::in_memory())
        .await
        .expect("connect to in-memory database");
    db.run_migrations().await.expect("apply migrations");

    let uow = Arc::new(Persistence::new(db.get_connection()));
    seed_master_data(uow.as_ref()).await.expect("seed master data");
    uow
}

#[tokio::test]
async fn test_master_data_is_seeded() {
    let uow = seeded().await;

    assert_eq!(uow.roles().list().await.unwrap().len(), 4);
    assert_eq!(uow.categories().list().await.unwrap().len(), 4);
    assert_eq!(uow.services().list().await.unwrap().len(), 8);
    assert_eq!(uow.departments().list().await.unwrap().len(), 2);
    assert_eq!(uow.users().list().await.unwrap().len(), 1);
    assert_eq!(uow.clients().list().await.unwrap().len(), 1);
    assert_eq!(uow.pets().list().await.unwrap().len(), 1);
    assert_eq!(uow.visits().list().await.unwrap().len(), 1);
    assert_eq!(uow.leads().list().await.unwrap().len(), 1);

    let user = uow.users().find_by_id(1).await.unwrap().unwrap();
    assert_eq!(user.username, "Test1");
    assert_eq!(user.role.unwrap().name, "Superuser");
    assert_eq!(user.departments.len(), 1);
    assert_eq!(user.services.len(), 4);
}

#[tokio::test]
async fn test_seeded_user_logs_in_with_every_identifier() {
    let uow = seeded().await;
    let auth = Authenticator::new(uow.clone());

    for login in ["Test1", "test1@test.com", "+71111111111"] {
        let user = auth.login(login, SEED_PASSWORD).await.unwrap();
        assert_eq!(user.id, 1);
    }

    let result = auth.login("Test1", "Password9!").await;
    assert!(matches!(result, Err(AppError::InvalidCredentials)));
}

#[tokio::test]
async fn test_password_change_replaces_credentials() {
    let uow = seeded().await;
    let auth = Authenticator::new(uow.clone());

    let change = UpdatePassword {
        old_password: SEED_PASSWORD.to_string(),
        new_password: "Password2!".to_string(),
        confirm_password: "Password2!".to_string(),
    };
    auth.change_password(1, change).await.unwrap();

    assert!(auth.login("Test1", SEED_PASSWORD).await.is_err());
    assert_eq!(auth.login("test1@test.com", "Password2!").await.unwrap().id, 1);
}

#[tokio::test]
async fn test_owner_update_drops_unknown_associations() {
    let uow = seeded().await;

    let input = UpdateUser {
        email: "test1@test.com".to_string(),
        phone: "+71111111111".to_string(),
        active: true,
        role_id: 4,
        departments: vec![1, 42],
        services: vec![1, 99],
        ..UpdateUser::default()
    };
    let user = uow.users().update_by_owner(1, input).await.unwrap();

    let services: Vec<i32> = user.services.iter().map(|s| s.id).collect();
    let departments: Vec<i32> = user.departments.iter().map(|d| d.id).collect();
    assert_eq!(services, vec![1]);
    assert_eq!(departments, vec![1]);
}

#[tokio::test]
async fn test_user_slug_tracks_full_name() {
    let uow = seeded().await;

    let seeded_user = uow.users().find_by_id(1).await.unwrap().unwrap();
    let by_slug = uow.users().find_by_slug(&seeded_user.slug).await.unwrap();
    assert_eq!(by_slug.map(|u| u.id), Some(1));

    let created = uow
        .users()
        .create(NewUser {
            username: "Nameless".to_string(),
            password_hash: "hash".to_string(),
            role_id: 1,
        })
        .await
        .unwrap();
    assert_eq!(created.slug, created.id.to_string());
    assert!(created.active);

    let input = UpdateUser {
        role_id: 1,
        ..UpdateUser::default()
    };
    let updated = uow.users().update_by_owner(created.id, input).await.unwrap();
    assert_eq!(updated.slug, created.id.to_string());
}

#[tokio::test]
async fn test_duplicate_username_conflicts() {
    let uow = seeded().await;

    let result = uow
        .users()
        .create(NewUser {
            username: "Test1".to_string(),
            password_hash: "hash".to_string(),
            role_id: 1,
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn test_delete_returns_snapshot_and_hides_row() {
    let uow = seeded().await;

    let deleted = uow.pets().delete(1).await.unwrap();
    assert_eq!(deleted.id, 1);
    assert_eq!(deleted.name, "Китти");
    assert_eq!(deleted.client.map(|c| c.id), Some(1));

    assert!(uow.pets().find_by_id(1).await.unwrap().is_none());
    assert!(uow.pets().list().await.unwrap().is_empty());
    assert!(matches!(uow.pets().delete(1).await, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_update_of_missing_row_is_not_found() {
    let uow = seeded().await;

    let input = PetInput {
        name: "Барсик".to_string(),
        client_id: 1,
        ..PetInput::default()
    };
    let err = assert_err!(uow.pets().update(77, input).await);

    assert!(matches!(err, AppError::NotFound));
    assert_eq!(assert_ok!(uow.pets().list().await).len(), 1);
}

#[tokio::test]
async fn test_pet_requires_live_client() {
    let uow = seeded().await;

    let input = PetInput {
        name: "Барсик".to_string(),
        client_id: 5,
        ..PetInput::default()
    };
    assert!(matches!(uow.pets().create(input).await, Err(AppError::NotFound)));

    uow.clients().delete(1).await.unwrap();
    let input = PetInput {
        name: "Барсик".to_string(),
        client_id: 1,
        ..PetInput::default()
    };
    assert!(matches!(uow.pets().create(input).await, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_new_leads_are_always_open() {
    let uow = seeded().await;

    let seeded_lead = uow.leads().find_by_id(1).await.unwrap().unwrap();
    assert_eq!(seeded_lead.status, "open");

    let leads = LeadManager::new(uow.clone());
    let lead = leads.get("1").await.unwrap();
    assert_eq!(lead.doctor_id, Some(1));
    assert!(matches!(leads.get("abc").await, Err(AppError::InvalidInput)));
}

// =============================================================================
// Per-entity create / update / delete
// =============================================================================

#[tokio::test]
async fn test_role_lifecycle() {
    let uow = seeded().await;
    let roles = uow.roles();

    let created = assert_ok!(roles.create(RoleInput { name: "Guest".to_string() }).await);
    let found = assert_ok!(roles.find_by_id(created.id).await).unwrap();
    assert_eq!(found.name, "Guest");

    let err = assert_err!(roles.update(99, RoleInput { name: "Nobody".to_string() }).await);
    assert!(matches!(err, AppError::NotFound));
    assert_eq!(assert_ok!(roles.list().await).len(), 5);

    let updated = assert_ok!(roles.update(created.id, RoleInput { name: "Visitor".to_string() }).await);
    assert_eq!(updated.name, "Visitor");

    let deleted = assert_ok!(roles.delete(created.id).await);
    assert_eq!(deleted.name, "Visitor");
    assert!(assert_ok!(roles.find_by_id(created.id).await).is_none());
}

#[tokio::test]
async fn test_category_lifecycle() {
    let uow = seeded().await;
    let categories = uow.categories();

    let input = CategoryInput {
        name: "Хирургия".to_string(),
    };
    let created = assert_ok!(categories.create(input).await);
    let found = assert_ok!(categories.find_by_id(created.id).await).unwrap();
    assert_eq!(found.name, "Хирургия");

    let missing = CategoryInput {
        name: "Терапия".to_string(),
    };
    assert!(matches!(assert_err!(categories.update(99, missing).await), AppError::NotFound));
    assert_eq!(assert_ok!(categories.list().await).len(), 5);

    let deleted = assert_ok!(categories.delete(created.id).await);
    assert_eq!(deleted.id, created.id);
    assert!(assert_ok!(categories.find_by_id(created.id).await).is_none());
}

#[tokio::test]
async fn test_service_lifecycle() {
    let uow = seeded().await;
    let services = uow.services();

    let input = ServiceInput {
        name: "Рентген".to_string(),
        price: 1500.0,
        category_id: 4,
    };
    let created = assert_ok!(services.create(input).await);
    let found = assert_ok!(services.find_by_id(created.id).await).unwrap();
    assert_eq!(found.name, "Рентген");
    assert_eq!(found.price, 1500.0);
    assert_eq!(found.category.map(|c| c.id), Some(4));

    let orphan = ServiceInput {
        name: "УЗИ".to_string(),
        price: 100.0,
        category_id: 42,
    };
    assert!(matches!(assert_err!(services.create(orphan).await), AppError::NotFound));

    let missing = ServiceInput {
        name: "УЗИ".to_string(),
        price: 100.0,
        category_id: 1,
    };
    assert!(matches!(assert_err!(services.update(99, missing).await), AppError::NotFound));
    assert_eq!(assert_ok!(services.list().await).len(), 9);

    let deleted = assert_ok!(services.delete(created.id).await);
    assert_eq!(deleted.name, "Рентген");
    assert!(assert_ok!(services.find_by_id(created.id).await).is_none());
}

#[tokio::test]
async fn test_department_lifecycle() {
    let uow = seeded().await;
    let departments = uow.departments();

    let input = DepartmentInput {
        name: "Хирургия".to_string(),
        services: vec![2, 77],
    };
    let created = assert_ok!(departments.create(input).await);
    let found = assert_ok!(departments.find_by_id(created.id).await).unwrap();
    assert_eq!(found.name, "Хирургия");
    assert_eq!(found.slug, "khirurgiia");
    let services: Vec<i32> = found.services.iter().map(|s| s.id).collect();
    assert_eq!(services, vec![2]);

    let missing = DepartmentInput {
        name: "Неврология".to_string(),
        services: vec![1],
    };
    assert!(matches!(assert_err!(departments.update(99, missing).await), AppError::NotFound));
    assert_eq!(assert_ok!(departments.list().await).len(), 3);

    let deleted = assert_ok!(departments.delete(created.id).await);
    assert_eq!(deleted.services.len(), 1);
    assert!(assert_ok!(departments.find_by_id(created.id).await).is_none());
    assert!(assert_ok!(departments.find_by_slug("khirurgiia").await).is_none());
}

#[tokio::test]
async fn test_department_update_drops_unknown_services() {
    let uow = seeded().await;
    let departments = uow.departments();

    let input = DepartmentInput {
        name: "Терапия".to_string(),
        services: vec![1, 99],
    };
    let updated = assert_ok!(departments.update(1, input).await);

    let services: Vec<i32> = updated.services.iter().map(|s| s.id).collect();
    assert_eq!(services, vec![1]);
}

#[tokio::test]
async fn test_department_found_by_slug() {
    let uow = seeded().await;

    let department = assert_ok!(uow.departments().find_by_slug("terapiia").await).unwrap();
    assert_eq!(department.id, 1);
    assert_eq!(department.services.len(), 5);
    assert!(assert_ok!(uow.departments().find_by_slug("unknown").await).is_none());
}

#[tokio::test]
async fn test_client_lifecycle() {
    let uow = seeded().await;
    let clients = uow.clients();

    let input = ClientInput {
        surname: "Петров".to_string(),
        name: "Пётр".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1980, 5, 17),
        phone: "+79990001122".to_string(),
        email: "petrov@mail.su".to_string(),
        ..ClientInput::default()
    };
    let created = assert_ok!(clients.create(input).await);
    let found = assert_ok!(clients.find_by_id(created.id).await).unwrap();
    assert_eq!(found.surname, "Петров");
    assert_eq!(found.birth_date, NaiveDate::from_ymd_opt(1980, 5, 17));
    assert_eq!(found.email, "petrov@mail.su");

    let missing = ClientInput {
        name: "Иван".to_string(),
        ..ClientInput::default()
    };
    assert!(matches!(assert_err!(clients.update(99, missing).await), AppError::NotFound));
    assert_eq!(assert_ok!(clients.list().await).len(), 2);

    let deleted = assert_ok!(clients.delete(created.id).await);
    assert_eq!(deleted.phone, "+79990001122");
    assert!(assert_ok!(clients.find_by_id(created.id).await).is_none());
}

#[tokio::test]
async fn test_visit_lifecycle() {
    let uow = seeded().await;
    let visits = uow.visits();
    let date_time = Utc.with_ymd_and_hms(2024, 3, 15, 12, 30, 0).unwrap();

    let input = VisitInput {
        date_time,
        info: "Осмотр".to_string(),
        client_id: 1,
        pet_id: 1,
        doctor_id: 1,
        service_id: 2,
        last_updated_by_id: 1,
    };
    let created = assert_ok!(visits.create(input.clone()).await);
    let found = assert_ok!(visits.find_by_id(created.id).await).unwrap();
    assert_eq!(found.date_time, date_time);
    assert_eq!(found.info, "Осмотр");
    assert_eq!(found.service.map(|s| s.id), Some(2));
    assert_eq!(found.last_updated_by_id, Some(1));

    let no_service = VisitInput {
        service_id: 99,
        ..input.clone()
    };
    assert!(matches!(assert_err!(visits.create(no_service).await), AppError::NotFound));
    assert!(matches!(assert_err!(visits.update(99, input).await), AppError::NotFound));
    assert_eq!(assert_ok!(visits.list().await).len(), 2);

    let deleted = assert_ok!(visits.delete(created.id).await);
    assert_eq!(deleted.info, "Осмотр");
    assert!(assert_ok!(visits.find_by_id(created.id).await).is_none());
}

#[tokio::test]
async fn test_lead_lifecycle() {
    let uow = seeded().await;
    let leads = uow.leads();

    let input = LeadInput {
        name: "Мария".to_string(),
        phone: "+79995554433".to_string(),
        kind: "online".to_string(),
        status: "closed".to_string(),
        doctor_id: 1,
        last_updated_by_id: 1,
        ..LeadInput::default()
    };
    let created = assert_ok!(leads.create(input.clone()).await);
    let found = assert_ok!(leads.find_by_id(created.id).await).unwrap();
    assert_eq!(found.name, "Мария");
    assert_eq!(found.kind, "online");
    assert_eq!(found.status, "open");

    assert!(matches!(assert_err!(leads.update(99, input.clone()).await), AppError::NotFound));
    assert_eq!(assert_ok!(leads.list().await).len(), 2);

    let updated = assert_ok!(leads.update(created.id, input).await);
    assert_eq!(updated.status, "closed");
    assert_eq!(updated.last_updated_by_id, Some(1));

    let deleted = assert_ok!(leads.delete(created.id).await);
    assert_eq!(deleted.status, "closed");
    assert!(assert_ok!(leads.find_by_id(created.id).await).is_none());
}
