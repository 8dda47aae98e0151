//! Service layer tests over mocked repositories.

use std::sync::Arc;

use chrono::Utc;
use mockall::predicate::eq;

use vet_clinic::domain::{
    CreateUser, Department, Password, Role, RoleInput, UpdatePassword, UpdateUser, User,
};
use vet_clinic::errors::AppError;
use vet_clinic::infra::{
    CategoryRepository, ClientRepository, DepartmentRepository, LeadRepository,
    MockCategoryRepository, MockClientRepository, MockDepartmentRepository, MockLeadRepository,
    MockPetRepository, MockRoleRepository, MockServiceRepository, MockUserRepository,
    MockVisitRepository, PetRepository, RoleRepository, ServiceRepository, UnitOfWork,
    UserRepository, VisitRepository,
};
use vet_clinic::services::{
    AuthService, Authenticator, DepartmentManager, DepartmentService, RoleManager, RoleService,
    UserManager, UserService,
};

/// Unit of Work handing out mocks. Repositories a test does not set up
/// have no expectations and panic if called.
#[derive(Default)]
struct TestUnitOfWork {
    roles: Arc<MockRoleRepository>,
    users: Arc<MockUserRepository>,
    departments: Arc<MockDepartmentRepository>,
    categories: Arc<MockCategoryRepository>,
    services: Arc<MockServiceRepository>,
    clients: Arc<MockClientRepository>,
    pets: Arc<MockPetRepository>,
    visits: Arc<MockVisitRepository>,
    leads: Arc<MockLeadRepository>,
}

impl TestUnitOfWork {
    fn with_roles(roles: MockRoleRepository) -> Arc<Self> {
        Arc::new(Self {
            roles: Arc::new(roles),
            ..Self::default()
        })
    }

    fn with_users(users: MockUserRepository) -> Arc<Self> {
        Arc::new(Self {
            users: Arc::new(users),
            ..Self::default()
        })
    }

    fn with_departments(departments: MockDepartmentRepository) -> Arc<Self> {
        Arc::new(Self {
            departments: Arc::new(departments),
            ..Self::default()
        })
    }
}

impl UnitOfWork for TestUnitOfWork {
    fn roles(&self) -> Arc<dyn RoleRepository> {
        self.roles.clone()
    }
    fn categories(&self) -> Arc<dyn CategoryRepository> {
        self.categories.clone()
    }
    fn services(&self) -> Arc<dyn ServiceRepository> {
        self.services.clone()
    }
    fn departments(&self) -> Arc<dyn DepartmentRepository> {
        self.departments.clone()
    }
    fn clients(&self) -> Arc<dyn ClientRepository> {
        self.clients.clone()
    }
    fn pets(&self) -> Arc<dyn PetRepository> {
        self.pets.clone()
    }
    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }
    fn visits(&self) -> Arc<dyn VisitRepository> {
        self.visits.clone()
    }
    fn leads(&self) -> Arc<dyn LeadRepository> {
        self.leads.clone()
    }
}

fn role(id: i32, name: &str) -> Role {
    Role {
        id,
        name: name.to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn user_with_password(id: i32, password: &str) -> User {
    User {
        id,
        username: "Test1".to_string(),
        slug: id.to_string(),
        password_hash: Password::with_cost(password, 4).unwrap().into_string(),
        role_id: Some(4),
        role: Some(role(4, "Superuser")),
        ..User::default()
    }
}

// =============================================================================
// Roles
// =============================================================================

#[tokio::test]
async fn test_get_role_by_id() {
    let mut repo = MockRoleRepository::new();
    repo.expect_find_by_id()
        .with(eq(2))
        .returning(|id| Ok(Some(role(id, "Admin"))));

    let service = RoleManager::new(TestUnitOfWork::with_roles(repo));
    let found = service.get("2").await.unwrap();
    assert_eq!(found.name, "Admin");
}

#[tokio::test]
async fn test_get_missing_role_is_not_found() {
    let mut repo = MockRoleRepository::new();
    repo.expect_find_by_id().returning(|_| Ok(None));

    let service = RoleManager::new(TestUnitOfWork::with_roles(repo));
    assert!(matches!(service.get("9").await, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_non_numeric_role_id_never_reaches_repository() {
    let repo = MockRoleRepository::new();
    let service = RoleManager::new(TestUnitOfWork::with_roles(repo));

    assert!(matches!(service.get("admin").await, Err(AppError::InvalidInput)));
    let input = RoleInput {
        name: "Staff".to_string(),
    };
    assert!(matches!(
        service.update("1x", input).await,
        Err(AppError::InvalidInput)
    ));
    assert!(matches!(service.delete("").await, Err(AppError::InvalidInput)));
}

#[tokio::test]
async fn test_delete_role_returns_snapshot() {
    let mut repo = MockRoleRepository::new();
    repo.expect_delete()
        .with(eq(3))
        .times(1)
        .returning(|id| Ok(role(id, "Owner")));

    let service = RoleManager::new(TestUnitOfWork::with_roles(repo));
    let deleted = service.delete("3").await.unwrap();
    assert_eq!(deleted.id, 3);
    assert_eq!(deleted.name, "Owner");
}

// =============================================================================
// Departments
// =============================================================================

#[tokio::test]
async fn test_get_department_by_slug() {
    let mut repo = MockDepartmentRepository::new();
    repo.expect_find_by_slug()
        .withf(|slug| slug == "kardiologiya")
        .returning(|slug| {
            Ok(Some(Department {
                id: 2,
                slug: slug.to_string(),
                ..Department::default()
            }))
        });

    let service = DepartmentManager::new(TestUnitOfWork::with_departments(repo));
    let found = service.get("kardiologiya").await.unwrap();
    assert_eq!(found.id, 2);
}

#[tokio::test]
async fn test_department_update_requires_numeric_id() {
    let repo = MockDepartmentRepository::new();
    let service = DepartmentManager::new(TestUnitOfWork::with_departments(repo));

    let result = service.update("kardiologiya", Default::default()).await;
    assert!(matches!(result, Err(AppError::InvalidInput)));
}

// =============================================================================
// Users
// =============================================================================

#[tokio::test]
async fn test_get_user_by_id_and_slug() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .with(eq(1))
        .returning(|id| Ok(Some(user_with_password(id, "Password1!"))));
    repo.expect_find_by_slug()
        .withf(|slug| slug == "familiya-imya")
        .returning(|_| Ok(Some(user_with_password(1, "Password1!"))));

    let service = UserManager::new(TestUnitOfWork::with_users(repo));
    assert_eq!(service.get("1").await.unwrap().id, 1);
    assert_eq!(service.get("familiya-imya").await.unwrap().id, 1);
    assert!(matches!(
        service.get("Not A Slug").await,
        Err(AppError::InvalidInput)
    ));
}

#[tokio::test]
async fn test_create_user_hashes_password() {
    let mut repo = MockUserRepository::new();
    repo.expect_create()
        .withf(|new_user| {
            new_user.username == "Doctor"
                && new_user.role_id == 1
                && Password::from_hash(new_user.password_hash.clone()).verify("Password2!")
        })
        .times(1)
        .returning(|new_user| {
            Ok(User {
                id: 2,
                username: new_user.username,
                ..User::default()
            })
        });

    let service = UserManager::new(TestUnitOfWork::with_users(repo));
    let created = service
        .create(CreateUser {
            username: "Doctor".to_string(),
            password: "Password2!".to_string(),
            role_id: 1,
        })
        .await
        .unwrap();
    assert_eq!(created.id, 2);
}

#[tokio::test]
async fn test_update_dispatches_on_owner_flag() {
    let mut repo = MockUserRepository::new();
    repo.expect_update_by_owner()
        .with(eq(1), mockall::predicate::always())
        .times(1)
        .returning(|id, _| Ok(user_with_password(id, "Password1!")));
    repo.expect_update_profile()
        .with(eq(2), mockall::predicate::always())
        .times(1)
        .returning(|id, _| Ok(user_with_password(id, "Password1!")));

    let service = UserManager::new(TestUnitOfWork::with_users(repo));
    service.update("1", UpdateUser::default(), true).await.unwrap();
    service.update("2", UpdateUser::default(), false).await.unwrap();
}

#[tokio::test]
async fn test_update_missing_user_is_not_found() {
    let mut repo = MockUserRepository::new();
    repo.expect_update_by_owner()
        .returning(|_, _| Err(AppError::NotFound));

    let service = UserManager::new(TestUnitOfWork::with_users(repo));
    let result = service.update("42", UpdateUser::default(), true).await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn test_login_success() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_login()
        .withf(|login| login == "test1@test.com")
        .returning(|_| Ok(Some(user_with_password(1, "Password1!"))));

    let auth = Authenticator::new(TestUnitOfWork::with_users(repo));
    let user = auth.login("test1@test.com", "Password1!").await.unwrap();
    assert_eq!(user.id, 1);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_login()
        .returning(|_| Ok(Some(user_with_password(1, "Password1!"))));

    let auth = Authenticator::new(TestUnitOfWork::with_users(repo));
    let result = auth.login("Test1", "Password9!").await;
    assert!(matches!(result, Err(AppError::InvalidCredentials)));
}

#[tokio::test]
async fn test_login_unknown_user() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_login().returning(|_| Ok(None));

    let auth = Authenticator::new(TestUnitOfWork::with_users(repo));
    let result = auth.login("nobody", "Password1!").await;
    assert!(matches!(result, Err(AppError::InvalidCredentials)));
}

#[tokio::test]
async fn test_change_password_rejects_wrong_old_password() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .returning(|id| Ok(Some(user_with_password(id, "Password1!"))));
    repo.expect_change_password().never();

    let auth = Authenticator::new(TestUnitOfWork::with_users(repo));
    let input = UpdatePassword {
        old_password: "Password0!".to_string(),
        new_password: "Password2!".to_string(),
        confirm_password: "Password2!".to_string(),
    };
    let result = auth.change_password(1, input).await;
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_change_password_stores_new_hash() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .returning(|id| Ok(Some(user_with_password(id, "Password1!"))));
    repo.expect_change_password()
        .withf(|id, hash| {
            let stored = Password::from_hash(hash.clone());
            *id == 1 && stored.verify("Password2!") && !stored.verify("Password1!")
        })
        .times(1)
        .returning(|_, _| Ok(()));

    let auth = Authenticator::new(TestUnitOfWork::with_users(repo));
    let input = UpdatePassword {
        old_password: "Password1!".to_string(),
        new_password: "Password2!".to_string(),
        confirm_password: "Password2!".to_string(),
    };
    auth.change_password(1, input).await.unwrap();
}

#[tokio::test]
async fn test_current_user_of_deleted_account_is_none() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id().returning(|_| Ok(None));

    let auth = Authenticator::new(TestUnitOfWork::with_users(repo));
    assert!(auth.current_user(7).await.unwrap().is_none());
}
