//! Master data for a fresh database.
//!
//! Rows are inserted through the repositories, so the same checks apply as
//! for API writes. A failing row is logged and skipped.

use chrono::{NaiveDate, TimeZone, Utc};

use super::unit_of_work::UnitOfWork;
use crate::domain::{
    AccessLevel, CategoryInput, ClientInput, DepartmentInput, LeadInput, NewUser, Password,
    PetInput, RoleInput, ServiceInput, UpdateUser, VisitInput,
};
use crate::errors::AppResult;

const CATEGORIES: [&str; 4] = [
    "Консультация",
    "Процедуры",
    "Кардиология",
    "Инструментальная диагностика",
];

const SERVICES: [(&str, f64, i32); 8] = [
    ("Консультация", 1000.0, 1),
    ("Прием врача терапевта", 3000.0, 1),
    ("Стрижка когтей", 800.0, 2),
    ("Глюкометрия", 400.0, 2),
    ("Вакцинация", 2500.0, 2),
    ("Залог за прибор для телеметрии", 30000.0, 3),
    ("ЭхоКГ скрининг", 3500.0, 4),
    ("Холтеровское мониторирование", 9500.0, 4),
];

/// Password of the seeded `Test1` superuser.
pub const SEED_PASSWORD: &str = "Password1!";

fn log_failure<T>(what: &str, result: AppResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Seeding {} failed: {}", what, e);
            None
        }
    }
}

/// Insert roles, categories, services, departments and one sample of every
/// other entity.
pub async fn seed_master_data(uow: &dyn UnitOfWork) -> AppResult<()> {
    tracing::info!("Generating master data");

    for level in &AccessLevel::ALL[1..] {
        let input = RoleInput {
            name: level.as_str().to_string(),
        };
        log_failure("role", uow.roles().create(input).await);
    }

    for name in CATEGORIES {
        let input = CategoryInput {
            name: name.to_string(),
        };
        log_failure("category", uow.categories().create(input).await);
    }

    for (name, price, category_id) in SERVICES {
        let input = ServiceInput {
            name: name.to_string(),
            price,
            category_id,
        };
        log_failure("service", uow.services().create(input).await);
    }

    let departments = [("Терапия", vec![1, 2, 3, 4, 5]), ("Кардиология", vec![1, 6, 7, 8])];
    for (name, services) in departments {
        let input = DepartmentInput {
            name: name.to_string(),
            services,
        };
        log_failure("department", uow.departments().create(input).await);
    }

    let password = Password::new(SEED_PASSWORD)?;
    let user = log_failure(
        "user",
        uow.users()
            .create(NewUser {
                username: "Test1".to_string(),
                password_hash: password.into_string(),
                role_id: 4,
            })
            .await,
    );
    if let Some(user) = user {
        let profile = UpdateUser {
            email: "test1@test.com".to_string(),
            phone: "+71111111111".to_string(),
            active: true,
            surname: "Фамилия".to_string(),
            name: "Имя".to_string(),
            patronymic: "Отчество".to_string(),
            sex: "Женский".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1995, 1, 1),
            profession: "Терапевт".to_string(),
            info: "Информация".to_string(),
            role_id: 4,
            departments: vec![1],
            services: vec![1, 3, 4, 5],
        };
        log_failure("user profile", uow.users().update_by_owner(user.id, profile).await);
    }

    let client = ClientInput {
        surname: "Фамилия".to_string(),
        name: "Имя".to_string(),
        patronymic: "Отчество".to_string(),
        sex: "Мужской".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1991, 1, 1),
        phone: "+78888888888".to_string(),
        email: "mail@mail.su".to_string(),
        info: "Информация".to_string(),
    };
    log_failure("client", uow.clients().create(client).await);

    let pet = PetInput {
        name: "Китти".to_string(),
        kind: "Кошка".to_string(),
        breed: "Дворняга".to_string(),
        colour: "Серый полосатый".to_string(),
        sex: "Самка".to_string(),
        client_id: 1,
    };
    log_failure("pet", uow.pets().create(pet).await);

    if let Some(date_time) = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single() {
        let visit = VisitInput {
            date_time,
            info: "Вакцинация".to_string(),
            client_id: 1,
            pet_id: 1,
            doctor_id: 1,
            service_id: 5,
            last_updated_by_id: 1,
        };
        log_failure("visit", uow.visits().create(visit).await);
    }

    let lead = LeadInput {
        name: "Александр".to_string(),
        phone: "+79992225566".to_string(),
        email: "alex@test.com".to_string(),
        comment: "Комментарий клиента".to_string(),
        kind: "callback".to_string(),
        status: "rejected".to_string(),
        doctor_id: 1,
        last_updated_by_id: 1,
    };
    log_failure("lead", uow.leads().create(lead).await);

    tracing::info!("Master data generated");
    Ok(())
}
