//! OpenAPI documentation configuration.
//!
//! Served through Swagger UI when `swagger.enabled` is set.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    auth_handler, category_handler, client_handler, department_handler, lead_handler,
    pet_handler, role_handler, service_handler, system_handler, user_handler, visit_handler,
};
use crate::config::SESSION_COOKIE;
use crate::domain::{
    AccessLevel, Category, CategoryInput, Client, ClientInput, CreateUser, Department,
    DepartmentInput, Lead, LeadInput, LoginRequest, Pet, PetInput, Role, RoleInput, Service,
    ServiceInput, UpdatePassword, UpdateUser, User, Visit, VisitInput,
};

/// OpenAPI documentation for the vet clinic API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vet Clinic API",
        version = "0.1.0",
        description = "Administration backend for a veterinary clinic: staff, catalogue, clients, pets, visits and leads",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        system_handler::health,
        auth_handler::login,
        auth_handler::logout,
        auth_handler::get_profile,
        auth_handler::update_profile,
        auth_handler::update_password,
        role_handler::get_role,
        role_handler::list_roles,
        role_handler::create_role,
        role_handler::update_role,
        role_handler::delete_role,
        user_handler::get_user,
        user_handler::list_users,
        user_handler::create_user,
        user_handler::update_user,
        user_handler::delete_user,
        department_handler::get_department,
        department_handler::list_departments,
        department_handler::create_department,
        department_handler::update_department,
        department_handler::delete_department,
        category_handler::get_category,
        category_handler::list_categories,
        category_handler::create_category,
        category_handler::update_category,
        category_handler::delete_category,
        service_handler::get_service,
        service_handler::list_services,
        service_handler::create_service,
        service_handler::update_service,
        service_handler::delete_service,
        client_handler::get_client,
        client_handler::list_clients,
        client_handler::create_client,
        client_handler::update_client,
        client_handler::delete_client,
        pet_handler::get_pet,
        pet_handler::list_pets,
        pet_handler::create_pet,
        pet_handler::update_pet,
        pet_handler::delete_pet,
        visit_handler::get_visit,
        visit_handler::list_visits,
        visit_handler::create_visit,
        visit_handler::update_visit,
        visit_handler::delete_visit,
        lead_handler::get_lead,
        lead_handler::list_leads,
        lead_handler::create_lead,
        lead_handler::update_lead,
        lead_handler::delete_lead,
    ),
    components(
        schemas(
            AccessLevel,
            Role, RoleInput,
            User, CreateUser, UpdateUser, UpdatePassword, LoginRequest,
            Department, DepartmentInput,
            Category, CategoryInput,
            Service, ServiceInput,
            Client, ClientInput,
            Pet, PetInput,
            Visit, VisitInput,
            Lead, LeadInput,
            system_handler::HealthResult,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "System", description = "Health check"),
        (name = "Auth", description = "Login and logout"),
        (name = "Profile", description = "The logged-in user's own account"),
        (name = "Roles", description = "Access roles"),
        (name = "Users", description = "Staff accounts"),
        (name = "Departments", description = "Clinic departments"),
        (name = "Categories", description = "Service categories"),
        (name = "Services", description = "Priced clinic services"),
        (name = "Clients", description = "Pet owners"),
        (name = "Pets", description = "Patients"),
        (name = "Visits", description = "Appointments"),
        (name = "Leads", description = "Inbound requests")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for the session cookie
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                    SESSION_COOKIE,
                    "Session id set by /v1/login",
                ))),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_resource() {
        let doc = ApiDoc::openapi();
        for path in [
            "/v1/health",
            "/v1/login",
            "/v1/profile/password",
            "/v1/roles/{id}",
            "/v1/leads",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
