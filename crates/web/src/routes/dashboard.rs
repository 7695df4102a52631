//! Role dashboards.
//!
//! One route per role, each behind the matching gate. The dashboards are
//! deliberately thin; the gating is the interesting part.

use askama::Template;
use askama_web::WebTemplate;

use crate::middleware::{RequireAdmin, RequireEmployer, RequireItian};
use crate::models::CurrentUser;

/// Dashboard page template, shared by all roles.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub heading: &'static str,
    pub email: String,
    pub role: String,
}

impl DashboardTemplate {
    fn for_user(heading: &'static str, user: &CurrentUser) -> Self {
        Self {
            heading,
            email: user.email.clone(),
            role: user.role.to_string(),
        }
    }
}

/// Admin dashboard (admin only).
pub async fn admin(RequireAdmin(user): RequireAdmin) -> DashboardTemplate {
    DashboardTemplate::for_user("Admin dashboard", &user)
}

/// Employer dashboard (employer only).
pub async fn employer(RequireEmployer(user): RequireEmployer) -> DashboardTemplate {
    DashboardTemplate::for_user("Employer dashboard", &user)
}

/// ITIan dashboard (graduates only).
pub async fn itian(RequireItian(user): RequireItian) -> DashboardTemplate {
    DashboardTemplate::for_user("ITIan dashboard", &user)
}
