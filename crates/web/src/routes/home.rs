//! Public landing page.

use askama::Template;
use askama_web::WebTemplate;

use crate::middleware::PublicOnly;

/// Landing page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate;

/// Render the public landing page.
///
/// Authenticated users never see this: the public-only gate bounces them to
/// their role's dashboard.
pub async fn index(PublicOnly: PublicOnly) -> HomeTemplate {
    HomeTemplate
}
