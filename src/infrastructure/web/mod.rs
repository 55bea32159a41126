use crate::{
    application::services::Overview,
    domain::entities::{Role, RoleGroup, User},
    domain::errors::DomainError,
    infrastructure::http::middleware::{ApiResult, AppState},
    infrastructure::http::session::{Flash, Session, Severity, USERNAME_KEY},
};
use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::SignedCookieJar;
use serde::Deserialize;

// Template structs
#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    roles: Vec<Role>,
    users: Vec<User>,
    roles_with_users: Vec<RoleGroup>,
    username: Option<String>,
    flashes: Vec<Flash>,
}

// Form data
#[derive(Debug, Deserialize)]
pub struct RegisterUserForm {
    #[serde(default)]
    name: String,
    #[serde(default)]
    role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddRoleForm {
    #[serde(default)]
    role_name: String,
}

// Handlers
pub async fn show_index(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> ApiResult<Response> {
    let mut session = Session::load(&jar);

    let Overview {
        roles,
        users,
        roles_with_users,
    } = state.registration_service.overview().await?;

    let template = IndexTemplate {
        roles,
        users,
        roles_with_users,
        username: session.get(USERNAME_KEY).map(str::to_owned),
        flashes: session.take_flashes(),
    };

    Ok((session.store(jar), HtmlTemplate(template)).into_response())
}

pub async fn register_user(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<RegisterUserForm>,
) -> ApiResult<(SignedCookieJar, Redirect)> {
    let mut session = Session::load(&jar);

    match state
        .registration_service
        .register_user(&form.name, form.role.as_deref())
        .await
    {
        Ok(user) => {
            tracing::info!("Registered user {} ({})", user, user.id);
            session.flash(
                Severity::Success,
                format!("User \"{}\" registered successfully.", user.name),
            );
            session.insert(USERNAME_KEY, user.name);
        }
        Err(e) => reject(&mut session, e)?,
    }

    Ok((session.store(jar), Redirect::to("/")))
}

pub async fn add_role(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<AddRoleForm>,
) -> ApiResult<(SignedCookieJar, Redirect)> {
    let mut session = Session::load(&jar);

    match state.registration_service.add_role(&form.role_name).await {
        Ok(role) => {
            tracing::info!("Created role {} ({})", role, role.id);
            session.flash(Severity::Success, format!("Role \"{}\" created.", role.name));
        }
        Err(e) => reject(&mut session, e)?,
    }

    Ok((session.store(jar), Redirect::to("/")))
}

pub async fn handle_logout(jar: SignedCookieJar) -> (SignedCookieJar, Redirect) {
    let mut session = Session::load(&jar);

    if let Some(username) = session.remove(USERNAME_KEY) {
        tracing::info!("Session ended for {}", username);
    }
    session.flash(Severity::Info, "Session ended.");

    (session.store(jar), Redirect::to("/"))
}

/// Turns a form rejection into a warning for the next page; anything else
/// aborts the request.
fn reject(session: &mut Session, err: DomainError) -> ApiResult<()> {
    if !err.is_rejection() {
        return Err(err.into());
    }

    tracing::warn!("Form rejected: {}", err);
    session.flash(Severity::Warning, err.user_message());
    Ok(())
}

// Helper to render Askama templates
struct HtmlTemplate<T>(T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!("Failed to render template: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template: {}", err),
                )
                    .into_response()
            }
        }
    }
}
