use axum::body::{to_bytes, Body};
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use axum_extra::extract::cookie::Key;
use roster::bootstrap;
use roster::infrastructure::http::middleware::AppState;
use roster::infrastructure::http::router::build_router;
use roster::infrastructure::http::session::SESSION_COOKIE;
use roster::infrastructure::persistence::Database;
use tower::ServiceExt;

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }
}

/// Drives the router in-process and carries the session cookie between
/// requests the way a browser would.
pub struct TestClient {
    app: Router,
    cookie: Option<String>,
}

impl TestClient {
    pub fn new(db: &Database) -> Self {
        let state = AppState {
            registration_service: bootstrap::registration_service(db),
            cookie_key: Key::generate(),
        };

        Self {
            app: build_router(state),
            cookie: None,
        }
    }

    pub fn has_session_cookie(&self) -> bool {
        self.cookie.is_some()
    }

    pub async fn get(&mut self, path: &str) -> TestResponse {
        let request = self.request(Method::GET, path).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn post_form(&mut self, path: &str, body: &str) -> TestResponse {
        let request = self
            .request(Method::POST, path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    fn request(&self, method: Method, path: &str) -> axum::http::request::Builder {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, format!("{}={}", SESSION_COOKIE, cookie));
        }
        builder
    }

    async fn send(&mut self, request: Request<Body>) -> TestResponse {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();

        for set_cookie in headers.get_all(header::SET_COOKIE) {
            let Ok(set_cookie) = set_cookie.to_str() else {
                continue;
            };
            let pair = set_cookie.split(';').next().unwrap_or_default();
            if let Some((name, value)) = pair.split_once('=') {
                if name.trim() == SESSION_COOKIE {
                    self.cookie = if value.is_empty() {
                        None
                    } else {
                        Some(value.to_string())
                    };
                }
            }
        }

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        TestResponse {
            status,
            headers,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }
}

/// The rendered markup of one role's group on the home page.
pub fn role_group<'a>(page: &'a str, role_name: &str) -> &'a str {
    let marker = format!("data-role=\"{}\"", role_name);
    let start = page
        .find(&marker)
        .unwrap_or_else(|| panic!("no group rendered for role {}", role_name));
    let rest = &page[start..];
    let end = rest.find("</div>").unwrap_or(rest.len());
    &rest[..end]
}
