use serde::Serialize;

/// Navigation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", content = "id", rename_all = "snake_case")]
pub enum Route {
    Login,
    Projects,
    Project(i64),
    Issue(i64),
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Route::Login => write!(f, "/login"),
            Route::Projects => write!(f, "/projects"),
            Route::Project(id) => write!(f, "/projects/{}", id),
            Route::Issue(id) => write!(f, "/issues/{}", id),
        }
    }
}
