use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Signup,
    Profile,
    NotFound,
}

impl Route {
    /// Match a location path, ignoring query, fragment
    /// and a trailing slash.
    pub fn from_path(path: &str) -> Self {
        let path = path
            .split(|c: char| c == '?' || c == '#')
            .next()
            .unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        match path {
            "/" => Route::Home,
            "/login" => Route::Login,
            "/signup" => Route::Signup,
            "/profile" => Route::Profile,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::Profile => "/profile",
            Route::NotFound => "*",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    Redirect(Route),
}

/// Resolve `path` for a visitor who is or is not signed in.
///
/// Signed-in users are sent home from the login and signup pages,
/// anonymous visitors are sent to login from the profile page.
pub fn navigate(path: &str, authenticated: bool) -> Navigation {
    match (Route::from_path(path), authenticated) {
        (Route::Login | Route::Signup, true) => Navigation::Redirect(Route::Home),
        (Route::Profile, false) => Navigation::Redirect(Route::Login),
        (route, _) => Navigation::Render(route),
    }
}
