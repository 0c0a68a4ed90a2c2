use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub u64);
    };
}

id_newtype!(PageInstanceId);

impl PageInstanceId {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountRole {
    Admin,
    Member,
}

impl AccountRole {
    /// Demo-only classification: any email containing `admin` is an admin.
    pub fn classify(email: &str) -> Self {
        if email.contains("admin") {
            Self::Admin
        } else {
            Self::Member
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Member => "user",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Home,
    Features,
    About,
    Contact,
    Login,
    Register,
    NotFound(String),
}

impl Route {
    pub const KNOWN: [Route; 6] = [
        Route::Home,
        Route::Features,
        Route::About,
        Route::Contact,
        Route::Login,
        Route::Register,
    ];

    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            other => other,
        };
        match normalized {
            "/" => Self::Home,
            "/features" => Self::Features,
            "/about" => Self::About,
            "/contact" => Self::Contact,
            "/login" => Self::Login,
            "/register" => Self::Register,
            _ => Self::NotFound(trimmed.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Home => "/",
            Self::Features => "/features",
            Self::About => "/about",
            Self::Contact => "/contact",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::NotFound(path) => path,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Features => "Features",
            Self::About => "About",
            Self::Contact => "Contact",
            Self::Login => "Log In",
            Self::Register => "Sign Up",
            Self::NotFound(_) => "Page Not Found",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl Serialize for Route {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.path())
    }
}

impl<'de> Deserialize<'de> for Route {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_routes_round_trip_through_their_paths() {
        for route in Route::KNOWN {
            assert_eq!(Route::parse(route.path()), route);
        }
    }

    #[test]
    fn tolerates_trailing_slash_and_whitespace() {
        assert_eq!(Route::parse("/login/"), Route::Login);
        assert_eq!(Route::parse(" /register "), Route::Register);
        assert_eq!(Route::parse(""), Route::Home);
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        let route = Route::parse("/forgot-password");
        assert_eq!(route, Route::NotFound("/forgot-password".to_string()));
        assert!(route.is_not_found());
        assert_eq!(route.path(), "/forgot-password");
        assert_eq!(route.title(), "Page Not Found");
    }

    #[test]
    fn route_serializes_as_its_path() {
        let json = serde_json::to_string(&Route::Register).expect("serialize");
        assert_eq!(json, "\"/register\"");
        let parsed: Route = serde_json::from_str("\"/nope\"").expect("deserialize");
        assert_eq!(parsed, Route::NotFound("/nope".to_string()));
    }

    #[test]
    fn admin_classification_is_a_substring_check() {
        assert_eq!(AccountRole::classify("admin@quiz.io"), AccountRole::Admin);
        assert_eq!(AccountRole::classify("sysadmin@quiz.io"), AccountRole::Admin);
        assert_eq!(AccountRole::classify("Admin@quiz.io"), AccountRole::Member);
        assert_eq!(AccountRole::classify("alice@quiz.io"), AccountRole::Member);
    }

    #[test]
    fn page_instance_ids_advance() {
        assert_eq!(PageInstanceId(4).next(), PageInstanceId(5));
    }
}
