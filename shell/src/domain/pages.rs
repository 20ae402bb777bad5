//! Path-based page selection for the shell.

/// Page body shown below the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Email/password sign-in form.
    Login,
    /// Name/email/password sign-up form.
    Register,
    /// Welcome banner for every other path.
    Welcome,
}

impl Page {
    /// Pick the page for a request path.
    ///
    /// Matching is exact: `/login/` or `/Login` fall through to the banner.
    ///
    /// # Examples
    /// ```
    /// use rentitease_shell::domain::Page;
    ///
    /// assert_eq!(Page::for_path("/login"), Page::Login);
    /// assert_eq!(Page::for_path("/register"), Page::Register);
    /// assert_eq!(Page::for_path("/"), Page::Welcome);
    /// ```
    pub fn for_path(path: &str) -> Self {
        match path {
            "/login" => Self::Login,
            "/register" => Self::Register,
            _ => Self::Welcome,
        }
    }

    /// Document title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Login · RentItEase",
            Self::Register => "Register · RentItEase",
            Self::Welcome => "RentItEase",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/login", Page::Login)]
    #[case("/register", Page::Register)]
    #[case("/", Page::Welcome)]
    #[case("", Page::Welcome)]
    #[case("/unknown", Page::Welcome)]
    #[case("/login/", Page::Welcome)]
    #[case("/LOGIN", Page::Welcome)]
    fn routes_paths(#[case] path: &str, #[case] expected: Page) {
        assert_eq!(Page::for_path(path), expected);
    }
}
