/// Lifetime of the values a binder hands out.
///
/// - **Singleton**: produced once at registration and cloned into every
///   handler invocation (`Binder::value`, `Binder::service`).
/// - **Request**: produced by calling the binder for each request that needs
///   it (`Binder::func`, `Binder::try_func`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BindingScope {
    #[default]
    Singleton,
    Request,
}

impl std::fmt::Display for BindingScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Singleton => write!(f, "singleton"),
            Self::Request => write!(f, "request"),
        }
    }
}

impl std::str::FromStr for BindingScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "singleton" => Ok(Self::Singleton),
            "request" => Ok(Self::Request),
            _ => Err(format!(
                "Invalid scope: '{}'. Must be 'singleton' or 'request'",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scope() {
        assert_eq!(BindingScope::default(), BindingScope::Singleton);
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!(
            "Request".parse::<BindingScope>().unwrap(),
            BindingScope::Request
        );
        assert_eq!(
            "SINGLETON".parse::<BindingScope>().unwrap(),
            BindingScope::Singleton
        );
        assert!("transient".parse::<BindingScope>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for scope in [BindingScope::Singleton, BindingScope::Request] {
            assert_eq!(scope.to_string().parse::<BindingScope>().unwrap(), scope);
        }
    }
}
