//! Environment variable expansion for configuration strings.

use std::env::VarError;

use crate::ConfigError;

/// Resolve `${VAR}` references in the value of config `field`.
///
/// `${VAR:-default}` falls back to `default` when `VAR` is unset. Values
/// without `${` are returned untouched, so a bare `$` (common in
/// passwords) never triggers a lookup.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    match shellexpand::env_with_context(value, lookup) {
        Ok(expanded) => Ok(expanded.into_owned()),
        Err(err) => Err(ConfigError::EnvVar {
            field: field.to_owned(),
            message: err.cause.describe(&err.var_name),
        }),
    }
}

/// Environment lookup; an error only surfaces when no `:-` default applies.
fn lookup(name: &str) -> Result<Option<String>, Unresolved> {
    match std::env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Err(Unresolved::NotSet),
        Err(VarError::NotUnicode(_)) => Err(Unresolved::NotUnicode),
    }
}

/// Why a `${VAR}` reference could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unresolved {
    NotSet,
    NotUnicode,
}

impl Unresolved {
    fn describe(self, var: &str) -> String {
        match self {
            Self::NotSet => format!("${{{var}}} not set"),
            Self::NotUnicode => format!("${{{var}}} is not valid UTF-8"),
        }
    }
}
