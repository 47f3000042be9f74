//! Route template resolution.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::ParameterBinding;

static ROUTE_PARAMETER_REGEX: OnceLock<Regex> = OnceLock::new();

fn route_parameter_regex() -> &'static Regex {
    ROUTE_PARAMETER_REGEX.get_or_init(|| {
        Regex::new(r"\{(?P<name>[^}]*)\}").expect("Route parameter regex is valid")
    })
}

/// Substitute every `{name}` token in `template` with the value of the first
/// binding called `name`. Tokens without a binding stay verbatim.
pub fn resolve_url(template: &str, bindings: &[ParameterBinding]) -> String {
    let resolved: Cow<'_, str> =
        route_parameter_regex().replace_all(template, |caps: &Captures<'_>| {
            let name = caps.name("name").map_or("", |m| m.as_str());
            match bindings.iter().find(|b| b.name == name) {
                Some(binding) => binding.value.clone(),
                None => caps[0].to_string(),
            }
        });
    resolved.into_owned()
}
