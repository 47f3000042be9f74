//! Parameter bindings collected from `.request-parameter` inputs.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{resolve_url, ListCategory};

/// A name/value pair read from one input control.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParameterBinding {
    pub name: String,
    pub value: String,
}

impl ParameterBinding {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into() }
    }
}

/// Build the POST payload.
///
/// A binding called `raw_body_name` is sent verbatim; otherwise every binding
/// is folded into a JSON object, later duplicates overwriting earlier ones.
pub fn build_request_body(bindings: &[ParameterBinding], raw_body_name: &str) -> String {
    if let Some(raw) = bindings.iter().find(|b| b.name == raw_body_name) {
        return raw.value.clone();
    }

    let mut payload = Map::new();
    for binding in bindings {
        payload.insert(binding.name.clone(), Value::String(binding.value.clone()));
    }
    Value::Object(payload).to_string()
}

/// Everything needed to issue one HTTP call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestPlan {
    pub method: String,
    /// The route template as the button passed it.
    pub template: String,
    pub url: String,
    /// Only present for POST.
    pub body: Option<String>,
}

impl RequestPlan {
    pub fn new(
        method: &str,
        template: &str,
        bindings: &[ParameterBinding],
        raw_body_name: &str,
    ) -> Self {
        // Method names are case-insensitive for us, so "post" carries a body too.
        let method = method.to_ascii_uppercase();
        let body = (method == "POST").then(|| build_request_body(bindings, raw_body_name));
        Self {
            url: resolve_url(template, bindings),
            template: template.to_string(),
            method,
            body,
        }
    }

    /// Body requests carry a JSON content type.
    pub fn content_type(&self) -> Option<&'static str> {
        self.body.as_ref().map(|_| "application/json")
    }

    /// List endpoint this call feeds, judged on the unresolved template.
    pub fn list_category(&self) -> Option<ListCategory> {
        ListCategory::from_url(&self.template)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn plan(method: &str, template: &str, bindings: &[ParameterBinding]) -> RequestPlan {
        RequestPlan::new(method, template, bindings, "body")
    }

    #[test]
    fn test_raw_body_sent_verbatim() {
        let bindings = vec![
            ParameterBinding::new("name", "ignored"),
            ParameterBinding::new("body", r#"{"x": [1, 2]}"#),
        ];
        assert_eq!(build_request_body(&bindings, "body"), r#"{"x": [1, 2]}"#);
    }

    #[test]
    fn test_bindings_folded_into_object() {
        let bindings = vec![
            ParameterBinding::new("template", "cpp"),
            ParameterBinding::new("target", "app"),
        ];
        let body: Value = serde_json::from_str(&build_request_body(&bindings, "body")).unwrap();
        assert_eq!(body, serde_json::json!({ "template": "cpp", "target": "app" }));
    }

    #[test]
    fn test_get_has_no_body() {
        let plan = plan("get", "/api/{kind}", &[ParameterBinding::new("kind", "files")]);
        assert_eq!(plan.method, "GET");
        assert_eq!(plan.url, "/api/files");
        assert!(plan.body.is_none());
        assert!(plan.content_type().is_none());
    }

    #[test]
    fn test_post_plan_has_json_body() {
        let plan = plan("POST", "/api/targets", &[ParameterBinding::new("name", "lib")]);
        assert_eq!(plan.body.as_deref(), Some(r#"{"name":"lib"}"#));
        assert_eq!(plan.content_type(), Some("application/json"));
    }

    #[test]
    fn test_lowercase_post_carries_body() {
        let plan = plan("post", "/api/targets", &[ParameterBinding::new("name", "lib")]);
        assert_eq!(plan.method, "POST");
        assert!(plan.body.is_some());
    }

    #[test]
    fn test_list_category_uses_template() {
        let resolved = plan("GET", "/api/{kind}", &[ParameterBinding::new("kind", "templates")]);
        assert_eq!(resolved.url, "/api/templates");
        assert_eq!(resolved.list_category(), None);

        let literal = plan("GET", "/api/templates", &[]);
        assert_eq!(literal.list_category(), Some(ListCategory::Templates));
    }
}
