//! Session cache of list endpoints and the inputs they feed.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A list endpoint whose results turn free-text inputs into dropdowns.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ListCategory {
    Templates,
    Configurations,
    Targets,
    Files,
}

impl ListCategory {
    pub const ALL: [ListCategory; 4] =
        [Self::Templates, Self::Configurations, Self::Targets, Self::Files];

    /// URL suffix identifying the endpoint.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Templates => "templates",
            Self::Configurations => "configurations",
            Self::Targets => "targets",
            Self::Files => "files",
        }
    }

    /// `name` attribute of the inputs this list populates.
    pub fn input_name(self) -> &'static str {
        match self {
            Self::Templates => "template",
            Self::Configurations => "configuration",
            Self::Targets => "target",
            Self::Files => "file",
        }
    }

    /// CSS selector for the text inputs to replace.
    pub fn input_selector(self) -> String {
        format!("input[name={}]", self.input_name())
    }

    pub fn from_url(url: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| url.ends_with(c.suffix()))
    }
}

/// Pull the option labels out of a list response.
///
/// Strings are taken as-is, objects contribute their `name` field; anything
/// else is skipped. Returns `None` when the body is not an array.
pub fn extract_list(value: &Value) -> Option<Vec<String>> {
    let items = value.as_array()?;
    Some(
        items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                Value::Object(map) => map.get("name").and_then(Value::as_str).map(str::to_string),
                _ => None,
            })
            .collect(),
    )
}

/// The four cached lists. Lives for one page session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseCache {
    pub templates: Vec<String>,
    pub configurations: Vec<String>,
    pub targets: Vec<String>,
    pub files: Vec<String>,
}

impl ResponseCache {
    pub fn get(&self, category: ListCategory) -> &[String] {
        match category {
            ListCategory::Templates => &self.templates,
            ListCategory::Configurations => &self.configurations,
            ListCategory::Targets => &self.targets,
            ListCategory::Files => &self.files,
        }
    }

    fn slot(&mut self, category: ListCategory) -> &mut Vec<String> {
        match category {
            ListCategory::Templates => &mut self.templates,
            ListCategory::Configurations => &mut self.configurations,
            ListCategory::Targets => &mut self.targets,
            ListCategory::Files => &mut self.files,
        }
    }

    /// Replace the list for `category` wholesale. Non-array bodies are ignored.
    pub fn store(&mut self, category: ListCategory, value: &Value) -> bool {
        match extract_list(value) {
            Some(list) => {
                *self.slot(category) = list;
                true
            }
            None => false,
        }
    }

    /// Non-empty lists, in page update order.
    pub fn populated(&self) -> impl Iterator<Item = (ListCategory, &[String])> + '_ {
        ListCategory::ALL
            .into_iter()
            .map(|c| (c, self.get(c)))
            .filter(|(_, list)| !list.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_from_url_suffix() {
        assert_eq!(ListCategory::from_url("/api/templates"), Some(ListCategory::Templates));
        assert_eq!(
            ListCategory::from_url("/api/projects/x/configurations"),
            Some(ListCategory::Configurations)
        );
        assert_eq!(ListCategory::from_url("/api/targets"), Some(ListCategory::Targets));
        assert_eq!(ListCategory::from_url("/api/files"), Some(ListCategory::Files));
        assert_eq!(ListCategory::from_url("/api/templates/cpp"), None);
    }

    #[test]
    fn test_templates_take_name_field() {
        let mut cache = ResponseCache::default();
        let body = json!([{ "name": "a" }, { "name": "b" }]);
        assert!(cache.store(ListCategory::Templates, &body));
        assert_eq!(cache.templates, vec!["a", "b"]);
        assert_eq!(ListCategory::Templates.input_selector(), "input[name=template]");
    }

    #[test]
    fn test_placeholder_template_is_not_a_list() {
        assert_eq!(ListCategory::from_url("/api/{kind}"), None);
    }

    #[test]
    fn test_lists_overwritten_not_merged() {
        let mut cache = ResponseCache::default();
        cache.store(ListCategory::Targets, &json!(["x", "y"]));
        cache.store(ListCategory::Targets, &json!(["z"]));
        assert_eq!(cache.targets, vec!["z"]);
    }

    #[test]
    fn test_non_array_body_leaves_cache() {
        let mut cache = ResponseCache::default();
        cache.store(ListCategory::Files, &json!(["main.cpp"]));
        assert!(!cache.store(ListCategory::Files, &json!("No Content")));
        assert_eq!(cache.files, vec!["main.cpp"]);
    }

    #[test]
    fn test_populated_skips_empty() {
        let mut cache = ResponseCache::default();
        cache.store(ListCategory::Files, &json!(["a.h", 3, null, { "id": 1 }]));
        let populated: Vec<_> = cache.populated().map(|(c, l)| (c, l.to_vec())).collect();
        assert_eq!(populated, vec![(ListCategory::Files, vec!["a.h".to_string()])]);
    }
}
