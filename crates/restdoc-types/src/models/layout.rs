//! Collapsible section sizing.

/// Viewport height the way the page measures it: the larger of the root
/// element's client height and the window's inner height.
pub fn viewport_height(client_height: f64, inner_height: f64) -> f64 {
    client_height.max(inner_height).max(0.0)
}

/// `max-height` for an expanded section.
pub fn expanded_max_height(viewport: f64, offset_px: u32) -> String {
    let height = (viewport - f64::from(offset_px)).max(0.0);
    format!("{}px", height.round())
}

/// Next `max-height` for a toggled section. `None` clears the property.
pub fn toggle_max_height(current: &str, viewport: f64, offset_px: u32) -> Option<String> {
    if current.trim().is_empty() {
        Some(expanded_max_height(viewport, offset_px))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_takes_larger() {
        assert_eq!(viewport_height(700.0, 900.0), 900.0);
        assert_eq!(viewport_height(1000.0, 0.0), 1000.0);
    }

    #[test]
    fn test_expand_subtracts_offset() {
        assert_eq!(expanded_max_height(900.0, 100), "800px");
        assert_eq!(expanded_max_height(50.0, 100), "0px");
    }

    #[test]
    fn test_double_toggle_collapses() {
        let first = toggle_max_height("", 900.0, 100);
        assert_eq!(first.as_deref(), Some("800px"));

        let second = toggle_max_height(first.as_deref().unwrap_or_default(), 900.0, 100);
        assert_eq!(second, None);
    }
}
