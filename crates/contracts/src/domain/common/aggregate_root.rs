use super::AggregateId;

/// A record owned by the backend and edited through one REST resource.
///
/// The static part describes the resource: its index in the menu, the cache-key
/// root, UI names and REST base path.
pub trait AggregateRoot {
    type Id: AggregateId;

    // ============================================================================
    // Instance data
    // ============================================================================

    fn id(&self) -> Self::Id;

    /// Name shown in joins, pickers and modal titles.
    fn display_name(&self) -> String;

    /// Records without an `inactive` column are never hidden by the inactive toggle.
    fn is_inactive(&self) -> bool {
        false
    }

    // ============================================================================
    // Resource metadata
    // ============================================================================

    /// Index in the system (e.g. "a006")
    fn aggregate_index() -> &'static str;

    /// Collection name; also the root segment of every cache key of this resource
    fn collection_name() -> &'static str;

    /// UI name, singular (e.g. "Customer")
    fn element_name() -> &'static str;

    /// UI name, plural (e.g. "Customers")
    fn list_name() -> &'static str;

    /// REST base path (e.g. "/api/customers")
    fn api_path() -> &'static str;

    /// Tab key of the list view (e.g. "a006_customers")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }

    /// URL of a single record
    fn item_path(id: &Self::Id) -> String {
        format!(
            "{}/{}",
            Self::api_path(),
            urlencode_segment(&id.as_string())
        )
    }
}

/// Minimal path-segment escaping for natural keys such as "1/2".
fn urlencode_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Widget;

    impl AggregateRoot for Widget {
        type Id = String;

        fn id(&self) -> String {
            "A/1".to_string()
        }
        fn display_name(&self) -> String {
            "widget".to_string()
        }
        fn aggregate_index() -> &'static str {
            "a999"
        }
        fn collection_name() -> &'static str {
            "widgets"
        }
        fn element_name() -> &'static str {
            "Widget"
        }
        fn list_name() -> &'static str {
            "Widgets"
        }
        fn api_path() -> &'static str {
            "/api/widgets"
        }
    }

    #[test]
    fn test_full_name_and_item_path() {
        assert_eq!(Widget::full_name(), "a999_widgets");
        assert_eq!(Widget::item_path(&Widget.id()), "/api/widgets/A%2F1");
        assert!(!Widget.is_inactive());
    }
}
