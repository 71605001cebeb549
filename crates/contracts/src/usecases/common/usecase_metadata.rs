/// Identification of a multi-resource workflow (menu entry and tab key).
pub trait UseCaseMetadata {
    /// Index (e.g. "u501")
    fn usecase_index() -> &'static str;

    /// Technical name (e.g. "customer_allocation")
    fn usecase_name() -> &'static str;

    /// Title shown in the menu and tab
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// "u501_customer_allocation"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
