/// UseCase identification metadata
pub trait UseCaseMetadata {
    /// UseCase index (for example, "u101")
    fn usecase_index() -> &'static str;

    /// Technical name (for example, "probe_board")
    fn usecase_name() -> &'static str;

    /// Display name for logs and UIs
    fn display_name() -> &'static str;

    /// UseCase description
    fn description() -> &'static str {
        ""
    }

    /// Full name of the form "u101_probe_board"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
