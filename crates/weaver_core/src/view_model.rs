use crate::TargetLanguage;

/// Hint shown in the editor until the user runs the first action.
pub const INPUT_PLACEHOLDER: &str = "//Type Your Code Here \u{1F4BB}";

/// Hint shown in the output area while no result exists.
pub const OUTPUT_PLACEHOLDER: &str = "//Output Will Be Shown Here \u{1F604}";

/// Replaces the output text while a backend call is in flight.
pub const LOADING_TEXT: &str = "Code is Loading Please Wait \u{1F604}...";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub selected_language: Option<TargetLanguage>,
    pub input_placeholder: String,
    pub output_placeholder: String,
    pub output_text: String,
    pub busy: bool,
    pub convert_enabled: bool,
}
