/// The prompt template used for ingredient analysis.
///
/// Instructs the model to act as a cosmetic chemist and answer in four
/// bullet-point sections: harmful, beneficial, neutral/conditional
/// ingredients, and a suitability recommendation.
///
/// The template is loaded from `prompt.txt` at compile time using the
/// `include_str!` macro, making it easy to edit without dealing with
/// Rust string syntax. `{ingredients}` and `{product_type}` are filled
/// in per request.
const ANALYSIS_PROMPT_TEMPLATE: &str = include_str!("prompt.txt");

/// Build the analysis prompt for a given ingredient list and product type.
///
/// Both values are interpolated verbatim. The ingredient text is
/// caller-supplied and is not delimited from the instruction text, so a
/// crafted ingredient list can steer the model.
pub fn build_analysis_prompt(ingredients: &str, product_type: &str) -> String {
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{product_type}", product_type)
        .replace("{ingredients}", ingredients)
}
