//! Test Step Markup
//!
//! Renders parsed scenario steps into the XML fragment Azure DevOps stores
//! in the `Microsoft.VSTS.TCM.Steps` work item field. Each step becomes an
//! ActionStep holding the action text and an always-empty expected result.

use quick_xml::escape::escape;
use specport_gherkin::Step;

/// Render steps as the test-case steps field markup.
///
/// Output is a single line with no inserted whitespace and is byte-identical
/// for identical input: a `steps` container with id `0` and one `step` per
/// input, ids 1-based in source order. Step text is XML-escaped so markup
/// characters in a scenario cannot corrupt the field.
pub fn format_steps(steps: &[Step]) -> String {
    let mut markup = String::from("<steps id=\"0\">");
    for (index, step) in steps.iter().enumerate() {
        let action_text = step.action_text();
        let action = escape(action_text.as_str());
        markup.push_str(&format!(
            "<step id=\"{}\" type=\"ActionStep\">\
             <parameterizedString isformatted=\"true\">{}</parameterizedString>\
             <parameterizedString isformatted=\"true\"></parameterizedString>\
             </step>",
            index + 1,
            action
        ));
    }
    markup.push_str("</steps>");
    markup
}
