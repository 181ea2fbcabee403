//! HTML rendering of the estimator page
//!
//! The page is rebuilt from a [`SessionView`] on every interaction. Every
//! widget submits the form on change, and the "Predict Premium" button posts
//! `action=predict`.

use std::fmt::Write;

use premium_guide_domain::entities::premium::{Currency, MessageLevel};
use premium_guide_domain::entities::profile::{
    format_bmi, BmiMode, Sex, Smoker, AGE_RANGE, BMI_RANGE, CHILDREN_RANGE, HEIGHT_CM_RANGE, WEIGHT_KG_RANGE,
};
use premium_guide_domain::services::SessionView;

/// Page title
pub const PAGE_TITLE: &str = "🛡️ Health Insurance Premium Predictor";

const STYLE: &str = "body{font-family:sans-serif;margin:0;display:flex}\
main{flex:1;padding:2rem;max-width:48rem}\
aside{width:22rem;padding:1.5rem;background:#f0f2f6;min-height:100vh}\
label{display:block;margin-top:.75rem}\
input,select{display:block;margin-top:.25rem;padding:.3rem;width:14rem}\
button{margin-top:1.25rem;padding:.5rem 1rem}\
table{border-collapse:collapse;width:100%}\
td,th{border:1px solid #ccc;padding:.25rem .5rem;text-align:left}\
.error{background:#fde2e2;padding:.75rem;border-radius:.25rem}\
.success{background:#dff5e3;padding:.75rem;border-radius:.25rem}\
.warning{background:#fff4d6;padding:.75rem;border-radius:.25rem}";

/// Escape text for use in HTML content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Render the whole page for a session view
///
/// `error` is shown as a banner above the form, e.g. when the model failed.
pub fn render_page(view: &SessionView, error: Option<&str>) -> String {
    let mut html = String::with_capacity(8 * 1024);

    let _ = write!(
        html,
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{title}</title><style>{style}</style></head><body><main>\
         <h1>{title}</h1>\
         <p>Estimate your annual health insurance premium based on your personal details.</p>",
        title = PAGE_TITLE,
        style = STYLE,
    );

    if let Some(message) = error {
        let _ = write!(html, "<p class=\"error\" role=\"alert\">{}</p>", escape_html(message));
    }

    render_form(&mut html, view);
    render_results(&mut html, view);
    html.push_str("</main>");
    render_sidebar(&mut html, view);
    html.push_str("</body></html>");

    html
}

fn render_form(html: &mut String, view: &SessionView) {
    let input = &view.input;

    html.push_str("<form id=\"profile\" method=\"post\" action=\"/\"><h2>Enter Your Details</h2>");

    number_field(html, "age", "Age", input.age, *AGE_RANGE.start(), *AGE_RANGE.end());
    select_field(
        html,
        "sex",
        "Sex",
        &[("Male", input.sex == Sex::Male), ("Female", input.sex == Sex::Female)],
    );
    number_field(
        html,
        "children",
        "Number of Children",
        input.children,
        *CHILDREN_RANGE.start(),
        *CHILDREN_RANGE.end(),
    );
    select_field(
        html,
        "smoker",
        "Smoker?",
        &[("Yes", input.smoker == Smoker::Yes), ("No", input.smoker == Smoker::No)],
    );

    html.push_str("<h3>BMI Input</h3>");
    let _ = write!(
        html,
        "<label>Do you know your BMI?<select name=\"bmi_mode\" onchange=\"this.form.requestSubmit()\">\
         <option value=\"calculate\"{}>No</option><option value=\"known\"{}>Yes</option></select></label>",
        selected(input.bmi_mode == BmiMode::Calculate),
        selected(input.bmi_mode == BmiMode::Known),
    );

    match input.bmi_mode {
        BmiMode::Known => {
            let _ = write!(
                html,
                "<label>Enter your BMI<input type=\"number\" name=\"bmi\" step=\"0.01\" min=\"{:.1}\" max=\"{:.1}\" \
                 value=\"{}\" onchange=\"this.form.requestSubmit()\"></label>",
                BMI_RANGE.start(),
                BMI_RANGE.end(),
                format_bmi(input.bmi),
            );
        }
        BmiMode::Calculate => {
            number_field(
                html,
                "height_cm",
                "Height (cm)",
                input.height_cm,
                *HEIGHT_CM_RANGE.start(),
                *HEIGHT_CM_RANGE.end(),
            );
            number_field(
                html,
                "weight_kg",
                "Weight (kg)",
                input.weight_kg,
                *WEIGHT_KG_RANGE.start(),
                *WEIGHT_KG_RANGE.end(),
            );
            let _ = write!(
                html,
                "<p><strong>Calculated BMI:</strong> {}</p>",
                format_bmi(view.profile.bmi)
            );
        }
    }

    html.push_str(
        "<button type=\"submit\" name=\"action\" value=\"predict\">Predict Premium</button></form>",
    );
}

fn render_results(html: &mut String, view: &SessionView) {
    let prediction = match &view.prediction {
        Some(prediction) => prediction,
        None => return,
    };

    html.push_str("<section id=\"result\"><h2>💵 Your Estimated Premium</h2>");
    match &view.comparison {
        Some(comparison) => {
            let _ = write!(
                html,
                "<h2 style=\"color:{};\">{} per year</h2>\
                 <p>💹 Your premium is <strong>{}</strong> than the average.</p>",
                comparison.tier.color(),
                Currency(prediction.premium),
                escape_html(&comparison.summary),
            );
        }
        None => {
            let _ = write!(html, "<h2>{} per year</h2>", Currency(prediction.premium));
        }
    }

    let _ = write!(
        html,
        "<p><strong>BMI Category:</strong> {}</p>\
         <p><strong>Health Suggestion:</strong> {}</p></section>",
        view.bmi_category,
        escape_html(&view.health_suggestion),
    );
}

fn render_sidebar(html: &mut String, view: &SessionView) {
    let insights = &view.insights;

    html.push_str("<aside><h2>💡 User Insights</h2><h3>📋 Your Input Details</h3>");
    html.push_str("<table><thead><tr><th>Feature</th><th>Value</th></tr></thead><tbody>");
    for row in &insights.input_echo {
        let _ = write!(
            html,
            "<tr><td>{}</td><td>{}</td></tr>",
            escape_html(&row.feature),
            escape_html(&row.value)
        );
    }
    html.push_str("</tbody></table>");

    let _ = write!(
        html,
        "<h3>⚠️ Risk Factors &amp; Insights</h3><p>{}</p><p>{}</p>",
        escape_html(&insights.smoker_insight),
        escape_html(&insights.bmi_insight),
    );

    html.push_str("<h3>📊 Comparisons with Dataset</h3>");
    if let Some(comparison) = &insights.dataset_comparison {
        let class = match comparison.level {
            MessageLevel::Success => "success",
            MessageLevel::Warning => "warning",
        };
        let _ = write!(html, "<p class=\"{}\">{}</p>", class, escape_html(&comparison.message));
    }

    let _ = write!(
        html,
        "<h3>💡 Personalized Suggestions</h3><p>{}</p></aside>",
        escape_html(&insights.suggestion)
    );
}

fn number_field(html: &mut String, name: &str, label: &str, value: u32, min: u32, max: u32) {
    let _ = write!(
        html,
        "<label>{label}<input type=\"number\" name=\"{name}\" step=\"1\" min=\"{min}\" max=\"{max}\" \
         value=\"{value}\" onchange=\"this.form.requestSubmit()\"></label>",
    );
}

fn select_field(html: &mut String, name: &str, label: &str, options: &[(&str, bool)]) {
    let _ = write!(
        html,
        "<label>{label}<select name=\"{name}\" onchange=\"this.form.requestSubmit()\">"
    );
    for (option, is_selected) in options {
        let _ = write!(html, "<option value=\"{option}\"{}>{option}</option>", selected(*is_selected));
    }
    html.push_str("</select></label>");
}

fn selected(is_selected: bool) -> &'static str {
    if is_selected {
        " selected"
    } else {
        ""
    }
}
