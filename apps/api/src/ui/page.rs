//! Server-rendered HTML for the enhancer form.
//!
//! The template is registered as `page.html`, so minijinja auto-escapes every value.

use minijinja::{context, Environment};

use crate::enhancer::PromptRequest;

pub const TITLE: &str = "AI Prompt Enhancer";

const TEMPLATE_NAME: &str = "page.html";
const TEMPLATE: &str = include_str!("../../templates/page.html");

/// What the page shows beneath the form after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Warning(String),
    Error(String),
    Enhanced(String),
}

impl Notice {
    fn kind(&self) -> &'static str {
        match self {
            Notice::Warning(_) => "warning",
            Notice::Error(_) => "error",
            Notice::Enhanced(_) => "enhanced",
        }
    }

    fn text(&self) -> &str {
        match self {
            Notice::Warning(t) | Notice::Error(t) | Notice::Enhanced(t) => t,
        }
    }
}

pub struct Page<'a> {
    /// True when a key came from the credential chain; hides the key input.
    pub key_configured: bool,
    pub fields: &'a PromptRequest,
    pub notice: Option<Notice>,
}

impl Page<'_> {
    pub fn render(&self) -> Result<String, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(TEMPLATE_NAME, TEMPLATE)?;

        env.get_template(TEMPLATE_NAME)?.render(context! {
            title => TITLE,
            key_configured => self.key_configured,
            role => &self.fields.role,
            context => &self.fields.context,
            task => &self.fields.task,
            notice_kind => self.notice.as_ref().map(Notice::kind),
            notice_text => self.notice.as_ref().map(Notice::text),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(key_configured: bool, fields: &PromptRequest, notice: Option<Notice>) -> String {
        Page {
            key_configured,
            fields,
            notice,
        }
        .render()
        .unwrap()
    }

    #[test]
    fn test_key_input_only_shown_without_configured_key() {
        let fields = PromptRequest::default();

        let with_key = render(true, &fields, None);
        assert!(!with_key.contains("name=\"api_key\""));
        assert!(with_key.contains("API Key loaded automatically"));

        let without_key = render(false, &fields, None);
        assert!(without_key.contains("type=\"password\" name=\"api_key\""));
        assert!(without_key.contains("Please enter your API key"));
    }

    #[test]
    fn test_submitted_fields_are_echoed_escaped() {
        let fields = PromptRequest::new("a \"quoted\" role", "<script>", "Tom & 'Jerry'");
        let html = render(true, &fields, None);
        assert!(html.contains("value=\"a &quot;quoted&quot; role\""));
        assert!(html.contains("&lt;script&gt;</textarea>"));
        assert!(html.contains("Tom &amp; &#x27;Jerry&#x27;</textarea>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_textarea_values_keep_leading_newline() {
        // Browsers drop the first newline after <textarea>, so one is always emitted.
        let fields = PromptRequest::new("r", "\nindented context", "task");
        let html = render(true, &fields, None);
        assert!(html.contains("...\">\n\nindented context</textarea>"));
        assert!(html.contains("...\">\ntask</textarea>"));
    }

    #[test]
    fn test_no_notice_before_submission() {
        let html = render(true, &PromptRequest::default(), None);
        assert!(!html.contains("Enhanced Prompt:"));
        assert!(!html.contains("class=\"error\""));
        assert!(!html.contains("<div class=\"warning\">"));
    }

    #[test]
    fn test_notices() {
        let fields = PromptRequest::default();

        let enhanced = render(true, &fields, Some(Notice::Enhanced("# Plan <b>".into())));
        assert!(enhanced.contains("<h3>Enhanced Prompt:</h3>"));
        assert!(enhanced.contains("<code class=\"language-markdown\"># Plan &lt;b&gt;</code>"));

        let error = render(true, &fields, Some(Notice::Error("Error: rate limited".into())));
        assert!(error.contains("<div class=\"error\">Error: rate limited</div>"));
        assert!(!error.contains("Enhanced Prompt:"));

        let warning = render(
            true,
            &fields,
            Some(Notice::Warning("Please fill in all fields before generating.".into())),
        );
        assert!(warning.contains("<div class=\"warning\">Please fill in all fields"));
    }
}
