//! Email template system
//!
//! Templates are assembled from the translated copy in [`text`] and a shared
//! layout, then rendered with simple variable substitution. Variables are
//! specified using {{variable_name}} syntax.

mod text;

pub use text::TemplateText;

use crate::locale::Locale;
use std::collections::HashMap;

/// Variable holding the call-to-action link of every template
pub const ACTION_URL: &str = "action_url";

/// Available email templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmailTemplate {
    /// Password reset link
    ForgotPassword,
    /// Address verification after sign-up
    EmailVerification,
    /// Verification link sent to a requested new address
    EmailChangeVerification,
    /// Notice sent to the previous address after a change
    EmailChangeNotification,
}

impl EmailTemplate {
    pub const ALL: [EmailTemplate; 4] = [
        Self::ForgotPassword,
        Self::EmailVerification,
        Self::EmailChangeVerification,
        Self::EmailChangeNotification,
    ];

    /// Stable name used in logs and metrics
    pub fn name(&self) -> &'static str {
        match self {
            Self::ForgotPassword => "forgot_password",
            Self::EmailVerification => "email_verification",
            Self::EmailChangeVerification => "email_change_verification",
            Self::EmailChangeNotification => "email_change_notification",
        }
    }

    /// Translated copy for this template
    pub fn text(&self, locale: Locale) -> &'static TemplateText {
        text::text(*self, locale)
    }

    /// Get the subject line for this template
    pub fn subject(&self, locale: Locale) -> &'static str {
        self.text(locale).subject
    }

    /// Get the HTML body template
    pub fn html_body(&self, locale: Locale) -> String {
        let t = self.text(locale);

        let mut content = String::new();
        content.push_str(&format!(
            "            <h2 style=\"font-size: 20px; font-weight: 600; color: #1f2937;\">{}</h2>\n",
            t.title
        ));
        content.push_str(&format!(
            "            <p>{} {{{{user_name}}}},</p>\n",
            t.greeting
        ));
        for line in t.intro {
            content.push_str(&format!("            <p>{}</p>\n", line));
        }
        content.push_str(&format!(
            "            <p style=\"text-align: center; margin: 30px 0;\">\n                <a href=\"{{{{{url}}}}}\" class=\"button\">{button}</a>\n            </p>\n",
            url = ACTION_URL,
            button = t.button
        ));
        for line in t.outro {
            content.push_str(&format!(
                "            <p style=\"font-size: 14px; color: #666;\">{}</p>\n",
                line
            ));
        }
        content.push_str(&format!(
            "            <p style=\"font-size: 14px; color: #666;\">{alt}<br>\n                <a href=\"{{{{{url}}}}}\" class=\"link\">{{{{{url}}}}}</a>\n            </p>\n",
            alt = t.alternative,
            url = ACTION_URL
        ));

        LAYOUT
            .replace("__LANG__", locale.as_str())
            .replace("__TITLE__", t.title)
            .replace("__CONTENT__", &content)
            .replace("__FOOTER__", &t.footer.replace('\n', "<br>"))
    }

    /// Get the plain text body template
    pub fn text_body(&self, locale: Locale) -> String {
        let t = self.text(locale);

        let mut body = format!("{}\n\n{} {{{{user_name}}}},\n\n", t.title, t.greeting);
        for line in t.intro {
            body.push_str(line);
            body.push_str("\n\n");
        }
        body.push_str(&format!("{}: {{{{{}}}}}\n\n", t.button, ACTION_URL));
        for line in t.outro {
            body.push_str(line);
            body.push('\n');
        }
        body.push('\n');
        body.push_str(t.footer);
        body.push_str("\n\n(c) {{year}} {{app_name}}");
        body
    }
}

/// Template rendering engine with variable substitution
#[derive(Debug, Default)]
pub struct TemplateEngine {
    variables: HashMap<String, String>,
}

impl TemplateEngine {
    /// Create a new template engine
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Set multiple variables from an iterator
    pub fn set_all<I, K, V>(&mut self, iter: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (k, v) in iter {
            self.variables.insert(k.into(), v.into());
        }
        self
    }

    /// Render a template string, replacing {{variable}} with raw values
    pub fn render(&self, template: &str) -> String {
        self.substitute(template, |value| value.to_string())
    }

    /// Render an HTML template string; values are HTML-escaped
    pub fn render_html(&self, template: &str) -> String {
        self.substitute(template, escape_html)
    }

    /// Single left-to-right pass; substituted values are never rescanned.
    fn substitute(&self, template: &str, encode: impl Fn(&str) -> String) -> String {
        let mut result = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            result.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else {
                rest = &rest[start..];
                break;
            };

            let key = &after[..end];
            match self.variables.get(key) {
                Some(value) => result.push_str(&encode(value)),
                None => {
                    result.push_str("{{");
                    result.push_str(key);
                    result.push_str("}}");
                }
            }
            rest = &after[end + 2..];
        }

        result.push_str(rest);
        result
    }

    /// Render a complete email template in the given locale
    pub fn render_template(&self, template: EmailTemplate, locale: Locale) -> RenderedEmail {
        RenderedEmail {
            subject: self.render(template.subject(locale)),
            html_body: self.render_html(&template.html_body(locale)),
            text_body: self.render(&template.text_body(locale)),
        }
    }
}

/// Rendered email with all variables substituted
#[derive(Debug, Clone)]
pub struct RenderedEmail {
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

// ============================================================================
// Layout
// ============================================================================

const LAYOUT: &str = r#"<!DOCTYPE html>
<html lang="__LANG__">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>__TITLE__</title>
    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif; line-height: 1.6; color: #333333; margin: 0; padding: 0; background-color: #f8f9fa; }
        .container { max-width: 600px; margin: 0 auto; background: #ffffff; border-radius: 8px; overflow: hidden; box-shadow: 0 4px 6px rgba(0,0,0,0.1); }
        .header { background-color: #1f2937; padding: 32px 24px; text-align: center; }
        .header h1 { color: #ffffff; margin: 0; font-size: 24px; }
        .content { padding: 32px 24px; }
        .button { display: inline-block; background-color: #1f2937; color: #ffffff; padding: 12px 24px; text-decoration: none; border-radius: 6px; font-weight: 600; }
        .footer { font-size: 14px; color: #6b7280; padding: 24px; border-top: 1px solid #e5e7eb; }
        .link { color: #2563eb; word-break: break-all; }
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>{{app_name}}</h1>
        </div>
        <div class="content">
__CONTENT__        </div>
        <div class="footer">
            <p>__FOOTER__</p>
            <p>&copy; {{year}} {{app_name}}</p>
        </div>
    </div>
</body>
</html>"#;
