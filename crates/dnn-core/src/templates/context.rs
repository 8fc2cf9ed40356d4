//! Closed substitution context for template rendering
//!
//! Every key a template may reference is a named field here; the token table
//! is generated from the struct, so an unrecognized key simply cannot be
//! constructed. Tokens use the `<%= key %>` form in both file contents and
//! file/directory names.

use crate::answers::{AnswerSet, MODULE_VERSION};
use chrono::Datelike;

/// Key/value table substituted into template contents and paths
#[derive(Debug, Clone)]
pub struct TemplateContext {
    pub your_name: String,
    pub company: String,
    pub namespace: String,
    pub module_name: String,
    pub module_friendly_name: String,
    pub description: String,
    pub company_url: String,
    pub email_addy: String,
    pub current_year: String,
    pub version: String,
    pub extension_type: String,
    pub full_namespace: String,
    pub guid: String,
    pub localhost: String,
    pub dnn_root: String,
    pub msbuild_version: String,
}

impl TemplateContext {
    pub fn from_answers(answers: &AnswerSet) -> Self {
        Self {
            your_name: answers.author.clone(),
            company: answers.company_raw.clone(),
            namespace: answers.namespace.clone(),
            module_name: answers.module_name.clone(),
            module_friendly_name: answers.module_friendly_name.clone(),
            description: answers.description.clone(),
            company_url: answers.company_url.clone(),
            email_addy: answers.email.clone(),
            current_year: answers.created_at.year().to_string(),
            version: MODULE_VERSION.to_string(),
            extension_type: answers.extension_type.to_string(),
            full_namespace: answers.full_namespace(),
            guid: answers.guid.clone(),
            localhost: answers.dnn_host.clone(),
            dnn_root: answers.dnn_root.clone(),
            msbuild_version: answers.msbuild_version.clone(),
        }
    }

    /// Look up a token key as it appears in templates.
    pub fn get(&self, key: &str) -> Option<&str> {
        let value = match key {
            "yourName" => &self.your_name,
            "company" => &self.company,
            "namespace" => &self.namespace,
            "moduleName" => &self.module_name,
            "moduleFriendlyName" => &self.module_friendly_name,
            "description" => &self.description,
            "companyUrl" => &self.company_url,
            "emailAddy" => &self.email_addy,
            "currentYear" => &self.current_year,
            "version" => &self.version,
            "extensionType" => &self.extension_type,
            "fullNamespace" => &self.full_namespace,
            "guid" => &self.guid,
            "localhost" => &self.localhost,
            "dnnRoot" => &self.dnn_root,
            "msBuildVersion" => &self.msbuild_version,
            _ => return None,
        };
        Some(value)
    }
}

/// Replace every `<%= key %>` token whose key the context knows. Unknown
/// tokens are left in place untouched. Pure: no filesystem involved.
pub fn render(input: &str, context: &TemplateContext) -> String {
    let mut output = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("<%=") {
        output.push_str(&rest[..start]);
        let after_open = &rest[start + 3..];
        match after_open.find("%>") {
            Some(end) => {
                let key = after_open[..end].trim();
                match context.get(key) {
                    Some(value) => output.push_str(value),
                    None => output.push_str(&rest[start..start + 3 + end + 2]),
                }
                rest = &after_open[end + 2..];
            }
            None => {
                // Unterminated token, keep the tail as-is
                output.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    output.push_str(rest);
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::{AnswerSet, FrameworkChoice, RawAnswers};

    fn context() -> TemplateContext {
        let answers = AnswerSet::from_raw(
            RawAnswers {
                framework: FrameworkChoice::ReactTsx,
                company: "Acme Corp".to_string(),
                module_name: "My Widget".to_string(),
                description: "Widget module".to_string(),
                author: "Jane Dev".to_string(),
                company_url: "https://acme.example".to_string(),
                email: "jane@acme.example".to_string(),
                dnn_host: "http://dnndev.me".to_string(),
                dnn_root: "C:\\websites\\dnndev.me".to_string(),
            },
            "16".to_string(),
        )
        .unwrap();
        TemplateContext::from_answers(&answers)
    }

    #[test]
    fn test_renders_known_tokens() {
        let ctx = context();
        assert_eq!(
            render("namespace <%= fullNamespace %>;", &ctx),
            "namespace AcmeCorp.Modules.MyWidget;"
        );
        assert_eq!(render("<%=moduleName%>", &ctx), "MyWidget");
        assert_eq!(render("v<%= version %>", &ctx), "v1.0.0");
    }

    #[test]
    fn test_unknown_tokens_left_in_place() {
        let ctx = context();
        assert_eq!(render("<%= notAKey %>", &ctx), "<%= notAKey %>");
    }

    #[test]
    fn test_unterminated_token_kept_verbatim() {
        let ctx = context();
        assert_eq!(render("before <%= moduleName", &ctx), "before <%= moduleName");
    }

    #[test]
    fn test_multiple_tokens_in_one_line() {
        let ctx = context();
        assert_eq!(
            render("<%= namespace %>.<%= extensionType %>.<%= moduleName %>", &ctx),
            "AcmeCorp.Modules.MyWidget"
        );
    }

    #[test]
    fn test_friendly_name_and_msbuild_version() {
        let ctx = context();
        assert_eq!(render("<%= moduleFriendlyName %>", &ctx), "My Widget");
        assert_eq!(render("<%= msBuildVersion %>", &ctx), "16");
    }
}
