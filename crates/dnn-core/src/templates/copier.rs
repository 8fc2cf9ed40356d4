//! Template materialization: copy trees with token substitution
//!
//! `Overwrite` operations copy a file or tree from the template root into
//! the module directory, rendering tokens in UTF-8 contents and in every
//! path component. Files that are not valid UTF-8 (branding images) are
//! copied byte-for-byte. `JsonMerge` operations extend existing JSON files
//! instead.

use crate::error::{Result, ScaffoldError};
use crate::templates::context::{render, TemplateContext};
use crate::templates::json_merge;
use crate::templates::resolver::{CopyMode, CopyOperation};
use std::path::{Path, PathBuf};
use tokio::fs;
use walkdir::WalkDir;

/// Execute every operation in sequence. Returns the paths written, for the
/// progress summary.
pub async fn materialize(
    template_root: &Path,
    module_dir: &Path,
    operations: &[CopyOperation],
    context: &TemplateContext,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(module_dir)
        .await
        .map_err(|e| ScaffoldError::io("failed to create module directory", module_dir, e))?;

    let mut written = Vec::new();
    for operation in operations {
        match &operation.mode {
            CopyMode::Overwrite => {
                let source = template_root.join(&operation.source);
                let dest = module_dir.join(render_path(&operation.dest, context));
                written.extend(copy_rendered(&source, &dest, context).await?);
            }
            CopyMode::JsonMerge(value) => {
                let dest = module_dir.join(render_path(&operation.dest, context));
                json_merge::merge_into_file(&dest, value).await?;
                written.push(dest);
            }
        }
    }
    Ok(written)
}

/// Render tokens in each component of a relative path.
pub fn render_path(path: &str, context: &TemplateContext) -> PathBuf {
    path.split('/')
        .filter(|component| !component.is_empty() && *component != ".")
        .map(|component| render(component, context))
        .collect()
}

/// Copy one file or a whole tree, substituting tokens as we go.
async fn copy_rendered(
    source: &Path,
    dest: &Path,
    context: &TemplateContext,
) -> Result<Vec<PathBuf>> {
    let metadata = fs::metadata(source)
        .await
        .map_err(|e| ScaffoldError::io("template source not found", source, e))?;

    if metadata.is_file() {
        copy_file(source, dest, context).await?;
        return Ok(vec![dest.to_path_buf()]);
    }

    let mut written = Vec::new();
    for entry in WalkDir::new(source).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(source).to_path_buf();
            ScaffoldError::io(
                "failed to walk template tree",
                path,
                e.into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("walk error")),
            )
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(source)
            .expect("walked entries stay under their root");
        let mut target = dest.to_path_buf();
        for component in relative.components() {
            target.push(render(&component.as_os_str().to_string_lossy(), context));
        }

        copy_file(entry.path(), &target, context).await?;
        written.push(target);
    }
    Ok(written)
}

async fn copy_file(source: &Path, dest: &Path, context: &TemplateContext) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| ScaffoldError::io("failed to create directory", parent, e))?;
    }

    let bytes = fs::read(source)
        .await
        .map_err(|e| ScaffoldError::io("failed to read template file", source, e))?;

    let output = match std::str::from_utf8(&bytes) {
        Ok(text) => render(text, context).into_bytes(),
        // Binary asset, copy verbatim
        Err(_) => bytes,
    };

    fs::write(dest, output)
        .await
        .map_err(|e| ScaffoldError::io("failed to write file", dest, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::{AnswerSet, FrameworkChoice, RawAnswers};
    use crate::templates::resolver;
    use serde_json::Value;

    fn answer_set(framework: FrameworkChoice) -> AnswerSet {
        AnswerSet::from_raw(
            RawAnswers {
                framework,
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
        .unwrap()
    }

    fn context(answers: &AnswerSet) -> TemplateContext {
        TemplateContext::from_answers(answers)
    }

    #[test]
    fn test_render_path_substitutes_components() {
        let answers = answer_set(FrameworkChoice::ReactTsx);
        let ctx = context(&answers);
        assert_eq!(
            render_path("Data/<%= moduleName %>Context.cs", &ctx),
            PathBuf::from("Data/MyWidgetContext.cs")
        );
        assert_eq!(render_path("./src", &ctx), PathBuf::from("src"));
    }

    #[tokio::test]
    async fn test_tree_copy_renders_contents_and_names() {
        let template = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();

        let controllers = template.path().join("Controllers");
        std::fs::create_dir_all(&controllers).unwrap();
        std::fs::write(
            controllers.join("<%= moduleName %>Controller.cs"),
            "namespace <%= fullNamespace %> {}\n",
        )
        .unwrap();

        let answers = answer_set(FrameworkChoice::ReactTsx);
        let ctx = context(&answers);
        let written = copy_rendered(
            &template.path().join("Controllers"),
            &out.path().join("Controllers"),
            &ctx,
        )
        .await
        .unwrap();

        assert_eq!(written.len(), 1);
        let rendered = out.path().join("Controllers/MyWidgetController.cs");
        assert_eq!(
            std::fs::read_to_string(rendered).unwrap(),
            "namespace AcmeCorp.Modules.MyWidget {}\n"
        );
    }

    #[tokio::test]
    async fn test_binary_files_copied_verbatim() {
        let template = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();

        // PNG header followed by bytes that are not valid UTF-8
        let payload = [0x89u8, 0x50, 0x4E, 0x47, 0xFF, 0xFE, 0x3C, 0x25];
        std::fs::write(template.path().join("icon.png"), payload).unwrap();

        let answers = answer_set(FrameworkChoice::ReactTsx);
        copy_rendered(
            &template.path().join("icon.png"),
            &out.path().join("icon.png"),
            &context(&answers),
        )
        .await
        .unwrap();

        assert_eq!(std::fs::read(out.path().join("icon.png")).unwrap(), payload);
    }

    #[tokio::test]
    async fn test_missing_template_source_is_an_io_error() {
        let template = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();

        let err = copy_rendered(
            &template.path().join("nope"),
            &out.path().join("nope"),
            &context(&answer_set(FrameworkChoice::ReactTsx)),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ScaffoldError::Io { .. }));
    }

    /// Build just enough of a template tree for the React operation list.
    fn seed_react_template(root: &Path) {
        let dirs = [
            "common/build",
            "common/csproj/Providers",
            "common/src",
            "common/branding/Images",
            "spa/common/_BuildScripts",
            "spa/common/App_LocalResources",
            "spa/common/Components",
            "spa/common/Controllers",
            "spa/common/Data",
            "spa/common/ViewModels",
            "spa/common/Providers",
            "spa/common/src",
            "spa/ReactJS/common",
            "spa/ReactJS/tsx/_BuildScripts",
        ];
        for dir in dirs {
            std::fs::create_dir_all(root.join(dir)).unwrap();
        }

        let files = [
            ("common/build/package.build", "msbuild <%= msBuildVersion %>"),
            ("common/csproj/Providers/provider.config", "<%= guid %>"),
            ("common/csproj/NuGet.config", "<config/>"),
            ("common/src/index.html", "<title><%= moduleFriendlyName %></title>"),
            ("common/branding/Images/icon.png", "png"),
            ("spa/common/_BuildScripts/build.js", "// build"),
            ("spa/common/App_LocalResources/View.resx", "<%= description %>"),
            ("spa/common/Components/FeatureController.cs", "class FeatureController {}"),
            ("spa/common/Controllers/BusinessController.cs", "namespace <%= fullNamespace %> {}"),
            ("spa/common/Data/Item.cs", "class Item {}"),
            ("spa/common/ViewModels/ItemViewModel.cs", "class ItemViewModel {}"),
            ("spa/common/Providers/provider.txt", "provider"),
            ("spa/common/src/App.css", "body {}"),
            ("spa/common/RouteConfig.cs", "class RouteConfig {}"),
            ("spa/common/Constants.cs", "class Constants {}"),
            ("spa/common/manifest.dnn", "<package name=\"<%= fullNamespace %>\"/>"),
            ("spa/common/symbols.dnn", "<symbols/>"),
            ("spa/common/License.txt", "(c) <%= currentYear %> <%= company %>"),
            ("spa/common/ReleaseNotes.txt", "v<%= version %>"),
            ("spa/common/Data/ModuleContext.cs", "class <%= moduleName %>Context {}"),
            ("spa/common/package.json", "{\"name\": \"<%= moduleName %>\", \"version\": \"<%= version %>\"}"),
            ("spa/ReactJS/common/Module.csproj", "<Project/>"),
            ("spa/ReactJS/common/Module.build", "<Build/>"),
            ("spa/ReactJS/tsx/_BuildScripts/webpack.config.js", "// webpack"),
            ("spa/ReactJS/tsx/App.tsx", "export const App = () => null;"),
            ("spa/ReactJS/tsx/tslint.json", "{}"),
        ];
        for (path, contents) in files {
            std::fs::write(root.join(path), contents).unwrap();
        }
    }

    // company="Acme Corp", module="My Widget", React/TypeScript: the
    // merged manifest gains typescript and no eslint, and tsconfig.json
    // lands with module "es6"
    #[tokio::test]
    async fn test_react_typescript_materialization() {
        let template = tempfile::tempdir().unwrap();
        seed_react_template(template.path());
        let out = tempfile::tempdir().unwrap();
        let module_dir = out.path().join("Modules/MyWidget");

        let answers = answer_set(FrameworkChoice::ReactTsx);
        let ctx = context(&answers);
        let operations = resolver::resolve(&answers);
        materialize(template.path(), &module_dir, &operations, &ctx)
            .await
            .unwrap();

        let package: Value = serde_json::from_str(
            &std::fs::read_to_string(module_dir.join("package.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(package["name"], "MyWidget");
        assert!(package["devDependencies"]["typescript"].is_string());
        assert!(package["devDependencies"]["eslint"].is_null());

        let tsconfig: Value = serde_json::from_str(
            &std::fs::read_to_string(module_dir.join("tsconfig.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(tsconfig["compilerOptions"]["module"], "es6");

        // Descriptor and context files renamed from the answers
        assert!(module_dir.join("AcmeCorp.Modules.MyWidget.csproj").exists());
        assert!(module_dir.join("Data/MyWidgetContext.cs").exists());
        assert!(module_dir.join("MyWidget.dnn").exists());

        let license =
            std::fs::read_to_string(module_dir.join("License.txt")).unwrap();
        assert!(license.contains("Acme Corp"));
    }
}
