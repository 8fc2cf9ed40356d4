//! Template resolution: framework choice -> ordered copy operations
//!
//! The tables below mirror the template tree layout: `spa/` holds the
//! SPA-generator templates (with `spa/common` shared across frameworks and
//! one subtree per framework), `common/` holds assets shared by every
//! generator (build scripts, csproj fragments, branding).

use crate::answers::{AnswerSet, FrameworkChoice, ScriptLanguage};
use serde_json::{json, Value};

/// Copy semantics for one operation
#[derive(Debug, Clone, PartialEq)]
pub enum CopyMode {
    /// Recursive copy with token substitution, replacing the destination
    Overwrite,
    /// Deep-merge the value into the destination JSON file
    JsonMerge(Value),
}

/// One scheduled file/tree copy, paths relative to the template root and
/// the module directory respectively
#[derive(Debug, Clone, PartialEq)]
pub struct CopyOperation {
    pub source: String,
    pub dest: String,
    pub mode: CopyMode,
}

fn copy(source: impl Into<String>, dest: impl Into<String>) -> CopyOperation {
    CopyOperation {
        source: source.into(),
        dest: dest.into(),
        mode: CopyMode::Overwrite,
    }
}

fn merge(dest: impl Into<String>, value: Value) -> CopyOperation {
    CopyOperation {
        // JSON merges never read from the template tree
        source: String::new(),
        dest: dest.into(),
        mode: CopyMode::JsonMerge(value),
    }
}

/// Resolve the ordered operation list for one run. Pure function of the
/// framework choice (plus the names baked into destination paths): the same
/// answers always produce the same list in the same order.
pub fn resolve(answers: &AnswerSet) -> Vec<CopyOperation> {
    match answers.framework {
        FrameworkChoice::ReactTsx => react_operations(answers, ScriptLanguage::Tsx),
        FrameworkChoice::ReactJsx => react_operations(answers, ScriptLanguage::Jsx),
        FrameworkChoice::Vue => vue_operations(answers),
        FrameworkChoice::Angular => angular_operations(answers),
    }
}

fn react_operations(answers: &AnswerSet, lang: ScriptLanguage) -> Vec<CopyOperation> {
    let module = &answers.module_name;
    let full_namespace = answers.full_namespace();
    let lang_path = format!("spa/ReactJS/{}", lang.value());

    let mut operations = vec![
        copy("common/build", "_BuildScripts"),
        copy("spa/common/_BuildScripts", "_BuildScripts"),
        copy(format!("{lang_path}/_BuildScripts"), "_BuildScripts"),
        copy("common/csproj/Providers", "Providers"),
        copy("common/csproj/NuGet.config", "NuGet.config"),
        copy("spa/common/App_LocalResources", "App_LocalResources"),
        copy("spa/common/Components", "Components"),
        copy("spa/common/Controllers", "Controllers"),
        copy("spa/common/Data", "Data"),
        copy("spa/common/ViewModels", "ViewModels"),
        copy("spa/common/Providers", "Providers"),
        copy("common/src", "src"),
        copy("spa/common/src", "src"),
        copy(lang_path.as_str(), "."),
        copy("spa/common/RouteConfig.cs", "RouteConfig.cs"),
        copy("spa/common/Constants.cs", "Constants.cs"),
        copy("spa/common/manifest.dnn", format!("{module}.dnn")),
        copy("spa/common/symbols.dnn", format!("{module}_Symbols.dnn")),
        copy("spa/common/License.txt", "License.txt"),
        copy("spa/common/ReleaseNotes.txt", "ReleaseNotes.txt"),
        copy(
            "spa/ReactJS/common/Module.csproj",
            format!("{full_namespace}.csproj"),
        ),
        copy("spa/ReactJS/common/Module.build", "Module.build"),
        copy(
            "spa/common/Data/ModuleContext.cs",
            format!("Data/{module}Context.cs"),
        ),
        copy("spa/common/package.json", "package.json"),
        copy("common/branding/Images", "Images"),
        merge(".babelrc", babelrc()),
    ];

    match lang {
        ScriptLanguage::Jsx => {
            operations.push(merge("jsconfig.json", jsconfig()));
            operations.push(copy(format!("{lang_path}/.eslintrc.js"), ".eslintrc.js"));
        }
        ScriptLanguage::Tsx => {
            operations.push(merge("tsconfig.json", tsconfig()));
            operations.push(copy(format!("{lang_path}/tslint.json"), "tslint.json"));
        }
    }

    // Must come after the package.json overwrite copy above
    operations.push(merge("package.json", react_package_json(lang)));

    operations
}

fn vue_operations(answers: &AnswerSet) -> Vec<CopyOperation> {
    let module = &answers.module_name;
    let full_namespace = answers.full_namespace();

    vec![
        copy("spa/VueJS/Module.csproj", format!("{full_namespace}.csproj")),
        copy("spa/VueJS/Module.dnn", format!("{module}.dnn")),
        copy("spa/VueJS/symbols.dnn", format!("{module}_Symbols.dnn")),
        copy(
            "spa/VueJS/Data/ModuleContext.cs",
            format!("Data/{module}Context.cs"),
        ),
        copy("spa/VueJS/common", "."),
        copy("common/branding/Images", "Images"),
    ]
}

fn angular_operations(answers: &AnswerSet) -> Vec<CopyOperation> {
    let module = &answers.module_name;
    let full_namespace = answers.full_namespace();

    vec![
        copy("spa/common/package.json", "package.json"),
        copy("common/branding/Images", "Images"),
        copy("spa/common/Controllers", "Controllers"),
        copy("spa/common/License.txt", "License.txt"),
        copy("spa/common/ReleaseNotes.txt", "ReleaseNotes.txt"),
        copy("spa/common/Components", "Components"),
        copy("spa/common/ViewModels", "ViewModels"),
        copy("spa/common/Constants.cs", "Constants.cs"),
        copy("spa/common/Data/Item.cs", "Data/Item.cs"),
        copy(
            "spa/common/Data/ModuleContext.cs",
            format!("Data/{module}Context.cs"),
        ),
        copy("spa/common/_BuildScripts", "_BuildScripts"),
        copy("spa/common/src/Resources", "src/Resources"),
        copy("spa/common/src/Settings.html", "src/Settings.html"),
        copy("spa/common/App_LocalResources", "App_LocalResources"),
        copy("spa/common/Providers", "Providers"),
        copy("spa/common/manifest.dnn", format!("{module}.dnn")),
        copy("spa/common/symbols.dnn", format!("{module}_Symbols.dnn")),
        copy("spa/common/RouteConfig.cs", "RouteConfig.cs"),
        copy("spa/Angular/webpack.config.js", "webpack.config.js"),
        copy("spa/Angular/Module.csproj", format!("{full_namespace}.csproj")),
        copy("spa/Angular/src", "src"),
        copy("spa/Angular/Module.build", "Module.build"),
        copy("spa/Angular/angular.json", "angular.json"),
        copy("spa/Angular/tsconfig.app.json", "tsconfig.app.json"),
        copy("spa/Angular/tsconfig.json", "tsconfig.json"),
        copy("spa/Angular/tsconfig.spec.json", "tsconfig.spec.json"),
        merge("package.json", angular_package_json(module)),
    ]
}

fn babelrc() -> Value {
    json!({
        "presets": ["@babel/preset-env", "@babel/preset-react"],
        "plugins": [
            "@babel/plugin-transform-object-assign",
            "@babel/plugin-proposal-object-rest-spread"
        ],
        "env": {
            "production": {
                "plugins": ["transform-react-remove-prop-types"]
            }
        }
    })
}

fn jsconfig() -> Value {
    json!({
        "compilerOptions": {
            "target": "es6",
            "module": "commonjs",
            "allowSyntheticDefaultImports": true
        },
        "exclude": ["node_modules"]
    })
}

fn tsconfig() -> Value {
    json!({
        "compilerOptions": {
            "module": "es6",
            "target": "es6",
            "moduleResolution": "node",
            "baseUrl": "src",
            "allowSyntheticDefaultImports": true,
            "noImplicitAny": false,
            "sourceMap": true,
            "outDir": "ts-build",
            "jsx": "react"
        },
        "exclude": ["node_modules"]
    })
}

fn react_package_json(lang: ScriptLanguage) -> Value {
    let mut package = json!({
        "devDependencies": {
            "@babel/plugin-proposal-object-rest-spread": "^7.20.7",
            "@babel/plugin-transform-object-assign": "^7.22.5",
            "@babel/core": "^7.22.5",
            "@babel/preset-env": "^7.22.5",
            "@babel/preset-react": "^7.22.5",
            "archiver": "^3.0.0",
            "babel-loader": "^9.1.2",
            "browser-sync": "^2.26.3",
            "babel-plugin-transform-react-remove-prop-types": "^0.4.24",
            "chokidar": "^3.5.3",
            "concurrently": "^8.2.0",
            "copy-webpack-plugin": "^11.0.0",
            "css-loader": "^6.8.1",
            "file-loader": "^6.2.0",
            "dotenv": "^6.2.0",
            "fs-extra": "^7.0.1",
            "html-webpack-plugin": "^5.5.1",
            "marked": "^4.3.0",
            "sass": "^1.63.2",
            "sass-loader": "^13.3.1",
            "style-loader": "^3.3.3",
            "webpack": "^5.86.0",
            "webpack-cli": "^5.1.4",
            "webpack-dev-server": "^4.15.0",
            "@testing-library/dom": "^7.21.4"
        },
        "dependencies": {
            "@testing-library/jest-dom": "^5.16.5",
            "@testing-library/react": "^13.4.0",
            "@testing-library/user-event": "^13.5.0",
            "react": "^18.2.0",
            "react-dom": "^18.2.0",
            "web-vitals": "^2.1.4"
        }
    });

    let lang_dev_dependencies = match lang {
        ScriptLanguage::Jsx => json!({
            "eslint": "^8.42.0",
            "eslint-plugin-react": "^7.32.2"
        }),
        ScriptLanguage::Tsx => json!({
            "@types/react": "^18.2.9",
            "@types/react-dom": "^18.2.4",
            "ts-loader": "^9.4.3",
            "typescript": "^5.1.3"
        }),
    };

    let dev = package["devDependencies"].as_object_mut().expect("object");
    for (key, value) in lang_dev_dependencies.as_object().expect("object") {
        dev.insert(key.clone(), value.clone());
    }

    package
}

fn angular_package_json(module_name: &str) -> Value {
    json!({
        "scripts": {
            "ng": "ng",
            "angular-build": "ng build --output-hashing none",
            "start": format!("ng run {module_name}:builddev --watch")
        },
        "dependencies": {
            "@angular/animations": "^14.0.0",
            "@angular/common": "^14.0.0",
            "@angular/compiler": "^14.0.0",
            "@angular/core": "^14.0.0",
            "@angular/forms": "^14.0.0",
            "@angular/platform-browser": "^14.0.0",
            "@angular/platform-browser-dynamic": "^14.0.0",
            "@angular/router": "^14.0.0",
            "rxjs": "~7.5.0",
            "tslib": "^2.3.0",
            "zone.js": "~0.11.4"
        },
        "devDependencies": {
            "@angular-builders/custom-webpack": "^14.1.0",
            "@angular-devkit/build-angular": "^14.2.1",
            "copy-webpack-plugin": "^11.0.0",
            "html-webpack-plugin": "^5.5.0",
            "@angular/cli": "~14.2.1",
            "@angular/compiler-cli": "^14.0.0",
            "@types/jasmine": "~4.0.0",
            "jasmine-core": "~4.3.0",
            "karma": "~6.4.0",
            "karma-chrome-launcher": "~3.1.0",
            "karma-coverage": "~2.2.0",
            "karma-jasmine": "~5.1.0",
            "karma-jasmine-html-reporter": "~2.0.0",
            "typescript": "~4.7.2"
        }
    })
}
