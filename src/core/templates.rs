//! Game template directories copied into a new project's `src/`.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::utils::{io, validation};

/// A template directory and the suffix its copy gets after the project name.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub dir: &'static str,
    pub suffix: &'static str,
}

pub const TEMPLATES: [Template; 3] = [
    Template {
        dir: "game",
        suffix: "",
    },
    Template {
        dir: "game_lib",
        suffix: "_lib",
    },
    Template {
        dir: "game_tests",
        suffix: "_tests",
    },
];

/// Templates shipped in this repository's `templates/` directory.
pub const BUNDLED_TEMPLATES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/templates");

/// Template root used when none is given explicitly.
///
/// A `game/` directory next to the executable wins; otherwise the bundled
/// templates are used. When neither has one the executable directory is
/// returned so the missing-template error points there.
pub fn default_templates_root(executable_dir: &Path) -> PathBuf {
    let bundled = Path::new(BUNDLED_TEMPLATES_DIR);
    let first = TEMPLATES[0].dir;

    if executable_dir.join(first).is_dir() {
        executable_dir.to_path_buf()
    } else if bundled.join(first).is_dir() {
        bundled.to_path_buf()
    } else {
        executable_dir.to_path_buf()
    }
}

impl Template {
    /// Directory name under `src/` for a given project.
    pub fn target_name(&self, project_name: &str) -> String {
        format!("{}{}", project_name, self.suffix)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CopiedTemplate {
    pub template: String,
    pub source: String,
    pub target: String,
}

/// Resolve every template under `root`, failing on the first one missing.
///
/// Nothing is copied until all three are known to exist.
pub fn resolve_templates(root: &Path) -> Result<Vec<(Template, PathBuf)>> {
    TEMPLATES
        .iter()
        .map(|template| -> Result<(Template, PathBuf)> {
            let source = root.join(template.dir);
            validation::require_dir(&source, |path: &Path| {
                Error::template_dir_missing(template.dir, path.display().to_string())
            })?;
            Ok((*template, source))
        })
        .collect()
}

/// Copy all templates into `<project_dir>/src/<name><suffix>`.
pub fn copy_templates(
    templates_root: &Path,
    project_dir: &Path,
    project_name: &str,
) -> Result<Vec<CopiedTemplate>> {
    let resolved = resolve_templates(templates_root)?;
    let src_dir = project_dir.join("src");

    let mut copied = Vec::with_capacity(resolved.len());
    for (template, source) in resolved {
        let target = src_dir.join(template.target_name(project_name));
        io::copy_dir_recursive(&source, &target)?;
        copied.push(CopiedTemplate {
            template: template.dir.to_string(),
            source: source.display().to_string(),
            target: target.display().to_string(),
        });
    }

    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn make_templates(root: &Path, dirs: &[&str]) {
        for dir in dirs {
            fs::create_dir_all(root.join(dir).join("src")).unwrap();
            fs::write(root.join(dir).join("src/main.cpp"), format!("// {}", dir)).unwrap();
        }
    }

    #[test]
    fn target_names_follow_project_name() {
        let names: Vec<String> = TEMPLATES.iter().map(|t| t.target_name("MyGame")).collect();
        assert_eq!(names, vec!["MyGame", "MyGame_lib", "MyGame_tests"]);
    }

    #[test]
    fn default_root_prefers_executable_dir() {
        let exe_dir = TempDir::new().unwrap();
        make_templates(exe_dir.path(), &["game", "game_lib", "game_tests"]);

        assert_eq!(default_templates_root(exe_dir.path()), exe_dir.path());
    }

    #[test]
    fn default_root_falls_back_to_bundled_templates() {
        let exe_dir = TempDir::new().unwrap();

        let root = default_templates_root(exe_dir.path());

        assert_eq!(root, Path::new(BUNDLED_TEMPLATES_DIR));
        assert_eq!(resolve_templates(&root).unwrap().len(), 3);
    }

    #[test]
    fn copy_templates_creates_three_targets() {
        let templates = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        make_templates(templates.path(), &["game", "game_lib", "game_tests"]);

        let copied = copy_templates(templates.path(), project.path(), "MyGame").unwrap();

        assert_eq!(copied.len(), 3);
        for (dir, target) in [
            ("game", "MyGame"),
            ("game_lib", "MyGame_lib"),
            ("game_tests", "MyGame_tests"),
        ] {
            let copied_main = project.path().join("src").join(target).join("src/main.cpp");
            assert_eq!(fs::read_to_string(copied_main).unwrap(), format!("// {}", dir));
        }
    }

    #[test]
    fn missing_template_fails_before_any_copy() {
        let templates = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        make_templates(templates.path(), &["game", "game_lib"]);

        let err = copy_templates(templates.path(), project.path(), "MyGame").unwrap_err();

        assert_eq!(err.code.as_str(), "template.dir_missing");
        assert_eq!(err.details["template"], "game_tests");
        assert!(!project.path().join("src").exists());
    }

    #[test]
    fn template_that_is_a_file_counts_as_missing() {
        let templates = TempDir::new().unwrap();
        make_templates(templates.path(), &["game", "game_tests"]);
        fs::write(templates.path().join("game_lib"), "not a dir").unwrap();

        let err = resolve_templates(templates.path()).unwrap_err();
        assert_eq!(err.details["template"], "game_lib");
    }
}
