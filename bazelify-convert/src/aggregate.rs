//! Per-directory BUILD file serialization.

use bazelify_core::{BazelFile, ConversionMode};

use crate::{
    paths::BUILD_FILE,
    shims::SOONG_MODULE_LOAD,
    target::{DirectoryTargets, Target},
};

/// Separator placed before every target in a BUILD file.
const TARGET_SEPARATOR: &str = "\n\n";

/// Build one `BUILD.bazel` per directory.
///
/// Directories are emitted in lexicographic order and targets within a
/// directory are sorted by name, so the output does not depend on the
/// iteration order of `directory_targets`. The sort is stable: targets that
/// share a name keep their relative input order and are all emitted.
pub fn build_directory_files(
    directory_targets: &DirectoryTargets,
    mode: ConversionMode,
) -> Vec<BazelFile> {
    let mut directories: Vec<&String> = directory_targets.keys().collect();
    directories.sort();

    directories
        .into_iter()
        .map(|dir| {
            let content = render_build_file(&directory_targets[dir], mode);
            tracing::debug!(
                dir = %dir,
                targets = directory_targets[dir].len(),
                "serialized build file"
            );
            BazelFile::new(dir.as_str(), BUILD_FILE, content)
        })
        .collect()
}

fn render_build_file(targets: &[Target], mode: ConversionMode) -> String {
    // Overlay targets are generic soong_module calls; native targets are
    // self-contained and need no load.
    let mut content = match mode {
        ConversionMode::Overlay => SOONG_MODULE_LOAD.to_string(),
        ConversionMode::Native => String::new(),
    };

    let mut sorted: Vec<&Target> = targets.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    for target in sorted {
        content.push_str(TARGET_SEPARATOR);
        content.push_str(&target.content);
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::group_by_directory;

    fn targets(items: &[(&str, &str)]) -> DirectoryTargets {
        group_by_directory(
            items
                .iter()
                .map(|(dir, name)| Target::new(*name, format!("rule(name = \"{name}\")"), *dir)),
        )
    }

    #[test]
    fn test_one_file_per_directory() {
        let files = build_directory_files(
            &targets(&[("a", "x"), ("b", "y"), ("a", "z")]),
            ConversionMode::Native,
        );

        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.basename() == BUILD_FILE));
    }

    #[test]
    fn test_directories_sorted() {
        let files = build_directory_files(
            &targets(&[("z", "t"), ("", "t"), ("a/b", "t"), ("a", "t")]),
            ConversionMode::Native,
        );

        let dirs: Vec<&str> = files.iter().map(|f| f.dir()).collect();
        assert_eq!(dirs, vec!["", "a", "a/b", "z"]);
    }

    #[test]
    fn test_targets_sorted_by_name() {
        let files = build_directory_files(
            &targets(&[("pkg", "b_target"), ("pkg", "a_target")]),
            ConversionMode::Native,
        );

        assert_eq!(
            files[0].contents(),
            "\n\nrule(name = \"a_target\")\n\nrule(name = \"b_target\")"
        );
    }

    #[test]
    fn test_native_mode_has_no_preamble() {
        let files = build_directory_files(&targets(&[("pkg", "t")]), ConversionMode::Native);
        assert!(!files[0].contents().contains("load("));
    }

    #[test]
    fn test_overlay_mode_starts_with_preamble() {
        let files = build_directory_files(&targets(&[("pkg", "t")]), ConversionMode::Overlay);
        assert_eq!(
            files[0].contents(),
            format!("{}\n\nrule(name = \"t\")", SOONG_MODULE_LOAD)
        );
    }

    #[test]
    fn test_directory_without_targets() {
        let mut directory_targets = DirectoryTargets::new();
        directory_targets.insert("empty".to_string(), Vec::new());

        let native = build_directory_files(&directory_targets, ConversionMode::Native);
        assert_eq!(native[0].contents(), "");

        let overlay = build_directory_files(&directory_targets, ConversionMode::Overlay);
        assert_eq!(overlay[0].contents(), SOONG_MODULE_LOAD);
    }

    #[test]
    fn test_duplicate_names_keep_input_order() {
        let mut directory_targets = DirectoryTargets::new();
        directory_targets.insert(
            "pkg".to_string(),
            vec![
                Target::new("dup", "# first dup", "pkg"),
                Target::new("a", "# a", "pkg"),
                Target::new("dup", "# second dup", "pkg"),
            ],
        );

        let files = build_directory_files(&directory_targets, ConversionMode::Native);
        assert_eq!(
            files[0].contents(),
            "\n\n# a\n\n# first dup\n\n# second dup"
        );
    }

    #[test]
    fn test_input_is_not_reordered() {
        let directory_targets = targets(&[("pkg", "b"), ("pkg", "a")]);
        build_directory_files(&directory_targets, ConversionMode::Native);

        let names: Vec<&str> = directory_targets["pkg"]
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, vec!["b", "a"]);
    }
}
