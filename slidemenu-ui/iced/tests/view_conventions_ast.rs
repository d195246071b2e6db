use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use syn::{Item, UseTree, Visibility};

#[test]
fn given_view_modules_when_validating_conventions_then_all_modules_comply() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let views_dir = manifest_dir.join("src/view");
    let mod_rs = views_dir.join("mod.rs");

    let mut violations: Vec<String> = Vec::new();

    let mod_source = fs::read_to_string(&mod_rs).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", mod_rs.display())
    });
    let mod_file = syn::parse_file(&mod_source).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", mod_rs.display())
    });

    let mut declared_modules = BTreeSet::new();
    for item in &mod_file.items {
        match item {
            Item::Mod(item_mod)
                if is_pub_crate(&item_mod.vis) && item_mod.content.is_none() =>
            {
                declared_modules.insert(item_mod.ident.to_string());
            },
            Item::Mod(item_mod) => violations.push(format!(
                "{}: module declaration '{}' must be pub(crate) mod <name>;",
                mod_rs.display(),
                item_mod.ident
            )),
            _ => violations.push(format!(
                "{}: view index may only declare modules",
                mod_rs.display()
            )),
        }
    }

    let mut fs_modules = BTreeSet::new();
    let entries = fs::read_dir(&views_dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", views_dir.display())
    });
    for entry in entries {
        let entry = entry
            .unwrap_or_else(|err| panic!("failed to read dir entry: {err}"));
        let path = entry.path();
        let file_type = entry.file_type().unwrap_or_else(|err| {
            panic!("failed to read file type for {}: {err}", path.display())
        });

        if file_type.is_dir() {
            violations.push(format!(
                "{}: nested view directories are forbidden",
                path.display()
            ));
            continue;
        }
        if path.extension().is_none_or(|ext| ext != "rs") {
            continue;
        }

        let stem = path
            .file_stem()
            .unwrap_or_else(|| panic!("missing stem for {}", path.display()))
            .to_string_lossy()
            .to_string();
        if stem != "mod" {
            fs_modules.insert(stem);
        }
    }

    if declared_modules != fs_modules {
        violations.push(format!(
            "{}: declared modules {:?} do not match file modules {:?}",
            mod_rs.display(),
            declared_modules,
            fs_modules
        ));
    }

    for module in &declared_modules {
        let file_path = views_dir.join(format!("{module}.rs"));
        validate_view_file(&file_path, &mut violations);
    }

    assert!(
        violations.is_empty(),
        "view convention violations:\n{}",
        violations.join("\n")
    );
}

fn validate_view_file(file_path: &Path, violations: &mut Vec<String>) {
    let source = fs::read_to_string(file_path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", file_path.display())
    });
    let file = syn::parse_file(&source).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", file_path.display())
    });
    let expected_prefix = file_stem_pascal_case(file_path);

    for forbidden in [
        "crate::state",
        "crate::reducer",
        "crate::widget",
        "HostController",
    ] {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: views must render view models only, found {forbidden}",
                file_path.display()
            ));
        }
    }

    for forbidden in ["log::", "Task::", "iced::Task", "Subscription"] {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: forbidden side-effect pattern detected: {forbidden}",
                file_path.display()
            ));
        }
    }
    for forbidden in ["Instant::now", ".elapsed("] {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: forbidden runtime-time pattern detected: {forbidden}",
                file_path.display()
            ));
        }
    }

    let mut view_count = 0usize;
    let mut props_names: Vec<String> = Vec::new();

    for item in &file.items {
        match item {
            Item::Fn(item_fn) if item_fn.sig.ident == "view" => {
                if is_pub_crate(&item_fn.vis) {
                    view_count += 1;
                } else {
                    violations.push(format!(
                        "{}: view must be pub(crate)",
                        file_path.display()
                    ));
                }
            },
            Item::Struct(item_struct) => {
                let name = item_struct.ident.to_string();
                if name.ends_with("Props") {
                    props_names.push(name);
                }
            },
            Item::Enum(item_enum) => {
                if item_enum.ident.to_string().ends_with("Event") {
                    violations.push(format!(
                        "{}: views emit SlideMenuIntent and must not declare \
                         their own event contract",
                        file_path.display()
                    ));
                }
            },
            Item::Use(item_use) => {
                if use_tree_has_glob(&item_use.tree) {
                    violations.push(format!(
                        "{}: wildcard use/import is forbidden",
                        file_path.display()
                    ));
                }
            },
            _ => {},
        }
    }

    if view_count != 1 {
        violations.push(format!(
            "{}: expected exactly one pub(crate) fn view, found {view_count}",
            file_path.display()
        ));
    }

    if props_names.len() != 1 {
        violations.push(format!(
            "{}: expected exactly one *Props type, found {}",
            file_path.display(),
            props_names.len()
        ));
    }

    for name in props_names {
        if name != format!("{expected_prefix}Props") {
            violations.push(format!(
                "{}: props type '{name}' must be named '{expected_prefix}Props'",
                file_path.display()
            ));
        }
    }
}

fn file_stem_pascal_case(file_path: &Path) -> String {
    let stem = file_path
        .file_stem()
        .unwrap_or_else(|| panic!("missing stem for {}", file_path.display()))
        .to_string_lossy()
        .to_string();
    snake_to_pascal_case(&stem)
}

fn snake_to_pascal_case(value: &str) -> String {
    value
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            let Some(first) = chars.next() else {
                return String::new();
            };
            let mut pascal = String::new();
            pascal.extend(first.to_uppercase());
            pascal.push_str(chars.as_str());
            pascal
        })
        .collect::<String>()
}

fn use_tree_has_glob(tree: &UseTree) -> bool {
    match tree {
        UseTree::Glob(_) => true,
        UseTree::Group(group) => group.items.iter().any(use_tree_has_glob),
        UseTree::Path(path) => use_tree_has_glob(&path.tree),
        UseTree::Name(_) | UseTree::Rename(_) => false,
    }
}

fn is_pub_crate(vis: &Visibility) -> bool {
    match vis {
        Visibility::Restricted(restricted) => {
            restricted.in_token.is_none() && restricted.path.is_ident("crate")
        },
        _ => false,
    }
}
