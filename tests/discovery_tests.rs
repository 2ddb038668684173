//! Discovery Tests
//!
//! Tests for:
//! - Content-based classification of files on disk
//! - Shallow vs recursive scans of the base directory
//! - Exact-match exclusion and pruning of excluded directories
//! - `.` / `..` in configured paths
//! - Symlinked files and directories
//! - Include paths with their own recursion flag, exclusive include
//! - Fatal handling of unreadable directories, tolerance of unreadable files

mod common;

use std::path::PathBuf;

use common::{ScratchDir, sorted};
use glslmass_core::{CompileContext, SearchPath};
use glslmass_discovery::{DiscoveryError, classify, discover};

// ============================================================================
// Helper
// ============================================================================

/// Base tree:
///
/// ```text
/// root/
///   a.vert          shader
///   notes.txt       plain text
///   fake.frag       no #version
///   empty.comp      empty
///   sub/b.frag      shader
///   sub/deep/c.comp shader
///   old/d.vert      shader
///   old_v2/e.vert   shader
/// ```
fn fixture() -> (ScratchDir, Vec<PathBuf>) {
    let dir = ScratchDir::new("discovery");
    let shaders = vec![
        dir.shader("a.vert"),
        dir.shader("sub/b.frag"),
        dir.shader("sub/deep/c.comp"),
        dir.shader("old/d.vert"),
        dir.shader("old_v2/e.vert"),
    ];
    dir.write("notes.txt", "just some notes\n");
    dir.write("fake.frag", "void main() {}\n");
    dir.write("empty.comp", "");
    (dir, shaders)
}

// ============================================================================
// Classification
// ============================================================================

#[test]
fn classify_reads_file_content() {
    let dir = ScratchDir::new("classify");
    let shader = dir.write("lighting.glsl", "  // header\n\t #version 330 core\n");
    let plain = dir.write("README.vert", "not a shader\n");
    let empty = dir.write("empty.vert", "");

    assert!(classify(&shader).unwrap());
    assert!(!classify(&plain).unwrap());
    assert!(!classify(&empty).unwrap());
}

#[test]
fn classify_tolerates_binary_content() {
    let dir = ScratchDir::new("classify_bin");
    let path = dir.join("blob.spv");
    std::fs::write(&path, [0x03u8, 0x02, 0x23, 0x07, 0xff, 0xfe, 0x00]).unwrap();
    assert!(!classify(&path).unwrap());
}

// ============================================================================
// Base Directory Scans
// ============================================================================

#[test]
fn shallow_scan_only_sees_top_level() {
    let (dir, _) = fixture();
    let ctx = CompileContext::builder().base_dir(dir.path()).build().unwrap();

    let found = discover(&ctx).unwrap();
    assert_eq!(found, vec![dir.join("a.vert")]);
}

#[test]
fn recursive_scan_finds_nested_shaders() {
    let (dir, shaders) = fixture();
    let ctx = CompileContext::builder()
        .base_dir(dir.path())
        .recursive(true)
        .build()
        .unwrap();

    let found = discover(&ctx).unwrap();
    assert_eq!(sorted(found), sorted(shaders));
}

#[test]
fn returned_paths_are_absolute() {
    let (dir, _) = fixture();
    let ctx = CompileContext::builder()
        .base_dir(dir.path())
        .recursive(true)
        .build()
        .unwrap();

    assert!(discover(&ctx).unwrap().iter().all(|p| p.is_absolute()));
}

// ============================================================================
// Exclusion
// ============================================================================

#[test]
fn excluded_directory_is_not_descended() {
    let (dir, _) = fixture();
    let ctx = CompileContext::builder()
        .base_dir(dir.path())
        .recursive(true)
        .exclude(SearchPath::new(dir.join("sub"), false))
        .build()
        .unwrap();

    let found = sorted(discover(&ctx).unwrap());
    assert_eq!(
        found,
        sorted(vec![
            dir.join("a.vert"),
            dir.join("old/d.vert"),
            dir.join("old_v2/e.vert"),
        ])
    );
}

#[test]
fn exclusion_is_not_a_prefix_match() {
    let (dir, _) = fixture();
    let ctx = CompileContext::builder()
        .base_dir(dir.path())
        .recursive(true)
        .exclude(SearchPath::new(dir.join("old"), false))
        .build()
        .unwrap();

    let found = discover(&ctx).unwrap();
    assert!(!found.contains(&dir.join("old/d.vert")));
    assert!(found.contains(&dir.join("old_v2/e.vert")));
}

#[test]
fn excluded_file_is_skipped() {
    let (dir, _) = fixture();
    let ctx = CompileContext::builder()
        .base_dir(dir.path())
        .exclude(SearchPath::new(dir.join("a.vert"), false))
        .build()
        .unwrap();

    assert!(discover(&ctx).unwrap().is_empty());
}

#[test]
fn nothing_under_an_excluded_path_is_ever_returned() {
    let (dir, _) = fixture();
    for excluded in ["sub", "sub/deep", "old", "a.vert"] {
        let excluded = dir.join(excluded);
        let ctx = CompileContext::builder()
            .base_dir(dir.path())
            .recursive(true)
            .exclude(SearchPath::new(&excluded, false))
            .include(SearchPath::new(dir.path(), true))
            .build()
            .unwrap();

        for path in discover(&ctx).unwrap() {
            assert!(
                !path.starts_with(&excluded),
                "{} returned although {} is excluded",
                path.display(),
                excluded.display()
            );
        }
    }
}

#[test]
fn excluded_include_root_is_skipped() {
    let (dir, _) = fixture();
    let ctx = CompileContext::builder()
        .base_dir(dir.path())
        .exclusive_include(true)
        .include(SearchPath::new(dir.join("sub"), true))
        .exclude(SearchPath::new(dir.join("sub"), false))
        .build()
        .unwrap();

    assert!(discover(&ctx).unwrap().is_empty());
}

#[test]
fn parent_components_in_base_still_match_excludes() {
    let (dir, _) = fixture();
    let ctx = CompileContext::builder()
        .base_dir(dir.join("sub/../sub/./"))
        .recursive(true)
        .exclude(SearchPath::new(dir.join("sub/deep"), false))
        .build()
        .unwrap();

    assert_eq!(discover(&ctx).unwrap(), vec![dir.join("sub/b.frag")]);
}

// ============================================================================
// Include Paths
// ============================================================================

#[test]
fn exclusive_include_ignores_base_directory() {
    let (dir, _) = fixture();
    let extra = ScratchDir::new("discovery_extra");
    let included = extra.shader("x.vert");

    let ctx = CompileContext::builder()
        .base_dir(dir.path())
        .recursive(true)
        .exclusive_include(true)
        .include(SearchPath::new(extra.path(), false))
        .build()
        .unwrap();

    assert_eq!(discover(&ctx).unwrap(), vec![included]);
}

#[test]
fn include_path_uses_its_own_recursion_flag() {
    let (dir, _) = fixture();

    let shallow = CompileContext::builder()
        .base_dir(dir.path())
        .exclusive_include(true)
        .include(SearchPath::new(dir.join("sub"), false))
        .build()
        .unwrap();
    assert_eq!(discover(&shallow).unwrap(), vec![dir.join("sub/b.frag")]);

    let deep = CompileContext::builder()
        .base_dir(dir.path())
        .exclusive_include(true)
        .include(SearchPath::new(dir.join("sub"), true))
        .build()
        .unwrap();
    assert_eq!(
        sorted(discover(&deep).unwrap()),
        sorted(vec![dir.join("sub/b.frag"), dir.join("sub/deep/c.comp")])
    );
}

#[test]
fn include_results_are_appended_after_base() {
    let (dir, _) = fixture();
    let ctx = CompileContext::builder()
        .base_dir(dir.path())
        .include(SearchPath::new(dir.join("sub"), false))
        .build()
        .unwrap();

    assert_eq!(
        discover(&ctx).unwrap(),
        vec![dir.join("a.vert"), dir.join("sub/b.frag")]
    );
}

#[test]
fn overlapping_includes_may_duplicate() {
    let (dir, _) = fixture();
    let ctx = CompileContext::builder()
        .base_dir(dir.path())
        .include(SearchPath::new(dir.path(), false))
        .build()
        .unwrap();

    assert_eq!(
        discover(&ctx).unwrap(),
        vec![dir.join("a.vert"), dir.join("a.vert")]
    );
}

// ============================================================================
// Symlinks
// ============================================================================

#[cfg(unix)]
#[test]
fn symlinked_shader_is_discovered() {
    let dir = ScratchDir::new("discovery_symlink");
    let real = dir.shader("real/a.vert");
    let link = dir.join("linked.vert");
    std::os::unix::fs::symlink(&real, &link).unwrap();

    let ctx = CompileContext::builder().base_dir(dir.path()).build().unwrap();
    assert_eq!(discover(&ctx).unwrap(), vec![link]);
}

#[cfg(unix)]
#[test]
fn symlinked_directory_is_not_followed() {
    let dir = ScratchDir::new("discovery_symlink_dir");
    let real = dir.shader("real/a.vert");
    std::os::unix::fs::symlink(dir.join("real"), dir.join("alias")).unwrap();

    let ctx = CompileContext::builder()
        .base_dir(dir.path())
        .recursive(true)
        .build()
        .unwrap();
    assert_eq!(discover(&ctx).unwrap(), vec![real]);
}

#[cfg(unix)]
#[test]
fn dangling_symlink_is_skipped() {
    let dir = ScratchDir::new("discovery_dangling");
    let good = dir.shader("a.vert");
    std::os::unix::fs::symlink(dir.join("gone.vert"), dir.join("b.vert")).unwrap();

    let ctx = CompileContext::builder().base_dir(dir.path()).build().unwrap();
    assert_eq!(discover(&ctx).unwrap(), vec![good]);
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn missing_base_directory_is_fatal() {
    let dir = ScratchDir::new("discovery_missing");
    let ctx = CompileContext::builder()
        .base_dir(dir.join("does_not_exist"))
        .build()
        .unwrap();

    let err = discover(&ctx).unwrap_err();
    assert!(matches!(err, DiscoveryError::ReadDir { .. }));
}

#[test]
fn missing_include_directory_is_fatal() {
    let (dir, _) = fixture();
    let ctx = CompileContext::builder()
        .base_dir(dir.path())
        .include(SearchPath::new(dir.join("nope"), false))
        .build()
        .unwrap();

    assert!(discover(&ctx).is_err());
}

#[cfg(unix)]
#[test]
fn unreadable_file_does_not_stop_the_scan() {
    use std::os::unix::fs::PermissionsExt;

    let dir = ScratchDir::new("discovery_unreadable");
    let good = dir.shader("a.vert");
    let locked = dir.shader("b.vert");
    let after = dir.shader("c.vert");
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users can read it anyway; nothing to check then.
    if std::fs::read(&locked).is_ok() {
        return;
    }

    let ctx = CompileContext::builder().base_dir(dir.path()).build().unwrap();
    assert_eq!(discover(&ctx).unwrap(), vec![good, after]);
}
