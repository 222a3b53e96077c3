mod helpers;

use helpers::{data::*, harness::TestEnv};
use valuekit::loader::{LoadError, LoadOutcome};
use valuekit::runtime::ScriptError;

#[test]
fn second_load_is_a_noop() {
    let mut env = TestEnv::new();
    env.write("lib.vk", &noisy_unit("lib"));

    let first = env.runtime.load("lib.vk").unwrap();
    let second = env.runtime.load("./lib.vk").unwrap();

    assert_eq!(first, LoadOutcome::Loaded(env.canonical("lib.vk")));
    assert_eq!(second, LoadOutcome::AlreadyLoaded(env.canonical("lib.vk")));
    assert_eq!(env.stdout(), "ran lib\n");
    assert_eq!(env.runtime.namespace().len(), 1);
}

#[test]
fn shared_dependency_runs_once() {
    let mut env = TestEnv::new();
    env.write("shared.vk", &noisy_unit("shared"));
    env.write("a.vk", "load \"./shared.vk\"\nprint \"a\"\n");
    env.write("b.vk", "load \"shared\"\nprint \"b\"\n");
    let main = env.write("main.vk", "load \"a.vk\"\nload \"b.vk\"\n");

    env.run_file(&main).unwrap();

    assert_eq!(env.stdout(), "ran shared\na\nb\n");
}

#[test]
fn paths_resolve_against_the_loading_unit() {
    let mut env = TestEnv::new();
    env.write("nested/inner.vk", &noisy_unit("inner"));
    env.write("nested/outer.vk", "load \"./inner.vk\"\n");
    // same file name at the root must not be picked up
    env.write("inner.vk", "raise \"wrong unit\"\n");

    env.runtime.load("nested/outer.vk").unwrap();

    assert_eq!(env.stdout(), "ran inner\n");
    assert!(
        !env.runtime
            .loader()
            .is_loaded(&env.canonical("inner.vk"))
    );
}

#[test]
fn self_and_cyclic_loads_terminate() {
    let mut env = TestEnv::new();
    env.write("ping.vk", "print \"ping\"\nload \"pong.vk\"\nload \"ping.vk\"\n");
    env.write("pong.vk", "print \"pong\"\nload \"ping.vk\"\n");

    env.runtime.load("ping.vk").unwrap();

    assert_eq!(env.stdout(), "ping\npong\n");
}

#[test]
fn missing_unit_is_file_not_found() {
    let mut env = TestEnv::new();
    let main = env.write("main.vk", "print \"before\"\nload \"./nowhere.vk\"\n");

    let err = env.runtime.run_file(&main).unwrap_err();

    let ScriptError::Load(LoadError::Execution { source, .. }) = err else {
        panic!("expected the root unit to fail");
    };
    match *source {
        ScriptError::Load(LoadError::FileNotFound { path }) => {
            assert!(path.ends_with("nowhere.vk"));
        }
        other => panic!("expected FileNotFound, got {other:?}"),
    }
    assert_eq!(env.stdout(), "before\n");
}

#[test]
fn missing_root_is_file_not_found() {
    let mut env = TestEnv::new();

    let err = env.runtime.load("absent.vk").unwrap_err();

    assert!(matches!(err, LoadError::FileNotFound { .. }));
    assert!(env.runtime.loader().loaded_paths().is_empty());
}

#[test]
fn failing_unit_is_a_load_error_and_keeps_its_bindings() {
    let mut env = TestEnv::new();
    env.write("half.vk", "let early = 1\nraise \"midway\"\nlet late = 2\n");

    let err = env.runtime.load("half.vk").unwrap_err();

    match &err {
        LoadError::Execution { path, source } => {
            assert_eq!(path, &env.canonical("half.vk"));
            assert!(matches!(**source, ScriptError::Raised { .. }));
        }
        other => panic!("expected Execution, got {other:?}"),
    }
    assert!(env.runtime.namespace().contains("early"));
    assert!(!env.runtime.namespace().contains("late"));
    assert!(!env.runtime.loader().is_loaded(&env.canonical("half.vk")));
}

#[test]
fn unit_with_syntax_error_defines_nothing() {
    let mut env = TestEnv::new();
    env.write("broken.vk", "let fine = 1\nlet = 2\n");

    let err = env.runtime.load("broken.vk").unwrap_err();

    assert!(err.to_string().contains("broken.vk"));
    assert!(env.runtime.namespace().is_empty());
}

#[test]
fn quiet_unit_changes_no_output() {
    let mut env = TestEnv::new();
    env.write("test.vk", quiet_unit());
    env.runtime
        .run_source("print \"first\"\nload \"test.vk\"")
        .unwrap();

    assert_eq!(env.stdout(), "first\n");
}

#[test]
fn directory_does_not_shadow_unit() {
    let mut env = TestEnv::new();
    std::fs::create_dir_all(env.dir.join("lib")).unwrap();
    env.write("lib.vk", &noisy_unit("lib"));

    let outcome = env.runtime.load("lib").unwrap();

    assert_eq!(outcome, LoadOutcome::Loaded(env.canonical("lib.vk")));
    assert_eq!(env.stdout(), "ran lib\n");
}

#[test]
fn bare_directory_is_file_not_found() {
    let mut env = TestEnv::new();
    std::fs::create_dir_all(env.dir.join("only_dir")).unwrap();

    let err = env.runtime.load("only_dir").unwrap_err();

    assert!(matches!(err, LoadError::FileNotFound { .. }));
}

#[test]
fn unreadable_unit_is_io_error_and_not_loaded() {
    let mut env = TestEnv::new();
    let bad = env.dir.join("bad.vk");
    std::fs::write(&bad, [0xff, 0xfe, 0x00, 0x80]).unwrap();

    let err = env.runtime.load("bad.vk").unwrap_err();

    match &err {
        LoadError::Io { path, .. } => assert_eq!(path, &env.canonical("bad.vk")),
        other => panic!("expected Io, got {other:?}"),
    }
    assert!(!env.runtime.loader().is_loaded(&env.canonical("bad.vk")));
    assert!(env.runtime.loader().loaded_paths().is_empty());
}
