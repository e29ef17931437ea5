use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use indoc::indoc;

use crate::Error;
use crate::emit::Config;
use crate::output::{MemorySink, OutputSink, generate, generate_into};
use crate::test_utils::api;

const API: &str = indoc! {r#"
    {
        "types": [ { "name": "Object" } ],
        "modules": [
            {
                "name": "audio",
                "functions": [
                    {
                        "name": "play",
                        "variants": [ { "arguments": [ { "type": "Object", "name": "source" } ] } ]
                    }
                ]
            }
        ]
    }
"#};

/// Sink that fails every write after the first.
#[derive(Default)]
struct FailingSink {
    writes: usize,
}

impl OutputSink for FailingSink {
    fn create_dir(&mut self, _path: &Path) -> io::Result<()> {
        Ok(())
    }

    fn write_file(&mut self, _path: &Path, _contents: &str) -> io::Result<()> {
        self.writes += 1;
        if self.writes > 1 {
            return Err(io::Error::other("disk full"));
        }
        Ok(())
    }
}

#[test]
fn writes_one_file_per_module() {
    let mut sink = MemorySink::default();

    let written =
        generate_into(&api(API), Path::new("out"), &Config::default(), &mut sink).unwrap();

    assert_eq!(
        written,
        [PathBuf::from("out/love.lua"), PathBuf::from("out/love.audio.lua")]
    );
    assert_eq!(sink.dirs, [PathBuf::from("out")]);
    assert!(
        sink.files[Path::new("out/love.audio.lua")]
            .contains("function love.audio.play(source) end")
    );
}

#[test]
fn malformed_input_writes_nothing() {
    let input = r#"{ "functions": [ { "name": "broken" } ] }"#;
    let mut sink = MemorySink::default();

    let err = generate_into(&api(input), Path::new("out"), &Config::default(), &mut sink)
        .unwrap_err();

    assert!(matches!(err, Error::MissingVariants { .. }));
    assert!(sink.dirs.is_empty());
    assert!(sink.files.is_empty());
}

#[test]
fn write_failure_aborts_run() {
    let mut sink = FailingSink::default();

    let err = generate_into(&api(API), Path::new("out"), &Config::default(), &mut sink)
        .unwrap_err();

    assert!(matches!(
        err,
        Error::WriteFile { ref path, .. } if path == Path::new("out/love.audio.lua")
    ));
    assert_eq!(sink.writes, 2);
}

#[test]
fn filesystem_output_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested").join("library");
    let api = api(API);

    generate(&api, &out, &Config::default()).unwrap();
    let first = fs::read(out.join("love.audio.lua")).unwrap();

    // Rerun over an existing directory overwrites in place.
    fs::write(out.join("love.audio.lua"), "stale").unwrap();
    generate(&api, &out, &Config::default()).unwrap();
    let second = fs::read(out.join("love.audio.lua")).unwrap();

    assert_eq!(first, second);
    assert!(out.join("love.lua").is_file());
}

#[test]
fn unwritable_root_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("file");
    fs::write(&blocker, "not a directory").unwrap();

    let err = generate(&api(API), &blocker.join("out"), &Config::default()).unwrap_err();

    assert!(matches!(err, Error::CreateDir { .. }));
}
