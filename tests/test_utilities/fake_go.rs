//! A throwaway Go "project" driven by a shell script standing in for `go`.
//!
//! The script ignores everything but its last argument and prints a canned
//! `go list -json` stream, so CLI tests run without a Go toolchain.

use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const ROOT_PACKAGE: &str = "example.com/app";

const MIT_TEXT: &str = "MIT License\n\nCopyright (c) 2024 Acme\n\n\
    Permission is hereby granted, free of charge, to any person obtaining a copy\n\
    of this software and associated documentation files (the \"Software\")";

const FAKE_GO: &str = r#"#!/bin/sh
for last; do :; done
case "$last" in
  ./missing)
    printf '%s\n' '{"ImportPath":"./missing","Error":{"Err":"directory missing is outside main module"}}'
    exit 1
    ;;
esac
cat "$(dirname "$0")/listing.json"
"#;

/// Expected CSV for `example.com/app` with default options
pub const EXPECTED_CSV: &str = "Parent,Package,License\n\
    example.com/app,github.com/acme/broken,Unresolved\n\
    example.com/app,github.com/acme/lib,MIT\n";

pub struct FakeGoProject {
    pub temp: TempDir,
}

impl FakeGoProject {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let work = temp.path().join("app");
        let lib = temp.path().join("modcache").join("lib@v1.2.0");
        let bin = temp.path().join("bin");
        for dir in [&work, &lib, &bin] {
            fs::create_dir_all(dir).unwrap();
        }
        fs::write(lib.join("LICENSE"), MIT_TEXT).unwrap();

        let listing = [
            json!({"ImportPath": "fmt", "Standard": true, "DepOnly": true}),
            json!({"ImportPath": "github.com/acme/broken", "DepOnly": true,
                   "Error": {"Err": "no required module provides package github.com/acme/broken"}}),
            json!({"ImportPath": "github.com/acme/lib", "Dir": lib, "DepOnly": true,
                   "Module": {"Path": "github.com/acme/lib", "Version": "v1.2.0", "Dir": lib},
                   "Imports": ["fmt"]}),
            json!({"ImportPath": ROOT_PACKAGE, "Dir": work,
                   "Module": {"Path": ROOT_PACKAGE, "Dir": work},
                   "Imports": ["fmt", "github.com/acme/broken", "github.com/acme/lib"]}),
        ];
        let stream: String = listing
            .iter()
            .map(|p| serde_json::to_string_pretty(p).unwrap() + "\n")
            .collect();
        fs::write(bin.join("listing.json"), stream).unwrap();

        let script = bin.join("go");
        fs::write(&script, FAKE_GO).unwrap();
        make_executable(&script);

        Self { temp }
    }

    pub fn work_dir(&self) -> PathBuf {
        self.temp.path().join("app")
    }

    pub fn go_binary(&self) -> PathBuf {
        self.temp.path().join("bin").join("go")
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) {}
