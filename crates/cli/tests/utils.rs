#![allow(dead_code)]

use flate2::Compression;
use flate2::write::GzEncoder;
use starbase_sandbox::{Sandbox, assert_cmd};
use std::fs;
use std::path::Path;

pub use starbase_sandbox::create_empty_sandbox;

// Unroutable, so a missing cache fails instead of reaching the network
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:9/versions.json";

pub const CATALOG_JSON: &str = r#"{
    "1.3.1": {
        "files": [
            { "os": "linux", "arch": "x86_64", "url": "https://julialang-s3.julialang.org/bin/linux/x64/1.3/julia-1.3.1-linux-x86_64.tar.gz" },
            { "os": "linux", "arch": "aarch64", "url": "https://julialang-s3.julialang.org/bin/linux/aarch64/1.3/julia-1.3.1-linux-aarch64.tar.gz" },
            { "os": "winnt", "arch": "x86_64", "url": "https://julialang-s3.julialang.org/bin/winnt/x64/1.3/julia-1.3.1-win64.exe" },
            { "os": "mac", "arch": "x86_64", "url": "https://julialang-s3.julialang.org/bin/mac/x64/1.3/julia-1.3.1-mac64.dmg" }
        ],
        "stable": true
    },
    "v1.3.0": {
        "files": [
            { "os": "linux", "arch": "x86_64", "url": "https://julialang-s3.julialang.org/bin/linux/x64/1.3/julia-1.3.0-linux-x86_64.tar.gz" },
            { "os": "winnt", "arch": "x86_64", "url": "https://julialang-s3.julialang.org/bin/winnt/x64/1.3/julia-1.3.0-win64.exe" },
            { "os": "mac", "arch": "x86_64", "url": "https://julialang-s3.julialang.org/bin/mac/x64/1.3/julia-1.3.0-mac64.dmg" }
        ],
        "stable": true
    },
    "1.4.0-rc1": {
        "files": [
            { "os": "linux", "arch": "x86_64", "url": "https://julialang-s3.julialang.org/bin/linux/x64/1.4/julia-1.4.0-rc1-linux-x86_64.tar.gz" }
        ],
        "stable": false
    }
}"#;

pub fn create_sandbox_with_catalog() -> Sandbox {
    let sandbox = create_empty_sandbox();
    sandbox.create_file(
        ".julia-setup/cache/julia-versions/latest/versions.json",
        CATALOG_JSON,
    );
    sandbox
}

pub fn create_julia_setup_command<T: AsRef<Path>>(path: T) -> assert_cmd::Command {
    let path = path.as_ref();

    let mut cmd = assert_cmd::Command::cargo_bin("julia-setup").unwrap();
    cmd.current_dir(path);
    cmd.timeout(std::time::Duration::from_secs(90));
    cmd.env("JULIA_SETUP_HOME", path.join(".julia-setup"));
    cmd.env("JULIA_SETUP_LOG", "trace");
    cmd.env("JULIA_SETUP_VERSIONS_URL", UNREACHABLE_URL);
    cmd.env("JULIA_SETUP_NIGHTLY_URL", "https://nightlies.test/bin");
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("JULIA_SETUP_VERSION");
    cmd.env_remove("JULIA_SETUP_ARCH");
    cmd.env_remove("JULIA_SETUP_INSTALL_DIR");
    cmd.env_remove("GITHUB_PATH");
    cmd
}

pub fn output_to_string(data: &[u8]) -> String {
    String::from_utf8(data.to_vec()).unwrap_or_default()
}

/// Write a `.tar.gz` where every file is nested under a top-level directory.
pub fn create_tarball(path: &Path, top_dir: &str, files: &[(&str, &str)]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();

    let encoder = GzEncoder::new(fs::File::create(path).unwrap(), Compression::default());
    let mut builder = tar::Builder::new(encoder);

    for (name, content) in files {
        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o755);
        header.set_cksum();

        builder
            .append_data(&mut header, format!("{top_dir}/{name}"), content.as_bytes())
            .unwrap();
    }

    builder.into_inner().unwrap().finish().unwrap();
}
