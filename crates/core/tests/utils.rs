#![allow(dead_code)]

use flate2::Compression;
use flate2::write::GzEncoder;
use julia_setup_core::VersionCatalog;
use starbase_sandbox::Sandbox;
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::Path;
use std::thread;

pub const CATALOG_JSON: &str = r#"{
    "v1.2.0": {
        "files": [
            {
                "os": "linux",
                "arch": "x86_64",
                "url": "https://julialang-s3.julialang.org/bin/linux/x64/1.2/julia-1.2.0-linux-x86_64.tar.gz",
                "triplet": "x86_64-linux-gnu",
                "kind": "archive",
                "sha256": "926ced5dec5d726ed0d2919e849ff084a320882fb67ab048385849f9483afc47",
                "size": 95626780,
                "version": "1.2.0",
                "extension": "tar.gz"
            },
            {
                "os": "winnt",
                "arch": "x86_64",
                "url": "https://julialang-s3.julialang.org/bin/winnt/x64/1.2/julia-1.2.0-win64.exe"
            }
        ],
        "stable": true
    },
    "1.3.1": {
        "files": [
            {
                "os": "mac",
                "arch": "x86_64",
                "url": "https://julialang-s3.julialang.org/bin/mac/x64/1.3/julia-1.3.1-mac64.dmg"
            },
            {
                "os": "linux",
                "arch": "x86_64",
                "url": "https://julialang-s3.julialang.org/bin/linux/x64/1.3/julia-1.3.1-linux-x86_64.tar.gz"
            },
            {
                "os": "linux",
                "arch": "x86_64",
                "url": "https://julialang-s3.julialang.org/bin/musl/x64/1.3/julia-1.3.1-musl-x86_64.tar.gz"
            },
            {
                "os": "linux",
                "arch": "aarch64",
                "url": "https://julialang-s3.julialang.org/bin/linux/aarch64/1.3/julia-1.3.1-linux-aarch64.tar.gz"
            }
        ],
        "stable": true
    },
    "v1.3.0": {
        "files": [
            {
                "os": "linux",
                "arch": "x86_64",
                "url": "https://julialang-s3.julialang.org/bin/linux/x64/1.3/julia-1.3.0-linux-x86_64.tar.gz"
            }
        ],
        "stable": true
    },
    "1.4.0-rc1": {
        "files": [
            {
                "os": "linux",
                "arch": "x86_64",
                "url": "https://julialang-s3.julialang.org/bin/linux/x64/1.4/julia-1.4.0-rc1-linux-x86_64.tar.gz"
            }
        ],
        "stable": false
    }
}"#;

pub fn create_catalog() -> VersionCatalog {
    VersionCatalog::from_json(CATALOG_JSON).unwrap()
}

pub fn seed_catalog_cache(sandbox: &Sandbox, content: &str) {
    sandbox.create_file(
        ".julia-setup/cache/julia-versions/latest/versions.json",
        content,
    );
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

/// Serve the body over HTTP on a local port for the given number of
/// requests, then stop listening. Returns the base URL.
pub fn serve_http(status: u16, body: Vec<u8>, requests: usize) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());

    thread::spawn(move || {
        for stream in listener.incoming().take(requests) {
            let mut stream = stream.unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut line = String::new();

            // Drain the request head
            while reader.read_line(&mut line).unwrap() > 0 && line != "\r\n" {
                line.clear();
            }

            write!(
                stream,
                "HTTP/1.1 {status} Status\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            )
            .unwrap();
            stream.write_all(&body).unwrap();
            stream.flush().unwrap();
        }
    });

    url
}
