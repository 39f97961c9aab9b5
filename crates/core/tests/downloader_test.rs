mod utils;

use julia_setup_core::SetupEnvironment;
use julia_setup_core::downloader::{download, get_download_path};
use julia_setup_core::helpers::extract_filename_from_url;
use starbase_sandbox::create_empty_sandbox;
use std::fs;
use utils::*;
use version_spec::VersionSpec;

mod downloader {
    use super::*;

    #[test]
    fn extracts_file_names() {
        assert_eq!(
            extract_filename_from_url(
                "https://julialang-s3.julialang.org/bin/linux/x64/1.9/julia-1.9.4-linux-x86_64.tar.gz"
            ),
            "julia-1.9.4-linux-x86_64.tar.gz"
        );
        assert_eq!(
            extract_filename_from_url("https://host/bin/julia-latest-win64.exe?token=abc#frag"),
            "julia-latest-win64.exe"
        );
    }

    #[test]
    fn prefixes_download_path_with_version() {
        let sandbox = create_empty_sandbox();
        let env = SetupEnvironment::new_testing(sandbox.path());

        assert_eq!(
            get_download_path(
                &env,
                &VersionSpec::parse("1.9.4").unwrap(),
                "https://host/bin/julia-1.9.4-linux-x86_64.tar.gz"
            ),
            sandbox
                .path()
                .join(".julia-setup/temp/1.9.4-julia-1.9.4-linux-x86_64.tar.gz")
        );
        assert_eq!(
            get_download_path(
                &env,
                &VersionSpec::Nightly,
                "https://host/bin/julia-latest-mac64.dmg"
            ),
            sandbox
                .path()
                .join(".julia-setup/temp/nightly-julia-latest-mac64.dmg")
        );
    }

    #[tokio::test]
    async fn reuses_existing_download() {
        let sandbox = create_empty_sandbox();
        sandbox.create_file("temp/julia.tar.gz", "cached");

        let file = sandbox.path().join("temp/julia.tar.gz");
        let downloaded = download("http://127.0.0.1:9/julia.tar.gz", &file)
            .await
            .unwrap();

        assert!(!downloaded);
        assert_eq!(fs::read_to_string(file).unwrap(), "cached");
    }

    #[tokio::test]
    async fn downloads_to_file() {
        let sandbox = create_empty_sandbox();
        let url = serve_http(200, b"julia".to_vec(), 1);
        let file = sandbox.path().join("temp/julia.tar.gz");

        let downloaded = download(&format!("{url}/julia.tar.gz"), &file)
            .await
            .unwrap();

        assert!(downloaded);
        assert_eq!(fs::read_to_string(&file).unwrap(), "julia");
        assert!(!file.with_extension("part").exists());
    }

    #[tokio::test]
    #[should_panic(expected = "DownloadNotFound")]
    async fn errors_when_not_found() {
        let sandbox = create_empty_sandbox();
        let url = serve_http(404, vec![], 1);
        let file = sandbox.path().join("temp/julia.tar.gz");

        let result = download(&format!("{url}/julia.tar.gz"), &file).await;

        assert!(!file.exists());

        result.unwrap();
    }

    #[tokio::test]
    #[should_panic(expected = "DownloadFailed")]
    async fn errors_for_server_failure() {
        let sandbox = create_empty_sandbox();
        let url = serve_http(500, vec![], 1);

        download(
            &format!("{url}/julia.tar.gz"),
            &sandbox.path().join("temp/julia.tar.gz"),
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    #[should_panic(expected = "Http")]
    async fn errors_when_unreachable() {
        let sandbox = create_empty_sandbox();

        download(
            "http://127.0.0.1:9/julia.tar.gz",
            &sandbox.path().join("temp/julia.tar.gz"),
        )
        .await
        .unwrap();
    }
}
