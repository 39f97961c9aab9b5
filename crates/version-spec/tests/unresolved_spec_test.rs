use semver::{Version, VersionReq};
use version_spec::{UnresolvedVersionSpec, VersionSpec};

mod unresolved_spec {
    use super::*;

    #[test]
    fn nightly() {
        assert_eq!(
            UnresolvedVersionSpec::parse("nightly").unwrap(),
            UnresolvedVersionSpec::Nightly
        );
        assert_eq!(
            UnresolvedVersionSpec::parse(" nightly ").unwrap(),
            UnresolvedVersionSpec::Nightly
        );
    }

    #[test]
    fn parses_version() {
        for req in ["1.2.3", "4.5.6", "1.4.0-rc1", "10.11.12+build"] {
            assert_eq!(
                UnresolvedVersionSpec::parse(req).unwrap(),
                UnresolvedVersionSpec::Version(Version::parse(req).unwrap())
            );
        }
    }

    #[test]
    fn version_with_v_becomes_exact_req() {
        assert_eq!(
            UnresolvedVersionSpec::parse("v1.2.3").unwrap(),
            UnresolvedVersionSpec::Req(VersionReq::parse("=1.2.3").unwrap())
        );
    }

    #[test]
    fn no_patch_becomes_req() {
        assert_eq!(
            UnresolvedVersionSpec::parse("1.2").unwrap(),
            UnresolvedVersionSpec::Req(VersionReq::parse("~1.2").unwrap())
        );
    }

    #[test]
    fn no_minor_becomes_req() {
        assert_eq!(
            UnresolvedVersionSpec::parse("1").unwrap(),
            UnresolvedVersionSpec::Req(VersionReq::parse("~1").unwrap())
        );
    }

    #[test]
    fn wildcards_become_req() {
        assert_eq!(
            UnresolvedVersionSpec::parse("1.2.*").unwrap(),
            UnresolvedVersionSpec::Req(VersionReq::parse("~1.2").unwrap())
        );
        assert_eq!(
            UnresolvedVersionSpec::parse("1.x").unwrap(),
            UnresolvedVersionSpec::Req(VersionReq::parse("~1").unwrap())
        );
        assert_eq!(
            UnresolvedVersionSpec::parse("*").unwrap(),
            UnresolvedVersionSpec::Req(VersionReq::STAR)
        );
        assert_eq!(
            UnresolvedVersionSpec::parse("x").unwrap(),
            UnresolvedVersionSpec::Req(VersionReq::STAR)
        );
        assert_eq!(
            UnresolvedVersionSpec::parse("X").unwrap(),
            UnresolvedVersionSpec::Req(VersionReq::STAR)
        );
    }

    #[test]
    fn parses_req() {
        for req in ["=1.2.3", "^1.2", "~1", ">1.2.0", "<1", ">1, <=1.5"] {
            assert_eq!(
                UnresolvedVersionSpec::parse(req).unwrap(),
                UnresolvedVersionSpec::Req(VersionReq::parse(req).unwrap())
            );
        }
    }

    #[test]
    fn parses_req_spaces() {
        assert_eq!(
            UnresolvedVersionSpec::parse("> 10").unwrap(),
            UnresolvedVersionSpec::Req(VersionReq::parse(">10").unwrap())
        );
        assert_eq!(
            UnresolvedVersionSpec::parse(">= 1.2 < 2").unwrap(),
            UnresolvedVersionSpec::Req(VersionReq::parse(">=1.2, <2").unwrap())
        );
    }

    #[test]
    fn parses_req_any() {
        assert_eq!(
            UnresolvedVersionSpec::parse("^1 || ~2 || =3").unwrap(),
            UnresolvedVersionSpec::ReqAny(vec![
                VersionReq::parse("^1").unwrap(),
                VersionReq::parse("~2").unwrap(),
                VersionReq::parse("=3").unwrap(),
            ])
        );
        assert_eq!(
            UnresolvedVersionSpec::parse("1.0 || 1.6").unwrap(),
            UnresolvedVersionSpec::ReqAny(vec![
                VersionReq::parse("~1.0").unwrap(),
                VersionReq::parse("~1.6").unwrap(),
            ])
        );
    }

    #[test]
    #[should_panic(expected = "InvalidConstraint")]
    fn errors_for_unknown_words() {
        UnresolvedVersionSpec::parse("stable").unwrap();
    }

    #[test]
    fn matches_versions() {
        let spec = UnresolvedVersionSpec::parse("1.3").unwrap();

        assert!(spec.matches(&Version::new(1, 3, 0)));
        assert!(spec.matches(&Version::new(1, 3, 1)));
        assert!(!spec.matches(&Version::new(1, 4, 0)));
        assert!(!spec.matches(&Version::new(1, 2, 9)));

        let spec = UnresolvedVersionSpec::parse("^1.0 || ^2.0").unwrap();

        assert!(spec.matches(&Version::new(1, 9, 0)));
        assert!(spec.matches(&Version::new(2, 1, 0)));
        assert!(!spec.matches(&Version::new(3, 0, 0)));

        assert!(!UnresolvedVersionSpec::Nightly.matches(&Version::new(1, 0, 0)));
    }

    #[test]
    fn converts_to_resolved() {
        assert_eq!(
            UnresolvedVersionSpec::Nightly.to_resolved_spec(),
            Some(VersionSpec::Nightly)
        );
        assert_eq!(
            UnresolvedVersionSpec::parse("1.6.7").unwrap().to_resolved_spec(),
            Some(VersionSpec::Version(Version::new(1, 6, 7)))
        );
        assert_eq!(
            UnresolvedVersionSpec::parse("^1.6").unwrap().to_resolved_spec(),
            None
        );
    }

    #[test]
    fn displays_any_req() {
        assert_eq!(
            UnresolvedVersionSpec::parse("^1 || ^2").unwrap().to_string(),
            "^1 || ^2"
        );
    }
}
