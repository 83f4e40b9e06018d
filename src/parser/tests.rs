use proptest::prelude::*;

use super::*;

const ARCH_TOKENS: [(&str, ProcessorArchitecture); 5] = [
    ("x64", ProcessorArchitecture::X64),
    ("x86", ProcessorArchitecture::X86),
    ("msil", ProcessorArchitecture::Msil),
    ("ia64", ProcessorArchitecture::IA64),
    ("neutral", ProcessorArchitecture::Neutral),
];

/// Generate a bare package id (no `=` and no `,`)
fn package_id_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9._-]{0,40}"
}

#[test]
fn test_parse_well_formed_name() {
    let raw = "Microsoft.VisualStudio.Debugger.Resources,version=17.3.32804.24,language=de-DE,\
               productarch=neutral,machinearch=x64";
    let info = parse_package_name(raw);

    assert_eq!(info.full_name(), raw);
    assert_eq!(info.name(), "Microsoft.VisualStudio.Debugger.Resources");
    assert_eq!(info.version(), Some(Version::new(17, 3, 32804, 24)));
    assert_eq!(info.language(), "de-DE");
    assert_eq!(info.machine_architecture(), ProcessorArchitecture::X64);
    assert_eq!(info.product_architecture(), ProcessorArchitecture::Neutral);
    assert!(info.unknown_parts().is_empty());
    assert!(!info.is_invalid());
}

#[test]
fn test_defaults_when_fragments_missing() {
    let info = parse_package_name("Win10SDK_10.0.19041,version=10.0.19041.8");

    assert_eq!(info.language(), "");
    assert_eq!(info.machine_architecture(), ProcessorArchitecture::Neutral);
    assert_eq!(info.product_architecture(), ProcessorArchitecture::Neutral);
    assert!(!info.is_invalid());
}

#[test]
fn test_blank_version_component_defaults_to_zero() {
    let info = parse_package_name("pkg,version=1..3");
    assert_eq!(info.version(), Some(Version::new(1, 0, 3, 0)));
    assert!(info.unknown_parts().is_empty());
}

#[test]
fn test_version_whitespace_is_trimmed() {
    let info = parse_package_name("pkg,version= 2 . 1");
    assert_eq!(info.version(), Some(Version::new(2, 1, 0, 0)));
}

#[test]
fn test_too_many_version_components_is_invalid() {
    let info = parse_package_name("pkg,version=1.2.3.4.5");

    assert_eq!(info.version(), None);
    assert_eq!(info.unknown_parts(), ["version=1.2.3.4.5"]);
    assert!(info.is_invalid());
}

#[test]
fn test_unreadable_versions_become_unknown() {
    let cases = vec![
        "version=",      // No value
        "version=abc",   // Not numeric
        "version=1=2",   // Two separators
        "version=1.x.3", // Non-numeric component
    ];

    for fragment in cases {
        let info = parse_package_name(&format!("pkg,{fragment}"));
        assert_eq!(info.version(), None, "{fragment}");
        assert_eq!(info.unknown_parts(), [fragment], "{fragment}");
        assert!(info.is_invalid(), "{fragment}");
    }
}

#[test]
fn test_language_takes_rest_of_fragment() {
    assert_eq!(parse_package_name("pkg,language=zh-Hant").language(), "zh-Hant");
    assert_eq!(parse_package_name("pkg,language=").language(), "");
    assert_eq!(parse_package_name("pkg,language=a=b").language(), "a=b");
}

#[test]
fn test_architecture_keys_and_tokens() {
    for key in ["chip=", "machinearch=", "productarch="] {
        for (token, expected) in ARCH_TOKENS {
            let raw = format!("pkg,version=1.0,{key}{}", token.to_uppercase());
            let info = parse_package_name(&raw);

            if key == "productarch=" {
                assert_eq!(info.product_architecture(), expected, "{raw}");
                assert_eq!(info.machine_architecture(), ProcessorArchitecture::Neutral);
            } else {
                assert_eq!(info.machine_architecture(), expected, "{raw}");
                assert_eq!(info.product_architecture(), ProcessorArchitecture::Neutral);
            }
            assert!(info.unknown_parts().is_empty(), "{raw}");
        }
    }
}

#[test]
fn test_unrecognized_architecture_token_is_neutral() {
    let info = parse_package_name("pkg,version=1.0,chip=x64,productarch=arm64");

    assert_eq!(info.machine_architecture(), ProcessorArchitecture::X64);
    assert_eq!(info.product_architecture(), ProcessorArchitecture::Neutral);
    assert!(info.unknown_parts().is_empty());
}

#[test]
fn test_malformed_architecture_fragments_are_unknown() {
    let cases = vec![
        "chip=",          // No value
        "chip=x64=x86",   // Two separators
        "Chip=x64",       // Keys are case-sensitive
        "targetarch=x64", // Not an architecture key
    ];

    for fragment in cases {
        let info = parse_package_name(&format!("pkg,version=1.0,{fragment}"));
        assert_eq!(info.machine_architecture(), ProcessorArchitecture::Neutral);
        assert_eq!(info.unknown_parts(), [fragment], "{fragment}");
        // An unknown fragment alone does not invalidate a package.
        assert!(!info.is_invalid(), "{fragment}");
    }
}

#[test]
fn test_last_bare_name_wins() {
    let info = parse_package_name("first,version=1.0,second");

    assert_eq!(info.name(), "second");
    assert!(info.unknown_parts().is_empty());
}

#[test]
fn test_empty_fragments_are_skipped() {
    let info = parse_package_name(",,pkg,,version=2.0,");

    assert_eq!(info.name(), "pkg");
    assert_eq!(info.version(), Some(Version::new(2, 0, 0, 0)));
    assert!(info.unknown_parts().is_empty());
}

#[test]
fn test_missing_name_is_invalid() {
    let info = parse_package_name("version=1.0,chip=x86");

    assert_eq!(info.name(), "");
    assert!(info.is_invalid());
}

#[test]
fn test_empty_input() {
    let info = parse_package_name("");

    assert_eq!(info.full_name(), "");
    assert!(info.unknown_parts().is_empty());
    assert!(info.is_invalid());
}

#[test]
fn test_unknown_parts_keep_input_order() {
    let info = parse_package_name("pkg,foo=1,version=1.0,bar=2,baz=3");
    assert_eq!(info.unknown_parts(), ["foo=1", "bar=2", "baz=3"]);
}

#[test]
fn test_classify_priority() {
    assert_eq!(classify("pkg"), Fragment::Name("pkg"));
    assert_eq!(
        classify("version=4.8"),
        Fragment::Version(Version::new(4, 8, 0, 0))
    );
    assert_eq!(classify("language=en-US"), Fragment::Language("en-US"));
    assert_eq!(
        classify("chip=msil"),
        Fragment::MachineArchitecture(ProcessorArchitecture::Msil)
    );
    assert_eq!(
        classify("machinearch=ia64"),
        Fragment::MachineArchitecture(ProcessorArchitecture::IA64)
    );
    assert_eq!(
        classify("productarch=x86"),
        Fragment::ProductArchitecture(ProcessorArchitecture::X86)
    );
    assert_eq!(classify("version=oops"), Fragment::Unknown("version=oops"));
    assert_eq!(classify("vendor=contoso"), Fragment::Unknown("vendor=contoso"));
}

#[test]
fn test_parse_package_names_preserves_order() {
    let infos = parse_package_names(["b,version=1.0", "a,version=2.0"]);
    let names: Vec<&str> = infos.iter().map(PackageInfo::name).collect();
    assert_eq!(names, ["b", "a"]);
}

proptest! {
    #[test]
    fn test_fragment_without_separator_is_name(id in package_id_strategy()) {
        let info = parse_package_name(&id);

        prop_assert_eq!(info.name(), id.as_str());
        prop_assert_eq!(info.version(), None);
        prop_assert!(info.is_invalid());
    }

    #[test]
    fn test_dotted_versions_parse_with_zero_padding(
        components in prop::collection::vec(0u32..100_000, 1..=4),
    ) {
        let dotted = components
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(".");
        let info = parse_package_name(&format!("pkg,version={dotted}"));

        let mut padded = [0u32; 4];
        padded[..components.len()].copy_from_slice(&components);
        let expected = Version::new(padded[0], padded[1], padded[2], padded[3]);

        prop_assert_eq!(info.version(), Some(expected));
        prop_assert!(!info.is_invalid());
    }

    #[test]
    fn test_parse_never_panics_and_keeps_full_name(raw in "[a-z=,. 0-9]{0,60}") {
        let info = parse_package_name(&raw);
        prop_assert_eq!(info.full_name(), raw.as_str());
    }
}
