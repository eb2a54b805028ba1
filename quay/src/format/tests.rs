use super::*;

fn sample_tag() -> Tag {
    let mut tag = Tag::new("latest", 1617711789);
    tag.manifest_digest =
        Some("sha256:b5557b4f77e7382b3203b940aaa050286e8f201d13520c169fdd2cab5bc3b88a".to_string());
    tag.last_modified = Some("Tue, 06 Apr 2021 12:23:09 -0000".to_string());
    tag.size = Some(2 * 1024 * 1024);
    tag
}

#[test]
fn test_output_format_from_string() {
    assert_eq!(OutputFormat::from("pretty"), OutputFormat::Pretty);
    assert_eq!(OutputFormat::from("JSON"), OutputFormat::Json);
    assert_eq!(OutputFormat::from("yml"), OutputFormat::Yaml);
    assert_eq!(OutputFormat::from("invalid"), OutputFormat::Pretty);
}

#[test]
fn test_tag_row_from_full_tag() {
    let row = TagRow::from(&sample_tag());

    assert_eq!(row.name, "latest");
    assert_eq!(row.digest, "b5557b4f77e7");
    assert_eq!(row.size, "2 MiB");
    assert_eq!(row.modified, "2021-04-06 12:23:09 UTC");
    assert!(row.started.ends_with("ago"));
}

#[test]
fn test_tag_row_for_manifest_list() {
    let mut tag = Tag::new("multi", 0);
    tag.is_manifest_list = Some(true);
    let row = TagRow::from(&tag);

    assert_eq!(row.digest, "N/A");
    assert_eq!(row.size, "multi-arch");
    assert_eq!(row.modified, "N/A");
}

#[test]
fn test_render_pretty_has_headers_and_rows() {
    let output = render_tags(&[sample_tag()], OutputFormat::Pretty).unwrap();

    assert!(output.contains("TAG"));
    assert!(output.contains("DIGEST"));
    assert!(output.contains("latest"));
    assert!(output.contains("b5557b4f77e7"));
}

#[test]
fn test_render_json_is_tag_array() {
    let output = render_tags(&[sample_tag()], OutputFormat::Json).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert!(json.is_array());
    assert_eq!(json[0]["name"], "latest");
    assert_eq!(json[0]["start_ts"], 1617711789);
}

#[test]
fn test_render_yaml() {
    let output = render_tags(&[sample_tag()], OutputFormat::Yaml).unwrap();
    assert!(output.contains("name: latest"));
}
