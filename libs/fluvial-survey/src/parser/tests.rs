use super::*;

fn parse(description: &str) -> ShotMeaning {
    DescriptionParser::new(&Keywords::default()).parse(description)
}

#[test]
fn test_cross_section_with_tags_and_comment() {
    let meaning = parse("xs2ri-bkf-thw_left pin");
    assert_eq!(meaning.kind, Some(ShotKind::CrossSection));
    assert_eq!(meaning.name, "xs2ri");
    assert_eq!(meaning.tags, vec![FeatureTag::Bankfull, FeatureTag::Thalweg]);
    assert_eq!(meaning.comment.as_deref(), Some("left pin"));
    assert!(meaning.has_tag(FeatureTag::Thalweg));
    assert!(!meaning.has_tag(FeatureTag::WaterSurface));
}

#[test]
fn test_profile_shot() {
    let meaning = parse("pro1-ri");
    assert_eq!(meaning.kind, Some(ShotKind::Profile));
    assert_eq!(meaning.name, "pro1");
    assert_eq!(meaning.tags, vec![FeatureTag::Riffle]);
    assert_eq!(meaning.comment, None);
}

#[test]
fn test_name_is_not_a_descriptor() {
    let meaning = parse("xs1");
    assert_eq!(meaning.kind, Some(ShotKind::CrossSection));
    assert!(meaning.tags.is_empty());
}

#[test]
fn test_unrecognized_name() {
    let meaning = parse("fence-gate");
    assert_eq!(meaning.kind, None);
    assert_eq!(meaning.name, "fence");
    assert!(meaning.tags.is_empty());
}

#[test]
fn test_comment_hides_descriptors() {
    let meaning = parse("xs1_bkf maybe");
    assert!(meaning.tags.is_empty());
    assert_eq!(meaning.comment.as_deref(), Some("bkf maybe"));
}

#[test]
fn test_repeated_descriptor_tags_once() {
    let meaning = parse("xs1-ws-ws");
    assert_eq!(meaning.tags, vec![FeatureTag::WaterSurface]);
}

#[test]
fn test_custom_keywords() {
    let keywords = Keywords {
        cross_section: "XS".to_string(),
        bankfull: Some("BF".to_string()),
        break_char: '/',
        ..Default::default()
    };
    let meaning = DescriptionParser::new(&keywords).parse("XS4/BF");
    assert_eq!(meaning.kind, Some(ShotKind::CrossSection));
    assert_eq!(meaning.tags, vec![FeatureTag::Bankfull]);
}

#[test]
fn test_empty_description() {
    let meaning = parse("");
    assert_eq!(meaning.kind, None);
    assert_eq!(meaning.name, "");
}
