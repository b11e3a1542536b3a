use super::*;

#[test]
fn defaults_match_built_in_tools() {
    let config = Config::default();
    assert_eq!(config.tools.checker.name, "axe-core");
    assert_eq!(config.tools.checker.version.as_deref(), Some("4.8.4"));
    assert_eq!(config.tools.host.name, "vibium-go");
    assert_eq!(config.evaluation.methods, vec!["Automated testing"]);
    assert!(config.validate().is_ok());
}

#[test]
fn empty_toml_yields_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn parses_all_sections() {
    let config: Config = toml::from_str(
        r#"
[product]
name = "Acme Portal"
version = "3.1"
vendor = "Acme Corp"

[evaluation]
evaluator = "QA Team"
methods = ["Automated testing", "Screen reader review"]

[tools.checker]
name = "axe-core"
version = "4.9.0"

[output]
format = "html"
"#,
    )
    .unwrap();

    assert_eq!(config.product.name.as_deref(), Some("Acme Portal"));
    assert_eq!(config.product.vendor.as_deref(), Some("Acme Corp"));
    assert_eq!(config.evaluation.evaluator.as_deref(), Some("QA Team"));
    assert_eq!(config.evaluation.methods.len(), 2);
    assert_eq!(config.tools.checker.version.as_deref(), Some("4.9.0"));
    assert_eq!(config.tools.host.name, "vibium-go");
    assert_eq!(config.output_format().unwrap(), OutputFormat::Html);
}

#[test]
fn validate_rejects_empty_tool_name() {
    let mut config = Config::default();
    config.tools.host.name = "  ".to_string();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("tools.host.name"));
    assert_eq!(err.error_type(), "Config");
}

#[test]
fn validate_rejects_empty_methods() {
    let mut config = Config::default();
    config.evaluation.methods.clear();
    assert!(config.validate().is_err());

    config.evaluation.methods = vec!["Automated testing".to_string(), String::new()];
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("evaluation.methods[1]"));
}

#[test]
fn validate_rejects_unknown_output_format() {
    let mut config = Config::default();
    config.output.format = Some("pdf".to_string());
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("Unknown output format: pdf"));
}

#[test]
fn output_format_defaults_to_markdown() {
    assert_eq!(
        Config::default().output_format().unwrap(),
        OutputFormat::Markdown
    );
}

#[test]
fn product_info_fills_default_name() {
    let config = Config::default();
    assert_eq!(config.product_info().name, DEFAULT_PRODUCT_NAME);

    let mut config = Config::default();
    config.product.name = Some("Acme".to_string());
    config.product.url = Some("https://acme.test".to_string());
    let product = config.product_info();
    assert_eq!(product.name, "Acme");
    assert_eq!(product.url.as_deref(), Some("https://acme.test"));
}

#[test]
fn product_info_replaces_blank_name() {
    let mut config = Config::default();
    config.product.name = Some("   ".to_string());
    assert_eq!(config.product_info().name, DEFAULT_PRODUCT_NAME);
}

#[test]
fn tool_infos_in_checker_host_order() {
    let labels: Vec<_> = Config::default()
        .tool_infos()
        .iter()
        .map(ToolInfo::label)
        .collect();
    assert_eq!(labels, vec!["axe-core 4.8.4", "vibium-go 0.2.0"]);
}
