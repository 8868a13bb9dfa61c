use pmkit_core::config::{
    Config, DEFAULT_GROQ_MODEL, DEFAULT_GROQ_URL, DEFAULT_MAX_RESULTS, DEFAULT_MAX_STEPS,
};

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.llm.provider, "groq");
    assert_eq!(config.llm.model_or_default(), DEFAULT_GROQ_MODEL);
    assert_eq!(config.llm.base_url_or_default(), DEFAULT_GROQ_URL);
    assert_eq!(config.search.max_results, DEFAULT_MAX_RESULTS);
    assert_eq!(config.agent.max_steps, DEFAULT_MAX_STEPS);
}

#[test]
fn test_parse_full_config() {
    let toml_str = r#"
[llm]
provider = "openai"
model = "gpt-4o-mini"
base_url = "https://proxy.example.com/v1"
max_tokens = 2048
temperature = 0.3

[search]
base_url = "https://search.example.com"
max_results = 7

[agent]
max_steps = 12
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.llm.provider, "openai");
    assert_eq!(config.llm.max_tokens, 2048);
    assert_eq!(config.llm.temperature, 0.3);
    assert_eq!(config.search.base_url, "https://search.example.com");
    assert_eq!(config.search.max_results, 7);
    assert_eq!(config.agent.max_steps, 12);
}

#[test]
fn test_partial_config_falls_back_to_defaults() {
    let toml_str = r#"
[agent]
max_steps = 3
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.agent.max_steps, 3);
    assert_eq!(config.llm.provider, "groq");
    assert_eq!(config.search.max_results, DEFAULT_MAX_RESULTS);
}

#[test]
fn test_default_config_string_is_valid_toml() {
    let rendered = Config::default_config_string();
    let reparsed: Config = toml::from_str(&rendered).unwrap();
    assert_eq!(reparsed.llm.provider, "groq");
}
