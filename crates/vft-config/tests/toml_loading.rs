//! TOML loading through figment::Jail.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use vft_config::{ConfigError, VftConfig};
use vft_core::{InitPolicy, Layout};

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[expansion]
annotation = "Exposed"
init_policy = "strict"
strip_annotation = false

[render]
layout = "compact"
indent_width = 2
"#,
        )?;

        let config: VftConfig = Figment::from(Serialized::defaults(VftConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.expansion.annotation, "Exposed");
        assert_eq!(config.expansion.init_policy, InitPolicy::Strict);
        assert!(!config.expansion.strip_annotation);
        assert_eq!(config.render.layout, Layout::Compact);
        assert_eq!(config.render.indent_width, 2);
        Ok(())
    });
}

#[test]
fn partial_section_keeps_other_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[render]\nindent_width = 8\n")?;

        let config: VftConfig = Figment::from(Serialized::defaults(VftConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.render.indent_width, 8);
        assert_eq!(config.render.layout, Layout::Expanded);
        assert_eq!(config.expansion.annotation, "VisibleForTesting");
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        std::fs::create_dir(jail.directory().join(".vft")).map_err(|e| e.to_string())?;
        jail.create_file(".vft/config.toml", "[expansion]\ninit_policy = \"strict\"\n")?;

        let config = VftConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.expansion.init_policy, InitPolicy::Strict);
        Ok(())
    });
}

#[test]
fn out_of_range_indent_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[render]\nindent_width = 0\n")?;

        let figment = Figment::from(Serialized::defaults(VftConfig::default()))
            .merge(Toml::file("config.toml"));
        let err = VftConfig::from_figment(&figment).expect_err("indent 0 is invalid");
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "render.indent_width"
        ));
        Ok(())
    });
}

#[test]
fn unknown_policy_fails_extraction() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[expansion]\ninit_policy = \"lenient\"\n")?;

        let figment = Figment::from(Serialized::defaults(VftConfig::default()))
            .merge(Toml::file("config.toml"));
        let err = VftConfig::from_figment(&figment).expect_err("unknown variant");
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
