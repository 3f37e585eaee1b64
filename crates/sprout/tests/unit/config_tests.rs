//! Tests for configuration loading
//!
//! Uses figment's `Jail` to isolate the filesystem and environment per test.

use sprout::{AppConfig, ConfigLoader};

#[test]
fn defaults_apply_without_any_source() {
    figment::Jail::expect_with(|_jail| {
        let config = ConfigLoader::new()
            .with_config_path("absent.toml")
            .load()
            .expect("defaults load");

        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json_format);
        assert!(config.properties.is_empty());
        Ok(())
    });
}

#[test]
fn toml_file_overrides_defaults() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "sprout.toml",
            r#"
                [logging]
                level = "debug"
                json_format = true

                [properties]
                "greeter.enabled" = "true"
                "greeter.name" = "world"
            "#,
        )?;

        let config = ConfigLoader::new()
            .with_config_path("sprout.toml")
            .load()
            .expect("toml loads");

        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json_format);
        assert_eq!(
            config.properties.get("greeter.enabled").map(String::as_str),
            Some("true")
        );
        assert_eq!(
            config.properties.get("greeter.name").map(String::as_str),
            Some("world")
        );
        Ok(())
    });
}

#[test]
fn environment_overrides_the_file() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "sprout.toml",
            r#"
                [logging]
                level = "debug"
            "#,
        )?;
        jail.set_env("SPROUT_LOGGING_LEVEL", "warn");

        let config = ConfigLoader::new()
            .with_config_path("sprout.toml")
            .load()
            .expect("merged config loads");

        assert_eq!(config.logging.level, "warn");
        Ok(())
    });
}

#[test]
fn custom_env_prefix_is_honored() {
    figment::Jail::expect_with(|jail| {
        jail.set_env("MYAPP_LOGGING_LEVEL", "error");

        let config = ConfigLoader::new()
            .with_config_path("absent.toml")
            .with_env_prefix("MYAPP")
            .load()
            .expect("config loads");

        assert_eq!(config.logging.level, "error");
        Ok(())
    });
}

#[test]
fn invalid_level_from_file_is_rejected() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "sprout.toml",
            r#"
                [logging]
                level = "shouting"
            "#,
        )?;

        let result = ConfigLoader::new().with_config_path("sprout.toml").load();
        assert!(result.is_err());
        Ok(())
    });
}

#[test]
fn save_and_reload_round_trip() {
    figment::Jail::expect_with(|_jail| {
        let config = AppConfig::default().with_property("feature.enabled", "true");

        let loader = ConfigLoader::new().with_config_path("saved.toml");
        loader.save_to_file(&config, "saved.toml").expect("save");

        let reloaded = loader.load().expect("reload");
        assert_eq!(
            reloaded.properties.get("feature.enabled").map(String::as_str),
            Some("true")
        );
        Ok(())
    });
}
