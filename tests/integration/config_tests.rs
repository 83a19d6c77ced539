//! Configuration files shipped with the repository

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::io::Write;
    use std::path::PathBuf;
    use storefront_ai::core::matcher::{Catalog, ProductCategory};
    use storefront_ai::core::providers::ProviderId;
    use storefront_ai::{Config, Storefront};
    use tempfile::NamedTempFile;

    fn repo_file(relative: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
    }

    #[tokio::test]
    async fn test_example_config_is_valid() {
        let config = Config::from_file(repo_file("config/storefront.example.yaml"))
            .await
            .unwrap();

        assert_eq!(config.server().port, 3001);
        assert_eq!(config.routing().policy.primary, ProviderId::OpenAi);
        assert_eq!(
            config.routing().policy.fallback_chain,
            vec![ProviderId::Gemini, ProviderId::ClientSide]
        );
        assert!(config.providers().openai.settings.api_key.is_none());
        assert_eq!(config.storefront.catalog_path, "config/catalog.json");
    }

    #[test]
    fn test_shipped_catalog_covers_every_category() {
        let catalog = Catalog::from_file(repo_file("config/catalog.json")).unwrap();
        assert_eq!(catalog.len(), 10);

        let categories: HashSet<ProductCategory> =
            catalog.items().iter().map(|item| item.category).collect();
        for category in ProductCategory::ALL {
            assert!(categories.contains(&category), "missing {}", category.name());
        }

        let ids: HashSet<&str> = catalog.items().iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len(), "duplicate item ids");
    }

    #[test]
    fn test_storefront_from_custom_catalog() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "drone", "name": "Courier Drone", "category": "Robotics", "price": 450.0}}]"#
        )
        .unwrap();

        let mut config = Config::default();
        config.storefront.catalog_path = file.path().to_string_lossy().into_owned();
        config.storefront.providers.client_side.enabled = false;

        let storefront = Storefront::new(config).unwrap();
        let catalog = storefront.assistant().catalog();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("drone").unwrap().stock, 0);
        assert_eq!(
            storefront.router().registry().ids(),
            vec![ProviderId::OpenAi, ProviderId::Gemini]
        );
    }

    #[test]
    fn test_malformed_catalog_fails_startup() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": "x", "category": "Time Travel"}}]"#).unwrap();

        let mut config = Config::default();
        config.storefront.catalog_path = file.path().to_string_lossy().into_owned();
        assert!(Storefront::new(config).is_err());
    }
}
