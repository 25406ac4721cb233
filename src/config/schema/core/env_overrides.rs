use super::Config;

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(key) =
            std::env::var("REFERENT_API_KEY").or_else(|_| std::env::var("OPENROUTER_API_KEY"))
            && !key.trim().is_empty()
        {
            self.api_key = Some(key);
        }

        if let Ok(base_url) = std::env::var("REFERENT_BASE_URL")
            && !base_url.is_empty()
        {
            self.llm.base_url = base_url;
        }

        if let Ok(app_url) =
            std::env::var("REFERENT_APP_URL").or_else(|_| std::env::var("NEXT_PUBLIC_APP_URL"))
            && !app_url.is_empty()
        {
            self.llm.app_url = app_url;
        }

        if let Ok(port_str) =
            std::env::var("REFERENT_GATEWAY_PORT").or_else(|_| std::env::var("PORT"))
            && let Ok(port) = port_str.parse::<u16>()
        {
            self.gateway.port = port;
        }

        if let Ok(host) = std::env::var("REFERENT_GATEWAY_HOST")
            && !host.is_empty()
        {
            self.gateway.host = host;
        }

        if let Ok(temp_str) = std::env::var("REFERENT_TEMPERATURE")
            && let Ok(temp) = temp_str.parse::<f64>()
            && (0.0..=2.0).contains(&temp)
        {
            self.llm.temperature = temp;
        }

        if let Ok(dev) = std::env::var("REFERENT_DEV")
            && matches!(dev.trim().to_lowercase().as_str(), "1" | "true")
        {
            self.gateway.expose_error_details = true;
        }
    }
}
