//! Server startup integration tests.
//!
//! Tests that the video server can be built from configuration and reports
//! the right identity and capabilities, with or without an API key.

#[cfg(test)]
mod tests {
    use ark_mcp_common::Config;
    use ark_mcp_common::config::DEFAULT_BASE_URL;
    use rmcp::ServerHandler;
    use ark_mcp_video::VideoServer;
    use ark_mcp_video::server::SERVER_NAME;

    fn config_without_key() -> Config {
        Config::new(None, DEFAULT_BASE_URL)
    }

    fn config_with_key() -> Config {
        Config::new(Some("test-key".to_string()), DEFAULT_BASE_URL)
    }

    #[test]
    fn test_video_server_startup() {
        let server = VideoServer::new(config_with_key());
        let info = server.get_info();

        assert_eq!(info.server_info.name, SERVER_NAME);
        let instructions = info.instructions.as_ref().unwrap().to_lowercase();
        assert!(
            instructions.contains("video"),
            "Server instructions should mention 'video'"
        );
    }

    /// The credential is checked per call, so a missing key must not stop startup.
    #[test]
    fn test_video_server_starts_without_api_key() {
        let server = VideoServer::new(config_without_key());
        let info = server.get_info();

        assert!(info.instructions.is_some());
    }

    #[test]
    fn test_video_server_capabilities() {
        let info = VideoServer::new(config_with_key()).get_info();

        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_some());
    }

    #[test]
    fn test_server_is_cloneable_for_sessions() {
        let server = VideoServer::new(config_with_key());
        let clone = server.clone();
        assert_eq!(
            server.get_info().server_info.name,
            clone.get_info().server_info.name
        );
    }
}
