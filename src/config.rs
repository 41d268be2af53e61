use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Command the copied title is piped into, e.g. "xclip -selection clipboard"
    #[serde(default)]
    pub clipboard_command: Option<String>,
    #[serde(default = "default_true")]
    pub poster_preview: bool,
    /// Terminal image protocol: auto, iterm2, kitty, sixel or halfblocks
    #[serde(default = "default_poster_protocol")]
    pub poster_protocol: String,
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_true() -> bool {
    true
}

fn default_poster_protocol() -> String {
    "auto".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            clipboard_command: None,
            poster_preview: true,
            poster_protocol: default_poster_protocol(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_yields_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.clipboard_command, None);
        assert!(config.poster_preview);
        assert_eq!(config.poster_protocol, "auto");
    }

    #[test]
    fn test_partial_document_keeps_other_defaults() {
        let yaml = "base_url: http://reel.example:8080\nposter_preview: false\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.base_url, "http://reel.example:8080");
        assert!(!config.poster_preview);
        assert_eq!(config.poster_protocol, "auto");
    }

    #[test]
    fn test_clipboard_command_parses() {
        let yaml = "clipboard_command: xclip -selection clipboard\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            config.clipboard_command.as_deref(),
            Some("xclip -selection clipboard")
        );
    }
}
