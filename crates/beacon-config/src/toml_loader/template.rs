//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Beacon Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[presence]
# enabled = true
# client_id = 565573138146918421
# publish_interval_ms = 3000     # 1000-60000
# handshake_timeout_secs = 10    # 1-60
# app_name = "Beacon Browser"

[notifications]
# enabled = true
# sender_id = "424242424242"
# forward_clicks = true
# app_name = "Beacon Browser"

[logging]
# level = "INFO"         # DEBUG, INFO, WARNING, ERROR
# file_logging = false
# keep_days = 7          # 1-90
"##
    .to_string()
}
