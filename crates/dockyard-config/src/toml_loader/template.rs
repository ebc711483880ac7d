//! Default TOML config template with inline documentation comments.

pub(crate) fn default_config_toml() -> &'static str {
    r##"# Dockyard configuration
# Only override what you want to change -- missing fields use defaults.

[panel]
# tabs_movable = true
# tabs_constrained = false
# add_button_enabled = false
# panel_id = "docker-main"

[markers]
# Class names the panel engine puts on its tab strips.
# tab = "lm-TabBar-tab"
# tab_bar = "lm-TabBar"
# tab_bar_content = "lm-TabBar-content"
# toolbar = "lm-TabBar-toolbar"

[events]
# capacity = 64          # 1-4096

[logging]
# filter = "dockyard=info"
"##
}
