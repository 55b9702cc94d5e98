//! Common constants used throughout plugin-init.

/// Template directory, relative to the repository root
pub const TEMPLATE_DIR: [&str; 2] = ["plugins", "_Template"];

/// Output root for regular plugins
pub const PLUGINS_DIR: &str = "plugins";

/// Output root for demo plugins
pub const DEMOS_DIR: &str = "demos";

/// Files copied from the template directory, in processing order
pub const TEMPLATE_MANIFEST: [&str; 8] = [
    "CMakeLists.txt",
    "Params.h",
    "PluginProcessor.h",
    "PluginProcessor.cpp",
    "PluginEditor.h",
    "PluginEditor.cpp",
    "PluginLookAndFeel.h",
    "resources/CMakeLists.txt",
];
