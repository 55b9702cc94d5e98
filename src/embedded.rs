//! Templates compiled into the binary, used by `plugin-gen`.
//!
//! Each entry pairs the output file name with MiniJinja source. The context is
//! a [`PluginContext`](crate::naming::PluginContext).

pub const EMBEDDED_TEMPLATES: [(&str, &str); 6] = [
    ("CMakeLists.txt", include_str!("embedded/CMakeLists.txt.j2")),
    ("PluginProcessor.h", include_str!("embedded/PluginProcessor.h.j2")),
    ("PluginProcessor.cpp", include_str!("embedded/PluginProcessor.cpp.j2")),
    ("PluginEditor.h", include_str!("embedded/PluginEditor.h.j2")),
    ("PluginEditor.cpp", include_str!("embedded/PluginEditor.cpp.j2")),
    ("README.md", include_str!("embedded/README.md.j2")),
];
