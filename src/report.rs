//! Human-readable summary printed after a successful run.

use crate::scaffold::{Flavor, Report};

/// Location of the new plugin relative to the repository root, e.g. `plugins/Chorus/`.
pub fn display_location(report: &Report) -> String {
    format!("{}/{}/", report.category.dir_name(), report.name)
}

/// Manual follow-up steps suggested to the user.
pub fn next_steps(report: &Report) -> Vec<String> {
    let name = &report.name;
    let root = report.category.dir_name();
    let mut steps = vec![format!("Add 'add_subdirectory({name})' to {root}/CMakeLists.txt")];
    match report.flavor {
        Flavor::Copier => {
            steps.push(format!("Customize the parameters in {name}/Params.h"));
            steps.push(format!("Implement your DSP logic in {name}/PluginProcessor.cpp"));
        }
        Flavor::Generator => {
            steps.push(format!("Implement your DSP logic in {name}/PluginProcessor.cpp"));
            steps.push(format!("Design the interface in {name}/PluginEditor.cpp"));
        }
    }
    steps
}

pub fn print_summary(report: &Report) {
    let location = display_location(report);
    println!("Creating plugin '{}' in '{}'...", report.name, location);
    for file in &report.created {
        println!("  ✓ Created {}", file.display());
    }
    for file in &report.skipped {
        println!("  - Skipped {} (not found in template)", file.display());
    }

    println!("\n✅ Plugin '{}' created successfully!", report.name);
    println!("📁 Location: {location}");
    println!("\nNext steps:");
    for (i, step) in next_steps(report).iter().enumerate() {
        println!("  {}. {step}", i + 1);
    }
}
