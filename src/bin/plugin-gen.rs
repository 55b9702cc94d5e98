//! `plugin-gen`: creates a plugin from the templates built into the binary.

use plugin_init::{
    cli::{get_gen_args, GenArgs},
    config::{Category, Layout},
    error::{default_error_handler, Result},
    logger::init_logger,
    report::print_summary,
    scaffold::{scaffold, Flavor},
};

fn main() {
    let args = get_gen_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: GenArgs) -> Result<()> {
    let layout = Layout::from_root(args.root);
    let report = scaffold(Flavor::Generator, &args.plugin_name, Category::Plugin, &layout)?;
    print_summary(&report);
    Ok(())
}
