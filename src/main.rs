//! `plugin-init`: creates a plugin from the repository's template directory.

use plugin_init::{
    cli::{get_args, Args},
    config::{Category, Layout},
    error::{default_error_handler, Result},
    logger::init_logger,
    report::print_summary,
    scaffold::{scaffold, Flavor},
};

fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Args) -> Result<()> {
    let category = Category::from_demo_flag(args.is_demo());
    if !args.extra.is_empty() {
        log::debug!("Ignoring extra arguments: {:?}", args.extra);
    }
    let layout = Layout::from_root(args.root);

    let report = scaffold(Flavor::Copier, &args.plugin_name, category, &layout)?;
    print_summary(&report);
    Ok(())
}
