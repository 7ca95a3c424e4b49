use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use mkrootfs::preflight::check_required_tools;
use mkrootfs::{
    AlpineBuilder, ArchBuilder, BuildConfig, CleanOutcome, HttpFetcher, RootfsBuilder, Workspace,
};

fn usage() -> &'static str {
    "Usage:\n  mkrootfs arch [root-dir]\n  mkrootfs alpine [root-dir]\n  mkrootfs clean [root-dir]"
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    run(&args)
}

fn run(args: &[String]) -> Result<()> {
    match args {
        [mode] => dispatch(mode, None),
        [mode, root_dir] => dispatch(mode, Some(root_dir)),
        _ => bail!(usage()),
    }
}

fn dispatch(mode: &str, root_dir: Option<&String>) -> Result<()> {
    let root_dir = match root_dir {
        Some(dir) => PathBuf::from(dir),
        None => std::env::current_dir().context("resolving current directory")?,
    };
    let config = BuildConfig::load(&root_dir)?;
    let workspace = Workspace::new(config.workspace_dir());

    match mode {
        "arch" => build(&workspace, &ArchBuilder),
        "alpine" => build(&workspace, &AlpineBuilder::new(&config.alpine_tarball_url)),
        "clean" => clean(&workspace),
        _ => bail!(usage()),
    }
}

fn build(workspace: &Workspace, builder: &dyn RootfsBuilder) -> Result<()> {
    check_required_tools(builder.required_tools())?;
    workspace.prepare()?;
    builder.build(workspace.dir(), &HttpFetcher::new())?;
    println!(
        "[{}] rootfs ready at '{}'",
        builder.name(),
        workspace.dir().display()
    );
    Ok(())
}

fn clean(workspace: &Workspace) -> Result<()> {
    match workspace.destroy()? {
        CleanOutcome::Removed => println!("removed '{}'", workspace.dir().display()),
        CleanOutcome::NothingToClean => {
            println!("warning: there is no need to run clean");
        }
    }
    Ok(())
}
