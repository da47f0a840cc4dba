use std::fs;
use std::io::{self, Read};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::render::TreeNodeConvert;
use crate::script::build_session;
use crate::session::Session;
use crate::traversal::TraversalKind;
use crate::view::ViewKind;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Traverse { kind, script }) => _traverse(*kind, script.as_deref()),
        Some(Commands::View { kind, script }) => _view(*kind, script.as_deref()),
        Some(Commands::Show { script }) => _show(script.as_deref()),
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => Ok(()),
    }
}

/// Reads the edit script from a file, or from stdin when no path is given.
fn read_script(script: Option<&Path>) -> CliResult<String> {
    match script {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut content = String::new();
            io::stdin().read_to_string(&mut content)?;
            Ok(content)
        }
    }
}

fn load_session(script: Option<&Path>) -> CliResult<Session> {
    let content = read_script(script)?;
    Ok(build_session(&content)?)
}

#[instrument]
fn _traverse(kind: TraversalKind, script: Option<&Path>) -> CliResult<()> {
    debug!("kind: {}, script: {:?}", kind, script);
    let mut session = load_session(script)?;
    session.select_traversal(kind);
    output::info(&session.traversal_text()?);
    Ok(())
}

#[instrument]
fn _view(kind: ViewKind, script: Option<&Path>) -> CliResult<()> {
    debug!("kind: {}, script: {:?}", kind, script);
    let mut session = load_session(script)?;
    session.select_view(kind);
    output::info(&session.view_text());
    Ok(())
}

#[instrument]
fn _show(script: Option<&Path>) -> CliResult<()> {
    let session = load_session(script)?;

    output::header("Presentation tree");
    output::info(&session.tree().to_tree_string());

    if let Some(binary) = session.tree().to_binary() {
        output::header("Binary tree");
        output::info(&binary.to_tree_string());
    }
    Ok(())
}

fn _completion(shell: clap_complete::Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
